mod config;
mod errors;
mod general;
mod models;

pub use config::*;
pub use errors::*;
pub use general::*;
pub use models::*;
