mod authenticator;
mod authz_layer;
mod authz_static;
mod extract;
mod graph_client;
mod login_success;

pub use authenticator::*;
pub use authz_layer::*;
pub use authz_static::*;
pub use extract::*;
pub use graph_client::*;
