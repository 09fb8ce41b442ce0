pub mod application;
pub mod facebook;
pub mod registration;
pub mod server;

use serde::{Deserialize, Serialize};

pub use application::ApplicationConfig;
pub use facebook::{FacebookConfig, GraphConfig};
pub use registration::RegistrationConfig;
pub use server::ServerConfig;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub application: ApplicationConfig,
    pub server: ServerConfig,
    pub facebook: FacebookConfig,
    #[serde(default)]
    pub registration: RegistrationConfig,
}
