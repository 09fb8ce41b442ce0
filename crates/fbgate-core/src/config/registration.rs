use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Facebook user ids allowed past the authorization middleware.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RegistrationConfig {
    #[serde(default)]
    pub users: HashSet<String>,
}
