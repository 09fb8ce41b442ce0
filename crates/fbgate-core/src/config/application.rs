use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApplicationConfig {
    pub log_filter: Option<String>,
}
