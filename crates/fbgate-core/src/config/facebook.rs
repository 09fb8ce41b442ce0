use redact::Secret;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

pub const DEFAULT_GRAPH_URL: &str = "https://graph.facebook.com";
pub const DEFAULT_GRAPH_VERSION: &str = "v2.10";
pub const DEFAULT_GRAPH_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FacebookConfig {
    pub app_id: String,
    #[serde(serialize_with = "redact::serde::redact_secret")]
    pub app_secret: Secret<String>,
    /// Where unauthenticated users are sent, usually the Facebook login dialog.
    pub login_uri: String,
    /// Must match the redirect URI registered for the Facebook app. Its path
    /// is where the login-success endpoint is mounted.
    pub redirect_uri: String,
    #[serde(default)]
    pub graph: GraphConfig,
}

impl FacebookConfig {
    pub fn new(
        app_id: impl Into<String>,
        app_secret: impl Into<String>,
        login_uri: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            app_secret: Secret::new(app_secret.into()),
            login_uri: login_uri.into(),
            redirect_uri: redirect_uri.into(),
            graph: GraphConfig::default(),
        }
    }

    pub fn with_graph(mut self, graph: GraphConfig) -> Self {
        self.graph = graph;
        self
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GraphConfig {
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl GraphConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            version: default_version(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_GRAPH_URL).expect("default graph url is valid")
}

fn default_version() -> String {
    DEFAULT_GRAPH_VERSION.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_GRAPH_TIMEOUT_SECS
}
