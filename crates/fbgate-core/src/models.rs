use serde::Deserialize;
use std::fmt::Display;

pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";

/// Body of the Graph API `oauth/access_token` exchange. Other fields
/// (`token_type`, `expires_in`) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessTokenResponse {
    pub access_token: String,
}

/// Envelope of the Graph API `debug_token` response.
#[derive(Debug, Clone, Deserialize)]
pub struct DebugTokenResponse {
    pub data: TokenIntrospection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenIntrospection {
    #[serde(default)]
    pub is_valid: bool,
    pub user_id: Option<String>,
}

/// Facebook user id resolved by token introspection, attached to the request
/// extensions once the user passed the registration check.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FacebookUserId(pub String);

impl FacebookUserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for FacebookUserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
