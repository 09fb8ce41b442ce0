use axum::{body::Body, response::IntoResponse};
use http::{Response, StatusCode};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    // Normal Http Errors
    #[error("Unauthorized: {0}")]
    Unauthorized(#[from] Error401),

    #[error("Forbidden: {0}")]
    Forbidden(#[from] Error403),

    // Configuration errors, raised while building routers
    #[error("Could not extract the path from the redirect URI {0}")]
    InvalidRedirectUri(String),

    // Special Errors, expected 500
    #[error("Fatal error: {0}")]
    Fatal(#[from] FatalError),

    #[error("Reqwest error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("Json error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Url error: {0}")]
    UrlError(#[from] url::ParseError),
}

#[derive(Debug, thiserror::Error)]
pub enum Error401 {
    #[error("Access token cookie missing")]
    MissingAccessToken,

    #[error("Access token rejected by token introspection")]
    InvalidAccessToken,
}

#[derive(Debug, thiserror::Error)]
pub enum Error403 {
    #[error("User {user_id} is not registered")]
    UserNotRegistered { user_id: String },
}

#[derive(Debug, thiserror::Error)]
pub enum FatalError {
    #[error("Token introspection marked the token valid without a user id")]
    MissingUserId,

    #[error("Authentication middleware not installed")]
    MiddlewareMissing,
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response<Body> {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = ?self, "request failed");
        }
        let mut response = Response::new(Body::empty());
        *response.status_mut() = status;
        response
    }
}
