use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use fbgate_core::{Error, FacebookUserId, FatalError};
use http::request::Parts;

/// The user attached by [`crate::FacebookAuthLayer`].
pub struct FacebookUser(pub FacebookUserId);

impl<S> FromRequestParts<S> for FacebookUser
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts.extensions.get::<FacebookUserId>().ok_or_else(|| {
            tracing::error!("facebook auth middleware not found");
            FatalError::MiddlewareMissing
        })?;
        Ok(Self(user_id.clone()))
    }
}

impl<S> OptionalFromRequestParts<S> for FacebookUser
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Option<Self>, Self::Rejection> {
        Ok(parts.extensions.get::<FacebookUserId>().cloned().map(Self))
    }
}
