use axum::{
    response::{IntoResponse, Response},
    routing::get,
    Extension, Router,
};
use fbgate_core::{
    Error, Error401, Error403, FacebookConfig, FacebookUserId, FatalError, RegistrationCheck,
};
use http::{header, StatusCode};
use std::{ops::Deref, sync::Arc};
use url::Url;

use crate::{login_success, FacebookAuthLayer, GraphClient};

/// Facebook login helper: owns the app configuration, the Graph API client
/// and the registration check. Cheap to clone.
#[derive(Clone)]
pub struct Authenticator(pub(crate) Arc<InnerAuthenticator>);

impl Deref for Authenticator {
    type Target = InnerAuthenticator;

    fn deref(&self) -> &Self::Target {
        Arc::as_ref(&self.0)
    }
}

pub struct InnerAuthenticator {
    pub(crate) config: FacebookConfig,
    pub(crate) graph: GraphClient,
    pub(crate) registration: Box<dyn RegistrationCheck>,
}

impl Authenticator {
    pub fn new(config: FacebookConfig, registration: impl RegistrationCheck) -> Result<Self, Error> {
        let graph = GraphClient::new(&config)?;
        Ok(Self::with_graph(config, graph, registration))
    }

    pub fn with_graph(
        config: FacebookConfig,
        graph: GraphClient,
        registration: impl RegistrationCheck,
    ) -> Self {
        Authenticator(Arc::new(InnerAuthenticator {
            config,
            graph,
            registration: Box::new(registration),
        }))
    }

    pub fn config(&self) -> &FacebookConfig {
        &self.config
    }

    /// Path component of the redirect URI, where Facebook sends the user back.
    /// The URI must be absolute, as Facebook requires.
    pub fn redirect_path(&self) -> Result<String, Error> {
        let redirect_uri = &self.config.redirect_uri;
        let url = Url::parse(redirect_uri)
            .map_err(|_| Error::InvalidRedirectUri(redirect_uri.clone()))?;
        if url.cannot_be_a_base() {
            return Err(Error::InvalidRedirectUri(redirect_uri.clone()));
        }
        Ok(url.path().to_string())
    }

    /// Router serving the login-success endpoint on the redirect URI path.
    pub fn login_success_router<S>(&self) -> Result<Router<S>, Error>
    where
        S: Clone + Send + Sync + 'static,
    {
        let path = self.redirect_path()?;
        tracing::info!(path = %path, "login success endpoint registered");
        Ok(Router::new()
            .route(&path, get(login_success::handler))
            .layer(Extension(self.clone())))
    }

    /// Authorization middleware. With `redirect`, unauthenticated requests
    /// are sent to the login URI instead of getting a 401.
    pub fn layer(&self, redirect: bool) -> FacebookAuthLayer {
        FacebookAuthLayer::new(self.clone(), redirect)
    }

    /// Resolves the user behind an access token and checks registration.
    pub async fn authorize(&self, access_token: Option<&str>) -> Result<FacebookUserId, Error> {
        let access_token = access_token
            .filter(|token| !token.is_empty())
            .ok_or(Error401::MissingAccessToken)?;

        let introspection = self.graph.debug_token(access_token).await?;
        if !introspection.is_valid {
            return Err(Error401::InvalidAccessToken.into());
        }
        let user_id = introspection.user_id.ok_or(FatalError::MissingUserId)?;
        if !self.registration.is_registered(&user_id) {
            return Err(Error403::UserNotRegistered { user_id }.into());
        }
        Ok(FacebookUserId(user_id))
    }

    pub(crate) fn redirect_to_login(&self) -> Response {
        found(&self.config.login_uri)
    }
}

pub(crate) fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
