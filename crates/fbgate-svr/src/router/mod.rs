use axum::{routing::get, Router};
use fbgate_auth::{Authenticator, StaticRegistry};
use fbgate_core::{Config, Error};
use tower_http::cors::CorsLayer;

use crate::middlewares::trace_layer;

pub mod home;
pub mod me;

/// Application router: pages redirect to the Facebook login when the user is
/// not authenticated, the API answers 401 instead.
pub fn router(config: &Config) -> Result<Router, Error> {
    let registry = StaticRegistry::new(&config.registration);
    let authn = Authenticator::new(config.facebook.clone(), registry)?;

    let pages = Router::new()
        .route("/", get(home::handler))
        .route_layer(authn.layer(true));
    let api = Router::new()
        .route("/api/me", get(me::handler))
        .route_layer(authn.layer(false));

    let router = Router::new()
        .merge(pages)
        .merge(api)
        .merge(authn.login_success_router::<()>()?)
        .layer(trace_layer())
        .layer(CorsLayer::permissive());
    Ok(router)
}
