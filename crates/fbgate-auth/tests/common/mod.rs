#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    routing::get,
    Router,
};
use fbgate_auth::{Authenticator, FacebookUser};
use fbgate_core::{FacebookConfig, GraphConfig};
use http_body_util::BodyExt;
use tower::ServiceExt;
use url::Url;
use wiremock::MockServer;

pub const APP_ID: &str = "123";
pub const APP_SECRET: &str = "shh";
pub const LOGIN_URI: &str = "https://www.facebook.com/v2.10/dialog/oauth?client_id=123";
pub const REDIRECT_URI: &str = "https://example.com/auth/facebook";
pub const REGISTERED_USER: &str = "1001";

pub fn config(graph: &MockServer) -> FacebookConfig {
    FacebookConfig::new(APP_ID, APP_SECRET, LOGIN_URI, REDIRECT_URI).with_graph(GraphConfig {
        base_url: Url::parse(&graph.uri()).unwrap(),
        timeout_secs: 1,
        ..GraphConfig::default()
    })
}

pub fn authenticator(graph: &MockServer) -> Authenticator {
    Authenticator::new(config(graph), |user_id: &str| user_id == REGISTERED_USER).unwrap()
}

/// Login endpoint plus one protected route answering with the attached user id.
pub fn app(authn: &Authenticator, redirect: bool) -> Router {
    Router::new()
        .route(
            "/protected",
            get(|FacebookUser(user_id): FacebookUser| async move { user_id.to_string() }),
        )
        .route_layer(authn.layer(redirect))
        .merge(authn.login_success_router::<()>().unwrap())
}

pub async fn get_uri(app: Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let mut request = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    app.oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub fn location(response: &Response<Body>) -> &str {
    assert_eq!(response.status(), StatusCode::FOUND);
    response
        .headers()
        .get(header::LOCATION)
        .expect("location header")
        .to_str()
        .unwrap()
}

pub fn set_cookie(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .map(|value| value.to_str().unwrap())
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
