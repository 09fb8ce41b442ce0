mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;
use wiremock::{
    matchers::{any, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

async fn no_graph_calls(graph: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(graph)
        .await;
}

#[tokio::test]
async fn code_is_exchanged_and_stored_as_cookie() {
    let graph = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2.10/oauth/access_token"))
        .and(query_param("client_id", APP_ID))
        .and(query_param("redirect_uri", REDIRECT_URI))
        .and(query_param("client_secret", APP_SECRET))
        .and(query_param("code", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "fb-token",
            "token_type": "bearer",
            "expires_in": 5183944
        })))
        .expect(1)
        .mount(&graph)
        .await;

    let authn = authenticator(&graph);
    let response = get_uri(app(&authn, true), "/auth/facebook?code=abc", None).await;

    assert_eq!(location(&response), "/");
    let cookie = set_cookie(&response).expect("access token cookie");
    assert!(cookie.starts_with("accessToken=fb-token"));
    assert!(cookie.contains("Path=/"));
}

#[tokio::test]
async fn code_wins_over_token() {
    let graph = MockServer::start().await;
    Mock::given(path("/v2.10/oauth/access_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "exchanged"
        })))
        .expect(1)
        .mount(&graph)
        .await;

    let authn = authenticator(&graph);
    let response = get_uri(app(&authn, false), "/auth/facebook?code=abc&token=raw", None).await;

    assert_eq!(location(&response), "/");
    assert!(set_cookie(&response)
        .unwrap()
        .starts_with("accessToken=exchanged"));
}

#[tokio::test]
async fn facebook_error_body_is_a_server_error() {
    let graph = MockServer::start().await;
    Mock::given(path("/v2.10/oauth/access_token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "message": "Invalid verification code format.",
                "type": "OAuthException",
                "code": 100
            }
        })))
        .expect(1)
        .mount(&graph)
        .await;

    let authn = authenticator(&graph);
    let response = get_uri(app(&authn, true), "/auth/facebook?code=bad", None).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(set_cookie(&response).is_none());
    assert!(body_string(response).await.is_empty());
}

#[tokio::test]
async fn malformed_exchange_body_is_a_server_error() {
    let graph = MockServer::start().await;
    Mock::given(path("/v2.10/oauth/access_token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&graph)
        .await;

    let authn = authenticator(&graph);
    let response = get_uri(app(&authn, true), "/auth/facebook?code=abc", None).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn slow_exchange_times_out_as_server_error() {
    let graph = MockServer::start().await;
    Mock::given(path("/v2.10/oauth/access_token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "access_token": "late" }))
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&graph)
        .await;

    let authn = authenticator(&graph);
    let response = get_uri(app(&authn, true), "/auth/facebook?code=abc", None).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn raw_token_is_stored_without_remote_call() {
    let graph = MockServer::start().await;
    no_graph_calls(&graph).await;

    let authn = authenticator(&graph);
    let response = get_uri(app(&authn, true), "/auth/facebook?token=raw-token", None).await;

    assert_eq!(location(&response), "/");
    assert!(set_cookie(&response)
        .unwrap()
        .starts_with("accessToken=raw-token"));
}

#[tokio::test]
async fn no_parameters_redirect_to_login() {
    let graph = MockServer::start().await;
    no_graph_calls(&graph).await;

    let authn = authenticator(&graph);
    for uri in ["/auth/facebook", "/auth/facebook?code=&token="] {
        let response = get_uri(app(&authn, true), uri, None).await;
        assert_eq!(location(&response), LOGIN_URI);
        assert!(set_cookie(&response).is_none());
    }
}

#[tokio::test]
async fn repeated_token_uses_the_first_value() {
    let graph = MockServer::start().await;
    no_graph_calls(&graph).await;

    let authn = authenticator(&graph);
    let response = get_uri(app(&authn, true), "/auth/facebook?token=a&token=b", None).await;

    assert_eq!(location(&response), "/");
    assert!(set_cookie(&response).unwrap().starts_with("accessToken=a;"));
}

#[tokio::test]
async fn repeated_code_exchanges_the_first_value() {
    let graph = MockServer::start().await;
    Mock::given(path("/v2.10/oauth/access_token"))
        .and(query_param("code", "a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "from-first-code"
        })))
        .expect(1)
        .mount(&graph)
        .await;

    let authn = authenticator(&graph);
    let response = get_uri(app(&authn, true), "/auth/facebook?code=a&code=b", None).await;

    assert_eq!(location(&response), "/");
    assert!(set_cookie(&response)
        .unwrap()
        .starts_with("accessToken=from-first-code"));
}
