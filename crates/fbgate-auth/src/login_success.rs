use axum::{
    extract::RawQuery,
    response::{IntoResponse, Response},
    Extension,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use fbgate_core::{Error, ACCESS_TOKEN_COOKIE};
use url::form_urlencoded;

use crate::{authenticator::found, Authenticator};

/// `code` and `token` from the query string. Repeated keys keep their first
/// non-empty value; empty values count as absent.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Params {
    code: Option<String>,
    token: Option<String>,
}

impl Params {
    pub(crate) fn parse(query: Option<&str>) -> Self {
        let mut params = Self::default();
        let pairs = form_urlencoded::parse(query.unwrap_or_default().as_bytes());
        for (key, value) in pairs {
            if value.is_empty() {
                continue;
            }
            let slot = match key.as_ref() {
                "code" => &mut params.code,
                "token" => &mut params.token,
                _ => continue,
            };
            slot.get_or_insert_with(|| value.into_owned());
        }
        params
    }
}

pub(crate) async fn handler(
    Extension(authn): Extension<Authenticator>,
    RawQuery(query): RawQuery,
    jar: CookieJar,
) -> Result<Response, Error> {
    let params = Params::parse(query.as_deref());
    if let Some(code) = params.code {
        let token = authn.graph.exchange_code(&code).await?;
        tracing::debug!("authorization code exchanged for access token");
        return Ok(with_access_token(jar, token.access_token));
    }
    if let Some(token) = params.token {
        tracing::debug!("access token passed directly");
        return Ok(with_access_token(jar, token));
    }
    tracing::debug!("no code or token, redirecting to login");
    Ok(authn.redirect_to_login())
}

fn with_access_token(jar: CookieJar, access_token: String) -> Response {
    let cookie = Cookie::build((ACCESS_TOKEN_COOKIE, access_token)).path("/");
    (jar.add(cookie), found("/")).into_response()
}
