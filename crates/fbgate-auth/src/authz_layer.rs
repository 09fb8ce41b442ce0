use axum::{
    extract::Request,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use fbgate_core::{Error, ACCESS_TOKEN_COOKIE};
use futures::future::BoxFuture;
use tower::{Layer, Service};

use crate::Authenticator;

#[derive(Clone)]
pub struct FacebookAuthLayer {
    authn: Authenticator,
    redirect: bool,
}

#[derive(Clone)]
pub struct FacebookAuthMiddleware<S> {
    inner: S,
    authn: Authenticator,
    redirect: bool,
}

impl FacebookAuthLayer {
    pub fn new(authn: Authenticator, redirect: bool) -> Self {
        Self { authn, redirect }
    }
}

impl<S> Layer<S> for FacebookAuthLayer {
    type Service = FacebookAuthMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        FacebookAuthMiddleware {
            inner,
            authn: self.authn.clone(),
            redirect: self.redirect,
        }
    }
}

impl<S> Service<Request> for FacebookAuthMiddleware<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn call(&mut self, mut req: Request) -> Self::Future {
        // the instance polled ready must serve this request
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        let authn = self.authn.clone();
        let redirect = self.redirect;

        Box::pin(async move {
            let jar = CookieJar::from_headers(req.headers());
            let access_token = jar.get(ACCESS_TOKEN_COOKIE).map(|cookie| cookie.value());

            match authn.authorize(access_token).await {
                Ok(user_id) => {
                    tracing::debug!(user_id = %user_id, "request authorized");
                    req.extensions_mut().insert(user_id);
                    inner.call(req).await
                }
                Err(Error::Unauthorized(reason)) => {
                    tracing::warn!(reason = %reason, uri = %req.uri(), "unauthenticated request");
                    if redirect {
                        Ok(authn.redirect_to_login())
                    } else {
                        Ok(Error::Unauthorized(reason).into_response())
                    }
                }
                Err(err) => {
                    if let Error::Forbidden(reason) = &err {
                        tracing::warn!(reason = %reason, uri = %req.uri(), "forbidden request");
                    }
                    Ok(err.into_response())
                }
            }
        })
    }

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }
}
