use fbgate_core::{
    AccessTokenResponse, DebugTokenResponse, Error, FacebookConfig, TokenIntrospection,
};
use redact::Secret;
use serde::de::DeserializeOwned;
use url::Url;

/// Client for the two Graph API endpoints used by the login flow.
#[derive(Clone)]
pub struct GraphClient {
    client: reqwest::Client,
    base_url: Url,
    version: String,
    app_id: String,
    app_secret: Secret<String>,
    redirect_uri: String,
}

impl GraphClient {
    pub fn new(config: &FacebookConfig) -> Result<Self, Error> {
        let client = reqwest::ClientBuilder::new()
            .timeout(config.graph.timeout())
            .build()?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: reqwest::Client, config: &FacebookConfig) -> Self {
        Self {
            client,
            base_url: config.graph.base_url.clone(),
            version: config.graph.version.clone(),
            app_id: config.app_id.clone(),
            app_secret: config.app_secret.clone(),
            redirect_uri: config.redirect_uri.clone(),
        }
    }

    pub fn access_token_url(&self, code: &str) -> Result<Url, Error> {
        let mut url = self.endpoint(&[self.version.as_str(), "oauth", "access_token"])?;
        url.query_pairs_mut()
            .append_pair("client_id", &self.app_id)
            .append_pair("redirect_uri", &self.redirect_uri)
            .append_pair("client_secret", self.app_secret.expose_secret())
            .append_pair("code", code);
        Ok(url)
    }

    pub fn debug_token_url(&self, input_token: &str) -> Result<Url, Error> {
        let app_token = format!("{}|{}", self.app_id, self.app_secret.expose_secret());
        let mut url = self.endpoint(&["debug_token"])?;
        url.query_pairs_mut()
            .append_pair("input_token", input_token)
            .append_pair("access_token", &app_token);
        Ok(url)
    }

    /// Exchanges an authorization code from the login dialog for an access token.
    pub async fn exchange_code(&self, code: &str) -> Result<AccessTokenResponse, Error> {
        let url = self.access_token_url(code)?;
        self.get_json(url).await
    }

    /// Asks Facebook whether `input_token` is valid, and for whom.
    pub async fn debug_token(&self, input_token: &str) -> Result<TokenIntrospection, Error> {
        let url = self.debug_token_url(input_token)?;
        let response: DebugTokenResponse = self.get_json(url).await?;
        Ok(response.data)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    // The status code is ignored: Facebook reports failures in the body, and
    // a body of the wrong shape fails to deserialize.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        let body = self
            .client
            .get(url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?
            .text()
            .await
            .map_err(reqwest::Error::without_url)?;
        Ok(serde_json::from_str(&body)?)
    }
}
