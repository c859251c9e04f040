use crate::{
    endpoints::{self, EndpointError},
    Credentials,
};
use reqwest::Client;
use serde_json::Value;
use url::Url;

/// The remote operations the shell depends on.
#[async_trait::async_trait]
pub trait AuthApi: Send + Sync {
    /// Authenticate with the server.
    async fn login(
        &self,
        credentials: &Credentials,
    ) -> Result<Value, EndpointError>;

    /// Fetch the profile of whoever the server thinks is logged in.
    async fn profile(&self) -> Result<Value, EndpointError>;
}

/// An [`AuthApi`] which talks to a real server over HTTP.
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    client: Client,
    base_url: Url,
}

impl HttpAuthApi {
    /// Create a new [`HttpAuthApi`], with a client that remembers cookies so
    /// the session established by `login` is reused by `profile`.
    pub fn new(base_url: Url) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(crate::DEFAULT_USER_AGENT)
            .cookie_store(true)
            .build()?;

        Ok(HttpAuthApi::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: Url) -> Self {
        HttpAuthApi { client, base_url }
    }

    pub fn base_url(&self) -> &Url { &self.base_url }
}

#[async_trait::async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(
        &self,
        credentials: &Credentials,
    ) -> Result<Value, EndpointError> {
        endpoints::login(&self.client, &self.base_url, credentials).await
    }

    async fn profile(&self) -> Result<Value, EndpointError> {
        endpoints::profile(&self.client, &self.base_url).await
    }
}
