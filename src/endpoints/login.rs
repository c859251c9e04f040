use super::EndpointError;
use crate::Credentials;
use reqwest::Client;
use serde_json::Value;
use url::Url;

/// Submit the user's credentials to the auth API.
///
/// The response is handed back untouched. Any session cookie it sets is kept
/// by the `client`'s cookie store for later requests.
pub async fn login(
    client: &Client,
    base_url: &Url,
    credentials: &Credentials,
) -> Result<Value, EndpointError> {
    let url = super::endpoint_url(base_url, "login")?;

    log::debug!("Sending a login request to {}", url);
    log::trace!("Payload: {:#?}", credentials);

    super::send(client.post(url).json(credentials)).await
}
