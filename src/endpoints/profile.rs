use super::EndpointError;
use reqwest::Client;
use serde_json::Value;
use url::Url;

/// Fetch the logged in user's profile.
///
/// There are no parameters, the server identifies the user from the session
/// cookie set by [`super::login()`].
pub async fn profile(
    client: &Client,
    base_url: &Url,
) -> Result<Value, EndpointError> {
    let url = super::endpoint_url(base_url, "profile")?;

    log::debug!("Sending a profile request to {}", url);

    super::send(client.get(url)).await
}
