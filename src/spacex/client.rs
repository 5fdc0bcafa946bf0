// SpaceX API HTTP client.
// Builds the reqwest client from config and turns non-success responses into errors.

use reqwest::{
    Client, Response,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};
use tracing::debug;

use crate::config::Config;
use crate::error::NetworkError;

/// Client for the public SpaceX REST API. No authentication required.
pub struct SpaceXClient {
    client: Client,
    base_url: String,
}

impl SpaceXClient {
    pub fn new(config: &Config) -> Result<Self, NetworkError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_str(&config.user_agent)?);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
        })
    }

    /// Wrap an already configured reqwest client.
    #[cfg(test)]
    pub(crate) fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub(crate) fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Make a GET request to the API.
    pub async fn get(&self, endpoint: &str) -> Result<Response, NetworkError> {
        let url = self.url(endpoint);
        debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;
        check_response(response).await
    }
}

/// Check response status and convert errors.
async fn check_response(response: Response) -> Result<Response, NetworkError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(NetworkError::from_status(status, &body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_endpoint() {
        let config = Config::default()
            .with_api_url("https://api.spacexdata.com/v5/")
            .unwrap();
        let client = SpaceXClient::new(&config).unwrap();

        assert_eq!(
            client.url("/launches"),
            "https://api.spacexdata.com/v5/launches"
        );
    }

    #[test]
    fn test_invalid_user_agent_is_rejected() {
        let config = Config {
            user_agent: "launchpad\n0.1".to_string(),
            ..Config::default()
        };

        let err = SpaceXClient::new(&config).err().unwrap();
        assert!(matches!(err, NetworkError::UserAgent(_)));
    }
}
