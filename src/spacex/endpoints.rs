// SpaceX API endpoint functions.
// Typed fetch of the launch list, exposed to the service as a launch source.

use async_trait::async_trait;

use crate::error::NetworkError;
use crate::model::LaunchRecord;
use crate::service::LaunchSource;

use super::client::SpaceXClient;
use super::types::decode_launches;

impl SpaceXClient {
    /// Get every launch, past and upcoming.
    pub async fn get_all_launches(&self) -> Result<Vec<LaunchRecord>, NetworkError> {
        let response = self.get("/launches").await?;
        let body = response.text().await?;
        let launches = decode_launches(&body)?;
        tracing::debug!(count = launches.len(), "decoded launches");
        Ok(launches)
    }
}

#[async_trait]
impl LaunchSource for SpaceXClient {
    async fn fetch_all(&self) -> Result<Vec<LaunchRecord>, NetworkError> {
        self.get_all_launches().await
    }
}
