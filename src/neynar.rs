// NEYNAR CLIENT
// Publishes reply casts through the Neynar v2 API.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::info;

use crate::error::ServiceError;

const NEYNAR_API: &str = "https://api.neynar.com";

#[async_trait]
pub trait CastPublisher: Send + Sync {
    /// Posts a reply cast under `parent` with one embedded URL.
    async fn publish_cast(
        &self,
        signer_uuid: &str,
        parent: &str,
        text: &str,
        embed_url: &str,
    ) -> Result<(), ServiceError>;
}

pub struct NeynarClient {
    http: Client,
    api_key: String,
}

impl NeynarClient {
    pub fn new(api_key: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl CastPublisher for NeynarClient {
    async fn publish_cast(
        &self,
        signer_uuid: &str,
        parent: &str,
        text: &str,
        embed_url: &str,
    ) -> Result<(), ServiceError> {
        let body = json!({
            "signer_uuid": signer_uuid,
            "parent": parent,
            "text": text,
            "embeds": [{ "url": embed_url }],
        });

        info!("[NEYNAR] Publishing cast under {}", parent);

        let response = self
            .http
            .post(format!("{}/v2/farcaster/cast", NEYNAR_API))
            .header("x-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ServiceError::Publish(format!("Cast request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let detail = response.text().await.unwrap_or_default();
            Err(ServiceError::Publish(format!(
                "Cast rejected ({}): {}",
                status, detail
            )))
        }
    }
}
