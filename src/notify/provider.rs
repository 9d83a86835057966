use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::notification::Channel;

/// Receipt returned by the delivery provider on acceptance.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderReceipt {
    pub ok: bool,
    pub provider_id: Option<String>,
}

/// Outbound delivery seam. The real provider sits behind an HTTP relay;
/// the dispatcher only sees this trait.
#[async_trait]
pub trait DeliveryProvider: Send + Sync {
    async fn send(&self, channel: Channel, to: &str, body: &str) -> Result<ProviderReceipt, AppError>;
}

#[derive(Serialize)]
struct RelayRequest<'a> {
    channel: &'a str,
    to: &'a str,
    body: &'a str,
}

/// Sends messages through the SMS/WhatsApp relay endpoint.
#[derive(Debug, Clone)]
pub struct HttpRelayProvider {
    client: reqwest::Client,
    relay_url: String,
    token: Option<String>,
}

impl HttpRelayProvider {
    pub fn new(relay_url: impl Into<String>, token: Option<String>) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .map_err(|err| AppError::Internal(format!("failed to build relay client: {err}")))?;

        Ok(Self {
            client,
            relay_url: relay_url.into(),
            token,
        })
    }
}

#[async_trait]
impl DeliveryProvider for HttpRelayProvider {
    async fn send(&self, channel: Channel, to: &str, body: &str) -> Result<ProviderReceipt, AppError> {
        let mut request = self.client.post(&self.relay_url).json(&RelayRequest {
            channel: channel.label(),
            to,
            body,
        });

        if let Some(token) = &self.token {
            request = request.header(reqwest::header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = request
            .send()
            .await
            .map_err(|err| AppError::Internal(format!("relay request failed: {err}")))?;

        if !response.status().is_success() {
            return Err(AppError::Internal(format!(
                "relay returned {}",
                response.status()
            )));
        }

        let receipt: ProviderReceipt = response
            .json()
            .await
            .map_err(|err| AppError::Internal(format!("invalid relay response: {err}")))?;

        if !receipt.ok {
            return Err(AppError::Internal("relay rejected the message".to_string()));
        }

        Ok(receipt)
    }
}

/// Accepts and drops every message. Used when no relay is configured, so
/// environments without a provider still record dispatch outcomes.
#[derive(Debug, Clone, Default)]
pub struct NullProvider;

#[async_trait]
impl DeliveryProvider for NullProvider {
    async fn send(&self, _channel: Channel, _to: &str, _body: &str) -> Result<ProviderReceipt, AppError> {
        Ok(ProviderReceipt {
            ok: true,
            provider_id: None,
        })
    }
}
