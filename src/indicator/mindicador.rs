//! HTTP client for the public mindicador.cl API.
//!
//! One unauthenticated `GET {base_url}/api`, no query string. The reqwest
//! client keeps its default timeouts.

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::indicator::{IndicatorError, IndicatorReading, IndicatorSource, IndicatorsResponse};

pub const DEFAULT_BASE_URL: &str = "https://mindicador.cl";
const INDICATORS_PATH: &str = "api";

pub struct MindicadorClient {
    base_url: String,
    client: reqwest::Client,
}

impl MindicadorClient {
    pub fn new(base_url: Option<String>) -> Self {
        let final_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            base_url: final_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/{}", self.base_url, INDICATORS_PATH)
    }
}

impl Default for MindicadorClient {
    fn default() -> Self {
        Self::new(None)
    }
}

#[async_trait]
impl IndicatorSource for MindicadorClient {
    fn name(&self) -> &str {
        "mindicador"
    }

    async fn fetch_indicators(&self) -> Result<IndicatorReading, IndicatorError> {
        let url = self.endpoint();
        info!("Fetching indicators from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| IndicatorError::Network(e.to_string()))?;

        debug!("mindicador response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("mindicador API error: {} - {}", status, err_body);
            return Err(IndicatorError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| IndicatorError::Network(e.to_string()))?;

        let parsed: IndicatorsResponse =
            serde_json::from_str(&body).map_err(|e| IndicatorError::Parse(e.to_string()))?;

        debug!("Dollar value: {}", parsed.dolar.valor);
        Ok(parsed.into())
    }
}
