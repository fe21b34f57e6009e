use crate::{
    config::Config,
    constants::DIETARY_COACHING_PATH,
    errors::{RaseedError, RaseedResult},
    logging::log_api_call,
    models::ApiCallLog,
};
use chrono::Utc;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

#[derive(Debug, Serialize)]
struct CoachingRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
struct CoachingResponse {
    response: String,
}

/// Client for the backend's dietary-coaching endpoint.
#[derive(Debug, Clone)]
pub struct CoachingClient {
    http: Client,
    base_url: String,
}

impl CoachingClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> RaseedResult<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &Config) -> RaseedResult<Self> {
        Self::new(config.api_base_url.clone(), config.request_timeout())
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            DIETARY_COACHING_PATH
        )
    }

    /// Sends one query. A single attempt: transport errors, non-success
    /// statuses and malformed bodies all come back as `Err`.
    pub async fn ask(&self, query: &str) -> RaseedResult<String> {
        let endpoint = self.endpoint();
        let start_time = Instant::now();

        let result = self
            .http
            .post(&endpoint)
            .json(&CoachingRequest { query })
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                self.record(&endpoint, 0, start_time);
                return Err(RaseedError::api_error(format!("Request failed: {}", e)));
            }
        };

        let status = response.status();
        self.record(&endpoint, status.as_u16(), start_time);

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(RaseedError::api_error(format!(
                "API returned error: {} - {}",
                status, error_text
            )));
        }

        let body: CoachingResponse = response
            .json()
            .await
            .map_err(|e| RaseedError::api_error(format!("Failed to parse API response: {}", e)))?;

        Ok(body.response)
    }

    fn record(&self, endpoint: &str, status: u16, start_time: Instant) {
        log_api_call(&ApiCallLog {
            timestamp: Utc::now(),
            endpoint: endpoint.to_string(),
            request_summary: "dietary_coaching".to_string(),
            response_status: status,
            response_time_ms: start_time.elapsed().as_millis(),
        });
    }
}
