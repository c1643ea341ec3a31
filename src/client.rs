use std::time::Duration;

use anyhow::Context;
use log::{debug, info};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use serde_json::Value;

use crate::error::DispatchError;
use crate::types::{DispatchOutcome, HealthReport, NotificationRequest};

pub struct NotificationClient {
    http: Client,
}

impl NotificationClient {
    pub fn new(timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("failed to build HTTP client")?;
        Ok(Self { http })
    }

    /// Posts one notification. Single attempt; any status the server answers
    /// with is returned as long as the body is JSON.
    pub async fn send(
        &self,
        endpoint: &Url,
        request: &NotificationRequest,
    ) -> Result<DispatchOutcome, DispatchError> {
        info!("Sending notification to {} via {}", request.to, endpoint);

        let response = self
            .http
            .post(endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| DispatchError::from_reqwest(endpoint.as_str(), e))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| DispatchError::from_reqwest(endpoint.as_str(), e))?;
        debug!("{} answered {} with {} bytes", endpoint, status, text.len());

        let body = serde_json::from_str::<Value>(&text).map_err(|e| {
            DispatchError::Other(format!(
                "response from {} (status {}) is not valid JSON: {}",
                endpoint, status, e
            ))
        })?;

        Ok(DispatchOutcome { status, body })
    }

    pub async fn health(&self, url: &Url) -> Result<HealthReport, DispatchError> {
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| DispatchError::from_reqwest(url.as_str(), e))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| DispatchError::from_reqwest(url.as_str(), e))?;
        Ok(HealthReport {
            status,
            body: serde_json::from_str(&text).ok(),
        })
    }
}
