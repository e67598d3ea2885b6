//! The weather data source seam and its National Weather Service implementation.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::WeatherConfig;
use crate::error::WeatherError;
use crate::models::{AlertResponse, ForecastResponse, GridLocation};

/// Remote lookups the tools depend on. Each call is one network round trip.
#[async_trait]
pub trait WeatherDataSource: Send + Sync {
    /// Active alerts for a state or territory code
    async fn alerts_by_region(&self, region: &str) -> Result<AlertResponse, WeatherError>;

    /// Raw `/points` payload for a coordinate pair
    async fn point_metadata(&self, latitude: f64, longitude: f64) -> Result<Value, WeatherError>;

    /// Forecast periods for a resolved grid cell
    async fn forecast_by_grid(&self, grid: &GridLocation) -> Result<ForecastResponse, WeatherError>;
}

/// HTTP client for api.weather.gov
#[derive(Debug, Clone)]
pub struct NwsClient {
    client: Client,
    base: Url,
}

impl NwsClient {
    /// Creates a client with the configured user agent, timeout and base URL
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;

        let base = Url::parse(&config.api_base)
            .with_context(|| format!("invalid NWS API base URL '{}'", config.api_base))?;
        if base.cannot_be_a_base() {
            anyhow::bail!("NWS API base URL '{}' cannot carry a path", config.api_base);
        }

        Ok(Self { client, base })
    }

    /// Appends path segments to the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Result<Url, WeatherError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| WeatherError::Transport(format!("cannot build a request URL from '{}'", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Makes an HTTP GET request and deserializes the JSON response
    async fn make_request<T: DeserializeOwned>(&self, url: Url) -> Result<T, WeatherError> {
        tracing::debug!(%url, "Requesting NWS resource");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/geo+json")
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(WeatherError::NotFound);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WeatherError::Status {
                status: status.as_u16(),
                message: upstream_message(status, &body),
            });
        }

        let data = response.json::<T>().await?;
        Ok(data)
    }
}

#[async_trait]
impl WeatherDataSource for NwsClient {
    async fn alerts_by_region(&self, region: &str) -> Result<AlertResponse, WeatherError> {
        let url = self.endpoint(&["alerts", "active", "area", region])?;
        self.make_request(url).await
    }

    async fn point_metadata(&self, latitude: f64, longitude: f64) -> Result<Value, WeatherError> {
        let point = format!("{latitude},{longitude}");
        let url = self.endpoint(&["points", &point])?;
        self.make_request(url).await
    }

    async fn forecast_by_grid(&self, grid: &GridLocation) -> Result<ForecastResponse, WeatherError> {
        let cell = format!("{},{}", grid.grid_x, grid.grid_y);
        let url = self.endpoint(&["gridpoints", &grid.office, &cell, "forecast"])?;
        self.make_request(url).await
    }
}

/// Picks a readable message out of an error body. NWS answers with
/// `application/problem+json`, so prefer its `detail` then `title`.
fn upstream_message(status: StatusCode, body: &str) -> String {
    if let Ok(problem) = serde_json::from_str::<Value>(body) {
        for key in ["detail", "title"] {
            if let Some(text) = problem.get(key).and_then(Value::as_str) {
                if !text.trim().is_empty() {
                    return text.trim().to_string();
                }
            }
        }
    }

    if body.trim().is_empty() {
        status.canonical_reason().unwrap_or("unknown error").to_string()
    } else {
        truncate_body(body.trim())
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
