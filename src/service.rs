use anyhow::Result;
use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use std::sync::Arc;

use crate::config::WeatherConfig;
use crate::models::{GetAlertsRequest, GetForecastRequest};
use crate::pipeline;
use crate::source::{NwsClient, WeatherDataSource};

/// Main weather service that handles MCP requests
#[derive(Clone)]
pub struct Weather {
    source: Arc<dyn WeatherDataSource>,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a Weather service backed by the National Weather Service API
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let client = NwsClient::new(config)?;
        Ok(Self::with_source(Arc::new(client)))
    }

    /// Creates a Weather service backed by the given data source
    pub fn with_source(source: Arc<dyn WeatherDataSource>) -> Self {
        Self {
            source,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "nws-weather-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "A weather information service powered by the National Weather Service API. \
                Provides active alerts for US states and forecasts for US locations."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    /// Gets active weather alerts for a US state
    #[tool(description = "Get active weather alerts for a US state. Provide a two-letter state code (e.g., 'CA' for California, 'NY' for New York).")]
    async fn get_alerts(
        &self,
        Parameters(request): Parameters<GetAlertsRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting alerts for state: {}", request.state);

        let text = pipeline::get_alerts(self.source.as_ref(), &request.state).await;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Gets the weather forecast for a US location
    #[tool(description = "Get weather forecast for a US location. Provide latitude and longitude (e.g., latitude: 37.7749, longitude: -122.4194 for San Francisco).")]
    async fn get_forecast(
        &self,
        Parameters(request): Parameters<GetForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting forecast for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        let text =
            pipeline::get_forecast(self.source.as_ref(), request.latitude, request.longitude).await;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}
