/// User agent string for HTTP requests
pub const USER_AGENT: &str = concat!("mcp-nws-weather-server/", env!("CARGO_PKG_VERSION"));

/// National Weather Service API base URL
pub const NWS_API_BASE: &str = "https://api.weather.gov";

/// Per-request timeout when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Line placed between formatted alert or forecast blocks
pub const BLOCK_SEPARATOR: &str = "\n---\n";

pub const NO_ALERTS_MESSAGE: &str = "No active alerts for this state.";

pub const NO_FORECAST_MESSAGE: &str = "No forecast data available for this location.";
