use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// National Weather Service API Models
// ============================================================================

/// Active alerts for a region. A payload without `features` decodes as empty.
#[derive(Debug, Default, Deserialize)]
pub struct AlertResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub features: Vec<AlertFeature>,
}

/// One alert. A missing or null `properties` renders as an empty alert.
#[derive(Debug, Default, Deserialize)]
pub struct AlertFeature {
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: AlertProperties,
}

/// Alert text as published; any field may be absent.
#[derive(Debug, Default, Deserialize)]
pub struct AlertProperties {
    pub event: Option<String>,
    #[serde(rename = "areaDesc")]
    pub area_desc: Option<String>,
    pub headline: Option<String>,
    pub description: Option<String>,
}

/// Grid metadata resolved from a `/points` lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLocation {
    pub office: String,
    pub grid_x: i32,
    pub grid_y: i32,
}

/// Gridpoint forecast. Unlike alerts, `properties` is required.
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub properties: ForecastProperties,
}

/// Periods in the order the source returned them.
#[derive(Debug, Default, Deserialize)]
pub struct ForecastProperties {
    #[serde(default, deserialize_with = "null_as_default")]
    pub periods: Vec<ForecastPeriod>,
}

/// One forecast period; text fields that are missing or null read as empty.
#[derive(Debug, Default, Deserialize)]
pub struct ForecastPeriod {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub temperature: Option<i32>,
    #[serde(rename = "temperatureUnit", default, deserialize_with = "null_as_default")]
    pub temperature_unit: String,
    #[serde(rename = "windSpeed", default, deserialize_with = "null_as_default")]
    pub wind_speed: String,
    #[serde(rename = "windDirection", default, deserialize_with = "null_as_default")]
    pub wind_direction: String,
    #[serde(rename = "detailedForecast", default, deserialize_with = "null_as_default")]
    pub detailed_forecast: String,
}

/// Reads an explicit JSON `null` as the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetAlertsRequest {
    /// Two-letter US state or territory code (e.g. CA, NY)
    pub state: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetForecastRequest {
    /// Latitude of the location
    pub latitude: f64,
    /// Longitude of the location
    pub longitude: f64,
}
