//! Coordinate to grid-cell resolution.

use serde_json::Value;

use crate::error::WeatherError;
use crate::models::GridLocation;
use crate::source::WeatherDataSource;

/// Resolves coordinates to the forecast office and grid cell covering them.
///
/// Issues exactly one point-metadata request. Coordinates are passed through
/// unchecked; the data source decides what it covers.
pub async fn resolve(
    source: &dyn WeatherDataSource,
    latitude: f64,
    longitude: f64,
) -> Result<GridLocation, WeatherError> {
    let payload = source.point_metadata(latitude, longitude).await?;
    grid_location_from_points(&payload)
}

/// Extracts a [`GridLocation`] from a `/points` payload
pub fn grid_location_from_points(payload: &Value) -> Result<GridLocation, WeatherError> {
    let properties = payload
        .get("properties")
        .filter(|p| p.is_object())
        .ok_or_else(|| WeatherError::malformed("point metadata has no properties section"))?;

    let office = properties
        .get("gridId")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|office| !office.is_empty())
        .ok_or_else(|| WeatherError::malformed("point metadata has no forecast office (gridId)"))?;

    Ok(GridLocation {
        office: office.to_string(),
        grid_x: grid_index(properties, "gridX")?,
        grid_y: grid_index(properties, "gridY")?,
    })
}

fn grid_index(properties: &Value, key: &str) -> Result<i32, WeatherError> {
    properties
        .get(key)
        .and_then(Value::as_i64)
        .filter(|index| *index >= 0)
        .and_then(|index| i32::try_from(index).ok())
        .ok_or_else(|| WeatherError::malformed(format!("point metadata has no valid {key}")))
}
