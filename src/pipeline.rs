//! The alerts and forecast lookups behind the MCP tools.
//!
//! Both functions are total: every failure is classified into text and every
//! empty result becomes a fixed placeholder.

use crate::classifier::{classify, Operation};
use crate::constants::{NO_ALERTS_MESSAGE, NO_FORECAST_MESSAGE};
use crate::formatters::{format_alert, format_items, format_period};
use crate::grid;
use crate::source::WeatherDataSource;

/// Active alerts for a region, rendered as text
pub async fn get_alerts(source: &dyn WeatherDataSource, region: &str) -> String {
    let alerts = match source.alerts_by_region(region).await {
        Ok(alerts) => alerts,
        Err(e) => {
            return classify(
                &e,
                &Operation::Alerts {
                    region: region.to_string(),
                },
            )
        }
    };

    if alerts.features.is_empty() {
        return NO_ALERTS_MESSAGE.to_string();
    }

    tracing::debug!(region, count = alerts.features.len(), "Formatting alerts");
    format_items(&alerts.features, format_alert)
}

/// Forecast for a coordinate pair, rendered as text.
///
/// The forecast request is only made once the grid point has resolved.
pub async fn get_forecast(source: &dyn WeatherDataSource, latitude: f64, longitude: f64) -> String {
    let location = match grid::resolve(source, latitude, longitude).await {
        Ok(location) => location,
        Err(e) => return classify(&e, &Operation::GridPoint { latitude, longitude }),
    };

    tracing::debug!(
        office = %location.office,
        grid_x = location.grid_x,
        grid_y = location.grid_y,
        "Resolved grid point"
    );

    let forecast = match source.forecast_by_grid(&location).await {
        Ok(forecast) => forecast,
        Err(e) => return classify(&e, &Operation::Forecast { latitude, longitude }),
    };

    let periods = forecast.properties.periods;
    if periods.is_empty() {
        return NO_FORECAST_MESSAGE.to_string();
    }

    format_items(&periods, format_period)
}
