use crate::constants::BLOCK_SEPARATOR;
use crate::models::{AlertFeature, ForecastPeriod};

/// Renders each item through `template` and joins the blocks with the separator.
///
/// Order is preserved and nothing is filtered. Callers substitute their own
/// message for an empty input.
pub fn format_items<T, F>(items: &[T], template: F) -> String
where
    F: Fn(&T) -> String,
{
    items
        .iter()
        .map(template)
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

/// Formats a single weather alert
pub fn format_alert(feature: &AlertFeature) -> String {
    let props = &feature.properties;
    format!(
        "Event: {}\nArea: {}\nHeadline: {}\nDescription: {}\n",
        props.event.as_deref().unwrap_or_default(),
        props.area_desc.as_deref().unwrap_or_default(),
        props.headline.as_deref().unwrap_or_default(),
        props.description.as_deref().unwrap_or_default(),
    )
}

/// Formats a single forecast period
pub fn format_period(period: &ForecastPeriod) -> String {
    let temperature = period
        .temperature
        .map(|t| t.to_string())
        .unwrap_or_default();
    format!(
        "{}:\nTemperature: {}{}\nWind: {} {}\nForecast: {}\n",
        period.name,
        temperature,
        period.temperature_unit,
        period.wind_speed,
        period.wind_direction,
        period.detailed_forecast
    )
}
