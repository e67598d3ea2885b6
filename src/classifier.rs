//! Turns upstream failures into diagnostics an agent can act on.

use std::fmt;

use crate::error::WeatherError;

/// The lookup that failed, with the caller's inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Alerts { region: String },
    GridPoint { latitude: f64, longitude: f64 },
    Forecast { latitude: f64, longitude: f64 },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Alerts { .. } => "fetch alerts",
            Operation::GridPoint { .. } => "resolve grid point",
            Operation::Forecast { .. } => "fetch forecast",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Alerts { region } => write!(f, "{} for region '{}'", self.name(), region),
            Operation::GridPoint { latitude, longitude } | Operation::Forecast { latitude, longitude } => {
                write!(f, "{} for ({}, {})", self.name(), latitude, longitude)
            }
        }
    }
}

/// Maps a failure to a single-line, human-readable diagnostic.
pub fn classify(error: &WeatherError, operation: &Operation) -> String {
    tracing::warn!(operation = %operation, error = ?error, "Weather lookup failed");

    match (error, operation) {
        (WeatherError::NotFound, Operation::Alerts { region }) => format!(
            "Region code '{region}' is outside the National Weather Service coverage area. \
             Provide a two-letter US state or territory code (e.g. CA, NY)."
        ),
        (
            WeatherError::NotFound,
            Operation::GridPoint { latitude, longitude } | Operation::Forecast { latitude, longitude },
        ) => format!(
            "Location ({latitude}, {longitude}) is outside the National Weather Service coverage area. \
             Forecasts are only available for US locations."
        ),
        (WeatherError::Status { status, message }, _) => format!(
            "Failed to {operation}: the weather service returned status {status}: {}",
            single_line(message)
        ),
        (WeatherError::Transport(description), _) => {
            format!("Failed to {operation}: {}", single_line(description))
        }
        (WeatherError::MalformedResponse(reason), Operation::Alerts { region }) => format!(
            "Unable to read alert data for region '{region}': {}.",
            single_line(reason)
        ),
        (WeatherError::MalformedResponse(reason), Operation::GridPoint { latitude, longitude }) => format!(
            "Unable to resolve location data for ({latitude}, {longitude}): {}. \
             The location may be outside the supported coverage area.",
            single_line(reason)
        ),
        (WeatherError::MalformedResponse(reason), Operation::Forecast { latitude, longitude }) => format!(
            "Unable to read forecast data for ({latitude}, {longitude}): {}.",
            single_line(reason)
        ),
    }
}

/// Joins the lines of upstream text with single spaces
fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
