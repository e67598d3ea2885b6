//! Failures raised while talking to the weather data source.

use thiserror::Error;

/// Failure from any upstream hop of an alerts or forecast lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    /// The source answered 404: the location or region is outside its coverage.
    #[error("not found")]
    NotFound,

    /// The source answered with some other non-success status.
    #[error("status {status}: {message}")]
    Status { status: u16, message: String },

    /// No response was obtained (connection failure, timeout).
    #[error("{0}")]
    Transport(String),

    /// A response arrived but lacked the structure we need.
    #[error("{0}")]
    MalformedResponse(String),
}

impl WeatherError {
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        Self::MalformedResponse(message.into())
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::MalformedResponse(err.to_string())
        } else if err.is_timeout() {
            Self::Transport(format!("request timed out: {err}"))
        } else {
            Self::Transport(err.to_string())
        }
    }
}
