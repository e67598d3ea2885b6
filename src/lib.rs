//! MCP server exposing National Weather Service alerts and forecasts as tools.

pub mod classifier;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatters;
pub mod grid;
pub mod models;
pub mod pipeline;
pub mod service;
pub mod source;

pub use config::WeatherConfig;
pub use error::WeatherError;
pub use service::Weather;
pub use source::{NwsClient, WeatherDataSource};
