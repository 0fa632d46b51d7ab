//! Core library for the `wwo` CLI.
//!
//! This crate defines:
//! - A streaming decoder for World Weather Online XML payloads
//! - The report model it produces
//! - Request options, the HTTP provider and on-disk configuration
//!
//! The decoder in [`xml`] knows nothing about HTTP and can be used on its own,
//! e.g. on a saved payload.

pub mod config;
pub mod model;
pub mod provider;
pub mod request;
pub mod xml;

pub use config::{Config, Defaults};
pub use model::{Report, SearchReport, WeatherReport};
pub use provider::{FetchResult, RateLimit, WeatherProvider, provider_from_config};
pub use request::{Frequency, SearchRequest, WeatherRequest};
pub use xml::{DecodeError, Decoded, decode_search, decode_weather};
