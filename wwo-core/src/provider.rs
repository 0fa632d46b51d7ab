use crate::{
    Config, SearchReport, WeatherReport,
    provider::wwo::WorldWeatherOnline,
    request::{SearchRequest, WeatherRequest},
};
use async_trait::async_trait;
use serde::Serialize;
use std::fmt::Debug;

pub mod wwo;

/// Request allowance left after a call, as reported by the provider's proxy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RateLimit {
    pub per_second: Option<u32>,
    pub per_day: Option<u32>,
}

/// A decoded response plus what the transport learned on the way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchResult<T> {
    pub report: T,
    pub rate_limit: RateLimit,
    /// Elements the decoder did not recognise, as slash-separated paths.
    pub skipped: Vec<String>,
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn weather(
        &self,
        request: &WeatherRequest,
    ) -> anyhow::Result<FetchResult<WeatherReport>>;

    async fn search(&self, request: &SearchRequest) -> anyhow::Result<FetchResult<SearchReport>>;
}

/// Construct the World Weather Online provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key()?;
    Ok(Box::new(WorldWeatherOnline::new(api_key.to_owned())))
}
