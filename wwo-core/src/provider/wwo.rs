use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, header::HeaderMap};

use crate::{
    SearchReport, WeatherReport,
    model::Report,
    request::{SearchRequest, WeatherRequest},
    xml::{DecodeError, Decoded, decode_search, decode_weather},
};

use super::{FetchResult, RateLimit, WeatherProvider};

pub const DEFAULT_BASE_URL: &str = "https://api.worldweatheronline.com/free/v2";

const QPS_LEFT_HEADER: &str = "x-apiaxleproxy-qps-left";
const QPD_LEFT_HEADER: &str = "x-apiaxleproxy-qpd-left";

#[derive(Debug, Clone)]
pub struct WorldWeatherOnline {
    api_key: String,
    base_url: String,
    http: Client,
}

/// Raw response, read in full before decoding.
struct Fetched {
    status: StatusCode,
    rate_limit: RateLimit,
    body: String,
}

impl WorldWeatherOnline {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            http: Client::new(),
        }
    }

    /// Point the provider at a mirror or a local test server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    async fn fetch(&self, endpoint: &str, pairs: &[(&'static str, String)]) -> Result<Fetched> {
        let url = format!("{}/{endpoint}", self.base_url);
        tracing::debug!(%url, query = ?pairs, "sending request");

        let res = self
            .http
            .get(&url)
            .query(pairs)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .with_context(|| format!("Failed to send request to World Weather Online ({endpoint})"))?;

        let status = res.status();
        let rate_limit = rate_limit(res.headers());
        let body = res
            .text()
            .await
            .with_context(|| format!("Failed to read World Weather Online {endpoint} response body"))?;

        tracing::debug!(%status, ?rate_limit, bytes = body.len(), "received response");
        tracing::trace!(%body, "response body");

        Ok(Fetched {
            status,
            rate_limit,
            body,
        })
    }
}

#[async_trait]
impl WeatherProvider for WorldWeatherOnline {
    async fn weather(&self, request: &WeatherRequest) -> Result<FetchResult<WeatherReport>> {
        let fetched = self.fetch("weather.ashx", &request.query_pairs()).await?;
        interpret(fetched, "weather", |body| decode_weather(body))
    }

    async fn search(&self, request: &SearchRequest) -> Result<FetchResult<SearchReport>> {
        let fetched = self.fetch("search.ashx", &request.query_pairs()).await?;
        interpret(fetched, "search", |body| decode_search(body))
    }
}

/// Decode a body whatever its status. The provider explains most failures in
/// the body itself, so only a non-2xx status with a successful-looking or
/// undecodable body is treated as a transport error.
fn interpret<T>(
    fetched: Fetched,
    what: &str,
    decode: impl FnOnce(&[u8]) -> Result<Decoded<Report<T>>, DecodeError>,
) -> Result<FetchResult<Report<T>>> {
    let Fetched {
        status,
        rate_limit,
        body,
    } = fetched;

    let decoded = match decode(body.as_bytes()) {
        Ok(decoded) => decoded,
        Err(err) if !status.is_success() => {
            tracing::debug!(error = %err, "error body is not a provider error document");
            return Err(anyhow!(
                "World Weather Online {what} request failed with status {status}: {}",
                truncate_body(&body),
            ));
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("Failed to decode World Weather Online {what} XML"));
        }
    };

    if !status.is_success() && decoded.report.is_success() {
        return Err(anyhow!(
            "World Weather Online {what} request failed with status {status}: {}",
            truncate_body(&body),
        ));
    }

    if let Report::Failure(error) = &decoded.report {
        tracing::warn!(%status, kind = %error.kind, message = %error.message, "provider returned an error");
    }

    Ok(FetchResult {
        report: decoded.report,
        rate_limit,
        skipped: decoded.skipped,
    })
}

fn rate_limit(headers: &HeaderMap) -> RateLimit {
    let read = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse().ok())
    };

    RateLimit {
        per_second: read(QPS_LEFT_HEADER),
        per_day: read(QPD_LEFT_HEADER),
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((end, _)) => format!("{}...", &body[..end]),
        None => body.to_string(),
    }
}
