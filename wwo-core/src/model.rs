use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Language the provider answers in unless a `lang_xx` tag says otherwise.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Outcome of a decode: either the payload, or the provider's own error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Report<T> {
    Success(T),
    Failure(ErrorInfo),
}

pub type WeatherReport = Report<WeatherData>;
pub type SearchReport = Report<SearchResults>;

impl<T> Report<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Report::Success(_))
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            Report::Success(data) => Some(data),
            Report::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&ErrorInfo> {
        match self {
            Report::Success(_) => None,
            Report::Failure(error) => Some(error),
        }
    }

    /// Turn a provider-side failure into an `Err` so callers can use `?`.
    pub fn into_result(self) -> Result<T, ErrorInfo> {
        match self {
            Report::Success(data) => Ok(data),
            Report::Failure(error) => Err(error),
        }
    }
}

/// Error document returned by the provider (bad key, unknown place, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{kind}: {message}")]
pub struct ErrorInfo {
    /// Classification, e.g. `APIError` or `KeyError`.
    pub kind: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    /// What the provider understood the request to be.
    pub query: Option<Query>,
    pub location: Option<Location>,
    /// `None` when current conditions were not requested.
    pub current: Option<Current>,
    pub daily_forecasts: Vec<DailyForecast>,
    /// Every hourly sample across all days, in document order.
    pub hourly_forecasts: Vec<HourlyForecast>,
    /// The provider's "now" in the location's own offset.
    pub local_time: Option<DateTime<FixedOffset>>,
    pub language: String,
}

impl Default for WeatherData {
    fn default() -> Self {
        Self {
            query: None,
            location: None,
            current: None,
            daily_forecasts: Vec::new(),
            hourly_forecasts: Vec::new(),
            local_time: None,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl WeatherData {
    /// Each forecast day with its own slice of the hourly samples.
    ///
    /// Days may carry different numbers of samples; a day whose count runs
    /// past the end of the hourly list gets whatever is left.
    pub fn days(&self) -> impl Iterator<Item = (&DailyForecast, &[HourlyForecast])> {
        let mut start = 0;
        self.daily_forecasts.iter().map(move |day| {
            let from = start.min(self.hourly_forecasts.len());
            let to = (start + day.hourly_count).min(self.hourly_forecasts.len());
            start += day.hourly_count;
            (day, &self.hourly_forecasts[from..to])
        })
    }
}

/// Echo of the request: the kind of query (`City`, `UK Postcode`, ...) and the
/// place name it resolved to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub kind: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub region: String,
    pub country: String,
    /// Zero when the provider doesn't know.
    pub population: u64,
    pub latitude: f32,
    pub longitude: f32,
    #[serde(with = "offset_seconds")]
    pub timezone_offset: Option<FixedOffset>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub locations: Vec<Location>,
}

/// Meteorological readings shared by current conditions and hourly forecasts.
///
/// Each unit comes from its own tag and is kept exactly as sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conditions {
    pub temp_c: i32,
    pub temp_f: i32,
    pub feels_like_c: i32,
    pub feels_like_f: i32,
    pub weather_code: i32,
    pub weather_icon_url: String,
    pub weather_desc: String,
    pub windspeed_miles: i32,
    pub windspeed_kmph: i32,
    pub windspeed_knots: i32,
    pub windspeed_meter_sec: i32,
    pub winddir_degree: i32,
    pub winddir_16point: String,
    pub precip_mm: f32,
    pub precip_inches: f32,
    pub humidity: i32,
    pub visibility: i32,
    pub visibility_miles: i32,
    pub pressure: i32,
    pub pressure_inches: i32,
    pub cloudcover: i32,
    pub uv_index: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Current {
    /// Time of day only; the provider sends no date with it.
    pub observation_time: Option<NaiveTime>,
    pub conditions: Conditions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: Option<NaiveDate>,
    pub max_temp_c: i32,
    pub max_temp_f: i32,
    pub min_temp_c: i32,
    pub min_temp_f: i32,
    pub uv_index: i32,
    pub astronomy: Astronomy,
    /// How many entries of [`WeatherData::hourly_forecasts`] belong to this day.
    pub hourly_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlyForecast {
    /// Sample time rebuilt from `UTCdate` + `UTCtime`.
    pub time: Option<DateTime<Utc>>,
    /// Local time of day as sent in `time`.
    pub local_time: Option<NaiveTime>,
    pub conditions: Conditions,
    pub heat_index_c: i32,
    pub heat_index_f: i32,
    pub dew_point_c: i32,
    pub dew_point_f: i32,
    pub wind_chill_c: i32,
    pub wind_chill_f: i32,
    pub wind_gust_miles: i32,
    pub wind_gust_kmph: i32,
    pub chance_of_rain: i32,
    /// Not the complement of `chance_of_rain`, kept as sent.
    pub chance_of_remdry: i32,
    pub chance_of_windy: i32,
    pub chance_of_overcast: i32,
    pub chance_of_sunshine: i32,
    pub chance_of_frost: i32,
    pub chance_of_hightemp: i32,
    pub chance_of_fog: i32,
    pub chance_of_snow: i32,
    pub chance_of_thunder: i32,
}

/// Sun and moon events for one day. `None` means the event doesn't happen
/// that day or wasn't sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Astronomy {
    pub sunrise: Option<AstroTime>,
    pub sunset: Option<AstroTime>,
    pub moonrise: Option<AstroTime>,
    pub moonset: Option<AstroTime>,
}

/// An astronomy event time, promoted to a full instant when the day's date
/// and the location's offset are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AstroTime {
    TimeOfDay(NaiveTime),
    At(DateTime<FixedOffset>),
}

impl AstroTime {
    pub fn time(&self) -> NaiveTime {
        match self {
            AstroTime::TimeOfDay(time) => *time,
            AstroTime::At(when) => when.time(),
        }
    }
}

/// `FixedOffset` has no serde support of its own; store seconds east of UTC.
mod offset_seconds {
    use chrono::FixedOffset;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(
        offset: &Option<FixedOffset>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match offset {
            Some(offset) => serializer.serialize_some(&offset.local_minus_utc()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<FixedOffset>, D::Error> {
        Option::<i32>::deserialize(deserializer)?
            .map(|seconds| {
                FixedOffset::east_opt(seconds)
                    .ok_or_else(|| D::Error::custom(format!("offset {seconds}s out of range")))
            })
            .transpose()
    }
}
