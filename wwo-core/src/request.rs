use std::fmt;

use anyhow::bail;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Spacing between forecast samples within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Frequency {
    #[default]
    ThreeHourly,
    SixHourly,
    TwelveHourly,
    Daily,
}

impl Frequency {
    pub fn hours(&self) -> u8 {
        match self {
            Frequency::ThreeHourly => 3,
            Frequency::SixHourly => 6,
            Frequency::TwelveHourly => 12,
            Frequency::Daily => 24,
        }
    }

    /// `hourly` elements the provider sends per forecast day.
    pub fn samples_per_day(&self) -> usize {
        24 / usize::from(self.hours())
    }

    pub const fn all() -> &'static [Frequency] {
        &[
            Frequency::ThreeHourly,
            Frequency::SixHourly,
            Frequency::TwelveHourly,
            Frequency::Daily,
        ]
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h", self.hours())
    }
}

impl TryFrom<u8> for Frequency {
    type Error = anyhow::Error;

    fn try_from(hours: u8) -> Result<Self, Self::Error> {
        match hours {
            3 => Ok(Frequency::ThreeHourly),
            6 => Ok(Frequency::SixHourly),
            12 => Ok(Frequency::TwelveHourly),
            24 => Ok(Frequency::Daily),
            _ => bail!("Unsupported forecast frequency {hours}h. Supported: 3, 6, 12, 24."),
        }
    }
}

impl From<Frequency> for u8 {
    fn from(frequency: Frequency) -> Self {
        frequency.hours()
    }
}

pub const DEFAULT_NUM_OF_DAYS: u8 = 3;
pub const DEFAULT_NUM_OF_RESULTS: u8 = 10;

/// Options for a weather endpoint call.
///
/// The API key is not part of the request; providers add it when sending, so
/// [`query_pairs`](Self::query_pairs) is always safe to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRequest {
    pub location: String,
    pub num_of_days: u8,
    pub frequency: Frequency,
    pub date: Option<NaiveDate>,
    pub language: Option<String>,
    pub forecast: bool,
    pub current: bool,
}

impl WeatherRequest {
    pub fn new(location: impl Into<String>) -> anyhow::Result<Self> {
        let location = location.into();
        if location.trim().is_empty() {
            bail!("Location must not be empty.");
        }

        Ok(Self {
            location,
            num_of_days: DEFAULT_NUM_OF_DAYS,
            frequency: Frequency::default(),
            date: None,
            language: None,
            forecast: true,
            current: true,
        })
    }

    pub fn with_num_of_days(mut self, days: u8) -> Self {
        self.num_of_days = days;
        self
    }

    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Start the forecast on `date` instead of today.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_forecast(mut self, forecast: bool) -> Self {
        self.forecast = forecast;
        self
    }

    pub fn with_current(mut self, current: bool) -> Self {
        self.current = current;
        self
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("q", self.location.clone()),
            ("format", "xml".to_string()),
            ("extra", "utcDateTime".to_string()),
            ("showlocaltime", "yes".to_string()),
            ("num_of_days", self.num_of_days.to_string()),
            ("tp", self.frequency.hours().to_string()),
        ];

        if let Some(date) = self.date {
            pairs.push(("date", date.format("%Y-%m-%d").to_string()));
        }
        if !self.forecast {
            pairs.push(("fx", "no".to_string()));
        }
        if !self.current {
            pairs.push(("cc", "no".to_string()));
        }
        if let Some(language) = &self.language {
            pairs.push(("lang", language.clone()));
        }

        pairs
    }
}

/// Options for a location search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub num_of_results: u8,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> anyhow::Result<Self> {
        let query = query.into();
        if query.trim().is_empty() {
            bail!("Search query must not be empty.");
        }

        Ok(Self {
            query,
            num_of_results: DEFAULT_NUM_OF_RESULTS,
        })
    }

    pub fn with_num_of_results(mut self, results: u8) -> Self {
        self.num_of_results = results;
        self
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("q", self.query.clone()),
            ("format", "xml".to_string()),
            ("timezone", "yes".to_string()),
            ("num_of_results", self.num_of_results.to_string()),
        ]
    }
}
