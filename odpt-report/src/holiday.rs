//! Japanese public-holiday calendar.
//!
//! The Cabinet Office publishes the national holiday table as a small CSV
//! file in Shift_JIS: one header row, then `YYYY/MM/DD,name` rows. The whole
//! table is downloaded and parsed into an in-memory map once per run; there
//! is no caching and no partial update.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::debug;

/// Default URL of the Cabinet Office holiday table.
const DEFAULT_URL: &str = "https://www8.cao.go.jp/chosei/shukujitsu/syukujitsu.csv";

/// Date format used in the table.
const DATE_FORMAT: &str = "%Y/%m/%d";

/// Default timeout in seconds. The file is a few kilobytes; a slow response
/// means something is wrong upstream.
const DEFAULT_TIMEOUT_SECS: u64 = 3;

/// Errors from fetching or parsing the holiday table.
#[derive(Debug, thiserror::Error)]
pub enum HolidayError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Holiday source returned an error status
    #[error("holiday source returned status {status}")]
    Api { status: u16 },

    /// Malformed CSV row
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Date column did not parse
    #[error("malformed holiday date {value:?}: {source}")]
    Date {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Mapping from date to holiday name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HolidayCalendar {
    dates: HashMap<NaiveDate, String>,
}

impl HolidayCalendar {
    /// Parse the holiday table from decoded CSV text.
    ///
    /// The first row is a header and is discarded; every following row is
    /// `YYYY/MM/DD,name`. Any malformed row fails the whole parse.
    pub fn parse_csv(text: &str) -> Result<Self, HolidayError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(text.as_bytes());

        let mut dates = HashMap::new();
        for row in reader.deserialize::<(String, String)>() {
            let (date, name) = row?;
            let date = NaiveDate::parse_from_str(&date, DATE_FORMAT).map_err(|e| {
                HolidayError::Date {
                    value: date.clone(),
                    source: e,
                }
            })?;
            dates.insert(date, name);
        }

        Ok(Self { dates })
    }

    /// Whether the given date is a public holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.dates.contains_key(&date)
    }

    /// Name of the holiday on the given date, if any.
    pub fn name(&self, date: NaiveDate) -> Option<&str> {
        self.dates.get(&date).map(String::as_str)
    }

    /// Number of holidays in the table.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl FromIterator<(NaiveDate, String)> for HolidayCalendar {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, String)>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

/// Configuration for the holiday fetch.
#[derive(Debug, Clone)]
pub struct HolidayConfig {
    /// URL of the CSV table
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for HolidayConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl HolidayConfig {
    /// Set a custom URL (for testing).
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the Cabinet Office holiday table.
#[derive(Debug, Clone)]
pub struct HolidayClient {
    http: reqwest::Client,
    url: String,
}

impl HolidayClient {
    /// Create a new holiday client with the given configuration.
    pub fn new(config: HolidayConfig) -> Result<Self, HolidayError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.url,
        })
    }

    /// Download and parse the holiday table.
    ///
    /// The payload is published in Shift_JIS and is decoded before parsing.
    /// Fetching twice in one run yields an identical calendar; the table
    /// only changes when the government republishes it.
    pub async fn fetch(&self) -> Result<HolidayCalendar, HolidayError> {
        let response = self.http.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(HolidayError::Api {
                status: status.as_u16(),
            });
        }

        let text = response.text_with_charset("shift_jis").await?;
        let calendar = HolidayCalendar::parse_csv(&text)?;

        debug!(holidays = calendar.len(), "loaded holiday table");

        Ok(calendar)
    }
}
