//! Shared fixtures for the ingestion integration tests.
//!
//! Provides canned source pages for both layouts, a scriptable [`FakeFetcher`]
//! that records the order URLs were requested in, and snapshot builders.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, TimeZone, Utc};
use eurofuel_ingest::models::{CountryPriceRow, LatestSnapshot};
use eurofuel_ingest::{Fetcher, IngestError, Result};

pub const CARGOPEDIA_URL: &str = "https://fixtures.test/cargopedia";
pub const TOLLS_URL: &str = "https://fixtures.test/tolls";

/// Fixed-column layout, dated 5 January 2024.
pub const CARGOPEDIA_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><title>Fuel prices in Europe</title></head>
<body>
  <h1>Fuel prices in Europe</h1>
  <p>Prices valid as of 5. January 2024 for all listed countries.</p>
  <table class="fuel">
    <tr><th>Country</th><th>Gasoline 95</th><th>Diesel</th><th>LPG</th></tr>
    <tr><td>Germany</td><td>1.769</td><td>1.699</td><td>0.789</td></tr>
    <tr><td>Austria</td><td>1,589</td><td>1,619</td><td>0,999</td></tr>
    <tr>
      <td>
        Iceland
      </td>
      <td>1.9</td><td>-</td><td>1.1</td>
    </tr>
    <tr><td>Malta</td><td>-</td><td>-</td><td>-</td></tr>
    <tr><td colspan="4">Advertisement</td></tr>
  </table>
</body>
</html>"#;

/// Euro-sign layout, dated 12 March 2024.
pub const TOLLS_HTML: &str = r#"<!DOCTYPE html>
<html>
<body>
  <p>Last update: 12. March 2024</p>
  <table>
    <tr><th>Country</th><th>Petrol</th><th>Diesel</th><th>LPG</th></tr>
    <tr><td>France</td><td>€ 1.85</td><td>€ 1.75</td><td></td></tr>
    <tr><td>Belgium</td><td>&euro;1.72</td><td>&euro; 1.80</td><td>&euro; 0.82</td></tr>
    <tr><td>Spain</td><td>€ 1.62</td><td>n/a</td><td>n/a</td></tr>
  </table>
</body>
</html>"#;

/// A table with a header row and nothing else.
pub const EMPTY_TABLE_HTML: &str = r#"<html><body>
  <p>Prices as of 5. January 2024</p>
  <table><tr><th>Country</th><th>Gasoline 95</th><th>Diesel</th><th>LPG</th></tr></table>
</body></html>"#;

/// What the fake fetcher returns for a URL.
#[derive(Clone)]
pub enum Reply {
    Body(String),
    Status(u16),
}

/// A [`Fetcher`] serving canned replies; unknown URLs get HTTP 404.
#[derive(Clone, Default)]
pub struct FakeFetcher {
    replies: HashMap<String, Reply>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body(mut self, url: &str, html: &str) -> Self {
        self.replies.insert(url.to_string(), Reply::Body(html.to_string()));
        self
    }

    pub fn status(mut self, url: &str, status: u16) -> Self {
        self.replies.insert(url.to_string(), Reply::Status(status));
        self
    }

    /// Shared handle to the list of requested URLs, in order.
    pub fn calls(&self) -> Arc<Mutex<Vec<String>>> {
        self.calls.clone()
    }
}

impl Fetcher for FakeFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        self.calls.lock().unwrap().push(url.to_string());
        match self.replies.get(url) {
            Some(Reply::Body(html)) => Ok(html.clone()),
            Some(Reply::Status(status)) => Err(IngestError::HttpStatus {
                url: url.to_string(),
                status: *status,
            }),
            None => Err(IngestError::HttpStatus {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn row(country: &str, g: Option<f64>, d: Option<f64>, l: Option<f64>) -> CountryPriceRow {
    CountryPriceRow {
        country: country.to_string(),
        gasoline95: g,
        diesel: d,
        lpg: l,
    }
}

/// A snapshot for `as_of` with a small fixed country table.
pub fn sample_snapshot(as_of: NaiveDate, source: &str) -> LatestSnapshot {
    LatestSnapshot {
        region: "Europe".to_string(),
        as_of,
        source: source.to_string(),
        source_url: format!("https://{}/fuel", source),
        fetched_at_utc: Utc.with_ymd_and_hms(2024, 1, 5, 6, 30, 0).unwrap(),
        unit: "EUR_per_liter".to_string(),
        countries: vec![
            row("Austria", Some(1.589), Some(1.619), None),
            row("Germany", Some(1.769), Some(1.699), Some(0.789)),
        ],
    }
}
