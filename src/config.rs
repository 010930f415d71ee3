use std::path::PathBuf;
use std::time::Duration;

use crate::orchestrator::SourceSpec;
use crate::parsers;

pub const REGION: &str = "Europe";
pub const UNIT: &str = "EUR_per_liter";

pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; albania-fuel-prices/1.0)";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const LATEST_FILE: &str = "latest.json";
pub const HISTORY_FILE: &str = "history.json";

/// Environment variable overriding the output directory.
pub const DATA_DIR_ENV: &str = "EUROFUEL_DATA_DIR";

pub const CARGOPEDIA_URL: &str = "https://www.cargopedia.net/europe-fuel-prices";
pub const TOLLS_URL: &str = "https://www.tolls.eu/fuel-prices";

/// The production source list, most preferred first.
pub fn default_sources() -> Vec<SourceSpec> {
    vec![
        SourceSpec::new("cargopedia.net", CARGOPEDIA_URL, parsers::fixed_columns::parse),
        SourceSpec::new("tolls.eu", TOLLS_URL, parsers::currency_delimited::parse),
    ]
}

pub fn default_data_dir() -> PathBuf {
    match std::env::var_os(DATA_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from("data"),
    }
}
