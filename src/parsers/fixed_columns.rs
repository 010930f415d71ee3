//! Layout with a country name followed by three whitespace-separated columns.
//!
//! ```text
//! Germany 1.769 1.699 0.789
//! Iceland 1.9 - 1.1
//! ```

use std::sync::LazyLock;

use regex::Regex;

use super::{clean_country, parse_with};
use crate::error::Result;
use crate::models::{CountryPriceRow, ParsedTable};
use crate::normalize::parse_locale_number;

const LAYOUT: &str = "fixed-column layout";

static ROW_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    let field = r"([0-9]+(?:[.,][0-9]+)?|-)";
    Regex::new(&format!(
        r"(?i)^(.+?)\s+{field}\s+{field}\s+{field}\s*$"
    ))
    .unwrap()
});

/// Parse a full page laid out as fixed numeric columns.
pub fn parse(html: &str) -> Result<ParsedTable> {
    parse_with(html, LAYOUT, parse_row)
}

/// Match one row line; `None` means the line is not a data row.
///
/// A `-` column matches structurally and yields a null price.
pub fn parse_row(line: &str) -> Option<CountryPriceRow> {
    let caps = ROW_SHAPE.captures(line)?;
    let country = clean_country(&caps[1])?;

    Some(CountryPriceRow {
        country,
        gasoline95: parse_locale_number(&caps[2]),
        diesel: parse_locale_number(&caps[3]),
        lpg: parse_locale_number(&caps[4]),
    })
}
