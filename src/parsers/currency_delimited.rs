//! Layout where every price carries its own euro sign.
//!
//! ```text
//! France € 1.85 € 1.75 € 0.99
//! ```

use std::sync::LazyLock;

use regex::Regex;

use super::{clean_country, parse_with};
use crate::error::Result;
use crate::models::{CountryPriceRow, ParsedTable};
use crate::normalize::parse_locale_number;

const CURRENCY_SYMBOL: char = '€';
const LAYOUT: &str = "euro-delimited layout";

static AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)€\s*[0-9]+(?:[.,][0-9]+)?").unwrap());

/// Parse a full page whose rows delimit prices with a currency symbol.
pub fn parse(html: &str) -> Result<ParsedTable> {
    parse_with(html, LAYOUT, parse_row)
}

/// Match one row line; rows with fewer than two amounts are not data rows.
///
/// Amounts map to gasoline 95, diesel and LPG in order of appearance; a
/// missing third amount leaves LPG null.
pub fn parse_row(line: &str) -> Option<CountryPriceRow> {
    let amounts: Vec<Option<f64>> = AMOUNT
        .find_iter(line)
        .map(|m| parse_locale_number(m.as_str()))
        .collect();
    if amounts.len() < 2 {
        return None;
    }

    let name = line.split(CURRENCY_SYMBOL).next().unwrap_or_default();
    let country = clean_country(name)?;

    Some(CountryPriceRow {
        country,
        gasoline95: amounts[0],
        diesel: amounts[1],
        lpg: amounts.get(2).copied().flatten(),
    })
}
