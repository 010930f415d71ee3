//! Source parsers: raw HTML in, canonical per-country price table out.
//!
//! Every parser shares the same page model (visible body text plus one
//! normalized text line per `<tr>`) and the same post-processing, so a parser
//! only has to decide how a single row line maps to a [`CountryPriceRow`].

pub mod currency_delimited;
pub mod fixed_columns;

use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::models::{CountryPriceRow, ParsedTable};
use crate::normalize::{self, normalize_whitespace};

/// Signature every source parser implements.
pub type ParserFn = fn(&str) -> Result<ParsedTable>;

static BODY: LazyLock<Selector> = LazyLock::new(|| Selector::parse("body").unwrap());
static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());

/// Text views of a parsed HTML document.
#[derive(Debug, Clone)]
pub struct Page {
    /// All visible body text, whitespace-normalized.
    pub text: String,
    /// One whitespace-normalized line per non-empty table row.
    pub rows: Vec<String>,
}

impl Page {
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);

        let text = match document.select(&BODY).next() {
            Some(body) => joined_text(body),
            None => joined_text(document.root_element()),
        };

        let rows = document
            .select(&ROW)
            .map(row_line)
            .filter(|line| !line.is_empty())
            .collect();

        Self { text, rows }
    }
}

fn joined_text(el: ElementRef<'_>) -> String {
    normalize_whitespace(&el.text().collect::<Vec<_>>().join(" "))
}

/// Cells are joined with a single space so adjacent `<td>`s never fuse.
fn row_line(row: ElementRef<'_>) -> String {
    let cells: Vec<String> = row
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| matches!(el.value().name(), "td" | "th"))
        .map(|cell| cell.text().collect::<String>())
        .collect();

    if cells.is_empty() {
        joined_text(row)
    } else {
        normalize_whitespace(&cells.join(" "))
    }
}

/// Run `parse_row` over every row of `html` and finish the table.
pub(crate) fn parse_with<F>(html: &str, layout: &str, parse_row: F) -> Result<ParsedTable>
where
    F: Fn(&str) -> Option<CountryPriceRow>,
{
    let page = Page::parse(html);
    let as_of = normalize::parse_date_or(&page.text, normalize::today_utc());
    let rows = page.rows.iter().filter_map(|line| parse_row(line)).collect();
    let countries = finish_rows(rows, layout)?;
    Ok(ParsedTable { as_of, countries })
}

/// Apply the table-level rules shared by all sources.
///
/// Rows without any price are dropped, repeated country names keep their
/// first occurrence, the rest is sorted by country. An empty result is an
/// error, never a valid "no data" table.
pub fn finish_rows(rows: Vec<CountryPriceRow>, layout: &str) -> Result<Vec<CountryPriceRow>> {
    let mut seen = HashSet::new();
    let mut countries = Vec::with_capacity(rows.len());

    for row in rows {
        if !row.has_any_price() {
            debug!(layout, country = %row.country, "Dropping row without prices");
            continue;
        }
        if !seen.insert(row.country.clone()) {
            debug!(layout, country = %row.country, "Dropping duplicate country row");
            continue;
        }
        countries.push(row);
    }

    if countries.is_empty() {
        return Err(IngestError::Parse(format!(
            "No price rows matched the {}",
            layout
        )));
    }

    countries.sort_by(|a, b| compare_country(&a.country, &b.country));
    Ok(countries)
}

/// Case-insensitive ordering with a case-sensitive tiebreak.
pub fn compare_country(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Normalize a captured country name, rejecting stray one-character matches.
pub(crate) fn clean_country(raw: &str) -> Option<String> {
    let country = normalize_whitespace(raw);
    if country.chars().count() < 2 {
        None
    } else {
        Some(country)
    }
}
