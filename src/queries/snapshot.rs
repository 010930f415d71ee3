//! Lookups and rankings over a [`LatestSnapshot`].

use crate::models::{CountryPriceRow, FuelType, LatestSnapshot, RankedPrice};
use crate::parsers::compare_country;

// ---------------------------------------------------------------------------
// SnapshotQuery
// ---------------------------------------------------------------------------

/// Query interface over one `latest.json` document.
pub struct SnapshotQuery<'a> {
    snapshot: &'a LatestSnapshot,
}

impl<'a> SnapshotQuery<'a> {
    pub fn new(snapshot: &'a LatestSnapshot) -> Self {
        Self { snapshot }
    }

    /// Get the row for an exact country name.
    pub fn get(&self, country: &str) -> Option<&'a CountryPriceRow> {
        self.snapshot.countries.iter().find(|c| c.country == country)
    }

    /// All country names in document order.
    pub fn countries(&self) -> Vec<&'a str> {
        self.snapshot
            .countries
            .iter()
            .map(|c| c.country.as_str())
            .collect()
    }

    /// Every country with a price for `fuel`, cheapest first.
    ///
    /// Equal prices are ordered by country name.
    pub fn ranking(&self, fuel: FuelType) -> Vec<RankedPrice> {
        let mut ranked: Vec<RankedPrice> = self
            .snapshot
            .countries
            .iter()
            .filter_map(|c| {
                c.price(fuel).map(|price| RankedPrice {
                    country: c.country.clone(),
                    price,
                })
            })
            .collect();
        ranked.sort_by(|a, b| {
            a.price
                .total_cmp(&b.price)
                .then_with(|| compare_country(&a.country, &b.country))
        });
        ranked
    }

    /// The `limit` cheapest countries for `fuel`, cheapest first.
    pub fn cheapest(&self, fuel: FuelType, limit: usize) -> Vec<RankedPrice> {
        let mut ranked = self.ranking(fuel);
        ranked.truncate(limit);
        ranked
    }

    /// The `limit` most expensive countries for `fuel`, most expensive first.
    pub fn most_expensive(&self, fuel: FuelType, limit: usize) -> Vec<RankedPrice> {
        self.ranking(fuel).into_iter().rev().take(limit).collect()
    }
}
