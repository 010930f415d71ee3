//! Per-country history over a [`HistorySeries`].

use chrono::NaiveDate;

use crate::models::{FuelType, HistoryEntry, HistorySeries, PriceChange, PricePoint, PriceTrend};

// ---------------------------------------------------------------------------
// HistoryQuery
// ---------------------------------------------------------------------------

/// Query interface over one `history.json` document.
pub struct HistoryQuery<'a> {
    history: &'a HistorySeries,
}

impl<'a> HistoryQuery<'a> {
    pub fn new(history: &'a HistorySeries) -> Self {
        Self { history }
    }

    /// All recorded as-of dates, oldest first.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.history.series.iter().map(|e| e.as_of).collect()
    }

    pub fn entry(&self, as_of: NaiveDate) -> Option<&'a HistoryEntry> {
        self.history.series.iter().find(|e| e.as_of == as_of)
    }

    /// Dated prices for one country and fuel, oldest first.
    ///
    /// Dates where the country is absent or the price is null are skipped.
    pub fn country_series(&self, country: &str, fuel: FuelType) -> Vec<PricePoint> {
        let mut points: Vec<PricePoint> = self
            .history
            .series
            .iter()
            .filter_map(|entry| {
                let row = entry.countries.iter().find(|c| c.country == country)?;
                Some(PricePoint {
                    as_of: entry.as_of,
                    price: row.price(fuel)?,
                })
            })
            .collect();
        points.sort_by(|a, b| a.as_of.cmp(&b.as_of));
        points
    }

    /// Change between the two most recent dated prices, if there are two.
    pub fn change(&self, country: &str, fuel: FuelType) -> Option<PriceChange> {
        let mut points = self.country_series(country, fuel);
        let current = points.pop()?;
        let previous = points.pop()?;
        Some(PriceChange {
            delta: current.price - previous.price,
            previous,
            current,
        })
    }

    /// Min/max/average over every dated price for one country and fuel.
    pub fn trend(&self, country: &str, fuel: FuelType) -> Option<PriceTrend> {
        let points = self.country_series(country, fuel);
        let first = points.first()?;
        let last = points.last()?;

        let mut min_price = f64::INFINITY;
        let mut max_price = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for p in &points {
            min_price = min_price.min(p.price);
            max_price = max_price.max(p.price);
            sum += p.price;
        }

        Some(PriceTrend {
            min_price,
            max_price,
            avg_price: sum / points.len() as f64,
            first_date: first.as_of,
            last_date: last.as_of,
            data_points: points.len(),
        })
    }
}
