use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IngestError;

// ---------------------------------------------------------------------------
// CountryPriceRow — One country's prices in EUR per liter
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryPriceRow {
    pub country: String,
    #[serde(rename = "gasoline95_eur")]
    pub gasoline95: Option<f64>,
    #[serde(rename = "diesel_eur")]
    pub diesel: Option<f64>,
    #[serde(rename = "lpg_eur")]
    pub lpg: Option<f64>,
}

impl CountryPriceRow {
    pub fn price(&self, fuel: FuelType) -> Option<f64> {
        match fuel {
            FuelType::Gasoline95 => self.gasoline95,
            FuelType::Diesel => self.diesel,
            FuelType::Lpg => self.lpg,
        }
    }

    /// True when at least one of the three prices is present.
    pub fn has_any_price(&self) -> bool {
        self.gasoline95.is_some() || self.diesel.is_some() || self.lpg.is_some()
    }
}

// ---------------------------------------------------------------------------
// FuelType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Gasoline95,
    Diesel,
    Lpg,
}

impl FuelType {
    pub const ALL: [FuelType; 3] = [FuelType::Gasoline95, FuelType::Diesel, FuelType::Lpg];

    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Gasoline95 => "gasoline95",
            FuelType::Diesel => "diesel",
            FuelType::Lpg => "lpg",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FuelType {
    type Err = IngestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gasoline95" | "gasoline" | "petrol" => Ok(FuelType::Gasoline95),
            "diesel" => Ok(FuelType::Diesel),
            "lpg" => Ok(FuelType::Lpg),
            other => Err(IngestError::InvalidArgument(format!(
                "Unknown fuel type: '{}'. Must be gasoline95, diesel, or lpg.",
                other
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// RankedPrice — One country's price for a ranking
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPrice {
    pub country: String,
    pub price: f64,
}

// ---------------------------------------------------------------------------
// PricePoint — A dated price for one country and fuel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub as_of: chrono::NaiveDate,
    pub price: f64,
}

// ---------------------------------------------------------------------------
// PriceChange — Movement between the two most recent dated prices
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceChange {
    pub previous: PricePoint,
    pub current: PricePoint,
    pub delta: f64,
}

// ---------------------------------------------------------------------------
// PriceTrend — Aggregated statistics over a country's history
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTrend {
    pub min_price: f64,
    pub max_price: f64,
    pub avg_price: f64,
    pub first_date: chrono::NaiveDate,
    pub last_date: chrono::NaiveDate,
    pub data_points: usize,
}
