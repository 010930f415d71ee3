//! Lookups, rankings, and history movement over published documents.

mod common;

use eurofuel_ingest::history::merge;
use eurofuel_ingest::models::{FuelType, HistorySeries, LatestSnapshot};
use eurofuel_ingest::queries::{HistoryQuery, SnapshotQuery};

use common::{date, row, sample_snapshot};

fn ranked_snapshot() -> LatestSnapshot {
    let mut snapshot = sample_snapshot(date(2024, 1, 5), "cargopedia.net");
    snapshot.countries = vec![
        row("Austria", Some(1.589), Some(1.619), None),
        row("Belgium", Some(1.72), Some(1.80), Some(0.82)),
        row("Germany", Some(1.769), Some(1.699), Some(0.789)),
        row("Iceland", Some(1.9), None, Some(1.1)),
        row("Malta", Some(1.34), Some(1.21), None),
    ];
    snapshot
}

// ---------------------------------------------------------------------------
// SnapshotQuery
// ---------------------------------------------------------------------------

#[test]
fn get_finds_exact_country() {
    let snapshot = ranked_snapshot();
    let q = SnapshotQuery::new(&snapshot);
    assert_eq!(q.get("Germany").unwrap().diesel, Some(1.699));
    assert!(q.get("germany").is_none());
    assert_eq!(q.countries().len(), 5);
}

#[test]
fn ranking_excludes_nulls_and_sorts_ascending() {
    let snapshot = ranked_snapshot();
    let q = SnapshotQuery::new(&snapshot);
    let names: Vec<String> = q.ranking(FuelType::Diesel).into_iter().map(|r| r.country).collect();
    assert_eq!(names, vec!["Malta", "Austria", "Germany", "Belgium"]);
}

#[test]
fn cheapest_and_most_expensive_take_limit() {
    let snapshot = ranked_snapshot();
    let q = SnapshotQuery::new(&snapshot);

    let cheapest = q.cheapest(FuelType::Gasoline95, 2);
    assert_eq!(cheapest[0].country, "Malta");
    assert_eq!(cheapest[1].country, "Austria");

    let expensive = q.most_expensive(FuelType::Gasoline95, 2);
    assert_eq!(expensive[0].country, "Iceland");
    assert_eq!(expensive[1].country, "Germany");

    assert_eq!(q.most_expensive(FuelType::Lpg, 10).len(), 3);
}

#[test]
fn fuel_type_parses_from_text() {
    assert_eq!("diesel".parse::<FuelType>().unwrap(), FuelType::Diesel);
    assert_eq!("Gasoline95".parse::<FuelType>().unwrap(), FuelType::Gasoline95);
    assert!("kerosene".parse::<FuelType>().is_err());
    assert_eq!(FuelType::Lpg.to_string(), "lpg");
}

// ---------------------------------------------------------------------------
// HistoryQuery
// ---------------------------------------------------------------------------

fn three_weeks() -> HistorySeries {
    let mut history = HistorySeries::empty();
    for (d, price) in [
        (date(2024, 1, 19), Some(1.70)),
        (date(2024, 1, 5), Some(1.80)),
        (date(2024, 1, 12), None),
    ] {
        let mut s = sample_snapshot(d, "cargopedia.net");
        s.countries = vec![row("Germany", price, Some(1.6), None)];
        merge(&mut history, &s);
    }
    history
}

#[test]
fn dates_and_entry_lookup() {
    let history = three_weeks();
    let q = HistoryQuery::new(&history);
    assert_eq!(
        q.dates(),
        vec![date(2024, 1, 5), date(2024, 1, 12), date(2024, 1, 19)]
    );
    assert!(q.entry(date(2024, 1, 12)).is_some());
    assert!(q.entry(date(2024, 1, 13)).is_none());
}

#[test]
fn country_series_skips_null_prices() {
    let history = three_weeks();
    let q = HistoryQuery::new(&history);
    let points = q.country_series("Germany", FuelType::Gasoline95);
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].as_of, date(2024, 1, 5));
    assert_eq!(points[1].as_of, date(2024, 1, 19));
    assert!(q.country_series("France", FuelType::Gasoline95).is_empty());
}

#[test]
fn change_compares_two_latest_points() {
    let history = three_weeks();
    let q = HistoryQuery::new(&history);
    let change = q.change("Germany", FuelType::Gasoline95).unwrap();
    assert_eq!(change.previous.price, 1.80);
    assert_eq!(change.current.price, 1.70);
    assert!((change.delta - (-0.10)).abs() < 1e-9);

    assert!(q.change("Germany", FuelType::Lpg).is_none());
}

#[test]
fn trend_aggregates_all_points() {
    let history = three_weeks();
    let q = HistoryQuery::new(&history);
    let trend = q.trend("Germany", FuelType::Gasoline95).unwrap();
    assert_eq!(trend.min_price, 1.70);
    assert_eq!(trend.max_price, 1.80);
    assert!((trend.avg_price - 1.75).abs() < 1e-9);
    assert_eq!(trend.first_date, date(2024, 1, 5));
    assert_eq!(trend.last_date, date(2024, 1, 19));
    assert_eq!(trend.data_points, 2);

    let flat = q.trend("Germany", FuelType::Diesel).unwrap();
    assert_eq!(flat.data_points, 3);
    assert!(q.trend("France", FuelType::Diesel).is_none());
}
