//! History merge: idempotence per date and ascending order.

mod common;

use eurofuel_ingest::history::{merge, MergeOutcome};
use eurofuel_ingest::models::HistorySeries;

use common::{date, row, sample_snapshot};

#[test]
fn first_merge_creates_single_entry() {
    let mut history = HistorySeries::empty();
    let snapshot = sample_snapshot(date(2024, 1, 5), "cargopedia.net");

    assert_eq!(merge(&mut history, &snapshot), MergeOutcome::Appended);
    assert_eq!(history.len(), 1);
    assert_eq!(history.series[0].as_of, snapshot.as_of);
    assert_eq!(history.series[0].source, "cargopedia.net");
    assert_eq!(history.series[0].countries, snapshot.countries);
}

#[test]
fn same_date_merge_is_a_no_op() {
    let mut history = HistorySeries::empty();
    let first = sample_snapshot(date(2024, 1, 5), "cargopedia.net");
    merge(&mut history, &first);
    let before = history.clone();

    let mut correction = sample_snapshot(date(2024, 1, 5), "tolls.eu");
    correction.countries = vec![row("Germany", Some(9.99), None, None)];

    assert_eq!(merge(&mut history, &correction), MergeOutcome::AlreadyPresent);
    assert_eq!(history, before);
    assert_eq!(
        serde_json::to_string(&history).unwrap(),
        serde_json::to_string(&before).unwrap()
    );
}

#[test]
fn series_stays_sorted_for_any_insert_order() {
    let dates = [
        date(2024, 3, 1),
        date(2023, 12, 31),
        date(2024, 1, 15),
        date(2024, 1, 2),
        date(2025, 6, 30),
    ];

    let mut history = HistorySeries::empty();
    for d in dates {
        merge(&mut history, &sample_snapshot(d, "cargopedia.net"));
        let seen: Vec<_> = history.series.iter().map(|e| e.as_of).collect();
        let mut sorted = seen.clone();
        sorted.sort();
        assert_eq!(seen, sorted);
    }
    assert_eq!(history.len(), dates.len());
}

#[test]
fn lexicographic_and_date_order_agree() {
    let mut history = HistorySeries::empty();
    merge(&mut history, &sample_snapshot(date(2024, 10, 1), "a"));
    merge(&mut history, &sample_snapshot(date(2024, 9, 30), "a"));

    let as_text: Vec<String> = history
        .series
        .iter()
        .map(|e| e.as_of.format("%Y-%m-%d").to_string())
        .collect();
    assert_eq!(as_text, vec!["2024-09-30", "2024-10-01"]);
}
