//! Gateway contract suite.
//!
//! Every case takes an empty store, seeds it through `insert_batch`, and checks
//! behavior every gateway must share. Each backend's test file runs all cases.

#![allow(clippy::unwrap_used, reason = "test code")]
#![allow(dead_code, reason = "each test binary runs its own subset")]

use landfall_core::{LandfallCategory, PageWindow, Predicate, SortColumn, SortOrder, StormRecord};
use landfall_storage::StormStore;

pub fn storm(id: &str, name: &str, year: i32, max_wind: i32) -> StormRecord {
    StormRecord {
        id: id.to_owned(),
        name: name.to_owned(),
        year,
        duration_days: 5,
        max_wind_speed: max_wind,
        wind_speed_at_landfall: max_wind / 2,
        strict_wind_speed_at_landfall: max_wind / 2,
        landfall_date: format!("{year}-08-15"),
        strict_landfall_date: format!("{year}-08-15"),
        is_hurricane: max_wind >= 64,
        has_liberal_landfall: true,
        has_strict_landfall: true,
        has_any_landfall: true,
    }
}

fn any_landfall_batch(n: usize) -> Vec<StormRecord> {
    (0..n)
        .map(|i| {
            let year = 1950 + i32::try_from(i).unwrap();
            storm(&format!("AL{i:02}{year}"), &format!("STORM{i:02}"), year, 40 + year % 7)
        })
        .collect()
}

fn ids(rows: &[StormRecord]) -> Vec<&str> {
    rows.iter().map(|r| r.id.as_str()).collect()
}

pub async fn paging_walks_twenty_five_records(store: &dyn StormStore) {
    store.insert_batch(&any_landfall_batch(25)).await.unwrap();
    let predicate = Predicate::build(LandfallCategory::Any, "");
    let order = SortOrder::new(SortColumn::Id, true);

    assert_eq!(store.count(&predicate).await.unwrap(), 25);

    let first = store
        .fetch_page(&predicate, order, Some(PageWindow::for_page(0, 10)))
        .await
        .unwrap();
    assert_eq!(first.len(), 10);
    assert_eq!(first[0].id, "AL001950");

    let last = store
        .fetch_page(&predicate, order, Some(PageWindow::for_page(2, 10)))
        .await
        .unwrap();
    assert_eq!(last.len(), 5);
    assert_eq!(last[4].id, "AL241974");

    let beyond = store
        .fetch_page(&predicate, order, Some(PageWindow::for_page(3, 10)))
        .await
        .unwrap();
    assert!(beyond.is_empty());
}

pub async fn pages_never_overlap_under_ties(store: &dyn StormStore) {
    let batch: Vec<_> = (0..9).map(|i| storm(&format!("AL{i}"), "SAME", 2000, 50)).collect();
    store.insert_batch(&batch).await.unwrap();
    let predicate = Predicate::always();
    let order = SortOrder::new(SortColumn::MaxWindSpeed, false);

    let mut seen = Vec::new();
    for page in 0..3 {
        let rows = store
            .fetch_page(&predicate, order, Some(PageWindow::for_page(page, 4)))
            .await
            .unwrap();
        seen.extend(rows.into_iter().map(|r| r.id));
    }
    let expected: Vec<String> = (0..9).map(|i| format!("AL{i}")).collect();
    assert_eq!(seen, expected);
}

pub async fn category_flags_filter_rows(store: &dyn StormStore) {
    let strict = storm("AL011990", "STRICT", 1990, 100);
    let mut liberal = storm("AL021990", "LIBERAL", 1990, 100);
    liberal.has_strict_landfall = false;
    let mut any = liberal.clone();
    any.id = "AL031990".to_owned();
    any.name = "ANY".to_owned();
    any.has_liberal_landfall = false;
    let mut none = any.clone();
    none.id = "AL041990".to_owned();
    none.name = "NONE".to_owned();
    none.has_any_landfall = false;
    store.insert_batch(&[strict, liberal, any, none]).await.unwrap();

    let count = |category| async move {
        store.count(&Predicate::build(category, "")).await.unwrap()
    };
    assert_eq!(count(LandfallCategory::Strict).await, 1);
    assert_eq!(count(LandfallCategory::Liberal).await, 2);
    assert_eq!(count(LandfallCategory::Any).await, 3);
    assert_eq!(store.count(&Predicate::always()).await.unwrap(), 4);
}

pub async fn numeric_search_matches_numbers_and_substrings(store: &dyn StormStore) {
    let by_year = storm("AL011992", "ANDREW", 1992, 150);
    let by_date = {
        let mut s = storm("AL051950", "EASY", 1950, 90);
        s.strict_landfall_date = "1992-01-01".to_owned();
        s
    };
    let by_duration = {
        let mut s = storm("AL061960", "DONNA", 1960, 120);
        s.duration_days = 1992;
        s
    };
    let by_name_only = storm("AL071970", "1992ISH", 1970, 80);
    store.insert_batch(&[by_year, by_date, by_duration, by_name_only]).await.unwrap();

    let predicate = Predicate::build(LandfallCategory::Any, "1992");
    let rows = store
        .fetch_page(&predicate, SortOrder::new(SortColumn::Id, true), None)
        .await
        .unwrap();
    assert_eq!(ids(&rows), ["AL011992", "AL051950", "AL061960"]);
    assert_eq!(store.count(&predicate).await.unwrap(), 3);
}

pub async fn text_search_is_ascii_case_insensitive(store: &dyn StormStore) {
    store
        .insert_batch(&[
            storm("AL041992", "ANDREW", 1992, 150),
            storm("AL091989", "HUGO", 1989, 140),
        ])
        .await
        .unwrap();

    for term in ["andrew", "ANDREW", "aNdR"] {
        let predicate = Predicate::build(LandfallCategory::Any, term);
        assert_eq!(store.count(&predicate).await.unwrap(), 1, "term {term:?}");
    }
    let by_id = Predicate::build(LandfallCategory::Any, "al09");
    assert_eq!(store.count(&by_id).await.unwrap(), 1);
    let nothing = Predicate::build(LandfallCategory::Any, "%");
    assert_eq!(store.count(&nothing).await.unwrap(), 0);
}

pub async fn sorting_follows_column_and_direction(store: &dyn StormStore) {
    store
        .insert_batch(&[
            storm("AL031960", "CARLA", 1961, 150),
            storm("AL011950", "ABLE", 1950, 90),
            storm("AL021955", "BAKER", 1955, 120),
        ])
        .await
        .unwrap();
    let predicate = Predicate::always();

    let by_name = store.fetch_page(&predicate, SortOrder::by_name(), None).await.unwrap();
    assert_eq!(ids(&by_name), ["AL011950", "AL021955", "AL031960"]);

    let by_wind_desc = store
        .fetch_page(&predicate, SortOrder::new(SortColumn::MaxWindSpeed, false), None)
        .await
        .unwrap();
    assert_eq!(ids(&by_wind_desc), ["AL031960", "AL021955", "AL011950"]);

    let by_date_desc = store
        .fetch_page(&predicate, SortOrder::new(SortColumn::LandfallDate, false), None)
        .await
        .unwrap();
    assert_eq!(ids(&by_date_desc), ["AL031960", "AL021955", "AL011950"]);

    let by_landfall_wind = store
        .fetch_page(&predicate, SortOrder::new(SortColumn::WindSpeedAtLandfall, true), None)
        .await
        .unwrap();
    assert_eq!(ids(&by_landfall_wind), ["AL011950", "AL021955", "AL031960"]);
}

pub async fn count_agrees_with_unwindowed_page(store: &dyn StormStore) {
    let mut batch = any_landfall_batch(12);
    batch[3].has_strict_landfall = false;
    batch[7].has_any_landfall = false;
    batch[7].has_liberal_landfall = false;
    batch[7].has_strict_landfall = false;
    store.insert_batch(&batch).await.unwrap();

    for (category, term) in [
        (LandfallCategory::Strict, ""),
        (LandfallCategory::Any, "storm0"),
        (LandfallCategory::Liberal, "1955"),
        (LandfallCategory::Any, "nothing-matches"),
    ] {
        let predicate = Predicate::build(category, term);
        let total = store.count(&predicate).await.unwrap();
        let rows = store.fetch_page(&predicate, SortOrder::by_name(), None).await.unwrap();
        assert_eq!(total, u64::try_from(rows.len()).unwrap(), "{category} {term:?}");
    }
}

pub async fn duplicate_batch_is_rejected_whole(store: &dyn StormStore) {
    store.insert_batch(&[storm("AL011950", "ABLE", 1950, 90)]).await.unwrap();

    let err = store
        .insert_batch(&[
            storm("AL021951", "BAKER", 1951, 80),
            storm("AL011950", "ABLE", 1950, 90),
        ])
        .await
        .unwrap_err();
    assert!(err.is_duplicate(), "unexpected error: {err}");
    assert_eq!(store.count(&Predicate::always()).await.unwrap(), 1);

    assert_eq!(store.insert_batch(&[]).await.unwrap(), 0);
}

pub async fn stored_records_read_back_unchanged(store: &dyn StormStore) {
    let mut original = storm("AL041992", "ANDREW", 1992, 150);
    original.is_hurricane = false;
    original.has_strict_landfall = false;
    assert_eq!(store.insert_batch(std::slice::from_ref(&original)).await.unwrap(), 1);

    let rows = store.fetch_page(&Predicate::always(), SortOrder::by_name(), None).await.unwrap();
    assert_eq!(rows, vec![original]);
}

/// Generate one `#[tokio::test]` per contract case for a backend.
///
/// `$make` is an async expression producing `(store, guard)`: a fresh, empty
/// store plus whatever must outlive it (a temp dir, say). Extra attributes are
/// applied to every generated test.
macro_rules! contract_tests {
    (@cases $make:expr, $attrs:tt, $($case:ident),* $(,)?) => {
        $(contract_tests!(@one $make, $attrs, $case);)*
    };
    (@one $make:expr, [$(#[$attr:meta])*], $case:ident) => {
        #[tokio::test]
        $(#[$attr])*
        async fn $case() {
            let (store, _guard) = $make.await;
            contract::$case(&store).await;
        }
    };
    ($prefix:ident, $make:expr $(, #[$attr:meta])*) => {
        mod $prefix {
            use super::*;

            contract_tests!(@cases $make, [$(#[$attr])*],
                paging_walks_twenty_five_records,
                pages_never_overlap_under_ties,
                category_flags_filter_rows,
                numeric_search_matches_numbers_and_substrings,
                text_search_is_ascii_case_insensitive,
                sorting_follows_column_and_direction,
                count_agrees_with_unwindowed_page,
                duplicate_batch_is_rejected_whole,
                stored_records_read_back_unchanged,
            );
        }
    };
}
