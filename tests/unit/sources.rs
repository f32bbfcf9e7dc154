//! Source range behavior through the public trait

use bhav_dl::source::{BseEquitySource, Source, YahooHistorySource};
use chrono::{Datelike, NaiveDate, Weekday};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_daily_source_yields_only_weekdays() {
    // January 2016 has 21 weekdays.
    let source = BseEquitySource::new();
    let tasks: Vec<_> = source
        .tasks_for_range(date(2016, 1, 1), date(2016, 2, 1))
        .collect();
    assert_eq!(tasks.len(), 21);
}

#[test]
fn test_daily_source_order_is_chronological() {
    let source = BseEquitySource::new();
    let names: Vec<_> = source
        .tasks_for_range(date(2016, 1, 4), date(2016, 1, 9))
        .map(|t| t.file_name)
        .collect();
    assert_eq!(
        names,
        vec![
            "eq040116_csv.zip",
            "eq050116_csv.zip",
            "eq060116_csv.zip",
            "eq070116_csv.zip",
            "eq080116_csv.zip",
        ]
    );
}

#[test]
fn test_empty_and_inverted_ranges_yield_nothing() {
    let source = BseEquitySource::new();
    assert_eq!(
        source
            .tasks_for_range(date(2016, 1, 4), date(2016, 1, 4))
            .count(),
        0
    );
    assert_eq!(
        source
            .tasks_for_range(date(2016, 2, 1), date(2016, 1, 1))
            .count(),
        0
    );
}

#[test]
fn test_range_end_is_exclusive() {
    let source = BseEquitySource::new();
    let tasks: Vec<_> = source
        .tasks_for_range(date(2016, 1, 4), date(2016, 1, 5))
        .collect();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].file_name, "eq040116_csv.zip");
}

#[test]
fn test_range_granular_source_ignores_weekday_split() {
    // A weekend-only range still maps to one Yahoo task, while the daily
    // source yields nothing for it.
    let weekend_start = date(2016, 1, 2);
    let weekend_end = date(2016, 1, 4);
    assert_eq!(weekend_start.weekday(), Weekday::Sat);

    let daily: Vec<_> = BseEquitySource::new()
        .tasks_for_range(weekend_start, weekend_end)
        .collect();
    let ranged: Vec<_> = YahooHistorySource::new("KOTAKBANK.BO")
        .tasks_for_range(weekend_start, weekend_end)
        .collect();

    assert!(daily.is_empty());
    assert_eq!(ranged.len(), 1);
}
