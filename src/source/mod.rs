//! Task sources
//!
//! A source turns a date range into the ordered sequence of download tasks
//! for one provider. Most providers publish one file per trading day;
//! implementing [`DailySource`] gives them the shared date iteration and
//! weekend skip for free. Providers that map a whole range to a single
//! locator implement [`Source`] directly.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::downloader::task::DownloadTask;

pub mod bse;
pub mod yahoo;

pub use bse::BseEquitySource;
pub use yahoo::YahooHistorySource;

/// Iterate the weekdays in `[start, end)` in ascending order.
///
/// Saturdays and Sundays are skipped; exchanges publish no end-of-day file
/// for them. Empty when `start >= end`.
pub fn weekdays(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start
        .iter_days()
        .take_while(move |day| *day < end)
        .filter(|day| !matches!(day.weekday(), Weekday::Sat | Weekday::Sun))
}

/// Produces the download tasks covering a date range.
pub trait Source {
    /// Tasks for `[start, end)`, lazily, in chronological order.
    fn tasks_for_range<'a>(
        &'a self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Box<dyn Iterator<Item = DownloadTask> + 'a>;
}

/// Sources that publish exactly one file per trading day.
pub trait DailySource {
    /// The task for a single date.
    fn task_for_date(&self, date: NaiveDate) -> DownloadTask;
}

impl<S: DailySource> Source for S {
    fn tasks_for_range<'a>(
        &'a self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Box<dyn Iterator<Item = DownloadTask> + 'a> {
        Box::new(weekdays(start, end).map(move |date| self.task_for_date(date)))
    }
}
