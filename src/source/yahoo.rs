//! Yahoo historical price source

use chrono::{Datelike, NaiveDate};

use crate::downloader::task::DownloadTask;
use crate::source::Source;

const YAHOO_URL_ROOT: &str = "http://real-chart.finance.yahoo.com";

/// Daily price history for one symbol from the Yahoo chart endpoint.
///
/// Unlike the per-day sources, the whole range maps to a single locator:
/// Yahoo serves the full interval as one CSV, so `tasks_for_range` yields
/// exactly one task and the weekday filtering does not apply.
#[derive(Debug, Clone)]
pub struct YahooHistorySource {
    url_root: String,
    symbol: String,
}

impl YahooHistorySource {
    /// Source for `symbol` (e.g. `KOTAKBANK.BO`) against the live endpoint.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            url_root: YAHOO_URL_ROOT.to_string(),
            symbol: symbol.into(),
        }
    }

    /// Override the endpoint root, e.g. for a local test server.
    pub fn with_url_root(mut self, url_root: impl Into<String>) -> Self {
        self.url_root = url_root.into();
        self
    }
}

impl Source for YahooHistorySource {
    fn tasks_for_range<'a>(
        &'a self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Box<dyn Iterator<Item = DownloadTask> + 'a> {
        // The chart endpoint takes zero-based months.
        let url = format!(
            "{root}/table.csv?s={sym}&a={a}&b={b}&c={c}&d={d}&e={e}&f={f}&g=d&ignore=.csv",
            root = self.url_root,
            sym = self.symbol,
            a = start.month0(),
            b = start.day(),
            c = start.year(),
            d = end.month0(),
            e = end.day(),
            f = end.year(),
        );
        let file_name = format!("{}.csv", self.symbol);
        Box::new(std::iter::once(DownloadTask::new(url, file_name)))
    }
}
