//! BSE equity bhav copy source

use chrono::NaiveDate;

use crate::downloader::task::DownloadTask;
use crate::source::DailySource;

/// Where BSE publishes the daily equity bhav copy archives.
const BSE_EQUITY_URL_ROOT: &str = "http://www.bseindia.com/download/BhavCopy/Equity/";

const FILE_PREFIX: &str = "eq";
const FILE_SUFFIX: &str = "_csv.zip";

/// Daily equity bhav copy files from BSE, one zip archive per trading day.
#[derive(Debug, Clone)]
pub struct BseEquitySource {
    url_root: String,
}

impl BseEquitySource {
    /// Source pointing at the live BSE download root.
    pub fn new() -> Self {
        Self::with_url_root(BSE_EQUITY_URL_ROOT)
    }

    /// Source pointing at an alternate root, e.g. a local test server.
    pub fn with_url_root(url_root: impl Into<String>) -> Self {
        Self {
            url_root: url_root.into(),
        }
    }
}

impl Default for BseEquitySource {
    fn default() -> Self {
        Self::new()
    }
}

impl DailySource for BseEquitySource {
    fn task_for_date(&self, date: NaiveDate) -> DownloadTask {
        // The archive name encodes the date as DDMMYY.
        let file_name = format!("{FILE_PREFIX}{}{FILE_SUFFIX}", date.format("%d%m%y"));
        let url = format!("{}{}", self.url_root, file_name);
        DownloadTask::new(url, file_name)
    }
}
