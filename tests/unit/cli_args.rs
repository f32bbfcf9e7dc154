//! CLI argument parsing

use bhav_dl::cli::{Cli, OutputFormat};
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_positional_dates_are_parsed() {
    let cli = Cli::try_parse_from(["bhav-dl", "2016-01-01", "2016-03-01"]).unwrap();
    assert_eq!(cli.start, NaiveDate::from_ymd_opt(2016, 1, 1).unwrap());
    assert_eq!(cli.end, NaiveDate::from_ymd_opt(2016, 3, 1).unwrap());
}

#[test]
fn test_out_dir_defaults_to_current_dir() {
    let cli = Cli::try_parse_from(["bhav-dl", "2016-01-01", "2016-03-01"]).unwrap();
    assert_eq!(cli.out, PathBuf::from("."));
}

#[test]
fn test_long_and_short_out_flags() {
    let long = Cli::try_parse_from(["bhav-dl", "2016-01-01", "2016-03-01", "--out", "/data"])
        .unwrap();
    let short =
        Cli::try_parse_from(["bhav-dl", "2016-01-01", "2016-03-01", "-o", "/data"]).unwrap();
    assert_eq!(long.out, PathBuf::from("/data"));
    assert_eq!(short.out, PathBuf::from("/data"));
}

#[test]
fn test_malformed_dates_are_rejected() {
    assert!(Cli::try_parse_from(["bhav-dl", "2016/01/01", "2016-03-01"]).is_err());
    assert!(Cli::try_parse_from(["bhav-dl", "2016-13-01", "2016-03-01"]).is_err());
    assert!(Cli::try_parse_from(["bhav-dl", "yesterday", "today"]).is_err());
}

#[test]
fn test_output_format_values() {
    let json = Cli::try_parse_from([
        "bhav-dl",
        "2016-01-01",
        "2016-03-01",
        "--output-format",
        "json",
    ])
    .unwrap();
    assert_eq!(json.output_format, OutputFormat::Json);

    assert!(Cli::try_parse_from([
        "bhav-dl",
        "2016-01-01",
        "2016-03-01",
        "--output-format",
        "yaml",
    ])
    .is_err());
}
