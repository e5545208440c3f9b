//! The ordered list of date patterns understood by the inference engine.
//!
//! Each [DateStrategy] either succeeds with a point estimate or declines.
//! The first three see the date text with its leading qualifier removed, the
//! two range patterns see the text as written, since their keyword is part of
//! the pattern.

use chrono::{Month, NaiveDate, TimeDelta};
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

static QUALIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(AFT|BEF|ABT) ").expect("valid regex"));

static DAY_MONTH_YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}) ([A-Za-z]{3,9}) (\d{4})$").expect("valid regex"));

static MONTH_YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z]{3,9}) (\d{4})$").expect("valid regex"));

static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d{4})$").expect("valid regex"));

static BETWEEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^BET (\d{4}) AND (\d{4})$").expect("valid regex"));

static ABOUT_SLASH_YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ABT (\d{4})/(\d{2})$").expect("valid regex"));

/// Which form of the date text a strategy is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput {
    /// Leading `AFT `, `BEF ` or `ABT ` removed
    Stripped,
    /// As written in the record
    Raw,
}

/// A named date pattern and its parser.
#[derive(Debug, Clone, Copy)]
pub struct DateStrategy {
    pub name: &'static str,
    pub input: DateInput,
    pub parse: fn(&str) -> Option<NaiveDate>,
}

/// All strategies, in the order they are tried.
pub const DATE_STRATEGIES: [DateStrategy; 5] = [
    DateStrategy { name: "day month year", input: DateInput::Stripped, parse: parse_day_month_year },
    DateStrategy { name: "month year", input: DateInput::Stripped, parse: parse_month_year },
    DateStrategy { name: "year", input: DateInput::Stripped, parse: parse_year },
    DateStrategy { name: "between years", input: DateInput::Raw, parse: parse_between_years },
    DateStrategy { name: "about slash year", input: DateInput::Raw, parse: parse_about_slash_year },
];

/// Removes a leading `AFT `, `BEF ` or `ABT ` qualifier.
///
/// # Examples
/// ```
/// # use gedwick::dates::strategies::strip_qualifier;
/// assert_eq!(strip_qualifier("ABT 04 Jul 1776"), "04 Jul 1776");
/// assert_eq!(strip_qualifier("BET 1770 AND 1780"), "BET 1770 AND 1780");
/// assert_eq!(strip_qualifier("EST 1776"), "EST 1776");
/// ```
pub fn strip_qualifier(raw: &str) -> &str {
    match QUALIFIER_RE.find(raw) {
        Some(qualifier) => &raw[qualifier.end()..],
        None => raw,
    }
}

/// `04 Jul 1776`; month names are matched case-insensitively, as exports
/// write them in capitals (`04 JUL 1776`).
pub fn parse_day_month_year(s: &str) -> Option<NaiveDate> {
    let caps = DAY_MONTH_YEAR_RE.captures(s)?;
    let month = Month::from_str(&caps[2]).ok()?;
    let year = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month.number_from_month(), caps[1].parse().ok()?)
}

/// `Jul 1776`, taken as the first of the month.
pub fn parse_month_year(s: &str) -> Option<NaiveDate> {
    let caps = MONTH_YEAR_RE.captures(s)?;
    let month = Month::from_str(&caps[1]).ok()?;
    let year = caps[2].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month.number_from_month(), 1)
}

/// `1776`, taken as the first of January.
pub fn parse_year(s: &str) -> Option<NaiveDate> {
    let caps = YEAR_RE.captures(s)?;
    NaiveDate::from_ymd_opt(caps[1].parse().ok()?, 1, 1)
}

/// `BET 1770 AND 1780`, taken as the midpoint of the two New Year's days.
pub fn parse_between_years(s: &str) -> Option<NaiveDate> {
    let caps = BETWEEN_RE.captures(s)?;
    midpoint_of_years(caps[1].parse().ok()?, caps[2].parse().ok()?)
}

/// `ABT 1780/81`, a dual-dated year whose suffix shares the century of the
/// first year, taken as the midpoint like [parse_between_years].
///
/// The century is never adjusted: `ABT 1795/02` reads as 1795 to 1702.
pub fn parse_about_slash_year(s: &str) -> Option<NaiveDate> {
    let caps = ABOUT_SLASH_YEAR_RE.captures(s)?;
    let first: i32 = caps[1].parse().ok()?;
    let suffix: i32 = caps[2].parse().ok()?;
    midpoint_of_years(first, 100 * (first / 100) + suffix)
}

/// `first-01-01` plus half the days to `second-01-01`, rounded toward zero.
fn midpoint_of_years(first: i32, second: i32) -> Option<NaiveDate> {
    let start = NaiveDate::from_ymd_opt(first, 1, 1)?;
    let end = NaiveDate::from_ymd_opt(second, 1, 1)?;
    let half = end.signed_duration_since(start).num_days() / 2;
    start.checked_add_signed(TimeDelta::days(half))
}
