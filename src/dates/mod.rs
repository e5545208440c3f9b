//! Birth date inference from loosely structured export dates.
//!
//! Genealogy exports mix exact dates (`04 JUL 1776`), partial dates
//! (`JUL 1776`, `1776`), qualified dates (`ABT 1776`, `BEF 1776`) and ranges
//! (`BET 1770 AND 1780`, `ABT 1780/81`). This module turns each into one
//! point estimate, trying the [strategies] in order and taking the first hit.
//! Qualifiers are discarded: `BEF 1776` is treated as 1776.
//!
//! Text matching none of the patterns is not an error; it is logged as a
//! warning, recorded as an [UnparsedDate], and the next birth event of the
//! individual is tried.
//!
//! # Example
//! ```
//! use chrono::NaiveDate;
//! use gedwick::dates::parse_date;
//!
//! assert_eq!(parse_date("ABT 04 Jul 1776"), NaiveDate::from_ymd_opt(1776, 7, 4));
//! assert_eq!(parse_date("BET 1770 AND 1780"), NaiveDate::from_ymd_opt(1775, 1, 1));
//! assert_eq!(parse_date("Q1 1776"), None);
//! ```

pub mod strategies;

use crate::model::{Individual, IndividualIndex, RecordSet};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use strategies::{DATE_STRATEGIES, DateInput, strip_qualifier};
use tracing::{debug, warn};

/// Parses one date text into its point estimate, or `None` if no pattern matches.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let stripped = strip_qualifier(raw);
    DATE_STRATEGIES.iter().find_map(|strategy| {
        let input = match strategy.input {
            DateInput::Stripped => stripped,
            DateInput::Raw => raw,
        };
        (strategy.parse)(input)
    })
}

/// Whole days from `from` to `to`; negative if `to` lies before `from`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Infers the birth date of one individual from its birth events.
///
/// Events without date text are skipped. Unparseable texts are logged and
/// the next event is tried.
pub fn infer_birth_date(individual: &Individual) -> Option<NaiveDate> {
    infer_recording(individual, &mut Vec::new())
}

fn infer_recording(individual: &Individual, unparsed: &mut Vec<UnparsedDate>) -> Option<NaiveDate> {
    let dated = individual
        .births()
        .iter()
        .filter_map(|birth| birth.date.as_deref())
        .filter(|date| !date.is_empty());

    for raw in dated {
        if let Some(date) = parse_date(raw) {
            return Some(date);
        }
        warn!(
            date = raw,
            individual = individual.xref(),
            name = %individual.formatted_name(),
            "Unable to parse birth date"
        );
        unparsed.push(UnparsedDate {
            individual: individual.index(),
            xref: individual.xref().to_string(),
            raw: raw.to_string(),
        });
    }
    None
}

// =#========================================================================#=
// UNPARSED DATE
// =#========================================================================#=
/// A birth date text that matched none of the known patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnparsedDate {
    pub individual: IndividualIndex,
    pub xref: String,
    pub raw: String,
}

// =#========================================================================#=
// BIRTH DATE MAP
// =#========================================================================#=
/// Inferred birth date per individual; individuals without a usable date are absent.
///
/// Built once per run with [BirthDateMap::infer] and only read afterwards.
///
/// # Example
/// ```
/// use gedwick::dates::BirthDateMap;
/// use gedwick::model::{BirthEvent, RecordSetBuilder};
///
/// let mut builder = RecordSetBuilder::new();
/// let ann = builder.add_individual("@I1@", ["Ann /Archdale/"]);
/// builder.add_birth(ann, BirthEvent::on("Q1 1776"));
/// builder.add_birth(ann, BirthEvent::on("ABT 1780/81"));
/// let bob = builder.add_individual("@I2@", ["Bob /Archdale/"]);
/// let records = builder.finish();
///
/// let dates = BirthDateMap::infer(&records);
/// assert_eq!(dates.get(ann).map(|d| d.to_string()), Some("1780-07-02".to_string()));
/// assert_eq!(dates.get(bob), None);
/// assert_eq!(dates.unparsed().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BirthDateMap {
    dates: BTreeMap<IndividualIndex, NaiveDate>,
    unparsed: Vec<UnparsedDate>,
}

impl BirthDateMap {
    /// Creates an empty map, e.g. to fill it by hand with [insert](Self::insert).
    pub fn new() -> Self {
        Self::default()
    }

    /// Infers the birth dates of all individuals of a record set.
    pub fn infer(records: &RecordSet) -> Self {
        let mut map = Self::new();
        for individual in records.individuals() {
            if let Some(date) = infer_recording(individual, &mut map.unparsed) {
                map.dates.insert(individual.index(), date);
            }
        }
        debug!(
            dated = map.dates.len(),
            unparsed = map.unparsed.len(),
            "Inferred birth dates"
        );
        map
    }

    /// Sets the birth date of an individual, replacing any previous one.
    pub fn insert(&mut self, individual: IndividualIndex, date: NaiveDate) {
        self.dates.insert(individual, date);
    }

    /// Returns the inferred birth date, `None` if unknown.
    pub fn get(&self, individual: IndividualIndex) -> Option<NaiveDate> {
        self.dates.get(&individual).copied()
    }

    /// Number of individuals with a known birth date.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Iterates over known birth dates by individual index.
    pub fn iter(&self) -> impl Iterator<Item = (IndividualIndex, NaiveDate)> + '_ {
        self.dates.iter().map(|(&index, &date)| (index, date))
    }

    /// All date texts that could not be parsed, in record order.
    pub fn unparsed(&self) -> &[UnparsedDate] {
        &self.unparsed
    }
}
