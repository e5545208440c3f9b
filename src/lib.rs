//! Gedwick turns genealogy exports into a balanced, age-ordered family tree
//! for an interactive tree viewer.
//!
//! Core functionality provided:
//! - GEDCOM: Read individuals, birth dates and families from a GEDCOM export.
//!   See [crate::gedcom].
//! - Dates: Infer one birth date per individual from loose date texts such as
//!   `ABT 04 Jul 1776`, `BET 1770 AND 1780` or `ABT 1780/81`.
//!   Unparseable dates are logged and skipped. See [crate::dates].
//! - Tree: Select the oldest family of every line, order them by age and
//!   lay them out as a balanced binary tree with every family's descendants
//!   hanging below it. See [crate::tree].
//! - Output: Wrap the tree literal into the `userdata` script the viewer
//!   loads, and read such literals back. See [crate::tree::writer] and
//!   [crate::newick].
//! - Models use the arena pattern: records and vertices refer to each other
//!   by index only. See [crate::model].
//!
//! Limitations:
//! - Only names, births and family links of a GEDCOM file are read
//! - Date qualifiers (`ABT`, `BEF`, `AFT`) are dropped, not modelled
//!
//! # Usage
//! ```no_run
//! use gedwick::config::BuildOptions;
//! use gedwick::{build_userdata, parse_gedcom_file, write_userdata_file};
//!
//! let records = parse_gedcom_file("archdale.ged")?;
//! let options = BuildOptions::new();
//! let script = build_userdata(&records, &options);
//! write_userdata_file(options.output_path(), &script)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod dates;
pub mod gedcom;
pub mod model;
pub mod newick;
pub mod parser;
pub mod tree;

use crate::config::BuildOptions;
use crate::dates::BirthDateMap;
use crate::model::RecordSet;
use crate::parser::ParsingError;
use std::path::Path;
use tracing::info;

pub use crate::tree::writer::write_userdata_file;

/// Reads a GEDCOM file into a [RecordSet].
///
/// Convenience for [gedcom::parse_file].
pub fn parse_gedcom_file<P: AsRef<Path>>(path: P) -> Result<RecordSet, ParsingError> {
    gedcom::parse_file(path)
}

/// Builds the full `userdata` script for a record set.
///
/// Infers birth dates, builds the tree literal and wraps it.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use gedwick::build_userdata;
/// use gedwick::config::BuildOptions;
/// use gedwick::gedcom::parse_str;
///
/// let records = parse_str("0 @I1@ INDI\n1 NAME Ann /Archdale/\n0 @F1@ FAM\n1 WIFE @I1@\n").unwrap();
/// let options = BuildOptions::new().with_today(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
///
/// assert_eq!(
///     build_userdata(&records, &options),
///     "function userdata() { fulltree = new midnode(\"Ann_Archdale:0;\"); }"
/// );
/// ```
pub fn build_userdata(records: &RecordSet, options: &BuildOptions) -> String {
    let birth_dates = BirthDateMap::infer(records);
    info!("Parsed {} birth dates", birth_dates.len());
    let tree = tree::build_tree(records, &birth_dates, options);
    tree::writer::to_userdata(&tree)
}
