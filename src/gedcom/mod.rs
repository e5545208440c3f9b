//! GEDCOM reader for individuals, births and families.
//!
//! This module provides [GedcomParser] to read the records a family tree is
//! built from out of a GEDCOM export into a [RecordSet].
//!
//! # Quick API
//! * [parse_file] - reads a whole file
//! * [parse_str] - reads a string
//!
//! # Full API
//! Create a [GedcomParser] and hand it a [ByteParser] over any [ByteSource](crate::parser::byte_source::ByteSource).
//!
//! # Format
//! Every line has the shape `level [@xref@] TAG [value]`. Of these, only
//! the following are read:
//! * `0 @I..@ INDI` with `1 NAME` and `1 BIRT` / `2 DATE`
//! * `0 @F..@ FAM` with `1 HUSB`, `1 WIFE` and `1 CHIL` pointers
//!
//! All other records and tags are skipped, as are blank lines.

mod defs;
mod parser;

pub use self::parser::GedcomParser;

use crate::model::RecordSet;
use crate::parser::ParsingError;
use crate::parser::byte_parser::ByteParser;
use std::path::Path;

// ============================================================================
// QUICK PARSING API (pub)
// ============================================================================
/// Reads a GEDCOM file into a [RecordSet].
///
/// # Arguments
/// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
///
/// # Returns
/// * [RecordSet] - All individuals and families of the file
/// * [ParsingError] - If the file cannot be read or a record is malformed
///
/// # Example
/// ```no_run
/// use gedwick::gedcom::parse_file;
///
/// let records = parse_file("archdale.ged")?;
/// println!("Read {} individuals", records.num_individuals());
/// # Ok::<(), gedwick::parser::ParsingError>(())
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<RecordSet, ParsingError> {
    let byte_parser = ByteParser::for_file(path)?;
    GedcomParser::new().parse(byte_parser)
}

/// Reads GEDCOM text into a [RecordSet].
///
/// # Example
/// ```
/// use gedwick::gedcom::parse_str;
///
/// let records = parse_str("0 HEAD\n0 @I1@ INDI\n1 NAME Ann /Archdale/\n0 TRLR\n").unwrap();
/// assert_eq!(records[0].formatted_name(), "Ann /Archdale/");
/// ```
pub fn parse_str<S: AsRef<str>>(gedcom: S) -> Result<RecordSet, ParsingError> {
    GedcomParser::new().parse(ByteParser::for_str(gedcom.as_ref()))
}
