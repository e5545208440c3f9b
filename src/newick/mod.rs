//! Reader for midnode tree literals, the Newick-like notation the tree
//! builder writes.
//!
//! Mostly used to check built trees and to load previously written
//! `userdata` scripts.
//!
//! # Quick API
//! * [parse_str] - parses a single tree literal
//! * [parse_userdata] - parses the tree inside a `userdata` script
//!
//! # Full API
//! Configure a [MidnodeReader] and provide a [ByteParser].

mod defs;
mod reader;

pub use self::reader::MidnodeReader;

use crate::model::MidnodeTree;
use crate::parser::ParsingError;
use crate::parser::byte_parser::ByteParser;
use crate::tree::writer::extract_literal;

// ============================================================================
// QUICK PARSING API (pub)
// ============================================================================
/// Parses a single tree literal, terminated by `;`.
///
/// # Example
/// ```
/// use gedwick::newick::parse_str;
///
/// let tree = parse_str("((A:1,B:2)1:0,(C:3,)2:0)3:0;").unwrap();
/// assert_eq!(tree.num_leaves(), 4);
/// assert_eq!(tree.internal_ids(), vec![1, 2, 3]);
/// ```
pub fn parse_str<S: AsRef<str>>(literal: S) -> Result<MidnodeTree, ParsingError> {
    let mut byte_parser = ByteParser::for_str(literal.as_ref());
    MidnodeReader::new().parse(&mut byte_parser)
}

/// Parses the tree of a `userdata` script as written by
/// [write_userdata_file](crate::tree::writer::write_userdata_file).
///
/// # Returns
/// * [MidnodeTree] - Tree parsed from the embedded literal
/// * [ParsingError] - If the script is not a `userdata` wrapper or the literal is malformed
///
/// # Example
/// ```
/// use gedwick::newick::parse_userdata;
///
/// let tree = parse_userdata("function userdata() { fulltree = new midnode(\"(A:1,B:0)1:0;\"); }").unwrap();
/// assert_eq!(tree.leaf_labels(), vec!["A", "B"]);
/// ```
pub fn parse_userdata<S: AsRef<str>>(script: S) -> Result<MidnodeTree, ParsingError> {
    let script = script.as_ref();
    match extract_literal(script) {
        Some(literal) => parse_str(literal),
        None => Err(ParsingError::invalid_midnode_string(
            &ByteParser::for_str(script),
            "Not a userdata script".to_string(),
        )),
    }
}
