//! Basic low-level byte parser functionality shared by the GEDCOM reader
//! and the midnode reader, along with their error type.

pub mod byte_parser;
pub mod byte_source;
pub mod parsing_error;

pub use byte_parser::ByteParser;
pub use parsing_error::{ParsingError, ParsingErrorType};
