//! Error types for the GEDCOM and midnode readers.
//!
//! This module provides [ParsingError] and [ParsingErrorType] for representing
//! and reporting errors that occur while reading record files or tree literals.
//! Unparseable *dates* are not errors; see [crate::dates].

use crate::parser::byte_parser::ByteParser;
use crate::parser::byte_source::ByteSource;

/// Default length of context provided by error from parser
const DEFAULT_CONTEXT_LENGTH: usize = 50;

// =#========================================================================#=
// PARSING ERROR TYPE
// =#========================================================================#=
/// Error types that can occur while reading GEDCOM records or midnode literals.
#[derive(PartialEq, Debug, Clone, thiserror::Error)]
pub enum ParsingErrorType {
    #[error("IO error - {0}")]
    IoError(String),
    #[error("Unexpected end of file")]
    UnexpectedEOF,
    #[error("Invalid GEDCOM line - {0}")]
    InvalidGedcomLine(String),
    #[error("Pointer {0} does not resolve to a record")]
    UnresolvedPointer(String),
    #[error("Record {0} defined more than once")]
    DuplicateRecord(String),
    #[error("Invalid midnode string: {0}")]
    InvalidMidnodeString(String),
}

// =#========================================================================#=
// PARSING ERROR
// =#========================================================================#=
/// Parsing error with contextual information (line, position and surrounding bytes).
#[derive(Debug, thiserror::Error)]
#[error("{kind} at line {line} (byte {position}){}", render_context(.context))]
pub struct ParsingError {
    kind: ParsingErrorType,
    line: usize,
    position: usize,
    context: String,
}

fn render_context(context: &str) -> String {
    if context.is_empty() {
        String::new()
    } else {
        format!("\n  Context (next {} bytes): {}", context.len(), context)
    }
}

impl ParsingError {
    /// Create a ParsingError from an error type and parser state
    pub fn from_parser<S: ByteSource>(kind: ParsingErrorType, parser: &ByteParser<S>) -> Self {
        Self {
            kind,
            line: parser.line(),
            position: parser.position(),
            context: parser.get_context_as_string(DEFAULT_CONTEXT_LENGTH),
        }
    }

    /// Convenience constructor for UnexpectedEOF
    pub fn unexpected_eof<S: ByteSource>(parser: &ByteParser<S>) -> Self {
        Self::from_parser(ParsingErrorType::UnexpectedEOF, parser)
    }

    /// Convenience constructor for InvalidGedcomLine
    pub fn invalid_gedcom_line<S: ByteSource>(parser: &ByteParser<S>, msg: String) -> Self {
        Self::from_parser(ParsingErrorType::InvalidGedcomLine(msg), parser)
    }

    /// Convenience constructor for InvalidMidnodeString
    pub fn invalid_midnode_string<S: ByteSource>(parser: &ByteParser<S>, msg: String) -> Self {
        Self::from_parser(ParsingErrorType::InvalidMidnodeString(msg), parser)
    }

    /// Create a ParsingError for a record at a known line, without byte context.
    ///
    /// Used once all records are read and pointers get resolved.
    pub fn at_line(kind: ParsingErrorType, line: usize) -> Self {
        Self { kind, line, position: 0, context: String::new() }
    }

    /// Get the error kind
    pub fn kind(&self) -> &ParsingErrorType {
        &self.kind
    }

    /// Get the (1-based) line where the error occurred
    pub fn line(&self) -> usize {
        self.line
    }

    /// Get the byte position where the error occurred
    pub fn position(&self) -> usize {
        self.position
    }
}

impl From<std::io::Error> for ParsingError {
    fn from(err: std::io::Error) -> Self {
        ParsingError {
            kind: ParsingErrorType::IoError(err.to_string()),
            line: 0,
            position: 0,
            context: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_context() {
        let mut parser = ByteParser::for_str("1 NAME\n2 DATE");
        parser.parse_decimal();
        parser.skip_inline_whitespace();
        let err = ParsingError::invalid_gedcom_line(&parser, "missing level".to_string());
        let text = err.to_string();
        assert!(text.starts_with("Invalid GEDCOM line - missing level at line 1 (byte 2)"));
        assert!(text.contains("Context (next 11 bytes): NAME\n2 DATE"));
    }

    #[test]
    fn test_display_without_context() {
        let err = ParsingError::at_line(ParsingErrorType::UnresolvedPointer("@F9@".to_string()), 12);
        assert_eq!(err.to_string(), "Pointer @F9@ does not resolve to a record at line 12 (byte 0)");
        assert_eq!(err.line(), 12);
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ParsingError = io.into();
        assert!(matches!(err.kind(), ParsingErrorType::IoError(msg) if msg == "gone"));
    }
}
