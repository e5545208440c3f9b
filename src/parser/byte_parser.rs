//! Low-level byte-by-byte parser for line-oriented and bracketed text.
//!
//! This module provides [ByteParser] for parsing text-based formats with support
//! for peeking, consuming, pattern matching and line tracking. Used as the
//! foundation for both the GEDCOM reader and the midnode reader.

use crate::parser::byte_source::{ByteSource, InMemoryByteSource};
use std::path::Path;

// =#========================================================================#=
// BYTE PARSER
// =#========================================================================#=
/// A byte-by-byte parser with support for peeking, consuming, and pattern matching.
///
/// The parser operates on ASCII structure (levels, tags, brackets), while
/// values such as personal names are sliced out of the input and decoded as
/// UTF-8, so accented names survive unchanged.
///
/// # Features
/// - Works with any [ByteSource]
/// - Case-insensitive matching for ASCII bytes
/// - Line tracking (`\n`, `\r\n` and lone `\r` all end a line)
/// - Context extraction for error reporting
///
/// # Example
/// ```
/// use gedwick::parser::ByteParser;
///
/// let mut parser = ByteParser::for_str("0 @I1@ INDI\n1 NAME Ann /Archdale/\n");
/// assert_eq!(parser.parse_decimal(), Some(0));
/// parser.skip_inline_whitespace();
/// assert_eq!(parser.parse_token(), "@I1@");
/// parser.skip_inline_whitespace();
/// assert_eq!(parser.parse_token(), "INDI");
/// assert!(parser.consume_line_break());
/// assert_eq!(parser.line(), 2);
/// ```
pub struct ByteParser<S: ByteSource> {
    source: S,
    /// 1-based line of the current position
    line: usize,
}

impl ByteParser<InMemoryByteSource> {
    /// Creates a new `ByteParser` from a byte slice by copying it into a Vec.
    pub fn for_bytes(input: &[u8]) -> Self {
        Self::new(InMemoryByteSource::from_vec(input.to_vec()))
    }

    /// Creates a new `ByteParser` from a string by copying it into a Vec.
    pub fn for_str(input: &str) -> Self {
        Self::new(InMemoryByteSource::from_vec(input.as_bytes().to_vec()))
    }

    /// Creates a new `ByteParser` over the full contents of a file.
    pub fn for_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Ok(Self::new(InMemoryByteSource::from_file(path)?))
    }
}

impl<S: ByteSource> ByteParser<S> {
    /// Creates a new `ByteParser` from a byte source.
    pub fn new(source: S) -> Self {
        Self { source, line: 1 }
    }

    /// Peeks at the current byte without consuming it.
    #[inline(always)]
    pub fn peek(&self) -> Option<u8> {
        self.source.peek()
    }

    /// Gets the current byte and advances the position (consumes it),
    /// keeping track of line breaks.
    #[inline]
    pub fn next_byte(&mut self) -> Option<u8> {
        let byte = self.source.next_byte()?;
        match byte {
            b'\n' => self.line += 1,
            // A lone '\r' ends a line too, "\r\n" is counted at the '\n'
            b'\r' if self.source.peek() != Some(b'\n') => self.line += 1,
            _ => {}
        }
        Some(byte)
    }

    /// Returns the 1-based line of the current position.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Skips (consumes) all consecutive whitespace characters,
    /// including line breaks.
    pub fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            if b == b' ' || b == b'\t' || b == b'\n' || b == b'\r' {
                self.next_byte();
            } else {
                break;
            }
        }
    }

    /// Skips (consumes) spaces and tabs, but stops at line breaks.
    pub fn skip_inline_whitespace(&mut self) {
        while let Some(b' ' | b'\t') = self.peek() {
            self.next_byte();
        }
    }

    /// Consumes a single line break (`\n`, `\r\n` or `\r`).
    ///
    /// # Returns
    /// `true` if a line break was consumed, `false` otherwise
    pub fn consume_line_break(&mut self) -> bool {
        match self.peek() {
            Some(b'\r') => {
                self.next_byte();
                if self.peek() == Some(b'\n') {
                    self.next_byte();
                }
                true
            }
            Some(b'\n') => {
                self.next_byte();
                true
            }
            _ => false,
        }
    }

    /// Checks if the current byte matches the target byte (case-insensitive for ASCII).
    pub fn peek_is(&self, ch: u8) -> bool {
        matches!(self.peek(), Some(b) if b.eq_ignore_ascii_case(&ch))
    }

    /// Consumes the current byte if it matches the target byte (case-insensitive).
    ///
    /// # Returns
    /// `true` if the byte was matched and consumed, `false` otherwise
    pub fn consume_if(&mut self, ch: u8) -> bool {
        if self.peek_is(ch) {
            self.next_byte();
            true
        } else {
            false
        }
    }

    /// Consumes bytes until any of the target bytes is found.
    ///
    /// # Arguments
    /// * `targets` - The set of bytes to search for
    /// * `mode` - Whether to consume the found byte (`Inclusive`) or stop before it (`Exclusive`)
    ///
    /// # Returns
    /// `Some(u8)` with the found byte, or `None` if EOF was reached first
    pub fn consume_until_any(&mut self, targets: &[u8], mode: ConsumeMode) -> Option<u8> {
        while let Some(b) = self.peek() {
            if targets.contains(&b) {
                if mode == ConsumeMode::Inclusive {
                    self.next_byte();
                }
                return Some(b);
            }
            self.next_byte();
        }
        None
    }

    /// Parses an unsigned decimal number made of ASCII digits.
    ///
    /// # Returns
    /// `None` if no digit is at the current position (nothing is consumed then)
    /// or if the number overflows.
    pub fn parse_decimal(&mut self) -> Option<u32> {
        let start = self.position();
        while let Some(b'0'..=b'9') = self.peek() {
            self.next_byte();
        }
        let digits = self.slice_from(start);
        if digits.is_empty() {
            return None;
        }
        std::str::from_utf8(digits).ok()?.parse().ok()
    }

    /// Parses a token up to the next space, tab, line break or EOF.
    pub fn parse_token(&mut self) -> String {
        let start = self.position();
        while let Some(b) = self.peek() {
            if matches!(b, b' ' | b'\t' | b'\n' | b'\r') {
                break;
            }
            self.next_byte();
        }
        String::from_utf8_lossy(self.slice_from(start)).into_owned()
    }

    /// Parses the remainder of the current line, without the line break.
    pub fn parse_rest_of_line(&mut self) -> String {
        let start = self.position();
        self.consume_until_any(b"\r\n", ConsumeMode::Exclusive);
        String::from_utf8_lossy(self.slice_from(start)).into_owned()
    }

    /// Parses an unquoted label until any of the given delimiters is encountered.
    ///
    /// The label may be empty.
    pub fn parse_unquoted_label(&mut self, delimiters: &[u8]) -> String {
        let start = self.position();
        while let Some(b) = self.peek() {
            if delimiters.contains(&b) {
                break;
            }
            self.next_byte();
        }
        String::from_utf8_lossy(self.slice_from(start)).into_owned()
    }

    /// Returns whether the end of data (EOF) has been reached.
    pub fn is_eof(&self) -> bool {
        self.source.is_eof()
    }

    /// Returns the current byte offset in the input.
    pub fn position(&self) -> usize {
        self.source.position()
    }

    /// Returns a slice of the input from a start position to the current position,
    /// or an empty slice if not available.
    pub fn slice_from(&self, start: usize) -> &[u8] {
        self.source.slice_from(start).unwrap_or(&[])
    }

    /// Returns up to `k` bytes from the current position for error context.
    pub fn get_context(&self, k: usize) -> Vec<u8> {
        self.source.get_context(k)
    }

    /// Returns a string from up to `k` bytes from the current position for error context.
    ///
    /// Invalid UTF-8 sequences are replaced with the Unicode replacement character.
    pub fn get_context_as_string(&self, k: usize) -> String {
        String::from_utf8_lossy(&self.get_context(k)).into_owned()
    }
}

/// Specifies whether to consume or leave the target when using `consume_until` methods.
///
/// # Examples
/// ```
/// use gedwick::parser::byte_parser::{ByteParser, ConsumeMode};
///
/// let mut parser = ByteParser::for_str("1 NAME Ann /Archdale/\n1 SEX F");
///
/// // Exclusive: stop in front of the line break
/// parser.consume_until_any(b"\r\n", ConsumeMode::Exclusive);
/// assert_eq!(parser.peek(), Some(b'\n'));
///
/// // Inclusive: swallow it
/// let mut parser = ByteParser::for_str("1 NAME Ann /Archdale/\n1 SEX F");
/// parser.consume_until_any(b"\r\n", ConsumeMode::Inclusive);
/// assert_eq!(parser.peek(), Some(b'1'));
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ConsumeMode {
    /// Consume the target byte along with everything before it.
    Inclusive,

    /// Stop before the target byte without consuming it.
    Exclusive,
}
