//! Byte source abstractions for parser.
//!
//! This module provides the [ByteSource] trait and the in-memory
//! implementation used when reading GEDCOM exports and midnode literals.

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// UTF-8 byte order mark some genealogy programs write at the start of exports.
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

// =#========================================================================#=
// BYTE SOURCE (Trait)
// =#========================================================================#=
/// Trait defining the interface for byte sources used by
/// [ByteParser](crate::parser::ByteParser).
///
/// GEDCOM exports of a family tree are small enough to be held in memory,
/// so [InMemoryByteSource] is the only implementation, but the parser logic
/// only relies on this trait.
pub trait ByteSource {
    /// Peek at the current byte without consuming it.
    ///
    /// # Returns
    /// * `Some(u8)` - The current byte if available
    /// * `None` - If at end of data (EOF)
    fn peek(&self) -> Option<u8>;

    /// Get the current byte and advance the position (consume it).
    fn next_byte(&mut self) -> Option<u8>;

    /// Returns the current byte offset.
    fn position(&self) -> usize;

    /// Returns a slice of bytes from a start position to the current position,
    /// or `None` if `start` lies behind the current position.
    fn slice_from(&self, start: usize) -> Option<&[u8]>;

    /// Returns up to `k` bytes from the current position for error context.
    fn get_context(&self, k: usize) -> Vec<u8>;

    /// Returns a slice of up to `k` bytes from the current position without allocating.
    fn peek_slice(&self, k: usize) -> &[u8];

    /// Check if at end of data.
    fn is_eof(&self) -> bool;
}

// =#========================================================================#=
// IN MEMORY BYTE SOURCE
// =#========================================================================#=
/// An in-memory byte source that owns its data.
pub struct InMemoryByteSource {
    /// The owned byte data being parsed
    input: Vec<u8>,
    /// Current position in the byte slice
    pos: usize,
}

impl InMemoryByteSource {
    /// Creates a new in-memory byte source from a Vec of bytes.
    ///
    /// A leading UTF-8 byte order mark is skipped.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        let pos = if bytes.starts_with(UTF8_BOM) { UTF8_BOM.len() } else { 0 };
        Self { input: bytes, pos }
    }

    /// Reads the whole file at `path` into memory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let mut contents = Vec::new();
        let mut file = File::open(path)?;
        file.read_to_end(&mut contents)?;
        Ok(Self::from_vec(contents))
    }
}

impl ByteSource for InMemoryByteSource {
    #[inline(always)]
    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    #[inline(always)]
    fn next_byte(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Some(byte)
    }

    #[inline]
    fn position(&self) -> usize {
        self.pos
    }

    fn slice_from(&self, start: usize) -> Option<&[u8]> {
        if start <= self.pos && self.pos <= self.input.len() {
            Some(&self.input[start..self.pos])
        } else {
            None
        }
    }

    fn get_context(&self, k: usize) -> Vec<u8> {
        self.peek_slice(k).to_vec()
    }

    #[inline(always)]
    fn peek_slice(&self, k: usize) -> &[u8] {
        let start = self.pos.min(self.input.len());
        let end = (self.pos + k).min(self.input.len());
        &self.input[start..end]
    }

    fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bom_is_skipped() {
        let source = InMemoryByteSource::from_vec(b"\xEF\xBB\xBF0 HEAD".to_vec());
        assert_eq!(source.peek(), Some(b'0'));
        assert_eq!(source.position(), 3);
    }

    #[test]
    fn test_slice_from_and_context() {
        let mut source = InMemoryByteSource::from_vec(b"0 @I1@ INDI".to_vec());
        for _ in 0..6 {
            source.next_byte();
        }
        assert_eq!(source.slice_from(2), Some(&b"@I1@"[..]));
        assert_eq!(source.slice_from(7), None);
        assert_eq!(source.get_context(3), b" IN".to_vec());
        assert_eq!(source.peek_slice(100), b" INDI");
    }
}
