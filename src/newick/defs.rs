//! Constants for the midnode reader.

/// Leaf label delimiters: parentheses, comma, colon, semicolon, whitespace
pub(crate) const MIDNODE_LABEL_DELIMITERS: &[u8] = b"(),:; \n\t\r";

/// Default guess for number of leaves, when unknown
pub(crate) const DEFAULT_NUM_LEAVES_GUESS: usize = 16;
