/// Marks cross-reference ids and pointer values, e.g. `@I1@`
pub(crate) const XREF_DELIMITER: u8 = b'@';

// Records
pub(crate) const INDIVIDUAL: &str = "INDI";

pub(crate) const FAMILY: &str = "FAM";

// Individual
pub(crate) const NAME: &str = "NAME";

pub(crate) const BIRTH: &str = "BIRT";

pub(crate) const DATE: &str = "DATE";

// Family
pub(crate) const HUSBAND: &str = "HUSB";

pub(crate) const WIFE: &str = "WIFE";

pub(crate) const CHILD: &str = "CHIL";

/// Kind of the level-0 record a line belongs to
#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum RecordKind {
    Individual,
    Family,
    /// Header, trailer, sources, notes, ...
    Other,
}

impl RecordKind {
    /// Classify a level-0 tag (case-insensitive)
    pub(crate) fn from_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case(INDIVIDUAL) {
            RecordKind::Individual
        } else if tag.eq_ignore_ascii_case(FAMILY) {
            RecordKind::Family
        } else {
            RecordKind::Other
        }
    }
}
