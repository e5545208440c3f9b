use crate::gedcom::defs::{BIRTH, CHILD, DATE, HUSBAND, NAME, RecordKind, WIFE, XREF_DELIMITER};
use crate::model::{BirthEvent, IndividualIndex, RecordSet, RecordSetBuilder};
use crate::parser::byte_parser::ByteParser;
use crate::parser::byte_source::ByteSource;
use crate::parser::{ParsingError, ParsingErrorType};
use std::collections::HashMap;
use tracing::{debug, warn};

// =#========================================================================#=
// GEDCOM PARSER
// =#========================================================================#=
/// Reader for the subset of GEDCOM needed to build family trees.
///
/// Reads individuals (names and birth dates) and families (husband, wife,
/// children) and skips everything else. Links between individuals and
/// families are derived from the family records alone, so `FAMS`/`FAMC`
/// lines of individuals are not needed and are ignored.
///
/// Reading happens in two passes: all records are collected first, then
/// pointers are resolved, so records may refer to records further down.
///
/// # Errors
/// Fails on the first
/// * malformed line (missing or non-numeric level, missing tag),
/// * pointer value not shaped like `@xref@`,
/// * record id defined twice,
/// * pointer to an id that no individual has.
///
/// # Example
/// ```
/// use gedwick::gedcom::GedcomParser;
/// use gedwick::parser::ByteParser;
///
/// let input = "0 @I1@ INDI\n1 NAME Ann /Archdale/\n1 BIRT\n2 DATE 1776\n\
///              0 @F1@ FAM\n1 WIFE @I1@\n0 TRLR\n";
/// let records = GedcomParser::new().parse(ByteParser::for_str(input)).unwrap();
///
/// assert_eq!(records.num_individuals(), 1);
/// assert_eq!(records.families()[0].wife(), Some(0));
/// ```
#[derive(Debug, Default)]
pub struct GedcomParser {
    individuals: Vec<PendingIndividual>,
    families: Vec<PendingFamily>,
    /// Record id -> line of its definition, for both record kinds
    defined: HashMap<String, usize>,
}

/// Individual as read, before any pointer is resolved.
#[derive(Debug)]
struct PendingIndividual {
    xref: String,
    names: Vec<String>,
    births: Vec<BirthEvent>,
}

/// Family as read; pointers are kept with the line they appeared on.
#[derive(Debug)]
struct PendingFamily {
    xref: String,
    husband: Option<Pointer>,
    wife: Option<Pointer>,
    children: Vec<Pointer>,
}

#[derive(Debug, Clone)]
struct Pointer {
    xref: String,
    line: usize,
}

/// One physical line: `level [@xref@] TAG [value]`
#[derive(Debug, PartialEq)]
struct GedcomLine {
    level: u32,
    xref: Option<String>,
    tag: String,
    value: String,
    line: usize,
}

// ============================================================================
// Construction, Parsing (pub)
// ============================================================================
impl GedcomParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads all records from the given [ByteParser] and resolves them into a [RecordSet].
    ///
    /// # Arguments
    /// * `parser` - Byte parser positioned at the start of the GEDCOM text
    ///
    /// # Returns
    /// * `Ok(RecordSet)` - Individuals and families in the order they were defined
    /// * `Err(ParsingError)` - If a line is malformed or a pointer cannot be resolved
    pub fn parse<S: ByteSource>(mut self, mut parser: ByteParser<S>) -> Result<RecordSet, ParsingError> {
        self.read_records(&mut parser)?;
        debug!(
            individuals = self.individuals.len(),
            families = self.families.len(),
            lines = parser.line(),
            "Read GEDCOM records"
        );
        self.resolve()
    }
}

// ============================================================================
// First pass: reading records (private)
// ============================================================================
impl GedcomParser {
    fn read_records<S: ByteSource>(&mut self, parser: &mut ByteParser<S>) -> Result<(), ParsingError> {
        let mut record = RecordKind::Other;
        let mut in_birth = false;

        while let Some(line) = read_line(parser)? {
            match line.level {
                0 => {
                    in_birth = false;
                    record = RecordKind::from_tag(&line.tag);
                    self.start_record(record, &line)?;
                }
                1 => {
                    in_birth = false;
                    match record {
                        RecordKind::Individual => in_birth = self.add_individual_fact(&line),
                        RecordKind::Family => self.add_family_member(line)?,
                        RecordKind::Other => {}
                    }
                }
                2 if in_birth && line.tag.eq_ignore_ascii_case(DATE) => self.set_birth_date(line.value),
                _ => {}
            }
        }
        Ok(())
    }

    fn start_record(&mut self, record: RecordKind, line: &GedcomLine) -> Result<(), ParsingError> {
        if record == RecordKind::Other {
            return Ok(());
        }
        let Some(xref) = line.xref.clone() else {
            return Err(ParsingError::at_line(
                ParsingErrorType::InvalidGedcomLine(format!("{} record without id", line.tag)),
                line.line,
            ));
        };
        if let Some(first) = self.defined.insert(xref.clone(), line.line) {
            debug!(xref = %xref, first_line = first, "Record id defined again");
            return Err(ParsingError::at_line(ParsingErrorType::DuplicateRecord(xref), line.line));
        }

        if record == RecordKind::Individual {
            self.individuals.push(PendingIndividual { xref, names: Vec::new(), births: Vec::new() });
        } else {
            self.families.push(PendingFamily { xref, husband: None, wife: None, children: Vec::new() });
        }
        Ok(())
    }

    /// Adds a `NAME` or `BIRT` line to the current individual,
    /// returning whether a birth event was opened.
    fn add_individual_fact(&mut self, line: &GedcomLine) -> bool {
        let Some(individual) = self.individuals.last_mut() else {
            return false;
        };
        if line.tag.eq_ignore_ascii_case(NAME) {
            if !line.value.is_empty() {
                individual.names.push(line.value.clone());
            }
            false
        } else if line.tag.eq_ignore_ascii_case(BIRTH) {
            individual.births.push(BirthEvent::undated());
            true
        } else {
            false
        }
    }

    /// Sets the date of the open birth event; a second `DATE` is ignored.
    fn set_birth_date(&mut self, value: String) {
        let birth = self.individuals.last_mut().and_then(|individual| individual.births.last_mut());
        if let Some(birth) = birth {
            if birth.date.is_none() && !value.is_empty() {
                birth.date = Some(value);
            }
        }
    }

    fn add_family_member(&mut self, line: GedcomLine) -> Result<(), ParsingError> {
        let Some(family) = self.families.last_mut() else {
            return Ok(());
        };
        let slot = if line.tag.eq_ignore_ascii_case(HUSBAND) {
            Some(&mut family.husband)
        } else if line.tag.eq_ignore_ascii_case(WIFE) {
            Some(&mut family.wife)
        } else if line.tag.eq_ignore_ascii_case(CHILD) {
            None
        } else {
            return Ok(());
        };

        let pointer = parse_pointer(&line)?;
        match slot {
            Some(Some(existing)) => {
                warn!(family = %family.xref, kept = %existing.xref, ignored = %pointer.xref, "Family lists a second {}", line.tag);
            }
            Some(slot) => *slot = Some(pointer),
            None => family.children.push(pointer),
        }
        Ok(())
    }
}

// ============================================================================
// Second pass: resolving pointers (private)
// ============================================================================
impl GedcomParser {
    fn resolve(self) -> Result<RecordSet, ParsingError> {
        let mut builder = RecordSetBuilder::new();
        let mut indices: HashMap<String, IndividualIndex> = HashMap::with_capacity(self.individuals.len());

        for pending in self.individuals {
            let index = builder.add_individual(pending.xref.clone(), pending.names);
            for birth in pending.births {
                builder.add_birth(index, birth);
            }
            indices.insert(pending.xref, index);
        }

        let resolve = |pointer: &Pointer| -> Result<IndividualIndex, ParsingError> {
            indices.get(&pointer.xref).copied().ok_or_else(|| {
                ParsingError::at_line(ParsingErrorType::UnresolvedPointer(pointer.xref.clone()), pointer.line)
            })
        };

        for pending in self.families {
            let husband = pending.husband.as_ref().map(resolve).transpose()?;
            let wife = pending.wife.as_ref().map(resolve).transpose()?;
            let children = pending.children.iter().map(resolve).collect::<Result<Vec<_>, _>>()?;
            builder.add_family(pending.xref, husband, wife, children);
        }

        Ok(builder.finish())
    }
}

// ============================================================================
// Line level helpers (private)
// ============================================================================
/// Reads the next non-blank line, `None` at EOF.
fn read_line<S: ByteSource>(parser: &mut ByteParser<S>) -> Result<Option<GedcomLine>, ParsingError> {
    parser.skip_whitespace();
    if parser.is_eof() {
        return Ok(None);
    }
    let line = parser.line();

    let Some(level) = parser.parse_decimal() else {
        return Err(ParsingError::invalid_gedcom_line(
            parser,
            format!("Expected level number but found {:?}", parser.peek().map(|b| b as char)),
        ));
    };
    if !matches!(parser.peek(), Some(b' ' | b'\t')) {
        return Err(ParsingError::invalid_gedcom_line(
            parser,
            format!("Expected space after level {level} but found {:?}", parser.peek().map(|b| b as char)),
        ));
    }
    parser.skip_inline_whitespace();

    let xref = if parser.peek_is(XREF_DELIMITER) {
        let xref = parser.parse_token();
        parser.skip_inline_whitespace();
        Some(xref)
    } else {
        None
    };

    let tag = parser.parse_token();
    if tag.is_empty() {
        return Err(ParsingError::invalid_gedcom_line(parser, format!("Missing tag after level {level}")));
    }
    parser.skip_inline_whitespace();
    let value = parser.parse_rest_of_line().trim_end().to_string();
    parser.consume_line_break();

    Ok(Some(GedcomLine { level, xref, tag, value, line }))
}

/// Checks that a line's value is a pointer `@xref@`.
fn parse_pointer(line: &GedcomLine) -> Result<Pointer, ParsingError> {
    let value = line.value.as_bytes();
    let is_pointer = value.len() > 2 && value[0] == XREF_DELIMITER && value[value.len() - 1] == XREF_DELIMITER;
    if !is_pointer {
        return Err(ParsingError::at_line(
            ParsingErrorType::InvalidGedcomLine(format!("{} expects a pointer but found {:?}", line.tag, line.value)),
            line.line,
        ));
    }
    Ok(Pointer { xref: line.value.clone(), line: line.line })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<RecordSet, ParsingError> {
        GedcomParser::new().parse(ByteParser::for_str(input))
    }

    #[test]
    fn test_read_line_parts() {
        let mut parser = ByteParser::for_str("\n\n0 @I1@ INDI\r\n1 NAME  Ann /Archdale/  \n2 DATE\n");
        let first = read_line(&mut parser).unwrap().unwrap();
        assert_eq!(
            first,
            GedcomLine { level: 0, xref: Some("@I1@".to_string()), tag: "INDI".to_string(), value: String::new(), line: 3 }
        );
        let second = read_line(&mut parser).unwrap().unwrap();
        assert_eq!(second.tag, "NAME");
        assert_eq!(second.value, "Ann /Archdale/");
        assert_eq!(second.line, 4);
        let third = read_line(&mut parser).unwrap().unwrap();
        assert_eq!((third.level, third.value.as_str()), (2, ""));
        assert_eq!(read_line(&mut parser).unwrap(), None);
    }

    #[test]
    fn test_malformed_lines() {
        let err = parse("0 HEAD\nNAME Ann\n").unwrap_err();
        assert!(matches!(err.kind(), ParsingErrorType::InvalidGedcomLine(_)));
        assert_eq!(err.line(), 2);

        let err = parse("0 HEAD\n1\n").unwrap_err();
        assert!(matches!(err.kind(), ParsingErrorType::InvalidGedcomLine(_)));

        let err = parse("0 INDI\n").unwrap_err();
        assert!(matches!(err.kind(), ParsingErrorType::InvalidGedcomLine(_)));
    }

    #[test]
    fn test_birth_dates_and_names() {
        let records = parse(
            "0 @I1@ INDI\n1 NAME Ann /Archdale/\n1 NAME Annie /Archdale/\n\
             1 BIRT\n2 PLAC Charleston\n2 DATE ABT 1780/81\n2 DATE 1790\n\
             1 DEAT\n2 DATE 1850\n1 BIRT\n",
        )
        .unwrap();
        let ann = &records[0];
        assert_eq!(ann.formatted_name(), "Ann /Archdale/ aka Annie /Archdale/");
        assert_eq!(ann.births(), &[BirthEvent::on("ABT 1780/81"), BirthEvent::undated()]);
    }

    #[test]
    fn test_forward_pointers_and_links() {
        let records = parse(
            "0 @F1@ FAM\n1 HUSB @I1@\n1 WIFE @I2@\n1 CHIL @I3@\n\
             0 @I1@ INDI\n0 @I2@ INDI\n0 @I3@ INDI\n1 FAMC @F1@\n",
        )
        .unwrap();
        let family = records.family_by_xref("@F1@").unwrap();
        assert_eq!(family.husband(), Some(0));
        assert_eq!(family.wife(), Some(1));
        assert_eq!(family.children(), &[2]);
        assert_eq!(records[2].families_as_child(), &[0]);
    }

    #[test]
    fn test_pointer_errors() {
        let err = parse("0 @I1@ INDI\n0 @F1@ FAM\n1 HUSB @I1@\n1 CHIL @I9@\n").unwrap_err();
        assert_eq!(err.kind(), &ParsingErrorType::UnresolvedPointer("@I9@".to_string()));
        assert_eq!(err.line(), 4);

        let err = parse("0 @F1@ FAM\n1 WIFE Ann\n").unwrap_err();
        assert!(matches!(err.kind(), ParsingErrorType::InvalidGedcomLine(_)));

        let err = parse("0 @I1@ INDI\n0 @I1@ INDI\n").unwrap_err();
        assert_eq!(err.kind(), &ParsingErrorType::DuplicateRecord("@I1@".to_string()));
        assert_eq!(err.line(), 2);
    }

    #[test]
    fn test_second_husband_is_ignored() {
        let records = parse("0 @I1@ INDI\n0 @I2@ INDI\n0 @F1@ FAM\n1 HUSB @I1@\n1 HUSB @I2@\n").unwrap();
        assert_eq!(records.families()[0].husband(), Some(0));
        assert!(records[1].families_as_spouse().is_empty());
    }
}
