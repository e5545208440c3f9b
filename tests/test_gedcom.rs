use gedwick::gedcom::{GedcomParser, parse_file, parse_str};
use gedwick::parser::{ByteParser, ParsingErrorType};
use std::io::Write;

const FIXTURE: &str = "tests/fixtures/archdale.ged";

#[test]
fn test_parse_fixture() {
    let records = parse_file(FIXTURE).unwrap();
    assert_eq!(records.num_individuals(), 8);
    assert_eq!(records.num_families(), 4);

    let cain = records.individual_by_xref("@I5@").unwrap();
    assert_eq!(cain.formatted_name(), "Cain /Archdale/");
    assert_eq!(cain.families_as_child(), &[0]);
    assert_eq!(cain.families_as_spouse(), &[3]);
    assert!(cain.has_ancestors());

    let f1 = records.family_by_xref("@F1@").unwrap();
    assert_eq!(f1.spouses().collect::<Vec<_>>(), vec![0, 1]);
    assert_eq!(f1.children(), &[cain.index()]);

    let beth = records.individual_by_xref("@I4@").unwrap();
    assert_eq!(beth.births().len(), 1);
    assert_eq!(beth.births()[0].date, None);

    let carl = records.individual_by_xref("@I6@").unwrap();
    assert!(carl.births().is_empty());
}

#[test]
fn test_crlf_bom_and_blank_lines() {
    let input = "\u{feff}0 HEAD\r\n\r\n0 @I1@ INDI\r\n1 NAME Zoë /Archdale/\r1 BIRT\r\n2 DATE 1776\r\n";
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(input.as_bytes()).unwrap();

    let records = parse_file(file.path()).unwrap();
    assert_eq!(records[0].names(), &["Zoë /Archdale/".to_string()]);
    assert_eq!(records[0].births()[0].date.as_deref(), Some("1776"));
}

#[test]
fn test_lowercase_tags() {
    let records = parse_str("0 @I1@ indi\n1 name Ann\n0 @F1@ fam\n1 wife @I1@\n").unwrap();
    assert_eq!(records.families()[0].wife(), Some(0));
}

#[test]
fn test_family_without_spouses() {
    let records = parse_str("0 @I1@ INDI\n0 @F1@ FAM\n1 CHIL @I1@\n").unwrap();
    let family = &records.families()[0];
    assert_eq!(family.husband(), None);
    assert_eq!(family.wife(), None);
    assert!(records[0].has_ancestors());
}

#[test]
fn test_dangling_pointer_is_fatal() {
    let err = parse_str("0 @F1@ FAM\n1 HUSB @I404@\n").unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::UnresolvedPointer("@I404@".to_string()));
    assert_eq!(err.line(), 2);
    assert!(err.to_string().contains("@I404@"));
}

#[test]
fn test_malformed_line_reports_context() {
    let err = GedcomParser::new()
        .parse(ByteParser::for_str("0 HEAD\nx NAME Ann\n"))
        .unwrap_err();
    assert!(matches!(err.kind(), ParsingErrorType::InvalidGedcomLine(_)));
    assert_eq!(err.line(), 2);
    assert_eq!(err.position(), 7);
    assert!(err.to_string().contains("x NAME Ann"));
}

#[test]
fn test_missing_file() {
    let err = parse_file("tests/fixtures/does-not-exist.ged").unwrap_err();
    assert!(matches!(err.kind(), ParsingErrorType::IoError(_)));
}
