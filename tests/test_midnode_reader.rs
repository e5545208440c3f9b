use gedwick::newick::{MidnodeReader, parse_str, parse_userdata};
use gedwick::parser::{ByteParser, ParsingErrorType};
use gedwick::tree::writer::to_userdata;

#[test]
fn test_structure_and_parents() {
    let tree = parse_str("((A:1,B:2)1:0,C:3)2:0;").unwrap();
    assert_eq!(tree.num_vertices(), 5);
    assert_eq!(tree.num_leaves(), 3);

    let root = tree.root().unwrap();
    assert!(root.is_root());
    let (left, right) = root.children().unwrap();
    assert_eq!(tree[left].id(), Some(1));
    assert_eq!(tree[right].label(), Some("C"));
    assert_eq!(tree[right].parent(), Some(root.index()));
}

#[test]
fn test_ages_with_fractions() {
    let tree = parse_str("(John_Archdale:99.997,Mary_Archdale:0)1:0;").unwrap();
    let weights: Vec<_> = tree.post_order().iter().map(|v| v.weight()).collect();
    assert_eq!(weights, vec![Some(99.997), Some(0.0), Some(0.0)]);
}

#[test]
fn test_unmarried_children_subtrees() {
    let tree = parse_str("((A:1,B:2)1:0,)2:0;").unwrap();
    assert_eq!(tree.leaf_labels(), vec!["A", "B", ""]);
    assert_eq!(tree.internal_ids(), vec![1, 2]);
}

#[test]
fn test_reader_stops_after_semicolon() {
    let mut byte_parser = ByteParser::for_str("(A:1,B:1)1:0;\n(C:1,D:1)2:0;");
    let reader = MidnodeReader::new().with_num_leaves(2);
    let first = reader.parse(&mut byte_parser).unwrap();
    let second = reader.parse(&mut byte_parser).unwrap();
    assert_eq!(first.leaf_labels(), vec!["A", "B"]);
    assert_eq!(second.leaf_labels(), vec!["C", "D"]);
}

#[test]
fn test_userdata_round_trip() {
    let literal = "((A:1,B:2)1:0,(C:3,D:4)2:0)3:0";
    let tree = parse_userdata(to_userdata(literal)).unwrap();
    assert_eq!(tree.internal_ids(), vec![1, 2, 3]);
}

#[test]
fn test_missing_comma() {
    let err = parse_str("(A:1 B:2)1:0;").unwrap_err();
    assert!(matches!(err.kind(), ParsingErrorType::InvalidMidnodeString(_)));
    assert_eq!(err.position(), 5);
}
