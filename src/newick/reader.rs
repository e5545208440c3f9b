use crate::model::{MidnodeTree, VertexIndex};
use crate::newick::defs::{DEFAULT_NUM_LEAVES_GUESS, MIDNODE_LABEL_DELIMITERS};
use crate::parser::byte_parser::ByteParser;
use crate::parser::byte_source::ByteSource;
use crate::parser::ParsingError;

/// Reader for midnode tree literals into a [MidnodeTree].
///
/// # Format
/// * `tree ::= [vertex] ';'`
/// * `vertex ::= internal | leaf`
/// * `internal ::= '(' vertex ',' vertex ')' [id] [weight]`
/// * `leaf ::= [label] [weight]`
/// * `weight ::= ':' number`
///
/// Whitespace may occur between elements. A leaf label may be empty,
/// and a lone `;` is the empty tree.
///
/// # Example
/// ```
/// use gedwick::newick::MidnodeReader;
/// use gedwick::parser::ByteParser;
///
/// let mut byte_parser = ByteParser::for_str("((A:1,B:2)1:0,C:0.5)2:0;");
/// let tree = MidnodeReader::new().parse(&mut byte_parser).unwrap();
///
/// assert_eq!(tree.leaf_labels(), vec!["A", "B", "C"]);
/// assert_eq!(tree.internal_ids(), vec![1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct MidnodeReader {
    num_leaves: usize,
}

impl MidnodeReader {
    pub fn new() -> Self {
        Self { num_leaves: DEFAULT_NUM_LEAVES_GUESS }
    }

    /// Sets the expected number of leaves, to allocate the tree once.
    pub fn with_num_leaves(mut self, num_leaves: usize) -> Self {
        self.num_leaves = num_leaves;
        self
    }

    /// Parses one tree up to and including its terminating `;`.
    ///
    /// # Arguments
    /// * `parser` - The byte parser positioned at the start of a tree literal
    ///
    /// # Returns
    /// * `Ok(MidnodeTree)` - The parsed tree, without root if the literal is just `;`
    /// * `Err(ParsingError)` - If the literal is malformed
    pub fn parse<S: ByteSource>(&self, parser: &mut ByteParser<S>) -> Result<MidnodeTree, ParsingError> {
        let mut tree = MidnodeTree::new(self.num_leaves);

        parser.skip_whitespace();
        if !parser.peek_is(b';') {
            let root = self.parse_vertex(parser, &mut tree)?;
            tree.set_root(root);
        }

        parser.skip_whitespace();
        if !parser.consume_if(b';') {
            return Err(ParsingError::invalid_midnode_string(
                parser,
                format!("Expected ';' at end of tree but found {:?}", parser.peek().map(|b| b as char)),
            ));
        }
        Ok(tree)
    }

    /// Parses a vertex, dispatching on a leading `(`.
    fn parse_vertex<S: ByteSource>(&self, parser: &mut ByteParser<S>, tree: &mut MidnodeTree) -> Result<VertexIndex, ParsingError> {
        parser.skip_whitespace();
        if parser.peek_is(b'(') {
            self.parse_internal(parser, tree)
        } else {
            self.parse_leaf(parser, tree)
        }
    }

    /// Parses `(left,right)[id][:weight]`.
    fn parse_internal<S: ByteSource>(&self, parser: &mut ByteParser<S>, tree: &mut MidnodeTree) -> Result<VertexIndex, ParsingError> {
        expect(parser, b'(', "before children")?;
        let left = self.parse_vertex(parser, tree)?;
        parser.skip_whitespace();
        expect(parser, b',', "between children")?;
        let right = self.parse_vertex(parser, tree)?;
        parser.skip_whitespace();
        expect(parser, b')', "after children")?;

        parser.skip_whitespace();
        let id = parser.parse_decimal();
        let weight = parse_weight(parser)?;
        Ok(tree.add_internal((left, right), id, weight))
    }

    /// Parses `[label][:weight]`.
    fn parse_leaf<S: ByteSource>(&self, parser: &mut ByteParser<S>, tree: &mut MidnodeTree) -> Result<VertexIndex, ParsingError> {
        let label = parser.parse_unquoted_label(MIDNODE_LABEL_DELIMITERS);
        let weight = parse_weight(parser)?;
        Ok(tree.add_leaf(label, weight))
    }
}

impl Default for MidnodeReader {
    fn default() -> Self {
        Self::new()
    }
}

fn expect<S: ByteSource>(parser: &mut ByteParser<S>, byte: u8, place: &str) -> Result<(), ParsingError> {
    if parser.consume_if(byte) {
        return Ok(());
    }
    if parser.is_eof() {
        return Err(ParsingError::unexpected_eof(parser));
    }
    Err(ParsingError::invalid_midnode_string(
        parser,
        format!("Expected '{}' {place} but found {:?}", byte as char, parser.peek().map(|b| b as char)),
    ))
}

/// Parses an optional `:number`, allowing whitespace around the colon.
fn parse_weight<S: ByteSource>(parser: &mut ByteParser<S>) -> Result<Option<f64>, ParsingError> {
    parser.skip_whitespace();
    if !parser.consume_if(b':') {
        return Ok(None);
    }
    parser.skip_whitespace();

    let start = parser.position();
    while let Some(b) = parser.peek() {
        if b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+' | b'e' | b'E') {
            parser.next_byte();
        } else {
            break;
        }
    }
    let number = String::from_utf8_lossy(parser.slice_from(start)).into_owned();
    let value = number
        .parse::<f64>()
        .map_err(|_| ParsingError::invalid_midnode_string(parser, format!("Invalid weight: {number:?}")))?;
    Ok(Some(value))
}
