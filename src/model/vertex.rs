//! Vertex module for midnode tree representation.

use crate::model::tree::VertexIndex;

// =#========================================================================#=
// VERTEX
// =#========================================================================#=
/// Represents a vertex of a [MidnodeTree](crate::model::MidnodeTree).
///
/// A vertex can be either:
/// - **Internal**: Has two children, an optional numeric id and a weight
/// - **Leaf**: Has no children, has a (possibly empty) label and a weight
///
/// In trees produced by the [tree builder](crate::tree), internal weights are
/// always `0` and leaf weights are ages in years.
///
/// # Invariants
/// - `index` is the index in the arena
/// - `parent` is `None` only for the root and during construction
#[derive(PartialEq, Debug, Clone)]
pub enum Vertex {
    /// Internal vertex (has two children)
    Internal {
        /// Index of this vertex in the tree arena
        index: VertexIndex,
        /// Index of the parent vertex
        parent: Option<VertexIndex>,
        /// Indices of the two child vertices
        children: (VertexIndex, VertexIndex),
        /// Node id written after the closing parenthesis
        id: Option<u32>,
        /// Value after `:`
        weight: Option<f64>,
    },
    /// Leaf vertex (has label, no children)
    Leaf {
        /// Index of this vertex in the tree arena
        index: VertexIndex,
        /// Index of the parent vertex
        parent: Option<VertexIndex>,
        /// Label, e.g. a sanitized name
        label: String,
        /// Value after `:`
        weight: Option<f64>,
    },
}

impl Vertex {
    /// Creates a new internal vertex without parent.
    pub fn new_internal(index: VertexIndex, children: (VertexIndex, VertexIndex), id: Option<u32>, weight: Option<f64>) -> Self {
        Vertex::Internal { index, parent: None, children, id, weight }
    }

    /// Creates a new leaf vertex without parent.
    pub fn new_leaf(index: VertexIndex, label: String, weight: Option<f64>) -> Self {
        Vertex::Leaf { index, parent: None, label, weight }
    }

    /// Returns the index of this vertex.
    pub fn index(&self) -> VertexIndex {
        match self {
            Vertex::Internal { index, .. } | Vertex::Leaf { index, .. } => *index,
        }
    }

    /// Returns the parent index, `None` for the root.
    pub fn parent(&self) -> Option<VertexIndex> {
        match self {
            Vertex::Internal { parent, .. } | Vertex::Leaf { parent, .. } => *parent,
        }
    }

    pub(crate) fn set_parent(&mut self, new_parent: VertexIndex) {
        match self {
            Vertex::Internal { parent, .. } | Vertex::Leaf { parent, .. } => *parent = Some(new_parent),
        }
    }

    /// Returns the weight written after `:`, if any.
    pub fn weight(&self) -> Option<f64> {
        match self {
            Vertex::Internal { weight, .. } | Vertex::Leaf { weight, .. } => *weight,
        }
    }

    /// Returns the children of an internal vertex.
    pub fn children(&self) -> Option<(VertexIndex, VertexIndex)> {
        match self {
            Vertex::Internal { children, .. } => Some(*children),
            Vertex::Leaf { .. } => None,
        }
    }

    /// Returns the id of an internal vertex.
    pub fn id(&self) -> Option<u32> {
        match self {
            Vertex::Internal { id, .. } => *id,
            Vertex::Leaf { .. } => None,
        }
    }

    /// Returns the label of a leaf.
    pub fn label(&self) -> Option<&str> {
        match self {
            Vertex::Leaf { label, .. } => Some(label.as_str()),
            Vertex::Internal { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Vertex::Leaf { .. })
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, Vertex::Internal { .. })
    }

    pub fn is_root(&self) -> bool {
        self.parent().is_none()
    }
}
