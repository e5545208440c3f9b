//! Arena representation of a midnode tree read back from its literal.
//!
//! - [MidnodeTree]: vertices in a contiguous vector, referenced by [VertexIndex].

use crate::model::vertex::Vertex;
use std::ops::{Index, IndexMut};

/// Index of a vertex in a tree (arena).
pub type VertexIndex = usize;

// =#========================================================================#=
// MIDNODE TREE
// =#========================================================================#=
/// A binary tree of ancestors represented using the arena pattern on [Vertex].
///
/// # Structure
/// - All vertices are stored in the arena, children before their parent
///   when built bottom-up (as the [midnode reader](crate::newick) does)
/// - The root may be a single leaf (one childless family with one spouse)
/// - An empty tree has no root (no trunk families)
///
/// # Example
/// ```
/// use gedwick::model::MidnodeTree;
///
/// // (Ann:1.5,Bob:2)1:0
/// let mut tree = MidnodeTree::new(2);
/// let ann = tree.add_leaf("Ann".to_string(), Some(1.5));
/// let bob = tree.add_leaf("Bob".to_string(), Some(2.0));
/// let couple = tree.add_internal((ann, bob), Some(1), Some(0.0));
/// tree.set_root(couple);
///
/// assert_eq!(tree.num_leaves(), 2);
/// assert_eq!(tree.internal_ids(), vec![1]);
/// assert_eq!(tree.leaf_labels(), vec!["Ann", "Bob"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MidnodeTree {
    /// Vertices of this tree (arena pattern)
    vertices: Vec<Vertex>,
    /// Index of the root of this tree
    root_index: Option<VertexIndex>,
}

// ============================================================================
// New, Construction (pub)
// ============================================================================
impl MidnodeTree {
    /// Creates a new tree with capacity for a binary tree with `num_leaves` leaves.
    pub fn new(num_leaves: usize) -> Self {
        let capacity = (2 * num_leaves).saturating_sub(1);
        Self {
            vertices: Vec::with_capacity(capacity),
            root_index: None,
        }
    }

    /// Adds a leaf, returning its index.
    pub fn add_leaf(&mut self, label: String, weight: Option<f64>) -> VertexIndex {
        let index = self.vertices.len();
        self.vertices.push(Vertex::new_leaf(index, label, weight));
        index
    }

    /// Adds an internal vertex above two existing vertices, returning its index.
    pub fn add_internal(&mut self, children: (VertexIndex, VertexIndex), id: Option<u32>, weight: Option<f64>) -> VertexIndex {
        let index = self.vertices.len();
        self.vertices.push(Vertex::new_internal(index, children, id, weight));
        self[children.0].set_parent(index);
        self[children.1].set_parent(index);
        index
    }

    /// Marks an existing vertex as root.
    pub fn set_root(&mut self, index: VertexIndex) {
        self.root_index = Some(index);
    }
}

// ============================================================================
// Getters, Traversal (pub)
// ============================================================================
impl MidnodeTree {
    /// Returns the root, `None` for an empty tree.
    pub fn root(&self) -> Option<&Vertex> {
        self.root_index.map(|index| &self.vertices[index])
    }

    pub fn is_empty(&self) -> bool {
        self.root_index.is_none()
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_leaves(&self) -> usize {
        self.vertices.iter().filter(|v| v.is_leaf()).count()
    }

    pub fn num_internal(&self) -> usize {
        self.vertices.iter().filter(|v| v.is_internal()).count()
    }

    /// Returns the vertices below the root in post-order
    /// (left subtree, right subtree, then the vertex itself).
    pub fn post_order(&self) -> Vec<&Vertex> {
        let mut order = Vec::with_capacity(self.vertices.len());
        let Some(root) = self.root_index else {
            return order;
        };

        // Iterative to cope with deep family lines
        let mut stack = vec![(root, false)];
        while let Some((index, expanded)) = stack.pop() {
            let vertex = &self.vertices[index];
            match vertex.children() {
                Some((left, right)) if !expanded => {
                    stack.push((index, true));
                    stack.push((right, false));
                    stack.push((left, false));
                }
                _ => order.push(vertex),
            }
        }
        order
    }

    /// Returns the ids of internal vertices in post-order.
    pub fn internal_ids(&self) -> Vec<u32> {
        self.post_order().into_iter().filter_map(Vertex::id).collect()
    }

    /// Returns the leaf labels from left to right.
    pub fn leaf_labels(&self) -> Vec<&str> {
        self.post_order().into_iter().filter_map(Vertex::label).collect()
    }
}

impl Index<VertexIndex> for MidnodeTree {
    type Output = Vertex;

    fn index(&self, index: VertexIndex) -> &Self::Output {
        &self.vertices[index]
    }
}

impl IndexMut<VertexIndex> for MidnodeTree {
    fn index_mut(&mut self, index: VertexIndex) -> &mut Self::Output {
        &mut self.vertices[index]
    }
}
