//! Data model: genealogical records in, midnode trees out.
//!
//! # Records
//! [RecordSet] stores [Individual]s and [Family]s in two arenas, referenced by
//! [IndividualIndex] and [FamilyIndex]. No individual owns a family or vice
//! versa; the graph is only ever walked downwards (parents to children) or
//! queried for ancestor links, so plain indices suffice.
//!
//! # Trees
//! [MidnodeTree] uses the same arena pattern on [Vertex] nodes, referenced by
//! [VertexIndex]. It is what the [midnode reader](crate::newick) produces from
//! an emitted tree literal. The [tree builder](crate::tree) itself writes text
//! directly and never materializes a tree.

pub mod record_set;
pub mod tree;
pub mod vertex;

// Records
pub use record_set::BirthEvent;
pub use record_set::Family;
pub use record_set::FamilyIndex;
pub use record_set::Individual;
pub use record_set::IndividualIndex;
pub use record_set::RecordSet;
pub use record_set::RecordSetBuilder;
// Trees
pub use tree::MidnodeTree;
pub use tree::VertexIndex;
pub use vertex::Vertex;
