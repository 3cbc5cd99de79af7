//! Structured document values assembled from file trees.
//!
//! This module provides [`DocumentNode`], the tree value a file store is
//! assembled into before being handed to a schema engine.

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// A node in a structured document mirroring a directory hierarchy.
///
/// Leaves hold the parsed value of a single file; branches mirror
/// directories as ordered name-to-node mappings. Names are unique within a
/// branch, and branch order is traversal order (lexical by entry name),
/// significant for reproducibility, not for validity.
///
/// # Example
///
/// ```rust
/// use debrief::{MemoryStore, TreeBuilder, YamlParser};
///
/// let store = MemoryStore::new()
///     .file("a.yml", "x: 1")
///     .dir("b", MemoryStore::new().file("c.yml", "y: 2"));
///
/// let document = TreeBuilder::new(YamlParser).build(&store).unwrap();
///
/// assert!(document.get("a.yml").unwrap().is_leaf());
/// assert!(document.get("b").unwrap().is_branch());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentNode {
    /// A parsed value from one file.
    Leaf(Value),
    /// An ordered mapping of entry name to subtree.
    Branch(IndexMap<String, DocumentNode>),
}

impl DocumentNode {
    /// Creates a leaf holding the given value.
    pub fn leaf(value: impl Into<Value>) -> Self {
        DocumentNode::Leaf(value.into())
    }

    /// Returns true if this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, DocumentNode::Leaf(_))
    }

    /// Returns true if this node is a branch.
    pub fn is_branch(&self) -> bool {
        matches!(self, DocumentNode::Branch(_))
    }

    /// Returns the leaf value, or None if this node is a branch.
    pub fn as_leaf(&self) -> Option<&Value> {
        match self {
            DocumentNode::Leaf(value) => Some(value),
            DocumentNode::Branch(_) => None,
        }
    }

    /// Returns the branch fields, or None if this node is a leaf.
    pub fn as_branch(&self) -> Option<&IndexMap<String, DocumentNode>> {
        match self {
            DocumentNode::Leaf(_) => None,
            DocumentNode::Branch(fields) => Some(fields),
        }
    }

    /// Looks up a direct child of a branch by name.
    ///
    /// Returns None for leaves and for absent names.
    pub fn get(&self, name: &str) -> Option<&DocumentNode> {
        self.as_branch()?.get(name)
    }

    /// Converts the whole tree into a single `serde_json::Value`.
    ///
    /// This is the form handed to a schema engine for unification, or
    /// re-serialized for inspection. Branches become objects keyed by entry
    /// name.
    pub fn to_value(&self) -> Value {
        match self {
            DocumentNode::Leaf(value) => value.clone(),
            DocumentNode::Branch(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(name, node)| (name.clone(), node.to_value()))
                    .collect::<Map<String, Value>>(),
            ),
        }
    }
}
