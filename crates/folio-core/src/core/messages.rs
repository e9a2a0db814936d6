// crates/folio-core/src/core/messages.rs
// ============================================================================
// Module: Folio Message Trees
// Description: Nested UI message trees with set-at-path and deep merge.
// Purpose: Reconstruct and combine locale message trees deterministically.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! A [`MessageTree`] maps keys to [`MessageNode`]s: a text leaf, a sequence
//! leaf, or a nested branch. Override trees are rebuilt from flat dotted paths
//! with [`MessageTree::set_path`] and layered over a baseline with
//! [`deep_merge`].
//!
//! ## Invariants
//! - A key path is either a leaf or a branch within one tree, never both.
//! - When a path write collides with an existing node of the other kind, the
//!   later write wins and the collision is reported as a [`PathConflict`].
//! - [`deep_merge`] recurses only where both sides hold a branch; everywhere
//!   else the overlay node replaces the baseline node wholesale.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Types
// ============================================================================

/// A single node in a message tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageNode {
    /// Plain string leaf.
    Text(String),
    /// Ordered sequence-of-strings leaf.
    Sequence(Vec<String>),
    /// Nested branch.
    Branch(MessageTree),
}

impl MessageNode {
    /// Returns true when the node is a branch.
    #[must_use]
    pub const fn is_branch(&self) -> bool {
        matches!(self, Self::Branch(_))
    }

    /// Returns the text value when the node is a text leaf.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the items when the node is a sequence leaf.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[String]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }
}

/// Nested key to node mapping with deterministic key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageTree(BTreeMap<String, MessageNode>);

/// Kind of structural collision observed while writing a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    /// An intermediate segment held a leaf and was replaced by a branch.
    LeafReplacedByBranch,
    /// The final segment held a branch and was replaced by a leaf.
    BranchReplacedByLeaf,
}

impl ConflictKind {
    /// Returns a stable label for the conflict kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LeafReplacedByBranch => "leaf_replaced_by_branch",
            Self::BranchReplacedByLeaf => "branch_replaced_by_leaf",
        }
    }
}

/// A path collision detected during override reconstruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathConflict {
    /// Dotted path of the node that was replaced.
    pub path: String,
    /// What replaced what.
    pub kind: ConflictKind,
}

// ============================================================================
// SECTION: Tree Operations
// ============================================================================

impl MessageTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of top-level keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when the tree has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Inserts a top-level node, returning the previous node if any.
    pub fn insert(&mut self, key: impl Into<String>, node: MessageNode) -> Option<MessageNode> {
        self.0.insert(key.into(), node)
    }

    /// Iterates top-level entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MessageNode)> {
        self.0.iter().map(|(key, node)| (key.as_str(), node))
    }

    /// Looks up a node by dotted path (`"nav.home"`).
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&MessageNode> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut node = self.0.get(first)?;
        for segment in segments {
            let MessageNode::Branch(tree) = node else {
                return None;
            };
            node = tree.0.get(segment)?;
        }
        Some(node)
    }

    /// Looks up a text leaf by dotted path.
    #[must_use]
    pub fn text(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(MessageNode::as_text)
    }

    /// Looks up a sequence leaf by dotted path.
    #[must_use]
    pub fn sequence(&self, path: &str) -> Option<&[String]> {
        self.get(path).and_then(MessageNode::as_sequence)
    }

    /// Returns every leaf as `(dotted path, node)` in depth-first key order.
    #[must_use]
    pub fn leaves(&self) -> Vec<(String, &MessageNode)> {
        let mut out = Vec::new();
        collect_leaves(self, "", &mut out);
        out
    }

    /// Writes `value` at the path formed by `segments`, creating branches as needed.
    ///
    /// Collisions with existing nodes of the other kind are resolved in favor
    /// of the write and returned. An empty segment list is a no-op.
    pub fn set_path(&mut self, segments: &[&str], value: MessageNode) -> Vec<PathConflict> {
        let mut conflicts = Vec::new();
        assign(self, segments, 0, value, &mut conflicts);
        conflicts
    }
}

impl From<BTreeMap<String, MessageNode>> for MessageTree {
    fn from(value: BTreeMap<String, MessageNode>) -> Self {
        Self(value)
    }
}

/// Recursive worker for [`MessageTree::set_path`].
fn assign(
    tree: &mut MessageTree,
    segments: &[&str],
    depth: usize,
    value: MessageNode,
    conflicts: &mut Vec<PathConflict>,
) {
    let Some(segment) = segments.get(depth) else {
        return;
    };
    if depth + 1 == segments.len() {
        if tree.0.get(*segment).is_some_and(MessageNode::is_branch) && !value.is_branch() {
            conflicts.push(PathConflict {
                path: segments.join("."),
                kind: ConflictKind::BranchReplacedByLeaf,
            });
        }
        tree.0.insert((*segment).to_string(), value);
        return;
    }
    let slot =
        tree.0.entry((*segment).to_string()).or_insert_with(|| MessageNode::Branch(MessageTree::new()));
    if !slot.is_branch() {
        conflicts.push(PathConflict {
            path: segments[..=depth].join("."),
            kind: ConflictKind::LeafReplacedByBranch,
        });
        *slot = MessageNode::Branch(MessageTree::new());
    }
    if let MessageNode::Branch(child) = slot {
        assign(child, segments, depth + 1, value, conflicts);
    }
}

/// Collects leaves under `tree`, prefixing paths with `prefix`.
fn collect_leaves<'a>(tree: &'a MessageTree, prefix: &str, out: &mut Vec<(String, &'a MessageNode)>) {
    for (key, node) in &tree.0 {
        let path = if prefix.is_empty() { key.clone() } else { format!("{prefix}.{key}") };
        match node {
            MessageNode::Branch(child) => collect_leaves(child, &path, out),
            leaf => out.push((path, leaf)),
        }
    }
}

// ============================================================================
// SECTION: Merge
// ============================================================================

/// Deep-merges `overlay` over `base`.
///
/// Where both sides hold a branch the merge recurses; otherwise the overlay
/// node replaces the baseline node, including when the two differ in kind.
/// Keys present only in `base` are kept unchanged.
#[must_use]
pub fn deep_merge(mut base: MessageTree, overlay: MessageTree) -> MessageTree {
    for (key, node) in overlay.0 {
        let merged = match (base.0.remove(&key), node) {
            (Some(MessageNode::Branch(base_child)), MessageNode::Branch(overlay_child)) => {
                MessageNode::Branch(deep_merge(base_child, overlay_child))
            }
            (_, node) => node,
        };
        base.0.insert(key, merged);
    }
    base
}

// ============================================================================
// SECTION: Stored Value Decoding
// ============================================================================

/// Decodes a stored translation value into a leaf node.
///
/// A value that parses as a JSON array of strings becomes a
/// [`MessageNode::Sequence`]; every other value, including arrays holding
/// non-string elements, is kept verbatim as [`MessageNode::Text`].
#[must_use]
pub fn decode_stored_value(raw: &str) -> MessageNode {
    if raw.trim_start().starts_with('[')
        && let Ok(items) = serde_json::from_str::<Vec<String>>(raw)
    {
        return MessageNode::Sequence(items);
    }
    MessageNode::Text(raw.to_string())
}
