//! Conversion between flat dotted-path objects and the nested tree.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use serde_json::Value;

use crate::tree::node::PathNode;

/// Flat configuration: dotted path → value, ordered by path.
pub type FlatConfig = BTreeMap<String, Value>;

/// Top-level key whose value is an opaque compound blob.
pub const LOCAL_KEY: &str = "LOCAL";

/// Build a tree from flat `(path, value)` pairs.
///
/// Every path is split on `.`. Leaf values are stored as-is, so compound
/// values such as the `LOCAL` object are never decomposed.
pub fn nest<I>(flat: I) -> PathNode
where
    I: IntoIterator<Item = (String, Value)>,
{
    let mut root = PathNode::branch();
    for (path, value) in flat {
        insert(&mut root, &path, value);
    }
    root
}

fn insert(root: &mut PathNode, path: &str, value: Value) {
    let mut segments = path.split('.').collect::<Vec<_>>();
    // split always yields at least one segment
    let last = segments.pop().unwrap_or_default();

    let mut node = root;
    for segment in segments {
        node = node.children_mut().entry(segment.to_string()).or_default();
    }

    match node.children_mut().entry(last.to_string()) {
        // Already a prefix of a deeper path: becomes the branch payload.
        Entry::Occupied(mut existing) => existing.get_mut().set_value(value),
        Entry::Vacant(slot) => {
            slot.insert(PathNode::Leaf(value));
        }
    }
}

/// Flatten a tree back into dotted paths.
pub fn flatten(root: &PathNode) -> FlatConfig {
    let mut out = FlatConfig::new();
    if let Some(children) = root.children() {
        for (segment, child) in children {
            emit(child, segment.clone(), &mut out);
        }
    }
    out
}

fn emit(node: &PathNode, path: String, out: &mut FlatConfig) {
    if let Some(children) = node.children() {
        for (segment, child) in children {
            emit(child, format!("{path}.{segment}"), out);
        }
    }
    if let Some(value) = node.value() {
        out.insert(path, value.clone());
    }
}
