//! Tree node definition and navigation helpers.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use serde_json::Value;

/// A node in the nested configuration tree.
#[derive(Debug, Clone, PartialEq)]
pub enum PathNode {
    /// A path that holds a value and nothing deeper.
    Leaf(Value),
    /// A path used as a namespace. `payload` is set when the same path also
    /// holds a value of its own.
    Branch {
        payload: Option<Value>,
        children: BTreeMap<String, PathNode>,
    },
}

impl Default for PathNode {
    fn default() -> Self {
        Self::branch()
    }
}

impl PathNode {
    /// An empty branch with no payload.
    pub fn branch() -> Self {
        PathNode::Branch {
            payload: None,
            children: BTreeMap::new(),
        }
    }

    /// The scalar stored at this exact path, if any.
    pub fn value(&self) -> Option<&Value> {
        match self {
            PathNode::Leaf(v) => Some(v),
            PathNode::Branch { payload, .. } => payload.as_ref(),
        }
    }

    /// Replace the scalar stored at this exact path, keeping any children.
    pub fn set_value(&mut self, value: Value) {
        match self {
            PathNode::Leaf(v) => *v = value,
            PathNode::Branch { payload, .. } => *payload = Some(value),
        }
    }

    /// Children of this node; leaves have none.
    pub fn children(&self) -> Option<&BTreeMap<String, PathNode>> {
        match self {
            PathNode::Leaf(_) => None,
            PathNode::Branch { children, .. } => Some(children),
        }
    }

    /// Mutable children, promoting a leaf to a branch (value kept as payload).
    pub fn children_mut(&mut self) -> &mut BTreeMap<String, PathNode> {
        if let PathNode::Leaf(v) = self {
            let payload = Some(std::mem::take(v));
            *self = PathNode::Branch {
                payload,
                children: BTreeMap::new(),
            };
        }
        match self {
            PathNode::Branch { children, .. } => children,
            PathNode::Leaf(_) => unreachable!("leaf promoted above"),
        }
    }

    /// Direct child by segment.
    pub fn child(&self, segment: &str) -> Option<&PathNode> {
        self.children().and_then(|c| c.get(segment))
    }

    /// Mutable direct child by segment.
    pub fn child_mut(&mut self, segment: &str) -> Option<&mut PathNode> {
        match self {
            PathNode::Leaf(_) => None,
            PathNode::Branch { children, .. } => children.get_mut(segment),
        }
    }

    /// Follow a sequence of segments.
    pub fn get(&self, path: &[&str]) -> Option<&PathNode> {
        path.iter().try_fold(self, |node, seg| node.child(seg))
    }

    /// Follow a sequence of segments mutably.
    pub fn get_mut(&mut self, path: &[&str]) -> Option<&mut PathNode> {
        path.iter().try_fold(self, |node, seg| node.child_mut(seg))
    }

    /// Take the child at `segment` out of this node.
    pub fn remove_child(&mut self, segment: &str) -> Option<PathNode> {
        match self {
            PathNode::Leaf(_) => None,
            PathNode::Branch { children, .. } => children.remove(segment),
        }
    }

    /// Exchange the subtrees at two sibling segments. A missing side moves
    /// the present one across, so the result is the same set of children.
    pub fn swap_children(&mut self, a: &str, b: &str) {
        if a == b {
            return;
        }
        let children = self.children_mut();
        let left = children.remove(a);
        let right = children.remove(b);
        if let Some(node) = right {
            children.insert(a.to_string(), node);
        }
        if let Some(node) = left {
            children.insert(b.to_string(), node);
        }
    }

    /// Set a direct scalar child, creating it if absent.
    pub fn set_child_value(&mut self, segment: &str, value: Value) {
        match self.children_mut().entry(segment.to_string()) {
            Entry::Occupied(mut entry) => entry.get_mut().set_value(value),
            Entry::Vacant(entry) => {
                entry.insert(PathNode::Leaf(value));
            }
        }
    }
}
