//! The loaded console configuration.

use serde_json::Value;

use crate::model::channel::{AuxSendTable, ChannelRecord, NAME_FIELD};
use crate::model::types::{parse_channel_id, ChannelId, ChannelKind, MixerError, MixerResult};
use crate::model::view_group::{ViewGroup, VIEW_GROUP_NAMESPACE};
use crate::tree::{flatten, nest, FlatConfig, PathNode, LOCAL_KEY};

/// Top-level key carrying the schema version.
pub const SCHEMA_KEY: &str = "schema";

/// The only schema version this editor understands.
pub const SUPPORTED_SCHEMA: &str = "6";

/// Owned, nested view of a console configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigModel {
    root: PathNode,
}

impl ConfigModel {
    /// Parse a flat JSON document.
    pub fn from_json(text: &str) -> MixerResult<Self> {
        match serde_json::from_str::<Value>(text)? {
            Value::Object(map) => Self::from_flat(map.into_iter().collect()),
            _ => Err(MixerError::NotAnObject),
        }
    }

    /// Build a model from flat pairs after checking the schema version.
    pub fn from_flat(flat: FlatConfig) -> MixerResult<Self> {
        match flat.get(SCHEMA_KEY) {
            Some(Value::String(v)) if v == SUPPORTED_SCHEMA => {}
            other => {
                return Err(MixerError::SchemaMismatch {
                    found: other.map_or_else(|| "<missing>".to_string(), Value::to_string),
                    expected: SUPPORTED_SCHEMA,
                })
            }
        }
        Ok(Self { root: nest(flat) })
    }

    /// Re-derive the flat form of the whole model.
    pub fn to_flat(&self) -> FlatConfig {
        flatten(&self.root)
    }

    pub fn root(&self) -> &PathNode {
        &self.root
    }

    /// The branch holding every channel of `kind`.
    pub(crate) fn namespace_mut(&mut self, kind: ChannelKind) -> Option<&mut PathNode> {
        self.root.child_mut(kind.namespace())
    }

    pub fn channel(&self, kind: ChannelKind, id: ChannelId) -> Option<ChannelRecord<'_>> {
        let key = id.to_string();
        self.root
            .get(&[kind.namespace(), key.as_str()])
            .map(|node| ChannelRecord::new(kind, id, node))
    }

    pub fn contains(&self, kind: ChannelKind, id: ChannelId) -> bool {
        self.channel(kind, id).is_some()
    }

    /// Resolve an operator-supplied identifier to a record.
    pub fn lookup(&self, kind: ChannelKind, raw: &str) -> MixerResult<ChannelRecord<'_>> {
        let id = parse_channel_id(kind, raw)?;
        self.channel(kind, id).ok_or_else(|| MixerError::ChannelNotFound {
            kind,
            id: raw.to_string(),
        })
    }

    pub fn input(&self, id: &str) -> MixerResult<ChannelRecord<'_>> {
        self.lookup(ChannelKind::Input, id)
    }

    pub fn aux(&self, id: &str) -> MixerResult<ChannelRecord<'_>> {
        self.lookup(ChannelKind::Aux, id)
    }

    /// All channels of a kind, ordered by numeric identifier.
    pub fn channels(&self, kind: ChannelKind) -> Vec<ChannelRecord<'_>> {
        let Some(children) = self.root.child(kind.namespace()).and_then(PathNode::children) else {
            return Vec::new();
        };
        let mut records = children
            .iter()
            .filter_map(|(key, node)| {
                key.parse::<ChannelId>()
                    .ok()
                    .filter(|id| id.to_string() == *key)
                    .map(|id| ChannelRecord::new(kind, id, node))
            })
            .collect::<Vec<_>>();
        records.sort_by_key(ChannelRecord::id);
        records
    }

    pub fn inputs(&self) -> Vec<ChannelRecord<'_>> {
        self.channels(ChannelKind::Input)
    }

    pub fn auxes(&self) -> Vec<ChannelRecord<'_>> {
        self.channels(ChannelKind::Aux)
    }

    pub fn aux_sends(&self, kind: ChannelKind, id: ChannelId) -> Option<AuxSendTable<'_>> {
        self.channel(kind, id).and_then(|record| record.aux_sends())
    }

    pub(crate) fn channel_node_mut(
        &mut self,
        kind: ChannelKind,
        id: ChannelId,
    ) -> Option<&mut PathNode> {
        let key = id.to_string();
        self.root.get_mut(&[kind.namespace(), key.as_str()])
    }

    /// Rename a channel. Dashes become spaces so multi-word names can be
    /// typed as a single argument. Returns the stored name.
    pub fn rename(&mut self, kind: ChannelKind, raw_id: &str, new_name: &str) -> MixerResult<String> {
        let id = self.lookup(kind, raw_id)?.id();
        let name = new_name.replace('-', " ");
        if let Some(node) = self.channel_node_mut(kind, id) {
            node.set_child_value(NAME_FIELD, Value::String(name.clone()));
        }
        Ok(name)
    }

    pub fn rename_input(&mut self, raw_id: &str, new_name: &str) -> MixerResult<String> {
        self.rename(ChannelKind::Input, raw_id, new_name)
    }

    /// Decoded `vg.<n>` groups, skipping entries that are not index lists.
    pub fn view_groups(&self) -> Vec<ViewGroup> {
        self.root
            .child(VIEW_GROUP_NAMESPACE)
            .and_then(PathNode::children)
            .map(|groups| {
                groups
                    .iter()
                    .filter_map(|(name, node)| ViewGroup::decode(name, node.value()?))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Mutable `vg.<n>` values, string-encoded.
    pub(crate) fn view_group_values_mut(&mut self) -> Vec<&mut Value> {
        let Some(PathNode::Branch { children, .. }) = self.root.child_mut(VIEW_GROUP_NAMESPACE) else {
            return Vec::new();
        };
        children
            .values_mut()
            .filter_map(|node| match node {
                PathNode::Leaf(value) => Some(value),
                PathNode::Branch { payload, .. } => payload.as_mut(),
            })
            .collect()
    }

    /// The opaque `LOCAL` blob.
    pub fn local(&self) -> Option<&Value> {
        self.root.child(LOCAL_KEY).and_then(PathNode::value)
    }

    pub(crate) fn local_mut(&mut self) -> Option<&mut Value> {
        match self.root.child_mut(LOCAL_KEY)? {
            PathNode::Leaf(value) => Some(value),
            PathNode::Branch { payload, .. } => payload.as_mut(),
        }
    }
}
