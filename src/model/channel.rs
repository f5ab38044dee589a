//! Typed read views over channel records and their aux-send tables.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::model::types::{ChannelId, ChannelKind, StereoSide};
use crate::tree::{flatten, FlatConfig, PathNode};

pub const NAME_FIELD: &str = "name";
pub const STEREO_INDEX_FIELD: &str = "stereoIndex";
pub const SRC_FIELD: &str = "src";
pub const SCSRC_FIELD: &str = "scsrc";
pub const AUX_FIELD: &str = "aux";

/// A channel record borrowed from the model.
#[derive(Debug, Clone, Copy)]
pub struct ChannelRecord<'a> {
    kind: ChannelKind,
    id: ChannelId,
    node: &'a PathNode,
}

impl<'a> ChannelRecord<'a> {
    pub fn new(kind: ChannelKind, id: ChannelId, node: &'a PathNode) -> Self {
        Self { kind, id, node }
    }

    pub fn kind(&self) -> ChannelKind {
        self.kind
    }

    pub fn id(&self) -> ChannelId {
        self.id
    }

    pub fn node(&self) -> &'a PathNode {
        self.node
    }

    fn field(&self, name: &str) -> Option<&'a Value> {
        self.node.child(name).and_then(PathNode::value)
    }

    pub fn name(&self) -> Option<&'a str> {
        self.field(NAME_FIELD).and_then(Value::as_str)
    }

    /// Stereo position; `None` means mono.
    pub fn stereo_side(&self) -> Option<StereoSide> {
        self.field(STEREO_INDEX_FIELD).and_then(StereoSide::from_value)
    }

    pub fn src(&self) -> Option<&'a str> {
        self.field(SRC_FIELD).and_then(Value::as_str)
    }

    pub fn scsrc(&self) -> Option<&'a str> {
        self.field(SCSRC_FIELD).and_then(Value::as_str)
    }

    pub fn aux_sends(&self) -> Option<AuxSendTable<'a>> {
        self.node
            .child(AUX_FIELD)
            .and_then(PathNode::children)
            .map(|sends| AuxSendTable { sends })
    }

    /// Every field of the record, with paths relative to the record.
    pub fn fields(&self) -> FlatConfig {
        flatten(self.node)
    }
}

/// Per-channel sends to the aux buses, keyed by aux identifier.
#[derive(Debug, Clone, Copy)]
pub struct AuxSendTable<'a> {
    sends: &'a BTreeMap<String, PathNode>,
}

impl<'a> AuxSendTable<'a> {
    /// The whole send subtree for one aux bus.
    pub fn send(&self, aux: ChannelId) -> Option<&'a PathNode> {
        self.sends.get(&aux.to_string())
    }

    /// Send level for one aux bus, stored either directly or under `value`.
    pub fn level(&self, aux: ChannelId) -> Option<&'a Value> {
        let send = self.send(aux)?;
        send.child("value")
            .and_then(PathNode::value)
            .or_else(|| send.value())
    }

    /// Aux identifiers with a send entry, in numeric order.
    pub fn aux_ids(&self) -> Vec<ChannelId> {
        let mut ids = self
            .sends
            .keys()
            .filter_map(|k| k.parse::<ChannelId>().ok())
            .collect::<Vec<_>>();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.sends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sends.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::nest;
    use serde_json::json;

    fn record_tree() -> PathNode {
        nest(vec![
            ("name".to_string(), json!("Vox")),
            ("stereoIndex".to_string(), json!(1)),
            ("src".to_string(), json!("hw.4")),
            ("aux.0.value".to_string(), json!(0.5)),
            ("aux.10.value".to_string(), json!(0.25)),
            ("aux.2".to_string(), json!(0.75)),
        ])
    }

    #[test]
    fn test_record_accessors() {
        let tree = record_tree();
        let record = ChannelRecord::new(ChannelKind::Input, 4, &tree);
        assert_eq!(record.name(), Some("Vox"));
        assert_eq!(record.stereo_side(), Some(StereoSide::Right));
        assert_eq!(record.src(), Some("hw.4"));
        assert_eq!(record.scsrc(), None);
        assert_eq!(record.fields().len(), 6);
    }

    #[test]
    fn test_aux_send_table() {
        let tree = record_tree();
        let record = ChannelRecord::new(ChannelKind::Input, 4, &tree);
        let sends = record.aux_sends().unwrap();
        assert_eq!(sends.aux_ids(), vec![0, 2, 10]);
        assert_eq!(sends.level(0), Some(&json!(0.5)));
        assert_eq!(sends.level(2), Some(&json!(0.75)));
        assert_eq!(sends.level(3), None);
        assert_eq!(sends.len(), 3);
    }
}
