//! Applies channel swaps to the model.

use std::fmt;

use serde_json::Value;

use crate::config::ConsoleConfig;
use crate::model::channel::{AUX_FIELD, SCSRC_FIELD, SRC_FIELD};
use crate::model::view_group::{remap_encoded, remap_raw};
use crate::model::{ChannelKind, ConfigModel, MixerResult};
use crate::swap::plan::{describe_side, plan_input_swap, SlotPair};

/// What a swap changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapReport {
    pub kind: ChannelKind,
    /// Slot pairs in the order they were exchanged; the requested pair first.
    pub pairs: Vec<SlotPair>,
}

impl SwapReport {
    /// Whether stereo partners moved along with the requested channels.
    pub fn moved_partners(&self) -> bool {
        self.pairs.len() > 1
    }
}

impl fmt::Display for SwapReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "swapped {} ", self.kind)?;
        for (i, pair) in self.pairs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{pair}")?;
        }
        Ok(())
    }
}

/// Keeps records, bindings, sends and view groups consistent across swaps.
#[derive(Debug, Clone, Copy)]
pub struct ChannelSwapEngine<'a> {
    console: &'a ConsoleConfig,
}

impl<'a> ChannelSwapEngine<'a> {
    pub fn new(console: &'a ConsoleConfig) -> Self {
        Self { console }
    }

    /// Swap two input channels, dragging stereo partners along.
    pub fn swap_inputs(&self, model: &mut ConfigModel, a: &str, b: &str) -> MixerResult<SwapReport> {
        let pairs = match plan_input_swap(model, self.console, a, b) {
            Ok(pairs) => pairs,
            Err(e) => {
                tracing::warn!(a, b, error = %e, "Input swap rejected");
                return Err(e);
            }
        };

        if let [primary, ..] = pairs.as_slice() {
            let side = |id| describe_side(model.channel(ChannelKind::Input, id).and_then(|r| r.stereo_side()));
            tracing::debug!(
                a = primary.a,
                a_side = side(primary.a),
                b = primary.b,
                b_side = side(primary.b),
                scheduled = pairs.len(),
                "Input swap planned"
            );
        }

        for pair in &pairs {
            self.exchange_inputs(model, *pair);
        }

        let report = SwapReport {
            kind: ChannelKind::Input,
            pairs,
        };
        tracing::info!(%report, "Inputs swapped");
        Ok(report)
    }

    fn exchange_inputs(&self, model: &mut ConfigModel, pair: SlotPair) {
        if let Some(inputs) = model.namespace_mut(ChannelKind::Input) {
            inputs.swap_children(&pair.a.to_string(), &pair.b.to_string());
        }
        for id in [pair.a, pair.b] {
            if let Some(node) = model.channel_node_mut(ChannelKind::Input, id) {
                node.set_child_value(SRC_FIELD, Value::String(self.console.src_for(id)));
                node.set_child_value(SCSRC_FIELD, Value::String(self.console.scsrc_for(id)));
            }
        }
        self.remap_view_groups(model, i64::from(pair.a), i64::from(pair.b));
    }

    /// Swap two aux buses and every send that targets them.
    ///
    /// Stereo partners are not followed.
    pub fn swap_auxes(&self, model: &mut ConfigModel, a: &str, b: &str) -> MixerResult<SwapReport> {
        let pair = match aux_pair(model, a, b) {
            Ok(pair) => pair,
            Err(e) => {
                tracing::warn!(a, b, error = %e, "Aux swap rejected");
                return Err(e);
            }
        };
        let (key_a, key_b) = (pair.a.to_string(), pair.b.to_string());

        if let Some(auxes) = model.namespace_mut(ChannelKind::Aux) {
            auxes.swap_children(&key_a, &key_b);
        }

        let mut feeds = 0usize;
        for kind in self.feed_kinds() {
            let Some(channels) = model.namespace_mut(kind) else {
                continue;
            };
            for channel in channels.children_mut().values_mut() {
                if let Some(sends) = channel.child_mut(AUX_FIELD) {
                    sends.swap_children(&key_a, &key_b);
                    feeds += 1;
                }
            }
        }

        let offset = i64::from(self.console.aux_view_offset);
        self.remap_view_groups(model, i64::from(pair.a) + offset, i64::from(pair.b) + offset);

        let report = SwapReport {
            kind: ChannelKind::Aux,
            pairs: vec![pair],
        };
        tracing::info!(%report, feeds, "Auxes swapped");
        Ok(report)
    }

    fn feed_kinds(&self) -> impl Iterator<Item = ChannelKind> + 'a {
        let console = self.console;
        console
            .feed_namespaces
            .iter()
            .filter_map(|ns| ChannelKind::from_namespace(ns))
    }

    /// Exchange view-group indices `a` and `b`, both in `vg.*` and in the
    /// raw lists kept in the `LOCAL` blob.
    fn remap_view_groups(&self, model: &mut ConfigModel, a: i64, b: i64) {
        let mut changed = model
            .view_group_values_mut()
            .into_iter()
            .map(|value| remap_encoded(value, a, b))
            .filter(|moved| *moved)
            .count();

        let key = self.console.local_view_group_key.as_str();
        if let Some(local) = model.local_mut().and_then(|blob| blob.get_mut(key)) {
            if remap_raw(local, a, b) {
                changed += 1;
            }
        }
        tracing::debug!(a, b, changed, "View groups remapped");
    }
}

fn aux_pair(model: &ConfigModel, a: &str, b: &str) -> MixerResult<SlotPair> {
    Ok(SlotPair::new(model.aux(a)?.id(), model.aux(b)?.id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ViewGroup;
    use crate::validation::validate_stereo_pairs;
    use serde_json::json;

    fn model() -> ConfigModel {
        ConfigModel::from_json(
            r#"{
            "schema": "6",
            "i.0.name": "Keys L", "i.0.stereoIndex": 0, "i.0.src": "hw.0",
            "i.1.name": "Keys R", "i.1.stereoIndex": 1, "i.1.src": "hw.1",
            "i.2.name": "Kick", "i.2.src": "hw.2", "i.2.aux.0.value": 0.1, "i.2.aux.1.value": 0.9,
            "i.3.name": "Snare", "i.3.src": "hw.3", "i.3.aux.0.value": 0.3,
            "i.5.name": "Vox", "i.5.src": "hw.5", "i.5.gain": 12,
            "i.6.name": "Gtr", "i.6.src": "hw.6",
            "a.0.name": "Mon 1", "a.1.name": "Mon 2",
            "l.0.aux.1.value": 0.5,
            "f.0.aux.0.value": 0.2, "f.0.aux.1.value": 0.4,
            "vg.0": "[0,1,2,38]",
            "vg.1": "[5,39]",
            "LOCAL": {"vg": {"0": [0, 1, 2, 38], "1": [5, 39]}, "other": [2, 3]}
        }"#,
        )
        .unwrap()
    }

    fn members(model: &ConfigModel, name: &str) -> Vec<i64> {
        model
            .view_groups()
            .into_iter()
            .find(|g| g.name == name)
            .map(|g: ViewGroup| g.members)
            .unwrap()
    }

    #[test]
    fn test_swap_mono_inputs() {
        let console = ConsoleConfig::default();
        let engine = ChannelSwapEngine::new(&console);
        let mut m = model();

        let report = engine.swap_inputs(&mut m, "2", "5").unwrap();
        assert!(!report.moved_partners());

        let two = m.input("2").unwrap();
        assert_eq!(two.name(), Some("Vox"));
        assert_eq!(two.src(), Some("hw.2"));
        assert_eq!(two.scsrc(), Some("hw.2"));
        assert_eq!(two.fields().get("gain"), Some(&json!(12)));
        let five = m.input("5").unwrap();
        assert_eq!(five.name(), Some("Kick"));
        assert_eq!(five.src(), Some("hw.5"));
        assert_eq!(five.aux_sends().unwrap().level(1), Some(&json!(0.9)));

        assert_eq!(members(&m, "0"), vec![0, 1, 5, 38]);
        assert_eq!(members(&m, "1"), vec![2, 39]);
        assert_eq!(
            m.local().unwrap()["vg"],
            json!({"0": [0, 1, 5, 38], "1": [2, 39]})
        );
        // outside the view-group key the blob is untouched
        assert_eq!(m.local().unwrap()["other"], json!([2, 3]));
    }

    #[test]
    fn test_swap_inputs_twice_restores() {
        let console = ConsoleConfig::default();
        let engine = ChannelSwapEngine::new(&console);
        let original = model();
        let mut m = original.clone();
        engine.swap_inputs(&mut m, "3", "6").unwrap();
        engine.swap_inputs(&mut m, "3", "6").unwrap();
        // every record here already carries its slot's src; scsrc is added
        for id in ["3", "6"] {
            let mut fields = m.input(id).unwrap().fields();
            fields.remove("scsrc");
            assert_eq!(fields, original.input(id).unwrap().fields());
        }
        assert_eq!(m.view_groups(), original.view_groups());
        assert_eq!(m.local(), original.local());
    }

    #[test]
    fn test_stereo_pair_moves_together() {
        let console = ConsoleConfig::default();
        let engine = ChannelSwapEngine::new(&console);
        let mut m = model();

        let report = engine.swap_inputs(&mut m, "0", "5").unwrap();
        assert_eq!(report.pairs, vec![SlotPair::new(0, 5), SlotPair::new(1, 6)]);
        assert_eq!(report.to_string(), "swapped input 0 <-> 5, 1 <-> 6");

        assert_eq!(m.input("5").unwrap().name(), Some("Keys L"));
        assert_eq!(m.input("6").unwrap().name(), Some("Keys R"));
        assert_eq!(m.input("0").unwrap().name(), Some("Vox"));
        assert_eq!(m.input("1").unwrap().name(), Some("Gtr"));
        assert_eq!(m.input("6").unwrap().src(), Some("hw.6"));
        assert_eq!(members(&m, "0"), vec![5, 6, 2, 38]);
        assert_eq!(members(&m, "1"), vec![0, 39]);
    }

    #[test]
    fn test_rejected_swap_leaves_model_untouched() {
        let console = ConsoleConfig::default();
        let engine = ChannelSwapEngine::new(&console);
        let original = model();
        let mut m = original.clone();

        // partner slot 4 does not exist
        assert!(engine.swap_inputs(&mut m, "0", "3").is_err());
        assert!(engine.swap_inputs(&mut m, "2", "17").is_err());
        assert!(engine.swap_auxes(&mut m, "0", "9").is_err());
        assert_eq!(m, original);
    }

    #[test]
    fn test_accepted_input_swaps_keep_pairs_valid() {
        let console = ConsoleConfig::default();
        let engine = ChannelSwapEngine::new(&console);
        let mut doc = serde_json::Map::new();
        doc.insert("schema".into(), json!("6"));
        for id in 0..24 {
            doc.insert(format!("i.{id}.name"), json!(format!("ch{id}")));
        }
        for (id, side) in [(0, 0), (1, 1), (6, 0), (7, 1), (20, 0), (21, 1)] {
            doc.insert(format!("i.{id}.stereoIndex"), json!(side));
        }
        let original = ConfigModel::from_flat(doc.into_iter().collect()).unwrap();
        assert!(validate_stereo_pairs(&original).is_ok());

        let mut accepted = 0;
        for a in 0..24 {
            for b in 0..24 {
                let mut m = original.clone();
                match engine.swap_inputs(&mut m, &a.to_string(), &b.to_string()) {
                    Ok(report) => {
                        accepted += 1;
                        assert!(
                            validate_stereo_pairs(&m).is_ok(),
                            "{report} broke a stereo pair"
                        );
                    }
                    Err(_) => assert_eq!(m, original),
                }
            }
        }
        assert!(accepted > 24 * 20);
    }

    #[test]
    fn test_swap_auxes_moves_sends() {
        let console = ConsoleConfig::default();
        let engine = ChannelSwapEngine::new(&console);
        let mut m = model();

        engine.swap_auxes(&mut m, "0", "1").unwrap();
        assert_eq!(m.aux("0").unwrap().name(), Some("Mon 2"));
        assert_eq!(m.aux("1").unwrap().name(), Some("Mon 1"));

        let kick = m.aux_sends(ChannelKind::Input, 2).unwrap();
        assert_eq!(kick.level(0), Some(&json!(0.9)));
        assert_eq!(kick.level(1), Some(&json!(0.1)));
        let snare = m.aux_sends(ChannelKind::Input, 3).unwrap();
        assert_eq!(snare.level(0), None);
        assert_eq!(snare.level(1), Some(&json!(0.3)));
        let line = m.aux_sends(ChannelKind::Line, 0).unwrap();
        assert_eq!(line.level(0), Some(&json!(0.5)));
        let fx = m.aux_sends(ChannelKind::Fx, 0).unwrap();
        assert_eq!(fx.level(0), Some(&json!(0.4)));

        assert_eq!(members(&m, "0"), vec![0, 1, 2, 39]);
        assert_eq!(members(&m, "1"), vec![5, 38]);
    }

    #[test]
    fn test_swap_auxes_twice_restores_sends() {
        let console = ConsoleConfig::default();
        let engine = ChannelSwapEngine::new(&console);
        let original = model();
        let mut m = original.clone();
        engine.swap_auxes(&mut m, "1", "0").unwrap();
        engine.swap_auxes(&mut m, "1", "0").unwrap();
        assert_eq!(m, original);
    }
}
