//! Shared fixtures for integration tests.

use std::path::{Path, PathBuf};

use serde_json::{json, Map, Value};

/// Inputs 20/21 and auxes 2/3 are stereo pairs; everything else is mono.
pub fn snapshot() -> Map<String, Value> {
    let mut doc = Map::new();
    doc.insert("schema".into(), json!("6"));
    doc.insert("settings.mtk.playback".into(), json!(1));

    for id in 0..24 {
        doc.insert(format!("i.{id}.name"), json!(format!("Ch {id}")));
        doc.insert(format!("i.{id}.src"), json!(format!("hw.{id}")));
        doc.insert(format!("i.{id}.scsrc"), json!(format!("hw.{id}")));
        doc.insert(format!("i.{id}.mute"), json!(0));
        doc.insert(format!("i.{id}.gain"), json!(f64::from(id) * 0.5));
        for aux in 0..10 {
            doc.insert(
                format!("i.{id}.aux.{aux}.value"),
                json!(f64::from(id * 10 + aux) * 0.25),
            );
            doc.insert(format!("i.{id}.aux.{aux}.pan"), json!(0.5));
        }
    }
    doc.insert("i.0.name".into(), json!("Café"));
    doc.insert("i.20.stereoIndex".into(), json!(0));
    doc.insert("i.21.stereoIndex".into(), json!(1));

    for id in 0..10 {
        doc.insert(format!("a.{id}.name"), json!(format!("Aux {id}")));
        doc.insert(format!("a.{id}.mix"), json!(0.75));
    }
    doc.insert("a.2.stereoIndex".into(), json!(0));
    doc.insert("a.3.stereoIndex".into(), json!(1));

    for (ns, count) in [("f", 4), ("l", 2), ("p", 2)] {
        for id in 0..count {
            for aux in 0..10 {
                doc.insert(
                    format!("{ns}.{id}.aux.{aux}.value"),
                    json!(f64::from(aux) * 0.125),
                );
            }
        }
    }

    doc.insert("vg.0".into(), json!("[0,1,2,3,38,39]"));
    doc.insert("vg.1".into(), json!("[20,21,5,40,41]"));
    doc.insert("vg.2".into(), json!("[]"));
    doc.insert(
        "LOCAL".into(),
        json!({
            "vg": {"0": [0, 1, 2, 3, 38, 39], "1": [20, 21, 5, 40, 41], "2": []},
            "ui": {"theme": "dark", "zoom": [1, 2]}
        }),
    );
    doc
}

pub fn snapshot_text() -> String {
    Value::Object(snapshot()).to_string()
}

/// Write the fixture into `dir` and return its path.
pub fn write_snapshot(dir: &Path) -> PathBuf {
    let path = dir.join("snapshot.json");
    std::fs::write(&path, snapshot_text()).unwrap();
    path
}
