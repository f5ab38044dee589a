//! Human-readable channel summaries.

use std::fmt::Write;

use serde_json::Value;

use crate::model::ChannelRecord;

/// One line per channel: id, stereo marker and name.
pub fn render_channel_list(records: &[ChannelRecord<'_>]) -> String {
    let mut out = String::new();
    for record in records {
        let marker = record.stereo_side().map_or(" ", |side| side.marker());
        let _ = writeln!(
            out,
            "{:>3} {} {}",
            record.id(),
            marker,
            record.name().unwrap_or("")
        );
    }
    out
}

/// Every field of one channel, dotted path relative to the channel.
pub fn render_channel_dump(record: &ChannelRecord<'_>) -> String {
    let prefix = format!("{}.{}", record.kind().namespace(), record.id());
    let mut out = String::new();
    for (path, value) in record.fields() {
        let _ = writeln!(out, "{prefix}.{path} = {}", display_value(&value));
    }
    out
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("{s:?}"),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ConfigModel;

    fn model() -> ConfigModel {
        ConfigModel::from_json(
            r#"{
            "schema": "6",
            "i.10.name": "Keys",
            "i.2.name": "Bass", "i.2.stereoIndex": 0, "i.2.mute": 0,
            "i.3.name": "Bass DI", "i.3.stereoIndex": 1,
            "i.4.mute": 1
        }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_channel_list() {
        let m = model();
        let rendered = render_channel_list(&m.inputs());
        assert_eq!(
            rendered,
            "  2 L Bass\n  3 R Bass DI\n  4   \n 10   Keys\n"
        );
    }

    #[test]
    fn test_channel_dump() {
        let m = model();
        let rendered = render_channel_dump(&m.input("2").unwrap());
        assert_eq!(
            rendered,
            "i.2.mute = 0\ni.2.name = \"Bass\"\ni.2.stereoIndex = 0\n"
        );
    }
}
