//! Pre-mutation planning for input swaps.

use std::fmt;

use crate::config::ConsoleConfig;
use crate::model::{ChannelId, ChannelKind, ConfigModel, MixerError, MixerResult, StereoSide};

/// Two slots whose contents are exchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotPair {
    pub a: ChannelId,
    pub b: ChannelId,
}

impl SlotPair {
    pub fn new(a: ChannelId, b: ChannelId) -> Self {
        Self { a, b }
    }
}

impl fmt::Display for SlotPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}", self.a, self.b)
    }
}

/// Work out every slot pair an input swap touches.
///
/// The requested pair comes first. When either channel is half of a stereo
/// pair, the partner slots (one up for left, one down for right) move by the
/// same distance. Both channels must agree on the direction, and partner
/// slots must exist inside the console's input range.
pub fn plan_input_swap(
    model: &ConfigModel,
    console: &ConsoleConfig,
    raw_a: &str,
    raw_b: &str,
) -> MixerResult<Vec<SlotPair>> {
    let a = model.input(raw_a)?;
    let b = model.input(raw_b)?;
    let primary = SlotPair::new(a.id(), b.id());
    if primary.a == primary.b {
        return Ok(vec![primary]);
    }

    let offset = match (a.stereo_side(), b.stereo_side()) {
        (None, None) => return Ok(vec![primary]),
        (Some(side), None) | (None, Some(side)) => side.offset(),
        (Some(left), Some(right)) if left == right => left.offset(),
        (Some(_), Some(_)) => {
            return Err(MixerError::InvalidStereoPairing(format!(
                "inputs {} and {} sit on opposite sides of their stereo pairs",
                primary.a, primary.b
            )))
        }
    };

    let mut partners = [0; 2];
    for (slot, id) in partners.iter_mut().zip([primary.a, primary.b]) {
        let target = i64::from(id) + offset;
        *slot = ChannelId::try_from(target)
            .ok()
            .filter(|_| console.input_in_range(target))
            .ok_or_else(|| {
                MixerError::InvalidStereoPairing(format!(
                    "moving the stereo partner would need input {target}, outside 0..={}",
                    console.input_count.saturating_sub(1)
                ))
            })?;
    }

    let partner = SlotPair::new(partners[0], partners[1]);
    for id in [partner.a, partner.b] {
        if !model.contains(ChannelKind::Input, id) {
            return Err(MixerError::ChannelNotFound {
                kind: ChannelKind::Input,
                id: id.to_string(),
            });
        }
    }

    // A mono channel's neighbour gets displaced; it must not be half of
    // another stereo pair.
    for (origin, slot) in [(&a, partner.a), (&b, partner.b)] {
        if origin.stereo_side().is_some() || slot == primary.a || slot == primary.b {
            continue;
        }
        let displaced = model
            .channel(ChannelKind::Input, slot)
            .and_then(|record| record.stereo_side());
        if let Some(side) = displaced {
            return Err(MixerError::InvalidStereoPairing(format!(
                "moving the stereo partner would split input {slot} (stereo {}) from its own pair",
                side.marker()
            )));
        }
    }

    Ok(vec![primary, partner])
}

/// Which way the partner of a stereo channel lies, for log output.
pub fn describe_side(side: Option<StereoSide>) -> &'static str {
    side.map_or("mono", StereoSide::marker)
}
