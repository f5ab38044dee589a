//! Stereo pair adjacency check.

use thiserror::Error;

use crate::model::{ChannelId, ChannelKind, ConfigModel, StereoSide};

/// First broken stereo pair found in the model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} channel {id} is stereo {side} but {kind} channel {partner} {problem}")]
pub struct StereoViolation {
    pub kind: ChannelKind,
    pub id: ChannelId,
    pub side: &'static str,
    pub partner: String,
    pub problem: &'static str,
}

/// Check that every left channel is followed by a right channel and every
/// right channel is preceded by a left one.
pub fn validate_stereo_pairs(model: &ConfigModel) -> Result<(), StereoViolation> {
    for kind in [ChannelKind::Input, ChannelKind::Aux] {
        for record in model.channels(kind) {
            let Some(side) = record.stereo_side() else {
                continue;
            };
            let expected = match side {
                StereoSide::Left => StereoSide::Right,
                StereoSide::Right => StereoSide::Left,
            };
            let violation = |partner: String, problem| StereoViolation {
                kind,
                id: record.id(),
                side: side_label(side),
                partner,
                problem,
            };

            let Some(partner_id) = side.partner(record.id()) else {
                return Err(violation("-1".to_string(), "cannot exist"));
            };
            match model.channel(kind, partner_id) {
                None => return Err(violation(partner_id.to_string(), "is missing")),
                Some(partner) if partner.stereo_side() != Some(expected) => {
                    let problem = match expected {
                        StereoSide::Left => "is not stereo left",
                        StereoSide::Right => "is not stereo right",
                    };
                    return Err(violation(partner_id.to_string(), problem));
                }
                Some(_) => {}
            }
        }
    }
    Ok(())
}

fn side_label(side: StereoSide) -> &'static str {
    match side {
        StereoSide::Left => "left",
        StereoSide::Right => "right",
    }
}
