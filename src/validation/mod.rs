//! Structural checks run over the whole model before it is written.
//!
//! # Responsibilities
//! - Verify stereo-left/stereo-right adjacency for inputs and auxes
//!
//! # Design Decisions
//! - Pure function over the model; never mutates
//! - Stops at the first violation, inputs before auxes, ascending ids

pub mod stereo;

pub use stereo::{validate_stereo_pairs, StereoViolation};
