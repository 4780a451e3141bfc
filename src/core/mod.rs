//! Core game types and logic.
//!
//! This module contains the pure core of the engine:
//! - Phase definitions via the `Phase` trait
//! - Tile sequence generation
//! - Immutable phase history tracking
//!
//! All logic in this module is pure apart from the injected RNG used by
//! the sequence generator.

mod history;
mod phase;
mod sequence;

pub use history::{PhaseChange, PhaseHistory};
pub use phase::{GamePhase, Phase};
pub use sequence::{generate_sequence, SequenceError};
