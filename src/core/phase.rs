//! Core Phase trait and the game's phase enum.
//!
//! Phases are immutable values describing where the engine currently sits
//! in the round lifecycle. All methods are pure.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for engine phases.
///
/// All methods are pure - no side effects. Phases represent immutable
/// values that describe the current position in the round lifecycle.
///
/// # Required Traits
///
/// - `Clone`: Phases must be cloneable for history tracking
/// - `PartialEq`: Phases must be comparable for transition logic
/// - `Debug`: Phases must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: Phases must be serializable for snapshots
pub trait Phase:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the phase's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this phase is terminal for the current run.
    ///
    /// Terminal phases accept no gameplay input; only an explicit start
    /// transition leaves them.
    ///
    /// Default implementation returns `false`.
    fn is_terminal(&self) -> bool {
        false
    }
}

/// The four phases of a sequence-memory game run.
///
/// ```rust
/// use recall::{GamePhase, Phase};
///
/// assert!(GamePhase::Idle.is_terminal());
/// assert!(GamePhase::Ended.is_terminal());
/// assert!(!GamePhase::AwaitingInput.is_terminal());
/// assert_eq!(GamePhase::Playing.name(), "Playing");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum GamePhase {
    /// No run in progress; waiting for an explicit start.
    Idle,
    /// The engine is flashing the sequence; input is ignored.
    Playing,
    /// Playback finished; the user may click tiles.
    AwaitingInput,
    /// The run ended on a mismatch; waiting for an explicit start.
    Ended,
}

impl GamePhase {
    /// Check whether tile clicks are accepted in this phase.
    pub fn accepts_input(&self) -> bool {
        matches!(self, Self::AwaitingInput)
    }
}

impl Phase for GamePhase {
    fn name(&self) -> &str {
        match self {
            Self::Idle => "Idle",
            Self::Playing => "Playing",
            Self::AwaitingInput => "AwaitingInput",
            Self::Ended => "Ended",
        }
    }

    fn is_terminal(&self) -> bool {
        matches!(self, Self::Idle | Self::Ended)
    }
}
