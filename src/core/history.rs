//! Phase transition history tracking.
//!
//! Provides immutable tracking of the engine's phase transitions over
//! time, for host-side diagnostics.

use super::phase::Phase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single phase transition.
///
/// Changes are immutable values representing a move from one phase to
/// another at a specific point in time, tagged with the run's score at
/// the moment of the transition.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct PhaseChange<P: Phase> {
    /// The phase being transitioned from
    pub from: P,
    /// The phase being transitioned to
    pub to: P,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// Completed rounds at the time of the transition
    pub round: usize,
}

/// Ordered history of phase transitions.
///
/// History is immutable - the `record` method returns a new history
/// with the change added.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use recall::{GamePhase, PhaseChange, PhaseHistory};
///
/// let history = PhaseHistory::new();
/// let history = history.record(PhaseChange {
///     from: GamePhase::Idle,
///     to: GamePhase::Playing,
///     timestamp: Utc::now(),
///     round: 0,
/// });
/// let history = history.record(PhaseChange {
///     from: GamePhase::Playing,
///     to: GamePhase::AwaitingInput,
///     timestamp: Utc::now(),
///     round: 0,
/// });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // Idle -> Playing -> AwaitingInput
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct PhaseHistory<P: Phase> {
    changes: Vec<PhaseChange<P>>,
}

impl<P: Phase> Default for PhaseHistory<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Phase> PhaseHistory<P> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            changes: Vec::new(),
        }
    }

    /// Record a change, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the change added.
    pub fn record(&self, change: PhaseChange<P>) -> Self {
        let mut changes = self.changes.clone();
        changes.push(change);
        Self { changes }
    }

    /// Get the path of phases traversed.
    ///
    /// Returns references to phases in order: initial phase, then the
    /// `to` phase of each change.
    pub fn get_path(&self) -> Vec<&P> {
        let mut path = Vec::new();
        if let Some(first) = self.changes.first() {
            path.push(&first.from);
        }
        for change in &self.changes {
            path.push(&change.to);
        }
        path
    }

    /// Calculate total duration from first to last change.
    ///
    /// Returns `None` if there are no changes.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.changes.first(), self.changes.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all recorded changes in order.
    pub fn changes(&self) -> &[PhaseChange<P>] {
        &self.changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::phase::GamePhase;

    #[test]
    fn new_history_is_empty() {
        let history: PhaseHistory<GamePhase> = PhaseHistory::new();
        assert_eq!(history.changes().len(), 0);
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = PhaseHistory::new();

        let change = PhaseChange {
            from: GamePhase::Idle,
            to: GamePhase::Playing,
            timestamp: Utc::now(),
            round: 0,
        };

        let new_history = history.record(change);

        assert_eq!(history.changes().len(), 0);
        assert_eq!(new_history.changes().len(), 1);
    }

    #[test]
    fn get_path_returns_phase_sequence() {
        let mut history = PhaseHistory::new();

        history = history.record(PhaseChange {
            from: GamePhase::Idle,
            to: GamePhase::Playing,
            timestamp: Utc::now(),
            round: 0,
        });
        history = history.record(PhaseChange {
            from: GamePhase::Playing,
            to: GamePhase::AwaitingInput,
            timestamp: Utc::now(),
            round: 0,
        });
        history = history.record(PhaseChange {
            from: GamePhase::AwaitingInput,
            to: GamePhase::Ended,
            timestamp: Utc::now(),
            round: 2,
        });

        let path = history.get_path();
        assert_eq!(path.len(), 4);
        assert_eq!(path[0], &GamePhase::Idle);
        assert_eq!(path[1], &GamePhase::Playing);
        assert_eq!(path[2], &GamePhase::AwaitingInput);
        assert_eq!(path[3], &GamePhase::Ended);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let start = Utc::now();
        let history = PhaseHistory::new()
            .record(PhaseChange {
                from: GamePhase::Idle,
                to: GamePhase::Playing,
                timestamp: start,
                round: 0,
            })
            .record(PhaseChange {
                from: GamePhase::Playing,
                to: GamePhase::AwaitingInput,
                timestamp: start + chrono::Duration::milliseconds(250),
                round: 0,
            });

        assert_eq!(
            history.duration(),
            Some(std::time::Duration::from_millis(250))
        );
    }

    #[test]
    fn round_field_is_tracked() {
        let change = PhaseChange {
            from: GamePhase::AwaitingInput,
            to: GamePhase::Playing,
            timestamp: Utc::now(),
            round: 3,
        };
        assert_eq!(change.round, 3);
    }

    #[test]
    fn history_serializes_correctly() {
        let history = PhaseHistory::new().record(PhaseChange {
            from: GamePhase::Idle,
            to: GamePhase::Playing,
            timestamp: Utc::now(),
            round: 0,
        });

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: PhaseHistory<GamePhase> = serde_json::from_str(&json).unwrap();

        assert_eq!(history.changes().len(), deserialized.changes().len());
    }
}
