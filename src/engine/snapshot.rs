//! Serializable view of the engine's externally visible state.

use crate::core::GamePhase;
use serde::{Deserialize, Serialize};

/// Everything a host needs to render the game at one instant.
///
/// Snapshots are plain values: comparing two of them is how tests assert
/// that a refused operation mutated nothing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub phase: GamePhase,
    pub tile_count: usize,
    pub sequence: Vec<usize>,
    pub user_input: Vec<usize>,
    pub score: u32,
    pub high_score: u32,
    pub active_tile: Option<usize>,
    pub status: String,
}

impl EngineSnapshot {
    /// Serialize the snapshot to a JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EngineSnapshot {
        EngineSnapshot {
            phase: GamePhase::AwaitingInput,
            tile_count: 5,
            sequence: vec![2, 0, 3, 1, 4],
            user_input: vec![2, 0],
            score: 1,
            high_score: 4,
            active_tile: None,
            status: "Repeat the sequence by tapping the tiles.".to_string(),
        }
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let snapshot = sample();
        let json = snapshot.to_json().unwrap();
        let deserialized: EngineSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, deserialized);
    }

    #[test]
    fn equal_snapshots_compare_equal() {
        assert_eq!(sample(), sample());
    }
}
