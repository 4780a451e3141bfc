//! Engine timing and board configuration.

use std::time::Duration;

/// Board size and playback timing knobs.
///
/// The defaults mirror the canonical game: a four-tile board growing to
/// ten tiles, 240ms flashes with a 360ms gap, a short delay before the
/// first pass and a longer breather before escalation passes so the
/// player can take in the score-up feedback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Maximum board size; `tile_count` never exceeds this.
    pub max_tiles: usize,
    /// Board size each run starts (and resets) at.
    pub base_tile_count: usize,
    /// How long each tile stays highlighted during playback.
    pub flash_duration: Duration,
    /// Pause between one tile's highlight ending and the next beginning.
    pub flash_gap: Duration,
    /// Delay before the first pass of a run.
    pub start_delay: Duration,
    /// Delay before each pass after a successful round.
    pub escalation_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_tiles: 10,
            base_tile_count: 4,
            flash_duration: Duration::from_millis(240),
            flash_gap: Duration::from_millis(360),
            start_delay: Duration::from_millis(300),
            escalation_delay: Duration::from_millis(800),
        }
    }
}
