//! Recall: a deterministic sequence-memory game engine
//!
//! Recall implements the timed "watch the tiles flash, then repeat the
//! sequence" memory game as a host-agnostic state machine. The engine
//! owns every timer involved and guarantees that no stale timer callback
//! from a cancelled playback pass can corrupt a later round.
//!
//! # Core Concepts
//!
//! - **Phase**: where the engine sits in the round lifecycle (`Idle`,
//!   `Playing`, `AwaitingInput`, `Ended`)
//! - **Pass**: one timed playback of a round's sequence, identified by a
//!   monotonically incrementing [`PassId`]; cancelling a pass removes all
//!   of its pending timers synchronously
//! - **Escalation**: each successful round adds a tile (up to the cap)
//!   and replays at the larger size
//!
//! Time is virtual: the host drives the engine with [`GameEngine::tick`],
//! so tests advance the clock manually and assert exact firing order.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use recall::{GameConfig, GameEngine, GamePhase, MemoryStore};
//!
//! let mut engine = GameEngine::new(GameConfig::default(), MemoryStore::new());
//!
//! // The host's simulation and challenge toggles gate the start.
//! engine.set_simulation_active(true);
//! engine.set_challenge_enabled(true);
//! engine.start().unwrap();
//!
//! // Run the playback pass to completion.
//! engine.tick(Duration::from_secs(10));
//! assert_eq!(engine.phase(), GamePhase::AwaitingInput);
//!
//! // Repeat the sequence correctly to escalate.
//! for tile in engine.sequence().to_vec() {
//!     engine.on_tile_click(tile);
//! }
//! assert_eq!(engine.score(), 1);
//! assert_eq!(engine.tile_count(), 5);
//! ```

pub mod core;
pub mod engine;
pub mod scheduler;
pub mod store;

// Re-export commonly used types
pub use crate::core::{generate_sequence, GamePhase, Phase, PhaseChange, PhaseHistory, SequenceError};
pub use engine::{ClickOutcome, EngineError, EngineSnapshot, GameConfig, GameEngine, Gate, HostSignals};
pub use scheduler::{PassId, ScheduledEvent, TimerEvent, TimerQueue};
pub use store::{load_high_score, MemoryStore, SessionStore, HIGH_SCORE_KEY};
