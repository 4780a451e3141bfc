//! The game lifecycle controller.
//!
//! [`GameEngine`] owns the whole round cycle: it generates sequences,
//! schedules playback passes on the virtual-time timer queue, validates
//! tile clicks incrementally, escalates difficulty on success, and keeps
//! the session high score. The host drives it with three calls:
//! [`GameEngine::start`], [`GameEngine::tick`], and
//! [`GameEngine::on_tile_click`].

mod config;
mod error;
mod gate;
mod snapshot;

pub use config::GameConfig;
pub use error::EngineError;
pub use gate::{Gate, HostSignals};
pub use snapshot::EngineSnapshot;

use crate::core::{generate_sequence, GamePhase, Phase, PhaseChange, PhaseHistory};
use crate::scheduler::{PassId, TimerEvent, TimerQueue};
use crate::store::{load_high_score, SessionStore, HIGH_SCORE_KEY};
use chrono::Utc;
use log::{debug, info, warn};
use rand::{rngs::StdRng, SeedableRng};
use std::time::Duration;

const MSG_READY: &str = "Click start to begin and watch the sequence carefully.";
const MSG_ACTIVATE_SIMULATION: &str = "Activate the simulation to start the memory test.";
const MSG_ENABLE_CHALLENGE: &str = "Enable memory challenges to start the game.";
const MSG_WATCH_START: &str = "Watch the sequence carefully.";
const MSG_WATCH: &str = "Watch the sequence...";
const MSG_REPEAT: &str = "Repeat the sequence by tapping the tiles.";
const MSG_MASTERED: &str = "Excellent! You've mastered all tiles. Watch for a fresh pattern.";
const MSG_NEW_TILE: &str = "Nice! A new tile has been added. Watch the next sequence.";

fn progress_message(remaining: usize) -> String {
    let noun = if remaining == 1 { "tile" } else { "tiles" };
    format!("Great! {remaining} more {noun} to go.")
}

fn game_over_message(score: u32) -> String {
    format!("Game over! You reached a score of {score}. Click start to try again.")
}

/// Result of feeding one tile click to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The click was not accepted: wrong phase or tile out of bounds.
    /// The engine's state is unchanged.
    Ignored,
    /// Correct so far; `remaining` tiles are still to be entered.
    Progress { remaining: usize },
    /// The whole sequence was entered correctly. The next round's
    /// playback has been scheduled.
    RoundWon { score: u32, tile_count: usize },
    /// The click did not match the sequence; the run is over.
    GameOver { score: u32 },
}

/// The sequence-memory game engine.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use recall::{GameConfig, GameEngine, GamePhase, MemoryStore};
///
/// let mut engine = GameEngine::new(GameConfig::default(), MemoryStore::new());
///
/// // Both host toggles must be on before a game may start.
/// assert!(engine.start().is_err());
/// engine.set_simulation_active(true);
/// engine.set_challenge_enabled(true);
/// engine.start().unwrap();
/// assert_eq!(engine.phase(), GamePhase::Playing);
///
/// // Let the playback pass run to completion.
/// engine.tick(Duration::from_secs(10));
/// assert_eq!(engine.phase(), GamePhase::AwaitingInput);
///
/// // Echo the sequence back to win the round.
/// for tile in engine.sequence().to_vec() {
///     engine.on_tile_click(tile);
/// }
/// assert_eq!(engine.score(), 1);
/// assert_eq!(engine.tile_count(), 5);
/// ```
pub struct GameEngine<S: SessionStore> {
    config: GameConfig,
    store: S,
    rng: StdRng,
    signals: HostSignals,
    gates: Vec<Gate<HostSignals>>,
    timers: TimerQueue,
    next_pass: PassId,
    active_pass: Option<PassId>,
    phase: GamePhase,
    tile_count: usize,
    sequence: Vec<usize>,
    user_input: Vec<usize>,
    score: u32,
    high_score: u32,
    active_tile: Option<usize>,
    status: String,
    history: PhaseHistory<GamePhase>,
}

impl<S: SessionStore> GameEngine<S> {
    /// Create an engine seeded from OS entropy.
    ///
    /// Any high score previously written to `store` is picked up here;
    /// a missing or non-numeric stored value counts as no high score.
    pub fn new(config: GameConfig, store: S) -> Self {
        Self::with_rng(config, store, StdRng::from_entropy())
    }

    /// Create an engine with an explicit RNG, for deterministic sequences.
    pub fn with_rng(config: GameConfig, store: S, rng: StdRng) -> Self {
        let high_score = load_high_score(&store);
        let tile_count = config.base_tile_count;
        Self {
            config,
            store,
            rng,
            signals: HostSignals::default(),
            gates: vec![
                Gate::new(
                    |signals: &HostSignals| signals.simulation_active,
                    MSG_ACTIVATE_SIMULATION,
                ),
                Gate::new(
                    |signals: &HostSignals| signals.challenge_enabled,
                    MSG_ENABLE_CHALLENGE,
                ),
            ],
            timers: TimerQueue::new(),
            next_pass: 1,
            active_pass: None,
            phase: GamePhase::Idle,
            tile_count,
            sequence: Vec::new(),
            user_input: Vec::new(),
            score: 0,
            high_score,
            active_tile: None,
            status: MSG_READY.to_string(),
            history: PhaseHistory::new(),
        }
    }

    // -- host signal surface --------------------------------------------

    /// Toggle the enclosing simulation context.
    ///
    /// Deactivating it force-resets the engine from any phase and turns
    /// the challenge toggle off, cancelling any in-flight pass.
    pub fn set_simulation_active(&mut self, active: bool) {
        self.signals.simulation_active = active;
        if !active {
            self.signals.challenge_enabled = false;
            self.reset();
        }
    }

    /// Toggle the memory-challenge gate.
    pub fn set_challenge_enabled(&mut self, enabled: bool) {
        self.signals.challenge_enabled = enabled;
    }

    /// Current host signals as last set.
    pub fn signals(&self) -> HostSignals {
        self.signals
    }

    // -- lifecycle ------------------------------------------------------

    /// Start a new run.
    ///
    /// Refused with [`EngineError::PreconditionNotMet`] unless both host
    /// signals are on; a refusal mutates nothing. On success the engine
    /// resets its round state, generates a fresh sequence at the base
    /// board size, and schedules the first playback pass.
    pub fn start(&mut self) -> Result<(), EngineError> {
        for gate in &self.gates {
            gate.check(&self.signals)?;
        }

        let sequence = generate_sequence(
            &mut self.rng,
            self.config.base_tile_count,
            self.config.max_tiles,
        )?;

        self.cancel_active_pass();
        self.tile_count = self.config.base_tile_count;
        self.sequence = sequence;
        self.user_input.clear();
        self.active_tile = None;
        self.score = 0;
        self.status = MSG_WATCH_START.to_string();
        self.transition_to(GamePhase::Playing);
        self.begin_pass(self.config.start_delay);
        Ok(())
    }

    /// Reset to the canonical idle state, from any phase.
    ///
    /// Cancels every pending timer, restores the base board size, clears
    /// the sequence and input, and zeroes the score. The session high
    /// score survives.
    pub fn reset(&mut self) {
        self.timers.cancel_all();
        self.active_pass = None;
        self.tile_count = self.config.base_tile_count;
        self.sequence.clear();
        self.user_input.clear();
        self.active_tile = None;
        self.score = 0;
        self.status = MSG_READY.to_string();
        self.transition_to(GamePhase::Idle);
    }

    /// Advance the engine's virtual clock by `elapsed` and apply every
    /// timer event that came due.
    ///
    /// Events stamped with a pass other than the currently active one are
    /// dropped: a cancelled pass can never mutate a later round.
    pub fn tick(&mut self, elapsed: Duration) {
        for scheduled in self.timers.advance(elapsed) {
            if Some(scheduled.pass) != self.active_pass {
                warn!(
                    "dropping stale timer event {:?} from pass {}",
                    scheduled.event, scheduled.pass
                );
                continue;
            }
            self.apply_timer_event(scheduled.event);
        }
    }

    /// Feed one user tile click to the engine.
    ///
    /// Clicks are ignored outside [`GamePhase::AwaitingInput`] and for
    /// tiles beyond the unlocked range; neither mutates any state.
    pub fn on_tile_click(&mut self, index: usize) -> ClickOutcome {
        if !self.phase.accepts_input() {
            debug!("ignoring click on tile {index} during {}", self.phase.name());
            return ClickOutcome::Ignored;
        }
        if index >= self.tile_count {
            debug!(
                "ignoring click on locked tile {index} (board size {})",
                self.tile_count
            );
            return ClickOutcome::Ignored;
        }

        self.user_input.push(index);
        let position = self.user_input.len() - 1;
        if self.sequence.get(position) != Some(&index) {
            return self.end_run();
        }

        if self.user_input.len() < self.sequence.len() {
            let remaining = self.sequence.len() - self.user_input.len();
            self.status = progress_message(remaining);
            return ClickOutcome::Progress { remaining };
        }

        self.complete_round()
    }

    // -- read surface ---------------------------------------------------

    /// Current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Human-readable description of the current state.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Rounds completed in the current run.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Best score seen this session.
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Number of unlocked tiles.
    pub fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// Tile currently flashed during playback, if any.
    pub fn active_tile(&self) -> Option<usize> {
        self.active_tile
    }

    /// The current round's sequence.
    pub fn sequence(&self) -> &[usize] {
        &self.sequence
    }

    /// Tiles the user has entered so far this round.
    pub fn user_input(&self) -> &[usize] {
        &self.user_input
    }

    /// Phase transitions recorded since the engine was created.
    pub fn history(&self) -> &PhaseHistory<GamePhase> {
        &self.history
    }

    /// Timer entries not yet due.
    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    /// The backing session store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Snapshot of everything a host needs to render the game.
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            phase: self.phase,
            tile_count: self.tile_count,
            sequence: self.sequence.clone(),
            user_input: self.user_input.clone(),
            score: self.score,
            high_score: self.high_score,
            active_tile: self.active_tile,
            status: self.status.clone(),
        }
    }

    // -- internals ------------------------------------------------------

    fn transition_to(&mut self, next: GamePhase) {
        if self.phase == next {
            return;
        }
        debug!("phase {} -> {}", self.phase.name(), next.name());
        self.history = self.history.record(PhaseChange {
            from: self.phase,
            to: next,
            timestamp: Utc::now(),
            round: self.score as usize,
        });
        self.phase = next;
    }

    fn begin_pass(&mut self, delay: Duration) {
        let pass = self.next_pass;
        self.next_pass += 1;
        if let Some(old) = self.active_pass.replace(pass) {
            self.timers.cancel_pass(old);
            debug!("cancelled pass {old} before starting pass {pass}");
        }
        self.timers.schedule_playback(
            pass,
            delay,
            &self.sequence,
            self.config.flash_duration,
            self.config.flash_gap,
        );
        debug!(
            "scheduled pass {pass}: {} tiles after {:?}",
            self.sequence.len(),
            delay
        );
    }

    fn cancel_active_pass(&mut self) {
        if let Some(pass) = self.active_pass.take() {
            self.timers.cancel_pass(pass);
            debug!("cancelled pass {pass}");
        }
    }

    fn apply_timer_event(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::PassBegin => {
                self.status = MSG_WATCH.to_string();
            }
            TimerEvent::HighlightOn(tile) => {
                self.active_tile = Some(tile);
            }
            TimerEvent::HighlightOff(_) => {
                self.active_tile = None;
            }
            TimerEvent::PlaybackDone => {
                self.active_pass = None;
                self.active_tile = None;
                self.status = MSG_REPEAT.to_string();
                self.transition_to(GamePhase::AwaitingInput);
            }
        }
    }

    fn end_run(&mut self) -> ClickOutcome {
        let score = self.score;
        info!("game over at score {score}");
        self.cancel_active_pass();
        self.sequence.clear();
        self.user_input.clear();
        self.tile_count = self.config.base_tile_count;
        self.active_tile = None;
        self.status = game_over_message(score);
        self.transition_to(GamePhase::Ended);
        ClickOutcome::GameOver { score }
    }

    fn complete_round(&mut self) -> ClickOutcome {
        self.score += 1;
        if self.score > self.high_score {
            self.high_score = self.score;
            self.store.set(HIGH_SCORE_KEY, &self.high_score.to_string());
            info!("new session high score: {}", self.high_score);
        }

        let reached_max = self.tile_count >= self.config.max_tiles;
        let next_count = if reached_max {
            self.config.max_tiles
        } else {
            self.tile_count + 1
        };

        let sequence = match generate_sequence(&mut self.rng, next_count, self.config.max_tiles) {
            Ok(sequence) => sequence,
            Err(err) => {
                // Unreachable for any config with base <= max, but a bad
                // config must not corrupt the run state.
                warn!("sequence generation failed during escalation: {err}");
                return self.end_run();
            }
        };

        self.tile_count = next_count;
        self.sequence = sequence;
        self.user_input.clear();
        self.active_tile = None;
        self.status = if reached_max { MSG_MASTERED } else { MSG_NEW_TILE }.to_string();
        self.transition_to(GamePhase::Playing);
        self.begin_pass(self.config.escalation_delay);

        ClickOutcome::RoundWon {
            score: self.score,
            tile_count: self.tile_count,
        }
    }
}
