//! Deterministic playback scheduling.
//!
//! The engine never touches a wall clock. All playback timing goes through
//! a virtual-time [`TimerQueue`]: the host advances it with real elapsed
//! time, tests advance it manually and assert firing order.
//!
//! Every scheduled entry is stamped with the [`PassId`] of the playback
//! pass that created it. Cancelling a pass synchronously removes all of
//! its pending entries - after `cancel_pass` returns, nothing from that
//! pass can fire.

use std::time::Duration;

/// Identifier for one playback pass.
///
/// Pass ids are allocated from a monotonically incrementing counter, one
/// per scheduling pass, so a late event from an old pass can never be
/// mistaken for one belonging to the current pass.
pub type PassId = u64;

/// A timed event within a playback pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerEvent {
    /// The pass's initial delay elapsed; flashing is about to begin.
    PassBegin,
    /// Highlight the given tile.
    HighlightOn(usize),
    /// Remove the highlight from the given tile.
    HighlightOff(usize),
    /// The whole sequence has been flashed; input may begin.
    PlaybackDone,
}

/// A due event returned by [`TimerQueue::advance`], still stamped with
/// the pass that scheduled it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledEvent {
    pub pass: PassId,
    pub event: TimerEvent,
}

#[derive(Clone, Debug)]
struct TimerEntry {
    due: Duration,
    seq: u64,
    pass: PassId,
    event: TimerEvent,
}

/// Virtual-time timer queue.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use recall::{TimerEvent, TimerQueue};
///
/// let mut queue = TimerQueue::new();
/// queue.schedule(1, Duration::from_millis(100), TimerEvent::HighlightOn(0));
/// queue.schedule(1, Duration::from_millis(200), TimerEvent::HighlightOff(0));
///
/// let due = queue.advance(Duration::from_millis(150));
/// assert_eq!(due.len(), 1);
/// assert_eq!(due[0].event, TimerEvent::HighlightOn(0));
/// assert_eq!(queue.pending(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_seq: u64,
    entries: Vec<TimerEntry>,
}

impl TimerQueue {
    /// Create an empty queue at virtual time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of entries not yet due.
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Schedule `event` to fire `after` the current virtual time, stamped
    /// with `pass`.
    pub fn schedule(&mut self, pass: PassId, after: Duration, event: TimerEvent) {
        let entry = TimerEntry {
            due: self.now + after,
            seq: self.next_seq,
            pass,
            event,
        };
        self.next_seq += 1;
        self.entries.push(entry);
    }

    /// Schedule a full playback pass for `sequence`.
    ///
    /// Tile `i` is highlighted at `delay + i * (flash_duration + flash_gap)`
    /// for `flash_duration`, then un-highlighted. [`TimerEvent::PassBegin`]
    /// fires at `delay`, and [`TimerEvent::PlaybackDone`] fires one
    /// `flash_duration` after the last highlight ends, giving the final
    /// flash a moment to settle. An empty sequence schedules nothing.
    pub fn schedule_playback(
        &mut self,
        pass: PassId,
        delay: Duration,
        sequence: &[usize],
        flash_duration: Duration,
        flash_gap: Duration,
    ) {
        if sequence.is_empty() {
            return;
        }

        self.schedule(pass, delay, TimerEvent::PassBegin);

        let step = flash_duration + flash_gap;
        let mut last_off = delay;
        for (i, &tile) in sequence.iter().enumerate() {
            let on_at = delay + step * i as u32;
            let off_at = on_at + flash_duration;
            self.schedule(pass, on_at, TimerEvent::HighlightOn(tile));
            self.schedule(pass, off_at, TimerEvent::HighlightOff(tile));
            last_off = off_at;
        }

        self.schedule(pass, last_off + flash_duration, TimerEvent::PlaybackDone);
    }

    /// Remove every pending entry belonging to `pass`.
    ///
    /// Cancellation is synchronous and total: once this returns, no entry
    /// from `pass` remains in the queue.
    pub fn cancel_pass(&mut self, pass: PassId) {
        self.entries.retain(|entry| entry.pass != pass);
    }

    /// Remove every pending entry.
    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    /// Advance virtual time by `dt` and return all newly due events,
    /// ordered by due time, then by scheduling order for ties.
    pub fn advance(&mut self, dt: Duration) -> Vec<ScheduledEvent> {
        self.now += dt;
        let now = self.now;

        let mut due = Vec::new();
        let mut remaining = Vec::new();
        for entry in self.entries.drain(..) {
            if entry.due <= now {
                due.push(entry);
            } else {
                remaining.push(entry);
            }
        }
        self.entries = remaining;

        due.sort_by_key(|entry| (entry.due, entry.seq));
        due.into_iter()
            .map(|entry| ScheduledEvent {
                pass: entry.pass,
                event: entry.event,
            })
            .collect()
    }
}
