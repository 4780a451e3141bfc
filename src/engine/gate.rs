//! Start-gating predicates.
//!
//! A game may only start once the host's enclosing simulation is active
//! and the challenge toggle is on. Gates encapsulate those preconditions
//! as pure predicates paired with the refusal message surfaced when the
//! predicate fails.

use super::error::EngineError;

/// The two boolean signals the host exposes to the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HostSignals {
    /// The enclosing simulation context is active.
    pub simulation_active: bool,
    /// The memory challenge toggle is enabled.
    pub challenge_enabled: bool,
}

/// Pure predicate guarding an engine operation.
///
/// A gate is checked before the operation runs; when the predicate fails
/// the operation is refused with [`EngineError::PreconditionNotMet`]
/// carrying the gate's message, and no state is mutated.
///
/// # Example
///
/// ```rust
/// use recall::{Gate, HostSignals};
///
/// let gate = Gate::new(
///     |signals: &HostSignals| signals.simulation_active,
///     "Activate the simulation first.",
/// );
///
/// let signals = HostSignals { simulation_active: true, challenge_enabled: false };
/// assert!(gate.check(&signals).is_ok());
/// assert!(gate.check(&HostSignals::default()).is_err());
/// ```
pub struct Gate<C> {
    predicate: Box<dyn Fn(&C) -> bool + Send + Sync>,
    refusal: String,
}

impl<C> Gate<C> {
    /// Create a gate from a pure predicate and its refusal message.
    pub fn new<F>(predicate: F, refusal: impl Into<String>) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Gate {
            predicate: Box::new(predicate),
            refusal: refusal.into(),
        }
    }

    /// Evaluate the gate against `ctx`.
    pub fn check(&self, ctx: &C) -> Result<(), EngineError> {
        if (self.predicate)(ctx) {
            Ok(())
        } else {
            Err(EngineError::PreconditionNotMet(self.refusal.clone()))
        }
    }

    /// The message surfaced when this gate refuses.
    pub fn refusal(&self) -> &str {
        &self.refusal
    }
}
