//! User-selected power mode with time-based auto-resume.
//!
//! ```text
//!   ┌──press──▶ Low ──press──▶ High ──press──┐
//!   │                                        │
//!  Off ◀─────────────────────────────────────┘
//!
//!  Off/Low ──[idle > resume_timeout]──▶ next mode (one step per cycle)
//! ```
//!
//! A press always rotates one step forward. It is the only way to move into
//! `Off` or down in power. When the machine sits in `Off` or `Low` for longer
//! than the resume timeout, the cycle synthesizes a press. The timestamp of
//! the last *user* press is kept as-is on those synthetic steps, so `Off`
//! walks through `Low` to `High` on two consecutive cycles once the timeout
//! has passed.

use embassy_time::{Duration, Instant};

use crate::indicator::indicator_level;

/// Operating level gating the fan independently of the sensors.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PowerMode {
    /// Fan forced off.
    Off = 0,
    /// Fixed low speed when triggered, no ramp.
    Low = 1,
    /// Full automatic behaviour.
    #[default]
    High = 2,
}

impl PowerMode {
    /// Next mode in the fixed rotation (Off → Low → High → Off).
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Self::Off => Self::Low,
            Self::Low => Self::High,
            Self::High => Self::Off,
        }
    }

    /// Short label for logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::Low => "LOW",
            Self::High => "HIGH",
        }
    }
}

/// What caused a mode change.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransitionCause {
    /// Logical button press.
    User,
    /// Resume timeout elapsed in a reduced mode.
    AutoResume,
}

/// A single mode change, with the indicator brightness to settle on.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeTransition {
    pub from: PowerMode,
    pub to: PowerMode,
    pub cause: TransitionCause,
    /// Indicator level for the entered mode (Off → 0, Low → dim, High → bright).
    pub indicator: u8,
}

/// Power mode state machine.
#[derive(Clone, Debug)]
pub struct PowerModeMachine {
    mode: PowerMode,
    last_change: Instant,
    resume_timeout: Duration,
}

impl PowerModeMachine {
    /// Start in `High` with the resume clock anchored at `now`.
    pub const fn new(
        now: Instant,
        resume_timeout: Duration,
    ) -> Self {
        Self {
            mode: PowerMode::High,
            last_change: now,
            resume_timeout,
        }
    }

    /// Current mode.
    #[inline]
    pub const fn mode(&self) -> PowerMode { self.mode }

    /// Time of the last user press (or construction).
    #[inline]
    pub const fn last_change(&self) -> Instant { self.last_change }

    /// Rotate one step and restart the resume clock.
    pub fn on_user_press(
        &mut self,
        now: Instant,
    ) -> ModeTransition {
        self.last_change = now;
        self.rotate(TransitionCause::User)
    }

    /// Step forward if a reduced mode has been idle longer than the timeout.
    ///
    /// Never fires in `High`, and never before `resume_timeout` has elapsed
    /// since the last user press.
    pub fn on_auto_resume_check(
        &mut self,
        now: Instant,
    ) -> Option<ModeTransition> {
        if self.mode == PowerMode::High {
            return None;
        }
        if now.saturating_duration_since(self.last_change) > self.resume_timeout {
            Some(self.rotate(TransitionCause::AutoResume))
        } else {
            None
        }
    }

    fn rotate(
        &mut self,
        cause: TransitionCause,
    ) -> ModeTransition {
        let from = self.mode;
        self.mode = from.next();
        ModeTransition {
            from,
            to: self.mode,
            cause,
            indicator: indicator_level(self.mode),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
