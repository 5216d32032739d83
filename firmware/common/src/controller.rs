//! One decision cycle and the wait between cycles.
//!
//! [`VentController`] owns all cycle state (sample buffer, power mode
//! machine, configuration and the last duty). The firmware constructs it once
//! from the first valid reading and then, forever:
//!
//! 1. waits inside a [`PollWindow`], polling the button every
//!    `poll_interval` until a press arrives or the cycle period ends;
//! 2. acquires a reading;
//! 3. calls [`VentController::run_cycle`] and drives the outputs from the
//!    returned [`CycleReport`].
//!
//! A press ends the wait early, so at most one logical press reaches a cycle
//! and its response latency is bounded by the poll interval.

use embassy_time::{Duration, Instant};

use crate::averaging::Averages;
use crate::channels::Reading;
use crate::config::VentConfig;
use crate::decision::decide;
use crate::diagnostics::DiagnosticLine;
use crate::indicator::{Feedback, indicator_level};
use crate::power_mode::{ModeTransition, PowerMode, PowerModeMachine};
use crate::samples::SampleBuffer;
use crate::sensors::SensorError;

/// Result of one cycle, consumed by the output drivers.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    /// Fan PWM duty (0-255).
    pub duty: u8,
    /// Steady indicator brightness for the current mode.
    pub indicator: u8,
    /// Flash sequence to show before settling on `indicator`.
    pub feedback: Feedback,
    /// Mode change applied this cycle, if any.
    pub transition: Option<ModeTransition>,
    /// Sensor failure that caused the buffer update to be skipped.
    pub fault: Option<SensorError>,
    /// Trimmed averages the duty was computed from.
    pub averages: Averages,
    /// Mode after this cycle.
    pub mode: PowerMode,
    /// Buffer slot the next reading will overwrite.
    pub buffer_index: usize,
}

impl CycleReport {
    /// Diagnostic snapshot of this cycle.
    pub const fn diagnostic_line(
        &self,
        timestamp_ms: u32,
    ) -> DiagnosticLine {
        DiagnosticLine {
            timestamp_ms,
            buffer_index: self.buffer_index,
            mode: self.mode,
            averages: self.averages,
            indicator: self.indicator,
            fan_duty: self.duty,
        }
    }
}

/// Controller owning every piece of cycle state.
#[derive(Clone, Debug)]
pub struct VentController<const N: usize> {
    config: VentConfig,
    samples: SampleBuffer<N>,
    mode: PowerModeMachine,
    last_duty: u8,
}

impl<const N: usize> VentController<N> {
    /// Build the controller from the first valid reading.
    ///
    /// The buffer is seeded with `first` in every slot and the power mode
    /// starts in `High`, its resume clock anchored at `now`.
    pub fn new(
        config: VentConfig,
        first: Reading,
        now: Instant,
    ) -> Self {
        let samples = SampleBuffer::seeded(first);
        let last_duty = decide(&samples.averages(), PowerMode::High, &config.thresholds);
        Self {
            config,
            samples,
            mode: PowerModeMachine::new(now, config.resume_timeout),
            last_duty,
        }
    }

    /// Run one decision cycle.
    ///
    /// `pressed` is the single logical press collected during the wait (if
    /// any); `reading` is this cycle's acquisition. A failed reading leaves the
    /// buffer untouched and the duty is recomputed from the stale samples,
    /// which keeps the fan at its previous speed unless the mode changed.
    pub fn run_cycle(
        &mut self,
        now: Instant,
        pressed: bool,
        reading: Result<Reading, SensorError>,
    ) -> CycleReport {
        let transition = if pressed {
            Some(self.mode.on_user_press(now))
        } else {
            self.mode.on_auto_resume_check(now)
        };

        let fault = match reading {
            Ok(reading) => {
                self.samples.push(reading);
                None
            }
            Err(err) => Some(err),
        };

        let averages = self.samples.averages();
        let mode = self.mode.mode();
        let duty = decide(&averages, mode, &self.config.thresholds);
        self.last_duty = duty;

        let indicator = indicator_level(mode);
        let feedback = match (transition, fault) {
            (Some(t), _) => Feedback::ModeChange { level: t.indicator },
            (None, Some(_)) => Feedback::SensorFault,
            (None, None) => Feedback::None,
        };

        CycleReport {
            duty,
            indicator,
            feedback,
            transition,
            fault,
            averages,
            mode,
            buffer_index: self.samples.index(),
        }
    }

    /// Active configuration.
    #[inline]
    pub const fn config(&self) -> &VentConfig { &self.config }

    /// Current power mode.
    #[inline]
    pub const fn mode(&self) -> PowerMode { self.mode.mode() }

    /// Duty computed by the last cycle (or at construction).
    #[inline]
    pub const fn last_duty(&self) -> u8 { self.last_duty }

    /// Sample buffer, for diagnostics.
    #[inline]
    pub const fn samples(&self) -> &SampleBuffer<N> { &self.samples }
}

// =============================================================================
// Inter-cycle Wait
// =============================================================================

/// Deadline for the button-poll wait between two cycles.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PollWindow {
    deadline: Instant,
}

impl PollWindow {
    /// Open a window ending `period` after `now`.
    #[inline]
    pub fn open(
        now: Instant,
        period: Duration,
    ) -> Self {
        Self { deadline: now + period }
    }

    /// True while the wait should keep polling.
    #[inline]
    pub fn is_open(
        &self,
        now: Instant,
    ) -> bool {
        now < self.deadline
    }

    /// Time left before the deadline, capped at `poll_interval`.
    ///
    /// This is the next sleep of the poll loop.
    pub fn next_sleep(
        &self,
        now: Instant,
        poll_interval: Duration,
    ) -> Duration {
        self.deadline.saturating_duration_since(now).min(poll_interval)
    }

    /// End of the window.
    #[inline]
    pub const fn deadline(&self) -> Instant { self.deadline }
}

// =============================================================================
// Unit Tests
// =============================================================================
