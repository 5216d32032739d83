//! Sensor-averaging and fan-decision engine for the boat ventilation fan.
//!
//! This crate contains the platform-agnostic logic shared by the firmware and
//! the host test suite:
//!
//! - [`config`]: Fan thresholds, timing profiles and buffer sizes
//! - [`channels`]: Sensor channels, reading domains and clamping
//! - [`samples`]: Fixed-capacity rolling sample buffer
//! - [`averaging`]: Outlier-trimmed average (drop one min, one max)
//! - [`power_mode`]: Off/Low/High mode machine with auto-resume
//! - [`decision`]: Pure mapping of averages + mode to a PWM duty
//! - [`controller`]: One decision cycle and the inter-cycle poll window
//! - [`sensors`]: Sensor source abstraction and a scripted test double
//! - [`button`]: Debounced edge detection for the mode button
//! - [`indicator`]: Indicator LED levels and feedback requests
//! - [`diagnostics`]: Per-cycle CSV diagnostic line
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of tests. Time is always passed in as an
//! [`embassy_time::Instant`]; nothing here reads a clock.
//!
//! # Testing
//!
//! ```bash
//! cargo test -p vent-common
//! ```

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

pub mod averaging;
pub mod button;
pub mod channels;
pub mod config;
pub mod controller;
pub mod decision;
pub mod diagnostics;
pub mod indicator;
pub mod power_mode;
pub mod samples;
pub mod sensors;

// Re-export commonly used items
pub use averaging::{Averages, trimmed_average};
pub use channels::{Channel, Reading};
pub use config::{FanThresholds, VentConfig};
pub use controller::{CycleReport, PollWindow, VentController};
pub use decision::decide;
pub use power_mode::{ModeTransition, PowerMode, PowerModeMachine};
pub use samples::SampleBuffer;
pub use sensors::{ScriptedSensors, SensorError, SensorSource};
