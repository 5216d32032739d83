//! Fan thresholds, timing profiles and buffer sizes.
//!
//! All tunables are grouped into [`VentConfig`], built from compile-time
//! constants with validation assertions. The firmware picks one profile at
//! startup ([`VentConfig::PRODUCTION`] or [`VentConfig::BENCH`]) and hands it
//! to the controller; nothing else in the logic branches on the build.
//!
//! # Compile-Time Validation
//!
//! Threshold groups carry `const` assertions that verify their ordering. If a
//! value is edited inconsistently (e.g. `GOOD_VOLTAGE < LOW_VOLTAGE`),
//! compilation fails.

use embassy_time::Duration;

// =============================================================================
// Battery Voltage Thresholds (10-bit ADC units)
// =============================================================================

/// Below this averaged voltage the fan is switched off to protect the battery.
pub const LOW_VOLTAGE: i32 = 222;

/// Below this averaged voltage the fan only runs at the fixed low level.
/// At or above it the battery is considered healthy and the full ramp applies.
pub const GOOD_VOLTAGE: i32 = 230;

const _: () = assert!(LOW_VOLTAGE < GOOD_VOLTAGE);

// =============================================================================
// Temperature / Humidity Triggers
// =============================================================================

/// Temperature (°C) past which the fan starts.
pub const TEMP_TRIGGER: i32 = 28;

/// Duty added per °C above [`TEMP_TRIGGER`].
pub const TEMP_SLOPE: i32 = 40;

/// Relative humidity (%) past which the fan starts.
pub const HUMI_TRIGGER: i32 = 70;

/// Duty added per % above [`HUMI_TRIGGER`].
pub const HUMI_SLOPE: i32 = 8;

// =============================================================================
// Fan Duty Levels (8-bit PWM)
// =============================================================================

/// Duty applied as soon as a trigger is reached on the proportional ramp.
/// Keeps the fan from stalling right at the trigger boundary.
pub const FAN_BASE: i32 = 95;

/// Fixed duty used when the battery is marginal or the user selected Low.
pub const FAN_LOW: i32 = 80;

/// Upper bound of every duty the decision function produces.
pub const FAN_MAX: i32 = 255;

const _: () = assert!(FAN_LOW <= FAN_MAX);
const _: () = assert!(FAN_BASE <= FAN_MAX);
const _: () = assert!(FAN_MAX <= u8::MAX as i32);

// =============================================================================
// Sample Buffer Sizes
// =============================================================================

/// Samples per channel on the production build (trim divisor 8).
pub const PRODUCTION_SAMPLES: usize = 10;

/// Samples per channel on the bench build (trim divisor 3).
pub const BENCH_SAMPLES: usize = 5;

const _: () = assert!(PRODUCTION_SAMPLES >= 3);
const _: () = assert!(BENCH_SAMPLES >= 3);

// =============================================================================
// Threshold Set
// =============================================================================

/// Thresholds and duty levels consumed by [`crate::decision::decide`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FanThresholds {
    pub low_voltage: i32,
    pub good_voltage: i32,
    pub temp_trigger: i32,
    pub temp_slope: i32,
    pub humi_trigger: i32,
    pub humi_slope: i32,
    pub fan_base: i32,
    pub fan_low: i32,
    pub fan_max: i32,
}

impl FanThresholds {
    /// Thresholds shipped on the device.
    pub const DEFAULT: Self = Self {
        low_voltage: LOW_VOLTAGE,
        good_voltage: GOOD_VOLTAGE,
        temp_trigger: TEMP_TRIGGER,
        temp_slope: TEMP_SLOPE,
        humi_trigger: HUMI_TRIGGER,
        humi_slope: HUMI_SLOPE,
        fan_base: FAN_BASE,
        fan_low: FAN_LOW,
        fan_max: FAN_MAX,
    };
}

impl Default for FanThresholds {
    fn default() -> Self { Self::DEFAULT }
}

// =============================================================================
// Runtime Profile
// =============================================================================

/// Complete controller configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VentConfig {
    /// Fan decision thresholds.
    pub thresholds: FanThresholds,
    /// Time between two decision cycles when no button is pressed.
    pub cycle_period: Duration,
    /// Sleep between two button polls inside the cycle wait.
    pub poll_interval: Duration,
    /// Idle time in Off/Low after which the mode steps back towards High.
    pub resume_timeout: Duration,
    /// Emit one CSV diagnostic line per cycle.
    pub diagnostics: bool,
}

impl VentConfig {
    /// On-board profile: 3 hour auto-resume, quiet logs.
    pub const PRODUCTION: Self = Self {
        thresholds: FanThresholds::DEFAULT,
        cycle_period: Duration::from_secs(5),
        poll_interval: Duration::from_millis(50),
        resume_timeout: Duration::from_secs(3 * 60 * 60),
        diagnostics: false,
    };

    /// Bench-testing profile: one minute auto-resume, diagnostics on.
    pub const BENCH: Self = Self {
        thresholds: FanThresholds::DEFAULT,
        cycle_period: Duration::from_secs(2),
        poll_interval: Duration::from_millis(50),
        resume_timeout: Duration::from_secs(60),
        diagnostics: true,
    };

    /// Upper bound between a press and the cycle that applies it.
    ///
    /// The button is only sampled once per `poll_interval` during the wait
    /// between cycles, so a press is seen at most one interval late.
    #[inline]
    pub const fn worst_case_button_latency(&self) -> Duration { self.poll_interval }
}

impl Default for VentConfig {
    fn default() -> Self { Self::PRODUCTION }
}

const _: () = assert!(VentConfig::PRODUCTION.poll_interval.as_ticks() < VentConfig::PRODUCTION.cycle_period.as_ticks());
const _: () = assert!(VentConfig::BENCH.poll_interval.as_ticks() < VentConfig::BENCH.cycle_period.as_ticks());

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
#[allow(clippy::assertions_on_constants)] // Intentional runtime mirror of the const checks
mod tests {
    use super::*;

    #[test]
    fn test_voltage_threshold_ordering() {
        assert!(LOW_VOLTAGE < GOOD_VOLTAGE);
    }

    #[test]
    fn test_duty_levels_fit_in_u8() {
        assert!(FAN_MAX <= 255);
        assert!(FAN_BASE <= FAN_MAX);
        assert!(FAN_LOW <= FAN_MAX);
    }

    #[test]
    fn test_default_thresholds_match_constants() {
        let t = FanThresholds::default();
        assert_eq!(t.low_voltage, 222);
        assert_eq!(t.temp_trigger, 28);
        assert_eq!(t.temp_slope, 40);
        assert_eq!(t.fan_base, 95);
        assert_eq!(t.fan_max, 255);
    }

    #[test]
    fn test_production_profile() {
        let cfg = VentConfig::default();
        assert_eq!(cfg, VentConfig::PRODUCTION);
        assert_eq!(cfg.resume_timeout, Duration::from_secs(10_800));
        assert!(!cfg.diagnostics);
    }

    #[test]
    fn test_bench_profile_resumes_faster() {
        assert!(VentConfig::BENCH.resume_timeout < VentConfig::PRODUCTION.resume_timeout);
        assert!(VentConfig::BENCH.diagnostics);
    }

    #[test]
    fn test_button_latency_is_poll_interval() {
        let cfg = VentConfig::PRODUCTION;
        assert_eq!(cfg.worst_case_button_latency(), Duration::from_millis(50));
        assert!(cfg.worst_case_button_latency() < cfg.cycle_period);
    }

    #[test]
    fn test_buffer_sizes() {
        assert_eq!(PRODUCTION_SAMPLES - 2, 8);
        assert_eq!(BENCH_SAMPLES - 2, 3);
    }
}
