//! Fan decision function.
//!
//! Maps trimmed averages and the power mode to an 8-bit PWM duty. Pure and
//! deterministic; rules are checked in strict priority order:
//!
//! 1. Battery below `low_voltage` or mode `Off` → 0.
//! 2. Battery below `good_voltage` or mode `Low` → `fan_low` if temperature
//!    **>** trigger or humidity **>** trigger, else 0.
//! 3. Otherwise the larger of the two proportional ramps, each starting at
//!    `fan_base` once its value is **≥** the trigger and capped at `fan_max`.
//!
//! The trigger test of rule 2 is strict while the ramp test of rule 3 is
//! inclusive. Both comparisons are kept exactly as shipped.

use crate::averaging::Averages;
use crate::config::FanThresholds;
use crate::power_mode::PowerMode;

/// PWM duty for the given averages and mode.
pub fn decide(
    averages: &Averages,
    mode: PowerMode,
    thresholds: &FanThresholds,
) -> u8 {
    let temp = i32::from(averages.temperature);
    let humi = i32::from(averages.humidity);
    let volt = i32::from(averages.voltage);
    let t = thresholds;

    let duty = if volt < t.low_voltage || mode == PowerMode::Off {
        0
    } else if volt < t.good_voltage || mode == PowerMode::Low {
        if temp > t.temp_trigger || humi > t.humi_trigger { t.fan_low } else { 0 }
    } else {
        let from_temp = ramp(temp, t.temp_trigger, t.temp_slope, t);
        let from_humi = ramp(humi, t.humi_trigger, t.humi_slope, t);
        from_temp.max(from_humi)
    };

    duty.clamp(0, t.fan_max) as u8
}

/// Proportional duty for one variable: `fan_base` at the trigger, rising by
/// `slope` per unit above it, capped at `fan_max`.
#[inline]
fn ramp(
    value: i32,
    trigger: i32,
    slope: i32,
    t: &FanThresholds,
) -> i32 {
    if value >= trigger {
        (t.fan_base + (value - trigger) * slope).min(t.fan_max)
    } else {
        0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
