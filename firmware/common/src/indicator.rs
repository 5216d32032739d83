//! Indicator LED levels and the feedback a cycle asks the firmware to show.
//!
//! The steady LED brightness mirrors the power mode. Mode changes are
//! acknowledged with a short bright flash burst regardless of the mode being
//! entered, and invalid sensor readings with a repeating fault flash.

use embassy_time::Duration;

use crate::power_mode::PowerMode;

/// LED dark (mode `Off`).
pub const INDICATOR_OFF: u8 = 0;

/// Dim steady glow (mode `Low`).
pub const INDICATOR_DIM: u8 = 20;

/// Full brightness (mode `High`, and every flash).
pub const INDICATOR_BRIGHT: u8 = 255;

/// Flashes shown when the mode changes.
pub const FLASH_COUNT: u8 = 3;

/// Flashes shown for a failed sensor read.
pub const FAULT_FLASH_COUNT: u8 = 5;

/// On time of one flash.
pub const FLASH_ON: Duration = Duration::from_millis(120);

/// Off time between flashes.
pub const FLASH_OFF: Duration = Duration::from_millis(120);

/// Steady indicator brightness for a mode.
#[inline]
pub const fn indicator_level(mode: PowerMode) -> u8 {
    match mode {
        PowerMode::Off => INDICATOR_OFF,
        PowerMode::Low => INDICATOR_DIM,
        PowerMode::High => INDICATOR_BRIGHT,
    }
}

/// Visual feedback requested by one cycle.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Feedback {
    /// Nothing to show beyond the steady level.
    #[default]
    None,
    /// Flash [`FLASH_COUNT`] times at full brightness, then settle at `level`.
    ModeChange { level: u8 },
    /// Flash [`FAULT_FLASH_COUNT`] times; repeated every cycle the fault lasts.
    SensorFault,
}

impl Feedback {
    /// Number of bright flashes in the sequence.
    pub const fn flashes(self) -> u8 {
        match self {
            Self::None => 0,
            Self::ModeChange { .. } => FLASH_COUNT,
            Self::SensorFault => FAULT_FLASH_COUNT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_per_mode() {
        assert_eq!(indicator_level(PowerMode::Off), 0);
        assert_eq!(indicator_level(PowerMode::Low), INDICATOR_DIM);
        assert_eq!(indicator_level(PowerMode::High), 255);
    }

    #[test]
    fn test_dim_is_between_off_and_bright() {
        assert!(INDICATOR_OFF < INDICATOR_DIM);
        assert!(INDICATOR_DIM < INDICATOR_BRIGHT);
    }

    #[test]
    fn test_feedback_flashes() {
        assert_eq!(Feedback::None.flashes(), 0);
        assert_eq!(Feedback::ModeChange { level: 0 }.flashes(), FLASH_COUNT);
        assert_eq!(Feedback::SensorFault.flashes(), FAULT_FLASH_COUNT);
    }
}
