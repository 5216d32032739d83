//! Per-cycle diagnostic line.
//!
//! Development builds stream one CSV line per cycle:
//!
//! ```text
//! timestamp,bufferIndex,mode,tempAvg,humiAvg,voltAvg,indicatorLevel,fanDuty
//! 12000,3,2,29,64,236,255,135
//! ```
//!
//! `mode` is the numeric discriminant (0 = Off, 1 = Low, 2 = High). The
//! format is observational only; nothing parses it back.

use core::fmt::{self, Write};

use heapless::String;

use crate::averaging::Averages;
use crate::power_mode::PowerMode;

/// Maximum length of one rendered line.
///
/// Worst case: 10-digit timestamp plus seven short fields and separators.
pub const DIAGNOSTIC_LINE_LEN: usize = 48;

/// Column header matching [`DiagnosticLine`]'s CSV output.
pub const DIAGNOSTIC_HEADER: &str = "timestamp,bufferIndex,mode,tempAvg,humiAvg,voltAvg,indicatorLevel,fanDuty";

/// Snapshot of one cycle for the diagnostic stream.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DiagnosticLine {
    /// Milliseconds since boot.
    pub timestamp_ms: u32,
    pub buffer_index: usize,
    pub mode: PowerMode,
    pub averages: Averages,
    pub indicator: u8,
    pub fan_duty: u8,
}

impl DiagnosticLine {
    /// Render into a fixed-capacity string.
    pub fn to_line(&self) -> String<DIAGNOSTIC_LINE_LEN> {
        let mut buf = String::new();
        // Capacity covers the widest possible line
        let _ = write!(buf, "{self}");
        buf
    }
}

impl fmt::Display for DiagnosticLine {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{},{},{}",
            self.timestamp_ms,
            self.buffer_index,
            self.mode as u8,
            self.averages.temperature,
            self.averages.humidity,
            self.averages.voltage,
            self.indicator,
            self.fan_duty
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DiagnosticLine {
    fn format(
        &self,
        f: defmt::Formatter,
    ) {
        defmt::write!(
            f,
            "{},{},{},{},{},{},{},{}",
            self.timestamp_ms,
            self.buffer_index,
            self.mode as u8,
            self.averages.temperature,
            self.averages.humidity,
            self.averages.voltage,
            self.indicator,
            self.fan_duty
        );
    }
}
