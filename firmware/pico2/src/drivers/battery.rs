//! Battery voltage through the on-chip ADC.
//!
//! The battery reaches the ADC pin through a resistor divider. Samples are
//! reported in 10-bit units, the scale the fan thresholds are written in.

use defmt::warn;
use embassy_rp::adc::{Adc, Async, Channel};
use vent_pico2::scaling::adc_to_units;

/// Battery voltage monitor.
pub struct Battery<'d> {
    adc: Adc<'d, Async>,
    channel: Channel<'d>,
    last_units: i32,
}

impl<'d> Battery<'d> {
    pub fn new(
        adc: Adc<'d, Async>,
        channel: Channel<'d>,
    ) -> Self {
        Self {
            adc,
            channel,
            last_units: 0,
        }
    }

    /// Current voltage in 10-bit units.
    ///
    /// A failed conversion repeats the previous sample (0 before the first
    /// success, which the clamp lifts to the domain floor).
    pub async fn read_units(&mut self) -> i32 {
        match self.adc.read(&mut self.channel).await {
            Ok(raw) => {
                self.last_units = adc_to_units(raw);
            }
            Err(_) => {
                warn!("Battery ADC conversion failed, reusing {}", self.last_units);
            }
        }
        self.last_units
    }
}
