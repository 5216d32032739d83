//! 8-bit PWM outputs.
//!
//! Both the fan MOSFET and the indicator LED take a duty in 0..=255. The
//! slice counter wraps at 255 so the duty maps onto the compare register
//! directly. At the default 150 MHz system clock, a divider of 23 gives
//! roughly 25 kHz, above the audible range for the fan motor.

use embassy_rp::pwm::{Config, Pwm};

/// Clock divider applied to every output slice.
const PWM_DIVIDER: u8 = 23;

/// Counter wrap value; one count per duty step.
const PWM_TOP: u16 = u8::MAX as u16;

/// PWM channel A of one slice, driven with an 8-bit duty.
pub struct PwmOutput<'d> {
    pwm: Pwm<'d>,
    config: Config,
    duty: u8,
}

impl<'d> PwmOutput<'d> {
    /// Slice configuration for an 8-bit output starting at 0 % duty.
    pub fn config() -> Config {
        let mut config = Config::default();
        config.top = PWM_TOP;
        config.compare_a = 0;
        config.divider = PWM_DIVIDER.into();
        config
    }

    /// Wrap a slice created with [`Self::config`].
    pub fn new(pwm: Pwm<'d>) -> Self {
        Self {
            pwm,
            config: Self::config(),
            duty: 0,
        }
    }

    /// Apply a new duty. Writes only when it changed.
    pub fn set(
        &mut self,
        duty: u8,
    ) {
        if duty == self.duty {
            return;
        }
        self.duty = duty;
        self.config.compare_a = u16::from(duty);
        self.pwm.set_config(&self.config);
    }
}
