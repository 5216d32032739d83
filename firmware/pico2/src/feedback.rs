//! Indicator LED sequencing.
//!
//! Flash bursts take longer than a button poll, so they run in their own
//! task. The cycle loop posts an [`IndicatorCommand`] after every cycle and
//! keeps polling; a command posted while a burst is playing replaces any
//! pending one and is shown once the burst ends.

use defmt::debug;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::Timer;
use vent_common::indicator::{FLASH_OFF, FLASH_ON, Feedback, INDICATOR_BRIGHT, INDICATOR_OFF};

use crate::drivers::PwmOutput;

/// What the LED should show after one cycle.
#[derive(Clone, Copy, Debug)]
pub struct IndicatorCommand {
    pub feedback: Feedback,
    /// Level to rest at once the burst is over.
    pub steady: u8,
}

/// Latest command for the indicator task.
pub static INDICATOR: Signal<CriticalSectionRawMutex, IndicatorCommand> = Signal::new();

/// Owns the indicator LED and plays commands as they arrive.
#[embassy_executor::task]
pub async fn indicator_task(mut led: PwmOutput<'static>) -> ! {
    debug!("Indicator task started");

    loop {
        let command = INDICATOR.wait().await;
        play(&mut led, command).await;
    }
}

async fn play(
    led: &mut PwmOutput<'static>,
    command: IndicatorCommand,
) {
    for _ in 0..command.feedback.flashes() {
        led.set(INDICATOR_BRIGHT);
        Timer::after(FLASH_ON).await;
        led.set(INDICATOR_OFF);
        Timer::after(FLASH_OFF).await;
    }

    let level = match command.feedback {
        Feedback::ModeChange { level } => level,
        Feedback::None | Feedback::SensorFault => command.steady,
    };
    led.set(level);
}
