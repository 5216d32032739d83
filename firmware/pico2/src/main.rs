//! Boat Ventilation Fan Firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Drives a cabin ventilation fan from temperature, humidity and battery
//! voltage, with one button to step the power mode.
//!
//! # Architecture
//!
//! - Main task: waits out the cycle period while polling the button, then
//!   acquires a reading, runs one controller cycle and sets the fan duty
//! - Indicator task: plays LED flash bursts posted by the main task, so the
//!   button keeps being polled while the LED flashes
//!
//! # Wiring
//!
//! | Signal        | Pin  | Peripheral          |
//! |---------------|------|---------------------|
//! | Fan MOSFET    | GP0  | PWM slice 0, A      |
//! | Indicator LED | GP2  | PWM slice 1, A      |
//! | Mode button   | GP14 | Input, pull-up      |
//! | DHT11 data    | GP15 | Flex, pull-up       |
//! | Battery sense | GP26 | ADC0 (via divider)  |
//!
//! # Features
//!
//! - `bench`: 60 s auto-resume, 5-sample buffer, CSV diagnostics over RTT
//! - `simulated-sensors`: replay a fixed script instead of reading hardware

#![no_std]
#![no_main]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod drivers;
mod feedback;
#[cfg(not(feature = "simulated-sensors"))]
mod sensors;

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::pwm::Pwm;
use embassy_time::{Duration, Instant, Timer};
use vent_common::button::ButtonState;
use vent_common::diagnostics::DIAGNOSTIC_HEADER;
use vent_common::indicator::{Feedback, INDICATOR_OFF, indicator_level};
use vent_common::sensors::acquire;
use vent_common::{CycleReport, PollWindow, SensorSource, VentConfig};
use vent_pico2::profile::{CONFIG, Controller, PROFILE_NAME, SAMPLES};
use {defmt_rtt as _, panic_probe as _};

use crate::drivers::PwmOutput;
use crate::feedback::{INDICATOR, IndicatorCommand, indicator_task};

#[cfg(not(feature = "simulated-sensors"))]
embassy_rp::bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => embassy_rp::adc::InterruptHandler;
});

/// Wait between attempts to get the first valid reading.
const STARTUP_RETRY: Duration = Duration::from_secs(2);

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"boat-vent"),
    embassy_rp::binary_info::rp_program_description!(c"Boat ventilation fan controller"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Ventilation controller starting ({} profile, {} samples)", PROFILE_NAME, SAMPLES);

    let p = embassy_rp::init(Default::default());

    // Outputs start at 0 % duty: fan stopped, LED dark
    let mut fan = PwmOutput::new(Pwm::new_output_a(p.PWM_SLICE0, p.PIN_0, PwmOutput::config()));
    let led = PwmOutput::new(Pwm::new_output_a(p.PWM_SLICE1, p.PIN_2, PwmOutput::config()));

    spawner.spawn(indicator_task(led)).unwrap();
    info!("Indicator task spawned");

    // Mode button (active-low with internal pull-up)
    let button = Input::new(p.PIN_14, Pull::Up);

    #[cfg(not(feature = "simulated-sensors"))]
    let mut sensors = {
        use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
        use embassy_rp::gpio::Flex;

        use crate::drivers::{Battery, Dht11};
        use crate::sensors::BoatSensors;

        let adc = Adc::new(p.ADC, Irqs, AdcConfig::default());
        let battery = Battery::new(adc, Channel::new_pin(p.PIN_26, Pull::None));
        BoatSensors::new(Dht11::new(Flex::new(p.PIN_15)), battery)
    };

    #[cfg(feature = "simulated-sensors")]
    let mut sensors = {
        info!("Using simulated sensor script");
        vent_common::ScriptedSensors::new(&vent_pico2::simulation::SIMULATED_SCRIPT)
    };

    let mut controller = seed(&mut sensors, CONFIG).await;
    fan.set(controller.last_duty());
    INDICATOR.signal(IndicatorCommand {
        feedback: Feedback::None,
        steady: indicator_level(controller.mode()),
    });
    info!("Controller ready, mode {}, fan duty {}", controller.mode().as_str(), controller.last_duty());

    if CONFIG.diagnostics {
        info!("{}", DIAGNOSTIC_HEADER);
    }

    let mut button_state = ButtonState::new();

    loop {
        let pressed = wait_for_cycle(&button, &mut button_state, &CONFIG).await;

        let now = Instant::now();
        let reading = acquire(&mut sensors).await;
        let report = controller.run_cycle(now, pressed, reading);

        fan.set(report.duty);
        INDICATOR.signal(IndicatorCommand {
            feedback: report.feedback,
            steady: report.indicator,
        });

        log_cycle(&report, now, &CONFIG);
    }
}

/// Retry acquisition until the sensors produce a valid reading, then build
/// the controller around it.
async fn seed<S: SensorSource>(
    sensors: &mut S,
    config: VentConfig,
) -> Controller {
    loop {
        match acquire(sensors).await {
            Ok(first) => {
                info!("First reading: {}", first);
                return Controller::new(config, first, Instant::now());
            }
            Err(err) => {
                warn!("Startup reading failed: {}", err);
                INDICATOR.signal(IndicatorCommand {
                    feedback: Feedback::SensorFault,
                    steady: INDICATOR_OFF,
                });
                Timer::after(STARTUP_RETRY).await;
            }
        }
    }
}

/// Sleep until the next cycle is due, polling the button every
/// `poll_interval`. Returns early with `true` on a press.
async fn wait_for_cycle(
    button: &Input<'_>,
    state: &mut ButtonState,
    config: &VentConfig,
) -> bool {
    let window = PollWindow::open(Instant::now(), config.cycle_period);

    loop {
        let now = Instant::now();
        if state.just_pressed(button.is_low(), now) {
            return true;
        }
        if !window.is_open(now) {
            return false;
        }
        Timer::after(window.next_sleep(now, config.poll_interval)).await;
    }
}

fn log_cycle(
    report: &CycleReport,
    now: Instant,
    config: &VentConfig,
) {
    if let Some(t) = report.transition {
        info!("Mode {} -> {} ({})", t.from.as_str(), t.to.as_str(), t.cause);
    }
    if let Some(err) = report.fault {
        warn!("Sensor read failed: {}, keeping fan at {}", err, report.duty);
    }
    if config.diagnostics {
        info!("{}", report.diagnostic_line(now.as_millis() as u32));
    }
}
