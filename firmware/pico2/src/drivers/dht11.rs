//! DHT11 single-wire driver.
//!
//! The host pulls the line low for at least 18 ms to request a measurement,
//! then releases it. The sensor answers with an 80 µs low / 80 µs high
//! preamble and 40 data bits. Bit timing is tens of microseconds, so the
//! frame is sampled by busy-waiting with interrupts masked; the whole frame
//! takes under 5 ms.

use cortex_m::interrupt;
use embassy_rp::gpio::{Flex, Pull};
use embassy_time::{Duration, Instant, Timer};
use vent_common::SensorError;
use vent_pico2::frame::{Dht11Frame, FRAME_BITS, FrameBuilder};

/// Host start pulse length.
const START_LOW: Duration = Duration::from_millis(20);

/// The sensor refuses to measure more often than this.
const MIN_READ_INTERVAL: Duration = Duration::from_secs(1);

/// Longest a single line phase may last before the read is abandoned.
const EDGE_TIMEOUT_US: u64 = 120;

/// DHT11 sensor on a bidirectional GPIO.
pub struct Dht11<'d> {
    pin: Flex<'d>,
    last_read: Option<Instant>,
}

impl<'d> Dht11<'d> {
    /// Take ownership of the data pin. The line idles high via the pull-up.
    pub fn new(mut pin: Flex<'d>) -> Self {
        pin.set_pull(Pull::Up);
        pin.set_as_input();
        Self {
            pin,
            last_read: None,
        }
    }

    /// Perform one measurement.
    pub async fn read(&mut self) -> Result<Dht11Frame, SensorError> {
        if let Some(last) = self.last_read
            && last.elapsed() < MIN_READ_INTERVAL
        {
            Timer::at(last + MIN_READ_INTERVAL).await;
        }
        self.last_read = Some(Instant::now());

        // Start signal
        self.pin.set_low();
        self.pin.set_as_output();
        Timer::after(START_LOW).await;
        self.pin.set_as_input();

        interrupt::free(|_| self.read_frame())
    }

    fn read_frame(&self) -> Result<Dht11Frame, SensorError> {
        // Pull-up takes the line high, then the sensor answers low 80 µs, high 80 µs
        self.wait_for(true)?;
        self.wait_for(false)?;
        self.wait_for(true)?;
        self.wait_for(false)?;

        let mut frame = FrameBuilder::new();
        for _ in 0..FRAME_BITS {
            // ~50 µs low separator, then the value-carrying high phase
            self.wait_for(true)?;
            let high_us = self.wait_for(false)?;
            frame.push_pulse(high_us);
        }
        frame.finish()
    }

    /// Spin until the line reaches `high`, returning the wait in µs.
    fn wait_for(
        &self,
        high: bool,
    ) -> Result<u32, SensorError> {
        let start = Instant::now();
        while self.pin.is_high() != high {
            if start.elapsed().as_micros() > EDGE_TIMEOUT_US {
                return Err(SensorError::Timeout);
            }
        }
        Ok(start.elapsed().as_micros() as u32)
    }
}
