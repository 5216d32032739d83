//! Sensor source abstraction.
//!
//! The controller never talks to hardware. Each cycle it gets one
//! [`Reading`] (or a [`SensorError`]) from [`acquire`], which pulls raw
//! values from a [`SensorSource`] and clamps them into the channel domains.
//!
//! Two sources exist: the firmware's DHT11 + ADC implementation and
//! [`ScriptedSensors`], a deterministic replay used by tests and by the
//! simulated-sensor firmware build.

use thiserror_no_std::Error;

use crate::channels::Reading;

/// A failed read from the temperature/humidity transducer.
///
/// Every variant is recovered the same way: the cycle keeps the stale
/// samples and shows the fault indication.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// The sensor did not answer or a bit edge never came.
    #[error("sensor timed out")]
    Timeout,
    /// The frame arrived but its checksum did not match.
    #[error("sensor checksum mismatch")]
    Checksum,
    /// Bus or pin level error reported by the driver.
    #[error("sensor bus error")]
    Bus,
}

/// Raw sensor acquisition.
///
/// Values are returned unclamped; [`acquire`] applies the domains.
/// `read_temperature` is always called first in an acquisition and may start
/// a new measurement; `read_humidity` returns the humidity of that same
/// measurement.
pub trait SensorSource {
    /// Temperature in whole °C.
    fn read_temperature(&mut self) -> impl Future<Output = Result<i32, SensorError>>;

    /// Relative humidity in whole %.
    fn read_humidity(&mut self) -> impl Future<Output = Result<i32, SensorError>>;

    /// Battery voltage in 10-bit ADC units. Cannot fail.
    fn read_voltage(&mut self) -> impl Future<Output = i32>;
}

/// Read every channel once and clamp the result.
pub async fn acquire<S: SensorSource>(source: &mut S) -> Result<Reading, SensorError> {
    let temperature = source.read_temperature().await?;
    let humidity = source.read_humidity().await?;
    let voltage = source.read_voltage().await;
    Ok(Reading::clamped(temperature, humidity, voltage))
}

// =============================================================================
// Scripted Source
// =============================================================================

/// Deterministic sensor source replaying a fixed script, wrapping at the end.
///
/// Each acquisition consumes one step: the step advances on
/// `read_temperature`, and the humidity and voltage reads return the values
/// of the current step.
#[derive(Clone, Debug)]
pub struct ScriptedSensors<'a> {
    script: &'a [Result<Reading, SensorError>],
    /// Index of the step returned by the last `read_temperature`.
    current: Option<usize>,
    acquisitions: u32,
}

impl<'a> ScriptedSensors<'a> {
    /// Replay `script` in order. An empty script behaves as a dead sensor.
    pub const fn new(script: &'a [Result<Reading, SensorError>]) -> Self {
        Self {
            script,
            current: None,
            acquisitions: 0,
        }
    }

    /// Number of acquisitions started so far.
    #[inline]
    pub const fn acquisitions(&self) -> u32 { self.acquisitions }

    fn step(&self) -> Result<Reading, SensorError> {
        match self.current {
            Some(idx) => self.script[idx],
            None => Err(SensorError::Timeout),
        }
    }
}

impl SensorSource for ScriptedSensors<'_> {
    async fn read_temperature(&mut self) -> Result<i32, SensorError> {
        if self.script.is_empty() {
            return Err(SensorError::Timeout);
        }
        let next = match self.current {
            Some(idx) => (idx + 1) % self.script.len(),
            None => 0,
        };
        self.current = Some(next);
        self.acquisitions = self.acquisitions.wrapping_add(1);
        self.step().map(|r| i32::from(r.temperature))
    }

    async fn read_humidity(&mut self) -> Result<i32, SensorError> { self.step().map(|r| i32::from(r.humidity)) }

    async fn read_voltage(&mut self) -> i32 {
        // Voltage is an ADC read and never fails, even when the DHT step does
        self.step().map_or(i32::from(crate::channels::VOLT_MIN), |r| i32::from(r.voltage))
    }
}

#[cfg(test)]
mod tests {
    use embassy_futures::block_on;

    use super::*;

    const A: Reading = Reading {
        temperature: 25,
        humidity: 60,
        voltage: 240,
    };
    const B: Reading = Reading {
        temperature: 31,
        humidity: 85,
        voltage: 215,
    };

    /// Source returning fixed raw values, to exercise clamping.
    struct Raw {
        temp: i32,
        humi: i32,
        volt: i32,
    }

    impl SensorSource for Raw {
        async fn read_temperature(&mut self) -> Result<i32, SensorError> { Ok(self.temp) }

        async fn read_humidity(&mut self) -> Result<i32, SensorError> { Ok(self.humi) }

        async fn read_voltage(&mut self) -> i32 { self.volt }
    }

    #[test]
    fn test_acquire_clamps_raw_values() {
        let mut raw = Raw {
            temp: -3,
            humi: 120,
            volt: 2000,
        };
        let reading = block_on(acquire(&mut raw)).unwrap();
        assert_eq!(
            reading,
            Reading {
                temperature: 0,
                humidity: 100,
                voltage: 1023
            }
        );
    }

    #[test]
    fn test_script_replays_in_order_and_wraps() {
        let script = [Ok(A), Ok(B)];
        let mut s = ScriptedSensors::new(&script);
        assert_eq!(block_on(acquire(&mut s)), Ok(A));
        assert_eq!(block_on(acquire(&mut s)), Ok(B));
        assert_eq!(block_on(acquire(&mut s)), Ok(A));
        assert_eq!(s.acquisitions(), 3);
    }

    #[test]
    fn test_script_error_step() {
        let script = [Ok(A), Err(SensorError::Checksum), Ok(B)];
        let mut s = ScriptedSensors::new(&script);
        assert!(block_on(acquire(&mut s)).is_ok());
        assert_eq!(block_on(acquire(&mut s)), Err(SensorError::Checksum));
        // A failed step still consumes its slot
        assert_eq!(block_on(acquire(&mut s)), Ok(B));
    }

    #[test]
    fn test_empty_script_is_dead_sensor() {
        let mut s = ScriptedSensors::new(&[]);
        assert_eq!(block_on(acquire(&mut s)), Err(SensorError::Timeout));
        assert_eq!(s.acquisitions(), 0);
    }

    #[test]
    fn test_voltage_available_on_failed_step() {
        let script = [Err(SensorError::Timeout)];
        let mut s = ScriptedSensors::new(&script);
        assert!(block_on(s.read_temperature()).is_err());
        assert_eq!(block_on(s.read_voltage()), i32::from(crate::channels::VOLT_MIN));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(SensorError::Timeout.to_string(), "sensor timed out");
        assert_eq!(SensorError::Checksum.to_string(), "sensor checksum mismatch");
    }
}
