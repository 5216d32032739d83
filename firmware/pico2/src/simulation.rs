//! Sensor script for the `simulated-sensors` build.
//!
//! A cabin warming up through the afternoon: temperature and humidity climb
//! past both triggers, the battery sags under load (one sample dips below the
//! low-voltage threshold) and recovers, and one DHT11 read fails its checksum.
//! The script wraps, so the device keeps cycling through it.

use vent_common::{Reading, SensorError};

const fn r(
    temperature: u16,
    humidity: u16,
    voltage: u16,
) -> Result<Reading, SensorError> {
    Ok(Reading {
        temperature,
        humidity,
        voltage,
    })
}

/// Replayed one step per acquisition, first step seeds the buffer.
pub static SIMULATED_SCRIPT: [Result<Reading, SensorError>; 14] = [
    r(22, 55, 240),
    r(24, 58, 240),
    r(27, 62, 238),
    r(30, 66, 236),
    r(32, 72, 235),
    Err(SensorError::Checksum),
    r(33, 78, 234),
    r(34, 82, 236),
    r(35, 85, 235),
    r(35, 88, 229),
    r(34, 86, 226),
    r(31, 80, 219),
    r(28, 74, 231),
    r(25, 66, 238),
];
