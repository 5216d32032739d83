//! Sensor source backed by the boat hardware.

use vent_common::{SensorError, SensorSource};
use vent_pico2::frame::Dht11Frame;

use crate::drivers::{Battery, Dht11};

/// DHT11 for temperature and humidity, ADC for the battery.
///
/// One DHT11 transaction yields both values, so `read_temperature` performs
/// the measurement and `read_humidity` returns the humidity from that frame.
pub struct BoatSensors<'d> {
    dht: Dht11<'d>,
    battery: Battery<'d>,
    frame: Option<Dht11Frame>,
}

impl<'d> BoatSensors<'d> {
    pub fn new(
        dht: Dht11<'d>,
        battery: Battery<'d>,
    ) -> Self {
        Self {
            dht,
            battery,
            frame: None,
        }
    }
}

impl SensorSource for BoatSensors<'_> {
    async fn read_temperature(&mut self) -> Result<i32, SensorError> {
        self.frame = None;
        let frame = self.dht.read().await?;
        self.frame = Some(frame);
        Ok(frame.temperature)
    }

    async fn read_humidity(&mut self) -> Result<i32, SensorError> {
        self.frame.map(|f| f.humidity).ok_or(SensorError::Timeout)
    }

    async fn read_voltage(&mut self) -> i32 { self.battery.read_units().await }
}
