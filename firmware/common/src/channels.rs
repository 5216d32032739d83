//! Sensor channels and their value domains.
//!
//! One [`Reading`] is produced per acquisition and always covers all three
//! channels. Values are clamped into each channel's domain by the acquisition
//! layer ([`Reading::clamped`]); the averaging and decision code never checks
//! ranges again.

/// Temperature domain in whole °C.
pub const TEMP_MIN: u16 = 0;
pub const TEMP_MAX: u16 = 40;

/// Relative humidity domain in whole %.
pub const HUMI_MIN: u16 = 0;
pub const HUMI_MAX: u16 = 100;

/// Battery voltage domain in 10-bit ADC units.
///
/// The floor of 100 keeps a disconnected divider (reading near 0) from
/// dragging the trimmed mean far below the shutoff threshold in one sample.
pub const VOLT_MIN: u16 = 100;
pub const VOLT_MAX: u16 = 1023;

const _: () = assert!(TEMP_MIN < TEMP_MAX);
const _: () = assert!(HUMI_MIN < HUMI_MAX);
const _: () = assert!(VOLT_MIN < VOLT_MAX);

/// One of the three sampled quantities.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    Temperature,
    Humidity,
    Voltage,
}

impl Channel {
    /// All channels in storage order.
    pub const ALL: [Self; 3] = [Self::Temperature, Self::Humidity, Self::Voltage];

    /// Inclusive `(min, max)` domain of this channel.
    #[inline]
    pub const fn domain(self) -> (u16, u16) {
        match self {
            Self::Temperature => (TEMP_MIN, TEMP_MAX),
            Self::Humidity => (HUMI_MIN, HUMI_MAX),
            Self::Voltage => (VOLT_MIN, VOLT_MAX),
        }
    }

    /// Clamp a raw signed value into this channel's domain.
    #[inline]
    pub fn clamp(
        self,
        raw: i32,
    ) -> u16 {
        let (min, max) = self.domain();
        raw.clamp(i32::from(min), i32::from(max)) as u16
    }
}

/// One acquisition event covering every channel.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    /// Whole °C.
    pub temperature: u16,
    /// Whole % relative humidity.
    pub humidity: u16,
    /// 10-bit ADC units.
    pub voltage: u16,
}

impl Reading {
    /// Build a reading from raw values, clamping each into its domain.
    pub fn clamped(
        temperature: i32,
        humidity: i32,
        voltage: i32,
    ) -> Self {
        Self {
            temperature: Channel::Temperature.clamp(temperature),
            humidity: Channel::Humidity.clamp(humidity),
            voltage: Channel::Voltage.clamp(voltage),
        }
    }

    /// Value of a single channel.
    #[inline]
    pub const fn get(
        &self,
        channel: Channel,
    ) -> u16 {
        match channel {
            Channel::Temperature => self.temperature,
            Channel::Humidity => self.humidity,
            Channel::Voltage => self.voltage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_temperature() {
        assert_eq!(Channel::Temperature.clamp(-5), 0);
        assert_eq!(Channel::Temperature.clamp(25), 25);
        assert_eq!(Channel::Temperature.clamp(55), 40);
    }

    #[test]
    fn test_clamp_humidity() {
        assert_eq!(Channel::Humidity.clamp(-1), 0);
        assert_eq!(Channel::Humidity.clamp(100), 100);
        assert_eq!(Channel::Humidity.clamp(140), 100);
    }

    #[test]
    fn test_clamp_voltage_floor() {
        assert_eq!(Channel::Voltage.clamp(0), VOLT_MIN);
        assert_eq!(Channel::Voltage.clamp(230), 230);
        assert_eq!(Channel::Voltage.clamp(4095), VOLT_MAX);
    }

    #[test]
    fn test_reading_clamped() {
        let r = Reading::clamped(45, 101, 50);
        assert_eq!(r, Reading { temperature: 40, humidity: 100, voltage: 100 });
    }

    #[test]
    fn test_reading_get() {
        let r = Reading { temperature: 21, humidity: 60, voltage: 240 };
        assert_eq!(r.get(Channel::Temperature), 21);
        assert_eq!(r.get(Channel::Humidity), 60);
        assert_eq!(r.get(Channel::Voltage), 240);
    }
}
