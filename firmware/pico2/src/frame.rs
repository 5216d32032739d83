//! DHT11 frame decoding.
//!
//! The sensor answers a start pulse with 40 bits, MSB first:
//!
//! | Byte | Content                           |
//! |------|-----------------------------------|
//! | 0    | Humidity, integral %              |
//! | 1    | Humidity, decimal (always 0)      |
//! | 2    | Temperature, integral °C          |
//! | 3    | Temperature, decimal; bit 7 = sign |
//! | 4    | Checksum: low byte of bytes 0..4  |
//!
//! Each bit is a ~50 µs low phase followed by a high phase whose length
//! carries the value: ~26 µs for `0`, ~70 µs for `1`.

use vent_common::SensorError;

/// Number of data bits in one frame.
pub const FRAME_BITS: usize = 40;

/// High phases longer than this are decoded as `1`.
pub const ONE_THRESHOLD_US: u32 = 48;

/// A checksum-verified DHT11 measurement in whole units.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Dht11Frame {
    /// Temperature in °C.
    pub temperature: i32,
    /// Relative humidity in %.
    pub humidity: i32,
}

impl Dht11Frame {
    /// Validate the checksum and extract the integral readings.
    pub fn decode(bytes: [u8; 5]) -> Result<Self, SensorError> {
        let sum = bytes[..4].iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
        if sum != bytes[4] {
            return Err(SensorError::Checksum);
        }

        let magnitude = i32::from(bytes[2]);
        let temperature = if bytes[3] & 0x80 != 0 { -magnitude } else { magnitude };

        Ok(Self {
            temperature,
            humidity: i32::from(bytes[0]),
        })
    }
}

/// Accumulates bits into the five frame bytes, MSB first.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameBuilder {
    bytes: [u8; 5],
    bits: usize,
}

impl FrameBuilder {
    pub const fn new() -> Self {
        Self {
            bytes: [0; 5],
            bits: 0,
        }
    }

    /// Record one bit from the length of its high phase.
    pub fn push_pulse(
        &mut self,
        high_us: u32,
    ) {
        if self.bits >= FRAME_BITS {
            return;
        }
        let byte = self.bits / 8;
        self.bytes[byte] <<= 1;
        if high_us > ONE_THRESHOLD_US {
            self.bytes[byte] |= 1;
        }
        self.bits += 1;
    }

    #[inline]
    pub const fn is_complete(&self) -> bool { self.bits == FRAME_BITS }

    /// Decode the collected bits. Fails with `Timeout` on a short frame.
    pub fn finish(self) -> Result<Dht11Frame, SensorError> {
        if !self.is_complete() {
            return Err(SensorError::Timeout);
        }
        Dht11Frame::decode(self.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_checksum(b: [u8; 4]) -> [u8; 5] {
        let sum = b.iter().fold(0u8, |acc, x| acc.wrapping_add(*x));
        [b[0], b[1], b[2], b[3], sum]
    }

    #[test]
    fn test_decode_valid_frame() {
        let frame = Dht11Frame::decode(with_checksum([64, 0, 29, 3])).unwrap();
        assert_eq!(frame.temperature, 29);
        assert_eq!(frame.humidity, 64);
    }

    #[test]
    fn test_decode_checksum_mismatch() {
        let mut bytes = with_checksum([64, 0, 29, 0]);
        bytes[4] ^= 1;
        assert_eq!(Dht11Frame::decode(bytes), Err(SensorError::Checksum));
    }

    #[test]
    fn test_checksum_wraps() {
        let frame = Dht11Frame::decode(with_checksum([200, 0, 100, 0])).unwrap();
        assert_eq!(frame.humidity, 200);
    }

    #[test]
    fn test_negative_temperature_flag() {
        let frame = Dht11Frame::decode(with_checksum([40, 0, 5, 0x81])).unwrap();
        assert_eq!(frame.temperature, -5);
    }

    #[test]
    fn test_builder_assembles_msb_first() {
        let bytes = with_checksum([0b1000_0001, 0, 25, 0]);
        let mut builder = FrameBuilder::new();
        for byte in bytes {
            for bit in (0..8).rev() {
                builder.push_pulse(if (byte >> bit) & 1 == 1 { 70 } else { 26 });
            }
        }
        assert!(builder.is_complete());
        let frame = builder.finish().unwrap();
        assert_eq!(frame.humidity, 129);
        assert_eq!(frame.temperature, 25);
    }

    #[test]
    fn test_short_frame_is_timeout() {
        let mut builder = FrameBuilder::new();
        for _ in 0..39 {
            builder.push_pulse(26);
        }
        assert_eq!(builder.finish(), Err(SensorError::Timeout));
    }

    #[test]
    fn test_extra_pulses_ignored() {
        let mut builder = FrameBuilder::new();
        for _ in 0..45 {
            builder.push_pulse(26);
        }
        // All zeros with a zero checksum is a valid frame
        assert_eq!(
            builder.finish(),
            Ok(Dht11Frame {
                temperature: 0,
                humidity: 0
            })
        );
    }
}
