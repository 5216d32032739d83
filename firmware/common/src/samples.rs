//! Rolling sample buffer holding the last `N` readings of every channel.
//!
//! The buffer is always full: it is created from the first valid reading
//! replicated `N` times, and every later push overwrites the oldest slot of
//! all three channels at once. The write index is shared and wraps modulo `N`.

use crate::averaging::{Averages, trimmed_average};
use crate::channels::{Channel, Reading};

/// Fixed-capacity circular store of `N` readings per channel.
#[derive(Clone, Debug)]
pub struct SampleBuffer<const N: usize> {
    temperature: [u16; N],
    humidity: [u16; N],
    voltage: [u16; N],
    /// Next slot to overwrite.
    index: usize,
}

impl<const N: usize> SampleBuffer<N> {
    /// Trimming one min and one max needs at least one sample left over.
    const MIN_CAPACITY: () = assert!(N >= 3, "SampleBuffer needs at least 3 samples");

    /// Create a buffer pre-seeded with `first` in every slot.
    pub const fn seeded(first: Reading) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::MIN_CAPACITY;
        Self {
            temperature: [first.temperature; N],
            humidity: [first.humidity; N],
            voltage: [first.voltage; N],
            index: 0,
        }
    }

    /// Overwrite the oldest slot of every channel and advance the index.
    pub fn push(
        &mut self,
        reading: Reading,
    ) {
        self.temperature[self.index] = reading.temperature;
        self.humidity[self.index] = reading.humidity;
        self.voltage[self.index] = reading.voltage;
        self.index = (self.index + 1) % N;
    }

    /// All `N` current samples of one channel, in storage order.
    #[inline]
    pub const fn values(
        &self,
        channel: Channel,
    ) -> &[u16; N] {
        match channel {
            Channel::Temperature => &self.temperature,
            Channel::Humidity => &self.humidity,
            Channel::Voltage => &self.voltage,
        }
    }

    /// Slot the next push will overwrite.
    #[inline]
    pub const fn index(&self) -> usize { self.index }

    /// Number of samples per channel.
    #[inline]
    pub const fn capacity(&self) -> usize { N }

    /// Trimmed average of one channel.
    #[inline]
    pub fn average(
        &self,
        channel: Channel,
    ) -> u16 {
        trimmed_average(self.values(channel))
    }

    /// Trimmed averages of all channels.
    pub fn averages(&self) -> Averages {
        Averages {
            temperature: self.average(Channel::Temperature),
            humidity: self.average(Channel::Humidity),
            voltage: self.average(Channel::Voltage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: Reading = Reading {
        temperature: 20,
        humidity: 50,
        voltage: 240,
    };

    #[test]
    fn test_seeded_fills_every_slot() {
        let buf = SampleBuffer::<5>::seeded(SEED);
        assert_eq!(buf.values(Channel::Temperature), &[20; 5]);
        assert_eq!(buf.values(Channel::Humidity), &[50; 5]);
        assert_eq!(buf.values(Channel::Voltage), &[240; 5]);
        assert_eq!(buf.index(), 0);
        assert_eq!(buf.capacity(), 5);
    }

    #[test]
    fn test_push_overwrites_all_channels_together() {
        let mut buf = SampleBuffer::<5>::seeded(SEED);
        buf.push(Reading { temperature: 30, humidity: 80, voltage: 250 });
        assert_eq!(buf.values(Channel::Temperature)[0], 30);
        assert_eq!(buf.values(Channel::Humidity)[0], 80);
        assert_eq!(buf.values(Channel::Voltage)[0], 250);
        assert_eq!(buf.index(), 1);
    }

    #[test]
    fn test_index_wraps() {
        let mut buf = SampleBuffer::<5>::seeded(SEED);
        for t in 0..5 {
            buf.push(Reading { temperature: t, ..SEED });
        }
        assert_eq!(buf.index(), 0);
        assert_eq!(buf.values(Channel::Temperature), &[0, 1, 2, 3, 4]);

        // Sixth push overwrites the oldest slot
        buf.push(Reading { temperature: 9, ..SEED });
        assert_eq!(buf.index(), 1);
        assert_eq!(buf.values(Channel::Temperature), &[9, 1, 2, 3, 4]);
    }

    #[test]
    fn test_ten_slot_buffer() {
        let mut buf = SampleBuffer::<10>::seeded(SEED);
        for _ in 0..13 {
            buf.push(SEED);
        }
        assert_eq!(buf.index(), 3);
        assert_eq!(buf.values(Channel::Voltage).len(), 10);
    }

    #[test]
    fn test_averages_of_seeded_buffer() {
        let buf = SampleBuffer::<10>::seeded(SEED);
        let avg = buf.averages();
        assert_eq!(avg.temperature, 20);
        assert_eq!(avg.humidity, 50);
        assert_eq!(avg.voltage, 240);
    }

    #[test]
    fn test_average_rejects_single_spike() {
        let mut buf = SampleBuffer::<5>::seeded(SEED);
        for t in [20, 22, 21, 23, 100] {
            buf.push(Reading { temperature: t, ..SEED });
        }
        assert_eq!(buf.average(Channel::Temperature), 22);
    }
}
