//! Outlier-trimmed averaging.
//!
//! The sensors report low-resolution integers and now and then a single
//! misread. Dropping exactly one minimum and one maximum sample before taking
//! the mean rejects that one bad value without a full median.
//!
//! ```text
//! avg = round((sum - max - min) / (N - 2))
//! ```
//!
//! Division is done in floating point and rounded half away from zero. Only
//! one instance of each extreme is removed even if it appears several times.

use micromath::F32;

/// Trimmed averages of all three channels for one cycle.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Averages {
    pub temperature: u16,
    pub humidity: u16,
    pub voltage: u16,
}

/// Mean of `samples` after removing one minimum and one maximum instance.
///
/// `samples` must hold at least 3 values; [`crate::samples::SampleBuffer`]
/// guarantees this at compile time. Shorter slices fall back to a plain mean
/// (or 0 when empty) so the function stays total.
pub fn trimmed_average(samples: &[u16]) -> u16 {
    let Some(&first) = samples.first() else {
        return 0;
    };

    let mut sum = 0u32;
    let mut min = first;
    let mut max = first;
    for &value in samples {
        sum += u32::from(value);
        if value < min {
            min = value;
        }
        if value > max {
            max = value;
        }
    }

    let (kept_sum, kept_count) = if samples.len() >= 3 {
        (sum - u32::from(min) - u32::from(max), samples.len() - 2)
    } else {
        (sum, samples.len())
    };

    F32(kept_sum as f32 / kept_count as f32).round().0 as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spike_is_dropped() {
        // max=100 and min=20 dropped -> (22 + 21 + 23) / 3 = 22
        assert_eq!(trimmed_average(&[20, 22, 21, 23, 100]), 22);
    }

    #[test]
    fn test_equal_samples_return_value() {
        assert_eq!(trimmed_average(&[17; 5]), 17);
        assert_eq!(trimmed_average(&[233; 10]), 233);
        assert_eq!(trimmed_average(&[0; 3]), 0);
    }

    #[test]
    fn test_only_one_extreme_instance_removed() {
        // Two 10s and two 50s: one of each is dropped -> (10 + 30 + 50) / 3 = 30
        assert_eq!(trimmed_average(&[10, 10, 30, 50, 50]), 30);
        // Duplicated minimum still contributes once
        assert_eq!(trimmed_average(&[5, 5, 5, 5, 20]), 5);
    }

    #[test]
    fn test_order_independent() {
        let orders: [[u16; 5]; 4] = [
            [1, 7, 3, 9, 4],
            [9, 4, 1, 3, 7],
            [3, 1, 9, 7, 4],
            [4, 9, 7, 1, 3],
        ];
        for samples in &orders {
            // (7 + 3 + 4) / 3 = 4.67 -> 5
            assert_eq!(trimmed_average(samples), 5);
        }
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        // (20 + 21 + 20 + 21 ... ) kept sum 164 / 8 = 20.5 -> 21
        let samples = [10, 20, 21, 20, 21, 20, 21, 20, 21, 40];
        assert_eq!(trimmed_average(&samples), 21);
        // kept 1 + 1 + 2 = 4 / 3 = 1.33 -> 1
        assert_eq!(trimmed_average(&[0, 1, 1, 2, 9]), 1);
    }

    #[test]
    fn test_ten_samples_divide_by_eight() {
        let samples = [230, 231, 229, 232, 228, 230, 231, 229, 100, 500];
        // kept sum = 1840, / 8 = 230
        assert_eq!(trimmed_average(&samples), 230);
    }

    #[test]
    fn test_short_slices_stay_total() {
        assert_eq!(trimmed_average(&[]), 0);
        assert_eq!(trimmed_average(&[7]), 7);
        assert_eq!(trimmed_average(&[4, 7]), 6);
    }

    #[test]
    fn test_result_within_sample_range() {
        let samples = [12, 40, 0, 33, 27, 19, 8];
        let avg = trimmed_average(&samples);
        assert!(avg >= 8 && avg <= 33);
    }
}
