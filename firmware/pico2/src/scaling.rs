//! Battery ADC scaling.
//!
//! The RP2350 ADC returns 12-bit samples. The fan thresholds are expressed in
//! 10-bit units, so samples are shifted down by two bits before use.

/// Full-scale 12-bit ADC sample.
pub const ADC_MAX_12BIT: u16 = 0x0FFF;

/// Convert a raw 12-bit ADC sample into 10-bit voltage units.
///
/// Out-of-range input (a corrupted sample above 12 bits) saturates at the
/// 10-bit maximum.
#[inline]
pub fn adc_to_units(raw: u16) -> i32 { i32::from(raw.min(ADC_MAX_12BIT) >> 2) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_scale() {
        assert_eq!(adc_to_units(ADC_MAX_12BIT), 1023);
    }

    #[test]
    fn test_zero() {
        assert_eq!(adc_to_units(0), 0);
    }

    #[test]
    fn test_threshold_mapping() {
        // 12-bit 888..891 all land on the low-voltage threshold
        assert_eq!(adc_to_units(888), 222);
        assert_eq!(adc_to_units(891), 222);
        assert_eq!(adc_to_units(920), 230);
    }

    #[test]
    fn test_oversized_sample_saturates() {
        assert_eq!(adc_to_units(u16::MAX), 1023);
    }
}
