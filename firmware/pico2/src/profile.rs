//! Build profile selection.
//!
//! The `bench` feature swaps the production profile for the bench-testing
//! one. Everything downstream reads [`CONFIG`] and [`SAMPLES`]; no other code
//! branches on the feature.

use vent_common::VentConfig;
use vent_common::config;

/// Active controller configuration.
#[cfg(not(feature = "bench"))]
pub const CONFIG: VentConfig = VentConfig::PRODUCTION;

/// Active controller configuration.
#[cfg(feature = "bench")]
pub const CONFIG: VentConfig = VentConfig::BENCH;

/// Samples per channel in the rolling buffer.
#[cfg(not(feature = "bench"))]
pub const SAMPLES: usize = config::PRODUCTION_SAMPLES;

/// Samples per channel in the rolling buffer.
#[cfg(feature = "bench")]
pub const SAMPLES: usize = config::BENCH_SAMPLES;

/// Controller type for this build.
pub type Controller = vent_common::VentController<SAMPLES>;

/// Short profile name for the boot log.
pub const PROFILE_NAME: &str = if cfg!(feature = "bench") { "bench" } else { "production" };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(feature = "bench"))]
    fn test_default_build_is_production() {
        assert_eq!(CONFIG, VentConfig::PRODUCTION);
        assert_eq!(SAMPLES, 10);
        assert!(!CONFIG.diagnostics);
        assert_eq!(PROFILE_NAME, "production");
    }

    #[test]
    #[cfg(feature = "bench")]
    fn test_bench_build() {
        assert_eq!(CONFIG, VentConfig::BENCH);
        assert_eq!(SAMPLES, 5);
        assert!(CONFIG.diagnostics);
        assert_eq!(PROFILE_NAME, "bench");
    }
}
