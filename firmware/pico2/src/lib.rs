//! Ventilation firmware library - testable modules for the Pico 2 build.
//!
//! This library holds the firmware pieces that do not touch peripherals:
//! DHT11 frame decoding, ADC scaling, build profile selection and the
//! simulated sensor script. The binary (`main.rs`) adds the drivers and the
//! cycle loop on top.
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p vent-pico2 --lib --target x86_64-unknown-linux-gnu  # Linux/macOS
//! cargo test -p vent-pico2 --lib --target x86_64-pc-windows-msvc    # Windows
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// === Pure logic modules (testable on host, no ARM dependencies) ===

pub mod frame;
pub mod profile;
pub mod scaling;
pub mod simulation;
