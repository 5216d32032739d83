//! Hardware drivers for the ventilation controller.
//!
//! - `dht11`: Bit-banged DHT11 temperature/humidity sensor on a `Flex` pin
//! - `battery`: Battery voltage through the RP2350 ADC
//! - `outputs`: 8-bit PWM outputs for the fan and the indicator LED

// Sensor drivers are left out when the script replaces the hardware
#[cfg(not(feature = "simulated-sensors"))]
mod battery;
#[cfg(not(feature = "simulated-sensors"))]
mod dht11;
mod outputs;

#[cfg(not(feature = "simulated-sensors"))]
pub use battery::Battery;
#[cfg(not(feature = "simulated-sensors"))]
pub use dht11::Dht11;
pub use outputs::PwmOutput;
