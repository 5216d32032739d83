//! Button debounce handling for the mode button.
//!
//! Provides time-based edge detection with debouncing to prevent
//! multiple triggers from contact bounce. The caller passes the current
//! time, so the same logic runs on the device and in host tests.

use embassy_time::{Duration, Instant};

/// Debounce duration in milliseconds.
pub const DEBOUNCE_MS: u64 = 50;

/// Button debounce state with time-based edge detection.
#[derive(Clone, Copy, Debug)]
pub struct ButtonState {
    was_pressed: bool,
    last_change: Option<Instant>,
}

impl ButtonState {
    /// Create a new button state (not pressed).
    pub const fn new() -> Self {
        Self {
            was_pressed: false,
            last_change: None,
        }
    }

    /// Returns true only on the press edge.
    ///
    /// `is_pressed` is the raw level already translated to "pressed"
    /// (the button is wired active-low, so the firmware passes `is_low()`).
    /// Level changes within [`DEBOUNCE_MS`] of the previous accepted change
    /// are ignored.
    pub fn just_pressed(
        &mut self,
        is_pressed: bool,
        now: Instant,
    ) -> bool {
        if is_pressed != self.was_pressed {
            if let Some(last) = self.last_change
                && now.saturating_duration_since(last) < Duration::from_millis(DEBOUNCE_MS)
            {
                return false;
            }

            self.was_pressed = is_pressed;
            self.last_change = Some(now);

            return is_pressed;
        }

        false
    }
}

impl Default for ButtonState {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(t: u64) -> Instant { Instant::from_millis(t) }

    #[test]
    fn test_press_edge_fires_once() {
        let mut b = ButtonState::new();
        assert!(b.just_pressed(true, ms(0)));
        assert!(!b.just_pressed(true, ms(10)));
        assert!(!b.just_pressed(true, ms(500)));
    }

    #[test]
    fn test_release_does_not_fire() {
        let mut b = ButtonState::new();
        assert!(b.just_pressed(true, ms(0)));
        assert!(!b.just_pressed(false, ms(100)));
    }

    #[test]
    fn test_bounce_is_ignored() {
        let mut b = ButtonState::new();
        assert!(b.just_pressed(true, ms(0)));
        // Contact bounce inside the debounce window
        assert!(!b.just_pressed(false, ms(5)));
        assert!(!b.just_pressed(true, ms(10)));
        assert!(!b.just_pressed(false, ms(20)));
        // Real release and second press
        assert!(!b.just_pressed(false, ms(200)));
        assert!(b.just_pressed(true, ms(400)));
    }

    #[test]
    fn test_idle_never_fires() {
        let mut b = ButtonState::default();
        for t in (0..1000).step_by(50) {
            assert!(!b.just_pressed(false, ms(t)));
        }
    }
}
