//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use crate::types::PinLevel;

/// Kippt einen Logik-Pegel: Low → High → Low
///
/// Das ist die komplette Zustandsmaschine des Blinkers:
/// zwei Zustände, zwei Übergänge, kein Endzustand.
///
/// # Beispiele
///
/// ```
/// # use blink_core::{PinLevel, toggle_level};
/// let mut level = PinLevel::Low;
/// level = toggle_level(level);
/// assert_eq!(level, PinLevel::High);
/// ```
pub fn toggle_level(level: PinLevel) -> PinLevel {
    match level {
        PinLevel::Low => PinLevel::High,
        PinLevel::High => PinLevel::Low,
    }
}
