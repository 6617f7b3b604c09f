// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul implementiert die blink-core Traits auf echter Hardware,
// um Testbarkeit und Wartbarkeit zu verbessern.

pub mod led_pin;

pub use led_pin::{GpioLedPin, HalDelay};
