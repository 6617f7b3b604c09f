// LED Pin Driver - Hardware-Implementierungen der Core-Traits
//
// Verbindet die blink-core Traits mit esp-hal GPIO und Delay.
// Die Mock-Gegenstücke für Tests liegen in blink-tests.

use blink_core::{DelayProvider, LedPinDriver, PinDirection, PinError, PinLevel};
use esp_hal::delay::Delay;
use esp_hal::gpio::{Flex, Pull};

/// Real Hardware LED Pin
///
/// Nutzt einen Flex-GPIO, damit die Richtung zur Laufzeit über
/// `set_direction()` konfiguriert werden kann statt fest beim
/// Konstruieren des Pins.
pub struct GpioLedPin<'a> {
    pin: Flex<'a>,
}

impl<'a> GpioLedPin<'a> {
    /// Erstellt einen neuen GpioLedPin
    ///
    /// # Parameter
    /// - `pin`: Flex-GPIO für die LED-Datenleitung (z.B. GPIO8)
    pub fn new(pin: Flex<'a>) -> Self {
        Self { pin }
    }
}

impl LedPinDriver for GpioLedPin<'_> {
    fn set_direction(&mut self, direction: PinDirection) -> Result<(), PinError> {
        // Register-Schreibzugriffe auf GPIO können auf dieser Hardware
        // nicht fehlschlagen; das Result gehört zum Trait-Seam
        match direction {
            PinDirection::Output => self.pin.set_as_output(),
            PinDirection::Input => self.pin.set_as_input(Pull::None),
        }
        Ok(())
    }

    fn set_level(&mut self, level: PinLevel) -> Result<(), PinError> {
        if level.is_high() {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
        Ok(())
    }
}

/// Blockierender Delay über das esp-hal Delay-Peripheral
///
/// Belegt den einzigen Thread für die gesamte Wartezeit - es gibt
/// in dieser Firmware keine andere Arbeit, die währenddessen laufen
/// müsste.
pub struct HalDelay {
    delay: Delay,
}

impl HalDelay {
    /// Erstellt einen neuen HalDelay
    pub fn new() -> Self {
        Self {
            delay: Delay::new(),
        }
    }
}

impl Default for HalDelay {
    fn default() -> Self {
        Self::new()
    }
}

impl DelayProvider for HalDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_millis(ms);
    }
}
