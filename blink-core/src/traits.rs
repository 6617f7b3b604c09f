//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use crate::types::{PinDirection, PinLevel};

/// Fehler-Typ für Pin-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinError {
    WriteFailed,
}

/// Trait für den Zugriff auf die LED-Leitung
///
/// Abstrahiert die beiden Register-Operationen eines GPIO-Pins:
/// Richtung setzen und Pegel setzen.
///
/// # Implementierungen
/// - **Production:** GpioLedPin (esp-hal Flex GPIO)
/// - **Testing:** MockLedPin (in-memory Mock)
pub trait LedPinDriver: Send {
    /// Konfiguriert die Richtung der Leitung
    ///
    /// # Fehlerbehandlung
    /// Gibt `PinError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn set_direction(&mut self, direction: PinDirection) -> Result<(), PinError>;

    /// Setzt den Logik-Pegel der Leitung
    ///
    /// # Fehlerbehandlung
    /// Gibt `PinError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn set_level(&mut self, level: PinLevel) -> Result<(), PinError>;
}

/// Trait für blockierende Delays
///
/// Das Warten belegt den einzigen Ausführungs-Thread für die gesamte
/// Dauer. In Tests läuft stattdessen eine virtuelle Uhr, damit keine
/// echte Zeit vergeht.
///
/// # Implementierungen
/// - **Production:** HalDelay (esp-hal Delay, busy-wait)
/// - **Testing:** FakeClockDelay (virtuelle Uhr)
pub trait DelayProvider: Send {
    /// Wartet blockierend für `ms` Millisekunden
    fn delay_ms(&mut self, ms: u32);
}
