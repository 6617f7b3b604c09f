//! Blinker - Testbare Blink-Logik ohne Hardware-Abhängigkeit

use crate::traits::{DelayProvider, LedPinDriver, PinError};
use crate::types::{PinDirection, PinLevel};

/// Blinker - treibt eine LED-Leitung durch einen festen An/Aus-Zyklus
///
/// Enthält die komplette Steuerungs-Logik:
/// - Konfiguriert die Leitung einmalig als Ausgang
/// - Setzt den Pegel auf High, wartet, setzt auf Low, wartet
/// - Beide Phasen sind gleich lang (50% Duty Cycle)
///
/// # Trait-basierte Abstraktion
/// Die generischen Parameter `P: LedPinDriver` und `D: DelayProvider`
/// ermöglichen:
/// - Real Hardware (GpioLedPin + HalDelay) im Production-Code
/// - Mock Implementation (MockLedPin + FakeClockDelay) in Tests
pub struct Blinker<P: LedPinDriver, D: DelayProvider> {
    pin: P,
    delay: D,
    half_period_ms: u32,
}

impl<P: LedPinDriver, D: DelayProvider> Blinker<P, D> {
    /// Erstellt einen neuen Blinker
    ///
    /// # Parameter
    /// - `pin`: Pin-Driver (Hardware oder Mock)
    /// - `delay`: Delay-Provider (Hardware oder virtuelle Uhr)
    /// - `half_period_ms`: Dauer EINER Phase (An bzw. Aus) in Millisekunden
    pub fn new(pin: P, delay: D, half_period_ms: u32) -> Self {
        Self {
            pin,
            delay,
            half_period_ms,
        }
    }

    /// Konfiguriert die LED-Leitung als Ausgang
    ///
    /// Muss genau einmal vor dem ersten `run_cycle()` aufgerufen werden.
    /// Der Pegel nach dem Aufruf ist Hardware-Default (Konvention: Low),
    /// die Richtung ist garantiert `Output`.
    pub fn initialize(&mut self) -> Result<(), PinError> {
        self.pin.set_direction(PinDirection::Output)
    }

    /// Führt genau einen vollen Blink-Zyklus aus
    ///
    /// Ablauf: High → warten → Low → warten.
    /// Jeder Aufruf erzeugt dieselbe Sequenz, unabhängig davon wie oft
    /// vorher schon geblinkt wurde.
    pub fn run_cycle(&mut self) -> Result<(), PinError> {
        self.pin.set_level(PinLevel::High)?;
        self.delay.delay_ms(self.half_period_ms);

        self.pin.set_level(PinLevel::Low)?;
        self.delay.delay_ms(self.half_period_ms);

        Ok(())
    }

    /// Führt eine feste Anzahl Blink-Zyklen aus
    ///
    /// Caller-kontrollierte Schleife mit explizitem Ende (für Tests und
    /// Demos). Der Production-Code blinkt stattdessen endlos, siehe
    /// blink-firmware main.
    pub fn run(&mut self, cycles: u32) -> Result<(), PinError> {
        for _ in 0..cycles {
            self.run_cycle()?;
        }
        Ok(())
    }

    /// Zerlegt den Blinker wieder in Pin und Delay
    ///
    /// Tests holen sich darüber den Mock zurück um Aufzeichnungen zu prüfen.
    pub fn into_parts(self) -> (P, D) {
        (self.pin, self.delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Kleiner Mock ohne Heap: zeichnet Pegel-Wechsel in ein Array auf
    struct ArrayMockPin {
        direction: Option<PinDirection>,
        levels: [Option<PinLevel>; 8],
        set_count: usize,
    }

    impl ArrayMockPin {
        fn new() -> Self {
            Self {
                direction: None,
                levels: [None; 8],
                set_count: 0,
            }
        }
    }

    impl LedPinDriver for ArrayMockPin {
        fn set_direction(&mut self, direction: PinDirection) -> Result<(), PinError> {
            self.direction = Some(direction);
            Ok(())
        }

        fn set_level(&mut self, level: PinLevel) -> Result<(), PinError> {
            if self.set_count < self.levels.len() {
                self.levels[self.set_count] = Some(level);
            }
            self.set_count += 1;
            Ok(())
        }
    }

    // Delay-Mock: zählt Aufrufe und summiert die Wartezeit
    struct CountingDelay {
        calls: usize,
        total_ms: u64,
    }

    impl CountingDelay {
        fn new() -> Self {
            Self {
                calls: 0,
                total_ms: 0,
            }
        }
    }

    impl DelayProvider for CountingDelay {
        fn delay_ms(&mut self, ms: u32) {
            self.calls += 1;
            self.total_ms += u64::from(ms);
        }
    }

    #[test]
    fn test_initialize_sets_direction_output() {
        let mut blinker = Blinker::new(ArrayMockPin::new(), CountingDelay::new(), 1000);
        blinker.initialize().unwrap();

        let (pin, _delay) = blinker.into_parts();
        assert_eq!(pin.direction, Some(PinDirection::Output));
        // initialize() schreibt keinen Pegel
        assert_eq!(pin.set_count, 0);
    }

    #[test]
    fn test_run_cycle_sequence_high_then_low() {
        let mut blinker = Blinker::new(ArrayMockPin::new(), CountingDelay::new(), 1000);
        blinker.initialize().unwrap();
        blinker.run_cycle().unwrap();

        let (pin, delay) = blinker.into_parts();
        assert_eq!(pin.set_count, 2);
        assert_eq!(pin.levels[0], Some(PinLevel::High));
        assert_eq!(pin.levels[1], Some(PinLevel::Low));
        // Zwei Wartephasen, je 1000 ms
        assert_eq!(delay.calls, 2);
        assert_eq!(delay.total_ms, 2000);
    }

    #[test]
    fn test_run_counts_cycles() {
        let mut blinker = Blinker::new(ArrayMockPin::new(), CountingDelay::new(), 500);
        blinker.initialize().unwrap();
        blinker.run(3).unwrap();

        let (pin, delay) = blinker.into_parts();
        assert_eq!(pin.set_count, 6);
        assert_eq!(delay.calls, 6);
        assert_eq!(delay.total_ms, 3000);
    }

    #[test]
    fn test_run_zero_cycles_is_noop() {
        let mut blinker = Blinker::new(ArrayMockPin::new(), CountingDelay::new(), 1000);
        blinker.initialize().unwrap();
        blinker.run(0).unwrap();

        let (pin, delay) = blinker.into_parts();
        assert_eq!(pin.set_count, 0);
        assert_eq!(delay.calls, 0);
    }
}
