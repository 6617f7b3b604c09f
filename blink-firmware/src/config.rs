// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pin für die LED
///
/// Die Zuordnung ist eine Compile-Zeit-Konstante: der Code greift direkt
/// auf `peripherals.GPIO8` zu, dieser Wert dokumentiert die Belegung.
pub const LED_GPIO_PIN: u8 = 8;

/// Blink-Intervall in Millisekunden
///
/// Dauer EINER Phase (An bzw. Aus). Ein voller Zyklus dauert also
/// 2 * BLINK_INTERVAL_MS bei 50% Duty Cycle.
pub const BLINK_INTERVAL_MS: u32 = 1000;
