// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;

// Re-exports von blink-core
pub use blink_core::{Blinker, DelayProvider, LedPinDriver, PinDirection, PinError, PinLevel};

// ============================================================================
// Testing-Strategie
// ============================================================================
//
// Dieses Crate kompiliert nur für riscv32imac-unknown-none-elf und hat
// deshalb keine Host-Tests. Die komplette Blink-Logik liegt trait-basiert
// in blink-core und wird dort (inline) sowie in blink-tests (Mocks plus
// virtuelle Uhr) auf dem Host getestet. Hier bleibt nur die dünne
// Hardware-Anbindung übrig: GpioLedPin, HalDelay und der Entry Point.
