// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp-hal bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

use defmt::{error, info};
use esp_hal::gpio::Flex;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use blink_steuerung::Blinker;
use blink_steuerung::config::BLINK_INTERVAL_MS;
use blink_steuerung::hal::{GpioLedPin, HalDelay};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, konfiguriert die LED-Leitung als Ausgang
/// und blinkt dann endlos. Ende nur durch Reset oder Power-Off.
#[esp_hal::main]
fn main() -> ! {
    // Default-Takt reicht: das Timing hängt allein am Delay-Timer,
    // nicht an der CPU-Frequenz
    let config = esp_hal::Config::default();
    let peripherals = esp_hal::init(config);

    // GPIO8 als Flex-Pin: startet als Eingang (Pegel Low nach Reset),
    // die Richtung setzt danach der Blinker über den Core-Trait
    let led_gpio = Flex::new(peripherals.GPIO8);

    let pin = GpioLedPin::new(led_gpio);
    let delay = HalDelay::new();
    let mut blinker = Blinker::new(pin, delay, BLINK_INTERVAL_MS);

    // Leitung einmalig als Ausgang konfigurieren
    if let Err(_e) = blinker.initialize() {
        error!("Failed to configure LED pin as output");
    }
    info!(
        "LED pin configured, blinking with {} ms per phase",
        BLINK_INTERVAL_MS
    );

    // Hauptschleife: blinkt endlos
    loop {
        info!("Blink!");
        if let Err(_e) = blinker.run_cycle() {
            error!("Failed to write to LED pin");
        }
    }
}
