//! Core Types für die Pin-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Logik-Pegel eines digitalen Pins
///
/// `High` treibt die physische Leitung auf Versorgungsspannung,
/// `Low` auf Masse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PinLevel {
    /// Pegel nach Richtungs-Konfiguration (Hardware-Default)
    #[default]
    Low,
    High,
}

impl PinLevel {
    /// Gibt `true` zurück wenn der Pegel `High` ist
    pub fn is_high(self) -> bool {
        matches!(self, PinLevel::High)
    }
}

/// Richtung eines digitalen Pins
///
/// `Output` treibt Spannung, `Input` misst sie.
/// Die LED-Leitung wird einmal beim Start auf `Output` gesetzt
/// und danach nie wieder umkonfiguriert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PinDirection {
    Input,
    Output,
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for PinLevel {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PinLevel::Low => defmt::write!(fmt, "Low"),
            PinLevel::High => defmt::write!(fmt, "High"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PinDirection {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PinDirection::Input => defmt::write!(fmt, "Input"),
            PinDirection::Output => defmt::write!(fmt, "Output"),
        }
    }
}
