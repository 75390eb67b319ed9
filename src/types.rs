//! Shared types used across the beacon firmware
//!
//! This module defines the small value types that flow between the
//! translator, the playback engine and the hardware adapters.

use core::fmt;

/// One atomic Morse unit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Short pulse
    Dot,
    /// Long pulse
    Dash,
}

impl Symbol {
    /// Get the conventional text rendering (`.` or `-`)
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Dot => '.',
            Self::Dash => '-',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Symbol {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Dot => defmt::write!(f, "."),
            Self::Dash => defmt::write!(f, "-"),
        }
    }
}

/// Duration in milliseconds
///
/// All playback timing is expressed in this unit so that the four Morse
/// durations stay comparable as plain integers.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Millis(u32);

impl Millis {
    /// Zero duration
    pub const ZERO: Self = Self(0);

    /// Create from milliseconds
    #[must_use]
    pub const fn from_ms(ms: u32) -> Self {
        Self(ms)
    }

    /// Create from a whole number of timing units
    #[must_use]
    pub const fn from_units(units: u32, unit: Self) -> Self {
        Self(units * unit.0)
    }

    /// Get the duration in milliseconds
    #[must_use]
    pub const fn as_ms(self) -> u32 {
        self.0
    }

    /// Get the duration in microseconds
    #[must_use]
    pub const fn as_us(self) -> u64 {
        self.0 as u64 * 1000
    }

    /// Add two durations, saturating at the maximum
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl fmt::Debug for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ms", self.0)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Millis {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{} ms", self.0);
    }
}

/// Buzzer tone frequency in Hertz with validation
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToneFrequency(u16);

impl ToneFrequency {
    /// Lowest frequency the piezo buzzer reproduces usefully
    pub const MIN_HZ: u16 = 100;

    /// Highest frequency accepted for the tone output
    pub const MAX_HZ: u16 = 4000;

    /// Create a tone frequency, returns None if out of range
    #[must_use]
    pub const fn from_hz(hz: u16) -> Option<Self> {
        if hz >= Self::MIN_HZ && hz <= Self::MAX_HZ {
            Some(Self(hz))
        } else {
            None
        }
    }

    /// Get the frequency in Hz
    #[must_use]
    pub const fn as_hz(self) -> u16 {
        self.0
    }

    /// Get the period in microseconds (truncated)
    #[must_use]
    pub const fn period_us(self) -> u32 {
        1_000_000 / self.0 as u32
    }
}

impl fmt::Debug for ToneFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ToneFrequency({} Hz)", self.0)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for ToneFrequency {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{} Hz", self.0);
    }
}
