//! GPIO Abstractions
//!
//! LED wrapper over any `embedded-hal` output pin.

use embedded_hal::digital::OutputPin;

/// Status LED state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LedState {
    /// LED is off
    #[default]
    Off,
    /// LED is on
    On,
}

impl LedState {
    /// Check if the LED is lit
    #[must_use]
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for LedState {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Off => defmt::write!(f, "OFF"),
            Self::On => defmt::write!(f, "ON"),
        }
    }
}

/// Whether the LED lights when its pin is driven high or low
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ActiveLevel {
    /// Lit when the pin is high
    #[default]
    High,
    /// Lit when the pin is low
    Low,
}

/// LED driver remembering its wiring polarity and last state
pub struct Led<PIN: OutputPin> {
    pin: PIN,
    active: ActiveLevel,
    state: LedState,
}

impl<PIN: OutputPin> Led<PIN> {
    /// Create an LED (initially off)
    pub fn new(pin: PIN, active: ActiveLevel) -> Self {
        let mut led = Self {
            pin,
            active,
            state: LedState::Off,
        };
        led.off();
        led
    }

    /// Turn LED on
    pub fn on(&mut self) {
        self.set(LedState::On);
    }

    /// Turn LED off
    pub fn off(&mut self) {
        self.set(LedState::Off);
    }

    /// Drive the LED to a logical state
    pub fn set(&mut self, state: LedState) {
        let high = match self.active {
            ActiveLevel::High => state.is_on(),
            ActiveLevel::Low => !state.is_on(),
        };
        if high {
            self.pin.set_high().ok();
        } else {
            self.pin.set_low().ok();
        }
        self.state = state;
    }

    /// Get current state
    #[must_use]
    pub const fn state(&self) -> LedState {
        self.state
    }

    /// Release the pin
    pub fn release(self) -> PIN {
        self.pin
    }
}
