//! Signal Driver
//!
//! The audible/visual output keyed by the playback engine: a buzzer tone
//! and an LED switched together for every symbol.

use embedded_hal::digital::OutputPin;

use super::gpio::{Led, LedState};
use crate::types::ToneFrequency;

/// Output capability driven in lock-step by the playback engine
///
/// Calls are assumed infallible; implementations drop peripheral errors.
pub trait SignalDriver {
    /// Start the tone at the given frequency
    fn tone_on(&mut self, frequency: ToneFrequency);

    /// Silence the tone
    fn tone_off(&mut self);

    /// Light the LED
    fn led_on(&mut self);

    /// Turn the LED off
    fn led_off(&mut self);
}

impl<T: SignalDriver + ?Sized> SignalDriver for &mut T {
    fn tone_on(&mut self, frequency: ToneFrequency) {
        (**self).tone_on(frequency);
    }

    fn tone_off(&mut self) {
        (**self).tone_off();
    }

    fn led_on(&mut self) {
        (**self).led_on();
    }

    fn led_off(&mut self) {
        (**self).led_off();
    }
}

/// Square-wave tone source (PWM channel, DAC, ...)
pub trait ToneGenerator {
    /// Start generating the tone
    fn start(&mut self, frequency: ToneFrequency);

    /// Stop generating the tone
    fn stop(&mut self);
}

/// [`SignalDriver`] composed of an LED and a tone generator
pub struct SignalOutputs<PIN: OutputPin, TONE: ToneGenerator> {
    led: Led<PIN>,
    tone: TONE,
    sounding: Option<ToneFrequency>,
}

impl<PIN: OutputPin, TONE: ToneGenerator> SignalOutputs<PIN, TONE> {
    /// Combine an LED and a tone generator, both starting silent
    pub fn new(led: Led<PIN>, mut tone: TONE) -> Self {
        tone.stop();
        Self {
            led,
            tone,
            sounding: None,
        }
    }

    /// Current LED state
    #[must_use]
    pub const fn led_state(&self) -> LedState {
        self.led.state()
    }

    /// Frequency currently sounding, if any
    #[must_use]
    pub const fn sounding(&self) -> Option<ToneFrequency> {
        self.sounding
    }

    /// Split back into the LED and tone generator
    pub fn release(self) -> (Led<PIN>, TONE) {
        (self.led, self.tone)
    }
}

impl<PIN: OutputPin, TONE: ToneGenerator> SignalDriver for SignalOutputs<PIN, TONE> {
    fn tone_on(&mut self, frequency: ToneFrequency) {
        self.tone.start(frequency);
        self.sounding = Some(frequency);
    }

    fn tone_off(&mut self) {
        self.tone.stop();
        self.sounding = None;
    }

    fn led_on(&mut self) {
        self.led.on();
    }

    fn led_off(&mut self) {
        self.led.off();
    }
}
