//! Playback Engine
//!
//! Renders Morse symbols as timed tone/LED pulses.
//!
//! # Timing
//!
//! All durations are whole multiples of one timing unit
//! ([`TIMING_UNIT_MS`](crate::config::TIMING_UNIT_MS)):
//!
//! ```text
//! dot        1 unit   tone + LED on
//! dash       4 units  tone + LED on
//! symbol gap 1 unit   silent, after every symbol
//! char gap   6 units  silent, after the last symbol gap
//! ```
//!
//! The ordering is produced by [`CharacterPlayback`], a pure state machine
//! yielding one [`PlaybackEvent`] per output state. [`PlaybackEngine`]
//! applies each event to the [`SignalDriver`] and holds it with a blocking
//! [`DelayNs`].

use embedded_hal::delay::DelayNs;

use crate::config::{
    timing_unit, DASH_UNITS, DOT_UNITS, INTER_CHARACTER_UNITS, INTER_SYMBOL_UNITS,
    TONE_FREQUENCY,
};
use crate::hal::serial::SerialTransport;
use crate::hal::signal::SignalDriver;
use crate::morse;
use crate::protocol::InputLine;
use crate::types::{Millis, Symbol, ToneFrequency};

/// Tone length of a dot
pub const DOT_DURATION: Millis = Millis::from_units(DOT_UNITS, timing_unit());

/// Tone length of a dash
pub const DASH_DURATION: Millis = Millis::from_units(DASH_UNITS, timing_unit());

/// Silence after each symbol
pub const INTER_SYMBOL_GAP: Millis = Millis::from_units(INTER_SYMBOL_UNITS, timing_unit());

/// Silence after each character
pub const INTER_CHARACTER_GAP: Millis = Millis::from_units(INTER_CHARACTER_UNITS, timing_unit());

/// Tone length of a symbol
#[must_use]
pub const fn symbol_duration(symbol: Symbol) -> Millis {
    match symbol {
        Symbol::Dot => DOT_DURATION,
        Symbol::Dash => DASH_DURATION,
    }
}

/// One output state and how long to hold it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackEvent {
    /// Hold time
    pub duration: Millis,
    /// LED lit
    pub led_on: bool,
    /// Tone sounding
    pub tone_on: bool,
}

impl PlaybackEvent {
    /// Tone and LED on
    #[must_use]
    pub const fn pulse(duration: Millis) -> Self {
        Self {
            duration,
            led_on: true,
            tone_on: true,
        }
    }

    /// Tone and LED off
    #[must_use]
    pub const fn silence(duration: Millis) -> Self {
        Self {
            duration,
            led_on: false,
            tone_on: false,
        }
    }

    /// Check if any output is active
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.led_on || self.tone_on
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for PlaybackEvent {
    fn format(&self, f: defmt::Formatter) {
        if self.is_active() {
            defmt::write!(f, "ON {}", self.duration);
        } else {
            defmt::write!(f, "OFF {}", self.duration);
        }
    }
}

/// Step of the per-character playback state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    /// Sounding a symbol
    SymbolOn(Symbol),
    /// Silence after a symbol
    InterSymbolGap,
    /// Silence closing the character
    InterCharacterGap,
    /// Character finished
    Done,
}

#[cfg(feature = "embedded")]
impl defmt::Format for PlaybackState {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::SymbolOn(symbol) => defmt::write!(f, "On({})", symbol),
            Self::InterSymbolGap => defmt::write!(f, "SymbolGap"),
            Self::InterCharacterGap => defmt::write!(f, "CharGap"),
            Self::Done => defmt::write!(f, "Done"),
        }
    }
}

/// Timed-step state machine for one character
///
/// Yields `pulse, gap` per symbol followed by one character gap.
#[derive(Clone, Debug)]
pub struct CharacterPlayback<'a> {
    symbols: &'a [Symbol],
    position: usize,
    state: PlaybackState,
}

impl<'a> CharacterPlayback<'a> {
    /// Start playback of a symbol sequence
    #[must_use]
    pub fn new(symbols: &'a [Symbol]) -> Self {
        let state = symbols
            .first()
            .map_or(PlaybackState::InterCharacterGap, |&s| PlaybackState::SymbolOn(s));
        Self {
            symbols,
            position: 0,
            state,
        }
    }

    /// State whose event will be yielded next
    #[must_use]
    pub const fn state(&self) -> PlaybackState {
        self.state
    }

    /// Check if the character has finished
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self.state, PlaybackState::Done)
    }

    /// Total time to play a symbol sequence, character gap included
    #[must_use]
    pub fn total_duration(symbols: &[Symbol]) -> Millis {
        CharacterPlayback::new(symbols).fold(Millis::ZERO, |total, event| {
            total.saturating_add(event.duration)
        })
    }
}

impl Iterator for CharacterPlayback<'_> {
    type Item = PlaybackEvent;

    fn next(&mut self) -> Option<PlaybackEvent> {
        match self.state {
            PlaybackState::SymbolOn(symbol) => {
                self.state = PlaybackState::InterSymbolGap;
                Some(PlaybackEvent::pulse(symbol_duration(symbol)))
            }
            PlaybackState::InterSymbolGap => {
                self.position += 1;
                self.state = self
                    .symbols
                    .get(self.position)
                    .map_or(PlaybackState::InterCharacterGap, |&s| {
                        PlaybackState::SymbolOn(s)
                    });
                Some(PlaybackEvent::silence(INTER_SYMBOL_GAP))
            }
            PlaybackState::InterCharacterGap => {
                self.state = PlaybackState::Done;
                Some(PlaybackEvent::silence(INTER_CHARACTER_GAP))
            }
            PlaybackState::Done => None,
        }
    }
}

/// Plays characters on the signal outputs and echoes them on the serial link
///
/// Owns the transport, the output driver and the delay for its lifetime.
pub struct PlaybackEngine<S, D, DL> {
    transport: S,
    driver: D,
    delay: DL,
    tone: ToneFrequency,
    output_on: bool,
}

impl<S, D, DL> PlaybackEngine<S, D, DL>
where
    S: SerialTransport,
    D: SignalDriver,
    DL: DelayNs,
{
    /// Create an engine using the configured tone frequency
    pub fn new(transport: S, driver: D, delay: DL) -> Self {
        Self::with_tone(transport, driver, delay, TONE_FREQUENCY)
    }

    /// Create an engine with an explicit tone frequency
    pub fn with_tone(transport: S, mut driver: D, delay: DL, tone: ToneFrequency) -> Self {
        driver.tone_off();
        driver.led_off();
        Self {
            transport,
            driver,
            delay,
            tone,
            output_on: false,
        }
    }

    /// Tone frequency used for pulses
    #[must_use]
    pub const fn tone(&self) -> ToneFrequency {
        self.tone
    }

    /// Echo a character and play its symbol sequence
    ///
    /// The lowercased character is echoed before the first pulse, whether
    /// or not it has a Morse table entry. Returns after the character gap
    /// with tone and LED off.
    pub fn play_sequence(&mut self, character: u8, symbols: &[Symbol]) {
        self.transport.send_byte(morse::normalize(character));
        for event in CharacterPlayback::new(symbols) {
            self.apply(event);
        }
    }

    /// Translate and play one character
    pub fn play_character(&mut self, character: u8) {
        let symbols = morse::translate(character);
        #[cfg(feature = "embedded")]
        defmt::debug!("{} {}", character as char, symbols);
        self.play_sequence(character, symbols);
    }

    /// Play every character of a line in order
    pub fn play_line<const N: usize>(&mut self, line: &InputLine<N>) {
        for character in line {
            self.play_character(character);
        }
    }

    /// Switch the outputs for an event and hold it
    fn apply(&mut self, event: PlaybackEvent) {
        let on = event.is_active();
        if on != self.output_on {
            if on {
                self.driver.led_on();
                self.driver.tone_on(self.tone);
            } else {
                self.driver.tone_off();
                self.driver.led_off();
            }
            self.output_on = on;
        }
        self.delay.delay_ms(event.duration.as_ms());
    }

    /// Access the serial transport
    pub fn transport_mut(&mut self) -> &mut S {
        &mut self.transport
    }

    /// Access the signal driver
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Release the owned peripherals
    pub fn release(self) -> (S, D, DL) {
        (self.transport, self.driver, self.delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Symbol::{Dash, Dot};

    #[test]
    fn durations_follow_unit_ratios() {
        let unit = timing_unit().as_ms();
        assert_eq!(DOT_DURATION.as_ms(), unit);
        assert_eq!(DASH_DURATION.as_ms(), 4 * unit);
        assert_eq!(INTER_SYMBOL_GAP.as_ms(), unit);
        assert_eq!(INTER_CHARACTER_GAP.as_ms(), 6 * unit);
    }

    #[test]
    fn single_dot_events() {
        let events: heapless::Vec<PlaybackEvent, 8> = CharacterPlayback::new(&[Dot]).collect();
        assert_eq!(
            events.as_slice(),
            &[
                PlaybackEvent::pulse(DOT_DURATION),
                PlaybackEvent::silence(INTER_SYMBOL_GAP),
                PlaybackEvent::silence(INTER_CHARACTER_GAP),
            ]
        );
    }

    #[test]
    fn state_walks_through_sequence() {
        let mut playback = CharacterPlayback::new(&[Dash, Dot]);
        assert_eq!(playback.state(), PlaybackState::SymbolOn(Dash));
        playback.next();
        assert_eq!(playback.state(), PlaybackState::InterSymbolGap);
        playback.next();
        assert_eq!(playback.state(), PlaybackState::SymbolOn(Dot));
        playback.next();
        playback.next();
        assert_eq!(playback.state(), PlaybackState::InterCharacterGap);
        playback.next();
        assert!(playback.is_done());
        assert!(playback.next().is_none());
    }

    #[test]
    fn empty_sequence_only_waits() {
        let mut playback = CharacterPlayback::new(&[]);
        assert_eq!(
            playback.next(),
            Some(PlaybackEvent::silence(INTER_CHARACTER_GAP))
        );
        assert!(playback.next().is_none());
    }

    #[test]
    fn total_duration_of_a() {
        // dot + gap + dash + gap + char gap = 1 + 1 + 4 + 1 + 6 units
        let total = CharacterPlayback::total_duration(&[Dot, Dash]);
        assert_eq!(total.as_ms(), 13 * timing_unit().as_ms());
    }
}
