//! Beacon State Machine
//!
//! Top-level loop: wait for a line on the serial link, then play it
//! character by character, forever.
//!
//! ```text
//!            line received
//! AwaitLine ───────────────▶ TranslateAndPlay
//!     ▲                            │
//!     └────────────────────────────┘
//!            last character played
//! ```
//!
//! Input arriving while a line plays is not buffered here; whatever the
//! UART drops in the meantime is lost.

use embedded_hal::delay::DelayNs;

use crate::config::LINE_BUFFER_SIZE;
use crate::hal::serial::SerialTransport;
use crate::hal::signal::SignalDriver;
use crate::playback::PlaybackEngine;
use crate::protocol::{read_line, InputLine};

/// Beacon loop state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BeaconState {
    /// Polling the serial link for a line
    #[default]
    AwaitLine,
    /// Playing the received line
    TranslateAndPlay,
}

#[cfg(feature = "embedded")]
impl defmt::Format for BeaconState {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::AwaitLine => defmt::write!(f, "AwaitLine"),
            Self::TranslateAndPlay => defmt::write!(f, "TranslateAndPlay"),
        }
    }
}

/// Serial-to-Morse beacon
///
/// `N` is the line buffer capacity; lines hold at most `N - 1` bytes.
pub struct Beacon<S, D, DL, const N: usize = LINE_BUFFER_SIZE> {
    engine: PlaybackEngine<S, D, DL>,
    state: BeaconState,
    lines_played: u32,
}

impl<S, D, DL, const N: usize> Beacon<S, D, DL, N>
where
    S: SerialTransport,
    D: SignalDriver,
    DL: DelayNs,
{
    /// Create a beacon from its peripherals
    pub fn new(transport: S, driver: D, delay: DL) -> Self {
        Self::from_engine(PlaybackEngine::new(transport, driver, delay))
    }

    /// Create a beacon around an existing playback engine
    pub fn from_engine(engine: PlaybackEngine<S, D, DL>) -> Self {
        Self {
            engine,
            state: BeaconState::AwaitLine,
            lines_played: 0,
        }
    }

    /// Current loop state
    #[must_use]
    pub const fn state(&self) -> BeaconState {
        self.state
    }

    /// Number of lines played so far
    #[must_use]
    pub const fn lines_played(&self) -> u32 {
        self.lines_played
    }

    /// Wait for the next line and move to `TranslateAndPlay`
    pub fn receive_line(&mut self) -> InputLine<N> {
        let line: InputLine<N> = read_line(self.engine.transport_mut());

        #[cfg(feature = "embedded")]
        {
            defmt::info!("line {}: {} ({} bytes)", self.lines_played, line, line.len());
            if line.is_full() {
                defmt::warn!("line filled the {} byte buffer, rest carried over", N);
            }
        }

        self.state = BeaconState::TranslateAndPlay;
        line
    }

    /// Play a received line and move back to `AwaitLine`
    pub fn play(&mut self, line: &InputLine<N>) {
        self.engine.play_line(line);
        self.state = BeaconState::AwaitLine;
        self.lines_played = self.lines_played.wrapping_add(1);
    }

    /// Run one loop iteration: read a line, then play it
    ///
    /// Returns the line that was played.
    pub fn step(&mut self) -> InputLine<N> {
        let line = self.receive_line();
        self.play(&line);
        line
    }

    /// Run the beacon forever
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
        }
    }

    /// Access the playback engine
    pub fn engine(&self) -> &PlaybackEngine<S, D, DL> {
        &self.engine
    }

    /// Release the playback engine
    pub fn release(self) -> PlaybackEngine<S, D, DL> {
        self.engine
    }
}
