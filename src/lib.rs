//! Serial Morse Beacon Firmware Library
//!
//! Reads lines of text from a UART and keys each character as
//! International Morse code on a buzzer and an LED, echoing every
//! character back on the UART as it starts to play.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       BEACON LOOP                            │
//! │          AwaitLine  ──▶  TranslateAndPlay  ──▶  ...          │
//! ├─────────────────────────────────────────────────────────────┤
//! │                         CORE                                 │
//! │  Line Reader  │  Morse Translator  │  Playback Engine        │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    HAL / DRIVER LAYER                        │
//! │  SerialTransport (UART)  │  SignalDriver (LED + PWM tone)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **Capability traits**: the core never touches registers, only
//!   [`hal::SerialTransport`] and [`hal::SignalDriver`]
//! - **Functional core, imperative shell**: translation and the playback
//!   state machine are pure; only the engine performs I/O
//! - **Fixed timing**: all durations are compile-time constants
//! - **No unsafe in application code**

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export dependencies needed by applications (only in embedded mode)
#[cfg(feature = "embedded")]
pub use embassy_executor;
#[cfg(feature = "embedded")]
pub use embassy_stm32;
#[cfg(feature = "embedded")]
pub use embassy_time;

/// Hardware Abstraction Layer
///
/// Capability traits for the serial link and the signal outputs, plus
/// adapters over `embedded-hal` peripherals.
pub mod hal;

/// Serial line framing
pub mod protocol;

/// Character to Morse symbol translation
pub mod morse;

/// Timed rendering of symbols on the signal outputs
pub mod playback;

/// Top-level read/play loop
pub mod beacon;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

/// Test doubles for the hardware traits
#[cfg(any(test, feature = "std"))]
pub mod mock;

/// Prelude module for common imports
#[cfg(feature = "embedded")]
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::beacon::Beacon;
    pub use crate::config::*;
    pub use crate::hal::{NbSerial, SerialTransport, SignalDriver, SignalOutputs};
    pub use crate::types::*;

    // Common traits
    pub use embedded_hal::delay::DelayNs;
    pub use embedded_hal::digital::OutputPin;

    // Embassy
    pub use embassy_time::{Delay, Duration, Instant, Timer};

    // Logging
    pub use defmt::{debug, error, info, trace, warn};
}
