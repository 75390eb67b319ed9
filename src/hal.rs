//! Hardware Abstraction Layer
//!
//! The core only reaches the hardware through the two capability traits
//! defined here, [`SerialTransport`] and [`SignalDriver`]. Adapters over
//! `embedded-hal` traits are always compiled so they can be tested on the
//! host; the STM32-specific tone output only exists for the embedded build.

pub mod gpio;
#[cfg(feature = "embedded")]
pub mod pwm;
pub mod serial;
pub mod signal;

pub use serial::{LineCoding, NbSerial, SerialTransport};
pub use signal::{SignalDriver, SignalOutputs, ToneGenerator};
