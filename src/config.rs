//! System configuration and hardware constants
//!
//! This module defines compile-time constants for the beacon hardware.
//! Pin mappings, serial framing and Morse timing are centralized here;
//! none of them can be changed at runtime.

use crate::types::{Millis, ToneFrequency};

/// System clock frequency (STM32G474 @ 170MHz)
pub const SYSTEM_CLOCK_HZ: u32 = 170_000_000;

/// Serial link baud rate
pub const UART_BAUD_RATE: u32 = 9600;

/// Serial link data bits
pub const UART_DATA_BITS: u8 = 8;

/// Input line buffer capacity, including the reserved terminator slot
pub const LINE_BUFFER_SIZE: usize = 100;

/// Buzzer tone frequency in Hz
pub const TONE_FREQUENCY_HZ: u16 = 440;

/// Length of one Morse timing unit in milliseconds
pub const TIMING_UNIT_MS: u32 = 100;

/// Dot length in timing units
pub const DOT_UNITS: u32 = 1;

/// Dash length in timing units
pub const DASH_UNITS: u32 = 4;

/// Gap between symbols of one character, in timing units
pub const INTER_SYMBOL_UNITS: u32 = 1;

/// Gap after a character, in timing units
pub const INTER_CHARACTER_UNITS: u32 = 6;

/// Pin assignments for GPIO
pub mod pins {
    //! GPIO pin assignments matching the Nucleo-G474RE board

    /// Status LED, lit while a symbol sounds
    pub const LED_STATUS: &str = "PA5";

    /// Buzzer drive (TIM2 CH1)
    pub const BUZZER: &str = "PA0";

    /// LPUART1 TX (ST-LINK virtual COM port)
    pub const UART_TX: &str = "PA2";

    /// LPUART1 RX (ST-LINK virtual COM port)
    pub const UART_RX: &str = "PA3";
}

/// Timer assignments
pub mod timers {
    //! Hardware timer assignments

    /// Buzzer PWM timer
    pub const BUZZER_PWM: u8 = 2;
}

/// Buzzer tone, validated at compile time
pub const TONE_FREQUENCY: ToneFrequency = match ToneFrequency::from_hz(TONE_FREQUENCY_HZ) {
    Some(tone) => tone,
    None => panic!("TONE_FREQUENCY_HZ out of range"),
};

/// Length of one timing unit
#[must_use]
pub const fn timing_unit() -> Millis {
    Millis::from_ms(TIMING_UNIT_MS)
}
