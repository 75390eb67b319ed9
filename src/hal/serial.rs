//! Serial Byte Transport
//!
//! Polled byte-level access to the UART carrying both the text to encode
//! and the echo of each played character.

use embedded_hal_nb::serial::{Read, Write};

use crate::config::{UART_BAUD_RATE, UART_DATA_BITS};

/// Byte transport used by the line reader and the playback echo
pub trait SerialTransport {
    /// Send one byte, blocking until the transmitter accepts it
    ///
    /// Transmission is fire-and-forget: errors are dropped.
    fn send_byte(&mut self, byte: u8);

    /// Poll for one received byte without blocking
    fn try_receive_byte(&mut self) -> Option<u8>;
}

impl<T: SerialTransport + ?Sized> SerialTransport for &mut T {
    fn send_byte(&mut self, byte: u8) {
        (**self).send_byte(byte);
    }

    fn try_receive_byte(&mut self) -> Option<u8> {
        (**self).try_receive_byte()
    }
}

/// [`SerialTransport`] over any non-blocking `embedded-hal-nb` UART
pub struct NbSerial<U> {
    uart: U,
}

impl<U> NbSerial<U>
where
    U: Read<u8> + Write<u8>,
{
    /// Wrap a UART
    #[must_use]
    pub const fn new(uart: U) -> Self {
        Self { uart }
    }

    /// Release the wrapped UART
    pub fn release(self) -> U {
        self.uart
    }
}

impl<U> SerialTransport for NbSerial<U>
where
    U: Read<u8> + Write<u8>,
{
    fn send_byte(&mut self, byte: u8) {
        let _ = nb::block!(self.uart.write(byte));
    }

    fn try_receive_byte(&mut self) -> Option<u8> {
        // Overrun/framing errors read as "nothing received"
        self.uart.read().ok()
    }
}

/// Line coding (baud rate, etc.)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineCoding {
    /// Baud rate
    pub baud_rate: u32,
    /// Data bits
    pub data_bits: DataBits,
    /// Stop bits
    pub stop_bits: StopBits,
    /// Parity
    pub parity: Parity,
}

impl LineCoding {
    /// Fixed framing of the beacon's serial link (9600 8N1)
    pub const BEACON: Self = Self {
        baud_rate: UART_BAUD_RATE,
        data_bits: match DataBits::from_bits(UART_DATA_BITS) {
            Some(bits) => bits,
            None => panic!("UART_DATA_BITS must be 8 or 9"),
        },
        stop_bits: StopBits::One,
        parity: Parity::None,
    };

    /// Bits on the wire per transmitted byte (start + data + parity + stop)
    #[must_use]
    pub const fn bits_per_frame(&self) -> u32 {
        let parity = match self.parity {
            Parity::None => 0,
            Parity::Odd | Parity::Even => 1,
        };
        let stop = match self.stop_bits {
            StopBits::One => 1,
            StopBits::Two => 2,
        };
        1 + self.data_bits.bits() as u32 + parity + stop
    }

    /// Time to shift out one byte, in microseconds (rounded up)
    #[must_use]
    pub const fn byte_time_us(&self) -> u32 {
        (self.bits_per_frame() * 1_000_000).div_ceil(self.baud_rate)
    }
}

impl Default for LineCoding {
    fn default() -> Self {
        Self::BEACON
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for LineCoding {
    fn format(&self, f: defmt::Formatter) {
        let parity = match self.parity {
            Parity::None => 'N',
            Parity::Odd => 'O',
            Parity::Even => 'E',
        };
        let stop = match self.stop_bits {
            StopBits::One => 1u8,
            StopBits::Two => 2u8,
        };
        defmt::write!(f, "{} {}{}{}", self.baud_rate, self.data_bits.bits(), parity, stop);
    }
}

/// Data bits per frame supported by the UART
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DataBits {
    /// Eight data bits
    #[default]
    Eight,
    /// Nine data bits
    Nine,
}

impl DataBits {
    /// Map a bit count onto a supported width
    #[must_use]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            8 => Some(Self::Eight),
            9 => Some(Self::Nine),
            _ => None,
        }
    }

    /// Number of data bits
    #[must_use]
    pub const fn bits(self) -> u8 {
        match self {
            Self::Eight => 8,
            Self::Nine => 9,
        }
    }
}

/// Stop bits configuration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StopBits {
    /// One stop bit
    #[default]
    One,
    /// Two stop bits
    Two,
}

/// Parity configuration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Parity {
    /// No parity
    #[default]
    None,
    /// Odd parity
    Odd,
    /// Even parity
    Even,
}
