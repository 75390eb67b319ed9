//! Serial Line Protocol
//!
//! Frames the polled serial byte stream into bounded text lines.
//!
//! A line ends at `\r` or `\n` (either alone; there is no CR/LF pairing).
//! A line of `N` capacity holds at most `N - 1` bytes; the last slot stays
//! reserved for the terminator. When a line fills up it is returned at
//! once and any further input starts the next line, so over-long input is
//! silently split rather than rejected.

use heapless::Vec;

use crate::hal::serial::SerialTransport;

/// Carriage return, ends a line
pub const CR: u8 = b'\r';

/// Line feed, ends a line
pub const LF: u8 = b'\n';

/// Placeholder the UART reports when nothing was received
const NUL: u8 = 0;

/// Check if a byte ends a line
#[must_use]
pub const fn is_terminator(byte: u8) -> bool {
    byte == CR || byte == LF
}

/// One received line, terminator excluded
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct InputLine<const N: usize> {
    bytes: Vec<u8, N>,
}

impl<const N: usize> InputLine<N> {
    /// Maximum number of bytes a line holds
    pub const MAX_LEN: usize = N.saturating_sub(1);

    /// Create an empty line
    #[must_use]
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Build a line from bytes
    ///
    /// Returns None if the bytes contain a terminator or do not fit.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() > Self::MAX_LEN || bytes.iter().any(|&b| is_terminator(b)) {
            return None;
        }
        Vec::from_slice(bytes).ok().map(|bytes| Self { bytes })
    }

    /// Append a byte, returns false if the line is already full
    fn push(&mut self, byte: u8) -> bool {
        if self.is_full() {
            return false;
        }
        self.bytes.push(byte).is_ok()
    }

    /// Get the raw bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// View as text, None if the bytes are not UTF-8
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.bytes).ok()
    }

    /// Number of bytes in the line
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the line is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Check if the line reached its maximum length
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.bytes.len() >= Self::MAX_LEN
    }

    /// Iterate over the bytes
    pub fn iter(&self) -> core::iter::Copied<core::slice::Iter<'_, u8>> {
        self.bytes.iter().copied()
    }
}

impl<'a, const N: usize> IntoIterator for &'a InputLine<N> {
    type Item = u8;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "embedded")]
impl<const N: usize> defmt::Format for InputLine<N> {
    fn format(&self, f: defmt::Formatter) {
        match self.as_str() {
            Some(text) => defmt::write!(f, "\"{=str}\"", text),
            None => defmt::write!(f, "{=[u8]}", self.as_bytes()),
        }
    }
}

/// Push-style line framer
///
/// Feed it bytes one at a time; it hands back a line whenever a
/// terminator arrives or the line fills up.
pub struct LineAssembler<const N: usize> {
    line: InputLine<N>,
}

impl<const N: usize> LineAssembler<N> {
    /// Create an assembler with an empty line
    #[must_use]
    pub const fn new() -> Self {
        Self {
            line: InputLine::new(),
        }
    }

    /// Feed a byte to the assembler
    /// Returns a line if one is complete
    pub fn feed(&mut self, byte: u8) -> Option<InputLine<N>> {
        if byte == NUL {
            return None;
        }

        if is_terminator(byte) {
            return Some(self.take());
        }

        self.line.push(byte);
        if self.line.is_full() {
            Some(self.take())
        } else {
            None
        }
    }

    /// Bytes gathered so far
    #[must_use]
    pub fn pending(&self) -> &[u8] {
        self.line.as_bytes()
    }

    /// Discard the partial line
    pub fn clear(&mut self) {
        self.line = InputLine::new();
    }

    fn take(&mut self) -> InputLine<N> {
        core::mem::take(&mut self.line)
    }
}

impl<const N: usize> Default for LineAssembler<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Read one line from the transport
///
/// Busy-polls until a terminator arrives or `N - 1` bytes were gathered.
/// Blocks forever if neither happens.
pub fn read_line<T, const N: usize>(transport: &mut T) -> InputLine<N>
where
    T: SerialTransport + ?Sized,
{
    let mut assembler = LineAssembler::<N>::new();
    loop {
        let Some(byte) = transport.try_receive_byte() else {
            continue;
        };
        if let Some(line) = assembler.feed(byte) {
            return line;
        }
    }
}
