//! Host-side doubles for the hardware traits
//!
//! The three mocks share one [`Trace`] so tests can assert the exact
//! interleaving of echo bytes, output switching and delays.

extern crate std;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;

use crate::hal::serial::SerialTransport;
use crate::hal::signal::SignalDriver;
use crate::types::{Millis, ToneFrequency};

/// Something observable the core did to the hardware
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    /// Byte sent on the serial link
    Echo(u8),
    /// LED switched on
    LedOn,
    /// LED switched off
    LedOff,
    /// Tone started
    ToneOn(ToneFrequency),
    /// Tone stopped
    ToneOff,
    /// Blocking delay
    Delay(Millis),
}

/// Shared, ordered record of hardware activity
#[derive(Clone, Debug, Default)]
pub struct Trace(Rc<RefCell<Vec<TraceEvent>>>);

impl Trace {
    /// Create an empty trace
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event
    pub fn record(&self, event: TraceEvent) {
        self.0.borrow_mut().push(event);
    }

    /// Copy of all events so far
    #[must_use]
    pub fn events(&self) -> Vec<TraceEvent> {
        self.0.borrow().clone()
    }

    /// Forget all events
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Bytes echoed on the serial link, in order
    #[must_use]
    pub fn echoed(&self) -> Vec<u8> {
        self.0
            .borrow()
            .iter()
            .filter_map(|event| match event {
                TraceEvent::Echo(byte) => Some(*byte),
                _ => None,
            })
            .collect()
    }

    /// Delays, in order
    #[must_use]
    pub fn delays(&self) -> Vec<Millis> {
        self.0
            .borrow()
            .iter()
            .filter_map(|event| match event {
                TraceEvent::Delay(duration) => Some(*duration),
                _ => None,
            })
            .collect()
    }

    /// Lengths of the tone pulses, in order
    ///
    /// A pulse is the total delay between a `ToneOn` and the next `ToneOff`.
    #[must_use]
    pub fn pulses(&self) -> Vec<Millis> {
        let mut pulses = Vec::new();
        let mut current: Option<Millis> = None;
        for event in self.0.borrow().iter() {
            match *event {
                TraceEvent::ToneOn(_) => current = Some(Millis::ZERO),
                TraceEvent::ToneOff => {
                    if let Some(length) = current.take() {
                        pulses.push(length);
                    }
                }
                TraceEvent::Delay(duration) => {
                    if let Some(length) = current.as_mut() {
                        *length = length.saturating_add(duration);
                    }
                }
                _ => {}
            }
        }
        pulses
    }
}

/// Scripted serial port
///
/// Each scripted slot is either a byte or `None` for a poll that finds
/// nothing. An exhausted script keeps reporting `None`.
#[derive(Debug)]
pub struct MockSerial {
    input: VecDeque<Option<u8>>,
    polls: usize,
    trace: Trace,
}

impl MockSerial {
    /// Create a port recording into `trace`
    #[must_use]
    pub fn new(trace: Trace) -> Self {
        Self {
            input: VecDeque::new(),
            polls: 0,
            trace,
        }
    }

    /// Queue bytes to be received
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.input.extend(bytes.iter().copied().map(Some));
    }

    /// Queue polls that receive nothing
    pub fn push_idle(&mut self, polls: usize) {
        self.input.extend(core::iter::repeat(None).take(polls));
    }

    /// Scripted slots not yet consumed
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.input.len()
    }

    /// Number of receive polls so far
    #[must_use]
    pub const fn polls(&self) -> usize {
        self.polls
    }
}

impl SerialTransport for MockSerial {
    fn send_byte(&mut self, byte: u8) {
        self.trace.record(TraceEvent::Echo(byte));
    }

    fn try_receive_byte(&mut self) -> Option<u8> {
        self.polls += 1;
        self.input.pop_front().flatten()
    }
}

/// Signal driver recording every call
#[derive(Clone, Debug)]
pub struct MockSignal {
    trace: Trace,
    led: bool,
    tone: bool,
}

impl MockSignal {
    /// Create a driver recording into `trace`
    #[must_use]
    pub fn new(trace: Trace) -> Self {
        Self {
            trace,
            led: false,
            tone: false,
        }
    }

    /// Check if the LED is currently lit
    #[must_use]
    pub const fn led_lit(&self) -> bool {
        self.led
    }

    /// Check if the tone is currently sounding
    #[must_use]
    pub const fn tone_sounding(&self) -> bool {
        self.tone
    }
}

impl SignalDriver for MockSignal {
    fn tone_on(&mut self, frequency: ToneFrequency) {
        self.tone = true;
        self.trace.record(TraceEvent::ToneOn(frequency));
    }

    fn tone_off(&mut self) {
        self.tone = false;
        self.trace.record(TraceEvent::ToneOff);
    }

    fn led_on(&mut self) {
        self.led = true;
        self.trace.record(TraceEvent::LedOn);
    }

    fn led_off(&mut self) {
        self.led = false;
        self.trace.record(TraceEvent::LedOff);
    }
}

/// Delay that returns immediately and records the requested time
#[derive(Clone, Debug)]
pub struct MockDelay {
    trace: Trace,
}

impl MockDelay {
    /// Create a delay recording into `trace`
    #[must_use]
    pub fn new(trace: Trace) -> Self {
        Self { trace }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.trace.record(TraceEvent::Delay(Millis::from_ms(ns / 1_000_000)));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.trace.record(TraceEvent::Delay(Millis::from_ms(ms)));
    }
}
