//! Beacon Loop Tests
//!
//! End-to-end tests: serial input in, echo and pulse trace out.
//! Run with: cargo test --target x86_64-unknown-linux-gnu --no-default-features --features std --test beacon_tests

use morse_beacon::beacon::{Beacon, BeaconState};
use morse_beacon::config::TONE_FREQUENCY;
use morse_beacon::mock::{MockDelay, MockSerial, MockSignal, Trace, TraceEvent};
use morse_beacon::playback::{DASH_DURATION, DOT_DURATION, INTER_CHARACTER_GAP, INTER_SYMBOL_GAP};

type TestBeacon<const N: usize> = Beacon<MockSerial, MockSignal, MockDelay, N>;

fn beacon<const N: usize>(input: &[u8]) -> (TestBeacon<N>, Trace) {
    let trace = Trace::new();
    let mut serial = MockSerial::new(trace.clone());
    serial.push_bytes(input);
    let beacon = Beacon::new(serial, MockSignal::new(trace.clone()), MockDelay::new(trace.clone()));
    trace.clear();
    (beacon, trace)
}

// ============================================================================
// State Tests
// ============================================================================

#[test]
fn test_starts_awaiting_a_line() {
    let (beacon, _trace) = beacon::<100>(b"");
    assert_eq!(beacon.state(), BeaconState::AwaitLine);
    assert_eq!(beacon.lines_played(), 0);
}

#[test]
fn test_returns_to_await_after_step() {
    let (mut beacon, _trace) = beacon::<100>(b"e\r");
    beacon.step();
    assert_eq!(beacon.state(), BeaconState::AwaitLine);
    assert_eq!(beacon.lines_played(), 1);
}

#[test]
fn test_receive_line_enters_translate_and_play() {
    let (mut beacon, trace) = beacon::<100>(b"sos\r");
    let line = beacon.receive_line();
    assert_eq!(beacon.state(), BeaconState::TranslateAndPlay);
    assert_eq!(line.as_bytes(), b"sos");
    // Nothing played yet
    assert!(trace.events().is_empty());
    assert_eq!(beacon.lines_played(), 0);

    beacon.play(&line);
    assert_eq!(beacon.state(), BeaconState::AwaitLine);
    assert_eq!(trace.echoed(), b"sos".to_vec());
    assert_eq!(beacon.lines_played(), 1);
}

#[test]
fn test_default_state() {
    assert_eq!(BeaconState::default(), BeaconState::AwaitLine);
}

// ============================================================================
// End-to-End Tests
// ============================================================================

#[test]
fn test_sos_echo_order() {
    let (mut beacon, trace) = beacon::<100>(b"sos\r");
    let line = beacon.step();
    assert_eq!(line.as_bytes(), b"sos");
    assert_eq!(trace.echoed(), b"sos".to_vec());
}

#[test]
fn test_sos_pulse_lengths() {
    let (mut beacon, trace) = beacon::<100>(b"sos\r");
    beacon.step();
    let (d, dh) = (DOT_DURATION, DASH_DURATION);
    assert_eq!(trace.pulses(), vec![d, d, d, dh, dh, dh, d, d, d]);
}

#[test]
fn test_sos_full_trace() {
    let (mut beacon, trace) = beacon::<100>(b"SOS\n");
    beacon.step();

    let mut expected = Vec::new();
    for (character, length) in [(b's', DOT_DURATION), (b'o', DASH_DURATION), (b's', DOT_DURATION)] {
        expected.push(TraceEvent::Echo(character));
        for _ in 0..3 {
            expected.push(TraceEvent::LedOn);
            expected.push(TraceEvent::ToneOn(TONE_FREQUENCY));
            expected.push(TraceEvent::Delay(length));
            expected.push(TraceEvent::ToneOff);
            expected.push(TraceEvent::LedOff);
            expected.push(TraceEvent::Delay(INTER_SYMBOL_GAP));
        }
        expected.push(TraceEvent::Delay(INTER_CHARACTER_GAP));
    }

    assert_eq!(trace.events(), expected);
}

#[test]
fn test_empty_line_plays_nothing() {
    let (mut beacon, trace) = beacon::<100>(b"\r");
    let line = beacon.step();
    assert!(line.is_empty());
    assert!(trace.events().is_empty());
    assert_eq!(beacon.lines_played(), 1);
}

#[test]
fn test_consecutive_lines() {
    let (mut beacon, trace) = beacon::<100>(b"e\rt\n");
    beacon.step();
    beacon.step();
    assert_eq!(trace.echoed(), b"et".to_vec());
    assert_eq!(trace.pulses(), vec![DOT_DURATION, DASH_DURATION]);
    assert_eq!(beacon.lines_played(), 2);
}

#[test]
fn test_space_is_played_as_dot() {
    let (mut beacon, trace) = beacon::<100>(b"e e\r");
    beacon.step();
    assert_eq!(trace.echoed(), b"e e".to_vec());
    assert_eq!(trace.pulses(), vec![DOT_DURATION; 3]);
}

#[test]
fn test_long_line_is_split() {
    let (mut beacon, trace) = beacon::<4>(b"eeeee\r");
    let first = beacon.step();
    let second = beacon.step();
    assert_eq!(first.as_bytes(), b"eee");
    assert_eq!(second.as_bytes(), b"ee");
    assert_eq!(trace.echoed().len(), 5);
}

#[test]
fn test_outputs_off_between_lines() {
    let (mut beacon, _trace) = beacon::<100>(b"0\r");
    beacon.step();
    let driver = beacon.engine().driver();
    assert!(!driver.led_lit());
    assert!(!driver.tone_sounding());
}

#[test]
fn test_overlong_line_plays_across_two_steps() {
    let mut input = vec![b'e'; 150];
    input.push(b'\r');
    let (mut beacon, trace) = beacon::<100>(&input);

    let first = beacon.step();
    let second = beacon.step();
    assert_eq!(first.len(), 99);
    assert_eq!(second.len(), 51);
    assert_eq!(trace.echoed().len(), 150);
    assert_eq!(trace.pulses(), vec![DOT_DURATION; 150]);
    assert_eq!(beacon.lines_played(), 2);
}
