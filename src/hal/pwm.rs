//! PWM Tone Output
//!
//! Drives the piezo buzzer from a timer channel: the timer period sets the
//! pitch and the channel runs at half duty while a symbol sounds.

use embassy_stm32::peripherals::TIM2;
use embassy_stm32::time::Hertz;
use embassy_stm32::timer::simple_pwm::SimplePwm;

use super::signal::ToneGenerator;
use crate::types::ToneFrequency;

/// Duty cycle of the buzzer square wave
const TONE_DUTY_PERCENT: u8 = 50;

/// Buzzer on TIM2 channel 1
pub struct PwmTone<'d> {
    pwm: SimplePwm<'d, TIM2>,
    frequency: Option<ToneFrequency>,
}

impl<'d> PwmTone<'d> {
    /// Take ownership of the configured PWM timer (output initially off)
    #[must_use]
    pub fn new(pwm: SimplePwm<'d, TIM2>) -> Self {
        let mut tone = Self {
            pwm,
            frequency: None,
        };
        tone.stop();
        tone
    }
}

impl ToneGenerator for PwmTone<'_> {
    fn start(&mut self, frequency: ToneFrequency) {
        // Reprogramming the period restarts the counter; skip it when unchanged
        if self.frequency != Some(frequency) {
            self.pwm.set_frequency(Hertz(u32::from(frequency.as_hz())));
            self.frequency = Some(frequency);
        }
        let mut channel = self.pwm.ch1();
        channel.set_duty_cycle_percent(TONE_DUTY_PERCENT);
        channel.enable();
    }

    fn stop(&mut self) {
        let mut channel = self.pwm.ch1();
        channel.set_duty_cycle_fully_off();
        channel.disable();
    }
}
