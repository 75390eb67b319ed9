//! Morse Beacon Main Application
//!
//! Entry point for the STM32G474 beacon firmware.
//! Brings up the UART, status LED and buzzer PWM, then hands them to the
//! beacon loop, which never returns.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Level, Output, OutputType, Speed};
use embassy_stm32::time::Hertz;
use embassy_stm32::timer::low_level::CountingMode;
use embassy_stm32::timer::simple_pwm::{PwmPin, SimplePwm};
use embassy_stm32::usart::{self, Uart};
use {defmt_rtt as _, panic_probe as _};

use morse_beacon::hal::gpio::{ActiveLevel, Led};
use morse_beacon::hal::pwm::PwmTone;
use morse_beacon::hal::serial::{DataBits, LineCoding, Parity, StopBits};
use morse_beacon::prelude::*;

/// Translate the fixed line coding into the UART driver configuration
fn uart_config(coding: &LineCoding) -> usart::Config {
    let mut config = usart::Config::default();
    config.baudrate = coding.baud_rate;
    config.data_bits = match coding.data_bits {
        DataBits::Eight => usart::DataBits::DataBits8,
        DataBits::Nine => usart::DataBits::DataBits9,
    };
    config.parity = match coding.parity {
        Parity::None => usart::Parity::ParityNone,
        Parity::Odd => usart::Parity::ParityOdd,
        Parity::Even => usart::Parity::ParityEven,
    };
    config.stop_bits = match coding.stop_bits {
        StopBits::One => usart::StopBits::STOP1,
        StopBits::Two => usart::StopBits::STOP2,
    };
    config
}

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Morse Beacon Firmware v{}", env!("CARGO_PKG_VERSION"));

    // Initialize STM32G474 peripherals with default clock configuration
    let config = embassy_stm32::Config::default();
    let p = embassy_stm32::init(config);

    info!("Peripherals initialized");

    // LPUART1 on PA2 (TX) / PA3 (RX) is the ST-LINK virtual COM port
    let coding = LineCoding::BEACON;
    let uart = defmt::unwrap!(Uart::new_blocking(
        p.LPUART1,
        p.PA3, // RX
        p.PA2, // TX
        uart_config(&coding),
    ));

    info!("UART initialized at {}", coding);

    // Status LED (PA5 on Nucleo boards)
    let led = Led::new(Output::new(p.PA5, Level::Low, Speed::Low), ActiveLevel::High);

    // Buzzer on TIM2 CH1 (PA0)
    let buzzer = PwmPin::new_ch1(p.PA0, OutputType::PushPull);
    let pwm = SimplePwm::new(
        p.TIM2,
        Some(buzzer),
        None,
        None,
        None,
        Hertz(u32::from(TONE_FREQUENCY_HZ)),
        CountingMode::EdgeAlignedUp,
    );

    info!("Buzzer PWM initialized at {}", TONE_FREQUENCY);

    let outputs = SignalOutputs::new(led, PwmTone::new(pwm));
    let mut beacon: Beacon<_, _, _> = Beacon::new(NbSerial::new(uart), outputs, Delay);

    info!("Entering beacon loop");
    beacon.run()
}
