// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

#![no_main]
#![no_std]

use cortex_m_rt::entry;
use panic_halt as _;

use log::{info, LevelFilter};
use microbit::{
    hal::{
        spim::{self, Spim},
        timer::Timer,
        twim::{self, Twim},
        uarte::{Baudrate, Parity, Uarte},
    },
    Board,
};
use ws2812_spi::Ws2812;

use maqueen::{
    control::Dispatcher,
    drivers::Speaker,
    hw::{logger, pins::BoardPins, TimerClock},
    protocol::SerialSource,
    Maqueen, MaqueenParts,
};

const LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[entry]
fn main() -> ! {
    logger::init(LOG_LEVEL);

    // Peripherals
    let board = Board::take().unwrap();
    let pins = BoardPins::new(board.edge, board.pins, board.speaker_pin);

    // I2C (edge P19/P20) to the motor controller
    let i2c = Twim::new(board.TWIM0, board.i2c_external.into(), twim::Frequency::K100);

    // SPIM0 MOSI as WS2812 data, no clock line
    let spi_pins = spim::Pins {
        sck: None,
        mosi: Some(pins.rgb_data),
        miso: None,
    };
    let spi = Spim::new(board.SPIM0, spi_pins, spim::Frequency::M2, spim::MODE_0, 0);
    let rgb = Ws2812::new(spi);

    // UARTE0 from the radio bridge
    let serial = Uarte::new(
        board.UARTE0,
        board.uart.into(),
        Parity::EXCLUDED,
        Baudrate::BAUD115200,
    );
    let tx_buf = cortex_m::singleton!(: [u8; 1] = [0; 1]).unwrap();
    let rx_buf = cortex_m::singleton!(: [u8; 1] = [0; 1]).unwrap();
    let (_tx, rx) = serial.split(tx_buf, rx_buf).unwrap();
    let mut source = SerialSource::new(rx);

    // Timers: TIMER1 free-running for echo timing, the rest as blocking delays
    let robot = Maqueen::new(MaqueenParts {
        i2c,
        led_left: pins.leds.left,
        led_right: pins.leds.right,
        line_left: pins.line.left,
        line_right: pins.line.right,
        trigger: pins.ultrasonic.trigger,
        echo: pins.ultrasonic.echo,
        clock: TimerClock::new(board.TIMER1),
        delay: Timer::new(board.TIMER0),
        rgb,
    });
    let speaker = Speaker::new(pins.speaker, Timer::new(board.TIMER3));

    let mut dispatcher = Dispatcher::new(robot, speaker, Timer::new(board.TIMER2));
    info!("maqueen: up");
    dispatcher.run(&mut source)
}
