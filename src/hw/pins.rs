// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the micro:bit v2 edge connector on the Maqueen chassis.
//!
//! | Edge pin | nRF52833 | Role |
//! | -------- | -------- | ---- |
//! | P1       | P0.03    | Ultrasonic trigger |
//! | P2       | P0.04    | Ultrasonic echo |
//! | P8       | P0.10    | Left headlight |
//! | P12      | P0.12    | Right headlight |
//! | P13      | P0.17    | Left line sensor |
//! | P14      | P0.01    | Right line sensor |
//! | P15      | P0.13    | RGB strip data (SPIM MOSI) |
//! | P19/P20  | I2C ext  | Motor/servo controller at 0x10 |
//! | Speaker  | P0.00    | On-board speaker |

use microbit::{
    board::{Edge, Pins},
    hal::gpio::{p0::P0_00, Disconnected, Floating, Input, Level, Output, Pin, PushPull},
};

/// All GPIO lines the firmware uses. Construct this once at startup using:
///
/// ```ignore
/// let pins = BoardPins::new(board.edge, board.pins, board.speaker_pin);
/// ```
///
/// The I2C and UART pin groups are already bundled by the board crate and are passed to their
/// peripherals directly.
pub struct BoardPins {
    pub leds: LedPins,
    pub line: LinePins,
    pub ultrasonic: UltrasonicPins,
    pub rgb_data: Pin<Output<PushPull>>,
    pub speaker: Pin<Output<PushPull>>,
}

pub struct LedPins {
    pub left: Pin<Output<PushPull>>,
    pub right: Pin<Output<PushPull>>,
}

pub struct LinePins {
    pub left: Pin<Input<Floating>>,
    pub right: Pin<Input<Floating>>,
}

pub struct UltrasonicPins {
    pub trigger: Pin<Output<PushPull>>,
    pub echo: Pin<Input<Floating>>,
}

impl BoardPins {
    /// Configure all named pins from the board's edge connector and raw GPIO.
    pub fn new(edge: Edge, pins: Pins, speaker: P0_00<Disconnected>) -> Self {
        Self {
            leds: LedPins {
                left: edge.e08.into_push_pull_output(Level::Low).degrade(),
                right: edge.e12.into_push_pull_output(Level::Low).degrade(),
            },

            line: LinePins {
                left: pins.p0_17.into_floating_input().degrade(),
                right: pins.p0_01.into_floating_input().degrade(),
            },

            ultrasonic: UltrasonicPins {
                trigger: edge.e01.into_push_pull_output(Level::Low).degrade(),
                echo: edge.e02.into_floating_input().degrade(),
            },

            rgb_data: pins.p0_13.into_push_pull_output(Level::Low).degrade(),
            speaker: speaker.into_push_pull_output(Level::Low).degrade(),
        }
    }
}
