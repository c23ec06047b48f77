// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Command alphabet understood by the robot.
//!
//! Each command travels as a single ASCII character, laid out like a WASD remote:
//!
//! ```text
//!   q  w  e        q: chime     w: forward   e: toggle lights
//!   a  s  d        a: pivot L   s: back      d: pivot R
//!   z              z: boost
//! ```

// Message bytes
pub const MSG_FORWARD: u8 = b'w';
pub const MSG_PIVOT_LEFT: u8 = b'a';
pub const MSG_BACK: u8 = b's';
pub const MSG_PIVOT_RIGHT: u8 = b'd';
pub const MSG_TOGGLE_LIGHTS: u8 = b'e';
pub const MSG_CHIME: u8 = b'q';
pub const MSG_BOOST: u8 = b'z';

/// Robot commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Forward,
    PivotLeft,
    Back,
    PivotRight,
    ToggleLights,
    Chime,
    Boost,
}

impl Command {
    /// Decode one message byte. Anything outside the alphabet is `None`.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            MSG_FORWARD => Some(Command::Forward),
            MSG_PIVOT_LEFT => Some(Command::PivotLeft),
            MSG_BACK => Some(Command::Back),
            MSG_PIVOT_RIGHT => Some(Command::PivotRight),
            MSG_TOGGLE_LIGHTS => Some(Command::ToggleLights),
            MSG_CHIME => Some(Command::Chime),
            MSG_BOOST => Some(Command::Boost),
            _ => None,
        }
    }

    /// Decode a whole message. Only a message of exactly one recognized byte is a command, so
    /// `"w"` is `Forward` but `"ww"` and `""` are nothing.
    pub fn from_message(message: &[u8]) -> Option<Self> {
        match message {
            [byte] => Self::from_byte(*byte),
            _ => None,
        }
    }

    pub fn to_byte(self) -> u8 {
        match self {
            Command::Forward => MSG_FORWARD,
            Command::PivotLeft => MSG_PIVOT_LEFT,
            Command::Back => MSG_BACK,
            Command::PivotRight => MSG_PIVOT_RIGHT,
            Command::ToggleLights => MSG_TOGGLE_LIGHTS,
            Command::Chime => MSG_CHIME,
            Command::Boost => MSG_BOOST,
        }
    }
}
