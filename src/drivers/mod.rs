// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device-Specific Drivers
//!
//! This module contains device-specific drivers that sit above the raw `hw/` layer and below the
//! [`Maqueen`](crate::Maqueen) facade.
//!
//! ## Existing drivers
//!
//! - [`motor_board`] – Maqueen I2C motor and servo controller
//! - [`ultrasonic`] – trigger/echo ultrasonic ranger
//! - [`rgb_strip`] – four-pixel addressable RGB strip
//! - [`line_sensor`] – reflective IR line sensors
//! - [`speaker`] – square-wave tone generator

pub mod line_sensor;
pub mod motor_board;
pub mod rgb_strip;
pub mod speaker;
pub mod ultrasonic;

pub use line_sensor::LineSensor;
pub use motor_board::MotorBoard;
pub use rgb_strip::RgbStrip;
pub use speaker::Speaker;
pub use ultrasonic::Ultrasonic;
