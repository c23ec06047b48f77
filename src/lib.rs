// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Maqueen Remote-Control Firmware
//!
//! This crate contains the firmware for a DFRobot Maqueen wheeled robot driven by a BBC micro:bit
//! v2, written in Rust. A receiver loop takes single-character commands and turns them into motor,
//! LED and sound actuation.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`hw`] | MCU-level wrappers around GPIO, timers and logging |
//! | [`drivers`] | Device-level drivers (Maqueen motor board, ultrasonic ranger, RGB strip, ...) |
//! | [`maqueen`] | The `Maqueen` hardware abstraction layer that owns every driver |
//! | [`protocol`] | Command alphabet, message parser and command sources |
//! | [`control`] | Command dispatcher |
//!
//! The library only depends on the `embedded-hal` 1.0 traits, so it builds and is tested on the
//! host. Everything board-specific lives behind the `firmware` feature.
//!
//! ## Getting Started
//!
//! Build docs:
//!
//! ```bash
//! cargo doc --no-deps --open
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cargo run --release --features firmware --target thumbv7em-none-eabihf
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod control;
pub mod drivers;
pub mod hw;
pub mod maqueen;
pub mod protocol;

pub use maqueen::{Maqueen, MaqueenParts};
