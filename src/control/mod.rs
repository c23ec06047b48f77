// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Control
//!
//! Turns received commands into timed actions on the robot.
//!
//! ## Modules
//!
//! - [`dispatcher`] - Command dispatcher and the light-toggle state.
//! - [`profile`] - Speeds and durations of the motor maneuvers.

pub mod dispatcher;
pub mod profile;

pub use dispatcher::{Actuators, Chime, Dispatcher, LightState};
pub use profile::{DriveProfile, Maneuver};
