// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Timed drive maneuvers for the motor commands.

use crate::drivers::motor_board::MAX_SPEED;
use crate::protocol::Command;

/// Cruise speed for the regular motor commands.
pub const CRUISE_SPEED: i16 = 150;

/// Wheel speeds held for a fixed time, followed by a stop.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Maneuver {
    pub left: i16,
    pub right: i16,
    pub duration_ms: u32,
}

impl Maneuver {
    pub const fn new(left: i16, right: i16, duration_ms: u32) -> Self {
        Self {
            left,
            right,
            duration_ms,
        }
    }
}

/// One maneuver per motor command.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DriveProfile {
    pub forward: Maneuver,
    pub pivot_left: Maneuver,
    pub back: Maneuver,
    pub pivot_right: Maneuver,
    pub boost: Maneuver,
}

impl Default for DriveProfile {
    fn default() -> Self {
        Self {
            forward: Maneuver::new(CRUISE_SPEED, CRUISE_SPEED, 1000),
            pivot_left: Maneuver::new(-CRUISE_SPEED, CRUISE_SPEED, 100),
            back: Maneuver::new(-CRUISE_SPEED, -CRUISE_SPEED, 500),
            pivot_right: Maneuver::new(CRUISE_SPEED, -CRUISE_SPEED, 100),
            boost: Maneuver::new(MAX_SPEED, MAX_SPEED, 1500),
        }
    }
}

impl DriveProfile {
    /// The maneuver for `command`, or `None` if it does not move the robot.
    pub fn maneuver(&self, command: Command) -> Option<Maneuver> {
        match command {
            Command::Forward => Some(self.forward),
            Command::PivotLeft => Some(self.pivot_left),
            Command::Back => Some(self.back),
            Command::PivotRight => Some(self.pivot_right),
            Command::Boost => Some(self.boost),
            Command::ToggleLights | Command::Chime => None,
        }
    }
}
