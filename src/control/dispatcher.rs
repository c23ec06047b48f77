// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Command dispatcher.
//!
//! Each received [`Command`] runs to completion before the next one is read. Motor commands set
//! both wheels, hold for the maneuver's duration and then stop both wheels; nothing can interrupt
//! them. The only state kept between commands is whether the headlights are on.
//!
//! ```ignore
//! let mut dispatcher = Dispatcher::new(robot, speaker, delay);
//! dispatcher.run(&mut source);
//! ```

use embedded_hal::delay::DelayNs;
use log::{debug, info, warn};

use crate::control::{DriveProfile, Maneuver};
use crate::protocol::{Command, CommandSource};

/// What the dispatcher needs from the robot.
pub trait Actuators {
    type Error: core::fmt::Debug;

    /// Set both wheel speeds, `-255` to `255`.
    fn drive(&mut self, left: i16, right: i16) -> Result<(), Self::Error>;

    /// Drive both headlights to the same state.
    fn headlights(&mut self, on: bool);
}

/// Something that can play the notification sound.
pub trait Chime {
    fn chime(&mut self);
}

/// Headlight state kept between commands.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LightState {
    On,
    Off,
}

impl LightState {
    #[inline]
    pub fn is_on(self) -> bool {
        matches!(self, LightState::On)
    }

    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            LightState::On => LightState::Off,
            LightState::Off => LightState::On,
        }
    }
}

pub struct Dispatcher<A, C, D> {
    robot: A,
    chime: C,
    delay: D,
    profile: DriveProfile,
    lights: LightState,
}

impl<A: Actuators, C: Chime, D: DelayNs> Dispatcher<A, C, D> {
    /// Build a dispatcher with the default [`DriveProfile`]. Both headlights are switched on.
    pub fn new(robot: A, chime: C, delay: D) -> Self {
        Self::with_profile(robot, chime, delay, DriveProfile::default())
    }

    pub fn with_profile(mut robot: A, chime: C, delay: D, profile: DriveProfile) -> Self {
        robot.headlights(true);
        Self {
            robot,
            chime,
            delay,
            profile,
            lights: LightState::On,
        }
    }

    #[inline]
    pub fn lights(&self) -> LightState {
        self.lights
    }

    #[inline]
    pub fn profile(&self) -> &DriveProfile {
        &self.profile
    }

    /// Carry out one command. `None` does nothing.
    pub fn handle(&mut self, command: Option<Command>) {
        let Some(command) = command else {
            return;
        };
        debug!("dispatch: {:?}", command);

        if let Some(maneuver) = self.profile.maneuver(command) {
            self.run_maneuver(maneuver);
            return;
        }

        match command {
            Command::ToggleLights => {
                self.lights = self.lights.toggled();
                self.robot.headlights(self.lights.is_on());
                info!("dispatch: lights {:?}", self.lights);
            }
            Command::Chime => self.chime.chime(),
            _ => {}
        }
    }

    /// Decode a raw message and carry it out. Unrecognized messages are ignored.
    pub fn handle_message(&mut self, message: &[u8]) {
        self.handle(Command::from_message(message));
    }

    /// Poll `source` forever, dispatching each command as it arrives.
    pub fn run<S: CommandSource>(&mut self, source: &mut S) -> ! {
        info!("dispatch: ready");
        loop {
            let command = source.receive();
            self.handle(command);
        }
    }

    pub fn free(self) -> (A, C, D) {
        (self.robot, self.chime, self.delay)
    }

    fn run_maneuver(&mut self, maneuver: Maneuver) {
        if let Err(e) = self.robot.drive(maneuver.left, maneuver.right) {
            warn!("dispatch: drive failed: {:?}", e);
        }
        self.delay.delay_ms(maneuver.duration_ms);
        if let Err(e) = self.robot.drive(0, 0) {
            warn!("dispatch: stop failed: {:?}", e);
        }
    }
}
