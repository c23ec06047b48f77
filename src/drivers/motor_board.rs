// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! DFRobot Maqueen motor and servo controller.
//!
//! The chassis carries a small co-processor at I2C address `0x10` that drives both gear motors and
//! the two servo headers. Every command is a single write transaction; the controller never
//! acknowledges beyond the I2C ACK, so nothing is read back.
//!
//! Frame layouts:
//! - motor: `[register, direction, magnitude]` (direction 1 = reverse)
//! - servo: `[register, angle]`

use embedded_hal::i2c::I2c;

/// Default 7-bit bus address of the motor controller.
pub const DEFAULT_I2C_ADDRESS: u8 = 0x10;

// Register addresses
pub mod reg {
    pub const MOTOR_LEFT: u8 = 0x00;
    pub const MOTOR_RIGHT: u8 = 0x02;
    pub const SERVO_1: u8 = 0x14;
    pub const SERVO_2: u8 = 0x15;
}

/// Largest speed magnitude the controller understands.
pub const MAX_SPEED: i16 = 255;

/// Largest servo angle in degrees.
pub const MAX_ANGLE: u16 = 180;

/// Which gear motor a frame addresses.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub fn register(self) -> u8 {
        match self {
            Side::Left => reg::MOTOR_LEFT,
            Side::Right => reg::MOTOR_RIGHT,
        }
    }
}

/// Servo header on the chassis.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Servo {
    One,
    Two,
}

impl Servo {
    #[inline]
    pub fn register(self) -> u8 {
        match self {
            Servo::One => reg::SERVO_1,
            Servo::Two => reg::SERVO_2,
        }
    }
}

/// Rotation direction as encoded on the wire.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum Direction {
    Forward = 0,
    Reverse = 1,
}

/// One encoded motor command.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct MotorFrame {
    pub side: Side,
    pub direction: Direction,
    pub magnitude: u8,
}

impl MotorFrame {
    /// Encode a signed speed. Speeds outside `[-255, 255]` saturate to the nearest end.
    pub fn new(side: Side, speed: i16) -> Self {
        let speed = speed.clamp(-MAX_SPEED, MAX_SPEED);
        let direction = if speed < 0 {
            Direction::Reverse
        } else {
            Direction::Forward
        };

        Self {
            side,
            direction,
            magnitude: speed.unsigned_abs() as u8,
        }
    }

    #[inline]
    pub fn to_bytes(&self) -> [u8; 3] {
        [self.side.register(), self.direction as u8, self.magnitude]
    }
}

/// Encode a servo frame. Angles above 180° saturate.
#[inline]
pub fn servo_frame(servo: Servo, angle_deg: u16) -> [u8; 2] {
    [servo.register(), angle_deg.min(MAX_ANGLE) as u8]
}

/// Motor controller bound to an I2C bus.
pub struct MotorBoard<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> MotorBoard<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self::new_with_address(i2c, DEFAULT_I2C_ADDRESS)
    }

    pub fn new_with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Set one motor's signed speed in `[-255, 255]`. Negative runs the motor in reverse.
    pub fn set_speed(&mut self, side: Side, speed: i16) -> Result<(), I2C::Error> {
        let frame = MotorFrame::new(side, speed);
        self.i2c.write(self.address, &frame.to_bytes())
    }

    /// Zero both motors, left first.
    pub fn stop(&mut self) -> Result<(), I2C::Error> {
        self.set_speed(Side::Left, 0)?;
        self.set_speed(Side::Right, 0)
    }

    /// Move a servo to `angle_deg` (0 to 180).
    pub fn set_servo(&mut self, servo: Servo, angle_deg: u16) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &servo_frame(servo, angle_deg))
    }

    #[inline]
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the I2C bus.
    pub fn free(self) -> I2C {
        self.i2c
    }
}
