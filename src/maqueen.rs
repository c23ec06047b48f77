// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Hardware abstraction layer for the DFRobot Maqueen chassis.
//!
//! [`Maqueen`] owns every peripheral on the robot and exposes them as semantic operations:
//! headlights, the RGB strip, both gear motors, the servo headers, the line sensors and the
//! ultrasonic ranger. It is built once at startup and lives for the whole program.
//!
//! ```ignore
//! let mut robot = Maqueen::new(parts);
//!
//! robot.led_left(true);
//! robot.rgb_front_left(255, 0, 0)?;
//! robot.motor_left(150)?;
//! let cm = robot.ultrasound_measure();
//! ```

use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    i2c::I2c,
};
use log::info;
use smart_leds_trait::{SmartLedsWrite, RGB8};

use crate::control::Actuators;
use crate::drivers::{
    motor_board::{Servo, Side},
    rgb_strip::{Pixels, Position, PIXEL_COUNT},
    ultrasonic::RangeError,
    LineSensor, MotorBoard, RgbStrip, Ultrasonic,
};
use crate::hw::{Led, MicrosClock};

/// Raw peripherals handed to [`Maqueen::new`].
///
/// - `i2c`: bus with the motor/servo controller at `0x10`
/// - `led_left`, `led_right`: headlight outputs
/// - `line_left`, `line_right`: line sensor inputs
/// - `trigger`, `echo`: ultrasonic ranger lines
/// - `clock`: free-running microsecond clock for echo timing
/// - `delay`: blocking delay for the trigger pulse
/// - `rgb`: writer for the four-pixel strip
pub struct MaqueenParts<I2C, LL, LR, NL, NR, TRIG, ECHO, CLK, D, W> {
    pub i2c: I2C,
    pub led_left: LL,
    pub led_right: LR,
    pub line_left: NL,
    pub line_right: NR,
    pub trigger: TRIG,
    pub echo: ECHO,
    pub clock: CLK,
    pub delay: D,
    pub rgb: W,
}

/// The robot.
pub struct Maqueen<I2C, LL, LR, NL, NR, TRIG, ECHO, CLK, D, W>
where
    LL: OutputPin,
    LR: OutputPin,
{
    motors: MotorBoard<I2C>,
    led_left: Led<LL>,
    led_right: Led<LR>,
    line_left: LineSensor<NL>,
    line_right: LineSensor<NR>,
    ultrasonic: Ultrasonic<TRIG, ECHO, CLK, D>,
    rgb: RgbStrip<W>,
}

impl<I2C, LL, LR, NL, NR, TRIG, ECHO, CLK, D, W, E> Maqueen<I2C, LL, LR, NL, NR, TRIG, ECHO, CLK, D, W>
where
    I2C: I2c,
    LL: OutputPin,
    LR: OutputPin,
    NL: InputPin,
    NR: InputPin,
    TRIG: OutputPin<Error = E>,
    ECHO: InputPin<Error = E>,
    CLK: MicrosClock,
    D: DelayNs,
    W: SmartLedsWrite<Color = RGB8>,
{
    /// Take ownership of every peripheral. Headlights start off and the ultrasonic trigger is
    /// parked low.
    pub fn new(parts: MaqueenParts<I2C, LL, LR, NL, NR, TRIG, ECHO, CLK, D, W>) -> Self {
        let robot = Self {
            motors: MotorBoard::new(parts.i2c),
            led_left: Led::active_high(parts.led_left),
            led_right: Led::active_high(parts.led_right),
            line_left: LineSensor::new(parts.line_left),
            line_right: LineSensor::new(parts.line_right),
            ultrasonic: Ultrasonic::new(parts.trigger, parts.echo, parts.clock, parts.delay),
            rgb: RgbStrip::new(parts.rgb),
        };
        info!("maqueen: motor controller at {:#04x}", robot.motors.address());
        robot
    }

    // ----- Headlights -----

    pub fn led_left(&mut self, on: bool) {
        self.led_left.set(on);
    }

    pub fn led_right(&mut self, on: bool) {
        self.led_right.set(on);
    }

    #[inline]
    pub fn leds(&self) -> (bool, bool) {
        (self.led_left.is_on(), self.led_right.is_on())
    }

    // ----- RGB strip -----

    /// Set one pixel and refresh the whole strip.
    pub fn rgb(&mut self, position: Position, color: RGB8) -> Result<(), W::Error> {
        self.rgb.set(position, color)
    }

    pub fn rgb_front_left(&mut self, red: u8, green: u8, blue: u8) -> Result<(), W::Error> {
        self.rgb(Position::FrontLeft, RGB8::new(red, green, blue))
    }

    pub fn rgb_rear_left(&mut self, red: u8, green: u8, blue: u8) -> Result<(), W::Error> {
        self.rgb(Position::RearLeft, RGB8::new(red, green, blue))
    }

    pub fn rgb_rear_right(&mut self, red: u8, green: u8, blue: u8) -> Result<(), W::Error> {
        self.rgb(Position::RearRight, RGB8::new(red, green, blue))
    }

    pub fn rgb_front_right(&mut self, red: u8, green: u8, blue: u8) -> Result<(), W::Error> {
        self.rgb(Position::FrontRight, RGB8::new(red, green, blue))
    }

    pub fn rgb_all(&mut self, color: RGB8) -> Result<(), W::Error> {
        self.rgb.fill(color)
    }

    pub fn rgb_off(&mut self) -> Result<(), W::Error> {
        self.rgb.fill(RGB8::default())
    }

    /// Change several pixels and refresh the strip once.
    pub fn rgb_batch<F>(&mut self, f: F) -> Result<(), W::Error>
    where
        F: FnOnce(&mut Pixels<'_>),
    {
        self.rgb.batch(f)
    }

    #[inline]
    pub fn rgb_pixels(&self) -> &[RGB8; PIXEL_COUNT] {
        self.rgb.pixels()
    }

    // ----- Motors and servos -----

    /// Left motor, `-255` (full reverse) to `255` (full forward). Out-of-range speeds saturate.
    pub fn motor_left(&mut self, speed: i16) -> Result<(), I2C::Error> {
        self.motors.set_speed(Side::Left, speed)
    }

    /// Right motor, `-255` (full reverse) to `255` (full forward). Out-of-range speeds saturate.
    pub fn motor_right(&mut self, speed: i16) -> Result<(), I2C::Error> {
        self.motors.set_speed(Side::Right, speed)
    }

    pub fn stop(&mut self) -> Result<(), I2C::Error> {
        self.motors.stop()
    }

    /// Servo header 1, 0 to 180 degrees.
    pub fn servo_one(&mut self, angle_deg: u16) -> Result<(), I2C::Error> {
        self.motors.set_servo(Servo::One, angle_deg)
    }

    /// Servo header 2, 0 to 180 degrees.
    pub fn servo_two(&mut self, angle_deg: u16) -> Result<(), I2C::Error> {
        self.motors.set_servo(Servo::Two, angle_deg)
    }

    // ----- Sensors -----

    pub fn line_left(&mut self) -> Result<bool, NL::Error> {
        self.line_left.detected()
    }

    pub fn line_right(&mut self) -> Result<bool, NR::Error> {
        self.line_right.detected()
    }

    /// Range to the nearest obstacle in centimetres, `-1` if no echo started, `-2` if the echo
    /// never ended.
    pub fn ultrasound_measure(&mut self) -> i32 {
        self.ultrasonic.measure()
    }

    pub fn ultrasound_try_measure(&mut self) -> Result<u32, RangeError<E>> {
        self.ultrasonic.measure_cm()
    }
}

impl<I2C, LL, LR, NL, NR, TRIG, ECHO, CLK, D, W, E> Actuators
    for Maqueen<I2C, LL, LR, NL, NR, TRIG, ECHO, CLK, D, W>
where
    I2C: I2c,
    LL: OutputPin,
    LR: OutputPin,
    NL: InputPin,
    NR: InputPin,
    TRIG: OutputPin<Error = E>,
    ECHO: InputPin<Error = E>,
    CLK: MicrosClock,
    D: DelayNs,
    W: SmartLedsWrite<Color = RGB8>,
{
    type Error = I2C::Error;

    /// Both frames are always sent; the first failure is reported.
    fn drive(&mut self, left: i16, right: i16) -> Result<(), Self::Error> {
        let left = self.motor_left(left);
        let right = self.motor_right(right);
        left.and(right)
    }

    fn headlights(&mut self, on: bool) {
        self.led_left(on);
        self.led_right(on);
    }
}
