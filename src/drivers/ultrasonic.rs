// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Trigger/echo ultrasonic ranger (HC-SR04 style, as fitted to the Maqueen).
//!
//! A measurement is:
//! 1. a 10 µs high pulse on the trigger line,
//! 2. a busy-wait for the echo line to rise, bounded to 5 ms from the start of the wait,
//! 3. a busy-wait for the echo line to fall, bounded to 5 ms from the rising edge,
//! 4. the echo width in µs divided by 58, truncated.
//!
//! The two windows are anchored differently: the second one starts at the rising-edge
//! timestamp, not at the start of its own wait. Both timestamps are taken before the pin is
//! sampled.

use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
};

use crate::hw::MicrosClock;

/// Width of the trigger pulse.
pub const TRIGGER_PULSE_US: u32 = 10;

/// Bound on each of the two echo waits.
pub const ECHO_TIMEOUT_US: u32 = 5000;

/// Round-trip echo time per centimetre of range.
pub const US_PER_CM: u32 = 58;

/// Sentinel for "echo never started".
pub const NO_ECHO: i32 = -1;

/// Sentinel for "echo never ended".
pub const ECHO_TIMEOUT: i32 = -2;

/// Ranging failure.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RangeError<E> {
    /// The echo line did not rise within the first window.
    NoEcho,
    /// The echo line rose but did not fall within the second window.
    EchoTimeout,
    /// Pin fault while firing the trigger or waiting for the rising edge.
    ArmFault(E),
    /// Pin fault while timing the echo pulse.
    PulseFault(E),
}

impl<E> RangeError<E> {
    /// Integer sentinel for this failure: -1 before the echo began, -2 after.
    pub fn code(&self) -> i32 {
        match self {
            RangeError::NoEcho | RangeError::ArmFault(_) => NO_ECHO,
            RangeError::EchoTimeout | RangeError::PulseFault(_) => ECHO_TIMEOUT,
        }
    }
}

/// Ultrasonic ranger on a trigger output and an echo input.
pub struct Ultrasonic<TRIG, ECHO, CLK, D> {
    trigger: TRIG,
    echo: ECHO,
    clock: CLK,
    delay: D,
}

impl<TRIG, ECHO, CLK, D, E> Ultrasonic<TRIG, ECHO, CLK, D>
where
    TRIG: OutputPin<Error = E>,
    ECHO: InputPin<Error = E>,
    CLK: MicrosClock,
    D: DelayNs,
{
    /// Take ownership of the lines and park the trigger low.
    pub fn new(mut trigger: TRIG, echo: ECHO, clock: CLK, delay: D) -> Self {
        trigger.set_low().ok();
        Self {
            trigger,
            echo,
            clock,
            delay,
        }
    }

    /// Run one measurement and return the range in whole centimetres.
    pub fn measure_cm(&mut self) -> Result<u32, RangeError<E>> {
        self.trigger.set_high().map_err(RangeError::ArmFault)?;
        self.delay.delay_us(TRIGGER_PULSE_US);
        self.trigger.set_low().map_err(RangeError::ArmFault)?;

        let wait_start = self.clock.now_us();
        let pulse_begin = loop {
            let now = self.clock.now_us();
            if self.echo.is_high().map_err(RangeError::ArmFault)? {
                break now;
            }
            if now.wrapping_sub(wait_start) > ECHO_TIMEOUT_US {
                return Err(RangeError::NoEcho);
            }
        };

        let pulse_end = loop {
            let now = self.clock.now_us();
            if self.echo.is_low().map_err(RangeError::PulseFault)? {
                break now;
            }
            if now.wrapping_sub(pulse_begin) > ECHO_TIMEOUT_US {
                return Err(RangeError::EchoTimeout);
            }
        };

        Ok(pulse_end.wrapping_sub(pulse_begin) / US_PER_CM)
    }

    /// Run one measurement and fold failures into the integer sentinels.
    pub fn measure(&mut self) -> i32 {
        match self.measure_cm() {
            Ok(cm) => cm as i32,
            Err(e) => e.code(),
        }
    }

    pub fn free(self) -> (TRIG, ECHO, CLK, D) {
        (self.trigger, self.echo, self.clock, self.delay)
    }
}
