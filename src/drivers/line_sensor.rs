// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Reflective line sensor on a single digital input.

use embedded_hal::digital::InputPin;

/// One IR line sensor. The Maqueen sensor module drives its output high over a line.
pub struct LineSensor<PIN> {
    pin: PIN,
}

impl<PIN: InputPin> LineSensor<PIN> {
    pub fn new(pin: PIN) -> Self {
        Self { pin }
    }

    /// Whether the sensor currently sees the line.
    #[inline]
    pub fn detected(&mut self) -> Result<bool, PIN::Error> {
        self.pin.is_high()
    }

    pub fn free(self) -> PIN {
        self.pin
    }
}
