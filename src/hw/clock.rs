// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Monotonic microsecond clock.
//!
//! The ultrasonic ranger timestamps echo edges against a free-running 1 MHz counter. Readings wrap
//! at `u32::MAX`; always compare them with `wrapping_sub`.

/// A free-running clock ticking once per microsecond.
pub trait MicrosClock {
    /// Current counter value in microseconds.
    fn now_us(&mut self) -> u32;

    /// Microseconds elapsed since `since`, tolerant of a single counter wrap.
    #[inline]
    fn elapsed_us(&mut self, since: u32) -> u32 {
        self.now_us().wrapping_sub(since)
    }
}

#[cfg(feature = "firmware")]
pub use timer_clock::TimerClock;

#[cfg(feature = "firmware")]
mod timer_clock {
    use super::MicrosClock;
    use microbit::hal::timer::{Instance, Periodic, Timer};

    /// nRF TIMER running in periodic mode over the full 32-bit range.
    pub struct TimerClock<T: Instance> {
        timer: Timer<T, Periodic>,
    }

    impl<T: Instance> TimerClock<T> {
        /// Start the counter. The nRF timers run at 1 MHz in the HAL's default configuration.
        pub fn new(timer: T) -> Self {
            let mut timer = Timer::periodic(timer);
            timer.start(u32::MAX);
            Self { timer }
        }
    }

    impl<T: Instance> MicrosClock for TimerClock<T> {
        #[inline]
        fn now_us(&mut self) -> u32 {
            self.timer.read()
        }
    }
}
