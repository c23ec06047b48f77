// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Square-wave tone generator for the micro:bit v2 on-board speaker.
//!
//! Tones are bit-banged on a push-pull output with a blocking delay, so playing a melody holds the
//! caller for its full length.

use embedded_hal::{delay::DelayNs, digital::OutputPin};
use log::warn;

use crate::control::Chime;

/// One note of a melody. A frequency of 0 is a rest.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Note {
    pub freq_hz: u32,
    pub ticks: u32,
}

impl Note {
    pub const fn new(freq_hz: u32, ticks: u32) -> Self {
        Self { freq_hz, ticks }
    }

    pub const fn rest(ticks: u32) -> Self {
        Self { freq_hz: 0, ticks }
    }
}

/// A fixed sequence of notes played at a given tempo.
#[derive(Copy, Clone, Debug)]
pub struct Melody<'a> {
    pub notes: &'a [Note],
    pub bpm: u32,
    pub ticks_per_beat: u32,
}

impl Melody<'_> {
    /// Length of one tick in milliseconds.
    #[inline]
    pub fn tick_ms(&self) -> u32 {
        60_000 / (self.bpm * self.ticks_per_beat)
    }
}

/// B5 for one tick, then E6 for three.
pub const BA_DING: Melody<'static> = Melody {
    notes: &[Note::new(988, 1), Note::new(1319, 3)],
    bpm: 120,
    ticks_per_beat: 4,
};

/// Speaker on a digital output.
pub struct Speaker<PIN, D> {
    pin: PIN,
    delay: D,
}

impl<PIN: OutputPin, D: DelayNs> Speaker<PIN, D> {
    pub fn new(mut pin: PIN, delay: D) -> Self {
        pin.set_low().ok();
        Self { pin, delay }
    }

    /// Play a square wave at `freq_hz` for `duration_ms`. Whole cycles only; the line is left low.
    pub fn tone(&mut self, freq_hz: u32, duration_ms: u32) -> Result<(), PIN::Error> {
        if freq_hz == 0 {
            self.delay.delay_ms(duration_ms);
            return Ok(());
        }

        let half_period_us = 500_000 / freq_hz;
        if half_period_us == 0 {
            self.delay.delay_ms(duration_ms);
            return Ok(());
        }

        let cycles = duration_ms.saturating_mul(1000) / (2 * half_period_us);
        for _ in 0..cycles {
            self.pin.set_high()?;
            self.delay.delay_us(half_period_us);
            self.pin.set_low()?;
            self.delay.delay_us(half_period_us);
        }
        Ok(())
    }

    pub fn play(&mut self, melody: &Melody<'_>) -> Result<(), PIN::Error> {
        let tick_ms = melody.tick_ms();
        for note in melody.notes {
            self.tone(note.freq_hz, note.ticks * tick_ms)?;
        }
        Ok(())
    }

    pub fn free(self) -> (PIN, D) {
        (self.pin, self.delay)
    }
}

impl<PIN: OutputPin, D: DelayNs> Chime for Speaker<PIN, D> {
    /// Play [`BA_DING`].
    fn chime(&mut self) {
        if let Err(e) = self.play(&BA_DING) {
            warn!("speaker: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;
    use std::{cell::Cell, rc::Rc};

    struct Timeline {
        now_us: Cell<u64>,
        rising_edges: Cell<u32>,
    }

    struct Line(Rc<Timeline>);

    impl ErrorType for Line {
        type Error = Infallible;
    }

    impl OutputPin for Line {
        fn set_low(&mut self) -> Result<(), Infallible> {
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.0.rising_edges.set(self.0.rising_edges.get() + 1);
            Ok(())
        }
    }

    struct Clock(Rc<Timeline>);

    impl DelayNs for Clock {
        fn delay_ns(&mut self, ns: u32) {
            self.0.now_us.set(self.0.now_us.get() + u64::from(ns / 1000));
        }

        fn delay_us(&mut self, us: u32) {
            self.0.now_us.set(self.0.now_us.get() + u64::from(us));
        }

        fn delay_ms(&mut self, ms: u32) {
            self.0.now_us.set(self.0.now_us.get() + u64::from(ms) * 1000);
        }
    }

    fn speaker() -> (Speaker<Line, Clock>, Rc<Timeline>) {
        let timeline = Rc::new(Timeline {
            now_us: Cell::new(0),
            rising_edges: Cell::new(0),
        });
        let speaker = Speaker::new(Line(timeline.clone()), Clock(timeline.clone()));
        (speaker, timeline)
    }

    #[test]
    fn one_khz_for_ten_ms_is_ten_cycles() {
        let (mut speaker, t) = speaker();
        speaker.tone(1000, 10).unwrap();

        assert_eq!(t.rising_edges.get(), 10);
        assert_eq!(t.now_us.get(), 10_000);
    }

    #[test]
    fn rests_only_wait() {
        let (mut speaker, t) = speaker();
        speaker.tone(0, 125).unwrap();

        assert_eq!(t.rising_edges.get(), 0);
        assert_eq!(t.now_us.get(), 125_000);
    }

    #[test]
    fn ba_ding_plays_two_notes_over_half_a_second() {
        assert_eq!(BA_DING.tick_ms(), 125);

        let (mut speaker, t) = speaker();
        speaker.play(&BA_DING).unwrap();

        // 988 Hz: 506 µs half period, 123 cycles in 125 ms.
        // 1319 Hz: 379 µs half period, 494 cycles in 375 ms.
        assert_eq!(t.rising_edges.get(), 123 + 494);
        assert_eq!(t.now_us.get(), 123 * 1012 + 494 * 758);
    }

    #[test]
    fn chime_plays_ba_ding() {
        let (mut speaker, t) = speaker();
        speaker.chime();

        assert_eq!(t.rising_edges.get(), 123 + 494);
    }
}
