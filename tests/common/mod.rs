// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Recording fakes sharing one timeline, so tests can check the order of bus writes, pin changes
//! and delays across the whole robot.

#![allow(dead_code)]

use std::{
    cell::{Cell, RefCell},
    convert::Infallible,
    rc::Rc,
};

use embedded_hal::{
    delay::DelayNs,
    digital::{self, InputPin, OutputPin},
    i2c::{self, I2c, Operation},
};
use maqueen::{control::Chime, Maqueen, MaqueenParts};
use smart_leds_trait::{SmartLedsWrite, RGB8};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    I2cWrite(u8, Vec<u8>),
    Pin(&'static str, bool),
    DelayMs(u32),
    Rgb(Vec<RGB8>),
    Chime,
}

#[derive(Default)]
pub struct Timeline {
    events: RefCell<Vec<Event>>,
    now_us: Cell<u32>,
}

impl Timeline {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn push(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    pub fn i2c_writes(&self) -> Vec<Vec<u8>> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::I2cWrite(_, bytes) => Some(bytes.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn now_us(&self) -> u32 {
        self.now_us.get()
    }
}

pub struct Bus(pub Rc<Timeline>);

impl i2c::ErrorType for Bus {
    type Error = i2c::ErrorKind;
}

impl I2c for Bus {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        for op in operations {
            match op {
                Operation::Write(bytes) => self.0.push(Event::I2cWrite(address, bytes.to_vec())),
                Operation::Read(_) => return Err(i2c::ErrorKind::Other),
            }
        }
        Ok(())
    }
}

pub struct Output(pub &'static str, pub Rc<Timeline>);

impl digital::ErrorType for Output {
    type Error = Infallible;
}

impl OutputPin for Output {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.1.push(Event::Pin(self.0, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.1.push(Event::Pin(self.0, true));
        Ok(())
    }
}

/// Input with a level fixed by the test.
pub struct Level(pub Rc<Cell<bool>>);

impl digital::ErrorType for Level {
    type Error = Infallible;
}

impl InputPin for Level {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.0.get())
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.0.get())
    }
}

/// Echo line that is high between `rise_at` and `fall_at` on the timeline clock.
pub struct Echo {
    pub timeline: Rc<Timeline>,
    pub rise_at: Option<u32>,
    pub fall_at: Option<u32>,
}

impl Echo {
    fn level(&self) -> bool {
        let now = self.timeline.now_us();
        let risen = self.rise_at.is_some_and(|t| now >= t);
        let fallen = self.fall_at.is_some_and(|t| now >= t);
        risen && !fallen
    }
}

impl digital::ErrorType for Echo {
    type Error = Infallible;
}

impl InputPin for Echo {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.level())
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.level())
    }
}

/// Timeline clock; every reading advances it by one microsecond.
pub struct Clock(pub Rc<Timeline>);

impl maqueen::hw::MicrosClock for Clock {
    fn now_us(&mut self) -> u32 {
        let now = self.0.now_us.get();
        self.0.now_us.set(now.wrapping_add(1));
        now
    }
}

/// Delay that advances the timeline clock. Millisecond delays are also recorded.
pub struct Delay(pub Rc<Timeline>);

impl Delay {
    fn advance(&self, us: u32) {
        self.0.now_us.set(self.0.now_us.get().wrapping_add(us));
    }
}

impl DelayNs for Delay {
    fn delay_ns(&mut self, ns: u32) {
        self.advance(ns / 1000);
    }

    fn delay_us(&mut self, us: u32) {
        self.advance(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.push(Event::DelayMs(ms));
        self.advance(ms.saturating_mul(1000));
    }
}

pub struct Strip(pub Rc<Timeline>);

impl SmartLedsWrite for Strip {
    type Error = Infallible;
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Infallible>
    where
        T: IntoIterator<Item = I>,
        I: Into<RGB8>,
    {
        self.0
            .push(Event::Rgb(iterator.into_iter().map(Into::into).collect()));
        Ok(())
    }
}

pub struct Bell(pub Rc<Timeline>);

impl Chime for Bell {
    fn chime(&mut self) {
        self.0.push(Event::Chime);
    }
}

pub type Robot = Maqueen<Bus, Output, Output, Level, Level, Output, Echo, Clock, Delay, Strip>;

/// Handles the test keeps after the robot takes the peripherals.
pub struct Rig {
    pub timeline: Rc<Timeline>,
    pub line_left: Rc<Cell<bool>>,
    pub line_right: Rc<Cell<bool>>,
}

/// Build a robot on a fresh timeline. The echo edges are absolute timeline times.
pub fn robot(rise_at: Option<u32>, fall_at: Option<u32>) -> (Robot, Rig) {
    let timeline = Timeline::new();
    let line_left = Rc::new(Cell::new(false));
    let line_right = Rc::new(Cell::new(false));

    let robot = Maqueen::new(MaqueenParts {
        i2c: Bus(timeline.clone()),
        led_left: Output("led_left", timeline.clone()),
        led_right: Output("led_right", timeline.clone()),
        line_left: Level(line_left.clone()),
        line_right: Level(line_right.clone()),
        trigger: Output("trigger", timeline.clone()),
        echo: Echo {
            timeline: timeline.clone(),
            rise_at,
            fall_at,
        },
        clock: Clock(timeline.clone()),
        delay: Delay(timeline.clone()),
        rgb: Strip(timeline.clone()),
    });

    let rig = Rig {
        timeline,
        line_left,
        line_right,
    };
    (robot, rig)
}
