// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

pub mod clock;
pub mod led;

#[cfg(feature = "firmware")]
pub mod logger;
#[cfg(feature = "firmware")]
pub mod pins;

#[cfg(feature = "firmware")]
pub use clock::TimerClock;
pub use clock::MicrosClock;
pub use led::{ActiveLevel, Led};
