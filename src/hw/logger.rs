// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! `log` backend printing over RTT.
//!
//! To read the log on the host, attach a probe and run
//! ```text
//! $ probe-rs attach --chip nRF52833_xxAA target/thumbv7em-none-eabihf/release/maqueen
//! ```

use log::{LevelFilter, Log, Metadata, Record};
use rtt_target::{rprintln, rtt_init_print};

struct RttLogger;

static LOGGER: RttLogger = RttLogger;

impl Log for RttLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            rprintln!("[{}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Set up the RTT up-channel and install the logger. Call once, before anything logs.
pub fn init(level: LevelFilter) {
    rtt_init_print!();
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
