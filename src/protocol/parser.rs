// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Message framer for byte-stream command links.
//!
//! Messages on a serial link are terminated by `\n` or `\r` (so `\r\n` works as well). A finished
//! message is decoded with [`Command::from_message`]; anything else, including empty lines, is
//! dropped. Messages longer than [`MAX_MESSAGE_LEN`] are discarded whole.

use crate::protocol::messages::Command;

/// Longest message accepted, matching the radio payload size.
pub const MAX_MESSAGE_LEN: usize = 32;

enum State {
    Collecting,
    /// Buffer overflowed; skip until the next terminator.
    Discarding,
}

pub struct Parser {
    state: State,
    buf: [u8; MAX_MESSAGE_LEN],
    len: usize,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    pub fn new() -> Self {
        Self {
            state: State::Collecting,
            buf: [0; MAX_MESSAGE_LEN],
            len: 0,
        }
    }

    /// Drop any partial message.
    pub fn reset(&mut self) {
        self.state = State::Collecting;
        self.len = 0;
    }

    /// Process a single incoming byte. Returns `Some(Command)` when a terminator completes a
    /// recognized message.
    pub fn push(&mut self, byte: u8) -> Option<Command> {
        if byte == b'\n' || byte == b'\r' {
            let command = match self.state {
                State::Collecting => Command::from_message(&self.buf[..self.len]),
                State::Discarding => None,
            };
            self.reset();
            return command;
        }

        if let State::Collecting = self.state {
            if self.len < MAX_MESSAGE_LEN {
                self.buf[self.len] = byte;
                self.len += 1;
            } else {
                self.state = State::Discarding;
            }
        }
        None
    }
}
