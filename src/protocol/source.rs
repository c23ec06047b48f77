// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Where commands come from.
//!
//! The radio bridge forwards each received payload as one line on the serial link, so the robot
//! only has to read bytes and frame them with a [`Parser`].

use embedded_hal_nb::serial::Read;
use log::{debug, warn};

use crate::protocol::{Command, Parser};

/// A non-blocking supply of decoded commands.
pub trait CommandSource {
    /// Return the next complete command, or `None` if nothing is ready yet.
    fn receive(&mut self) -> Option<Command>;
}

/// Commands framed from a serial receiver.
pub struct SerialSource<R> {
    rx: R,
    parser: Parser,
}

impl<R: Read<u8>> SerialSource<R> {
    pub fn new(rx: R) -> Self {
        Self {
            rx,
            parser: Parser::new(),
        }
    }

    pub fn free(self) -> R {
        self.rx
    }
}

impl<R: Read<u8>> CommandSource for SerialSource<R> {
    /// Drain the receiver until a command completes or no byte is pending. A receive error
    /// drops the partial message.
    fn receive(&mut self) -> Option<Command> {
        loop {
            match self.rx.read() {
                Ok(byte) => {
                    if let Some(command) = self.parser.push(byte) {
                        debug!("source: {:?}", command);
                        return Some(command);
                    }
                }
                Err(nb::Error::WouldBlock) => return None,
                Err(nb::Error::Other(e)) => {
                    warn!("source: serial error {:?}", e);
                    self.parser.reset();
                    return None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::serial::{Mock, Transaction};
    use embedded_hal_nb::serial::ErrorKind;

    #[test]
    fn returns_none_until_a_line_completes() {
        let expectations = [
            Transaction::read(b'w'),
            Transaction::read_error(nb::Error::WouldBlock),
            Transaction::read(b'\n'),
        ];
        let mut source = SerialSource::new(Mock::new(&expectations));

        assert_eq!(source.receive(), None);
        assert_eq!(source.receive(), Some(Command::Forward));

        source.free().done();
    }

    #[test]
    fn stops_at_the_first_complete_command() {
        let expectations = [
            Transaction::read_many(b"e\n"),
            Transaction::read_many(b"q\n"),
        ];
        let mut source = SerialSource::new(Mock::new(&expectations));

        assert_eq!(source.receive(), Some(Command::ToggleLights));
        assert_eq!(source.receive(), Some(Command::Chime));

        source.free().done();
    }

    #[test]
    fn receive_error_drops_the_partial_message() {
        let expectations = [
            Transaction::read(b'w'),
            Transaction::read_error(nb::Error::Other(ErrorKind::Overrun)),
            Transaction::read_many(b"\ns\n"),
        ];
        let mut source = SerialSource::new(Mock::new(&expectations));

        assert_eq!(source.receive(), None);
        // The stray terminator ends an empty message; the next line is intact.
        assert_eq!(source.receive(), Some(Command::Back));

        source.free().done();
    }
}
