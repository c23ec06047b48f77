// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Command Protocol
//!
//! - [`messages`] - single-character command alphabet
//! - [`parser`] - line framing for byte streams
//! - [`source`] - command sources feeding the dispatcher

pub mod messages;
pub mod parser;
pub mod source;

pub use messages::Command;
pub use parser::{Parser, MAX_MESSAGE_LEN};
pub use source::{CommandSource, SerialSource};
