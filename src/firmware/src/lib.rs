//! PS/2 keyboard terminal firmware.
//!
//! Decodes a PS/2 keyboard, shows typed text on a 4x20 character LCD and
//! mirrors it to a host over a UART; text from the host is shown on the LCD.
//!
//! # Architecture
//!
//! - `keyboard`: bit receiver, scan-code tables, key-event dispatcher
//! - `screen`: cursor, line wrap and the scrollback buffer
//! - `output`: routing characters to the display and the UART
//! - `terminal`: the polling loop tying them together
//! - `config`: geometry, pins and policies
//! - `logger`: `log` backend
//!
//! Hardware is reached only through the `ps2term-hal` traits, so the whole
//! crate runs on a host against `ps2term-sim`.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub mod config;
pub mod keyboard;
pub mod logger;
pub mod output;
pub mod screen;
pub mod terminal;

pub use config::Config;
pub use terminal::{Peripherals, Terminal};
