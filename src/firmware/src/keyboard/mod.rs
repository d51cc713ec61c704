//! Keyboard path: bit receiver, scan-code tables and dispatcher.
//!
//! - `receiver`: samples 11-bit frames off the clock and data lines
//! - `scancode`: lookup tables and classification of raw codes
//! - `dispatch`: modifier tracking and key events

pub mod dispatch;
pub mod receiver;
pub mod scancode;

pub use dispatch::{Dispatcher, KeyEvent, Modifiers};
pub use receiver::{Frame, Ps2Receiver};
pub use scancode::{translate, Key};
