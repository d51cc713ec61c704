//! Simulated peripherals for the PS/2 terminal.
//!
//! Every type here implements one of the `ps2term-hal` traits in plain
//! memory so the firmware can be driven from host tests:
//!
//! - [`SimLcd`]: a character LCD that records cells, cursor and commands
//! - [`SimSerial`]: a UART with a scripted receive queue and a transmit log
//! - [`Ps2Link`]: a keyboard that clocks out scripted 11-bit frames
//! - [`SimDelay`]: a delay that only counts milliseconds

pub mod delay;
pub mod lcd;
pub mod ps2;
pub mod serial;

pub use delay::SimDelay;
pub use lcd::SimLcd;
pub use ps2::{encode_frame, Ps2Link, SimClockPin, SimDataPin};
pub use serial::SimSerial;
