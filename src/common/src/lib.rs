//! Types shared between the terminal firmware, its HAL and its simulator.

#![cfg_attr(not(test), no_std)]

pub mod error;
pub mod policy;
pub mod sink;

pub use error::FrameError;
pub use policy::{BackspacePolicy, BreakCodePolicy, FrameCheck, LineEnding, OverflowPolicy};
pub use sink::{Sink, Sinks};
