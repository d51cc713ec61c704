//! Scripted PS/2 keyboard link.
//!
//! A [`Ps2Link`] owns a queue of clock/data line levels. The clock pin
//! consumes one level per read, so a receiver that busy-waits on the clock
//! walks through the script edge by edge; the data pin reports the data
//! level that accompanied the most recent clock read. Once the script runs
//! out both lines idle high.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use ps2term_hal::InputPin;

#[derive(Debug)]
struct LinkState {
    levels: VecDeque<(bool, bool)>,
    data: bool,
}

/// Handle used by tests to queue frames on the simulated link.
#[derive(Debug, Clone)]
pub struct Ps2Link {
    state: Rc<RefCell<LinkState>>,
}

/// Clock line of a [`Ps2Link`].
#[derive(Debug)]
pub struct SimClockPin {
    state: Rc<RefCell<LinkState>>,
}

/// Data line of a [`Ps2Link`].
#[derive(Debug)]
pub struct SimDataPin {
    state: Rc<RefCell<LinkState>>,
}

/// Build the 11 line levels of a frame carrying `code`: start bit, eight
/// data bits least significant first, odd parity, stop bit.
pub fn encode_frame(code: u8) -> [bool; 11] {
    let mut bits = [false; 11];
    for (i, bit) in bits[1..9].iter_mut().enumerate() {
        *bit = code & (1 << i) != 0;
    }
    bits[9] = code.count_ones() % 2 == 0;
    bits[10] = true;
    bits
}

impl Ps2Link {
    /// Create an idle link with no frames queued.
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(LinkState {
                levels: VecDeque::new(),
                data: true,
            })),
        }
    }

    /// The clock and data pins to hand to the receiver.
    pub fn pins(&self) -> (SimClockPin, SimDataPin) {
        (
            SimClockPin {
                state: Rc::clone(&self.state),
            },
            SimDataPin {
                state: Rc::clone(&self.state),
            },
        )
    }

    /// Queue a well-formed frame for each scan code.
    pub fn send(&self, codes: &[u8]) {
        for &code in codes {
            log::trace!("ps2 sim: queue {:#04x}", code);
            self.send_bits(encode_frame(code));
        }
    }

    /// Queue an arbitrary 11-bit frame, for malformed-frame tests.
    pub fn send_bits(&self, bits: [bool; 11]) {
        let mut state = self.state.borrow_mut();
        for bit in bits {
            state.levels.push_back((false, bit));
            state.levels.push_back((true, bit));
        }
    }

    /// Number of line levels not yet consumed.
    pub fn pending(&self) -> usize {
        self.state.borrow().levels.len()
    }

    /// Whether every queued frame has been clocked out.
    pub fn is_idle(&self) -> bool {
        self.pending() == 0
    }
}

impl Default for Ps2Link {
    fn default() -> Self {
        Self::new()
    }
}

impl InputPin for SimClockPin {
    fn is_high(&mut self) -> bool {
        let mut state = self.state.borrow_mut();
        match state.levels.pop_front() {
            Some((clock, data)) => {
                state.data = data;
                clock
            }
            None => {
                state.data = true;
                true
            }
        }
    }
}

impl InputPin for SimDataPin {
    fn is_high(&mut self) -> bool {
        self.state.borrow().data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_frame_bits() {
        // 0x1C = 0b0001_1100, three ones so parity bit is 0.
        let bits = encode_frame(0x1C);
        assert!(!bits[0]);
        assert_eq!(
            &bits[1..9],
            &[false, false, true, true, true, false, false, false]
        );
        assert!(!bits[9]);
        assert!(bits[10]);
    }

    #[test]
    fn test_clock_walks_script() {
        let link = Ps2Link::new();
        let (mut clock, mut data) = link.pins();
        link.send(&[0xFF]);
        assert!(clock.is_low());
        assert!(data.is_low());
        assert!(clock.is_high());
        assert!(clock.is_low());
        assert!(data.is_high());
    }

    #[test]
    fn test_idle_link_reads_high() {
        let link = Ps2Link::new();
        let (mut clock, mut data) = link.pins();
        assert!(clock.is_high());
        assert!(data.is_high());
        assert!(link.is_idle());
    }
}
