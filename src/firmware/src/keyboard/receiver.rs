//! PS/2 bit receiver.
//!
//! The keyboard drives both lines. Each bit is valid while the clock is
//! low; the frame is one start bit (low), eight data bits least significant
//! first, one odd-parity bit and one stop bit (high).

use ps2term_common::FrameError;
use ps2term_hal::InputPin;

/// One received 11-bit frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Level of the start bit.
    pub start: bool,
    /// The eight data bits.
    pub data: u8,
    /// Level of the parity bit.
    pub parity: bool,
    /// Level of the stop bit.
    pub stop: bool,
}

impl Frame {
    /// Validate start, parity and stop bits and return the data byte.
    pub fn check(&self) -> Result<u8, FrameError> {
        if self.start {
            return Err(FrameError::MissingStartBit);
        }
        let ones = self.data.count_ones() + u32::from(self.parity);
        if ones % 2 == 0 {
            return Err(FrameError::ParityMismatch);
        }
        if !self.stop {
            return Err(FrameError::MissingStopBit);
        }
        Ok(self.data)
    }
}

/// Samples frames from a clock and a data line.
pub struct Ps2Receiver<C, D> {
    clock: C,
    data: D,
}

impl<C: InputPin, D: InputPin> Ps2Receiver<C, D> {
    /// Create a receiver on the given lines.
    pub fn new(clock: C, data: D) -> Self {
        Self { clock, data }
    }

    /// Non-blocking check for the start of a transfer.
    pub fn clock_low(&mut self) -> bool {
        self.clock.is_low()
    }

    /// Receive the rest of a frame whose start bit is on the lines now.
    ///
    /// Call right after [`clock_low`](Self::clock_low) returned `true`.
    /// Busy-waits on the clock for each remaining bit and never times out:
    /// once a keyboard starts a transfer it always finishes clocking it.
    pub fn receive_frame(&mut self) -> Frame {
        let start = self.data.is_high();
        self.wait_high();

        let mut data = 0u8;
        for _ in 0..8 {
            data >>= 1;
            if self.sample() {
                data |= 0x80;
            }
        }
        let parity = self.sample();
        let stop = self.sample();

        Frame {
            start,
            data,
            parity,
            stop,
        }
    }

    /// Read the data line on the next falling clock edge.
    fn sample(&mut self) -> bool {
        while self.clock.is_high() {
            core::hint::spin_loop();
        }
        let bit = self.data.is_high();
        self.wait_high();
        bit
    }

    fn wait_high(&mut self) {
        while self.clock.is_low() {
            core::hint::spin_loop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ps2term_sim::{encode_frame, Ps2Link};

    fn receive(link: &Ps2Link, rx: &mut Ps2Receiver<impl InputPin, impl InputPin>) -> Frame {
        assert!(rx.clock_low(), "no transfer started");
        let frame = rx.receive_frame();
        assert!(link.is_idle());
        frame
    }

    #[test]
    fn test_receive_scan_code() {
        let link = Ps2Link::new();
        let (clock, data) = link.pins();
        let mut rx = Ps2Receiver::new(clock, data);

        link.send(&[0x1C]);
        let frame = receive(&link, &mut rx);
        assert_eq!(frame.data, 0x1C);
        assert_eq!(frame.check(), Ok(0x1C));
    }

    #[test]
    fn test_receive_all_ones() {
        let link = Ps2Link::new();
        let (clock, data) = link.pins();
        let mut rx = Ps2Receiver::new(clock, data);

        link.send(&[0xFF]);
        let frame = receive(&link, &mut rx);
        assert_eq!(frame.data, 0xFF);
        assert!(frame.parity);
        assert!(frame.stop);
    }

    #[test]
    fn test_idle_link_has_no_transfer() {
        let link = Ps2Link::new();
        let (clock, data) = link.pins();
        let mut rx = Ps2Receiver::new(clock, data);
        assert!(!rx.clock_low());
    }

    #[test]
    fn test_bad_parity_still_yields_data() {
        let link = Ps2Link::new();
        let (clock, data) = link.pins();
        let mut rx = Ps2Receiver::new(clock, data);

        let mut bits = encode_frame(0x33);
        bits[9] = !bits[9];
        link.send_bits(bits);
        let frame = receive(&link, &mut rx);
        assert_eq!(frame.data, 0x33);
        assert_eq!(frame.check(), Err(FrameError::ParityMismatch));
    }

    #[test]
    fn test_check_start_and_stop() {
        let good = Frame {
            start: false,
            data: 0x00,
            parity: true,
            stop: true,
        };
        assert_eq!(good.check(), Ok(0));
        assert_eq!(
            Frame { start: true, ..good }.check(),
            Err(FrameError::MissingStartBit)
        );
        assert_eq!(
            Frame { stop: false, ..good }.check(),
            Err(FrameError::MissingStopBit)
        );
    }
}
