//! Loopback-free UART model.

use std::collections::VecDeque;

use ps2term_hal::Serial;

/// A UART whose receive side is scripted and whose transmit side is logged.
#[derive(Debug, Default)]
pub struct SimSerial {
    rx: VecDeque<u8>,
    tx: Vec<u8>,
}

impl SimSerial {
    /// Create an idle UART.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue bytes as if the host had sent them.
    pub fn push_rx(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes);
    }

    /// Bytes still waiting to be read by the firmware.
    pub fn pending_rx(&self) -> usize {
        self.rx.len()
    }

    /// Everything the firmware transmitted so far.
    pub fn sent(&self) -> &[u8] {
        &self.tx
    }

    /// Drain the transmit log.
    pub fn take_sent(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.tx)
    }
}

impl Serial for SimSerial {
    fn write_byte(&mut self, byte: u8) {
        self.tx.push(byte);
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.rx.pop_front()
    }
}
