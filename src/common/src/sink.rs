//! Output sink selection.

use bitflags::bitflags;

/// A single character sink the output router can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sink {
    /// The character LCD.
    Display,
    /// The host UART.
    Serial,
}

bitflags! {
    /// A set of sinks a character is routed to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Sinks: u8 {
        const DISPLAY = 1 << 0;
        const SERIAL  = 1 << 1;
    }
}

impl Sinks {
    /// Sinks in the order they are written: serial first, then display.
    pub fn in_write_order(self) -> impl Iterator<Item = Sink> {
        [(Sinks::SERIAL, Sink::Serial), (Sinks::DISPLAY, Sink::Display)]
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, sink)| sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_order_is_serial_first() {
        let mut order = Sinks::all().in_write_order();
        assert_eq!(order.next(), Some(Sink::Serial));
        assert_eq!(order.next(), Some(Sink::Display));
        assert_eq!(order.next(), None);
    }

    #[test]
    fn test_single_sink() {
        let mut order = Sinks::DISPLAY.in_write_order();
        assert_eq!(order.next(), Some(Sink::Display));
        assert_eq!(order.next(), None);
        assert_eq!(Sinks::empty().in_write_order().count(), 0);
    }
}
