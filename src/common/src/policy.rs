//! Named policies for the situations the terminal does not treat as errors.
//!
//! Each enum's first variant is the behaviour of the legacy firmware.

/// What to do with a received frame before decoding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrameCheck {
    /// Use the eight data bits whatever the start, parity and stop bits were.
    #[default]
    AcceptUnchecked,
    /// Drop frames with a bad start bit, parity or stop bit.
    Strict,
}

/// What happens when the cursor passes the last cell of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverflowPolicy {
    /// Clear the display and start again at the top-left cell.
    #[default]
    ClearAndHome,
    /// Return to the top-left cell and overwrite, keeping old text visible.
    WrapToOrigin,
}

/// What a backspace does at the top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BackspacePolicy {
    /// Wrap to the last cell of the bottom row.
    #[default]
    WrapAround,
    /// Ignore the key.
    StopAtOrigin,
}

/// How the `0xF0` key-release prefix is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BreakCodePolicy {
    /// Swallow the prefix byte only; the released key's code that follows is
    /// processed like a key press.
    #[default]
    PrefixOnly,
    /// Swallow the prefix and the released key's code.
    SuppressReleased,
}

/// Line ending sent to the host when Enter is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineEnding {
    /// Carriage return.
    #[default]
    Cr,
    /// Line feed.
    Lf,
    /// Carriage return followed by line feed.
    CrLf,
}

impl LineEnding {
    /// The bytes sent on the wire.
    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            LineEnding::Cr => b"\r",
            LineEnding::Lf => b"\n",
            LineEnding::CrLf => b"\r\n",
        }
    }
}
