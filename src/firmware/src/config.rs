//! Terminal configuration.
//!
//! [`Config::default`] reproduces the legacy firmware except where it
//! contradicts itself; [`Config::legacy`] also reproduces those
//! contradictions (see [`Quirks`]).

use ps2term_common::{BackspacePolicy, BreakCodePolicy, FrameCheck, LineEnding, OverflowPolicy};

/// Display height in rows.
pub const LCD_ROWS: usize = 4;

/// Display width in columns.
pub const LCD_COLS: usize = 20;

/// Host UART baud rate.
pub const BAUD_RATE: u32 = 9600;

/// Pause after each received frame, in milliseconds.
pub const SETTLE_MS: u32 = 10;

/// Column at which the legacy keyboard path wrapped, past the display edge.
pub const LEGACY_KEYBOARD_WRAP_COLUMN: usize = 30;

/// Display instruction: display on, underline cursor, blinking.
pub const LCD_CURSOR_BLINK: u8 = 0x0F;

/// Display instruction: shift the cursor one cell left.
pub const LCD_CURSOR_LEFT: u8 = 0x10;

/// A GPIO line, as named on the microcontroller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PinId {
    /// Port letter.
    pub port: char,
    /// Bit within the port.
    pub bit: u8,
}

/// Keyboard clock line.
pub const CLOCK_PIN: PinId = PinId { port: 'B', bit: 2 };

/// Keyboard data line.
pub const DATA_PIN: PinId = PinId { port: 'C', bit: 1 };

/// Which cell a placed character is recorded under in the scrollback buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollbackIndex {
    /// The cell the character was written to.
    #[default]
    WrittenCell,
    /// The cursor position after advancing past it.
    AdvancedCursor,
}

/// Inconsistencies of the legacy firmware, each selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quirks {
    /// Column at which keyboard-typed text wraps. Host text always wraps at
    /// the display width.
    pub keyboard_wrap_column: usize,
    /// Whether F10 also resets row, column and address, not just the display.
    pub full_clear_resets_cursor: bool,
    /// Where placed characters are recorded in the scrollback buffer.
    pub scrollback_index: ScrollbackIndex,
}

impl Quirks {
    /// Consistent behaviour: one wrap column, full reset, written cell.
    pub const fn corrected() -> Self {
        Self {
            keyboard_wrap_column: LCD_COLS,
            full_clear_resets_cursor: true,
            scrollback_index: ScrollbackIndex::WrittenCell,
        }
    }

    /// Behaviour of the legacy firmware.
    pub const fn legacy() -> Self {
        Self {
            keyboard_wrap_column: LEGACY_KEYBOARD_WRAP_COLUMN,
            full_clear_resets_cursor: false,
            scrollback_index: ScrollbackIndex::AdvancedCursor,
        }
    }
}

impl Default for Quirks {
    fn default() -> Self {
        Self::corrected()
    }
}

/// Complete terminal configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Host UART baud rate, for the board glue.
    pub baud_rate: u32,
    /// Keyboard clock line, for the board glue.
    pub clock_pin: PinId,
    /// Keyboard data line, for the board glue.
    pub data_pin: PinId,
    /// Pause after each received frame.
    pub settle_ms: u32,
    /// What Enter sends to the host.
    pub line_ending: LineEnding,
    /// Frame validation.
    pub frame_check: FrameCheck,
    /// Screen-full behaviour.
    pub on_overflow: OverflowPolicy,
    /// Backspace-at-origin behaviour.
    pub on_backspace: BackspacePolicy,
    /// Key-release handling.
    pub break_codes: BreakCodePolicy,
    /// Reference inconsistencies.
    pub quirks: Quirks,
}

impl Config {
    /// Reference configuration with every quirk reproduced.
    pub fn legacy() -> Self {
        Self {
            quirks: Quirks::legacy(),
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            baud_rate: BAUD_RATE,
            clock_pin: CLOCK_PIN,
            data_pin: DATA_PIN,
            settle_ms: SETTLE_MS,
            line_ending: LineEnding::default(),
            frame_check: FrameCheck::default(),
            on_overflow: OverflowPolicy::default(),
            on_backspace: BackspacePolicy::default(),
            break_codes: BreakCodePolicy::default(),
            quirks: Quirks::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keeps_legacy_policies() {
        let config = Config::default();
        assert_eq!(config.baud_rate, 9600);
        assert_eq!(config.settle_ms, 10);
        assert_eq!(config.line_ending, LineEnding::Cr);
        assert_eq!(config.frame_check, FrameCheck::AcceptUnchecked);
        assert_eq!(config.on_overflow, OverflowPolicy::ClearAndHome);
        assert_eq!(config.on_backspace, BackspacePolicy::WrapAround);
        assert_eq!(config.break_codes, BreakCodePolicy::PrefixOnly);
        assert_eq!(config.quirks.keyboard_wrap_column, LCD_COLS);
    }

    #[test]
    fn test_legacy_only_changes_quirks() {
        let legacy = Config::legacy();
        assert_eq!(legacy.quirks, Quirks::legacy());
        assert_eq!(
            Config {
                quirks: Quirks::corrected(),
                ..legacy
            },
            Config::default()
        );
    }
}
