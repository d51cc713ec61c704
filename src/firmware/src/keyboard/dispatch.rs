//! Key-event dispatcher.
//!
//! Turns a stream of raw scan codes into [`KeyEvent`]s, tracking the shift
//! and caps-lock state along the way. It performs no I/O itself.

use bitflags::bitflags;
use ps2term_common::BreakCodePolicy;

use super::scancode::{self, Key, LINE_FEED};

bitflags! {
    /// Modifier state owned by the dispatcher.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        /// One-shot shift: consumed by the next resolved character.
        const SHIFT     = 1 << 0;
        /// Caps lock: toggled, persists.
        const CAPS_LOCK = 1 << 1;
    }
}

/// What a scan code asks the terminal to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// Nothing: release prefixes, suppressed releases.
    Ignored,
    /// Shift or caps lock changed state.
    ModifierChanged(Modifiers),
    /// Print the cursor column on the display.
    ShowColumn,
    /// Dump the scrollback buffer to the display.
    RecallScreen,
    /// Clear the display.
    ClearScreen,
    /// Erase one cell; carries the byte to send to the host.
    Backspace(u8),
    /// Enter key.
    Enter,
    /// A printable character.
    Printable(u8),
    /// A control character (function-key substitutes, tab, escape).
    Control(u8),
}

/// Scan-code state machine.
#[derive(Debug, Default)]
pub struct Dispatcher {
    modifiers: Modifiers,
    break_codes: BreakCodePolicy,
    releasing: bool,
}

impl Dispatcher {
    /// Create a dispatcher with no modifiers active.
    pub fn new(break_codes: BreakCodePolicy) -> Self {
        Self {
            modifiers: Modifiers::empty(),
            break_codes,
            releasing: false,
        }
    }

    /// Current modifier state.
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Process one raw scan code.
    pub fn dispatch(&mut self, code: u8) -> KeyEvent {
        if self.releasing {
            self.releasing = false;
            log::trace!("released {:#04x}", code);
            return KeyEvent::Ignored;
        }

        match Key::classify(code) {
            Key::Release => {
                self.releasing = self.break_codes == BreakCodePolicy::SuppressReleased;
                KeyEvent::Ignored
            }
            Key::ShowColumn => KeyEvent::ShowColumn,
            Key::RecallScreen => KeyEvent::RecallScreen,
            Key::ClearScreen => KeyEvent::ClearScreen,
            Key::Shift => {
                self.modifiers.insert(Modifiers::SHIFT);
                KeyEvent::ModifierChanged(self.modifiers)
            }
            Key::CapsLock => {
                self.modifiers.toggle(Modifiers::CAPS_LOCK);
                log::debug!(
                    "caps lock {}",
                    if self.modifiers.contains(Modifiers::CAPS_LOCK) { "on" } else { "off" }
                );
                KeyEvent::ModifierChanged(self.modifiers)
            }
            Key::Backspace => KeyEvent::Backspace(scancode::translate(code, false)),
            Key::Other(code) => {
                let shifted = !self.modifiers.is_empty();
                self.modifiers.remove(Modifiers::SHIFT);
                match scancode::translate(code, shifted) {
                    LINE_FEED => KeyEvent::Enter,
                    c if c < 0x20 => KeyEvent::Control(c),
                    c => KeyEvent::Printable(c),
                }
            }
        }
    }
}
