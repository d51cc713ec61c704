//! Scan code set 2 lookup tables and key classification.
//!
//! Codes are single bytes; extended (`0xE0`-prefixed) keys are not decoded
//! and fall through to the placeholder like any other unmapped code.

/// Character returned for codes with no mapping.
pub const PLACEHOLDER: u8 = b'0';

/// Number of entries in each table (`0x00..=0x83`).
pub const TABLE_LEN: usize = 0x84;

/// Prefix sent before the code of a released key.
pub const RELEASE_PREFIX: u8 = 0xF0;
/// F7: print the cursor column.
pub const F7: u8 = 0x83;
/// F9: recall the previous screen.
pub const F9: u8 = 0x01;
/// F10: clear the screen.
pub const F10: u8 = 0x09;
/// Left shift.
pub const LEFT_SHIFT: u8 = 0x12;
/// Right shift.
pub const RIGHT_SHIFT: u8 = 0x59;
/// Caps lock.
pub const CAPS_LOCK: u8 = 0x58;
/// Backspace.
pub const BACKSPACE: u8 = 0x66;

/// Line feed, what the Enter key resolves to.
pub const LINE_FEED: u8 = 0x0A;

const P: u8 = PLACEHOLDER;

// F1..F3 and F5 stand in for ctrl+D (EOT), ctrl+Z (SUB), ctrl+C (ETX) and
// ctrl+X (CAN); Enter is LF, backspace BS, escape ESC.
#[rustfmt::skip]
static UNSHIFTED: [u8; TABLE_LEN] = [
    // 0x00
    P,    P,    P,    0x18, 0x03, 0x04, 0x1A, P,    P,    P,    P,    P,    P,    b'\t', b'`', P,
    // 0x10
    P,    P,    P,    P,    P,    b'q', b'1', P,    P,    P,    b'z', b's', b'a', b'w', b'2', P,
    // 0x20
    P,    b'c', b'x', b'd', b'e', b'4', b'3', P,    P,    b' ', b'v', b'f', b't', b'r', b'5', P,
    // 0x30
    P,    b'n', b'b', b'h', b'g', b'y', b'6', P,    P,    b',', b'm', b'j', b'u', b'7', b'8', P,
    // 0x40
    P,    b',', b'k', b'i', b'o', b'0', b'9', P,    P,    b'.', b'/', b'l', b';', b'p', b'-', P,
    // 0x50
    P,    P,    b'\'', P,   b'[', b'=', P,    P,    P,    P,    0x0A, b']', P,    b'\\', P,   P,
    // 0x60
    P,    b'<', P,    P,    P,    P,    0x08, P,    P,    b'1', P,    b'4', b'7', P,    P,    P,
    // 0x70
    b'0', b'.', b'2', b'5', b'6', b'8', 0x1B, P,    P,    b'+', b'3', b'-', b'*', b'9', P,    P,
    // 0x80
    P,    P,    P,    P,
];

#[rustfmt::skip]
static SHIFTED: [u8; TABLE_LEN] = [
    // 0x00
    P,    P,    P,    0x18, 0x03, 0x04, 0x1A, P,    P,    P,    P,    P,    P,    b'\t', b'~', P,
    // 0x10
    P,    P,    P,    P,    P,    b'Q', b'!', P,    P,    P,    b'Z', b'S', b'A', b'W', b'@', P,
    // 0x20
    P,    b'C', b'X', b'D', b'E', b'$', b'#', P,    P,    b' ', b'V', b'F', b'T', b'R', b'%', P,
    // 0x30
    P,    b'N', b'B', b'H', b'G', b'Y', b'^', P,    P,    b',', b'M', b'J', b'U', b'&', b'*', P,
    // 0x40
    P,    b'<', b'K', b'I', b'O', b')', b'(', P,    P,    b'>', b'?', b'L', b':', b'P', b'_', P,
    // 0x50
    P,    P,    b'"', P,    b'{', b'+', P,    P,    P,    P,    0x0A, b'}', P,    b'|', P,    P,
    // 0x60
    P,    b'<', P,    P,    P,    P,    0x08, P,    P,    b'1', P,    b'4', b'7', P,    P,    P,
    // 0x70
    b'0', b'.', b'2', b'5', b'6', b'8', 0x1B, P,    P,    b'+', b'3', b'-', b'*', b'9', P,    P,
    // 0x80
    P,    P,    P,    P,
];

/// Resolve `code` to a character through the shifted or unshifted table.
///
/// Pure lookup. Codes past the end of the tables resolve to [`PLACEHOLDER`].
pub fn translate(code: u8, shifted: bool) -> u8 {
    let table = if shifted { &SHIFTED } else { &UNSHIFTED };
    table.get(usize::from(code)).copied().unwrap_or(PLACEHOLDER)
}

/// A scan code classified by the action it triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// The `0xF0` key-release prefix.
    Release,
    /// F7.
    ShowColumn,
    /// F9.
    RecallScreen,
    /// F10.
    ClearScreen,
    /// Either shift key.
    Shift,
    /// Caps lock.
    CapsLock,
    /// Backspace.
    Backspace,
    /// Anything else, resolved through the tables.
    Other(u8),
}

impl Key {
    /// Classify a raw scan code.
    pub const fn classify(code: u8) -> Self {
        match code {
            RELEASE_PREFIX => Key::Release,
            F7 => Key::ShowColumn,
            F9 => Key::RecallScreen,
            F10 => Key::ClearScreen,
            LEFT_SHIFT | RIGHT_SHIFT => Key::Shift,
            CAPS_LOCK => Key::CapsLock,
            BACKSPACE => Key::Backspace,
            other => Key::Other(other),
        }
    }
}
