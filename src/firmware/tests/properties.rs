//! Property tests for the translator, the dispatcher and the cursor.

mod common;

use proptest::prelude::*;

use common::LETTERS;
use ps2term::config::Quirks;
use ps2term::keyboard::scancode::{translate, PLACEHOLDER, TABLE_LEN};
use ps2term::keyboard::{Dispatcher, KeyEvent};
use ps2term::output::OutputRouter;
use ps2term::screen::{Origin, Screen};
use ps2term_common::{BackspacePolicy, BreakCodePolicy, OverflowPolicy};
use ps2term_sim::{SimLcd, SimSerial};

fn check_wrap_invariant<const R: usize, const C: usize>(
    text: &[u8],
) -> Result<(), TestCaseError> {
    let mut screen = Screen::<R, C>::new(
        OverflowPolicy::ClearAndHome,
        BackspacePolicy::WrapAround,
        Quirks::corrected(),
    );
    let mut out = OutputRouter::new(SimLcd::new(C, R), SimSerial::new());

    for (placed, &byte) in text.iter().enumerate() {
        screen.place(byte, Origin::Host, &mut out);
        let cursor = screen.cursor();
        let expected = (placed + 1) % (R * C);
        prop_assert_eq!(cursor.address(), expected);
        prop_assert_eq!(cursor.row(), expected / C);
        prop_assert_eq!(cursor.col(), expected % C);
    }
    Ok(())
}

proptest! {
    #[test]
    fn translate_is_pure(code in any::<u8>(), shifted in any::<bool>()) {
        let first = translate(code, shifted);
        prop_assert_eq!(first, translate(code, shifted));
        if usize::from(code) >= TABLE_LEN {
            prop_assert_eq!(first, PLACEHOLDER);
        }
    }

    #[test]
    fn wrap_invariant_4x20(text in prop::collection::vec(0x20u8..0x7f, 0..400)) {
        check_wrap_invariant::<4, 20>(&text)?;
    }

    #[test]
    fn wrap_invariant_2x3(text in prop::collection::vec(0x20u8..0x7f, 0..40)) {
        check_wrap_invariant::<2, 3>(&text)?;
    }

    #[test]
    fn backspace_undoes_placement(count in 0usize..80, back in 0usize..80) {
        let back = back.min(count);
        let mut screen = Screen::<4, 20>::new(
            OverflowPolicy::ClearAndHome,
            BackspacePolicy::WrapAround,
            Quirks::corrected(),
        );
        let mut out = OutputRouter::new(SimLcd::new(20, 4), SimSerial::new());
        for _ in 0..count {
            screen.place(b'x', Origin::Host, &mut out);
        }
        for _ in 0..back {
            prop_assert!(screen.backspace(&mut out));
        }
        let cursor = screen.cursor();
        let expected = count - back;
        prop_assert_eq!(cursor.address(), expected);
        prop_assert_eq!((cursor.row(), cursor.col()), (expected / 20, expected % 20));
    }

    #[test]
    fn shift_is_one_shot(keys in prop::collection::vec(0usize..26, 1..20)) {
        let mut dispatcher = Dispatcher::new(BreakCodePolicy::PrefixOnly);
        dispatcher.dispatch(0x12);
        for (i, &key) in keys.iter().enumerate() {
            let expected = (if i == 0 { b'A' } else { b'a' }) + key as u8;
            prop_assert_eq!(dispatcher.dispatch(LETTERS[key]), KeyEvent::Printable(expected));
        }
    }

    #[test]
    fn caps_lock_persists(keys in prop::collection::vec(0usize..26, 1..20)) {
        let mut dispatcher = Dispatcher::new(BreakCodePolicy::PrefixOnly);
        dispatcher.dispatch(0x58);
        for &key in &keys {
            prop_assert_eq!(
                dispatcher.dispatch(LETTERS[key]),
                KeyEvent::Printable(b'A' + key as u8)
            );
        }
    }
}
