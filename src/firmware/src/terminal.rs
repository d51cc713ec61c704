//! Terminal controller.
//!
//! Ties the keyboard path, the screen manager and the output router into
//! the single polling loop the firmware runs from power-on. All mutable
//! state lives in [`Terminal`]; nothing is global.

use ps2term_common::{FrameCheck, FrameError, Sink, Sinks};
use ps2term_hal::{Delay, Display, InputPin, Serial};

use crate::config::{Config, LCD_COLS, LCD_CURSOR_BLINK, LCD_ROWS};
use crate::keyboard::{Dispatcher, Frame, KeyEvent, Modifiers, Ps2Receiver};
use crate::output::OutputRouter;
use crate::screen::{Origin, Placement, Screen};

/// The screen type for the configured display.
pub type LcdScreen = Screen<LCD_ROWS, LCD_COLS>;

/// Everything the terminal drives.
pub struct Peripherals<Clk, Dat, D, S, T> {
    /// Keyboard clock line.
    pub clock: Clk,
    /// Keyboard data line.
    pub data: Dat,
    /// Character display.
    pub display: D,
    /// Host UART.
    pub serial: S,
    /// Blocking delay.
    pub delay: T,
}

/// The keyboard/display/serial terminal.
pub struct Terminal<Clk, Dat, D, S, T> {
    receiver: Ps2Receiver<Clk, Dat>,
    dispatcher: Dispatcher,
    screen: LcdScreen,
    out: OutputRouter<D, S>,
    delay: T,
    config: Config,
}

impl<Clk, Dat, D, S, T> Terminal<Clk, Dat, D, S, T>
where
    Clk: InputPin,
    Dat: InputPin,
    D: Display,
    S: Serial,
    T: Delay,
{
    /// Create a terminal over `peripherals`.
    pub fn new(peripherals: Peripherals<Clk, Dat, D, S, T>, config: Config) -> Self {
        Self {
            receiver: Ps2Receiver::new(peripherals.clock, peripherals.data),
            dispatcher: Dispatcher::new(config.break_codes),
            screen: Screen::new(config.on_overflow, config.on_backspace, config.quirks),
            out: OutputRouter::new(peripherals.display, peripherals.serial),
            delay: peripherals.delay,
            config,
        }
    }

    /// Prepare the display: blank it and turn on the blinking cursor.
    pub fn start(&mut self) {
        let display = self.out.display_mut();
        display.clear();
        display.command(LCD_CURSOR_BLINK);
        self.out.select(Sink::Display);
        log::info!(
            "terminal ready: {}x{} display, {} baud, {:?}",
            LCD_COLS,
            LCD_ROWS,
            self.config.baud_rate,
            self.config.quirks
        );
    }

    /// Run forever.
    pub fn run(&mut self) -> ! {
        self.start();
        loop {
            self.poll();
        }
    }

    /// One loop iteration: serve a host byte if one is waiting, then a
    /// keyboard frame if the clock line has dropped.
    ///
    /// A keyboard transfer blocks until all 11 bits are clocked in, followed
    /// by the settling delay.
    pub fn poll(&mut self) {
        if let Some(byte) = self.out.poll_serial() {
            self.handle_host_byte(byte);
        }

        if self.receiver.clock_low() {
            let frame = self.receiver.receive_frame();
            self.delay.delay_ms(self.config.settle_ms);
            match self.accept(frame) {
                Ok(code) => {
                    self.handle_scancode(code);
                }
                Err(err) => log::warn!("dropping frame {:?}: {}", frame, err),
            }
        }
    }

    /// Place a byte received from the host. Display only.
    pub fn handle_host_byte(&mut self, byte: u8) -> Placement {
        self.screen.place(byte, Origin::Host, &mut self.out)
    }

    /// Act on one scan code.
    pub fn handle_scancode(&mut self, code: u8) -> KeyEvent {
        log::trace!("scan code {:#04x}", code);
        let event = self.dispatcher.dispatch(code);
        match event {
            KeyEvent::Ignored | KeyEvent::ModifierChanged(_) => {}
            KeyEvent::ShowColumn => self.screen.show_column(&mut self.out),
            KeyEvent::RecallScreen => {
                log::debug!("recalling previous screen");
                self.screen.recall(&mut self.out);
            }
            KeyEvent::ClearScreen => self.screen.clear(&mut self.out),
            KeyEvent::Backspace(byte) => {
                if self.screen.backspace(&mut self.out) {
                    self.out.write(byte, Sinks::SERIAL);
                }
            }
            KeyEvent::Enter => {
                self.out
                    .write_all(self.config.line_ending.as_bytes(), Sinks::SERIAL);
                self.screen.new_line(&mut self.out);
            }
            KeyEvent::Printable(byte) => {
                self.out.write(byte, Sinks::SERIAL);
                self.screen.place(byte, Origin::Keyboard, &mut self.out);
            }
            KeyEvent::Control(byte) => self.out.write(byte, Sinks::SERIAL),
        }
        event
    }

    /// Screen state.
    pub fn screen(&self) -> &LcdScreen {
        &self.screen
    }

    /// Modifier state.
    pub fn modifiers(&self) -> Modifiers {
        self.dispatcher.modifiers()
    }

    /// Active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The display.
    pub fn display(&self) -> &D {
        self.out.display()
    }

    /// The host UART.
    pub fn serial(&self) -> &S {
        self.out.serial()
    }

    /// The host UART.
    pub fn serial_mut(&mut self) -> &mut S {
        self.out.serial_mut()
    }

    fn accept(&self, frame: Frame) -> Result<u8, FrameError> {
        match self.config.frame_check {
            FrameCheck::AcceptUnchecked => Ok(frame.data),
            FrameCheck::Strict => frame.check(),
        }
    }
}
