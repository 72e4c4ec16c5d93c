//! Board wiring
//!
//! | Function        | GPIO      |
//! |-----------------|-----------|
//! | LCD RS          | GP0       |
//! | LCD EN          | GP1       |
//! | LCD D4..D7      | GP2..GP5  |
//! | Keypad rows     | GP6..GP9  |
//! | Keypad columns  | GP10..GP13 (pull-up) |
//!
//! LCD R/W is tied to ground.

use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::Peripherals;
use embassy_time::Delay;

use quadrant_drivers::{Hd44780, KeypadError, MatrixKeypad};

pub type Keypad = MatrixKeypad<Output<'static>, Input<'static>, Delay>;
pub type Lcd = Hd44780<Output<'static>, Delay>;

/// Calculator peripherals
pub struct Board {
    pub keypad: Keypad,
    pub lcd: Lcd,
}

impl Board {
    pub fn new(p: Peripherals) -> Result<Self, KeypadError> {
        let lcd = Hd44780::new(
            Output::new(p.PIN_0, Level::Low),
            Output::new(p.PIN_1, Level::Low),
            [
                Output::new(p.PIN_2, Level::Low),
                Output::new(p.PIN_3, Level::Low),
                Output::new(p.PIN_4, Level::Low),
                Output::new(p.PIN_5, Level::Low),
            ],
            Delay,
        );

        let keypad = MatrixKeypad::new(
            [
                Output::new(p.PIN_6, Level::High),
                Output::new(p.PIN_7, Level::High),
                Output::new(p.PIN_8, Level::High),
                Output::new(p.PIN_9, Level::High),
            ],
            [
                Input::new(p.PIN_10, Pull::Up),
                Input::new(p.PIN_11, Pull::Up),
                Input::new(p.PIN_12, Pull::Up),
                Input::new(p.PIN_13, Pull::Up),
            ],
            Delay,
        )?;

        Ok(Self { keypad, lcd })
    }
}
