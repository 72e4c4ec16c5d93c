//! HD44780 character LCD, 4-bit parallel interface
//!
//! Write-only: R/W is tied low, so the busy flag is never read and every
//! command is followed by its worst-case execution delay instead.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use quadrant_core::traits::DisplaySink;

/// DDRAM address of the first column of each line on a 20x4 module
pub const LINE_OFFSETS: [u8; 4] = [0x00, 0x40, 0x14, 0x54];

pub const COLUMNS: u8 = 20;

const CMD_CLEAR: u8 = 0x01;
const CMD_ENTRY_MODE: u8 = 0x04;
const CMD_DISPLAY_CONTROL: u8 = 0x08;
const CMD_FUNCTION_SET: u8 = 0x20;
const CMD_SET_DDRAM: u8 = 0x80;

/// Entry mode: cursor moves right
const ENTRY_INCREMENT: u8 = 0x02;
/// Display control: display on, cursor and blink off
const DISPLAY_ON: u8 = 0x04;
/// Function set: 4-bit bus, two (or four) lines, 5x8 font
const FUNCTION_4BIT_2LINE: u8 = 0x08;

/// Most commands complete in 37 us
const COMMAND_US: u32 = 50;
const CLEAR_US: u32 = 2_000;
const POWER_ON_MS: u32 = 50;

/// LCD errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LcdError {
    /// A control or data pin could not be driven
    Pin,
    /// Cursor position outside the module
    Position { line: u8, column: u8 },
}

/// HD44780 driver
pub struct Hd44780<P, D> {
    rs: P,
    en: P,
    /// D4..D7
    data: [P; 4],
    delay: D,
    /// A write failed since the last successful init
    faulted: bool,
}

impl<P: OutputPin, D: DelayNs> Hd44780<P, D> {
    pub fn new(rs: P, en: P, data: [P; 4], delay: D) -> Self {
        Self {
            rs,
            en,
            data,
            delay,
            faulted: false,
        }
    }

    /// Run the power-on initialisation sequence
    ///
    /// Switches the controller into 4-bit mode from any state, then turns
    /// the display on with a blank screen.
    pub fn init(&mut self) -> Result<(), LcdError> {
        self.delay.delay_ms(POWER_ON_MS);
        self.rs.set_low().map_err(|_| LcdError::Pin)?;
        self.en.set_low().map_err(|_| LcdError::Pin)?;

        // Three times 8-bit mode resynchronises the nibble phase
        self.write_nibble(0x03)?;
        self.delay.delay_us(4_500);
        self.write_nibble(0x03)?;
        self.delay.delay_us(150);
        self.write_nibble(0x03)?;
        self.delay.delay_us(150);
        self.write_nibble(0x02)?;
        self.delay.delay_us(COMMAND_US);

        self.command(CMD_FUNCTION_SET | FUNCTION_4BIT_2LINE)?;
        self.command(CMD_DISPLAY_CONTROL | DISPLAY_ON)?;
        self.clear()?;
        self.command(CMD_ENTRY_MODE | ENTRY_INCREMENT)?;

        self.faulted = false;
        Ok(())
    }

    /// Blank the whole display and home the cursor
    pub fn clear(&mut self) -> Result<(), LcdError> {
        self.command(CMD_CLEAR)?;
        self.delay.delay_us(CLEAR_US);
        Ok(())
    }

    pub fn set_cursor(&mut self, line: u8, column: u8) -> Result<(), LcdError> {
        let offset = LINE_OFFSETS
            .get(line as usize)
            .filter(|_| column < COLUMNS)
            .ok_or(LcdError::Position { line, column })?;
        self.command(CMD_SET_DDRAM | (*offset + column))
    }

    /// Write one character at the cursor
    pub fn write_data(&mut self, byte: u8) -> Result<(), LcdError> {
        self.write_byte(byte, true)
    }

    pub fn command(&mut self, command: u8) -> Result<(), LcdError> {
        self.write_byte(command, false)
    }

    /// Check if a write has failed since init
    pub fn is_faulted(&self) -> bool {
        self.faulted
    }

    fn write_byte(&mut self, byte: u8, data: bool) -> Result<(), LcdError> {
        let rs = if data {
            self.rs.set_high()
        } else {
            self.rs.set_low()
        };
        rs.map_err(|_| LcdError::Pin)?;

        self.write_nibble(byte >> 4)?;
        self.write_nibble(byte & 0x0F)?;
        self.delay.delay_us(COMMAND_US);
        Ok(())
    }

    /// Put a nibble on D4..D7 and latch it on the falling edge of EN
    fn write_nibble(&mut self, nibble: u8) -> Result<(), LcdError> {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            let level = if nibble & (1 << bit) != 0 {
                pin.set_high()
            } else {
                pin.set_low()
            };
            level.map_err(|_| LcdError::Pin)?;
        }

        self.en.set_high().map_err(|_| LcdError::Pin)?;
        self.delay.delay_us(1);
        self.en.set_low().map_err(|_| LcdError::Pin)?;
        self.delay.delay_us(1);
        Ok(())
    }

    fn note(&mut self, result: Result<(), LcdError>) {
        if result.is_err() {
            self.faulted = true;
        }
    }
}

impl<P: OutputPin, D: DelayNs> DisplaySink for Hd44780<P, D> {
    fn move_to(&mut self, line: u8, column: u8) {
        let result = self.set_cursor(line, column);
        self.note(result);
    }

    fn write_char(&mut self, c: u8) {
        let result = self.write_data(c);
        self.note(result);
    }
}
