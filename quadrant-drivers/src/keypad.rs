//! 4x4 matrix keypad
//!
//! Rows are driven low one at a time; a pressed key pulls its column low
//! (columns need pull-ups). A scan reports a key only on the press edge,
//! so a key held across several input cycles is delivered once.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use quadrant_core::traits::KeySource;

pub const ROWS: usize = 4;
pub const COLUMNS: usize = 4;

/// Key codes by row and column
pub const KEYMAP: [[u8; COLUMNS]; ROWS] = [*b"789/", *b"456*", *b"123-", *b".0=+"];

/// Time for a column to settle after its row is driven low
const SETTLE_US: u32 = 10;

/// Keypad scan errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeypadError {
    /// Row pin could not be driven
    Row(u8),
    /// Column pin could not be read
    Column(u8),
}

/// Matrix keypad driver
pub struct MatrixKeypad<O, I, D> {
    rows: [O; ROWS],
    columns: [I; COLUMNS],
    delay: D,
    /// Key seen on the previous scan
    held: Option<u8>,
    /// Scans that failed since creation
    faults: u16,
}

impl<O: OutputPin, I: InputPin, D: DelayNs> MatrixKeypad<O, I, D> {
    /// Create a keypad from its row outputs and column inputs
    ///
    /// All rows are released (driven high).
    pub fn new(rows: [O; ROWS], columns: [I; COLUMNS], delay: D) -> Result<Self, KeypadError> {
        let mut keypad = Self {
            rows,
            columns,
            delay,
            held: None,
            faults: 0,
        };
        for row in 0..ROWS {
            keypad.release(row)?;
        }
        Ok(keypad)
    }

    /// Scan for a new key press
    ///
    /// Returns the key code on the scan where the key first goes down and
    /// `None` while it stays down.
    pub fn scan(&mut self) -> Result<Option<u8>, KeypadError> {
        let current = self.scan_matrix()?;
        let pressed = match current {
            Some(key) if self.held != Some(key) => Some(key),
            _ => None,
        };
        self.held = current;
        Ok(pressed)
    }

    /// Number of failed scans
    pub fn fault_count(&self) -> u16 {
        self.faults
    }

    /// Key currently down, first in row-major order
    fn scan_matrix(&mut self) -> Result<Option<u8>, KeypadError> {
        for row in 0..ROWS {
            self.rows[row]
                .set_low()
                .map_err(|_| KeypadError::Row(row as u8))?;
            self.delay.delay_us(SETTLE_US);

            let column = self.pressed_column();
            self.release(row)?;

            if let Some(column) = column? {
                return Ok(Some(KEYMAP[row][column]));
            }
        }
        Ok(None)
    }

    fn pressed_column(&mut self) -> Result<Option<usize>, KeypadError> {
        for (column, pin) in self.columns.iter_mut().enumerate() {
            if pin.is_low().map_err(|_| KeypadError::Column(column as u8))? {
                return Ok(Some(column));
            }
        }
        Ok(None)
    }

    fn release(&mut self, row: usize) -> Result<(), KeypadError> {
        self.rows[row]
            .set_high()
            .map_err(|_| KeypadError::Row(row as u8))
    }
}

impl<O: OutputPin, I: InputPin, D: DelayNs> KeySource for MatrixKeypad<O, I, D> {
    fn poll_key(&mut self) -> Option<u8> {
        match self.scan() {
            Ok(key) => key,
            Err(_) => {
                self.faults = self.faults.saturating_add(1);
                self.held = None;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use embedded_hal::digital::{Error, ErrorKind, ErrorType};

    /// Shared matrix state: row levels and the key held down
    #[derive(Default)]
    struct Matrix {
        rows_high: RefCell<[bool; ROWS]>,
        pressed: Cell<Option<(usize, usize)>>,
        broken_column: Cell<Option<usize>>,
    }

    #[derive(Debug)]
    struct PinFault;

    impl Error for PinFault {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    struct RowPin {
        index: usize,
        matrix: Rc<Matrix>,
    }

    impl ErrorType for RowPin {
        type Error = Infallible;
    }

    impl OutputPin for RowPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.matrix.rows_high.borrow_mut()[self.index] = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.matrix.rows_high.borrow_mut()[self.index] = true;
            Ok(())
        }
    }

    struct ColumnPin {
        index: usize,
        matrix: Rc<Matrix>,
    }

    impl ErrorType for ColumnPin {
        type Error = PinFault;
    }

    impl InputPin for ColumnPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            self.is_low().map(|low| !low)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            if self.matrix.broken_column.get() == Some(self.index) {
                return Err(PinFault);
            }
            Ok(match self.matrix.pressed.get() {
                Some((row, column)) => {
                    column == self.index && !self.matrix.rows_high.borrow()[row]
                }
                None => false,
            })
        }
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn keypad() -> (MatrixKeypad<RowPin, ColumnPin, NoDelay>, Rc<Matrix>) {
        let matrix = Rc::new(Matrix::default());
        let rows = core::array::from_fn(|index| RowPin {
            index,
            matrix: matrix.clone(),
        });
        let columns = core::array::from_fn(|index| ColumnPin {
            index,
            matrix: matrix.clone(),
        });
        let keypad = MatrixKeypad::new(rows, columns, NoDelay).unwrap();
        (keypad, matrix)
    }

    #[test]
    fn test_new_releases_rows() {
        let (_keypad, matrix) = keypad();
        assert_eq!(*matrix.rows_high.borrow(), [true; ROWS]);
    }

    #[test]
    fn test_keymap_positions() {
        let (mut keypad, matrix) = keypad();

        for (row, codes) in KEYMAP.iter().enumerate() {
            for (column, &code) in codes.iter().enumerate() {
                matrix.pressed.set(Some((row, column)));
                assert_eq!(keypad.scan(), Ok(Some(code)));
                matrix.pressed.set(None);
                assert_eq!(keypad.scan(), Ok(None));
            }
        }
        // Rows are left released after every scan
        assert_eq!(*matrix.rows_high.borrow(), [true; ROWS]);
    }

    #[test]
    fn test_held_key_reported_once() {
        let (mut keypad, matrix) = keypad();

        matrix.pressed.set(Some((1, 1)));
        assert_eq!(keypad.poll_key(), Some(b'5'));
        assert_eq!(keypad.poll_key(), None);
        assert_eq!(keypad.poll_key(), None);

        matrix.pressed.set(None);
        assert_eq!(keypad.poll_key(), None);
        matrix.pressed.set(Some((1, 1)));
        assert_eq!(keypad.poll_key(), Some(b'5'));
    }

    #[test]
    fn test_rolling_to_another_key() {
        let (mut keypad, matrix) = keypad();

        matrix.pressed.set(Some((3, 3)));
        assert_eq!(keypad.poll_key(), Some(b'+'));
        matrix.pressed.set(Some((3, 2)));
        assert_eq!(keypad.poll_key(), Some(b'='));
    }

    #[test]
    fn test_pin_fault_counts_and_reports_no_key() {
        let (mut keypad, matrix) = keypad();

        matrix.pressed.set(Some((0, 0)));
        matrix.broken_column.set(Some(0));
        assert_eq!(keypad.scan(), Err(KeypadError::Column(0)));
        assert_eq!(keypad.poll_key(), None);
        assert_eq!(keypad.fault_count(), 1);
        assert_eq!(*matrix.rows_high.borrow(), [true; ROWS]);

        matrix.broken_column.set(None);
        assert_eq!(keypad.poll_key(), Some(b'7'));
    }
}
