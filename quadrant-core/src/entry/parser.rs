//! Keystroke parser
//!
//! The parser position is a function of the keys accepted since the last
//! reset. A key that does not fit the current position is rejected and
//! sends the parser back to the first operand.

use super::equation::{Digit, Equation, Operator};

/// Key code of the calculate key
pub const CALCULATE_KEY: u8 = b'=';

/// Class of a key code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyClass {
    Digit(Digit),
    Operator(Operator),
    Calculate,
}

impl KeyClass {
    /// Classify a key code
    ///
    /// Digits and the calculate key are recognised; every other code is an
    /// operator.
    pub fn classify(code: u8) -> Self {
        if let Some(digit) = Digit::from_key(code) {
            KeyClass::Digit(digit)
        } else if code == CALCULATE_KEY {
            KeyClass::Calculate
        } else {
            KeyClass::Operator(Operator::from_key(code))
        }
    }
}

/// What the parser expects next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Position {
    FirstOperand,
    Operator,
    SecondOperand,
    Calculate,
}

impl Position {
    /// Ordinal index (0-3)
    pub const fn index(self) -> u8 {
        match self {
            Position::FirstOperand => 0,
            Position::Operator => 1,
            Position::SecondOperand => 2,
            Position::Calculate => 3,
        }
    }

    fn next(self) -> Self {
        match self {
            Position::FirstOperand => Position::Operator,
            Position::Operator => Position::SecondOperand,
            Position::SecondOperand => Position::Calculate,
            Position::Calculate => Position::FirstOperand,
        }
    }
}

/// Key rejected by the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Digit where an operator or the calculate key was expected
    UnexpectedDigit,
    /// Operator where a digit or the calculate key was expected
    UnexpectedOperator,
    /// Calculate key before the equation was complete
    UnexpectedCalculate,
}

impl From<KeyClass> for ParseError {
    fn from(class: KeyClass) -> Self {
        match class {
            KeyClass::Digit(_) => ParseError::UnexpectedDigit,
            KeyClass::Operator(_) => ParseError::UnexpectedOperator,
            KeyClass::Calculate => ParseError::UnexpectedCalculate,
        }
    }
}

/// Result of an accepted key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Progress {
    /// Key stored, equation still partial
    Partial,
    /// Calculate key accepted, equation complete
    Complete,
}

/// Equation being entered plus entry status flags
#[derive(Debug, Clone, Default)]
pub struct EntryBuffer {
    equation: Equation,
    /// Set by every key, accepted or not
    updated: bool,
    /// Set when a full equation has been accepted
    complete: bool,
}

impl EntryBuffer {
    /// Create an empty buffer
    pub const fn new() -> Self {
        Self {
            equation: Equation::empty(),
            updated: false,
            complete: false,
        }
    }

    /// Equation as entered so far
    pub fn equation(&self) -> &Equation {
        &self.equation
    }

    /// Check if any key has been parsed into this buffer
    pub fn is_updated(&self) -> bool {
        self.updated
    }

    /// Check if a complete equation is waiting to be dispatched
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Clear the complete flag, returning its previous value
    pub fn take_complete(&mut self) -> bool {
        core::mem::replace(&mut self.complete, false)
    }

    /// Clear the updated flag
    pub fn clear_updated(&mut self) {
        self.updated = false;
    }
}

/// Equation parser state machine
#[derive(Debug, Clone)]
pub struct EquationParser {
    position: Position,
}

impl Default for EquationParser {
    fn default() -> Self {
        Self::new()
    }
}

impl EquationParser {
    /// Create a parser expecting the first operand
    pub const fn new() -> Self {
        Self {
            position: Position::FirstOperand,
        }
    }

    /// Current position
    pub fn position(&self) -> Position {
        self.position
    }

    /// Feed one key code into the buffer
    ///
    /// On error the parser returns to [`Position::FirstOperand`] and the
    /// buffer fields keep whatever was last written; the next first operand
    /// overwrites them.
    pub fn parse(&mut self, code: u8, buffer: &mut EntryBuffer) -> Result<Progress, ParseError> {
        use KeyClass::*;
        use Position as P;

        buffer.updated = true;

        let outcome = match (self.position, KeyClass::classify(code)) {
            (P::FirstOperand, Digit(digit)) => {
                buffer.equation = Equation {
                    first: Some(digit),
                    operator: None,
                    second: None,
                };
                Ok(Progress::Partial)
            }
            (P::Operator, Operator(op)) => {
                buffer.equation.operator = Some(op);
                buffer.equation.second = None;
                Ok(Progress::Partial)
            }
            (P::SecondOperand, Digit(digit)) => {
                buffer.equation.second = Some(digit);
                Ok(Progress::Partial)
            }
            (P::Calculate, Calculate) => {
                buffer.complete = true;
                Ok(Progress::Complete)
            }
            (_, class) => Err(ParseError::from(class)),
        };

        self.position = match outcome {
            Ok(_) => self.position.next(),
            Err(_) => P::FirstOperand,
        };

        outcome
    }

    /// Abandon the current entry
    ///
    /// Only the position is reset; no buffer is touched.
    pub fn reset(&mut self) {
        self.position = Position::FirstOperand;
    }
}
