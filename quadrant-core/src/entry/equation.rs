//! Equation value types
//!
//! These travel by value through the inter-task channels.

/// A single decimal digit entered on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    /// Parse a digit from its key code (`b'0'..=b'9'`)
    pub fn from_key(code: u8) -> Option<Self> {
        if code.is_ascii_digit() {
            Some(Self(code - b'0'))
        } else {
            None
        }
    }

    /// Numeric value (0-9)
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Key code of this digit
    pub const fn as_byte(self) -> u8 {
        b'0' + self.0
    }
}

/// Operator key
///
/// Any key that is neither a digit nor the calculate key is an operator
/// as far as entry is concerned. Keys without an arithmetic meaning
/// (e.g. the `.` key) are kept as `Other` and evaluate to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// Operator-class key with no arithmetic meaning
    Other(u8),
}

impl Operator {
    /// Map a key code to an operator
    pub fn from_key(code: u8) -> Self {
        match code {
            b'+' => Operator::Add,
            b'-' => Operator::Subtract,
            b'*' => Operator::Multiply,
            b'/' => Operator::Divide,
            other => Operator::Other(other),
        }
    }

    /// Key code shown on the display
    pub fn as_byte(self) -> u8 {
        match self {
            Operator::Add => b'+',
            Operator::Subtract => b'-',
            Operator::Multiply => b'*',
            Operator::Divide => b'/',
            Operator::Other(code) => code,
        }
    }
}

/// An equation under construction or ready for evaluation
///
/// `None` marks a field that has not been entered yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Equation {
    pub first: Option<Digit>,
    pub operator: Option<Operator>,
    pub second: Option<Digit>,
}

impl Equation {
    /// An equation with no fields entered
    pub const fn empty() -> Self {
        Self {
            first: None,
            operator: None,
            second: None,
        }
    }

    /// A fully entered equation
    pub const fn new(first: Digit, operator: Operator, second: Digit) -> Self {
        Self {
            first: Some(first),
            operator: Some(operator),
            second: Some(second),
        }
    }

    /// Check if all three fields are set
    pub fn is_complete(&self) -> bool {
        self.first.is_some() && self.operator.is_some() && self.second.is_some()
    }
}

/// An evaluated equation, published by the arithmetic task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Evaluation {
    pub equation: Equation,
    pub value: i16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_from_key() {
        assert_eq!(Digit::from_key(b'0').map(Digit::value), Some(0));
        assert_eq!(Digit::from_key(b'9').map(Digit::value), Some(9));
        assert_eq!(Digit::from_key(b'7').map(Digit::as_byte), Some(b'7'));
        assert!(Digit::from_key(b'=').is_none());
        assert!(Digit::from_key(b'+').is_none());
    }

    #[test]
    fn test_operator_keys() {
        for code in [b'+', b'-', b'*', b'/', b'.'] {
            assert_eq!(Operator::from_key(code).as_byte(), code);
        }
        assert_eq!(Operator::from_key(b'.'), Operator::Other(b'.'));
        assert_eq!(Operator::from_key(b'*'), Operator::Multiply);
    }

    #[test]
    fn test_equation_completeness() {
        let mut eq = Equation::empty();
        assert!(!eq.is_complete());

        eq.first = Digit::from_key(b'4');
        eq.operator = Some(Operator::Add);
        assert!(!eq.is_complete());

        eq.second = Digit::from_key(b'2');
        assert!(eq.is_complete());
    }
}
