//! Equation entry
//!
//! Keystrokes arrive one at a time and are assembled into a three-token
//! equation (operand, operator, operand) closed by the calculate key.
//! The parser is explicit, finite, and deterministic.

pub mod equation;
pub mod parser;

pub use equation::{Digit, Equation, Evaluation, Operator};
pub use parser::{EntryBuffer, EquationParser, KeyClass, ParseError, Position, Progress};
