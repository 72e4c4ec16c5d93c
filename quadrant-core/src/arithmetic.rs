//! Single-digit arithmetic
//!
//! Operands are single digits, so every result fits in -9..=81.

use crate::entry::{Equation, Evaluation, Operator};

/// Apply an operator to two operand values
///
/// Division truncates toward zero. Division by zero and operators with no
/// arithmetic meaning yield 0, which cannot be told apart from a genuine
/// zero result.
pub fn apply(lhs: i16, operator: Operator, rhs: i16) -> i16 {
    match operator {
        Operator::Add => lhs.wrapping_add(rhs),
        Operator::Subtract => lhs.wrapping_sub(rhs),
        Operator::Multiply => lhs.wrapping_mul(rhs),
        Operator::Divide => lhs.checked_div(rhs).unwrap_or(0),
        Operator::Other(_) => 0,
    }
}

/// Evaluate an equation
///
/// An incomplete equation evaluates to 0.
pub fn evaluate(equation: &Equation) -> Evaluation {
    let value = match (equation.first, equation.operator, equation.second) {
        (Some(first), Some(operator), Some(second)) => {
            apply(first.value().into(), operator, second.value().into())
        }
        _ => 0,
    };

    Evaluation {
        equation: *equation,
        value,
    }
}
