//! Arithmetic task cycle

use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::arithmetic::evaluate;
use crate::channels::{offer, Channels, SlotReceiver, SlotSender};
use crate::entry::{Equation, Evaluation};

/// Summary of a cycle that evaluated an equation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ArithmeticReport {
    pub evaluation: Evaluation,
    /// The result could not be queued because the slot was occupied
    pub dropped: bool,
}

/// Arithmetic task state
pub struct ArithmeticTask<'a, M: RawMutex> {
    equations: SlotReceiver<'a, M, Equation>,
    results: SlotSender<'a, M, Evaluation>,
}

impl<'a, M: RawMutex> ArithmeticTask<'a, M> {
    pub fn new(channels: &'a Channels<M>) -> Self {
        Self {
            equations: channels.key_to_arithmetic.receiver(),
            results: channels.arithmetic_to_display.sender(),
        }
    }

    /// Evaluate at most one pending equation
    pub fn cycle(&mut self) -> Option<ArithmeticReport> {
        let equation = self.equations.try_receive().ok()?;
        let evaluation = evaluate(&equation);
        let dropped = !offer(&self.results, evaluation);

        Some(ArithmeticReport {
            evaluation,
            dropped,
        })
    }
}
