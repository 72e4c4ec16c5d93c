//! Input task cycle
//!
//! Polls the keypad, drives the equation parser and runs the key side of
//! the idle-window handshake.

use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::channels::{offer, Channels, Flag, SlotSender};
use crate::entry::{EntryBuffer, Equation, EquationParser, ParseError, Position, Progress};
use crate::traits::KeySource;

/// What happened to this cycle's key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyOutcome {
    /// No key pressed
    NoKey,
    /// Key stored; partial equation offered to the display
    Accepted(Equation),
    /// Calculate key accepted; equation offered to the arithmetic task
    Completed(Equation),
    /// Key did not fit the equation; display asked to clear
    Rejected { key: u8, error: ParseError },
}

/// Summary of one input cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputReport {
    pub key: KeyOutcome,
    /// The equation could not be queued because the slot was occupied
    pub dropped: bool,
    /// Idle window ran out; entry abandoned and display asked to clear
    pub idle_expired: bool,
}

/// Input task state
///
/// Owns the parser and the entry buffer; no other task can reach them.
pub struct InputTask<'a, M: RawMutex, K> {
    keys: K,
    parser: EquationParser,
    buffer: EntryBuffer,
    to_arithmetic: SlotSender<'a, M, Equation>,
    to_display: SlotSender<'a, M, Equation>,
    clear_display: &'a Flag<M>,
    start_idle: &'a Flag<M>,
    stop_idle: &'a Flag<M>,
    idle_expired: &'a Flag<M>,
}

impl<'a, M: RawMutex, K: KeySource> InputTask<'a, M, K> {
    pub fn new(channels: &'a Channels<M>, keys: K) -> Self {
        Self {
            keys,
            parser: EquationParser::new(),
            buffer: EntryBuffer::new(),
            to_arithmetic: channels.key_to_arithmetic.sender(),
            to_display: channels.key_to_display.sender(),
            clear_display: &channels.clear_display,
            start_idle: &channels.start_idle,
            stop_idle: &channels.stop_idle,
            idle_expired: &channels.idle_expired,
        }
    }

    /// Run one cycle
    pub fn cycle(&mut self) -> InputReport {
        let mut dropped = false;

        let key = match self.keys.poll_key() {
            Some(code) => match self.parser.parse(code, &mut self.buffer) {
                Err(error) => {
                    self.clear_display.raise();
                    KeyOutcome::Rejected { key: code, error }
                }
                Ok(Progress::Complete) => {
                    let equation = *self.buffer.equation();
                    dropped = !offer(&self.to_arithmetic, equation);
                    self.buffer.take_complete();
                    // Nothing left in progress for the idle window to guard
                    self.buffer.clear_updated();
                    self.stop_idle.raise();
                    KeyOutcome::Completed(equation)
                }
                Ok(Progress::Partial) => {
                    let equation = *self.buffer.equation();
                    dropped = !offer(&self.to_display, equation);
                    self.stop_idle.raise();
                    KeyOutcome::Accepted(equation)
                }
            },
            None => {
                if self.buffer.is_updated() {
                    self.start_idle.raise();
                }
                KeyOutcome::NoKey
            }
        };

        let idle_expired = self.idle_expired.take();
        if idle_expired {
            self.clear_display.raise();
            self.parser.reset();
            self.buffer.clear_updated();
        }

        InputReport {
            key,
            dropped,
            idle_expired,
        }
    }

    /// Current parser position
    pub fn position(&self) -> Position {
        self.parser.position()
    }

    /// Check if an entry is in progress
    pub fn entry_in_progress(&self) -> bool {
        self.buffer.is_updated()
    }

    /// Borrow the key source
    pub fn keys(&self) -> &K {
        &self.keys
    }
}
