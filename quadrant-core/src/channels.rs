//! Inter-task communication channels
//!
//! Every queue holds a single message and every signal a single bit.
//! Producers never block: a send into an occupied slot is dropped, and
//! raising a signal that is already raised changes nothing.
//!
//! The bundle is generic over the raw mutex so the firmware can place it in
//! a `static` with `CriticalSectionRawMutex` while host tests use
//! `NoopRawMutex`.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_sync::signal::Signal;

use crate::clock::TimeText;
use crate::entry::{Equation, Evaluation};

/// Capacity of every queue
pub const SLOT_CAPACITY: usize = 1;

/// Single-slot queue
pub type Slot<M, T> = Channel<M, T, SLOT_CAPACITY>;

/// Producer end of a single-slot queue
pub type SlotSender<'a, M, T> = Sender<'a, M, T, SLOT_CAPACITY>;

/// Consumer end of a single-slot queue
pub type SlotReceiver<'a, M, T> = Receiver<'a, M, T, SLOT_CAPACITY>;

/// Offer a message without waiting
///
/// Returns false if the slot was occupied and the message was dropped.
pub fn offer<M: RawMutex, T>(tx: &SlotSender<'_, M, T>, message: T) -> bool {
    tx.try_send(message).is_ok()
}

/// Binary signal
///
/// A single bit with test-and-clear semantics. Raising while raised is a
/// no-op; there is no count.
pub struct Flag<M: RawMutex> {
    inner: Signal<M, ()>,
}

impl<M: RawMutex> Default for Flag<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex> Flag<M> {
    pub const fn new() -> Self {
        Self {
            inner: Signal::new(),
        }
    }

    /// Set the flag
    pub fn raise(&self) {
        self.inner.signal(());
    }

    /// Clear the flag, returning whether it was set
    pub fn take(&self) -> bool {
        self.inner.try_take().is_some()
    }

    /// Check the flag without clearing it
    pub fn is_raised(&self) -> bool {
        self.inner.signaled()
    }
}

/// All queues and signals shared by the four tasks
///
/// Each queue has exactly one producer task and one consumer task:
///
/// | Queue / signal        | Producer   | Consumer   |
/// |-----------------------|------------|------------|
/// | `key_to_arithmetic`   | input      | arithmetic |
/// | `key_to_display`      | input      | display    |
/// | `arithmetic_to_display` | arithmetic | display  |
/// | `time_to_display`     | timer      | display    |
/// | `clear_display`       | input      | display    |
/// | `start_idle`          | input      | timer      |
/// | `stop_idle`           | input      | timer      |
/// | `idle_expired`        | timer      | input      |
pub struct Channels<M: RawMutex> {
    /// Complete equations awaiting evaluation
    pub key_to_arithmetic: Slot<M, Equation>,
    /// Partial equations to show while typing
    pub key_to_display: Slot<M, Equation>,
    /// Evaluated equations
    pub arithmetic_to_display: Slot<M, Evaluation>,
    /// Formatted time of day
    pub time_to_display: Slot<M, TimeText>,
    /// Blank the primary display line
    pub clear_display: Flag<M>,
    /// Entry in progress with no key activity: arm the idle window
    pub start_idle: Flag<M>,
    /// Key activity: disarm the idle window
    pub stop_idle: Flag<M>,
    /// Idle window ran out
    pub idle_expired: Flag<M>,
}

impl<M: RawMutex> Default for Channels<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex> Channels<M> {
    pub const fn new() -> Self {
        Self {
            key_to_arithmetic: Channel::new(),
            key_to_display: Channel::new(),
            arithmetic_to_display: Channel::new(),
            time_to_display: Channel::new(),
            clear_display: Flag::new(),
            start_idle: Flag::new(),
            stop_idle: Flag::new(),
            idle_expired: Flag::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    use crate::entry::Digit;

    #[test]
    fn test_flag_is_single_bit() {
        let flag: Flag<NoopRawMutex> = Flag::new();
        assert!(!flag.take());

        flag.raise();
        flag.raise();
        flag.raise();
        assert!(flag.is_raised());
        assert!(flag.take());
        assert!(!flag.take());
        assert!(!flag.is_raised());
    }

    #[test]
    fn test_slot_drops_newest_when_full() {
        let slot: Slot<NoopRawMutex, Equation> = Channel::new();
        let tx = slot.sender();
        let rx = slot.receiver();

        let mut first = Equation::empty();
        first.first = Digit::from_key(b'1');
        let mut second = Equation::empty();
        second.first = Digit::from_key(b'2');

        assert!(offer(&tx, first));
        assert!(!offer(&tx, second));

        assert_eq!(rx.try_receive().ok(), Some(first));
        assert!(rx.try_receive().is_err());

        assert!(offer(&tx, second));
        assert_eq!(rx.try_receive().ok(), Some(second));
    }
}
