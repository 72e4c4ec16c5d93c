//! Timekeeping
//!
//! The wall clock shown on the display and the idle window that discards
//! abandoned entries are both driven by the timer task's one-second tick.

pub mod idle;
pub mod time;

pub use idle::{IdleWindow, IDLE_WINDOW_TICKS};
pub use time::{TimeOfDay, TimeText, TIME_TEXT_LEN};
