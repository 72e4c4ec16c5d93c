//! Periodic task cycles
//!
//! Each task is a struct holding its private state plus its ends of the
//! shared channels. The firmware calls `cycle()` once per period from an
//! embassy `Ticker` loop; tests call it directly.
//!
//! | Task       | Period  | Priority |
//! |------------|---------|----------|
//! | timer      | 1000 ms | highest  |
//! | input      | 145 ms  |          |
//! | arithmetic | 403 ms  |          |
//! | display    | 45 ms   | lowest   |

pub mod arithmetic;
pub mod display;
pub mod input;
pub mod timer;

#[cfg(test)]
mod testing;

pub use arithmetic::{ArithmeticReport, ArithmeticTask};
pub use display::{DisplayReport, DisplayTask, Shown};
pub use input::{InputReport, InputTask, KeyOutcome};
pub use timer::TimerTask;
