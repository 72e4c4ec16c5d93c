//! Embassy async tasks
//!
//! Each task wraps one core task cycle in a `Ticker` loop and logs what
//! the cycle reports. Tasks communicate only via [`crate::channels`].

pub mod arithmetic;
pub mod display;
pub mod input;
pub mod timer;

pub use arithmetic::arithmetic_task;
pub use display::display_task;
pub use input::input_task;
pub use timer::timer_task;
