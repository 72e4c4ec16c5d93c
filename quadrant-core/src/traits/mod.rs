//! Collaborator traits
//!
//! These traits define the interface between the task logic and the
//! keypad and display hardware.

pub mod display;
pub mod keypad;

pub use display::DisplaySink;
pub use keypad::KeySource;
