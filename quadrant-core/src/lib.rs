//! Board-agnostic core logic for the calculator firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Equation entry (keystroke parser state machine)
//! - Single-digit arithmetic
//! - Time-of-day clock and the idle-entry window
//! - Single-slot channels and binary signals between tasks
//! - One cycle of each periodic task (input, arithmetic, timer, display)
//! - Keypad and display collaborator traits
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod arithmetic;
pub mod channels;
pub mod clock;
pub mod config;
pub mod entry;
pub mod tasks;
pub mod traits;
