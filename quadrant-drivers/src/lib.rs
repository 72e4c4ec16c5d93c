//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the collaborator traits
//! defined in quadrant-core, written against `embedded-hal` 1.0 so any HAL
//! with blocking GPIO and a delay can drive them:
//!
//! - 4x4 matrix keypad ([`KeySource`](quadrant_core::traits::KeySource))
//! - HD44780 character LCD in 4-bit mode ([`DisplaySink`](quadrant_core::traits::DisplaySink))

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod keypad;
pub mod lcd;

pub use keypad::{KeypadError, MatrixKeypad, KEYMAP};
pub use lcd::{Hd44780, LcdError, LINE_OFFSETS};
