//! Inter-task communication channels
//!
//! The single shared instance of the calculator's queues and signals.
//! Tasks on different executors (and interrupt priorities) reach it through
//! `CriticalSectionRawMutex`.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use quadrant_core::channels::Channels;

/// Queues and signals between the input, arithmetic, timer and display tasks
pub static CHANNELS: Channels<CriticalSectionRawMutex> = Channels::new();
