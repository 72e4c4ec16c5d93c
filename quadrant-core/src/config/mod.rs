//! Configuration types
//!
//! Board-agnostic task timing and display layout. The firmware uses the
//! compiled-in defaults; nothing is persisted.

pub mod types;

pub use types::*;
