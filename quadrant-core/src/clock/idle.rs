//! Idle-entry window
//!
//! Counts timer ticks while an entry is in progress with no key activity.
//! When the window runs out the entry is abandoned.

/// Default idle window length in timer ticks (seconds)
pub const IDLE_WINDOW_TICKS: u8 = 10;

/// Idle window counter
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IdleWindow {
    /// Window length in ticks
    length: u8,
    /// Whether the window is counting
    armed: bool,
    /// Ticks counted since the window was armed
    elapsed: u8,
}

impl Default for IdleWindow {
    fn default() -> Self {
        Self::new(IDLE_WINDOW_TICKS)
    }
}

impl IdleWindow {
    /// Create a disarmed window of `length` ticks
    pub const fn new(length: u8) -> Self {
        Self {
            length,
            armed: false,
            elapsed: 0,
        }
    }

    /// Start counting
    ///
    /// Arming an already armed window keeps the current count, so a start
    /// request repeated every input cycle does not hold the window open.
    pub fn arm(&mut self) {
        if !self.armed {
            self.armed = true;
            self.elapsed = 0;
        }
    }

    /// Stop counting
    pub fn disarm(&mut self) {
        self.armed = false;
    }

    /// Count one tick
    ///
    /// Returns true on the tick the window runs out. The window is then
    /// disarmed and its count cleared.
    pub fn tick(&mut self) -> bool {
        if !self.armed {
            return false;
        }

        self.elapsed = self.elapsed.saturating_add(1);
        if self.elapsed >= self.length {
            self.elapsed = 0;
            self.armed = false;
            true
        } else {
            false
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Ticks counted in the current window
    pub fn elapsed(&self) -> u8 {
        self.elapsed
    }
}
