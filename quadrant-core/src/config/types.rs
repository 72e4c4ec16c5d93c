//! Configuration type definitions

use crate::clock::{TimeOfDay, IDLE_WINDOW_TICKS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Widest supported display line (20x4 character LCD)
pub const MAX_LINE_WIDTH: usize = 20;

/// Lines on the supported display
pub const DISPLAY_LINES: u8 = 4;

/// Periodic tasks, highest priority first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TaskPriority {
    /// Timekeeping must never be starved
    Timer,
    /// Key capture
    Input,
    Arithmetic,
    Display,
}

impl TaskPriority {
    /// All tasks in descending priority order
    pub const ALL: [TaskPriority; 4] = [
        TaskPriority::Timer,
        TaskPriority::Input,
        TaskPriority::Arithmetic,
        TaskPriority::Display,
    ];

    /// Interrupt priority level the task's executor runs at
    ///
    /// Lower levels preempt higher ones. `None` for the display, which
    /// runs in thread mode below every interrupt.
    pub fn interrupt_level(self) -> Option<u8> {
        match self {
            TaskPriority::Timer => Some(1),
            TaskPriority::Input => Some(2),
            TaskPriority::Arithmetic => Some(3),
            TaskPriority::Display => None,
        }
    }
}

/// Task periods in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TaskPeriods {
    pub input_ms: u32,
    pub arithmetic_ms: u32,
    /// Timer tick; one tick is one second of wall-clock time
    pub timer_ms: u32,
    pub display_ms: u32,
}

impl Default for TaskPeriods {
    fn default() -> Self {
        Self {
            input_ms: 145,
            arithmetic_ms: 403,
            timer_ms: 1000,
            display_ms: 45,
        }
    }
}

impl TaskPeriods {
    /// Period of a task in milliseconds
    pub fn of(&self, task: TaskPriority) -> u32 {
        match task {
            TaskPriority::Timer => self.timer_ms,
            TaskPriority::Input => self.input_ms,
            TaskPriority::Arithmetic => self.arithmetic_ms,
            TaskPriority::Display => self.display_ms,
        }
    }
}

/// Where things go on the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayLayout {
    /// Line for equations, results and the clear notice
    pub primary_line: u8,
    /// Line for the time of day
    pub time_line: u8,
    /// Characters written per primary-line update (at most `MAX_LINE_WIDTH`)
    pub width: u8,
}

impl Default for DisplayLayout {
    fn default() -> Self {
        Self {
            primary_line: 0,
            time_line: 1,
            width: MAX_LINE_WIDTH as u8,
        }
    }
}

impl DisplayLayout {
    /// Line width clamped to the supported maximum
    pub fn line_width(&self) -> usize {
        (self.width as usize).min(MAX_LINE_WIDTH)
    }
}

/// Calculator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    pub periods: TaskPeriods,
    /// Timer ticks without key activity before an entry is abandoned
    pub idle_window_ticks: u8,
    /// How long the timer task may wait for the time slot to empty
    pub time_send_timeout_ms: u32,
    pub layout: DisplayLayout,
    /// Time of day the clock starts from
    pub start_time: TimeOfDay,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            periods: TaskPeriods::default(),
            idle_window_ticks: IDLE_WINDOW_TICKS,
            time_send_timeout_ms: 10,
            layout: DisplayLayout::default(),
            start_time: TimeOfDay::midnight(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A task period is zero
    ZeroPeriod(TaskPriority),
    /// Idle window of zero ticks
    ZeroIdleWindow,
    /// Display must refresh faster than the clock ticks
    DisplayTooSlow,
    /// Primary and time output share a line
    OverlappingLines,
    /// A layout line past the last display line
    LineOutOfRange(u8),
    /// Start time fields out of range
    InvalidStartTime,
}

impl CalculatorConfig {
    /// Check the configuration for values the tasks cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        for task in TaskPriority::ALL {
            if self.periods.of(task) == 0 {
                return Err(ConfigError::ZeroPeriod(task));
            }
        }

        if self.idle_window_ticks == 0 {
            return Err(ConfigError::ZeroIdleWindow);
        }

        if self.periods.display_ms >= self.periods.timer_ms {
            return Err(ConfigError::DisplayTooSlow);
        }

        for line in [self.layout.primary_line, self.layout.time_line] {
            if line >= DISPLAY_LINES {
                return Err(ConfigError::LineOutOfRange(line));
            }
        }

        if self.layout.primary_line == self.layout.time_line {
            return Err(ConfigError::OverlappingLines);
        }

        let t = &self.start_time;
        if TimeOfDay::new(t.hours(), t.minutes(), t.seconds()).is_none() {
            return Err(ConfigError::InvalidStartTime);
        }

        Ok(())
    }
}
