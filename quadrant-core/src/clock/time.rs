//! Time of day

use core::fmt::Write;

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Length of the formatted time (`HH:MM:SS`)
pub const TIME_TEXT_LEN: usize = 8;

/// Formatted time of day
pub type TimeText = String<TIME_TEXT_LEN>;

const SECONDS_PER_MINUTE: u8 = 60;
const MINUTES_PER_HOUR: u8 = 60;
const HOURS_PER_DAY: u8 = 24;

/// 24-hour time of day with one-second resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeOfDay {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl TimeOfDay {
    /// 00:00:00
    pub const fn midnight() -> Self {
        Self {
            hours: 0,
            minutes: 0,
            seconds: 0,
        }
    }

    /// Create a time of day, or `None` if any field is out of range
    pub const fn new(hours: u8, minutes: u8, seconds: u8) -> Option<Self> {
        if hours < HOURS_PER_DAY && minutes < MINUTES_PER_HOUR && seconds < SECONDS_PER_MINUTE {
            Some(Self {
                hours,
                minutes,
                seconds,
            })
        } else {
            None
        }
    }

    pub fn hours(&self) -> u8 {
        self.hours
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Advance by one second, carrying into minutes and hours
    pub fn tick(&mut self) {
        self.seconds += 1;
        if self.seconds == SECONDS_PER_MINUTE {
            self.seconds = 0;
            self.minutes += 1;
            if self.minutes == MINUTES_PER_HOUR {
                self.minutes = 0;
                self.hours = (self.hours + 1) % HOURS_PER_DAY;
            }
        }
    }

    /// Format as zero-padded `HH:MM:SS`
    pub fn format(&self) -> TimeText {
        let mut text = TimeText::new();
        // Fields are range-checked, so the text always fits
        let _ = write!(
            text,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        );
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u8, m: u8, s: u8) -> TimeOfDay {
        TimeOfDay::new(h, m, s).unwrap()
    }

    #[test]
    fn test_second_tick() {
        let mut t = at(10, 20, 30);
        t.tick();
        assert_eq!(t, at(10, 20, 31));
    }

    #[test]
    fn test_minute_carry() {
        let mut t = at(0, 4, 59);
        t.tick();
        assert_eq!(t, at(0, 5, 0));
    }

    #[test]
    fn test_hour_carry() {
        let mut t = at(7, 59, 59);
        t.tick();
        assert_eq!(t, at(8, 0, 0));
    }

    #[test]
    fn test_day_wrap() {
        let mut t = at(23, 59, 59);
        t.tick();
        assert_eq!(t, TimeOfDay::midnight());
    }

    #[test]
    fn test_full_day_returns_to_start() {
        let mut t = at(13, 37, 0);
        for _ in 0..(24 * 60 * 60) {
            t.tick();
        }
        assert_eq!(t, at(13, 37, 0));
    }

    #[test]
    fn test_format() {
        assert_eq!(TimeOfDay::midnight().format().as_str(), "00:00:00");
        assert_eq!(at(9, 5, 7).format().as_str(), "09:05:07");
        assert_eq!(at(23, 59, 58).format().as_str(), "23:59:58");
    }

    #[test]
    fn test_out_of_range() {
        assert!(TimeOfDay::new(24, 0, 0).is_none());
        assert!(TimeOfDay::new(0, 60, 0).is_none());
        assert!(TimeOfDay::new(0, 0, 60).is_none());
    }
}
