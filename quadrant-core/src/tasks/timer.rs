//! Timer task cycle
//!
//! One tick per second: advance the clock, publish the time, then service
//! the idle window. Publishing is split out so the firmware can bound how
//! long it waits for the display to take the previous time.

use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::channels::{offer, Channels, Flag, SlotSender};
use crate::clock::{IdleWindow, TimeOfDay, TimeText};
use crate::config::CalculatorConfig;

/// Timer task state
///
/// Owns the time of day and the idle window.
pub struct TimerTask<'a, M: RawMutex> {
    clock: TimeOfDay,
    idle: IdleWindow,
    time_tx: SlotSender<'a, M, TimeText>,
    start_idle: &'a Flag<M>,
    stop_idle: &'a Flag<M>,
    idle_expired: &'a Flag<M>,
}

impl<'a, M: RawMutex> TimerTask<'a, M> {
    pub fn new(channels: &'a Channels<M>, config: &CalculatorConfig) -> Self {
        Self {
            clock: config.start_time,
            idle: IdleWindow::new(config.idle_window_ticks),
            time_tx: channels.time_to_display.sender(),
            start_idle: &channels.start_idle,
            stop_idle: &channels.stop_idle,
            idle_expired: &channels.idle_expired,
        }
    }

    /// Advance the clock by one second and format it
    pub fn advance_clock(&mut self) -> TimeText {
        self.clock.tick();
        self.clock.format()
    }

    /// Publish the time, waiting until the slot is free
    ///
    /// Callers bound the wait with a timeout.
    pub async fn publish(&self, text: TimeText) {
        self.time_tx.send(text).await
    }

    /// Publish the time without waiting
    ///
    /// Returns false if the slot was occupied and the time was dropped.
    pub fn try_publish(&self, text: TimeText) -> bool {
        offer(&self.time_tx, text)
    }

    /// Service start/stop requests and count one idle tick
    ///
    /// Stop is checked after start, so a stop raised in the same second
    /// wins. Returns true on the tick the window runs out.
    pub fn update_idle_window(&mut self) -> bool {
        if self.start_idle.take() {
            self.idle.arm();
        }
        if self.stop_idle.take() {
            self.idle.disarm();
        }

        let expired = self.idle.tick();
        if expired {
            self.idle_expired.raise();
        }
        expired
    }

    /// Current time of day
    pub fn time(&self) -> TimeOfDay {
        self.clock
    }

    /// Idle window state
    pub fn idle_window(&self) -> &IdleWindow {
        &self.idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    fn tick<M: RawMutex>(task: &mut TimerTask<'_, M>) -> bool {
        let text = task.advance_clock();
        task.try_publish(text);
        task.update_idle_window()
    }

    #[test]
    fn test_publishes_time_each_tick() {
        let channels = Channels::<NoopRawMutex>::new();
        let mut task = TimerTask::new(&channels, &CalculatorConfig::default());

        let text = task.advance_clock();
        block_on(task.publish(text));
        assert_eq!(
            channels.time_to_display.try_receive().unwrap().as_str(),
            "00:00:01"
        );

        tick(&mut task);
        assert_eq!(
            channels.time_to_display.try_receive().unwrap().as_str(),
            "00:00:02"
        );
    }

    #[test]
    fn test_unread_time_is_dropped() {
        let channels = Channels::<NoopRawMutex>::new();
        let mut task = TimerTask::new(&channels, &CalculatorConfig::default());

        let first = task.advance_clock();
        assert!(task.try_publish(first));
        let second = task.advance_clock();
        assert!(!task.try_publish(second));
        assert_eq!(
            channels.time_to_display.try_receive().unwrap().as_str(),
            "00:00:01"
        );
    }

    #[test]
    fn test_starts_from_configured_time() {
        let channels = Channels::<NoopRawMutex>::new();
        let config = CalculatorConfig {
            start_time: TimeOfDay::new(23, 59, 59).unwrap(),
            ..Default::default()
        };
        let mut task = TimerTask::new(&channels, &config);

        assert_eq!(task.advance_clock().as_str(), "00:00:00");
        assert_eq!(task.time(), TimeOfDay::midnight());
    }

    #[test]
    fn test_idle_window_fires_once_after_ten_ticks() {
        let channels = Channels::<NoopRawMutex>::new();
        let mut task = TimerTask::new(&channels, &CalculatorConfig::default());

        channels.start_idle.raise();
        let mut fired = 0;
        for second in 1..=30 {
            if tick(&mut task) {
                fired += 1;
                assert_eq!(second, 10);
            }
            let _ = channels.time_to_display.try_receive();
        }
        assert_eq!(fired, 1);
        assert!(channels.idle_expired.take());
    }

    #[test]
    fn test_stop_before_expiry_cancels() {
        let channels = Channels::<NoopRawMutex>::new();
        let mut task = TimerTask::new(&channels, &CalculatorConfig::default());

        channels.start_idle.raise();
        for _ in 0..9 {
            assert!(!tick(&mut task));
            let _ = channels.time_to_display.try_receive();
        }
        channels.stop_idle.raise();
        for _ in 0..20 {
            assert!(!tick(&mut task));
            let _ = channels.time_to_display.try_receive();
        }
        assert!(!task.idle_window().is_armed());
        assert!(!channels.idle_expired.is_raised());
    }

    #[test]
    fn test_stop_wins_over_start_in_same_tick() {
        let channels = Channels::<NoopRawMutex>::new();
        let mut task = TimerTask::new(&channels, &CalculatorConfig::default());

        channels.start_idle.raise();
        channels.stop_idle.raise();
        tick(&mut task);
        assert!(!task.idle_window().is_armed());
        assert_eq!(task.idle_window().elapsed(), 0);
    }

    #[test]
    fn test_repeated_start_does_not_extend_window() {
        let channels = Channels::<NoopRawMutex>::new();
        let mut task = TimerTask::new(&channels, &CalculatorConfig::default());

        let mut expired_at = None;
        for second in 1..=12 {
            // Input task re-raises start every idle cycle
            channels.start_idle.raise();
            if tick(&mut task) {
                expired_at = Some(second);
                break;
            }
            let _ = channels.time_to_display.try_receive();
        }
        assert_eq!(expired_at, Some(10));
    }
}
