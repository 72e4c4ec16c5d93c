//! Timer task
//!
//! Keeps the time of day and the idle window. The time send is the one
//! place a task waits on a queue, and only for `time_send_timeout_ms`.

use defmt::*;
use embassy_time::{with_timeout, Duration, Ticker};

use quadrant_core::config::CalculatorConfig;
use quadrant_core::tasks::TimerTask;

use crate::channels::CHANNELS;

/// Timer task - one tick per second
#[embassy_executor::task]
pub async fn timer_task(config: &'static CalculatorConfig) {
    info!("Timer task started");

    let mut task = TimerTask::new(&CHANNELS, config);
    let mut ticker = Ticker::every(Duration::from_millis(config.periods.timer_ms as u64));
    let send_timeout = Duration::from_millis(config.time_send_timeout_ms as u64);

    loop {
        // First tick lands one period after boot
        ticker.next().await;

        let text = task.advance_clock();
        trace!("Time {}", text.as_str());

        if with_timeout(send_timeout, task.publish(text)).await.is_err() {
            debug!("Time dropped, display busy");
        }

        if task.update_idle_window() {
            info!("Idle window expired");
        }
    }
}
