//! Arithmetic task

use defmt::*;
use embassy_time::{Duration, Ticker};

use quadrant_core::tasks::ArithmeticTask;

use crate::channels::CHANNELS;

/// Arithmetic task - evaluates completed equations
#[embassy_executor::task]
pub async fn arithmetic_task(period_ms: u32) {
    info!("Arithmetic task started");

    let mut task = ArithmeticTask::new(&CHANNELS);
    let mut ticker = Ticker::every(Duration::from_millis(period_ms as u64));

    loop {
        if let Some(report) = task.cycle() {
            info!("Evaluated: {}", report.evaluation);
            if report.dropped {
                warn!("Result dropped, display has not taken the previous one");
            }
        }

        ticker.next().await;
    }
}
