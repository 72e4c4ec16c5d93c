//! Keypad input task

use defmt::*;
use embassy_time::{Duration, Ticker};

use quadrant_core::tasks::{InputTask, KeyOutcome};

use crate::board::Keypad;
use crate::channels::CHANNELS;

/// Input task - polls the keypad and drives the equation parser
#[embassy_executor::task]
pub async fn input_task(keypad: Keypad, period_ms: u32) {
    info!("Input task started");

    let mut task = InputTask::new(&CHANNELS, keypad);
    let mut ticker = Ticker::every(Duration::from_millis(period_ms as u64));
    let mut faults = 0;

    loop {
        let report = task.cycle();

        match report.key {
            KeyOutcome::NoKey => {}
            KeyOutcome::Accepted(equation) => debug!("Key accepted: {}", equation),
            KeyOutcome::Completed(equation) => info!("Equation complete: {}", equation),
            KeyOutcome::Rejected { key, error } => {
                warn!("Key '{}' rejected: {}", key as char, error)
            }
        }
        if report.dropped {
            debug!("Equation dropped, consumer slot full");
        }
        if report.idle_expired {
            info!("Entry abandoned after idle window");
        }

        let count = task.keys().fault_count();
        if count != faults {
            warn!("Keypad scan failed ({} total)", count);
            faults = count;
        }

        ticker.next().await;
    }
}
