//! LCD display task

use defmt::*;
use embassy_time::{Duration, Ticker};

use quadrant_core::config::CalculatorConfig;
use quadrant_core::tasks::{DisplayTask, Shown};

use crate::board::Lcd;
use crate::channels::CHANNELS;

/// Display task - arbitrates the primary line and refreshes the clock
#[embassy_executor::task]
pub async fn display_task(lcd: Lcd, config: &'static CalculatorConfig) {
    info!("Display task started");

    let mut task = DisplayTask::new(&CHANNELS, lcd, config.layout);
    let mut ticker = Ticker::every(Duration::from_millis(config.periods.display_ms as u64));
    let mut faulted = false;

    loop {
        let report = task.cycle();

        match report.primary {
            Shown::Nothing => {}
            Shown::Cleared => debug!("Primary line cleared"),
            Shown::Result(evaluation) => debug!("Showing result {}", evaluation),
            Shown::Partial(equation) => trace!("Showing entry {}", equation),
        }

        if task.sink().is_faulted() != faulted {
            faulted = !faulted;
            if faulted {
                error!("LCD write failed");
            }
        }

        ticker.next().await;
    }
}
