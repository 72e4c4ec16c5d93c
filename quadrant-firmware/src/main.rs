//! Quadrant - Single-Digit Calculator Firmware
//!
//! Main firmware binary for an RP2040 with a 4x4 keypad and a 20x4
//! character LCD.
//!
//! Four periodic tasks, highest priority first:
//!
//! | Task       | Runs on                              |
//! |------------|--------------------------------------|
//! | timer      | interrupt executor, `SWI_IRQ_0`, P1  |
//! | input      | interrupt executor, `SWI_IRQ_1`, P2  |
//! | arithmetic | interrupt executor, `SWI_IRQ_2`, P3  |
//! | display    | thread-mode executor                 |
//!
//! A higher-priority task preempts a lower one as soon as its ticker fires.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use quadrant_core::config::{CalculatorConfig, TaskPriority};

use crate::board::Board;

mod board;
mod channels;
mod tasks;

static EXECUTOR_TIMER: InterruptExecutor = InterruptExecutor::new();
static EXECUTOR_INPUT: InterruptExecutor = InterruptExecutor::new();
static EXECUTOR_ARITHMETIC: InterruptExecutor = InterruptExecutor::new();

// Configuration must live forever for task references
static CONFIG: StaticCell<CalculatorConfig> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_0() {
    EXECUTOR_TIMER.on_interrupt()
}

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_INPUT.on_interrupt()
}

#[interrupt]
unsafe fn SWI_IRQ_2() {
    EXECUTOR_ARITHMETIC.on_interrupt()
}

/// NVIC priority for a task's interrupt executor
fn nvic_priority(task: TaskPriority) -> Priority {
    match task.interrupt_level() {
        Some(0) => Priority::P0,
        Some(1) => Priority::P1,
        Some(2) => Priority::P2,
        _ => Priority::P3,
    }
}

/// Main entry point
///
/// Runs in the thread-mode executor, which also hosts the display task.
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Quadrant firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = CalculatorConfig::default();
    if let Err(e) = config.validate() {
        defmt::panic!("Invalid configuration: {}", e);
    }
    let config: &'static CalculatorConfig = CONFIG.init(config);
    info!(
        "Periods: input={}ms arithmetic={}ms timer={}ms display={}ms, idle window {} ticks",
        config.periods.input_ms,
        config.periods.arithmetic_ms,
        config.periods.timer_ms,
        config.periods.display_ms,
        config.idle_window_ticks
    );

    let Board { keypad, mut lcd } = match Board::new(p) {
        Ok(board) => board,
        Err(e) => defmt::panic!("Keypad init failed: {}", e),
    };

    if let Err(e) = lcd.init() {
        error!("LCD init failed: {}", e);
    } else {
        info!("LCD initialized");
    }

    interrupt::SWI_IRQ_0.set_priority(nvic_priority(TaskPriority::Timer));
    let timer_spawner = EXECUTOR_TIMER.start(interrupt::SWI_IRQ_0);
    timer_spawner.spawn(tasks::timer_task(config)).unwrap();

    interrupt::SWI_IRQ_1.set_priority(nvic_priority(TaskPriority::Input));
    let input_spawner = EXECUTOR_INPUT.start(interrupt::SWI_IRQ_1);
    input_spawner
        .spawn(tasks::input_task(keypad, config.periods.input_ms))
        .unwrap();

    interrupt::SWI_IRQ_2.set_priority(nvic_priority(TaskPriority::Arithmetic));
    let arithmetic_spawner = EXECUTOR_ARITHMETIC.start(interrupt::SWI_IRQ_2);
    arithmetic_spawner
        .spawn(tasks::arithmetic_task(config.periods.arithmetic_ms))
        .unwrap();

    spawner.spawn(tasks::display_task(lcd, config)).unwrap();

    info!("All tasks spawned, firmware running");
}
