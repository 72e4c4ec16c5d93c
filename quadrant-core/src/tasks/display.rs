//! Display task cycle
//!
//! Arbitrates between the sources competing for the primary line. Each
//! cycle shows at most one of them, in priority order:
//! clear notice > result > partial equation. The time line is independent
//! and is refreshed whenever a new time is waiting.

use core::fmt::Write;

use embassy_sync::blocking_mutex::raw::RawMutex;
use heapless::String;

use crate::channels::{Channels, Flag, SlotReceiver};
use crate::clock::TimeText;
use crate::config::{DisplayLayout, MAX_LINE_WIDTH};
use crate::entry::{Equation, Evaluation};
use crate::traits::DisplaySink;

/// One rendered display line
pub type Line = String<MAX_LINE_WIDTH>;

/// What the primary line showed this cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Shown {
    /// Nothing pending; line left as it was
    Nothing,
    /// Line blanked
    Cleared,
    Result(Evaluation),
    Partial(Equation),
}

/// Summary of one display cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayReport {
    /// A new time was written
    pub time: bool,
    pub primary: Shown,
}

/// Blank line
pub fn render_blank(width: usize) -> Line {
    pad(Line::new(), width)
}

/// `first operator second = value`, e.g. `5+3=8`
pub fn render_result(evaluation: &Evaluation, width: usize) -> Line {
    let mut line = render_equation(&evaluation.equation);
    let _ = line.push('=');
    let _ = write!(line, "{}", evaluation.value);
    pad(line, width)
}

/// Equation entered so far
///
/// The operator is shown once set; the second operand only after the
/// operator.
pub fn render_partial(equation: &Equation, width: usize) -> Line {
    pad(render_equation(equation), width)
}

fn render_equation(equation: &Equation) -> Line {
    let mut line = Line::new();
    if let Some(first) = equation.first {
        let _ = line.push(first.as_byte() as char);
    }
    if let Some(operator) = equation.operator {
        let _ = line.push(operator.as_byte() as char);
        if let Some(second) = equation.second {
            let _ = line.push(second.as_byte() as char);
        }
    }
    line
}

/// Fill with spaces to `width` so stale characters are overwritten
fn pad(mut line: Line, width: usize) -> Line {
    let width = width.min(MAX_LINE_WIDTH);
    while line.len() < width {
        if line.push(' ').is_err() {
            break;
        }
    }
    line
}

/// Display task state
pub struct DisplayTask<'a, M: RawMutex, D> {
    sink: D,
    layout: DisplayLayout,
    times: SlotReceiver<'a, M, TimeText>,
    results: SlotReceiver<'a, M, Evaluation>,
    partials: SlotReceiver<'a, M, Equation>,
    clear_display: &'a Flag<M>,
}

impl<'a, M: RawMutex, D: DisplaySink> DisplayTask<'a, M, D> {
    pub fn new(channels: &'a Channels<M>, sink: D, layout: DisplayLayout) -> Self {
        Self {
            sink,
            layout,
            times: channels.time_to_display.receiver(),
            results: channels.arithmetic_to_display.receiver(),
            partials: channels.key_to_display.receiver(),
            clear_display: &channels.clear_display,
        }
    }

    /// Run one cycle
    pub fn cycle(&mut self) -> DisplayReport {
        let time = match self.times.try_receive() {
            Ok(text) => {
                self.sink.move_to(self.layout.time_line, 0);
                self.sink.write_text(&text);
                true
            }
            Err(_) => false,
        };

        let width = self.layout.line_width();
        let primary = if self.clear_display.take() {
            self.write_primary(&render_blank(width));
            Shown::Cleared
        } else if let Ok(evaluation) = self.results.try_receive() {
            self.write_primary(&render_result(&evaluation, width));
            Shown::Result(evaluation)
        } else if let Ok(equation) = self.partials.try_receive() {
            self.write_primary(&render_partial(&equation, width));
            Shown::Partial(equation)
        } else {
            Shown::Nothing
        };

        DisplayReport { time, primary }
    }

    fn write_primary(&mut self, line: &str) {
        self.sink.move_to(self.layout.primary_line, 0);
        self.sink.write_text(line);
    }

    /// Borrow the display sink
    pub fn sink(&self) -> &D {
        &self.sink
    }
}
