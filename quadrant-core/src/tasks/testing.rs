//! Host-side collaborators for task tests

use std::collections::VecDeque;
use std::string::String;
use std::vec::Vec;

use crate::traits::{DisplaySink, KeySource};

/// Key source that replays a fixed script, then reports no key
pub struct ScriptedKeys {
    script: VecDeque<Option<u8>>,
}

impl ScriptedKeys {
    pub fn new(script: &[Option<u8>]) -> Self {
        Self {
            script: script.iter().copied().collect(),
        }
    }
}

impl KeySource for ScriptedKeys {
    fn poll_key(&mut self) -> Option<u8> {
        self.script.pop_front().flatten()
    }
}

/// Character display model that keeps the text on each line
pub struct RecordingDisplay {
    lines: Vec<Vec<u8>>,
    cursor: (usize, usize),
    /// Number of `move_to` calls, i.e. separate writes
    pub writes: usize,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self {
            lines: vec![vec![b' '; 20]; 4],
            cursor: (0, 0),
            writes: 0,
        }
    }

    /// Text on a line with trailing spaces removed
    pub fn line(&self, line: usize) -> String {
        String::from_utf8_lossy(&self.lines[line]).trim_end().into()
    }
}

impl DisplaySink for RecordingDisplay {
    fn move_to(&mut self, line: u8, column: u8) {
        self.cursor = (line as usize, column as usize);
        self.writes += 1;
    }

    fn write_char(&mut self, c: u8) {
        let (line, column) = self.cursor;
        if let Some(slot) = self.lines.get_mut(line).and_then(|l| l.get_mut(column)) {
            *slot = c;
        }
        self.cursor.1 += 1;
    }
}
