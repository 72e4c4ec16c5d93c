//! Character display trait

/// Character display
///
/// Writes are fire-and-forget: the display task never reads anything
/// back, so drivers deal with their own bus faults.
pub trait DisplaySink {
    /// Move the cursor
    ///
    /// - `line`: Line number (0-based)
    /// - `column`: Column number (0-based)
    fn move_to(&mut self, line: u8, column: u8);

    /// Write one character at the cursor and advance it
    fn write_char(&mut self, c: u8);

    /// Write text at the cursor
    fn write_text(&mut self, text: &str) {
        for c in text.bytes() {
            self.write_char(c);
        }
    }
}

impl<T: DisplaySink + ?Sized> DisplaySink for &mut T {
    fn move_to(&mut self, line: u8, column: u8) {
        (**self).move_to(line, column)
    }

    fn write_char(&mut self, c: u8) {
        (**self).write_char(c)
    }

    fn write_text(&mut self, text: &str) {
        (**self).write_text(text)
    }
}
