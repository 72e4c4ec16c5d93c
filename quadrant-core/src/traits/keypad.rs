//! Key source trait

/// Source of debounced key presses
pub trait KeySource {
    /// Return the key code of a new press, or `None` if no key was pressed
    ///
    /// Must not block. Called once per input task cycle.
    fn poll_key(&mut self) -> Option<u8>;
}

impl<T: KeySource + ?Sized> KeySource for &mut T {
    fn poll_key(&mut self) -> Option<u8> {
        (**self).poll_key()
    }
}
