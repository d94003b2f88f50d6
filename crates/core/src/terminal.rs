//! The terminal seam the world draws through.
//!
//! Implementations may buffer writes; nothing is guaranteed to be visible
//! until [`Terminal::do_refresh`] returns.

use std::io;

pub trait Terminal {
    /// Move the logical write position.
    fn set_cursor_pos(&mut self, col: u16, row: u16);

    /// Write `text` at the cursor, advancing it. With `newline` the cursor
    /// then moves to column 0 of the next row.
    fn output(&mut self, text: &str, newline: bool);

    fn clear_screen(&mut self);

    /// Flush buffered output.
    fn do_refresh(&mut self) -> io::Result<()>;
}

impl<T: Terminal + ?Sized> Terminal for &mut T {
    fn set_cursor_pos(&mut self, col: u16, row: u16) {
        (**self).set_cursor_pos(col, row);
    }

    fn output(&mut self, text: &str, newline: bool) {
        (**self).output(text, newline);
    }

    fn clear_screen(&mut self) {
        (**self).clear_screen();
    }

    fn do_refresh(&mut self) -> io::Result<()> {
        (**self).do_refresh()
    }
}
