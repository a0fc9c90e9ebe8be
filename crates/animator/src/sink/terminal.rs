use super::FrameSink;
use crossterm::{
    cursor::{Hide, MoveToColumn, MoveToPreviousLine, Show},
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Redraws frames in place on an interactive terminal.
///
/// Each frame replaces the previous one: the cursor returns to the start of
/// the block the last frame occupied, clears downwards and prints. Commands
/// are queued and flushed once per frame. The cursor is hidden while frames
/// are on screen and restored by `finish` or on drop.
pub struct TerminalSink<W: Write> {
    out: W,
    /// Rows between the top of the last frame and the cursor, inclusive
    last_height: u16,
    ends_with_newline: bool,
    cursor_hidden: bool,
}

impl TerminalSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            last_height: 0,
            ends_with_newline: false,
            cursor_hidden: false,
        }
    }

    /// Rows the cursor spans after printing `frame`.
    ///
    /// A trailing newline leaves the cursor on an extra, empty row.
    fn frame_height(frame: &str) -> u16 {
        let rows = frame.split('\n').count();
        u16::try_from(rows).unwrap_or(u16::MAX)
    }

    fn restore_cursor(&mut self) -> io::Result<()> {
        if self.cursor_hidden {
            queue!(self.out, Show)?;
            self.cursor_hidden = false;
        }
        Ok(())
    }
}

impl<W: Write + Send> FrameSink for TerminalSink<W> {
    fn write_frame(&mut self, frame: &str) -> io::Result<()> {
        if !self.cursor_hidden {
            queue!(self.out, Hide)?;
            self.cursor_hidden = true;
        }

        if self.last_height > 1 {
            queue!(self.out, MoveToPreviousLine(self.last_height - 1))?;
        }
        queue!(
            self.out,
            MoveToColumn(0),
            Clear(ClearType::FromCursorDown),
            Print(frame)
        )?;
        self.out.flush()?;

        self.last_height = Self::frame_height(frame);
        self.ends_with_newline = frame.ends_with('\n');
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.restore_cursor()?;
        if self.last_height > 0 && !self.ends_with_newline {
            queue!(self.out, Print("\n"))?;
        }
        self.last_height = 0;
        self.out.flush()
    }
}

impl<W: Write> Drop for TerminalSink<W> {
    fn drop(&mut self) {
        if self.cursor_hidden {
            let _ = self.restore_cursor();
            let _ = self.out.flush();
        }
    }
}
