//! Terminal module - raw-mode screen handling and plain-text views
//!
//! The terminal surface stays deliberately small: views build whole lines of
//! text and the screen redraws them all every frame. Counting screens are a
//! few dozen cells; diffing would buy nothing here.

pub mod view;

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{cursor, style::Print, terminal, QueueableCommand};

/// Owns the terminal while the app runs
pub struct TerminalScreen {
    stdout: io::Stdout,
}

impl TerminalScreen {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Redraw the whole screen from a list of lines
    pub fn draw(&mut self, lines: &[String]) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        for (row, line) in lines.iter().enumerate() {
            self.stdout.queue(cursor::MoveTo(0, row as u16))?;
            self.stdout.queue(Print(line))?;
        }
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalScreen {
    fn default() -> Self {
        Self::new()
    }
}
