use crate::{TermInt, Coords};
use crate::render::Canvas;
use std::{io::{Stdout, Write, stdout}, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal, Result};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, read, poll};

pub struct TermManager {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
    screen: Vec<char>,
    origin: Coords,
    dirty: bool,
}

impl TermManager {
    pub fn new() -> Result<Self> {
        let (width, height) = terminal::size()?;
        let stdout = stdout();
        let screen = vec![' '; width as usize * height as usize];
        Ok(TermManager { width, height, stdout, screen, origin: (0, 0), dirty: true })
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
    }

    /// Drains every key event that is already waiting. Resizes are handled
    /// here and not returned.
    pub fn read_key_events_queue(&mut self) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(0))? {
            match read()? {
                Event::Key(ev) => events.push(ev),
                Event::Resize(w, h) => self.resize(w, h),
                _ => {}
            }
        }

        Ok(events)
    }

    pub fn get_terminal_size(&self) -> Coords {
        (self.width, self.height)
    }

    /// Shows the canvas centred on screen, only touching characters that
    /// changed since the last call.
    pub fn present(&mut self, canvas: &Canvas) -> Result<()> {
        if self.dirty {
            self.clear()?;
            self.origin = (
                self.width.saturating_sub(canvas.width()) / 2,
                self.height.saturating_sub(canvas.height()) / 2,
            );
            self.dirty = false;
        }

        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                let pos = (self.origin.0 + x, self.origin.1 + y);
                let ch = canvas.get((x, y));
                if pos.0 < self.width && pos.1 < self.height && self.screen_at(pos) != ch {
                    self.print_at(pos, ch)?;
                }
            }
        }

        self.flush()
    }

    fn resize(&mut self, width: TermInt, height: TermInt) {
        self.width = width;
        self.height = height;
        self.dirty = true;
    }

    pub fn clear(&mut self) -> Result<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All))?;
        self.screen = vec![' '; self.width as usize * self.height as usize];
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }

    ///////////////////////////////////////////////////////////////////////////

    fn screen_at(&self, pos: Coords) -> char {
        self.screen[self.width as usize * pos.1 as usize + pos.0 as usize]
    }

    fn print_at(&mut self, pos: Coords, ch: char) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch))?;
        self.screen[self.width as usize * pos.1 as usize + pos.0 as usize] = ch;
        Ok(())
    }
}
