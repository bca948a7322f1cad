//! Crossterm backend: raw mode, alternate screen, diffed flushing.

use std::io::{self, Stdout, Write};
use std::panic;

use crossterm::{
    cursor, event, queue,
    style::{Attribute, Color, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};
use log::debug;

use crate::buffer::{Buffer, Cell};
use crate::element::Element;
use crate::layout::{layout, LayoutResult};
use crate::render::render_to_buffer;
use crate::text::char_width;
use crate::types::TextStyle;

pub struct Terminal {
    stdout: Stdout,
    current: Buffer,
    previous: Buffer,
    last_layout: LayoutResult,
}

impl Terminal {
    /// Enter raw mode and the alternate screen. The terminal is restored on
    /// drop and on panic.
    pub fn new() -> io::Result<Self> {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = restore();
            original_hook(info);
        }));

        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;
        stdout.flush()?;

        let (width, height) = terminal::size()?;
        debug!("Terminal initialized at {width}x{height}");

        let mut terminal = Self {
            stdout,
            current: Buffer::new(width, height),
            previous: Buffer::new(width, height),
            last_layout: LayoutResult::new(),
        };
        terminal.invalidate();
        Ok(terminal)
    }

    /// Make the next render repaint every cell.
    fn invalidate(&mut self) {
        let (width, height) = self.size();
        self.previous = Buffer::new(width, height);
        for y in 0..height {
            for x in 0..width {
                if let Some(cell) = self.previous.get_mut(x, y) {
                    cell.char = '\0';
                }
            }
        }
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current.width(), self.current.height())
    }

    /// Lay out and paint `root`, writing only the cells that changed.
    pub fn render(&mut self, root: &Element) -> io::Result<&LayoutResult> {
        let (width, height) = terminal::size()?;
        if (width, height) != self.size() {
            self.current = Buffer::new(width, height);
            self.invalidate();
            queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        self.current.clear();
        self.last_layout = layout(root, self.current.area());
        render_to_buffer(root, &self.last_layout, &mut self.current);

        self.flush_diff()?;
        std::mem::swap(&mut self.current, &mut self.previous);

        Ok(&self.last_layout)
    }

    /// Layout from the last render, for hit testing.
    pub fn layout(&self) -> &LayoutResult {
        &self.last_layout
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut next_x = u16::MAX;
        let mut last_y = u16::MAX;
        let mut last: Option<Cell> = None;

        for (x, y, cell) in self.current.diff(&self.previous) {
            if cell.wide_continuation {
                continue;
            }

            if y != last_y || x != next_x {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            let style_changed = last.is_none_or(|prev| {
                prev.fg != cell.fg || prev.bg != cell.bg || prev.style != cell.style
            });
            if style_changed {
                queue!(
                    self.stdout,
                    SetAttribute(Attribute::Reset),
                    SetForegroundColor(to_color(cell.fg)),
                    SetBackgroundColor(to_color(cell.bg))
                )?;
                for attribute in attributes(cell.style) {
                    queue!(self.stdout, SetAttribute(attribute))?;
                }
                last = Some(*cell);
            }

            write!(self.stdout, "{}", cell.char)?;
            last_y = y;
            next_x = x + char_width(cell.char).max(1) as u16;
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = restore();
    }
}

fn restore() -> io::Result<()> {
    let mut stdout = io::stdout();
    queue!(
        stdout,
        event::DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen
    )?;
    stdout.flush()?;
    terminal::disable_raw_mode()
}

fn to_color(rgb: crate::types::Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn attributes(style: TextStyle) -> impl Iterator<Item = Attribute> {
    [
        (style.bold, Attribute::Bold),
        (style.dim, Attribute::Dim),
        (style.underline, Attribute::Underlined),
        (style.reverse, Attribute::Reverse),
    ]
    .into_iter()
    .filter_map(|(on, attribute)| on.then_some(attribute))
}
