//! Serializes a resolved frame buffer to a text stream.

use std::io::{self, Write};

use crate::render::{Cell, FrameBuffer};

/// Output format of a [`TerminalSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkStyle {
    /// Glyphs only, each row wrapped in `|`, the frame wrapped in `+---+`.
    Bordered,
    /// 24-bit background and foreground escape codes around every glyph.
    Ansi,
}

pub struct TerminalSink<W: Write> {
    out: W,
    style: SinkStyle,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W, style: SinkStyle) -> Self {
        Self { out, style }
    }

    /// Writes every row of `frame`, top to bottom, and flushes.
    pub fn write_frame(&mut self, frame: &FrameBuffer) -> io::Result<()> {
        match self.style {
            SinkStyle::Bordered => self.write_bordered(frame)?,
            SinkStyle::Ansi => self.write_ansi(frame)?,
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_border(&mut self, width: usize) -> io::Result<()> {
        writeln!(self.out, "+{}+", "-".repeat(width))
    }

    fn write_bordered(&mut self, frame: &FrameBuffer) -> io::Result<()> {
        self.write_border(frame.width())?;
        let mut line = String::with_capacity(frame.width() + 2);
        for row in frame.rows() {
            line.clear();
            line.push('|');
            line.extend(row.iter().map(|c| c.glyph));
            line.push('|');
            writeln!(self.out, "{line}")?;
        }
        self.write_border(frame.width())
    }

    fn write_ansi(&mut self, frame: &FrameBuffer) -> io::Result<()> {
        for row in frame.rows() {
            for cell in row {
                write_ansi_cell(&mut self.out, cell)?;
            }
            writeln!(self.out)?;
        }
        Ok(())
    }
}

fn write_ansi_cell<W: Write>(out: &mut W, cell: &Cell) -> io::Result<()> {
    let Cell {
        glyph,
        foreground: fg,
        background: bg,
    } = cell;
    write!(
        out,
        "\x1b[48;2;{};{};{}m\x1b[38;2;{};{};{}m{}\x1b[0;00m",
        bg.r, bg.g, bg.b, fg.r, fg.g, fg.b, glyph
    )
}
