use std::{
    fmt,
    io::{self, Write},
    iter,
};

use crate::{pos, view::Symbols, World};

/// A board drawn as text, framed by a border.
pub struct Canvas {
    lines: Vec<String>,
}

impl Canvas {
    pub fn render<W>(world: &W, symbols: &Symbols) -> Self
    where
        W: World,
    {
        let border: String = (0..world.width() + 2).map(|_| symbols.border).collect();
        let mut lines = Vec::with_capacity(world.height() + 2);
        lines.push(border.clone());
        for y in 0..world.height() {
            let mut line = String::with_capacity(world.width() + 2);
            line.push(symbols.border);
            for x in 0..world.width() {
                let alive = world.get(pos!(x as i32, y as i32)).is_alive();
                line.push(if alive { symbols.alive } else { symbols.dead });
            }
            line.push(symbols.border);
            lines.push(line);
        }
        lines.push(border);
        Self { lines }
    }

    /// draws the canvas from the top left corner of a raw terminal, one cursor jump per line.
    pub fn display(&self, out: &mut impl Write, status: &str) -> io::Result<()> {
        let clear = termion::clear::All;
        write!(out, "{clear}")?;
        let lines = self.lines.iter().map(String::as_str).chain(iter::once(status));
        for (index, line) in lines.enumerate() {
            // rows past the last addressable terminal row are dropped
            let Ok(row) = u16::try_from(index + 1) else {
                break;
            };
            let goto = termion::cursor::Goto(1, row);
            write!(out, "{goto}{line}")?;
        }
        out.flush()
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}
