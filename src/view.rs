use std::{
    io::{self, stdin, stdout, Stdout, Write},
    thread,
};

use termion::{
    event::Key,
    input::TermRead,
    raw::{IntoRawMode, RawTerminal},
};
use tracing::{debug, warn};

use crate::{SimHandle, World};

pub use canvas::Canvas;
mod canvas;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbols {
    pub alive: char,
    pub dead: char,
    pub border: char,
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            alive: 'O',
            dead: ' ',
            border: '#',
        }
    }
}

/// the board as framed text, one line per row.
pub fn render<W>(world: &W, symbols: &Symbols) -> String
where
    W: World,
{
    Canvas::render(world, symbols).to_string()
}

enum Screen {
    Terminal(RawTerminal<Stdout>),
    Headless(Stdout),
}

pub struct View {
    screen: Screen,
    symbols: Symbols,
}

impl View {
    /// takes over the terminal in raw mode and listens for quit keys.
    pub fn terminal(symbols: Symbols, handle: SimHandle) -> io::Result<Self> {
        let mut out = stdout().into_raw_mode()?;
        write!(out, "{}", termion::cursor::Hide)?;
        thread::spawn(move || input_loop(handle));
        let screen = Screen::Terminal(out);
        Ok(Self { screen, symbols })
    }

    /// prints frames one after another, for pipes and dumb terminals.
    pub fn headless(symbols: Symbols) -> Self {
        let screen = Screen::Headless(stdout());
        Self { screen, symbols }
    }

    pub fn show<W>(&mut self, world: &W, generation: u64) -> io::Result<()>
    where
        W: World,
    {
        let status = format!("generation {generation}");
        match &mut self.screen {
            Screen::Terminal(out) => {
                let canvas = Canvas::render(world, &self.symbols);
                canvas.display(out, &format!("{status}  (q to quit)"))
            }
            Screen::Headless(out) => {
                let frame = render(world, &self.symbols);
                let mut out = out.lock();
                writeln!(out, "{frame}\n{status}\n")?;
                out.flush()
            }
        }
    }
}

impl Drop for View {
    fn drop(&mut self) {
        if let Screen::Terminal(out) = &mut self.screen {
            let show = termion::cursor::Show;
            if let Err(error) = write!(out, "{show}\r\n").and_then(|_| out.flush()) {
                warn!(%error, "failed to restore the terminal cursor");
            }
        }
    }
}

fn input_loop(handle: SimHandle) {
    for key in stdin().keys() {
        match key {
            Ok(Key::Char('q') | Key::Esc | Key::Ctrl('c')) => {
                debug!("quit key pressed");
                handle.stop();
                return;
            }
            Ok(_) => continue,
            Err(error) => {
                warn!(%error, "failed to read from the terminal");
                handle.stop();
                return;
            }
        }
    }
}
