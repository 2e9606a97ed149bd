use crossterm::{cursor, terminal};
use ratatui::backend::CrosstermBackend;
use std::io::{self, Stdout};

pub type Terminal = ratatui::Terminal<CrosstermBackend<Stdout>>;

#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

pub fn size() -> io::Result<Size> {
    terminal::size().map(|(width, height)| Size { width, height })
}

pub fn queue(command: impl crossterm::Command) -> io::Result<()> {
    crossterm::queue!(io::stdout(), command)
}

pub fn flush() -> io::Result<()> {
    io::Write::flush(&mut io::stdout())
}

/// Leaves raw mode before the panic message is printed.
fn install_panic_hook() {
    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = end();
        previous_hook(panic_info);
    }));
}

pub fn begin() -> io::Result<Terminal> {
    install_panic_hook();
    terminal::enable_raw_mode()?;
    queue(terminal::EnterAlternateScreen)?;
    flush()?;
    ratatui::Terminal::new(CrosstermBackend::new(io::stdout()))
}

pub fn end() -> io::Result<()> {
    terminal::disable_raw_mode()?;
    queue(terminal::LeaveAlternateScreen)?;
    queue(cursor::Show)?;
    flush()
}
