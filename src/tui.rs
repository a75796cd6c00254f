//! Terminal session setup and teardown.

use std::io::{self, Stdout};

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        cursor::{Hide, Show},
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enters raw mode and the alternate screen with mouse capture enabled.
///
/// Mouse capture is required: pan and scroll-zoom are pointer driven.
///
/// # Errors
///
/// Returns an error if the terminal refuses any of the mode switches.
pub fn init() -> io::Result<Tui> {
    enable_raw_mode()?;
    if let Err(err) = execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture, Hide) {
        disable_raw_mode()?;
        return Err(err);
    }
    install_panic_hook();

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;
    Ok(terminal)
}

/// Leaves the terminal the way [`init`] found it.
///
/// # Errors
///
/// Returns an error if a mode switch fails.
pub fn restore() -> io::Result<()> {
    execute!(io::stdout(), Show, DisableMouseCapture, LeaveAlternateScreen)?;
    disable_raw_mode()
}

/// Restores the terminal before the default panic report is printed.
fn install_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if let Err(err) = restore() {
            eprintln!("failed to restore terminal: {err}");
        }
        hook(panic_info);
    }));
}
