//! Dashboard command implementation
//!
//! This module implements the `dashboard` subcommand which runs the
//! interactive calculator in the terminal. The event loop is synchronous:
//! each parameter edit is applied and the derived metrics fully recomputed
//! before the next event is read.

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, time::Duration};
use tracing::info;

use trip_econ::{
    config::{load_config, Config},
    dashboard::{CalculatorApp, View},
};

/// Execute the dashboard command
///
/// # Arguments
/// * `config_path` - Configuration file path
/// * `view` - Initial view ("one-way" or "fleet")
pub fn execute(config_path: &std::path::Path, view: &str) -> Result<()> {
    let view = parse_view(view)?;
    let cfg = load_config(config_path)?;

    info!("Starting calculator dashboard");
    run_dashboard(&cfg, view)
}

/// Parse the initial view string
fn parse_view(view: &str) -> Result<View> {
    match view {
        "one-way" => Ok(View::OneWay),
        "fleet" => Ok(View::Fleet),
        _ => anyhow::bail!("Invalid view: '{}'. Must be one of: one-way, fleet", view),
    }
}

/// Run the calculator dashboard
fn run_dashboard(cfg: &Config, view: View) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Clear screen on startup
    terminal.clear()?;

    // Initialize state
    let mut app = CalculatorApp::new(cfg, view);

    // Main loop
    let result = loop {
        // Render UI
        if let Err(e) = terminal.draw(|f| app.render(f)) {
            break Err(e.into());
        }

        // Handle events with timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Handle key and check if we should quit
                if app.handle_key(key) {
                    break Ok(());
                }

                // Clear terminal when switching views to avoid residual content
                if matches!(key.code, crossterm::event::KeyCode::Tab) {
                    terminal.clear()?;
                }
            }
        }
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_view() {
        assert_eq!(parse_view("one-way").unwrap(), View::OneWay);
        assert_eq!(parse_view("fleet").unwrap(), View::Fleet);
        assert!(parse_view("charts").is_err());
    }
}
