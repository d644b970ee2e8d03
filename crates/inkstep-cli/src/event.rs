//! Event loop and key dispatch.

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use miette::IntoDiagnostic;
use ratatui::DefaultTerminal;

use super::app::App;
use super::ui;

/// Run the viewer until `q`, restoring the terminal however it ends.
pub fn run_event_loop(app: &mut App<'_>) -> miette::Result<()> {
    let mut terminal = ratatui::init();
    let result = run_loop(&mut terminal, app);
    ratatui::restore();
    result
}

fn run_loop(terminal: &mut DefaultTerminal, app: &mut App<'_>) -> miette::Result<()> {
    while app.running {
        terminal
            .draw(|frame| ui::render(frame, app))
            .into_diagnostic()?;

        // Blocking: each transition finishes rendering before the next key is read
        if let Event::Key(key) = event::read().into_diagnostic()? {
            // Only handle key press events (not release on Windows)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            handle_key(app, key.code)?;
        }
    }
    Ok(())
}

/// Dispatch one key. Unbound keys are ignored.
pub fn handle_key(app: &mut App<'_>, code: KeyCode) -> inkstep::Result<()> {
    tracing::trace!(?code, "key pressed");
    match code {
        KeyCode::Left => app.step_backward(),
        KeyCode::Right => app.step_forward(),
        KeyCode::Char('s') => app.toggle_window(),
        KeyCode::Char('q') => {
            tracing::debug!(status = %app.status_text(), "quit");
            app.quit();
            Ok(())
        }
        _ => Ok(()),
    }
}
