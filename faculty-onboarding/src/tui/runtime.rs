//! Terminal setup and the event loop

use std::io::{Stdout, stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::form::Submitter;
use crate::wizard::Wizard;

use super::input::ViewState;
use super::theme::Theme;
use super::view::{self, ViewOptions};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

type Backend = CrosstermBackend<Stdout>;

fn setup_terminal() -> Result<Terminal<Backend>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    stdout()
        .execute(EnterAlternateScreen)
        .context("Failed to enter alternate screen")?;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    Terminal::new(CrosstermBackend::new(stdout())).context("Failed to create terminal")
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);
}

/// Run the wizard until the user quits
pub fn run<S: Submitter>(wizard: &mut Wizard<S>, options: ViewOptions) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, wizard, options);
    restore_terminal();
    terminal.show_cursor().ok();
    result
}

fn event_loop<S: Submitter>(
    terminal: &mut Terminal<Backend>,
    wizard: &mut Wizard<S>,
    options: ViewOptions,
) -> Result<()> {
    let theme = Theme::default();
    let mut view_state = ViewState::new();

    while !wizard.should_quit() {
        view_state.sync_step(wizard.state());
        terminal.draw(|f| view::render(f, wizard.state(), &view_state, &theme, options))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let Some(msg) = view_state.handle_key(wizard.state(), key) else {
            continue;
        };
        log::debug!("Dispatching {:?}", msg);
        let anchor = view_state.anchor(wizard.state());
        let focus = wizard.dispatch(msg);

        view_state.sync_step(wizard.state());
        if let Some(anchor) = &anchor {
            view_state.restore(wizard.state(), anchor);
        }
        if let Some(path) = focus.first() {
            view_state.focus_path(wizard.state(), path);
        }
    }

    log::info!(
        "Wizard closed after {} submission(s)",
        wizard.state().submitted_count
    );
    Ok(())
}
