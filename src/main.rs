// src/main.rs

use color_eyre::eyre::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;
use tracing::info;

mod app;
mod config;
mod core;
mod logging;
mod ui;

use app::{App, SurveyView};
use config::SurveyConfig;
use crate::core::models::{OptionId, Tab};

fn main() -> Result<()> {
    color_eyre::install()?;
    logging::initialize_logging()?;
    let config = SurveyConfig::load()?;
    install_panic_hook();

    let mut app = App::new(&config);
    info!(show_results = config.show_results, "Survey page opened.");
    let result = run_then_restore(|| run(&mut app), restore_terminal);
    info!("Survey page closed.");
    result
}

/// Runs `body`, then `restore`, whatever `body` returned. An error from
/// `body` takes precedence over one from `restore`.
fn run_then_restore(
    body: impl FnOnce() -> Result<()>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<()> {
    let result = body();
    let restored = restore();
    result?;
    restored
}

/// Enters the alternate screen and drives the draw/input loop until quit.
fn run(app: &mut App) -> Result<()> {
    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key);
                }
            }
        }
    }
    Ok(())
}

/// Leaves the alternate screen and raw mode. Both steps are attempted even
/// if the first one fails.
fn restore_terminal() -> Result<()> {
    let left_screen = stdout().execute(LeaveAlternateScreen).map(|_| ());
    disable_raw_mode()?;
    left_screen?;
    Ok(())
}

/// Leaves the alternate screen before the panic report is printed.
fn install_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        hook(panic_info);
    }));
}

/// Routes a key press to the handler of the view currently on screen.
fn handle_key(app: &mut App, key: KeyEvent) {
    let ctrl_c = key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
    if ctrl_c || key.code == KeyCode::Esc {
        app.quit();
        return;
    }
    match app.survey.view() {
        SurveyView::Voting => handle_voting_input(app, key.code),
        SurveyView::Submitted => handle_submitted_input(app, key.code),
        SurveyView::Results => handle_results_input(app, key.code),
    }
}

/// Handles input while the voting form is shown.
fn handle_voting_input(app: &mut App, key_code: KeyCode) {
    let survey = &mut app.survey;
    match key_code {
        KeyCode::Up => survey.select_previous(),
        KeyCode::Down => survey.select_next(),
        KeyCode::Tab => survey.toggle_tab(),
        KeyCode::Enter => {
            survey.submit();
        }
        KeyCode::Backspace if survey.state.is_typing() => survey.pop_char(),
        KeyCode::Char(c) if survey.state.is_typing() => survey.push_char(c),
        KeyCode::Char(c) => {
            let picked = c
                .to_digit(10)
                .and_then(|d| (d as usize).checked_sub(1))
                .and_then(OptionId::from_index);
            if let Some(id) = picked {
                survey.select_option(id);
            }
        }
        _ => {}
    }
}

/// Handles input on the acknowledgment screen.
fn handle_submitted_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Tab => {
            app.survey.switch_tab(Tab::Results)
        }
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}

/// Handles input on the results tab.
fn handle_results_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Tab => app.survey.switch_tab(Tab::Vote),
        KeyCode::Up => app.survey.scroll_results_up(),
        KeyCode::Down => app.survey.scroll_results_down(),
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_eyre::eyre::eyre;
    use std::cell::Cell;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn new_app() -> App {
        App::new(&SurveyConfig::default())
    }

    #[test]
    fn digits_pick_options_directly() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.survey.state.selected, Some(OptionId::Food));
        press(&mut app, KeyCode::Char('0'));
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.survey.state.selected, Some(OptionId::Food));
    }

    #[test]
    fn typing_goes_to_custom_text() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('6'));
        type_text(&mut app, "Клуб 42 q");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.survey.state.custom_text, "Клуб 42 ");
        assert!(!app.should_quit);
        assert_eq!(app.survey.state.selected, Some(OptionId::Custom));
    }

    #[test]
    fn enter_submits_a_full_custom_answer() {
        let mut app = new_app();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.survey.state.selected, Some(OptionId::Custom));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.survey.view(), SurveyView::Voting);
        type_text(&mut app, "Игровая комната");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.survey.view(), SurveyView::Submitted);
    }

    #[test]
    fn results_shortcut_after_submit() {
        let mut app = new_app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.survey.view(), SurveyView::Results);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.survey.results_scroll, 1);
        assert_eq!(app.survey.state.selected, Some(OptionId::Rest));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.survey.view(), SurveyView::Submitted);
    }

    #[test]
    fn terminal_restored_when_setup_fails() {
        let restored = Cell::new(false);
        let result = run_then_restore(
            || Err(eyre!("no terminal")),
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert!(restored.get());
        assert_eq!(result.unwrap_err().to_string(), "no terminal");
    }

    #[test]
    fn body_error_wins_over_restore_error() {
        let result = run_then_restore(|| Err(eyre!("draw failed")), || Err(eyre!("still raw")));
        assert_eq!(result.unwrap_err().to_string(), "draw failed");
        let result = run_then_restore(|| Ok(()), || Err(eyre!("still raw")));
        assert_eq!(result.unwrap_err().to_string(), "still raw");
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let mut app = new_app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = new_app();
        press(&mut app, KeyCode::Char('6'));
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert_eq!(app.survey.state.custom_text, "");
    }
}
