use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::ui::app::{App, InputMode};

pub(crate) fn as_tui() -> Result<()> {
    let mut app = App::new()?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| crate::ui::render::render(f, app))?;

        if let Event::Key(key) = event::read()? {
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app),
                InputMode::Insert => handle_insert_input(key, app),
                InputMode::EditBudget => handle_budget_input(key, app),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('c') | KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Char('i') | KeyCode::Enter => {
            app.input_mode = InputMode::Insert;
            app.status_message.clear();
        }
        KeyCode::Char('b') => {
            app.input_mode = InputMode::EditBudget;
            app.budget_index = 0;
            app.budget_input.clear();
        }
        KeyCode::Char('u') => app.upload_receipt("receipt.jpg"),
        KeyCode::Char('j') | KeyCode::Down => {
            // Render clamps to the last line
            app.chat_scroll = app.chat_scroll.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.stick_to_bottom = false;
            app.chat_scroll = app.chat_scroll.saturating_sub(1);
        }
        KeyCode::Char('g') => {
            app.stick_to_bottom = false;
            app.chat_scroll = 0;
        }
        KeyCode::Char('G') => app.stick_to_bottom = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Esc => app.status_message.clear(),
        _ => {}
    }
}

fn handle_insert_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => app.submit_chat(),
        KeyCode::Esc => {
            app.chat_input.clear();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            app.chat_input.pop();
        }
        KeyCode::Char(c) => app.chat_input.push(c),
        _ => {}
    }
}

fn handle_budget_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.budget_index + 1 < crate::models::Category::ALL.len() {
                app.budget_index += 1;
                app.budget_input.clear();
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.budget_index = app.budget_index.saturating_sub(1);
            app.budget_input.clear();
        }
        KeyCode::Char('+') | KeyCode::Char('=') => app.adjust_budget(1),
        KeyCode::Char('-') => app.adjust_budget(-1),
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => app.budget_input.push(c),
        KeyCode::Backspace => {
            app.budget_input.pop();
        }
        KeyCode::Enter => {
            if !app.budget_input.is_empty() {
                app.apply_budget_input();
            }
        }
        KeyCode::Esc => {
            if app.budget_input.is_empty() {
                app.input_mode = InputMode::Normal;
            } else {
                app.budget_input.clear();
            }
        }
        _ => {}
    }
}
