use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::format::{format_amount, percentage, time_ago, whole_percent};
use crate::models::Category;
use crate::ui::app::{App, InputMode};
use crate::ui::theme;
use crate::ui::util::{bar, truncate, wrap_text};

pub(crate) fn render(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Sidebar + chat
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Input bar
        ])
        .split(f.area());

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(30)])
        .split(chunks[0]);

    render_sidebar(f, content[0], app);
    render_chat(f, content[1], app);
    render_status_bar(f, chunks[1], app);
    render_input_bar(f, chunks[2], app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

// ── Sidebar ──────────────────────────────────────────────────

fn render_sidebar(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Monthly overview
            Constraint::Length(5), // Savings goal
            Constraint::Min(8),    // Spending goals
        ])
        .split(area);

    render_overview(f, chunks[0], app);
    render_savings(f, chunks[1], app);
    render_goals(f, chunks[2], app);
}

fn render_overview(f: &mut Frame, area: Rect, app: &App) {
    let total = app.total_spent();
    let pct = whole_percent(total, app.income);
    let ratio = percentage(total, app.income).to_f64().unwrap_or(0.0) / 100.0;
    let bar_width = area.width.saturating_sub(4) as usize;

    let lines = vec![
        Line::from(Span::styled(
            format_amount(total),
            Style::default()
                .fg(theme::TEXT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("of {}  {pct}%", format_amount(app.income)),
            theme::dim_style(),
        )),
        Line::from(Span::styled(
            bar(ratio, bar_width),
            Style::default().fg(theme::ACCENT),
        )),
    ];

    f.render_widget(
        Paragraph::new(lines).block(card_block(" Monthly Overview ")),
        area,
    );
}

fn render_savings(f: &mut Frame, area: Rect, app: &App) {
    let to_go = app.savings_goal - app.current_savings;
    let pct = whole_percent(app.current_savings, app.savings_goal);
    let ratio = percentage(app.current_savings, app.savings_goal)
        .to_f64()
        .unwrap_or(0.0)
        / 100.0;
    let bar_width = area.width.saturating_sub(4) as usize;

    let lines = vec![
        Line::from(Span::styled(
            format!(
                "{} / {}",
                format_amount(app.current_savings),
                format_amount(app.savings_goal)
            ),
            Style::default()
                .fg(theme::TEXT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} to go  {pct}%", format_amount(to_go)),
            theme::dim_style(),
        )),
        Line::from(Span::styled(
            bar(ratio, bar_width),
            Style::default().fg(theme::GREEN),
        )),
    ];

    f.render_widget(
        Paragraph::new(lines).block(card_block(" Savings Goal ")),
        area,
    );
}

fn render_goals(f: &mut Frame, area: Rect, app: &App) {
    let editing = app.input_mode == InputMode::EditBudget;
    let bar_width = area.width.saturating_sub(7) as usize;
    let mut lines: Vec<Line> = Vec::new();

    for (i, category) in Category::ALL.iter().enumerate() {
        let category = *category;
        let spent = app.category_spending(category);
        let budget = app.budgets.limit(category);
        let pct = percentage(spent, budget);

        let status = if pct >= Decimal::ONE_HUNDRED {
            "Over budget!".to_string()
        } else {
            let remaining = (Decimal::ONE_HUNDRED - pct.min(Decimal::ONE_HUNDRED))
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
            format!("{remaining}% remaining")
        };

        let selected = editing && i == app.budget_index;
        let name_style = if selected {
            theme::selected_style()
        } else {
            theme::normal_style()
        };
        let marker = if selected { "▸" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{} ", category.emoji()), theme::normal_style()),
            Span::styled(format!("{category}"), name_style),
            Span::styled(format!("  {status}"), theme::dim_style()),
        ]));

        if selected && !app.budget_input.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("   new: ${}", app.budget_input),
                Style::default().fg(theme::ACCENT),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                format!("   {} / {}", format_amount(spent), format_amount(budget)),
                theme::dim_style(),
            )));
        }

        let ratio = pct.to_f64().unwrap_or(0.0) / 100.0;
        let bar_color = if ratio > 0.9 {
            theme::RED
        } else if ratio > 0.7 {
            theme::YELLOW
        } else {
            theme::GREEN
        };
        lines.push(Line::from(Span::styled(
            format!("   {}", bar(ratio, bar_width)),
            Style::default().fg(bar_color),
        )));
        lines.push(Line::from(""));
    }

    f.render_widget(
        Paragraph::new(lines).block(card_block(" Spending Goals ")),
        area,
    );
}

fn card_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(title, theme::card_title_style()))
}

// ── Chat panel ───────────────────────────────────────────────

fn render_chat(f: &mut Frame, area: Rect, app: &mut App) {
    let width = area.width.saturating_sub(4) as usize;
    let height = area.height.saturating_sub(2) as usize;
    let now = Local::now();

    let mut lines: Vec<Line> = Vec::new();
    for msg in &app.messages {
        let (sender, body_style, alignment) = if msg.is_user {
            ("You", theme::user_style(), Alignment::Right)
        } else {
            ("BudgetBot", theme::bot_style(), Alignment::Left)
        };

        lines.push(
            Line::from(Span::styled(
                format!("{sender} · {}", time_ago(msg.timestamp, now)),
                theme::dim_style(),
            ))
            .alignment(alignment),
        );
        for text_line in wrap_text(&msg.text, width) {
            lines.push(Line::from(Span::styled(text_line, body_style)).alignment(alignment));
        }
        lines.push(Line::from(""));
    }

    // Keep the newest message visible unless the user scrolled away
    let max_scroll = lines.len().saturating_sub(height);
    if app.stick_to_bottom || app.chat_scroll > max_scroll {
        app.chat_scroll = max_scroll;
    }

    let visible: Vec<Line> = lines
        .into_iter()
        .skip(app.chat_scroll)
        .take(height)
        .collect();

    f.render_widget(
        Paragraph::new(visible).block(card_block(" BudgetBot ")),
        area,
    );
}

// ── Bars ─────────────────────────────────────────────────────

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mode_style = match app.input_mode {
        InputMode::Normal => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
        InputMode::Insert => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::GREEN)
            .add_modifier(Modifier::BOLD),
        InputMode::EditBudget => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::YELLOW)
            .add_modifier(Modifier::BOLD),
    };

    let info = format!(
        " {} expenses | {} spent this month",
        app.expenses.len(),
        format_amount(app.total_spent())
    );
    let status = truncate(&app.status_message, area.width.saturating_sub(40) as usize);

    let line = Line::from(vec![
        Span::styled(format!(" {} ", app.input_mode), mode_style),
        Span::styled(info, theme::status_bar_style()),
        Span::styled(format!("  {status}"), theme::status_bar_style()),
    ]);

    f.render_widget(
        Paragraph::new(line).style(theme::status_bar_style()),
        area,
    );
}

fn render_input_bar(f: &mut Frame, area: Rect, app: &App) {
    let (text, style) = match app.input_mode {
        InputMode::Insert => (
            format!(" > {}▏", app.chat_input),
            theme::command_bar_style(),
        ),
        InputMode::EditBudget => (
            format!(
                " {} budget: {}▏  (+/- step $50, Enter to set)",
                app.selected_category(),
                app.budget_input
            ),
            theme::command_bar_style(),
        ),
        InputMode::Normal => (
            " i chat | u upload receipt | b budgets | j/k scroll | ? help | q quit".to_string(),
            Style::default().fg(theme::TEXT_DIM).bg(theme::COMMAND_BG),
        ),
    };

    f.render_widget(Paragraph::new(text).style(style), area);
}

// ── Help overlay ─────────────────────────────────────────────

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            " BudgetBot Help ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        help_line(" i              Type a chat message (Enter sends, Esc done)"),
        help_line(" u              Upload a receipt (mock OCR in this build)"),
        help_line(" b              Edit budgets (j/k select, +/- step $50,"),
        help_line("                digits + Enter for an exact amount)"),
        help_line(" j/k or arrows  Scroll chat history"),
        help_line(" g/G            Jump to oldest / newest message"),
        help_line(" q or Ctrl-q    Quit"),
        Line::from(""),
        help_line(" Try: \"I spent $45 on groceries today\""),
        Line::from(""),
        Line::from(Span::styled(
            " Press any key to close ",
            theme::dim_style(),
        )),
    ];

    let width = 62.min(area.width);
    let height = (lines.len() as u16 + 2).min(area.height);
    let rect = Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    );

    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::ACCENT)),
        ),
        rect,
    );
}

fn help_line(text: &str) -> Line<'_> {
    Line::from(Span::styled(text, theme::normal_style()))
}
