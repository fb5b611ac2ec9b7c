//! Screen layout and rendering
//!
//! Rendering is a pure projection of [`CalculatorApp`] state; nothing here
//! mutates the session.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Title of the outer frame
pub const APP_TITLE: &str = " fracalc ";

/// Keyboard shortcuts shown in the help sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("Enter", "Evaluate"),
    ("Esc", "Clear"),
    ("%", "Fraction"),
    ("p", "Insert pi"),
    ("s", "Sign"),
    ("Bksp", "Delete"),
    ("↑", "Recall"),
    ("Ctrl+L", "Clear all"),
    ("Ctrl+C", "Quit"),
];

/// Operators help line
pub const HELP_OPERATORS: &str = "Ops: + - × ÷";

/// The screen regions, exposed so the event loop can hit-test mouse clicks
/// against the keypad area
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Pending expression line
    pub expression: Rect,
    /// Fraction annotation line
    pub fraction: Rect,
    /// Entry line (number being typed, or error text)
    pub input: Rect,
    /// History list
    pub history: Rect,
    /// Keypad grid
    pub keypad: Rect,
    /// Help sidebar
    pub help: Rect,
}

/// Splits the terminal area into the screen regions
#[must_use]
pub fn screen_areas(area: Rect) -> ScreenAreas {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Min(35),    // main calculator column
            Constraint::Length(22), // keypad
            Constraint::Length(20), // help sidebar
        ])
        .split(area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // expression
            Constraint::Length(3), // fraction note
            Constraint::Length(3), // entry
            Constraint::Min(5),    // history
        ])
        .split(columns[0]);

    ScreenAreas {
        expression: rows[0],
        fraction: rows[1],
        input: rows[2],
        history: rows[3],
        keypad: columns[1],
        help: columns[2],
    }
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    let areas = screen_areas(area);

    frame.render_widget(
        Block::default()
            .title(APP_TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
        area,
    );

    render_expression(app, areas.expression, frame);
    render_fraction_note(app, areas.fraction, frame);
    render_input(app, areas.input, frame);
    render_history(app, areas.history, frame);
    frame.render_widget(KeypadWidget::new(app.keypad()), areas.keypad);
    render_help_sidebar(areas.help, frame);
}

fn render_expression(app: &CalculatorApp, area: Rect, frame: &mut Frame) {
    let paragraph = Paragraph::new(Span::styled(
        app.session().expression_display().to_string(),
        Style::default().fg(Color::Gray),
    ))
    .block(
        Block::default()
            .title(" Expression ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(paragraph, area);
}

fn render_fraction_note(app: &CalculatorApp, area: Rect, frame: &mut Frame) {
    let text = app.session().fraction_display().unwrap_or_default();
    let paragraph = Paragraph::new(Span::styled(
        text,
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::ITALIC),
    ))
    .block(
        Block::default()
            .title(" Fraction ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

fn render_input(app: &CalculatorApp, area: Rect, frame: &mut Frame) {
    let style = if app.session().has_error() {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    };

    let paragraph = Paragraph::new(Span::styled(app.session().input_display(), style)).block(
        Block::default()
            .title(" Entry ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(paragraph, area);
}

fn render_history(app: &CalculatorApp, area: Rect, frame: &mut Frame) {
    let visible = area.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = app
        .history()
        .iter_rev()
        .take(visible)
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    entry.expression.clone(),
                    Style::default().fg(Color::Gray),
                ),
                Span::raw(" = "),
                Span::styled(entry.result.clone(), Style::default().fg(Color::Cyan)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" History (newest first) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );
    frame.render_widget(list, area);
}

fn render_help_sidebar(area: Rect, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(3)])
        .split(area);

    let shortcuts: Vec<ListItem> = HELP_SHORTCUTS
        .iter()
        .map(|(key, desc)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{key:>6}"), Style::default().fg(Color::Yellow)),
                Span::raw(" "),
                Span::styled(*desc, Style::default().fg(Color::Gray)),
            ]))
        })
        .collect();

    let list = List::new(shortcuts).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(list, chunks[0]);

    let ops = Paragraph::new(Span::styled(
        HELP_OPERATORS,
        Style::default().fg(Color::Cyan),
    ))
    .block(
        Block::default()
            .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(ops, chunks[1]);
}
