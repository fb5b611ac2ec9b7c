//! Clickable keypad widget
//!
//! Buttons carry the [`InputEvent`] they emit, so a mouse click and the
//! matching keyboard shortcut flow through the same session code path.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::session::InputEvent;
use crate::core::Operator;

/// A single keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// The character shown on the button
    pub label: char,
    /// Whether the button is currently highlighted
    pub pressed: bool,
    /// The event this button emits
    pub event: InputEvent,
}

impl KeypadButton {
    /// Creates a digit button
    #[must_use]
    pub fn digit(d: u8) -> Self {
        Self {
            label: char::from(b'0' + (d % 10)),
            pressed: false,
            event: InputEvent::Digit(d % 10),
        }
    }

    /// Creates an operator button labeled with its display glyph
    #[must_use]
    pub const fn operator(op: Operator) -> Self {
        Self {
            label: op.glyph(),
            pressed: false,
            event: InputEvent::Op(op),
        }
    }

    /// Creates the decimal point button
    #[must_use]
    pub const fn decimal() -> Self {
        Self {
            label: '.',
            pressed: false,
            event: InputEvent::Decimal,
        }
    }

    /// Creates the equals button
    #[must_use]
    pub const fn equals() -> Self {
        Self {
            label: '=',
            pressed: false,
            event: InputEvent::Equals,
        }
    }

    /// Creates the clear button
    #[must_use]
    pub const fn clear() -> Self {
        Self {
            label: 'C',
            pressed: false,
            event: InputEvent::Clear,
        }
    }

    /// Creates the backspace button
    #[must_use]
    pub const fn backspace() -> Self {
        Self {
            label: '←',
            pressed: false,
            event: InputEvent::Backspace,
        }
    }

    /// Creates the sign toggle button
    #[must_use]
    pub const fn toggle_sign() -> Self {
        Self {
            label: '±',
            pressed: false,
            event: InputEvent::ToggleSign,
        }
    }

    /// Creates the pi shortcut button
    #[must_use]
    pub const fn pi() -> Self {
        Self {
            label: 'π',
            pressed: false,
            event: InputEvent::Pi,
        }
    }

    /// Creates the fraction entry button
    #[must_use]
    pub const fn fraction() -> Self {
        Self {
            label: '/',
            pressed: false,
            event: InputEvent::FractionSlash,
        }
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The keypad layout, a 6x4 grid with some empty cells
/// ```text
/// [ C ] [ ← ] [ ± ] [ ÷ ]
/// [ 7 ] [ 8 ] [ 9 ] [ × ]
/// [ 4 ] [ 5 ] [ 6 ] [ - ]
/// [ 1 ] [ 2 ] [ 3 ] [ + ]
/// [ π ] [ 0 ] [ . ] [ = ]
/// [ / ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Cells in row-major order; None renders as an empty cell
    cells: Vec<Option<KeypadButton>>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let cells = vec![
            Some(KeypadButton::clear()),
            Some(KeypadButton::backspace()),
            Some(KeypadButton::toggle_sign()),
            Some(KeypadButton::operator(Operator::Divide)),
            Some(KeypadButton::digit(7)),
            Some(KeypadButton::digit(8)),
            Some(KeypadButton::digit(9)),
            Some(KeypadButton::operator(Operator::Multiply)),
            Some(KeypadButton::digit(4)),
            Some(KeypadButton::digit(5)),
            Some(KeypadButton::digit(6)),
            Some(KeypadButton::operator(Operator::Subtract)),
            Some(KeypadButton::digit(1)),
            Some(KeypadButton::digit(2)),
            Some(KeypadButton::digit(3)),
            Some(KeypadButton::operator(Operator::Add)),
            Some(KeypadButton::pi()),
            Some(KeypadButton::digit(0)),
            Some(KeypadButton::decimal()),
            Some(KeypadButton::equals()),
            Some(KeypadButton::fraction()),
            None,
            None,
            None,
        ];

        Self {
            cells,
            cols: 4,
            rows: 6,
        }
    }

    /// Number of buttons (empty cells excluded)
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Grid dimensions as (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets the button at a grid position
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)?.as_ref()
        } else {
            None
        }
    }

    /// Finds the cell index of the button that emits `event`
    #[must_use]
    pub fn find(&self, event: InputEvent) -> Option<usize> {
        self.cells
            .iter()
            .position(|cell| cell.map(|b| b.event) == Some(event))
    }

    /// Highlights the button for `event`, releasing all others
    pub fn highlight(&mut self, event: InputEvent) {
        self.release_all();
        if let Some(index) = self.find(event) {
            if let Some(Some(button)) = self.cells.get_mut(index) {
                button.set_pressed(true);
            }
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for button in self.cells.iter_mut().flatten() {
            button.set_pressed(false);
        }
    }

    /// Iterates buttons with their (row, col) positions
    pub fn buttons_with_positions(
        &self,
    ) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.as_ref().map(|b| ((i / self.cols, i % self.cols), b))
        })
    }

    /// Converts a click position inside `area` to the event of the button
    /// under it, accounting for the one-cell border
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<InputEvent> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;
        self.button_at(row, col).map(|b| b.event)
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub const fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        if inner.width < self.keypad.cols as u16 || inner.height < self.keypad.rows as u16 {
            return; // too small to render
        }

        let btn_width = inner.width / self.keypad.cols as u16;
        let btn_height = inner.height / self.keypad.rows as u16;

        for ((row, col), button) in self.keypad.buttons_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            let style = if button.pressed {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                match button.event {
                    InputEvent::Digit(_) => Style::default().fg(Color::White),
                    InputEvent::Op(_) => Style::default().fg(Color::Yellow),
                    InputEvent::Equals => Style::default().fg(Color::Green),
                    InputEvent::Clear => Style::default().fg(Color::Red),
                    _ => Style::default().fg(Color::Cyan),
                }
            };

            if btn_width >= 3 {
                let label = format!("[{}]", button.label);
                let width = label.chars().count() as u16;
                let label_x = x + btn_width.saturating_sub(width) / 2;
                let label_y = y + btn_height / 2;
                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(label_x, label_y, &Span::styled(label, style), btn_width);
                }
            }
        }
    }
}
