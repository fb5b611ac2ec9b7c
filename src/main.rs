//! Terminal calculator binary

use std::io;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::layout::Rect;
use ratatui::{backend::CrosstermBackend, Terminal};

use fracalc::core::fraction::Fraction;
use fracalc::core::history::History;
use fracalc::tui::{render, screen_areas, CalculatorApp, InputHandler};

/// Terminal calculator with chained arithmetic and fraction entry
#[derive(Debug, Parser)]
#[command(name = "fracalc", version, about)]
struct Options {
    /// Largest denominator considered when annotating results as fractions
    #[arg(long, default_value_t = Fraction::DEFAULT_MAX_DENOMINATOR)]
    max_denominator: i64,

    /// Number of calculations kept in the history panel
    #[arg(long, default_value_t = History::DEFAULT_MAX_ENTRIES)]
    history_limit: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let options = Options::parse();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &options);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    options: &Options,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = CalculatorApp::with_limits(options.max_denominator, options.history_limit);
    let input_handler = InputHandler::new();

    loop {
        terminal.draw(|f| render(&app, f))?;

        match event::read()? {
            Event::Key(key) => app.handle(input_handler.handle_key(key)),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    let size = terminal.size()?;
                    let areas = screen_areas(Rect::new(0, 0, size.width, size.height));
                    if let Some(input) = app.keypad().hit_test(areas.keypad, mouse.column, mouse.row)
                    {
                        app.input(input);
                    }
                }
                MouseEventKind::Up(_) => app.release_keypad(),
                _ => {}
            },
            _ => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
