//! Terminal frontend: projects the session state to the screen and maps
//! key and mouse events back into session input

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyCommand};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use ui::{render, screen_areas, ScreenAreas};
