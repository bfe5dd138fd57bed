//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: power state, pending expression, theme
//! - `Display`: the calculator readout (the display sink)
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `Keypad`: clickable button grid; `KeypadState` keeps its geometry and
//!   emits core `Action`s for clicks
//!
//! Components receive external data as props, not by reaching into global
//! state, which keeps them testable against a `TestBackend`.

pub mod display;
pub mod keypad;
mod title_bar;

pub use display::{DISPLAY_HEIGHT, Display};
pub use keypad::{Keypad, KeypadState};
pub use title_bar::TitleBar;
