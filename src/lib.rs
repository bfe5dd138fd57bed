//! Calcpad library exports: the calculator core and its terminal adapter.

pub mod core;
pub mod tui;
