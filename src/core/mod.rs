//! # Core Calculator Logic
//!
//! This module contains Calcpad's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Calculator (state)   │
//!                    │  • Action (inputs)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. No timers.      │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  Browser   │      │   Tests    │
//!     │  Adapter   │      │  Adapter   │      │            │
//!     │ (ratatui)  │      │  (future)  │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `Calculator` struct, all arithmetic state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`arithmetic`]: Operators, `ArithmeticError`, result formatting
//! - [`theme`]: Light/dark preference and its on-disk store
//! - [`config`]: `~/.calcpad/config.toml` loading and resolution

pub mod action;
pub mod arithmetic;
pub mod config;
pub mod state;
pub mod theme;

pub use action::{Action, Effect, update};
pub use arithmetic::Operator;
pub use state::Calculator;
pub use theme::{Theme, ThemeStore};
