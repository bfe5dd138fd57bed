//! # Actions
//!
//! Everything that can happen to the calculator becomes an `Action`.
//! User presses `7`? That's `Action::Digit(7)`.
//! The error timer fires? That's `Action::ErrorTimeout { generation }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing any I/O the caller must
//! perform. No side effects here. Timers live in the adapter.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::arithmetic::{self, ArithmeticError, Operator};
use crate::core::state::{Calculator, ZERO};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    TogglePower,
    /// A single decimal digit, `0..=9`.
    Digit(u8),
    Point,
    ClearEntry,
    ClearAll,
    Backspace,
    SetOperator(Operator),
    Evaluate,
    /// Delivered by the error-clear timer.
    ErrorTimeout { generation: u64 },
    Quit,
}

/// Side effects requested by `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Start (or restart) the auto-clear timer for this error generation.
    ScheduleErrorClear { generation: u64 },
    /// Drop any outstanding auto-clear timer.
    CancelErrorClear,
    Quit,
}

pub fn update(calc: &mut Calculator, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::TogglePower => toggle_power(calc),
        Action::Digit(d) => {
            append_digit(calc, d);
            Effect::None
        }
        Action::Point => {
            append_point(calc);
            Effect::None
        }
        Action::ClearEntry => {
            if !calc.rejects_input() {
                calc.display = ZERO.to_string();
            }
            Effect::None
        }
        Action::ClearAll => {
            let had_error = calc.error_active;
            calc.reset();
            if had_error {
                Effect::CancelErrorClear
            } else {
                Effect::None
            }
        }
        Action::Backspace => {
            backspace(calc);
            Effect::None
        }
        Action::SetOperator(op) => set_operator(calc, op),
        Action::Evaluate => evaluate(calc),
        Action::ErrorTimeout { generation } => {
            if calc.error_active && generation == calc.error_generation {
                debug!("Error generation {} expired, clearing", generation);
                calc.reset();
            } else {
                warn!(
                    "Ignoring stale error timeout (generation {}, current {})",
                    generation, calc.error_generation
                );
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn toggle_power(calc: &mut Calculator) -> Effect {
    let had_error = calc.error_active;
    calc.power_on = !calc.power_on;
    calc.reset();
    info!("Power {}", if calc.power_on { "on" } else { "off" });
    if had_error {
        Effect::CancelErrorClear
    } else {
        Effect::None
    }
}

fn append_digit(calc: &mut Calculator, digit: u8) {
    if calc.rejects_input() {
        return;
    }
    let Some(c) = char::from_digit(u32::from(digit), 10) else {
        warn!("Ignoring out-of-range digit {}", digit);
        return;
    };

    if calc.awaiting_fresh_entry {
        calc.display = ZERO.to_string();
        calc.awaiting_fresh_entry = false;
    }

    // Replace a lone zero so numbers never grow leading zeros
    if calc.display == ZERO {
        calc.display = c.to_string();
    } else {
        calc.display.push(c);
    }
}

fn append_point(calc: &mut Calculator) {
    if calc.rejects_input() {
        return;
    }
    if calc.awaiting_fresh_entry {
        calc.display = "0.".to_string();
        calc.awaiting_fresh_entry = false;
        return;
    }
    if !calc.display.contains('.') {
        calc.display.push('.');
    }
}

fn backspace(calc: &mut Calculator) {
    if calc.error_active || calc.awaiting_fresh_entry {
        return;
    }
    if calc.display.chars().count() <= 1 {
        calc.display = ZERO.to_string();
        return;
    }
    calc.display.pop();
    if calc.display == "-" {
        calc.display = ZERO.to_string();
    }
}

fn set_operator(calc: &mut Calculator, op: Operator) -> Effect {
    if calc.rejects_input() {
        return Effect::None;
    }

    // Left-to-right chaining: fold the pending operation first
    let mut effect = Effect::None;
    if calc.pending_operator.is_some() && !calc.awaiting_fresh_entry {
        effect = evaluate(calc);
        if calc.error_active {
            return effect;
        }
    }

    calc.pending_operator = Some(op);
    calc.accumulator = Some(calc.display.clone());
    calc.awaiting_fresh_entry = true;
    effect
}

fn evaluate(calc: &mut Calculator) -> Effect {
    if calc.rejects_input() {
        return Effect::None;
    }
    let (Some(op), Some(acc)) = (calc.pending_operator, calc.accumulator.as_deref()) else {
        return Effect::None;
    };

    let lhs = arithmetic::parse_operand(acc);
    let rhs = arithmetic::parse_operand(&calc.display);

    match arithmetic::apply(lhs, op, rhs) {
        Ok(result) => {
            calc.display = arithmetic::format_result(result);
            calc.accumulator = None;
            calc.pending_operator = None;
            calc.awaiting_fresh_entry = true;
            debug!("{} {} {} = {}", lhs, op.symbol(), rhs, calc.display);
            Effect::None
        }
        Err(e) => raise(calc, e),
    }
}

fn raise(calc: &mut Calculator, error: ArithmeticError) -> Effect {
    calc.error_active = true;
    calc.display = error.message().to_string();
    calc.error_generation += 1;
    info!("Calculator error: {} (generation {})", error, calc.error_generation);
    Effect::ScheduleErrorClear {
        generation: calc.error_generation,
    }
}
