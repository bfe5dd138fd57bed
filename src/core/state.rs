//! # Calculator State
//!
//! Everything the calculator knows, in one struct. Nothing UI-specific
//! lives here; presentation state belongs to the `tui` module.
//!
//! ```text
//! Calculator
//! ├── power_on: bool                  // accepts input?
//! ├── display: String                 // exact text to render
//! ├── accumulator: Option<String>     // left operand, captured at operator press
//! ├── pending_operator: Option<Operator>
//! ├── awaiting_fresh_entry: bool      // next digit starts a new number
//! ├── error_active: bool              // error text on display, input suppressed
//! └── error_generation: u64           // keys the auto-clear timer
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::arithmetic::Operator;

/// Canonical display text for a cleared or powered-off calculator.
pub const ZERO: &str = "0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculator {
    pub power_on: bool,
    pub display: String,
    pub accumulator: Option<String>,
    pub pending_operator: Option<Operator>,
    pub awaiting_fresh_entry: bool,
    pub error_active: bool,
    /// Bumped every time an error is raised; a timeout only clears the
    /// error whose generation it carries.
    pub error_generation: u64,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// A powered-off calculator showing `0`.
    pub fn new() -> Self {
        Self {
            power_on: false,
            display: ZERO.to_string(),
            accumulator: None,
            pending_operator: None,
            awaiting_fresh_entry: false,
            error_active: false,
            error_generation: 0,
        }
    }

    /// True when the display should be rendered as disabled.
    pub fn is_disabled(&self) -> bool {
        !self.power_on
    }

    /// True when digit, operator and clear-entry input should be ignored.
    pub fn rejects_input(&self) -> bool {
        !self.power_on || self.error_active
    }

    /// Resets arithmetic state (not power, not the error generation).
    pub(crate) fn reset(&mut self) {
        self.display = ZERO.to_string();
        self.accumulator = None;
        self.pending_operator = None;
        self.awaiting_fresh_entry = false;
        self.error_active = false;
    }

    /// `"12 +"` while an operator is pending, for the status line.
    pub fn pending_expression(&self) -> Option<String> {
        match (&self.accumulator, self.pending_operator) {
            (Some(acc), Some(op)) => Some(format!("{} {}", acc, op.symbol())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculator_new_defaults() {
        let calc = Calculator::new();
        assert!(!calc.power_on);
        assert_eq!(calc.display, "0");
        assert!(calc.accumulator.is_none());
        assert!(calc.pending_operator.is_none());
        assert!(!calc.awaiting_fresh_entry);
        assert!(!calc.error_active);
        assert!(calc.is_disabled());
        assert!(calc.rejects_input());
    }

    #[test]
    fn test_pending_expression() {
        let mut calc = Calculator::new();
        assert_eq!(calc.pending_expression(), None);
        calc.accumulator = Some("12".to_string());
        calc.pending_operator = Some(Operator::Mul);
        assert_eq!(calc.pending_expression().as_deref(), Some("12 ×"));
    }

    #[test]
    fn test_reset_keeps_power_and_generation() {
        let mut calc = Calculator::new();
        calc.power_on = true;
        calc.display = "Cannot divide by zero".to_string();
        calc.error_active = true;
        calc.error_generation = 3;
        calc.reset();
        assert!(calc.power_on);
        assert_eq!(calc.display, "0");
        assert!(!calc.error_active);
        assert_eq!(calc.error_generation, 3);
    }
}
