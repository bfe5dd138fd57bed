//! # Arithmetic
//!
//! The four binary operators, their failure modes, and the rule that turns
//! a result back into display text.
//!
//! Each operator is a variant of `Operator`. `apply()` returns a `Result`
//! instead of panicking, so the engine decides what an error looks like.

use std::fmt;

// ── Operator ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Symbol shown on the keypad and in the title bar.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "−",
            Operator::Mul => "×",
            Operator::Div => "÷",
        }
    }

    /// Maps a typed character to an operator, accepting both ASCII and the
    /// typographic multiplication and division signs.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' | '−' => Some(Operator::Sub),
            '*' | 'x' | 'X' | '×' => Some(Operator::Mul),
            '/' | '÷' => Some(Operator::Div),
            _ => None,
        }
    }
}

// ── Errors ──────────────────────────────────────────────────────────────────

/// Message shown when the divisor is exactly zero.
pub const DIVIDE_BY_ZERO_MESSAGE: &str = "Cannot divide by zero";

/// Message shown for any other failed computation.
pub const GENERIC_ERROR_MESSAGE: &str = "Error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    DivideByZero,
    /// Result overflowed to infinity or is not a number.
    NonFinite,
}

impl ArithmeticError {
    /// Text the display shows while this error is active.
    pub fn message(self) -> &'static str {
        match self {
            ArithmeticError::DivideByZero => DIVIDE_BY_ZERO_MESSAGE,
            ArithmeticError::NonFinite => GENERIC_ERROR_MESSAGE,
        }
    }
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticError::DivideByZero => write!(f, "division by zero"),
            ArithmeticError::NonFinite => write!(f, "result is not a finite number"),
        }
    }
}

impl std::error::Error for ArithmeticError {}

// ── Evaluation ──────────────────────────────────────────────────────────────

/// Applies `op` to the two operands.
pub fn apply(lhs: f64, op: Operator, rhs: f64) -> Result<f64, ArithmeticError> {
    let result = match op {
        Operator::Add => lhs + rhs,
        Operator::Sub => lhs - rhs,
        Operator::Mul => lhs * rhs,
        Operator::Div => {
            if rhs == 0.0 {
                return Err(ArithmeticError::DivideByZero);
            }
            lhs / rhs
        }
    };

    if !result.is_finite() {
        return Err(ArithmeticError::NonFinite);
    }
    Ok(result)
}

/// Parses display text as an operand. A trailing decimal point (`"5."`) is
/// accepted; anything unparseable counts as zero.
pub fn parse_operand(text: &str) -> f64 {
    text.trim_end_matches('.').parse::<f64>().unwrap_or(0.0)
}

// ── Formatting ──────────────────────────────────────────────────────────────

/// Fractional digits kept before trailing zeros are stripped.
pub const MAX_FRACTION_DIGITS: usize = 8;

/// Formats a finite result for the display.
///
/// Integers render without a fractional part. Everything else is rounded to
/// eight places with trailing zeros (and a dangling point) removed. Never
/// produces scientific notation or a negative zero.
pub fn format_result(result: f64) -> String {
    if result % 1.0 == 0.0 {
        return normalize_zero(format!("{result}"));
    }

    let rounded = round_fraction(result);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    normalize_zero(trimmed.to_string())
}

/// Rounds to `MAX_FRACTION_DIGITS` places. Exact ties go away from zero
/// (`0.001953125` becomes `0.00195313`), where `{:.8}` alone would round
/// them to even.
fn round_fraction(value: f64) -> String {
    // Only values with at most nine fractional binary digits can sit exactly
    // on a tie, and their nine-place rendering is exact.
    if (value * 512.0).fract() == 0.0 {
        let exact = format!("{value:.prec$}", prec = MAX_FRACTION_DIGITS + 1);
        if let Some(kept) = exact.strip_suffix('5') {
            return increment_last_digit(kept);
        }
    }
    format!("{value:.prec$}", prec = MAX_FRACTION_DIGITS)
}

/// Adds one unit in the last place of a decimal string, carrying as needed.
fn increment_last_digit(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    for slot in chars.iter_mut().rev() {
        match *slot {
            '9' => *slot = '0',
            '0'..='8' => {
                *slot = (*slot as u8 + 1) as char;
                return chars.into_iter().collect();
            }
            _ => {}
        }
    }
    // Carried past the leading digit
    let sign_len = usize::from(text.starts_with('-'));
    chars.insert(sign_len, '1');
    chars.into_iter().collect()
}

fn normalize_zero(text: String) -> String {
    if text == "-0" { "0".to_string() } else { text }
}
