//! Keypad calculator session.
//!
//! [`Calculator`] assembles an expression one key at a time and evaluates it on
//! `=`. It holds no terminal state, the front ends only render
//! [`CalculatorState`].

use crate::calc_engine::{evaluate, EvalResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculatorState {
    pub expression: String,
    pub result: String,
    pub error: Option<String>,
}

impl CalculatorState {
    /// Text for the expression line, `0` while nothing is typed.
    pub fn display_expression(&self) -> &str {
        if self.expression.is_empty() {
            "0"
        } else {
            &self.expression
        }
    }
}

/// Formats a value for display: whole numbers without a decimal point.
pub fn format_result(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        (value as i64).to_string()
    } else {
        value.to_string()
    }
}

fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

#[derive(Debug, Default)]
pub struct Calculator {
    state: CalculatorState,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// The number currently being typed: everything after the last operator
    /// or parenthesis.
    fn current_number(&self) -> &str {
        let expr = &self.state.expression;
        match expr.rfind(|c: char| is_operator(c) || c == '(' || c == ')') {
            Some(i) => &expr[i + 1..],
            None => expr,
        }
    }

    pub fn on_digit(&mut self, d: char) {
        if !(d.is_ascii_digit() || d == '.') {
            return;
        }
        if d == '.' && self.current_number().contains('.') {
            return;
        }
        self.state.expression.push(d);
        self.state.error = None;
    }

    pub fn on_operator(&mut self, op: char) {
        let op = match op {
            '×' => '*',
            '÷' => '/',
            _ => op,
        };
        if !is_operator(op) {
            return;
        }

        match self.state.expression.chars().last() {
            None if op != '-' => return,
            Some(last) if is_operator(last) => return,
            _ => {}
        }
        self.state.expression.push(op);
        self.state.error = None;
    }

    pub fn on_paren(&mut self, paren: char) {
        if paren == '(' || paren == ')' {
            self.state.expression.push(paren);
            self.state.error = None;
        }
    }

    pub fn on_backspace(&mut self) {
        self.state.expression.pop();
        self.state.result.clear();
        self.state.error = None;
    }

    pub fn on_clear(&mut self) {
        self.state = CalculatorState::default();
    }

    /// Replaces the expression with one recalled from history.
    pub fn recall(&mut self, expression: &str) {
        self.state = CalculatorState {
            expression: expression.to_string(),
            ..CalculatorState::default()
        };
    }

    /// Evaluates the expression. Returns `None` when there is nothing to
    /// evaluate.
    pub fn on_equals(&mut self) -> Option<EvalResult> {
        if self.state.expression.trim().is_empty() {
            return None;
        }

        let result = evaluate(&self.state.expression);
        match &result {
            EvalResult::Value(value) => {
                self.state.result = format_result(*value);
                self.state.error = None;
            }
            EvalResult::Error { message, .. } => {
                self.state.error = Some(message.clone());
            }
        }
        Some(result)
    }

    /// Feeds a keyboard character to the matching handler. Returns `false`
    /// for characters the keypad does not have.
    pub fn press(&mut self, key: char) -> bool {
        match key {
            '0'..='9' | '.' => self.on_digit(key),
            '+' | '-' | '*' | '/' | '×' | '÷' => self.on_operator(key),
            '(' | ')' => self.on_paren(key),
            '=' | '\n' | '\r' => {
                self.on_equals();
            }
            'c' | 'C' => self.on_clear(),
            _ => return false,
        }
        true
    }
}
