//! Arithmetic expression engine.
//!
//! An expression goes through three stages: [`tokenize`] turns the text into
//! tokens, [`to_postfix`] reorders them with the shunting-yard algorithm and
//! [`eval_postfix`] reduces the postfix sequence on a value stack. Every stage
//! is a pure function, so [`evaluate`] can be called from any thread.

mod error;
mod eval;
mod postfix;
mod token;

pub use error::{CalcError, EvalError, ParseError};
pub use eval::{eval_postfix, DIVISION_EPSILON};
pub use postfix::{operator, to_postfix, Associativity, Operator};
pub use token::{tokenize, Token};

/// Outcome of evaluating an expression, as handed to a front end.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalResult {
    Value(f64),
    Error { kind: CalcError, message: String },
}

impl EvalResult {
    pub fn is_value(&self) -> bool {
        matches!(self, EvalResult::Value(_))
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            EvalResult::Value(v) => Some(*v),
            EvalResult::Error { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            EvalResult::Value(_) => None,
            EvalResult::Error { message, .. } => Some(message),
        }
    }

    /// The structured failure behind the message.
    pub fn kind(&self) -> Option<&CalcError> {
        match self {
            EvalResult::Value(_) => None,
            EvalResult::Error { kind, .. } => Some(kind),
        }
    }
}

impl From<Result<f64, CalcError>> for EvalResult {
    fn from(result: Result<f64, CalcError>) -> Self {
        match result {
            Ok(value) => EvalResult::Value(value),
            Err(kind) => EvalResult::Error {
                message: kind.user_message().to_string(),
                kind,
            },
        }
    }
}

/// Runs the whole pipeline, keeping the precise failure.
pub fn try_evaluate(expression: &str) -> Result<f64, CalcError> {
    if expression.trim().is_empty() {
        return Err(CalcError::Empty);
    }

    let tokens = tokenize(expression)?;
    let postfix = to_postfix(&tokens)?;
    let value = eval_postfix(&postfix)?;
    Ok(value)
}

/// Evaluates `expression`, collapsing failures into a short user-facing
/// message.
pub fn evaluate(expression: &str) -> EvalResult {
    let result = try_evaluate(expression);
    match &result {
        Ok(value) => log::debug!("{:?} = {}", expression, value),
        Err(e) => log::debug!("{:?} failed: {}", expression, e),
    }
    result.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value() {
        assert_eq!(evaluate("1+2*3"), EvalResult::Value(7.0));
    }

    #[test]
    fn empty_skips_the_pipeline() {
        assert_eq!(try_evaluate(""), Err(CalcError::Empty));
        assert_eq!(try_evaluate(" \t "), Err(CalcError::Empty));
        assert_eq!(evaluate("   ").message(), Some("Empty expression"));
    }

    #[test]
    fn parse_errors_collapse() {
        let result = evaluate("2+a");
        assert_eq!(result.message(), Some("Parse error"));
        assert_eq!(
            result.kind(),
            Some(&CalcError::Parse(ParseError::InvalidCharacter('a')))
        );
    }

    #[test]
    fn division_by_zero_is_named() {
        let result = evaluate("1/0");
        assert!(!result.is_value());
        assert_eq!(result.message(), Some("Division by zero"));
        assert_eq!(result.kind(), Some(&CalcError::Eval(EvalError::DivisionByZero)));
    }

    #[test]
    fn other_eval_errors_collapse() {
        let result = evaluate("++");
        assert_eq!(result.message(), Some("Evaluation error"));
        assert_eq!(result.kind(), Some(&CalcError::Eval(EvalError::InvalidExpression)));
    }

    #[test]
    fn accessors() {
        let ok = evaluate("2*2");
        assert_eq!(ok.value(), Some(4.0));
        assert_eq!(ok.message(), None);
        assert_eq!(ok.kind(), None);
    }
}
