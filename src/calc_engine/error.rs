use thiserror::Error;

/// Failures of the tokenizer and the infix-to-postfix converter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("invalid character '{0}'")]
    InvalidCharacter(char),
    #[error("malformed number '{0}'")]
    MalformedNumber(String),
    #[error("mismatched parentheses")]
    MismatchedParens,
    #[error("unknown token '{0}'")]
    UnknownToken(String),
}

/// Failures of the postfix evaluator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("invalid expression")]
    InvalidExpression,
    #[error("division by zero")]
    DivisionByZero,
    #[error("unknown token '{0}'")]
    UnknownToken(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("empty expression")]
    Empty,
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),
}

impl CalcError {
    /// The short message shown to the user. Parse failures collapse into a
    /// single message, only division by zero is named on the evaluator side.
    pub fn user_message(&self) -> &'static str {
        match self {
            CalcError::Empty => "Empty expression",
            CalcError::Parse(_) => "Parse error",
            CalcError::Eval(EvalError::DivisionByZero) => "Division by zero",
            CalcError::Eval(_) => "Evaluation error",
        }
    }
}
