use super::error::EvalError;
use super::token::Token;

/// Divisors closer to zero than this are treated as zero.
pub const DIVISION_EPSILON: f64 = 1e-12;

fn apply(op: char, a: f64, b: f64) -> Result<f64, EvalError> {
    match op {
        '+' => Ok(a + b),
        '-' => Ok(a - b),
        '*' => Ok(a * b),
        '/' => {
            if b.abs() < DIVISION_EPSILON {
                return Err(EvalError::DivisionByZero);
            }
            Ok(a / b)
        }
        _ => Err(EvalError::UnknownToken(op.to_string())),
    }
}

/// Reduces a postfix token sequence to a single value.
pub fn eval_postfix(tokens: &[Token]) -> Result<f64, EvalError> {
    let mut stack: Vec<f64> = Vec::with_capacity(tokens.len());

    for token in tokens {
        match *token {
            Token::Number(n) => stack.push(n),
            Token::Operator(op) => {
                let (Some(b), Some(a)) = (stack.pop(), stack.pop()) else {
                    return Err(EvalError::InvalidExpression);
                };
                stack.push(apply(op, a, b)?);
            }
            Token::LeftParen | Token::RightParen => {
                return Err(EvalError::UnknownToken(token.to_string()));
            }
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        _ => Err(EvalError::InvalidExpression),
    }
}
