use std::collections::HashMap;

use lazy_static::lazy_static;

use super::error::ParseError;
use super::token::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operator {
    pub precedence: u8,
    pub associativity: Associativity,
}

impl Operator {
    const fn left(precedence: u8) -> Self {
        Operator {
            precedence,
            associativity: Associativity::Left,
        }
    }

    /// Whether `self`, arriving as the next operator, forces `top` off the
    /// operator stack first.
    fn yields_to(&self, top: &Operator) -> bool {
        match self.associativity {
            Associativity::Left => self.precedence <= top.precedence,
            Associativity::Right => self.precedence < top.precedence,
        }
    }
}

lazy_static! {
    static ref OPERATORS: HashMap<char, Operator> = HashMap::from([
        ('+', Operator::left(1)),
        ('-', Operator::left(1)),
        ('*', Operator::left(2)),
        ('/', Operator::left(2)),
    ]);
}

/// Looks up precedence and associativity of an operator symbol.
pub fn operator(symbol: char) -> Option<&'static Operator> {
    OPERATORS.get(&symbol)
}

/// Reorders an infix token sequence into postfix order (shunting-yard).
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, ParseError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for &token in tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::Operator(symbol) => {
                let o1 = operator(symbol).ok_or_else(|| ParseError::UnknownToken(symbol.to_string()))?;

                while let Some(&Token::Operator(top)) = stack.last() {
                    let Some(o2) = operator(top) else { break };
                    if !o1.yields_to(o2) {
                        break;
                    }
                    output.push(Token::Operator(top));
                    stack.pop();
                }
                stack.push(token);
            }
            Token::LeftParen => stack.push(token),
            Token::RightParen => loop {
                match stack.pop() {
                    Some(Token::LeftParen) => break,
                    Some(op) => output.push(op),
                    None => return Err(ParseError::MismatchedParens),
                }
            },
        }
    }

    while let Some(top) = stack.pop() {
        match top {
            Token::LeftParen | Token::RightParen => return Err(ParseError::MismatchedParens),
            op => output.push(op),
        }
    }

    log::trace!("postfix: {}", render(&output));
    Ok(output)
}

fn render(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc_engine::token::tokenize;

    fn postfix(input: &str) -> String {
        let tokens = tokenize(input).unwrap();
        render(&to_postfix(&tokens).unwrap())
    }

    #[test]
    fn table_is_total_over_the_four_operators() {
        assert_eq!(operator('+'), Some(&Operator::left(1)));
        assert_eq!(operator('-'), Some(&Operator::left(1)));
        assert_eq!(operator('*'), Some(&Operator::left(2)));
        assert_eq!(operator('/'), Some(&Operator::left(2)));
        assert_eq!(operator('^'), None);
        assert_eq!(operator('('), None);
    }

    #[test]
    fn precedence() {
        assert_eq!(postfix("1+2*3"), "1 2 3 * +");
        assert_eq!(postfix("1*2+3"), "1 2 * 3 +");
    }

    #[test]
    fn left_associativity() {
        assert_eq!(postfix("8-3-2"), "8 3 - 2 -");
        assert_eq!(postfix("8/4/2"), "8 4 / 2 /");
    }

    #[test]
    fn parens_override_precedence() {
        assert_eq!(postfix("(1+2)*3"), "1 2 + 3 *");
        assert_eq!(postfix("2*(3-(4+5))"), "2 3 4 5 + - *");
    }

    #[test]
    fn composite() {
        assert_eq!(postfix("1+2*3-4/2"), "1 2 3 * + 4 2 / -");
    }

    #[test]
    fn right_associative_operator_waits_for_equal_precedence() {
        let pow = Operator {
            precedence: 3,
            associativity: Associativity::Right,
        };
        assert!(!pow.yields_to(&pow));
        assert!(pow.yields_to(&Operator::left(4)));
        assert!(Operator::left(2).yields_to(&Operator::left(2)));
        assert!(!Operator::left(1).yields_to(&Operator::left(0)));
    }

    #[test]
    fn unclosed_paren() {
        let tokens = tokenize("(1+2").unwrap();
        assert_eq!(to_postfix(&tokens), Err(ParseError::MismatchedParens));
    }

    #[test]
    fn unopened_paren() {
        let tokens = tokenize("1+2)").unwrap();
        assert_eq!(to_postfix(&tokens), Err(ParseError::MismatchedParens));
    }

    #[test]
    fn unknown_operator_is_rejected() {
        let tokens = [Token::Number(2.0), Token::Operator('%'), Token::Number(3.0)];
        assert_eq!(to_postfix(&tokens), Err(ParseError::UnknownToken("%".to_string())));
    }

    #[test]
    fn operators_without_operands_still_convert() {
        assert_eq!(postfix("++"), "+ +");
    }
}
