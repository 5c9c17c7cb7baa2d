use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

use super::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(char),
    LeftParen,
    RightParen,
}

impl Token {
    /// Whether a `-` following this token would be a sign rather than a
    /// subtraction.
    fn starts_operand(&self) -> bool {
        matches!(self, Token::Operator(_) | Token::LeftParen)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Operator(op) => write!(f, "{}", op),
            Token::LeftParen => f.write_str("("),
            Token::RightParen => f.write_str(")"),
        }
    }
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

fn normalize(c: char) -> char {
    match c {
        '×' => '*',
        '÷' => '/',
        _ => c,
    }
}

fn read_number(chars: &mut Peekable<Chars<'_>>, num_str: &mut String) -> Result<f64, ParseError> {
    while let Some(&ch) = chars.peek() {
        if !is_number_char(ch) {
            break;
        }
        num_str.push(ch);
        chars.next();
    }

    num_str
        .parse::<f64>()
        .map_err(|_| ParseError::MalformedNumber(num_str.clone()))
}

pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let normalized: String = input.chars().map(normalize).collect();
    let mut tokens = Vec::new();
    let mut chars = normalized.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            _ if c.is_whitespace() => {
                chars.next();
            }
            '0'..='9' | '.' => {
                let mut num_str = String::new();
                let value = read_number(&mut chars, &mut num_str)?;
                tokens.push(Token::Number(value));
            }
            '-' if tokens.last().map_or(true, Token::starts_operand) => {
                chars.next();
                match chars.peek() {
                    Some(&next) if is_number_char(next) => {
                        let mut num_str = String::from("-");
                        let value = read_number(&mut chars, &mut num_str)?;
                        tokens.push(Token::Number(value));
                    }
                    // a lone minus stands for negative zero
                    _ => tokens.push(Token::Number(-0.0)),
                }
            }
            '+' | '-' | '*' | '/' => {
                tokens.push(Token::Operator(c));
                chars.next();
            }
            '(' => {
                tokens.push(Token::LeftParen);
                chars.next();
            }
            ')' => {
                tokens.push(Token::RightParen);
                chars.next();
            }
            _ => return Err(ParseError::InvalidCharacter(c)),
        }
    }

    log::trace!("tokenized {:?} into {:?}", input, tokens);
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Token::*;

    fn assert_tokens(input: &str, expected: Vec<Token>) {
        assert_eq!(tokenize(input).unwrap(), expected);
    }

    #[test]
    fn simple_add() {
        assert_tokens("432.5 + 24", vec![Number(432.5), Operator('+'), Number(24.0)]);
    }

    #[test]
    fn whitespace_is_skipped() {
        assert_tokens(" \t1 *\n2 ", vec![Number(1.0), Operator('*'), Number(2.0)]);
    }

    #[test]
    fn glyphs_are_normalized() {
        assert_tokens(
            "6×7÷2",
            vec![Number(6.0), Operator('*'), Number(7.0), Operator('/'), Number(2.0)],
        );
    }

    #[test]
    fn parens() {
        assert_tokens(
            "(1+2)*3",
            vec![
                LeftParen,
                Number(1.0),
                Operator('+'),
                Number(2.0),
                RightParen,
                Operator('*'),
                Number(3.0),
            ],
        );
    }

    #[test]
    fn leading_minus_is_folded() {
        assert_tokens("-3+5", vec![Number(-3.0), Operator('+'), Number(5.0)]);
    }

    #[test]
    fn minus_after_operator_is_folded() {
        assert_tokens("4*-2", vec![Number(4.0), Operator('*'), Number(-2.0)]);
    }

    #[test]
    fn minus_after_paren_is_folded() {
        assert_tokens(
            "(-.5)",
            vec![LeftParen, Number(-0.5), RightParen],
        );
    }

    #[test]
    fn minus_after_number_is_binary() {
        assert_tokens("8-3", vec![Number(8.0), Operator('-'), Number(3.0)]);
    }

    #[test]
    fn minus_after_right_paren_is_binary() {
        assert_tokens(
            "(1)-2",
            vec![LeftParen, Number(1.0), RightParen, Operator('-'), Number(2.0)],
        );
    }

    #[test]
    fn lone_minus_is_negative_zero() {
        let tokens = tokenize("-").unwrap();
        assert_eq!(tokens.len(), 1);
        match tokens[0] {
            Number(n) => {
                assert_eq!(n, 0.0);
                assert!(n.is_sign_negative());
            }
            other => panic!("expected a number, got {other:?}"),
        }
    }

    #[test]
    fn trailing_minus_after_operator() {
        assert_tokens("5*-", vec![Number(5.0), Operator('*'), Number(-0.0)]);
    }

    #[test]
    fn double_plus_stays_operators() {
        assert_tokens("++", vec![Operator('+'), Operator('+')]);
    }

    #[test]
    fn trailing_dot_is_accepted() {
        assert_tokens("5.", vec![Number(5.0)]);
    }

    #[test]
    fn malformed_number() {
        assert_eq!(
            tokenize("1.2.3"),
            Err(ParseError::MalformedNumber("1.2.3".to_string()))
        );
        assert_eq!(tokenize("."), Err(ParseError::MalformedNumber(".".to_string())));
        assert_eq!(tokenize("2*-1..0"), Err(ParseError::MalformedNumber("-1..0".to_string())));
    }

    #[test]
    fn invalid_character() {
        assert_eq!(tokenize("2+x"), Err(ParseError::InvalidCharacter('x')));
        assert_eq!(tokenize("2^3"), Err(ParseError::InvalidCharacter('^')));
    }

    #[test]
    fn display_round_trips_symbols() {
        let rendered: Vec<String> = tokenize("(1-2)/-4")
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(rendered, ["(", "1", "-", "2", ")", "/", "-4"]);
    }
}
