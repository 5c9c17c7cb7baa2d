use std::io::{stdin, stdout, Write};

use anyhow::{Context, Result};
use termion::{
    clear::CurrentLine as ClearLine,
    cursor::{DetectCursorPos, Goto},
    event::Key,
    input::TermRead,
    raw::IntoRawMode,
};

use crate::calc_engine::{evaluate, EvalResult};
use crate::calculator::format_result;

const PROMPT: &str = "Expression: ";

// Позиция символа -> байтовая позиция
fn char_index_to_byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

fn remove_char_at(s: &mut String, char_index: usize) {
    let byte_idx = char_index_to_byte_index(s, char_index);
    if let Some(c) = s[byte_idx..].chars().next() {
        s.drain(byte_idx..byte_idx + c.len_utf8());
    }
}

/// Text printed for one evaluated line.
pub fn render_outcome(input: &str, result: &EvalResult) -> String {
    match result {
        EvalResult::Value(value) => format!("{} = {}", input, format_result(*value)),
        EvalResult::Error { message, .. } => format!("{} = Error: {}", input, message),
    }
}

pub fn run_line() -> Result<()> {
    println!("yardcalc");
    println!("Supports: + - * / (also × ÷) and parentheses");
    println!("Navigation: ←/→, Backspace/Delete, Home/End, ↑/↓ for history");
    println!("Commands: 'quit' to exit, 'clear' to reset history\n");

    let mut stdout = stdout()
        .into_raw_mode()
        .context("failed to switch the terminal to raw mode")?;
    let mut history: Vec<String> = Vec::new();
    let mut history_index = 0;

    loop {
        let mut expression = String::new();
        let mut cursor_pos = 0; // в символах
        let (_, initial_y) = stdout.cursor_pos()?;

        let stdin = stdin();
        let mut keys = stdin.keys();

        loop {
            write!(stdout, "{}{}{}{}", Goto(1, initial_y), ClearLine, PROMPT, expression)?;
            let byte_pos = char_index_to_byte_index(&expression, cursor_pos);
            write!(stdout, "{}", Goto((PROMPT.len() + 1 + byte_pos) as u16, initial_y))?;
            stdout.flush()?;

            let Some(key) = keys.next() else {
                return Ok(());
            };
            match key? {
                Key::Char('\n') => break,
                Key::Ctrl('c') | Key::Ctrl('d') => {
                    write!(stdout, "\r\n")?;
                    return Ok(());
                }
                Key::Char(c) => {
                    let byte_idx = char_index_to_byte_index(&expression, cursor_pos);
                    expression.insert(byte_idx, c);
                    cursor_pos += 1;
                }
                Key::Backspace if cursor_pos > 0 => {
                    cursor_pos -= 1;
                    remove_char_at(&mut expression, cursor_pos);
                }
                Key::Delete if cursor_pos < expression.chars().count() => {
                    remove_char_at(&mut expression, cursor_pos);
                }
                Key::Left if cursor_pos > 0 => cursor_pos -= 1,
                Key::Right if cursor_pos < expression.chars().count() => cursor_pos += 1,
                Key::Home => cursor_pos = 0,
                Key::End => cursor_pos = expression.chars().count(),
                Key::Up if history_index > 0 => {
                    history_index -= 1;
                    expression = history[history_index].clone();
                    cursor_pos = expression.chars().count();
                }
                Key::Down => {
                    if history_index + 1 < history.len() {
                        history_index += 1;
                        expression = history[history_index].clone();
                    } else {
                        history_index = history.len();
                        expression.clear();
                    }
                    cursor_pos = expression.chars().count();
                }
                _ => {}
            }
        }

        let input = expression.trim();
        if input.is_empty() {
            write!(stdout, "\r\n")?;
            continue;
        }

        match input.to_lowercase().as_str() {
            "quit" | "exit" | "q" => {
                write!(stdout, "\r\nGoodbye!\r\n")?;
                return Ok(());
            }
            "clear" | "reset" => {
                history.clear();
                history_index = 0;
                write!(stdout, "\r\nHistory cleared\r\n\r\n")?;
                continue;
            }
            _ => {}
        }

        history.push(input.to_string());
        history_index = history.len();

        let result = evaluate(input);
        write!(stdout, "\r\n  {}\r\n\r\n", render_outcome(input, &result))?;
        stdout.flush()?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_lines() {
        assert_eq!(render_outcome("1+2*3", &evaluate("1+2*3")), "1+2*3 = 7");
        assert_eq!(render_outcome("7/2", &evaluate("7/2")), "7/2 = 3.5");
        assert_eq!(render_outcome("1/0", &evaluate("1/0")), "1/0 = Error: Division by zero");
    }

    #[test]
    fn removes_multibyte_chars() {
        let mut s = String::from("6×7");
        remove_char_at(&mut s, 1);
        assert_eq!(s, "67");
        remove_char_at(&mut s, 5);
        assert_eq!(s, "67");
    }
}
