use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec!["".to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if word_width > width {
            let mut remaining = word;
            while !remaining.is_empty() {
                let mut chunk_width = 0;
                let mut chunk_byte_len = 0;

                for c in remaining.chars() {
                    let char_width = UnicodeWidthChar::width(c).unwrap_or(1);
                    if chunk_width + char_width > width && chunk_byte_len > 0 {
                        break;
                    }
                    chunk_width += char_width;
                    chunk_byte_len += c.len_utf8();
                }

                if !current_line.is_empty() {
                    lines.push(std::mem::take(&mut current_line));
                    current_width = 0;
                }

                lines.push(remaining[..chunk_byte_len].to_string());
                remaining = &remaining[chunk_byte_len..];
            }
            continue;
        }

        if current_width + word_width + 1 > width && !current_line.is_empty() {
            lines.push(std::mem::take(&mut current_line));
            current_width = 0;
        }

        if !current_line.is_empty() {
            current_line.push(' ');
            current_width += 1;
        }

        current_line.push_str(word);
        current_width += word_width;
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines
}

/// Spaces out binary operators: `1+2*-3` becomes `1 + 2 * -3`. A minus that
/// acts as a sign stays attached to its number.
pub fn format_with_spaces(expr: &str) -> String {
    let mut result = String::new();
    let mut prev: Option<char> = None;

    for c in expr.chars().filter(|c| !c.is_whitespace()) {
        let is_sign = c == '-'
            && prev.map_or(true, |p| matches!(p, '+' | '-' | '*' | '/' | '×' | '÷' | '('));
        match c {
            '+' | '-' | '*' | '/' | '×' | '÷' if !is_sign => {
                result.push(' ');
                result.push(c);
                result.push(' ');
            }
            _ => result.push(c),
        }
        prev = Some(c);
    }

    result.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn highlight_expression(expr: &str, base_style: Style) -> Vec<Span<'static>> {
    let operator_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let number_style = Style::default().fg(Color::LightGreen);

    let mut spans = Vec::new();
    let mut number = String::new();

    for c in expr.chars() {
        if c.is_ascii_digit() || c == '.' {
            number.push(c);
            continue;
        }
        if !number.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut number), number_style));
        }

        match c {
            '+' | '-' | '*' | '/' | '×' | '÷' => {
                spans.push(Span::styled(c.to_string(), operator_style));
            }
            ' ' => spans.push(Span::raw(" ")),
            _ => spans.push(Span::styled(c.to_string(), base_style)),
        }
    }

    if !number.is_empty() {
        spans.push(Span::styled(number, number_style));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_words() {
        assert_eq!(wrap_text("1 + 2 + 3", 5), ["1 + 2", "+ 3"]);
    }

    #[test]
    fn splits_long_words() {
        assert_eq!(wrap_text("123456789", 4), ["1234", "5678", "9"]);
    }

    #[test]
    fn zero_width() {
        assert_eq!(wrap_text("1+2", 0), [""]);
    }

    #[test]
    fn spaces_binary_operators() {
        assert_eq!(format_with_spaces("1+2*3-4/2"), "1 + 2 * 3 - 4 / 2");
    }

    #[test]
    fn keeps_signs_attached() {
        assert_eq!(format_with_spaces("-3+5"), "-3 + 5");
        assert_eq!(format_with_spaces("4*-2"), "4 * -2");
        assert_eq!(format_with_spaces("(-1)-2"), "(-1) - 2");
    }

    #[test]
    fn normalizes_existing_spacing() {
        assert_eq!(format_with_spaces("  1 +2  "), "1 + 2");
    }

    #[test]
    fn highlight_groups_numbers() {
        let spans = highlight_expression("12.5*(3)", Style::default());
        let parts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(parts, ["12.5", "*", "(", "3", ")"]);
    }
}
