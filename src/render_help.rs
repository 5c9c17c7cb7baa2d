use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED),
    ))
}

pub fn render_help(frame: &mut Frame, scroll: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" yardcalc Help ")
        .title_alignment(Alignment::Center)
        .style(Style::default().bg(Color::Black));

    let help_text = vec![
        Line::from(Span::styled(
            "yardcalc - Keypad Terminal Calculator",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        heading("Operations:"),
        Line::from("  + : Addition        (e.g., 5+3 = 8)"),
        Line::from("  - : Subtraction     (e.g., 10-4 = 6)"),
        Line::from("  * : Multiplication  (e.g., 6*7 = 42, also ×)"),
        Line::from("  / : Division        (e.g., 15/3 = 5, also ÷)"),
        Line::from("  ( ) : Grouping      (e.g., (1+2)*3 = 9)"),
        Line::from(""),
        heading("Rules:"),
        Line::from("  * and / bind tighter than + and -"),
        Line::from("  Equal precedence groups left to right (8-3-2 = 3)"),
        Line::from("  A leading minus starts a negative number (-3+5 = 2)"),
        Line::from("  Dividing by zero is reported as an error"),
        Line::from(""),
        heading("Keys:"),
        Line::from("  0-9 . + - * / ( ) : Type into the expression"),
        Line::from("  Enter or = : Evaluate"),
        Line::from("  Backspace : Delete the last character"),
        Line::from("  Esc or C : Clear the expression"),
        Line::from("  Ctrl+U : Clear the expression"),
        Line::from("  Ctrl+L : Clear calculation history"),
        Line::from("  q or Ctrl+C : Quit"),
        Line::from(""),
        heading("Navigation:"),
        Line::from("  ↑ ↓ : Recall calculation history"),
        Line::from("  PgUp/PgDn : Page through history"),
        Line::from("  Mouse wheel : Scroll through history"),
        Line::from("  Esc or F1 : Close this help"),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true })
        .scroll((scroll as u16, 0));

    frame.render_widget(Clear, frame.size());
    frame.render_widget(paragraph, frame.size());
}
