use super::app::App;
use super::helpers::{format_with_spaces, highlight_expression, wrap_text};
use crate::calc_engine::EvalResult;
use crate::calculator::format_result;
use crate::render_help::render_help;
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use std::time::Duration;

const MIN_TERMINAL_WIDTH: u16 = 60;
const MIN_TERMINAL_HEIGHT: u16 = 23;
const KEYPAD_WIDTH: u16 = 26;

const KEYPAD: [[(&str, char); 4]; 5] = [
    [("C", 'c'), ("÷", '/'), ("×", '*'), ("-", '-')],
    [("7", '7'), ("8", '8'), ("9", '9'), ("+", '+')],
    [("4", '4'), ("5", '5'), ("6", '6'), ("=", '=')],
    [("1", '1'), ("2", '2'), ("3", '3'), (".", '.')],
    [("0", '0'), ("(", '('), (")", ')'), ("⌫", '⌫')],
];

pub fn run_ui_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            if app.show_help {
                render_help(f, app.help_scroll);
            } else {
                ui(f, app);
            }
        })?;

        if app.should_quit {
            break;
        }

        if crossterm::event::poll(Duration::from_millis(50))? {
            match crossterm::event::read()? {
                Event::Key(KeyEvent { code, modifiers, kind, .. }) if kind == KeyEventKind::Press => {
                    handle_key_event(app, code, modifiers);
                }
                Event::Mouse(event) => {
                    handle_mouse_event(app, event);
                }
                _ => {}
            }
        }
    }
    Ok(())
}

fn handle_key_event(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    if app.show_help {
        match code {
            KeyCode::Down => app.help_scroll = app.help_scroll.saturating_add(1),
            KeyCode::Up => app.help_scroll = app.help_scroll.saturating_sub(1),
            KeyCode::PageDown => app.help_scroll = app.help_scroll.saturating_add(10),
            KeyCode::PageUp => app.help_scroll = app.help_scroll.saturating_sub(10),
            KeyCode::Esc | KeyCode::F(1) => {
                app.show_help = false;
                app.help_scroll = 0;
            }
            _ => {}
        }
        return;
    }

    if modifiers.contains(KeyModifiers::CONTROL) {
        match code {
            KeyCode::Char('c') | KeyCode::Char('d') => app.should_quit = true,
            KeyCode::Char('u') | KeyCode::Char('U') => app.clear_input(),
            KeyCode::Char('l') => app.clear_history(),
            _ => {}
        }
        return;
    }

    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Char(c) if !modifiers.contains(KeyModifiers::ALT) => app.press(c),
        KeyCode::Enter => app.submit(),
        KeyCode::Backspace | KeyCode::Delete => app.backspace(),
        KeyCode::Esc => app.clear_input(),
        KeyCode::Up => app.navigate_history(-1),
        KeyCode::Down => app.navigate_history(1),
        KeyCode::PageUp => app.scroll_history(-1),
        KeyCode::PageDown => app.scroll_history(1),
        KeyCode::F(1) => {
            app.show_help = true;
            app.help_scroll = 0;
        }
        _ => {}
    }
}

fn handle_mouse_event(app: &mut App, event: crossterm::event::MouseEvent) {
    if app.show_help {
        match event.kind {
            MouseEventKind::ScrollDown => app.help_scroll = app.help_scroll.saturating_add(3),
            MouseEventKind::ScrollUp => app.help_scroll = app.help_scroll.saturating_sub(3),
            _ => {}
        }
    } else {
        match event.kind {
            MouseEventKind::ScrollDown => {
                app.history_scroll = app.history_scroll.saturating_add(3);
            }
            MouseEventKind::ScrollUp => {
                app.history_scroll = app.history_scroll.saturating_sub(3);
            }
            _ => {}
        }
    }
}

fn ui(frame: &mut Frame, app: &mut App) {
    let terminal_size = frame.size();

    app.terminal_too_small = terminal_size.width < MIN_TERMINAL_WIDTH
        || terminal_size.height < MIN_TERMINAL_HEIGHT;

    if app.terminal_too_small {
        render_resize_message(frame, terminal_size);
        return;
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(4),
            Constraint::Min(17),
            Constraint::Length(2),
        ])
        .split(terminal_size);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Length(KEYPAD_WIDTH), Constraint::Min(20)])
        .split(layout[1]);

    render_display(frame, app, layout[0]);
    render_keypad(frame, app, body[0]);
    render_history(frame, app, body[1]);
    render_status(frame, layout[2]);
    app.list_height = body[1].height as usize;
}

fn render_resize_message(frame: &mut Frame, area: Rect) {
    let message = format!(
        "Terminal too small! Min size: {}x{}. Current: {}x{}",
        MIN_TERMINAL_WIDTH, MIN_TERMINAL_HEIGHT, area.width, area.height
    );

    let text = vec![
        Line::from(Span::styled(
            message,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Please resize your terminal window",
            Style::default().fg(Color::Yellow),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Resize Required ")
        .title_alignment(Alignment::Center);

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn render_display(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" yardcalc ")
        .title_alignment(Alignment::Center);

    let state = app.state();
    let expression = Line::from(highlight_expression(
        state.display_expression(),
        Style::default().fg(Color::Cyan),
    ));
    let outcome = match &state.error {
        Some(message) => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled(
            state.result.clone(),
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        )),
    };

    let paragraph = Paragraph::new(vec![expression, outcome])
        .block(block)
        .alignment(Alignment::Right);
    frame.render_widget(paragraph, area);
}

fn keypad_char(c: char) -> char {
    match c {
        '×' => '*',
        '÷' => '/',
        '\n' | '\r' => '=',
        _ => c.to_ascii_lowercase(),
    }
}

fn render_keypad(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Keypad ")
        .title_alignment(Alignment::Center);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(3); KEYPAD.len()])
        .split(inner_area);

    let pressed = app.last_key.map(keypad_char);

    for (row, keys) in rows.iter().zip(KEYPAD.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, 4); keys.len()])
            .split(*row);

        for (cell, (label, key)) in cells.iter().zip(keys.iter()) {
            let style = if pressed == Some(*key) {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else if matches!(key, '+' | '-' | '*' | '/' | '=') {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };

            let button = Paragraph::new(*label)
                .style(style)
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::DarkGray)),
                );
            frame.render_widget(button, *cell);
        }
    }
}

fn render_history(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" History ")
        .title_alignment(Alignment::Center);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    if app.history.is_empty() {
        let empty_msg = Paragraph::new("No calculations yet. Press = or Enter to evaluate.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(empty_msg, inner_area);
        return;
    }

    let mut items = Vec::new();
    let mut item_start_indices = Vec::with_capacity(app.history.len());
    let wrap_width = inner_area.width.saturating_sub(4) as usize;

    for (i, entry) in app.history.iter().enumerate() {
        item_start_indices.push(items.len());

        let is_selected = i == app.cursor_history;
        let base_style = Style::default().fg(if is_selected { Color::Yellow } else { Color::Cyan });

        let input = format_with_spaces(&entry.input);
        for (line_idx, line) in wrap_text(&input, wrap_width).into_iter().enumerate() {
            let prefix = if line_idx == 0 { "> " } else { "  " };
            let mut spans = vec![Span::styled(prefix, Style::default().fg(Color::Green))];
            spans.extend(highlight_expression(&line, base_style));
            items.push(ListItem::new(Line::from(spans)));
        }

        let outcome = match &entry.result {
            EvalResult::Value(value) => Span::styled(
                format!("  = {}", format_result(*value)),
                Style::default()
                    .fg(Color::LightMagenta)
                    .add_modifier(Modifier::BOLD),
            ),
            EvalResult::Error { message, .. } => Span::styled(
                format!("  = Error: {}", message),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        };
        let time = Span::styled(
            format!("  ({:.3} ms)", entry.duration.as_secs_f64() * 1000.0),
            Style::default().fg(Color::DarkGray),
        );
        items.push(ListItem::new(Line::from(vec![outcome, time])));
    }

    if app.scroll_to_bottom {
        app.history_scroll = items.len().saturating_sub(inner_area.height as usize);
        app.scroll_to_bottom = false;
    }

    let list = List::new(items)
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

    let mut state = ListState::default()
        .with_selected(item_start_indices.get(app.cursor_history).copied())
        .with_offset(app.history_scroll);

    frame.render_stateful_widget(list, inner_area, &mut state);
}

fn render_status(frame: &mut Frame, area: Rect) {
    let keys = [
        ("Enter/=", "Calculate"),
        ("Esc/C", "Clear"),
        ("Up/Down", "History"),
        ("F1", "Help"),
        ("q", "Quit"),
    ];

    let spans: Vec<Span> = keys
        .iter()
        .flat_map(|(key, desc)| {
            vec![
                Span::styled(
                    *key,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" {} ", desc), Style::default().fg(Color::DarkGray)),
            ]
        })
        .collect();

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
