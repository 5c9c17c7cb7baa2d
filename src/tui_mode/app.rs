use std::time::{Duration, Instant};

use crate::calc_engine::EvalResult;
use crate::calculator::{Calculator, CalculatorState};

pub struct HistoryEntry {
    pub input: String,
    pub result: EvalResult,
    pub duration: Duration,
}

pub struct App {
    pub calculator: Calculator,
    pub history: Vec<HistoryEntry>,
    pub cursor_history: usize,
    pub last_key: Option<char>,
    pub should_quit: bool,
    pub show_help: bool,
    pub help_scroll: usize,
    pub list_height: usize,
    pub history_scroll: usize,
    pub scroll_to_bottom: bool,
    pub terminal_too_small: bool,
}

impl App {
    pub fn new() -> Self {
        App {
            calculator: Calculator::new(),
            history: Vec::new(),
            cursor_history: 0,
            last_key: None,
            should_quit: false,
            show_help: false,
            help_scroll: 0,
            list_height: 5,
            history_scroll: 0,
            scroll_to_bottom: false,
            terminal_too_small: false,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        self.calculator.state()
    }

    pub fn press(&mut self, key: char) {
        if matches!(key, '=' | '\n' | '\r') {
            self.submit();
            return;
        }
        if self.calculator.press(key) {
            self.last_key = Some(key);
        }
    }

    pub fn submit(&mut self) {
        self.last_key = Some('=');
        let input = self.state().expression.clone();

        let start_time = Instant::now();
        let Some(result) = self.calculator.on_equals() else {
            return;
        };
        let duration = start_time.elapsed();

        self.history.push(HistoryEntry {
            input,
            result,
            duration,
        });
        self.cursor_history = self.history.len().saturating_sub(1);
        self.scroll_to_bottom = true;
    }

    pub fn backspace(&mut self) {
        self.last_key = Some('⌫');
        self.calculator.on_backspace();
    }

    pub fn clear_input(&mut self) {
        self.last_key = Some('c');
        self.calculator.on_clear();
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        self.cursor_history = 0;
        self.history_scroll = 0;
    }

    pub fn navigate_history(&mut self, direction: i32) {
        if self.history.is_empty() {
            return;
        }
        if direction < 0 && self.cursor_history > 0 {
            self.cursor_history -= 1;
        } else if direction > 0 && self.cursor_history < self.history.len() - 1 {
            self.cursor_history += 1;
        }

        self.recall_selected();
        self.scroll_to_bottom = false;
    }

    pub fn scroll_history(&mut self, direction: i32) {
        if self.history.is_empty() {
            return;
        }
        let step = self.list_height.saturating_sub(1).max(1);
        if direction < 0 {
            self.cursor_history = self.cursor_history.saturating_sub(step);
        } else {
            self.cursor_history = self
                .cursor_history
                .saturating_add(step)
                .min(self.history.len() - 1);
        }

        self.recall_selected();
        self.scroll_to_bottom = false;
    }

    fn recall_selected(&mut self) {
        if let Some(entry) = self.history.get(self.cursor_history) {
            self.calculator.recall(&entry.input);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
