use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::{Builder, Env, Target};
use log::LevelFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Full-screen keypad calculator
    Tui,
    /// Raw-mode line editor
    Line,
}

/// A keypad calculator for + - * / expressions with parentheses.
///
/// Pass an expression to evaluate it once, or run without one for an
/// interactive session.
#[derive(Parser, Debug)]
#[command(name = "yardcalc", version, about)]
pub struct Config {
    /// Interactive front end to start when no expression is given.
    #[arg(short, long, value_enum, default_value_t = Mode::Tui)]
    pub mode: Mode,

    /// Log verbosity, RUST_LOG takes precedence when set.
    #[arg(short, long, default_value_t = LevelFilter::Warn)]
    pub log_level: LevelFilter,

    /// Write log records to this file instead of stderr.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Expression to evaluate, words are joined with spaces. Put `--` in
    /// front of an expression that starts with `-`.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub expression: Vec<String>,
}

impl Config {
    /// The command-line expression, if any was given.
    pub fn expression(&self) -> Option<String> {
        if self.expression.is_empty() {
            None
        } else {
            Some(self.expression.join(" "))
        }
    }

    pub fn init_logging(&self) -> Result<()> {
        let env = Env::default().default_filter_or(self.log_level.as_str());
        let mut builder = Builder::from_env(env);

        if let Some(path) = &self.log_file {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            builder.target(Target::Pipe(Box::new(file)));
        }

        builder.try_init().context("logger already initialized")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::parse_from(["yardcalc"]);
        assert_eq!(config.mode, Mode::Tui);
        assert_eq!(config.log_level, LevelFilter::Warn);
        assert_eq!(config.log_file, None);
        assert_eq!(config.expression(), None);
    }

    #[test]
    fn expression_words_are_joined() {
        let config = Config::parse_from(["yardcalc", "1", "+", "2"]);
        assert_eq!(config.expression().as_deref(), Some("1 + 2"));
    }

    #[test]
    fn leading_minus_is_an_expression() {
        let config = Config::parse_from(["yardcalc", "--", "-3+5"]);
        assert_eq!(config.expression().as_deref(), Some("-3+5"));
    }

    #[test]
    fn options() {
        let config = Config::parse_from([
            "yardcalc",
            "--mode",
            "line",
            "-l",
            "debug",
            "--log-file",
            "calc.log",
        ]);
        assert_eq!(config.mode, Mode::Line);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_file, Some(PathBuf::from("calc.log")));
    }
}
