use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use yardcalc::calculator::format_result;
use yardcalc::config::{Config, Mode};
use yardcalc::{evaluate, EvalResult};

fn main() -> Result<ExitCode> {
    let config = Config::parse();
    config.init_logging()?;

    if let Some(expression) = config.expression() {
        return Ok(run_once(&expression));
    }

    log::info!("starting {:?} mode", config.mode);
    match config.mode {
        Mode::Tui => run_tui()?,
        Mode::Line => run_line()?,
    }
    Ok(ExitCode::SUCCESS)
}

fn run_once(expression: &str) -> ExitCode {
    match evaluate(expression) {
        EvalResult::Value(value) => {
            println!("{}", format_result(value));
            ExitCode::SUCCESS
        }
        EvalResult::Error { message, .. } => {
            eprintln!("Error: {}", message);
            ExitCode::FAILURE
        }
    }
}

#[cfg(feature = "tui")]
fn run_tui() -> Result<()> {
    yardcalc::tui_mode::run_tui()
}

#[cfg(not(feature = "tui"))]
fn run_tui() -> Result<()> {
    anyhow::bail!("yardcalc was built without the `tui` feature")
}

#[cfg(feature = "line")]
fn run_line() -> Result<()> {
    yardcalc::line_mode::run_line()
}

#[cfg(not(feature = "line"))]
fn run_line() -> Result<()> {
    anyhow::bail!("yardcalc was built without the `line` feature")
}
