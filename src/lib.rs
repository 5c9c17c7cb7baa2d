pub mod calc_engine;
pub mod calculator;
pub mod config;

#[cfg(feature = "line")]
pub mod line_mode;
#[cfg(feature = "tui")]
mod render_help;
#[cfg(feature = "tui")]
pub mod tui_mode;

pub use calc_engine::{evaluate, try_evaluate, CalcError, EvalError, EvalResult, ParseError};
pub use calculator::{format_result, Calculator, CalculatorState};
