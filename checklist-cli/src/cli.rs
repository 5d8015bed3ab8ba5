//! Command-line arguments.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(
    name = "checklist-cli",
    version,
    about = "Replay selection actions against a check-list config",
    long_about = "Load a check-list config and replay toggles, clears and scrolls.\n\n\
                  Every selection change is printed as one JSON line."
)]
pub struct Cli {
    /// Check-list config (JSON). Uses the bundled media filter when omitted.
    #[arg(long, short, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Label width in terminal cells; longer two-title labels fall back to one.
    #[arg(long, value_name = "COLUMNS")]
    pub label_width: Option<usize>,

    /// Write logs to this file instead of the cache directory.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long = "log-level", default_value = "debug")]
    pub log_level: LevelFilter,

    /// Actions: `toggle=N`, `clear`, `clear=FOCUS`, `scroll=OFFSET`.
    #[arg(value_name = "ACTION")]
    pub actions: Vec<Action>,
}

/// One replayed user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Toggle(usize),
    Clear(Option<usize>),
    Scroll(usize),
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, arg) = match s.split_once('=') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };
        let index = arg
            .map(|arg| {
                arg.parse::<usize>()
                    .map_err(|e| format!("invalid index '{arg}': {e}"))
            })
            .transpose()?;

        match (name, index) {
            ("toggle", Some(index)) => Ok(Self::Toggle(index)),
            ("clear", focus) => Ok(Self::Clear(focus)),
            ("scroll", Some(offset)) => Ok(Self::Scroll(offset)),
            ("toggle" | "scroll", None) => Err(format!("'{name}' needs a value, e.g. {name}=1")),
            _ => Err(format!("unknown action '{name}'")),
        }
    }
}
