mod cli;
mod paths;
mod render;

use std::fs::File;
use std::io::{self, Stdout};
use std::process::ExitCode;

use checklist::{
    CharBudget, ChecklistConfig, ChecklistController, ConfigError, SelectionChanged, Summary,
};
use clap::Parser;
use serde_json::Value;
use simplelog::{Config, WriteLogger};

use crate::cli::{Action, Cli};
use crate::render::TextRenderer;

const MEDIA_FILTER: &str = include_str!("../../demos/media-filter.json");

type Checklist = ChecklistController<Value, TextRenderer<Stdout>>;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(paths::log_file);
    match File::create(&log_path) {
        Ok(log_file) => {
            if let Err(e) = WriteLogger::init(cli.log_level, Config::default(), log_file) {
                eprintln!("Error: failed to initialize logger: {}", e);
            }
        }
        Err(e) => eprintln!("Error: cannot create {}: {}", log_path.display(), e),
    }

    let mut checklist = match build(&cli) {
        Ok(checklist) => checklist,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut failed = false;
    for action in &cli.actions {
        log::info!("Action {:?}", action);
        match *action {
            Action::Toggle(index) => match checklist.toggle(index) {
                Ok(event) => print_event(&event),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    failed = true;
                }
            },
            Action::Clear(focus) => print_event(&checklist.clear_checked(focus)),
            Action::Scroll(offset) => {
                let window = checklist.viewport().window_size();
                checklist.resize_viewport(offset, window);
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn build(cli: &Cli) -> Result<Checklist, ConfigError> {
    let config = match &cli.config {
        Some(path) => ChecklistConfig::load(path)?,
        None => ChecklistConfig::from_json_str(MEDIA_FILTER)?,
    };

    let checklist = ChecklistController::from_config(&config, TextRenderer::new(io::stdout()))?;
    let checklist = match cli.label_width {
        Some(columns) => checklist.with_measurer(CharBudget(columns)),
        None => checklist,
    };

    println!(
        "{}",
        header_line(&config, checklist.header_count(), checklist.summary())
    );
    Ok(checklist)
}

/// Title, item count and summary label. The icon is starred while the
/// selection narrows the list.
fn header_line(config: &ChecklistConfig, count: usize, summary: &Summary) -> String {
    let title = config.title.as_deref().unwrap_or("Check list");
    match config.label_icon.as_deref() {
        Some(icon) if summary.active => {
            format!("{title} ({count} items): [{icon}*] {}", summary.text)
        }
        Some(icon) => format!("{title} ({count} items): [{icon}] {}", summary.text),
        None => format!("{title} ({count} items): {}", summary.text),
    }
}

fn print_event(event: &SelectionChanged<Value>) {
    match serde_json::to_string(event) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize selection change: {}", e),
    }
}
