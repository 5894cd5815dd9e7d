// UI layer: prompts for `--interactive`, the spinner shown while the
// request is in flight and the terminal rendering of the result.

use crate::api::Rejection;
use crate::category::SammyType;
use crate::config::is_blank;
use crate::logger::Logger;
use anyhow::Result;
use crossterm::style::Stylize;
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::time::Duration;

/// Ask for a non-empty Sammy name.
pub fn prompt_name() -> Result<String> {
    let name: String = Input::new()
        .with_prompt("Sammy name")
        .validate_with(|input: &String| -> Result<(), &str> {
            if is_blank(input) {
                Err("Sammy has to have a name")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(name)
}

/// Keyboard-driven pick among all known types, baseline preselected.
pub fn prompt_type() -> Result<SammyType> {
    let items: Vec<&str> = SammyType::ALL.iter().map(SammyType::as_str).collect();
    let selection = Select::new()
        .with_prompt("Sammy type")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(SammyType::ALL[selection])
}

/// Spinner for the duration of the API call. Hidden automatically when
/// stderr is not a terminal. Log lines are printed above it.
pub fn spinner(message: &str) -> ProgressBar {
    let spinner = Logger::multi_progress().add(ProgressBar::new_spinner());
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Print the server message of a created Sammy.
pub fn print_created(out: &mut impl Write, message: &str) -> Result<()> {
    writeln!(out, "{message}")?;
    Ok(())
}

/// Report of a rejected request, one line per field error. Styled only
/// when `color` is set, i.e. the output is a terminal.
pub fn print_rejection(out: &mut impl Write, rejection: &Rejection, color: bool) -> Result<()> {
    writeln!(out, "{} {}", headline(color), rejection.message)?;
    for (field, err) in rejection.field_errors() {
        let label = format!("{field}:");
        if color {
            writeln!(out, "  {} {err}", label.dim())?;
        } else {
            writeln!(out, "  {label} {err}")?;
        }
    }
    Ok(())
}

/// Report of any other failure.
pub fn print_error(out: &mut impl Write, err: &anyhow::Error, color: bool) -> Result<()> {
    writeln!(out, "{} {err:#}", headline(color))?;
    Ok(())
}

fn headline(color: bool) -> String {
    if color {
        "Error".red().bold().to_string()
    } else {
        "Error".to_string()
    }
}
