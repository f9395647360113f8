//! One-shot subcommands that work on the saved record without the menus.

use std::{fs, path::Path};

use crate::{
    cli::{io::confirm_action, output, ui::formatting::Formatter},
    errors::{CliError, WizardError},
    utils::build_info,
    wizard::{steps, WizardSession, WizardStep},
};

/// Prints the assembled prompt, or writes it to `output_path`.
pub fn prompt(session: &WizardSession, output_path: Option<&Path>) -> Result<(), CliError> {
    let text = session.prompt_text();
    match output_path {
        Some(path) => {
            fs::write(path, &text).map_err(|err| WizardError::Export(err.to_string()))?;
            output::success(format!("Prompt written to {}", path.display()));
        }
        None => println!("{text}"),
    }
    Ok(())
}

pub fn export(session: &WizardSession, dir: &Path, with_prompt: bool) -> Result<(), CliError> {
    let data = session.export_data(dir)?;
    output::success(format!("Saved {}", data.display()));
    if with_prompt {
        let prompt = session.export_prompt(dir)?;
        output::success(format!("Saved {}", prompt.display()));
    }
    Ok(())
}

pub fn import(session: &mut WizardSession, path: &Path) -> Result<(), CliError> {
    session.import(path)?;
    output::success("Data imported successfully.");
    Ok(())
}

pub fn reset(session: &mut WizardSession, assume_yes: bool) -> Result<(), CliError> {
    if !assume_yes && !confirm_action("Discard all saved answers?", false)? {
        output::info("Nothing was changed.");
        return Ok(());
    }
    session.reset();
    output::success("Saved answers cleared.");
    Ok(())
}

/// Lists every step with the current value of each visible field.
pub fn show(session: &WizardSession) -> Result<(), CliError> {
    let formatter = Formatter::new();
    let record = session.record();
    for step in WizardStep::ALL {
        formatter.print_header(format!("{}. {}", step.index(), step.title()));
        let rows: Vec<(String, String)> = steps::fields(step)
            .into_iter()
            .filter(|field| field.is_visible(record))
            .map(|field| (field.label.to_string(), field.summary(record)))
            .collect();
        formatter.print_key_values(&rows);
    }
    Ok(())
}

pub fn version() -> Result<(), CliError> {
    let formatter = Formatter::new();
    formatter.print_header("Prompt Architect");
    let rows: Vec<(String, String)> = build_info::current()
        .rows()
        .into_iter()
        .map(|(label, value)| (label.to_string(), value))
        .collect();
    formatter.print_key_values(&rows);
    Ok(())
}
