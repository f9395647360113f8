//! Command-line surface: argument parsing, the interactive wizard and the
//! one-shot subcommands.

pub mod clipboard;
pub mod commands;
pub mod io;
pub mod output;
pub mod ui;
pub mod wizard;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    config::{Config, ConfigManager},
    core::utils::PathResolver,
    errors::CliError,
    storage::{FormStore, JsonFileStore},
    utils::build_info::CLI_VERSION,
    wizard::WizardSession,
};

use self::{
    clipboard::{ClipboardSink, MemoryClipboard, SystemClipboard},
    output::OutputPreferences,
    ui::test_mode,
    wizard::WizardRunner,
};

#[derive(Parser, Debug)]
#[command(
    name = "prompt_architect_cli",
    version = CLI_VERSION,
    about = "Build a structured AI development prompt step by step"
)]
pub struct Cli {
    /// Data directory (defaults to $PROMPT_ARCHITECT_HOME or ~/.prompt_architect)
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Keep answers in memory only
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Plain text output without colors or symbols
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the interactive wizard (default)
    Wizard,
    /// Print the prompt assembled from the saved answers
    Prompt {
        /// Write to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Export the saved answers as JSON
    Export {
        /// Target directory (defaults to the configured export directory)
        #[arg(long)]
        dir: Option<PathBuf>,
        /// Also write the assembled prompt as a text file
        #[arg(long)]
        with_prompt: bool,
    },
    /// Replace the saved answers with a JSON export
    Import { file: PathBuf },
    /// Discard the saved answers
    Reset {
        /// Skip the confirmation question
        #[arg(long, short)]
        yes: bool,
    },
    /// List the saved answers step by step
    Show,
    /// Print build information
    Version,
}

/// Loads configuration and storage for `cli`, then runs the chosen command.
pub fn run(cli: Cli) -> Result<(), CliError> {
    let base = PathResolver::resolve_base(cli.home.clone());
    let config = ConfigManager::with_base_dir(base.clone())?.load()?;

    let mut prefs = OutputPreferences::from_config(&config);
    prefs.plain_mode |= cli.plain;
    output::set_preferences(prefs);

    let store = if cli.ephemeral {
        FormStore::in_memory()
    } else {
        FormStore::new(Box::new(JsonFileStore::new(Some(base))?))
    };
    let mut session = WizardSession::open(store, &config);
    tracing::debug!(command = ?cli.command, "Dispatching command");

    match cli.command.unwrap_or(Command::Wizard) {
        Command::Wizard => run_wizard(session, &config),
        Command::Prompt { output } => commands::prompt(&session, output.as_deref()),
        Command::Export { dir, with_prompt } => {
            let dir = dir.unwrap_or_else(|| config.export_dir());
            commands::export(&session, &dir, with_prompt)
        }
        Command::Import { file } => commands::import(&mut session, &file),
        Command::Reset { yes } => commands::reset(&mut session, yes),
        Command::Show => commands::show(&session),
        Command::Version => commands::version(),
    }
}

fn run_wizard(session: WizardSession, config: &Config) -> Result<(), CliError> {
    let clipboard: Box<dyn ClipboardSink> = if test_mode::is_enabled() {
        Box::<MemoryClipboard>::default()
    } else {
        Box::new(SystemClipboard::new())
    };
    WizardRunner::new(session, clipboard, config.export_dir()).run()
}
