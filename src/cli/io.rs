use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::cli::ui::test_mode::{self, TextTestInput};
use crate::errors::CliError;

/// Yes/no question for one-shot commands. In scripted runs the next text
/// input answers it: `y`/`yes` confirms, anything else declines.
pub fn confirm_action(prompt: &str, default: bool) -> Result<bool, CliError> {
    if let Some(scripted) = test_mode::next_text_input(prompt) {
        return Ok(match scripted {
            TextTestInput::Value(answer) => {
                matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
            }
            TextTestInput::Keep => default,
            TextTestInput::Back | TextTestInput::Cancel => false,
        });
    }

    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CliError::from)
}
