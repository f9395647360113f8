use std::io::{self, Stdout, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal::{self, ClearType},
    ExecutableCommand,
};

use crate::cli::ui::menu_renderer::{MenuRenderer, MenuUI, MenuUIItem};
use crate::cli::ui::test_mode::{self, TextTestInput};

const BACK_KEY: &str = "__BACK";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextPromptResult {
    Value(String),
    Keep,
    Back,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoicePromptResult {
    Value(String),
    Back,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationPromptResult {
    Confirm,
    Cancel,
}

/// Reads one value. An empty answer keeps `current` when there is one.
///
/// Multiline prompts collect lines until an empty one is entered; scripted
/// answers spell line breaks as `\n`.
pub fn text_input(
    label: &str,
    current: Option<&str>,
    multiline: bool,
) -> io::Result<TextPromptResult> {
    if let Some(scripted) = test_mode::next_text_input(label) {
        return Ok(match scripted {
            TextTestInput::Value(value) if multiline => {
                TextPromptResult::Value(value.replace("\\n", "\n"))
            }
            TextTestInput::Value(value) => interpret_buffer(&value, current),
            TextTestInput::Keep => TextPromptResult::Keep,
            TextTestInput::Back => TextPromptResult::Back,
            TextTestInput::Cancel => TextPromptResult::Cancel,
        });
    }

    let first = match read_line()? {
        LineRead::Line(line) => line,
        LineRead::Cancelled => return Ok(TextPromptResult::Cancel),
    };
    if !multiline || first.trim().is_empty() {
        return Ok(interpret_buffer(&first, current));
    }

    let mut lines = vec![first];
    loop {
        match read_line()? {
            LineRead::Line(line) if line.is_empty() => break,
            LineRead::Line(line) => lines.push(line),
            LineRead::Cancelled => return Ok(TextPromptResult::Cancel),
        }
    }
    Ok(TextPromptResult::Value(lines.join("\n")))
}

enum LineRead {
    Line(String),
    Cancelled,
}

fn read_line() -> io::Result<LineRead> {
    let mut guard = RawModeGuard::activate()?;
    let mut stdout = io::stdout();
    redraw_input(&mut stdout, "")?;
    let mut buffer = String::new();

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => {
                    guard.deactivate();
                    println!();
                    return Ok(LineRead::Cancelled);
                }
                KeyCode::Char('u') | KeyCode::Char('U') => {
                    buffer.clear();
                    redraw_input(&mut stdout, &buffer)?;
                    continue;
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Esc => {
                guard.deactivate();
                println!();
                return Ok(LineRead::Cancelled);
            }
            KeyCode::Enter => {
                guard.deactivate();
                println!();
                return Ok(LineRead::Line(buffer));
            }
            KeyCode::Backspace => {
                buffer.pop();
                redraw_input(&mut stdout, &buffer)?;
            }
            KeyCode::Char(ch) => {
                buffer.push(ch);
                redraw_input(&mut stdout, &buffer)?;
            }
            _ => {}
        }
    }
}

/// Single-choice menu over `items`; the highlighted row starts on
/// `default_key` when it is present.
pub fn choice_menu(
    title: &str,
    context_lines: &[String],
    mut items: Vec<MenuUIItem>,
    default_key: Option<&str>,
    enable_back: bool,
) -> io::Result<ChoicePromptResult> {
    if items.is_empty() {
        return Ok(ChoicePromptResult::Cancel);
    }

    let initial = default_key
        .and_then(|key| items.iter().position(|item| item.key == key))
        .unwrap_or(0);
    if enable_back {
        items.push(MenuUIItem::new(BACK_KEY, "← Back", "Return without changes"));
    }

    let mut menu = MenuUI::new(title.to_string(), items).with_initial_index(initial);
    if let Some(context) = join_context(context_lines) {
        menu = menu.with_context(context);
    }

    let selection = match MenuRenderer::new().show(&menu) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(?err, "Choice menu closed");
            return Ok(ChoicePromptResult::Cancel);
        }
    };
    Ok(match selection {
        Some(selection) if selection == BACK_KEY => ChoicePromptResult::Back,
        Some(selection) => ChoicePromptResult::Value(selection),
        None => ChoicePromptResult::Cancel,
    })
}

/// Two-item confirmation menu; the highlight starts on the safe choice.
pub fn confirm_menu(
    title: &str,
    context_lines: &[String],
    confirm_label: &str,
) -> io::Result<ConfirmationPromptResult> {
    let items = vec![
        MenuUIItem::new("cancel", "Cancel", "Leave everything as it is"),
        MenuUIItem::new("confirm", confirm_label, ""),
    ];
    let mut menu = MenuUI::new(title.to_string(), items);
    if let Some(context) = join_context(context_lines) {
        menu = menu.with_context(context);
    }

    Ok(match MenuRenderer::new().show(&menu) {
        Ok(Some(selection)) if selection == "confirm" => ConfirmationPromptResult::Confirm,
        _ => ConfirmationPromptResult::Cancel,
    })
}

fn redraw_input(stdout: &mut Stdout, buffer: &str) -> io::Result<()> {
    stdout.execute(cursor::MoveToColumn(0))?;
    stdout.execute(terminal::Clear(ClearType::CurrentLine))?;
    write!(stdout, "> {}", buffer)?;
    stdout.flush()
}

fn interpret_buffer(buffer: &str, current: Option<&str>) -> TextPromptResult {
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return match current {
            Some(value) if !value.is_empty() => TextPromptResult::Keep,
            _ => TextPromptResult::Value(String::new()),
        };
    }

    match trimmed.to_ascii_lowercase().as_str() {
        ":cancel" => TextPromptResult::Cancel,
        ":back" => TextPromptResult::Back,
        ":clear" => TextPromptResult::Value(String::new()),
        _ => TextPromptResult::Value(buffer.to_string()),
    }
}

fn join_context(lines: &[String]) -> Option<String> {
    let trimmed: Vec<&str> = lines.iter().map(|line| line.trim_end()).collect();
    if trimmed.iter().all(|line| line.is_empty()) {
        None
    } else {
        Some(trimmed.join("\n"))
    }
}

struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    fn activate() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self { active: true })
    }

    fn deactivate(&mut self) {
        if self.active {
            let _ = terminal::disable_raw_mode();
            self.active = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.deactivate();
    }
}
