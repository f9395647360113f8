use std::io::{self, Stdout, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    style::{Attribute, SetAttribute},
    terminal::{self, ClearType},
    ExecutableCommand,
};

use crate::cli::output::{current_preferences, OutputPreferences};
use crate::cli::ui::formatting::Formatter;
use crate::cli::ui::test_mode::{self, MenuTestEvent};

const PAGE: usize = 3;

#[derive(Clone, Debug)]
pub struct MenuUI {
    pub title: String,
    pub context: Option<String>,
    pub footer: Option<String>,
    pub items: Vec<MenuUIItem>,
    pub initial_index: Option<usize>,
}

impl MenuUI {
    pub fn new(title: impl Into<String>, items: Vec<MenuUIItem>) -> Self {
        Self {
            title: title.into(),
            context: None,
            footer: None,
            items,
            initial_index: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn with_initial_index(mut self, index: usize) -> Self {
        self.initial_index = Some(index);
        self
    }

    fn label_width(&self) -> usize {
        self.items
            .iter()
            .map(|item| item.display_label().chars().count())
            .max()
            .unwrap_or(0)
    }
}

#[derive(Clone, Debug)]
pub struct MenuUIItem {
    pub key: String,
    pub label: String,
    pub description: String,
    /// Checkbox state for multi-select menus.
    pub checked: Option<bool>,
}

impl MenuUIItem {
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            description: description.into(),
            checked: None,
        }
    }

    pub fn checkbox(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    fn display_label(&self) -> String {
        match self.checked {
            Some(true) => format!("[x] {}", self.label),
            Some(false) => format!("[ ] {}", self.label),
            None => self.label.clone(),
        }
    }
}

#[derive(Debug)]
pub enum MenuRenderError {
    Interrupted,
    EndOfInput,
    Io(io::Error),
}

impl From<io::Error> for MenuRenderError {
    fn from(err: io::Error) -> Self {
        MenuRenderError::Io(err)
    }
}

/// Highlighted row of a menu, shared by the terminal and scripted drivers.
struct Selection {
    index: usize,
    len: usize,
}

enum Outcome {
    Pending,
    Chosen(usize),
    Cancelled,
}

impl Selection {
    fn new(menu: &MenuUI) -> Self {
        let len = menu.items.len();
        Self {
            index: menu.initial_index.unwrap_or(0).min(len.saturating_sub(1)),
            len,
        }
    }

    fn apply(&mut self, event: MenuTestEvent) -> Outcome {
        match event {
            MenuTestEvent::Up => self.index = self.index.checked_sub(1).unwrap_or(self.len - 1),
            MenuTestEvent::Down => self.index = (self.index + 1) % self.len,
            MenuTestEvent::Home => self.index = 0,
            MenuTestEvent::End => self.index = self.len - 1,
            MenuTestEvent::PageUp => self.index = self.index.saturating_sub(PAGE),
            MenuTestEvent::PageDown => self.index = (self.index + PAGE).min(self.len - 1),
            MenuTestEvent::Enter => return Outcome::Chosen(self.index),
            MenuTestEvent::Esc => return Outcome::Cancelled,
        }
        Outcome::Pending
    }
}

fn key_event(code: KeyCode) -> Option<MenuTestEvent> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(MenuTestEvent::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(MenuTestEvent::Down),
        KeyCode::Home => Some(MenuTestEvent::Home),
        KeyCode::End => Some(MenuTestEvent::End),
        KeyCode::PageUp => Some(MenuTestEvent::PageUp),
        KeyCode::PageDown => Some(MenuTestEvent::PageDown),
        KeyCode::Enter => Some(MenuTestEvent::Enter),
        KeyCode::Esc => Some(MenuTestEvent::Esc),
        _ => None,
    }
}

pub struct MenuRenderer {
    prefs: OutputPreferences,
}

impl Default for MenuRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuRenderer {
    pub fn new() -> Self {
        Self {
            prefs: current_preferences(),
        }
    }

    /// Shows `menu` and returns the chosen item's key, or `None` on ESC.
    pub fn show(&self, menu: &MenuUI) -> Result<Option<String>, MenuRenderError> {
        if menu.items.is_empty() {
            return Ok(None);
        }

        if let Some(events) = test_mode::next_menu_events(&menu.title) {
            return self.show_with_script(menu, events);
        }

        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        stdout.execute(cursor::Hide)?;

        let result = self.run_terminal(&mut stdout, menu);

        let clear_status = self.clear_screen(&mut stdout);
        stdout.execute(cursor::Show).ok();
        terminal::disable_raw_mode().ok();
        clear_status?;

        result
    }

    fn run_terminal(
        &self,
        stdout: &mut Stdout,
        menu: &MenuUI,
    ) -> Result<Option<String>, MenuRenderError> {
        let mut selection = Selection::new(menu);
        loop {
            self.render(stdout, menu, selection.index)?;
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match key.code {
                    KeyCode::Char('c') | KeyCode::Char('C') => {
                        return Err(MenuRenderError::Interrupted)
                    }
                    KeyCode::Char('d') | KeyCode::Char('D') => {
                        return Err(MenuRenderError::EndOfInput)
                    }
                    _ => continue,
                }
            }
            let Some(event) = key_event(key.code) else {
                continue;
            };
            match selection.apply(event) {
                Outcome::Pending => {}
                Outcome::Chosen(index) => return Ok(Some(menu.items[index].key.clone())),
                Outcome::Cancelled => return Ok(None),
            }
        }
    }

    fn show_with_script(
        &self,
        menu: &MenuUI,
        events: Vec<MenuTestEvent>,
    ) -> Result<Option<String>, MenuRenderError> {
        let mut selection = Selection::new(menu);
        for event in events {
            match selection.apply(event) {
                Outcome::Pending => {}
                Outcome::Chosen(index) => {
                    self.print_snapshot(menu, index);
                    return Ok(Some(menu.items[index].key.clone()));
                }
                Outcome::Cancelled => {
                    self.print_snapshot(menu, selection.index);
                    return Ok(None);
                }
            }
        }
        self.print_snapshot(menu, selection.index);
        panic!(
            "Scripted menu events must end with ENTER or ESC for `{}`",
            menu.title
        );
    }

    fn lines(&self, menu: &MenuUI, selected_index: usize) -> Vec<(String, bool)> {
        let formatter = Formatter::new();
        let width = menu.label_width();
        let mut lines = Vec::new();
        if let Some(context) = &menu.context {
            lines.push((formatter.detail_text(context), false));
            lines.push((String::new(), false));
        }
        lines.push((formatter.header_text(&menu.title), false));
        lines.push((String::new(), false));
        for (index, item) in menu.items.iter().enumerate() {
            let selected = index == selected_index;
            let pointer = match (selected, self.prefs.plain_mode) {
                (false, _) => " ",
                (true, true) => ">",
                (true, false) => "▸",
            };
            let row =
                formatter.format_two_column_row(&item.display_label(), &item.description, width);
            lines.push((format!(" {pointer} {row}"), selected));
        }
        lines.push((String::new(), false));
        if let Some(footer) = &menu.footer {
            lines.push((footer.clone(), false));
        }
        lines.push((formatter.detail_text(formatter.navigation_hint()), false));
        lines
    }

    fn print_snapshot(&self, menu: &MenuUI, selected_index: usize) {
        for (line, _) in self.lines(menu, selected_index) {
            println!("{line}");
        }
    }

    fn render(
        &self,
        stdout: &mut Stdout,
        menu: &MenuUI,
        selected_index: usize,
    ) -> Result<(), io::Error> {
        self.clear_screen(stdout)?;
        for (line, highlighted) in self.lines(menu, selected_index) {
            if highlighted {
                stdout.execute(SetAttribute(Attribute::Reverse))?;
            }
            write!(stdout, "{line}")?;
            stdout.execute(SetAttribute(Attribute::Reset))?;
            write!(stdout, "\r\n")?;
        }
        stdout.flush()
    }

    fn clear_screen(&self, stdout: &mut Stdout) -> Result<(), io::Error> {
        stdout.execute(terminal::Clear(ClearType::All))?;
        stdout.execute(cursor::MoveTo(0, 0))?;
        Ok(())
    }
}
