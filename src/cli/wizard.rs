//! Terminal driver for the eight-step wizard.
//!
//! Every step renders as a menu of its visible fields followed by the
//! navigation actions. Field editors turn the user's answer into updates
//! through the step's control and hand them to the session, which persists
//! them.

use std::{
    path::{Path, PathBuf},
    thread,
    time::{Duration, Instant},
};

use crate::{
    cli::{
        clipboard::ClipboardSink,
        output,
        ui::{
            formatting::Formatter,
            menu_renderer::{MenuRenderError, MenuRenderer, MenuUI, MenuUIItem},
            prompts::{
                choice_menu, confirm_menu, text_input, ChoicePromptResult,
                ConfirmationPromptResult, TextPromptResult,
            },
        },
    },
    domain::{
        assets::human_size,
        catalog::{self, CatalogEntry},
        Displayable, FieldUpdate, IntegrationCategory,
    },
    errors::CliError,
    prompt::humanize_key,
    wizard::{
        steps::{
            self, assets::FileSlot, final_prompt, integrations as integration_step, lists,
            Control, StepField,
        },
        GenerationStatus, WizardSession, WizardStep,
    },
};

const NEXT_KEY: &str = "__next";
const BACK_KEY: &str = "__back";
const COPY_KEY: &str = "__copy";
const EXPORT_PROMPT_KEY: &str = "__export_prompt";
const REGENERATE_KEY: &str = "__regenerate";
const EXPORT_DATA_KEY: &str = "__export_data";
const IMPORT_KEY: &str = "__import";
const RESET_KEY: &str = "__reset";
const QUIT_KEY: &str = "__quit";
const ADD_KEY: &str = "__add";
const TOGGLE_KEY: &str = "__toggle";
const FIELD_PREFIX: &str = "field:";

const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Exit,
}

pub struct WizardRunner {
    session: WizardSession,
    clipboard: Box<dyn ClipboardSink>,
    export_dir: PathBuf,
    shown_revision: Option<u64>,
}

impl WizardRunner {
    pub fn new(
        session: WizardSession,
        clipboard: Box<dyn ClipboardSink>,
        export_dir: PathBuf,
    ) -> Self {
        Self {
            session,
            clipboard,
            export_dir,
            shown_revision: None,
        }
    }

    pub fn run(&mut self) -> Result<(), CliError> {
        tracing::info!("Wizard started");
        if self.session.store().has_saved_data() {
            output::info("Restored your previous answers.");
        }
        loop {
            let control = if self.session.step().is_final() {
                self.final_step()?
            } else {
                self.form_step()?
            };
            if control == LoopControl::Exit {
                break;
            }
        }
        output::info("Your answers are saved. Run the wizard again to continue.");
        Ok(())
    }

    fn footer(&self) -> String {
        let navigation = self.session.navigation();
        Formatter::new().progress_line(&navigation.progress_label(), navigation.progress_percent())
    }

    fn title(&self) -> String {
        let step = self.session.step();
        format!("Step {}: {}", step.index(), step.title())
    }

    fn field_items(&self, fields: &[StepField]) -> Vec<MenuUIItem> {
        let record = self.session.record();
        fields
            .iter()
            .filter(|field| field.is_visible(record))
            .map(|field| {
                let label = if field.required {
                    format!("{} *", field.label)
                } else {
                    field.label.to_string()
                };
                MenuUIItem::new(
                    format!("{FIELD_PREFIX}{}", field.key),
                    label,
                    field.summary(record),
                )
            })
            .collect()
    }

    fn shared_actions(&self, items: &mut Vec<MenuUIItem>) {
        if self.session.navigation().current() > 1 {
            items.push(MenuUIItem::new(BACK_KEY, "← Back", "Previous step"));
        }
        items.push(MenuUIItem::new(
            EXPORT_DATA_KEY,
            "Export data",
            "Save answers as JSON",
        ));
        items.push(MenuUIItem::new(
            IMPORT_KEY,
            "Import data",
            "Load answers from a JSON export",
        ));
        items.push(MenuUIItem::new(RESET_KEY, "Start over", "Clear every answer"));
        items.push(MenuUIItem::new(QUIT_KEY, "Quit", "Answers stay saved"));
    }

    fn form_step(&mut self) -> Result<LoopControl, CliError> {
        let step = self.session.step();
        let fields = steps::fields(step);
        let mut items = self.field_items(&fields);
        let next_description = match WizardStep::from_index(step.index() + 1) {
            Some(next) => format!("Continue to {}", next.title()),
            None => String::new(),
        };
        items.push(MenuUIItem::new(NEXT_KEY, "Next →", next_description));
        self.shared_actions(&mut items);

        let context = vec!["Fields marked * are required.".to_string()];
        let footer = self.footer();
        let title = self.title();
        let selection = choice_menu_with_footer(&title, &context, items, footer)?;

        match selection.as_deref() {
            None => {
                if !self.session.retreat() {
                    return Ok(LoopControl::Exit);
                }
            }
            Some(NEXT_KEY) => {
                if !self.session.advance() {
                    let missing = steps::missing_required(step, self.session.record());
                    output::warning(format!(
                        "Fill in the required fields first: {}",
                        missing.join(", ")
                    ));
                }
            }
            Some(key) => return self.dispatch(key, &fields),
        }
        Ok(LoopControl::Continue)
    }

    fn final_step(&mut self) -> Result<LoopControl, CliError> {
        let text = self.generate()?;
        if self.shown_revision != Some(self.session.revision()) {
            output::separator();
            println!("{text}");
            output::separator();
            self.shown_revision = Some(self.session.revision());
        }

        let fields = steps::fields(WizardStep::FinalPrompt);
        let mut items = vec![
            MenuUIItem::new(COPY_KEY, "Copy prompt", "Copy to the clipboard"),
            MenuUIItem::new(EXPORT_PROMPT_KEY, "Export prompt", "Save as a text file"),
            MenuUIItem::new(REGENERATE_KEY, "Regenerate", "Build the prompt again"),
        ];
        items.extend(self.field_items(&fields));
        self.shared_actions(&mut items);

        let mut footer = self.footer();
        if self.session.copied_active(Instant::now()) {
            footer.push_str("  Copied!");
        }
        let mut context = vec!["Project Summary".to_string()];
        context.extend(
            final_prompt::project_summary(self.session.record())
                .into_iter()
                .map(|(label, value)| format!("  {label}: {value}")),
        );
        let title = self.title();
        let selection = choice_menu_with_footer(&title, &context, items, footer)?;

        match selection.as_deref() {
            None => {
                self.session.retreat();
            }
            Some(COPY_KEY) => match self.clipboard.copy_text(&text) {
                Ok(()) => {
                    self.session.mark_copied(Instant::now());
                    output::success("Prompt copied to the clipboard.");
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Copy failed");
                    output::error(err);
                }
            },
            Some(EXPORT_PROMPT_KEY) => {
                let result = self.session.export_prompt(&self.export_dir);
                report_export(result);
            }
            Some(REGENERATE_KEY) => {
                self.session.regenerate(Instant::now());
                self.shown_revision = None;
            }
            Some(key) => return self.dispatch(key, &fields),
        }
        Ok(LoopControl::Continue)
    }

    /// Waits out the generation delay for the current revision.
    fn generate(&mut self) -> Result<String, CliError> {
        self.session.request_generation(Instant::now());
        let mut announced = false;
        loop {
            match self.session.poll_generation(Instant::now()) {
                GenerationStatus::Ready(text) => return Ok(text),
                GenerationStatus::Generating { remaining } => {
                    if !announced {
                        output::info("Generating your prompt...");
                        announced = true;
                    }
                    thread::sleep(remaining.min(POLL_INTERVAL));
                }
                GenerationStatus::Idle => self.session.request_generation(Instant::now()),
            }
        }
    }

    fn dispatch(&mut self, key: &str, fields: &[StepField]) -> Result<LoopControl, CliError> {
        match key {
            BACK_KEY => {
                self.session.retreat();
            }
            EXPORT_DATA_KEY => {
                let result = self.session.export_data(&self.export_dir);
                report_export(result);
            }
            IMPORT_KEY => self.import()?,
            RESET_KEY => self.reset()?,
            QUIT_KEY => return Ok(LoopControl::Exit),
            other => {
                let field = other
                    .strip_prefix(FIELD_PREFIX)
                    .and_then(|field_key| fields.iter().find(|field| field.key == field_key));
                if let Some(field) = field {
                    self.edit_field(field)?;
                }
            }
        }
        Ok(LoopControl::Continue)
    }

    fn import(&mut self) -> Result<(), CliError> {
        output::info("Path of the JSON file to import (:back to cancel)");
        if let TextPromptResult::Value(path) = text_input("Import file", None, false)? {
            let path = path.trim();
            if path.is_empty() {
                return Ok(());
            }
            match self.session.import(Path::new(path)) {
                Ok(()) => output::success("Data imported successfully."),
                Err(err) => {
                    tracing::warn!(error = %err, "Import rejected");
                    output::error(err);
                }
            }
        }
        Ok(())
    }

    fn reset(&mut self) -> Result<(), CliError> {
        let context = vec!["This clears every answer and the saved copy.".to_string()];
        if confirm_menu("Start over?", &context, "Reset everything")?
            == ConfirmationPromptResult::Confirm
        {
            self.session.reset();
            self.shown_revision = None;
            output::success("Form reset. Starting from step 1.");
        }
        Ok(())
    }

    fn apply(&mut self, updates: Vec<FieldUpdate>) {
        self.session.update(updates);
    }

    fn edit_field(&mut self, field: &StepField) -> Result<(), CliError> {
        match field.control {
            Control::Text {
                read,
                write,
                multiline,
            } => {
                let current = read(self.session.record());
                describe_field(field, &current, multiline);
                if let TextPromptResult::Value(value) =
                    text_input(field.label, Some(&current), multiline)?
                {
                    if value != current {
                        let updates = write(self.session.record(), value);
                        self.apply(updates);
                    }
                }
            }
            Control::Choice {
                options,
                read,
                write,
            } => {
                let current = read(self.session.record());
                if let Some(value) = pick_entry(field.label, &options(), &current)? {
                    if value != current {
                        let updates = write(self.session.record(), value);
                        self.apply(updates);
                    }
                }
            }
            Control::List { read, write } => loop {
                let items = read(self.session.record());
                let mut menu_items: Vec<MenuUIItem> = items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| MenuUIItem::new(index.to_string(), item, "Remove"))
                    .collect();
                menu_items.push(MenuUIItem::new(ADD_KEY, "+ Add", field.hint));
                match choice_menu(field.label, &[], menu_items, Some(ADD_KEY), true)? {
                    ChoicePromptResult::Value(key) if key == ADD_KEY => {
                        if let TextPromptResult::Value(value) =
                            text_input(field.label, None, false)?
                        {
                            let next = lists::append_item(&items, &value);
                            if next.len() != items.len() {
                                let updates = write(self.session.record(), next);
                                self.apply(updates);
                            }
                        }
                    }
                    ChoicePromptResult::Value(key) => {
                        if let Ok(index) = key.parse::<usize>() {
                            let updates =
                                write(self.session.record(), lists::remove_at(&items, index));
                            self.apply(updates);
                        }
                    }
                    ChoicePromptResult::Back | ChoicePromptResult::Cancel => break,
                }
            },
            Control::Toggles {
                options,
                read,
                toggle,
            } => loop {
                let selected = read(self.session.record());
                let items = options
                    .iter()
                    .map(|entry| {
                        MenuUIItem::new(entry.id, entry.title, entry.description)
                            .checkbox(selected.iter().any(|id| id == entry.id))
                    })
                    .collect();
                match choice_menu(field.label, &[], items, None, true)? {
                    ChoicePromptResult::Value(id) => {
                        let updates = toggle(self.session.record(), &id);
                        self.apply(updates);
                    }
                    ChoicePromptResult::Back | ChoicePromptResult::Cancel => break,
                }
            },
            Control::Files(slot) => self.edit_files(field, slot)?,
            Control::Integration(category) => self.edit_integration(category)?,
        }
        Ok(())
    }

    fn edit_files(&mut self, field: &StepField, slot: FileSlot) -> Result<(), CliError> {
        loop {
            let files = slot.read(self.session.record());
            let mut items: Vec<MenuUIItem> = files
                .iter()
                .enumerate()
                .map(|(index, asset)| {
                    MenuUIItem::new(
                        index.to_string(),
                        asset.display_label(),
                        format!("{} · Remove", human_size(asset.size)),
                    )
                })
                .collect();
            let add_label = if slot.accepts_many() || files.is_empty() {
                "+ Add file"
            } else {
                "Replace file"
            };
            items.push(MenuUIItem::new(ADD_KEY, add_label, field.hint));

            match choice_menu(field.label, &[], items, Some(ADD_KEY), true)? {
                ChoicePromptResult::Value(key) if key == ADD_KEY => {
                    output::info("File paths, separated by commas");
                    let TextPromptResult::Value(raw) = text_input(field.label, None, false)? else {
                        continue;
                    };
                    let paths: Vec<PathBuf> = raw
                        .split(',')
                        .map(str::trim)
                        .filter(|path| !path.is_empty())
                        .map(PathBuf::from)
                        .collect();
                    match self.session.pick_files(&paths) {
                        Ok(picked) => {
                            let updates = slot.add(self.session.record(), picked);
                            self.apply(updates);
                        }
                        Err(err) => output::error(err),
                    }
                }
                ChoicePromptResult::Value(key) => {
                    if let Ok(index) = key.parse::<usize>() {
                        let updates = slot.remove(self.session.record(), index);
                        self.apply(updates);
                    }
                }
                ChoicePromptResult::Back | ChoicePromptResult::Cancel => return Ok(()),
            }
        }
    }

    fn edit_integration(&mut self, category: IntegrationCategory) -> Result<(), CliError> {
        loop {
            let group = self.session.record().integrations.group(category).clone();
            let mut items =
                vec![MenuUIItem::new(TOGGLE_KEY, "Enabled", "").checkbox(group.enabled)];
            for key in category.settings_keys() {
                items.push(MenuUIItem::new(
                    format!("setting:{key}"),
                    humanize_key(key),
                    group.settings.setting(key).unwrap_or_default(),
                ));
            }
            if let Some(providers) = group.settings.providers() {
                for spec in category.providers() {
                    let enabled = providers.get(spec.key).is_some_and(|entry| entry.enabled);
                    items.push(
                        MenuUIItem::new(format!("provider:{}", spec.key), spec.label, "")
                            .checkbox(enabled),
                    );
                    if enabled && !spec.credentials.is_empty() {
                        items.push(MenuUIItem::new(
                            format!("credentials:{}", spec.key),
                            format!("    {} settings", spec.label),
                            "",
                        ));
                    }
                }
            }

            let key = match choice_menu(category.title(), &[], items, None, true)? {
                ChoicePromptResult::Value(key) => key,
                ChoicePromptResult::Back | ChoicePromptResult::Cancel => return Ok(()),
            };
            if key == TOGGLE_KEY {
                let updates = integration_step::toggle_group(self.session.record(), category);
                self.apply(updates);
            } else if let Some(setting) = key.strip_prefix("setting:") {
                self.edit_setting(category, setting)?;
            } else if let Some(provider) = key.strip_prefix("provider:") {
                let updates =
                    integration_step::toggle_provider(self.session.record(), category, provider);
                self.apply(updates);
            } else if let Some(provider) = key.strip_prefix("credentials:") {
                self.edit_credentials(category, provider)?;
            }
        }
    }

    fn edit_setting(&mut self, category: IntegrationCategory, key: &str) -> Result<(), CliError> {
        let current = self
            .session
            .record()
            .integrations
            .group(category)
            .settings
            .setting(key)
            .unwrap_or_default()
            .to_string();
        let label = humanize_key(key);
        let value = match setting_options(category, key) {
            Some(options) => pick_entry(&label, options, &current)?,
            None => {
                describe_field_value(&label, &current);
                match text_input(&label, Some(&current), false)? {
                    TextPromptResult::Value(value) => Some(value),
                    _ => None,
                }
            }
        };
        if let Some(value) = value.filter(|value| *value != current) {
            let updates =
                integration_step::set_setting(self.session.record(), category, key, value);
            self.apply(updates);
        }
        Ok(())
    }

    fn edit_credentials(
        &mut self,
        category: IntegrationCategory,
        provider: &str,
    ) -> Result<(), CliError> {
        let Some(spec) = category.provider_spec(provider) else {
            return Ok(());
        };
        loop {
            let entry = self
                .session
                .record()
                .integrations
                .group(category)
                .settings
                .providers()
                .and_then(|providers| providers.get(provider))
                .cloned()
                .unwrap_or_default();
            let items = spec
                .credentials
                .iter()
                .map(|key| MenuUIItem::new(*key, humanize_key(key), entry.credential(key)))
                .collect();
            let key = match choice_menu(spec.label, &[], items, None, true)? {
                ChoicePromptResult::Value(key) => key,
                ChoicePromptResult::Back | ChoicePromptResult::Cancel => return Ok(()),
            };
            let current = entry.credential(&key).to_string();
            let label = humanize_key(&key);
            describe_field_value(&label, &current);
            if let TextPromptResult::Value(value) = text_input(&label, Some(&current), false)? {
                let updates = integration_step::set_provider_setting(
                    self.session.record(),
                    category,
                    provider,
                    &key,
                    value,
                );
                self.apply(updates);
            }
        }
    }
}

/// Flat settings picked from a fixed list rather than typed.
fn setting_options(category: IntegrationCategory, key: &str) -> Option<&'static [CatalogEntry]> {
    match (category, key) {
        (IntegrationCategory::Email, "provider") => Some(catalog::EMAIL_PROVIDERS),
        (IntegrationCategory::Autoresponder, "provider") => Some(catalog::AUTORESPONDER_PROVIDERS),
        (IntegrationCategory::Payment, "currency") => Some(catalog::CURRENCIES),
        _ => None,
    }
}

fn choice_menu_with_footer(
    title: &str,
    context: &[String],
    items: Vec<MenuUIItem>,
    footer: String,
) -> Result<Option<String>, CliError> {
    let mut menu = MenuUI::new(title, items).with_footer(footer);
    if !context.is_empty() {
        menu = menu.with_context(context.join("\n"));
    }
    match MenuRenderer::new().show(&menu) {
        Ok(selection) => Ok(selection),
        Err(MenuRenderError::Interrupted) | Err(MenuRenderError::EndOfInput) => {
            Ok(Some(QUIT_KEY.to_string()))
        }
        Err(MenuRenderError::Io(err)) => Err(err.into()),
    }
}

fn pick_entry(
    label: &str,
    options: &[CatalogEntry],
    current: &str,
) -> Result<Option<String>, CliError> {
    let items = options
        .iter()
        .map(|entry| MenuUIItem::new(entry.id, entry.title, entry.description))
        .collect();
    let default = (!current.is_empty()).then_some(current);
    Ok(match choice_menu(label, &[], items, default, true)? {
        ChoicePromptResult::Value(id) => Some(id),
        ChoicePromptResult::Back | ChoicePromptResult::Cancel => None,
    })
}

fn describe_field(field: &StepField, current: &str, multiline: bool) {
    let formatter = Formatter::new();
    formatter.print_header(field.label);
    if !field.hint.is_empty() {
        formatter.print_detail(field.hint);
    }
    if !current.is_empty() {
        formatter.print_detail(format!("Current: {current}"));
    }
    let help = if multiline {
        "Finish with an empty line. Enter alone keeps the current value; :clear empties it."
    } else {
        "Enter alone keeps the current value; :clear empties it; :back returns."
    };
    formatter.print_detail(help);
}

fn describe_field_value(label: &str, current: &str) {
    let formatter = Formatter::new();
    formatter.print_header(label);
    if !current.is_empty() {
        formatter.print_detail(format!("Current: {current}"));
    }
}

fn report_export(result: crate::errors::Result<PathBuf>) {
    match result {
        Ok(path) => output::success(format!("Saved {}", path.display())),
        Err(err) => {
            tracing::warn!(error = %err, "Export failed");
            output::error(err);
        }
    }
}
