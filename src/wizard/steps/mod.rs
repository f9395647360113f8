//! Wizard step components.
//!
//! Each step describes its inputs declaratively through [`StepField`] and
//! exposes pure edit operations that turn user input into [`FieldUpdate`]s.
//! Nothing here touches storage; the session applies and persists updates.

pub mod assets;
pub mod author;
pub mod content;
pub mod design;
pub mod final_prompt;
pub mod foundation;
pub mod integrations;
pub mod lists;
pub mod technical;

use crate::domain::{
    catalog::CatalogEntry, FieldUpdate, FileAsset, FormRecord, IntegrationCategory,
};

use super::navigation::WizardStep;

pub type ReadText = fn(&FormRecord) -> String;
pub type WriteText = fn(&FormRecord, String) -> Vec<FieldUpdate>;
pub type ReadList = fn(&FormRecord) -> Vec<String>;
pub type WriteList = fn(&FormRecord, Vec<String>) -> Vec<FieldUpdate>;
pub type ToggleOption = fn(&FormRecord, &str) -> Vec<FieldUpdate>;

/// How a field is edited.
#[derive(Clone, Copy)]
pub enum Control {
    Text {
        read: ReadText,
        write: WriteText,
        multiline: bool,
    },
    Choice {
        options: fn() -> Vec<CatalogEntry>,
        read: ReadText,
        write: WriteText,
    },
    List {
        read: ReadList,
        write: WriteList,
    },
    Toggles {
        options: &'static [CatalogEntry],
        read: ReadList,
        toggle: ToggleOption,
    },
    Files(assets::FileSlot),
    Integration(IntegrationCategory),
}

/// One input rendered by a step.
#[derive(Clone, Copy)]
pub struct StepField {
    pub key: &'static str,
    pub label: &'static str,
    pub hint: &'static str,
    pub required: bool,
    pub control: Control,
    visible: Option<fn(&FormRecord) -> bool>,
}

impl StepField {
    pub fn new(key: &'static str, label: &'static str, control: Control) -> Self {
        Self {
            key,
            label,
            hint: "",
            required: false,
            control,
            visible: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn hint(mut self, hint: &'static str) -> Self {
        self.hint = hint;
        self
    }

    pub fn visible_when(mut self, predicate: fn(&FormRecord) -> bool) -> Self {
        self.visible = Some(predicate);
        self
    }

    pub fn is_visible(&self, record: &FormRecord) -> bool {
        self.visible.map_or(true, |predicate| predicate(record))
    }

    /// One-line summary of the current value, for menus.
    pub fn summary(&self, record: &FormRecord) -> String {
        match self.control {
            Control::Text { read, .. } => read(record),
            Control::Choice { options, read, .. } => {
                let id = read(record);
                if id.is_empty() {
                    return id;
                }
                crate::domain::catalog::display_title(&options(), &id)
            }
            Control::List { read, .. } => summarize_count(read(record).len(), "item"),
            Control::Toggles { options, read, .. } => read(record)
                .iter()
                .map(|id| crate::domain::catalog::display_title(options, id))
                .collect::<Vec<_>>()
                .join(", "),
            Control::Files(slot) => summarize_files(&slot.read(record)),
            Control::Integration(category) => {
                if record.integrations.group(category).enabled {
                    "enabled".into()
                } else {
                    "disabled".into()
                }
            }
        }
    }
}

fn summarize_count(count: usize, noun: &str) -> String {
    match count {
        0 => String::new(),
        1 => format!("1 {}", noun),
        n => format!("{} {}s", n, noun),
    }
}

fn summarize_files(files: &[FileAsset]) -> String {
    match files {
        [] => String::new(),
        [single] => single.name.clone(),
        many => summarize_count(many.len(), "file"),
    }
}

/// Inputs rendered on `step`.
pub fn fields(step: WizardStep) -> Vec<StepField> {
    match step {
        WizardStep::AuthorInfo => author::fields(),
        WizardStep::Foundation => foundation::fields(),
        WizardStep::TechSpecs => technical::fields(),
        WizardStep::Assets => assets::fields(),
        WizardStep::DesignUx => design::fields(),
        WizardStep::ContentStrategy => content::fields(),
        WizardStep::Integrations => integrations::fields(),
        WizardStep::FinalPrompt => final_prompt::fields(),
    }
}

/// Whether the required fields of `step` are filled. The final step never
/// advances.
pub fn can_advance(step: WizardStep, record: &FormRecord) -> bool {
    match step {
        WizardStep::AuthorInfo => author::can_advance(record),
        WizardStep::Foundation => foundation::can_advance(record),
        WizardStep::TechSpecs => technical::can_advance(record),
        WizardStep::Assets => assets::can_advance(record),
        WizardStep::DesignUx => design::can_advance(record),
        WizardStep::ContentStrategy => content::can_advance(record),
        WizardStep::Integrations => integrations::can_advance(record),
        WizardStep::FinalPrompt => false,
    }
}

/// Labels of required fields that are still blank.
pub fn missing_required(step: WizardStep, record: &FormRecord) -> Vec<&'static str> {
    fields(step)
        .into_iter()
        .filter(|field| field.required && field.is_visible(record))
        .filter(|field| match field.control {
            Control::Text { read, .. } | Control::Choice { read, .. } => {
                !crate::domain::is_filled(&read(record))
            }
            _ => false,
        })
        .map(|field| field.label)
        .collect()
}
