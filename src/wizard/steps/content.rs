use crate::domain::{catalog, is_filled, ContentStrategy, FieldUpdate, FormRecord};

use super::{Control, StepField};

fn with_strategy(record: &FormRecord, edit: impl FnOnce(&mut ContentStrategy)) -> Vec<FieldUpdate> {
    let mut strategy = record.content_strategy.clone();
    edit(&mut strategy);
    vec![FieldUpdate::ContentStrategy(strategy)]
}

/// Adds the content type when absent, removes it when present.
pub fn toggle_content_type(record: &FormRecord, id: &str) -> Vec<FieldUpdate> {
    with_strategy(record, |strategy| {
        if let Some(position) = strategy.content_types.iter().position(|entry| entry == id) {
            strategy.content_types.remove(position);
        } else {
            strategy.content_types.push(id.to_string());
        }
    })
}

pub fn fields() -> Vec<StepField> {
    vec![
        StepField::new(
            "tone",
            "Tone",
            Control::Choice {
                options: || catalog::TONES.to_vec(),
                read: |record| record.content_strategy.tone.clone(),
                write: |record, value| with_strategy(record, |strategy| strategy.tone = value),
            },
        )
        .required(),
        StepField::new(
            "voice",
            "Voice",
            Control::Choice {
                options: || catalog::VOICES.to_vec(),
                read: |record| record.content_strategy.voice.clone(),
                write: |record, value| with_strategy(record, |strategy| strategy.voice = value),
            },
        )
        .required(),
        StepField::new(
            "messaging",
            "Key Messages",
            Control::List {
                read: |record| record.content_strategy.messaging.clone(),
                write: |record, items| with_strategy(record, |strategy| strategy.messaging = items),
            },
        ),
        StepField::new(
            "seoKeywords",
            "SEO Keywords",
            Control::List {
                read: |record| record.content_strategy.seo_keywords.clone(),
                write: |record, items| {
                    with_strategy(record, |strategy| strategy.seo_keywords = items)
                },
            },
        ),
        StepField::new(
            "contentTypes",
            "Content Types",
            Control::Toggles {
                options: catalog::CONTENT_TYPES,
                read: |record| record.content_strategy.content_types.clone(),
                toggle: toggle_content_type,
            },
        ),
        StepField::new(
            "localization",
            "Localization",
            Control::List {
                read: |record| record.content_strategy.localization.clone(),
                write: |record, items| {
                    with_strategy(record, |strategy| strategy.localization = items)
                },
            },
        )
        .hint("Languages or regions to support"),
    ]
}

pub fn can_advance(record: &FormRecord) -> bool {
    is_filled(&record.content_strategy.tone) && is_filled(&record.content_strategy.voice)
}
