use crate::domain::{catalog, is_filled, FieldUpdate, FormRecord};

use super::{Control, StepField};

pub fn fields() -> Vec<StepField> {
    vec![StepField::new(
        "customInstructions",
        "Additional Instructions",
        Control::Text {
            read: |record: &FormRecord| record.custom_instructions.clone(),
            write: |_, value| vec![FieldUpdate::CustomInstructions(value)],
            multiline: true,
        },
    )
    .hint("Appended to the end of the generated prompt")]
}

/// Label/value rows shown above the final step's actions.
pub fn project_summary(record: &FormRecord) -> Vec<(&'static str, String)> {
    let titled = |entries: &[catalog::CatalogEntry], id: &str| {
        if is_filled(id) {
            catalog::display_title(entries, id)
        } else {
            "Not specified".to_string()
        }
    };
    let enabled = record.integrations.enabled().count();
    vec![
        (
            "Project Type",
            titled(&catalog::project_type_entries(), &record.project_type),
        ),
        ("Tech Stack", titled(catalog::TECH_STACKS, &record.tech_stack)),
        (
            "Design Style",
            titled(catalog::DESIGN_STYLES, &record.design_style),
        ),
        ("Integrations", format!("{enabled} enabled")),
    ]
}
