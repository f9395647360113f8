use crate::domain::{catalog, is_filled, FieldUpdate, FormRecord, UserExperience};

use super::{Control, StepField};

/// Sets the scheme id and copies its palette into the primary and secondary
/// colors.
pub fn select_color_scheme(_record: &FormRecord, id: &str) -> Vec<FieldUpdate> {
    let mut updates = vec![FieldUpdate::ColorScheme(id.to_string())];
    if let Some(scheme) = catalog::color_scheme(id) {
        updates.push(FieldUpdate::PrimaryColor(scheme.primary.to_string()));
        updates.push(FieldUpdate::SecondaryColor(scheme.secondary.to_string()));
    }
    updates
}

fn uses_custom_colors(record: &FormRecord) -> bool {
    record.color_scheme == "custom"
}

fn with_experience(
    record: &FormRecord,
    edit: impl FnOnce(&mut UserExperience),
) -> Vec<FieldUpdate> {
    let mut experience = record.user_experience.clone();
    edit(&mut experience);
    vec![FieldUpdate::UserExperience(experience)]
}

pub fn fields() -> Vec<StepField> {
    vec![
        StepField::new(
            "designStyle",
            "Design Style",
            Control::Choice {
                options: || catalog::DESIGN_STYLES.to_vec(),
                read: |record| record.design_style.clone(),
                write: |_, value| vec![FieldUpdate::DesignStyle(value)],
            },
        )
        .required(),
        StepField::new(
            "customStyle",
            "Style Notes",
            Control::Text {
                read: |record| record.custom_style.clone(),
                write: |_, value| vec![FieldUpdate::CustomStyle(value)],
                multiline: true,
            },
        )
        .hint("Design preferences, inspirations or requirements"),
        StepField::new(
            "colorScheme",
            "Color Scheme",
            Control::Choice {
                options: catalog::color_scheme_entries,
                read: |record| record.color_scheme.clone(),
                write: |record, value| select_color_scheme(record, &value),
            },
        )
        .required(),
        StepField::new(
            "primaryColor",
            "Primary Color",
            Control::Text {
                read: |record| record.primary_color.clone(),
                write: |_, value| vec![FieldUpdate::PrimaryColor(value)],
                multiline: false,
            },
        )
        .visible_when(uses_custom_colors),
        StepField::new(
            "secondaryColor",
            "Secondary Color",
            Control::Text {
                read: |record| record.secondary_color.clone(),
                write: |_, value| vec![FieldUpdate::SecondaryColor(value)],
                multiline: false,
            },
        )
        .visible_when(uses_custom_colors),
        StepField::new(
            "accentColor",
            "Accent Color",
            Control::Text {
                read: |record| record.accent_color.clone(),
                write: |_, value| vec![FieldUpdate::AccentColor(value)],
                multiline: false,
            },
        )
        .visible_when(uses_custom_colors),
        StepField::new(
            "typography",
            "Typography",
            Control::Choice {
                options: || catalog::TYPOGRAPHY.to_vec(),
                read: |record| record.typography.clone(),
                write: |_, value| vec![FieldUpdate::Typography(value)],
            },
        ),
        StepField::new(
            "animationStyle",
            "Animation Style",
            Control::Choice {
                options: || catalog::ANIMATION_STYLES.to_vec(),
                read: |record| record.animation_style.clone(),
                write: |_, value| vec![FieldUpdate::AnimationStyle(value)],
            },
        ),
        StepField::new(
            "userJourney",
            "User Journey",
            Control::List {
                read: |record| record.user_experience.user_journey.clone(),
                write: |record, items| with_experience(record, |ux| ux.user_journey = items),
            },
        ),
        StepField::new(
            "accessibility",
            "Accessibility",
            Control::List {
                read: |record| record.user_experience.accessibility.clone(),
                write: |record, items| with_experience(record, |ux| ux.accessibility = items),
            },
        ),
        StepField::new(
            "responsiveBreakpoints",
            "Responsive Breakpoints",
            Control::List {
                read: |record| record.user_experience.responsive_breakpoints.clone(),
                write: |record, items| {
                    with_experience(record, |ux| ux.responsive_breakpoints = items)
                },
            },
        ),
        StepField::new(
            "browserSupport",
            "Browser Support",
            Control::List {
                read: |record| record.user_experience.browser_support.clone(),
                write: |record, items| with_experience(record, |ux| ux.browser_support = items),
            },
        ),
    ]
}

pub fn can_advance(record: &FormRecord) -> bool {
    is_filled(&record.design_style) && is_filled(&record.color_scheme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_selection_overwrites_palette() {
        let mut record = FormRecord::default();
        record.apply(select_color_scheme(&record, "green-teal"));
        assert_eq!(record.color_scheme, "green-teal");
        assert_eq!(record.primary_color, "#10b981");
        assert_eq!(record.secondary_color, "#06b6d4");
        assert_eq!(record.accent_color, "#06b6d4");
    }

    #[test]
    fn experience_lists_rebuild_the_whole_group() {
        let mut record = FormRecord::default();
        record.user_experience.accessibility = vec!["WCAG AA".into()];
        let field = fields()
            .into_iter()
            .find(|field| field.key == "browserSupport")
            .unwrap();
        let Control::List { write, .. } = field.control else {
            panic!("list control expected");
        };
        record.apply(write(&record, vec!["Safari".into()]));
        assert_eq!(record.user_experience.browser_support, vec!["Safari"]);
        assert_eq!(record.user_experience.accessibility, vec!["WCAG AA"]);
    }

    #[test]
    fn requires_style_and_scheme() {
        let mut record = FormRecord::default();
        record.design_style = "modern".into();
        assert!(!can_advance(&record));
        record.color_scheme = "custom".into();
        assert!(can_advance(&record));
    }
}
