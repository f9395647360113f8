use crate::domain::{catalog, is_filled, FieldUpdate, FormRecord};

use super::{Control, StepField};

/// Sets the project type and, for known types, overwrites complexity and the
/// effort estimate. Later manual edits to those fields are left alone until
/// a type is selected again.
pub fn select_project_type(_record: &FormRecord, id: &str) -> Vec<FieldUpdate> {
    let mut updates = vec![FieldUpdate::ProjectType(id.to_string())];
    if let Some(kind) = catalog::project_type(id) {
        updates.push(FieldUpdate::Complexity(kind.complexity));
        updates.push(FieldUpdate::EstimatedHours(kind.estimated_hours.to_string()));
    }
    updates
}

pub fn fields() -> Vec<StepField> {
    vec![
        StepField::new(
            "projectType",
            "Project Type",
            Control::Choice {
                options: catalog::project_type_entries,
                read: |record| record.project_type.clone(),
                write: |record, value| select_project_type(record, &value),
            },
        )
        .required(),
        StepField::new(
            "projectName",
            "Project Name",
            Control::Text {
                read: |record| record.project_name.clone(),
                write: |_, value| vec![FieldUpdate::ProjectName(value)],
                multiline: false,
            },
        ),
        StepField::new(
            "projectDescription",
            "Project Description",
            Control::Text {
                read: |record| record.project_description.clone(),
                write: |_, value| vec![FieldUpdate::ProjectDescription(value)],
                multiline: true,
            },
        )
        .required()
        .hint("What does the application do, and for whom?"),
        StepField::new(
            "targetAudience",
            "Target Audience",
            Control::Text {
                read: |record| record.target_audience.clone(),
                write: |_, value| vec![FieldUpdate::TargetAudience(value)],
                multiline: false,
            },
        )
        .required(),
        StepField::new(
            "projectGoals",
            "Project Goals",
            Control::List {
                read: |record| record.project_goals.clone(),
                write: |_, goals| vec![FieldUpdate::ProjectGoals(goals)],
            },
        ),
        StepField::new(
            "timeline",
            "Timeline",
            Control::Choice {
                options: || catalog::TIMELINES.to_vec(),
                read: |record| record.timeline.clone(),
                write: |_, value| vec![FieldUpdate::Timeline(value)],
            },
        ),
        StepField::new(
            "budget",
            "Budget Range",
            Control::Choice {
                options: || catalog::BUDGETS.to_vec(),
                read: |record| record.budget.clone(),
                write: |_, value| vec![FieldUpdate::Budget(value)],
            },
        ),
        StepField::new(
            "complexity",
            "Complexity",
            Control::Choice {
                options: || catalog::COMPLEXITY_LEVELS.to_vec(),
                read: |record| record.complexity.to_string(),
                write: |_, value| match value.parse() {
                    Ok(level) => vec![FieldUpdate::Complexity(level)],
                    Err(_) => Vec::new(),
                },
            },
        )
        .hint("Set automatically when a project type is chosen"),
        StepField::new(
            "estimatedHours",
            "Estimated Hours",
            Control::Text {
                read: |record| record.estimated_hours.clone(),
                write: |_, value| vec![FieldUpdate::EstimatedHours(value)],
                multiline: false,
            },
        ),
    ]
}

pub fn can_advance(record: &FormRecord) -> bool {
    is_filled(&record.project_type)
        && is_filled(&record.project_description)
        && is_filled(&record.target_audience)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Complexity;
    use crate::wizard::steps::lists;

    #[test]
    fn selecting_type_sets_complexity_and_hours() {
        let mut record = FormRecord::default();
        record.apply(select_project_type(&record, "ecommerce"));
        assert_eq!(record.project_type, "ecommerce");
        assert_eq!(record.complexity, Complexity::Complex);
        assert_eq!(record.estimated_hours, "400-1000");
    }

    #[test]
    fn manual_edits_survive_until_reselection() {
        let mut record = FormRecord::default();
        record.apply(select_project_type(&record, "landing-page"));
        record.apply([FieldUpdate::Complexity(Complexity::Enterprise)]);
        assert_eq!(record.complexity, Complexity::Enterprise);

        record.apply(select_project_type(&record, "landing-page"));
        assert_eq!(record.complexity, Complexity::Simple);
    }

    #[test]
    fn unknown_type_only_sets_the_id() {
        let record = FormRecord::default();
        let updates = select_project_type(&record, "spaceship");
        assert_eq!(updates, vec![FieldUpdate::ProjectType("spaceship".into())]);
    }

    #[test]
    fn goals_are_edited_by_position() {
        let mut record = FormRecord::default();
        for input in ["Launch", " ", "Grow"] {
            let goals = lists::append_item(&record.project_goals, input);
            record.apply([FieldUpdate::ProjectGoals(goals)]);
        }
        assert_eq!(record.project_goals, vec!["Launch", "Grow"]);
        let goals = lists::remove_at(&record.project_goals, 0);
        record.apply([FieldUpdate::ProjectGoals(goals)]);
        assert_eq!(record.project_goals, vec!["Grow"]);
    }

    #[test]
    fn requires_type_description_and_audience() {
        let mut record = FormRecord::default();
        record.project_type = "web-app".into();
        record.project_description = "Storefront".into();
        assert!(!can_advance(&record));
        record.target_audience = "Shoppers".into();
        assert!(can_advance(&record));
    }
}
