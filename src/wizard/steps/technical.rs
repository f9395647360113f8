use crate::domain::{catalog, is_filled, FieldUpdate, FormRecord};

use super::{Control, StepField};

fn uses_custom_stack(record: &FormRecord) -> bool {
    record.tech_stack == "custom"
}

pub fn fields() -> Vec<StepField> {
    vec![
        StepField::new(
            "techStack",
            "Technology Stack",
            Control::Choice {
                options: || catalog::TECH_STACKS.to_vec(),
                read: |record| record.tech_stack.clone(),
                write: |_, value| vec![FieldUpdate::TechStack(value)],
            },
        )
        .required(),
        StepField::new(
            "requirements",
            "Custom Stack Details",
            Control::Text {
                read: |record| record.requirements.clone(),
                write: |_, value| vec![FieldUpdate::Requirements(value)],
                multiline: true,
            },
        )
        .hint("Languages, frameworks and databases you want to use")
        .visible_when(uses_custom_stack),
        StepField::new(
            "deployment",
            "Deployment Platform",
            Control::Choice {
                options: || catalog::DEPLOYMENTS.to_vec(),
                read: |record| record.deployment.clone(),
                write: |_, value| vec![FieldUpdate::Deployment(value)],
            },
        ),
        StepField::new(
            "performance",
            "Performance Requirements",
            Control::Text {
                read: |record| record.performance.clone(),
                write: |_, value| vec![FieldUpdate::Performance(value)],
                multiline: false,
            },
        ),
        StepField::new(
            "functionalRequirements",
            "Functional Requirements",
            Control::List {
                read: |record| record.functional_requirements.clone(),
                write: |_, items| vec![FieldUpdate::FunctionalRequirements(items)],
            },
        ),
        StepField::new(
            "nonFunctionalRequirements",
            "Non-Functional Requirements",
            Control::List {
                read: |record| record.non_functional_requirements.clone(),
                write: |_, items| vec![FieldUpdate::NonFunctionalRequirements(items)],
            },
        ),
        StepField::new(
            "constraints",
            "Constraints",
            Control::List {
                read: |record| record.constraints.clone(),
                write: |_, items| vec![FieldUpdate::Constraints(items)],
            },
        ),
        StepField::new(
            "assumptions",
            "Assumptions",
            Control::List {
                read: |record| record.assumptions.clone(),
                write: |_, items| vec![FieldUpdate::Assumptions(items)],
            },
        ),
    ]
}

pub fn can_advance(record: &FormRecord) -> bool {
    is_filled(&record.tech_stack)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_stack_is_required() {
        let mut record = FormRecord::default();
        assert!(!can_advance(&record));
        record.tech_stack = "nextjs".into();
        assert!(can_advance(&record));
    }

    #[test]
    fn custom_stack_details_show_for_custom_stack() {
        let field = fields()
            .into_iter()
            .find(|field| field.key == "requirements")
            .unwrap();
        let mut record = FormRecord::default();
        assert!(!field.is_visible(&record));
        record.tech_stack = "custom".into();
        assert!(field.is_visible(&record));
    }
}
