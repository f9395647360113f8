use crate::domain::{is_filled, FieldUpdate, FormRecord};

use super::{Control, StepField};

pub fn fields() -> Vec<StepField> {
    vec![
        StepField::new(
            "name",
            "Full Name",
            Control::Text {
                read: |record| record.name.clone(),
                write: |_, value| vec![FieldUpdate::Name(value)],
                multiline: false,
            },
        )
        .required(),
        StepField::new(
            "email",
            "Email Address",
            Control::Text {
                read: |record| record.email.clone(),
                write: |_, value| vec![FieldUpdate::Email(value)],
                multiline: false,
            },
        )
        .required(),
        StepField::new(
            "phone",
            "Phone Number",
            Control::Text {
                read: |record| record.phone.clone(),
                write: |_, value| vec![FieldUpdate::Phone(value)],
                multiline: false,
            },
        ),
        StepField::new(
            "appName",
            "Application Name",
            Control::Text {
                read: |record| record.app_name.clone(),
                write: |_, value| vec![FieldUpdate::AppName(value)],
                multiline: false,
            },
        )
        .required()
        .hint("Used for exported file names"),
    ]
}

pub fn can_advance(record: &FormRecord) -> bool {
    is_filled(&record.name) && is_filled(&record.email) && is_filled(&record.app_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_name_email_and_app_name() {
        let mut record = FormRecord::default();
        assert!(!can_advance(&record));
        record.name = "Jane".into();
        record.email = "jane@x.com".into();
        assert!(!can_advance(&record));
        record.app_name = "   ".into();
        assert!(!can_advance(&record));
        record.app_name = "Acme".into();
        assert!(can_advance(&record));
    }
}
