//! Integration toggles and provider settings, plus the maintenance plan that
//! shares this page.

use crate::domain::{FieldUpdate, FormRecord, IntegrationCategory, Integrations, Maintenance};

use super::{Control, StepField};

fn with_integrations(
    record: &FormRecord,
    edit: impl FnOnce(&mut Integrations) -> bool,
) -> Vec<FieldUpdate> {
    let mut integrations = record.integrations.clone();
    if edit(&mut integrations) {
        vec![FieldUpdate::Integrations(integrations)]
    } else {
        Vec::new()
    }
}

fn with_maintenance(record: &FormRecord, edit: impl FnOnce(&mut Maintenance)) -> Vec<FieldUpdate> {
    let mut maintenance = record.maintenance.clone();
    edit(&mut maintenance);
    vec![FieldUpdate::Maintenance(maintenance)]
}

/// Flips the category's `enabled` flag; its settings are kept either way.
pub fn toggle_group(record: &FormRecord, category: IntegrationCategory) -> Vec<FieldUpdate> {
    with_integrations(record, |integrations| {
        let group = integrations.group_mut(category);
        group.enabled = !group.enabled;
        true
    })
}

/// Flips a nested provider's `enabled` flag. Unknown providers yield no update.
pub fn toggle_provider(
    record: &FormRecord,
    category: IntegrationCategory,
    provider: &str,
) -> Vec<FieldUpdate> {
    with_integrations(record, |integrations| {
        match integrations
            .group_mut(category)
            .settings
            .providers_mut()
            .and_then(|providers| providers.get_mut(provider))
        {
            Some(entry) => {
                entry.enabled = !entry.enabled;
                true
            }
            None => false,
        }
    })
}

/// Sets a flat category setting such as the email `provider` or payment
/// `currency`. Unknown keys yield no update.
pub fn set_setting(
    record: &FormRecord,
    category: IntegrationCategory,
    key: &str,
    value: String,
) -> Vec<FieldUpdate> {
    with_integrations(record, |integrations| {
        integrations
            .group_mut(category)
            .settings
            .set_setting(key, value)
    })
}

/// Sets a credential on a nested provider, e.g. the Stripe `secretKey`.
pub fn set_provider_setting(
    record: &FormRecord,
    category: IntegrationCategory,
    provider: &str,
    key: &str,
    value: String,
) -> Vec<FieldUpdate> {
    let known = category
        .provider_spec(provider)
        .is_some_and(|spec| spec.credentials.contains(&key));
    if !known {
        return Vec::new();
    }
    with_integrations(record, |integrations| {
        match integrations
            .group_mut(category)
            .settings
            .providers_mut()
            .and_then(|providers| providers.get_mut(provider))
        {
            Some(entry) => {
                entry.credentials.insert(key.to_string(), value);
                true
            }
            None => false,
        }
    })
}

pub fn fields() -> Vec<StepField> {
    let mut fields: Vec<StepField> = IntegrationCategory::ALL
        .into_iter()
        .map(|category| {
            StepField::new(
                category.key(),
                category.title(),
                Control::Integration(category),
            )
        })
        .collect();

    fields.extend([
        StepField::new(
            "updateFrequency",
            "Update Frequency",
            Control::Text {
                read: |record| record.maintenance.update_frequency.clone(),
                write: |record, value| with_maintenance(record, |plan| plan.update_frequency = value),
                multiline: false,
            },
        ),
        StepField::new(
            "supportLevel",
            "Support Level",
            Control::Text {
                read: |record| record.maintenance.support_level.clone(),
                write: |record, value| with_maintenance(record, |plan| plan.support_level = value),
                multiline: false,
            },
        ),
        StepField::new(
            "documentation",
            "Documentation",
            Control::List {
                read: |record| record.maintenance.documentation.clone(),
                write: |record, items| with_maintenance(record, |plan| plan.documentation = items),
            },
        ),
        StepField::new(
            "monitoring",
            "Monitoring",
            Control::List {
                read: |record| record.maintenance.monitoring.clone(),
                write: |record, items| with_maintenance(record, |plan| plan.monitoring = items),
            },
        ),
        StepField::new(
            "backupStrategy",
            "Backup Strategy",
            Control::Text {
                read: |record| record.maintenance.backup_strategy.clone(),
                write: |record, value| with_maintenance(record, |plan| plan.backup_strategy = value),
                multiline: false,
            },
        ),
    ]);
    fields
}

pub fn can_advance(_record: &FormRecord) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProviderSettings;

    #[test]
    fn toggle_group_keeps_settings() {
        let mut record = FormRecord::default();
        record.apply(set_setting(
            &record,
            IntegrationCategory::Email,
            "provider",
            "sendgrid".into(),
        ));
        record.apply(toggle_group(&record, IntegrationCategory::Email));
        record.apply(toggle_group(&record, IntegrationCategory::Email));
        let email = record.integrations.group(IntegrationCategory::Email);
        assert!(!email.enabled);
        assert_eq!(email.settings.setting("provider"), Some("sendgrid"));
    }

    #[test]
    fn provider_toggle_and_credentials() {
        let mut record = FormRecord::default();
        record.apply(toggle_provider(&record, IntegrationCategory::Payment, "stripe"));
        record.apply(set_provider_setting(
            &record,
            IntegrationCategory::Payment,
            "stripe",
            "secretKey",
            "sk_test".into(),
        ));
        let ProviderSettings::Payment(payment) =
            &record.integrations.group(IntegrationCategory::Payment).settings
        else {
            panic!("payment settings expected");
        };
        let stripe = payment.providers.get("stripe").unwrap();
        assert!(stripe.enabled);
        assert_eq!(stripe.credential("secretKey"), "sk_test");
    }

    #[test]
    fn unknown_targets_produce_no_updates() {
        let record = FormRecord::default();
        assert!(toggle_provider(&record, IntegrationCategory::Email, "stripe").is_empty());
        assert!(set_setting(&record, IntegrationCategory::Cloud, "region", "eu".into()).is_empty());
        assert!(set_provider_setting(
            &record,
            IntegrationCategory::Cloud,
            "aws",
            "password",
            "x".into()
        )
        .is_empty());
    }

    #[test]
    fn maintenance_fields_rebuild_the_group() {
        let mut record = FormRecord::default();
        record.maintenance.monitoring = vec!["Uptime".into()];
        let field = fields()
            .into_iter()
            .find(|field| field.key == "supportLevel")
            .unwrap();
        let Control::Text { write, .. } = field.control else {
            panic!("text control expected");
        };
        record.apply(write(&record, "Business hours".into()));
        assert_eq!(record.maintenance.support_level, "Business hours");
        assert_eq!(record.maintenance.monitoring, vec!["Uptime"]);
    }
}
