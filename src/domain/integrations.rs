//! Third-party integration choices captured on the integrations step.
//!
//! Every category is always present with an `enabled` flag and its
//! provider-specific settings. The settings are plain data; nothing here talks
//! to a provider.

use serde::{
    de::{Deserializer, Error as _},
    ser::{SerializeMap, Serializer},
    Deserialize, Serialize,
};
use serde_json::{Map, Value};
use std::{collections::BTreeMap, fmt, str::FromStr};

use super::common::Displayable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IntegrationCategory {
    Email,
    Autoresponder,
    Payment,
    Development,
    Cloud,
    Analytics,
    Social,
}

impl IntegrationCategory {
    pub const ALL: [IntegrationCategory; 7] = [
        IntegrationCategory::Email,
        IntegrationCategory::Autoresponder,
        IntegrationCategory::Payment,
        IntegrationCategory::Development,
        IntegrationCategory::Cloud,
        IntegrationCategory::Analytics,
        IntegrationCategory::Social,
    ];

    /// Key used in the persisted record.
    pub fn key(self) -> &'static str {
        match self {
            IntegrationCategory::Email => "email",
            IntegrationCategory::Autoresponder => "autoresponder",
            IntegrationCategory::Payment => "payment",
            IntegrationCategory::Development => "development",
            IntegrationCategory::Cloud => "cloud",
            IntegrationCategory::Analytics => "analytics",
            IntegrationCategory::Social => "social",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            IntegrationCategory::Email => "Email Services",
            IntegrationCategory::Autoresponder => "Email Marketing",
            IntegrationCategory::Payment => "Payment Processing",
            IntegrationCategory::Development => "Development Tools",
            IntegrationCategory::Cloud => "Cloud Services",
            IntegrationCategory::Analytics => "Analytics & Tracking",
            IntegrationCategory::Social => "Social Media",
        }
    }

    /// Nested sub-providers offered by the category, in display order.
    pub fn providers(self) -> &'static [ProviderSpec] {
        match self {
            IntegrationCategory::Email | IntegrationCategory::Autoresponder => &[],
            IntegrationCategory::Payment => PAYMENT_PROVIDERS,
            IntegrationCategory::Development => DEVELOPMENT_TOOLS,
            IntegrationCategory::Cloud => CLOUD_PROVIDERS,
            IntegrationCategory::Analytics => ANALYTICS_PROVIDERS,
            IntegrationCategory::Social => SOCIAL_PROVIDERS,
        }
    }

    /// Flat settings edited directly on the category.
    pub fn settings_keys(self) -> &'static [&'static str] {
        match self {
            IntegrationCategory::Email => &["provider", "apiKey", "fromEmail", "fromName"],
            IntegrationCategory::Autoresponder => &["provider", "apiKey", "listId"],
            IntegrationCategory::Payment => &["currency"],
            _ => &[],
        }
    }

    pub fn provider_spec(self, key: &str) -> Option<&'static ProviderSpec> {
        self.providers().iter().find(|spec| spec.key == key)
    }
}

impl FromStr for IntegrationCategory {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        IntegrationCategory::ALL
            .into_iter()
            .find(|category| category.key() == value)
            .ok_or_else(|| format!("unknown integration category `{}`", value))
    }
}

impl fmt::Display for IntegrationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Displayable for IntegrationCategory {
    fn display_label(&self) -> String {
        self.title().to_string()
    }
}

/// Describes one nested sub-provider and the credential fields it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub credentials: &'static [&'static str],
}

const fn spec(
    key: &'static str,
    label: &'static str,
    credentials: &'static [&'static str],
) -> ProviderSpec {
    ProviderSpec {
        key,
        label,
        credentials,
    }
}

const PAYMENT_PROVIDERS: &[ProviderSpec] = &[
    spec("stripe", "Stripe", &["publishableKey", "secretKey"]),
    spec("paypal", "PayPal", &["clientId", "clientSecret"]),
    spec("square", "Square", &["applicationId", "accessToken"]),
];

const DEVELOPMENT_TOOLS: &[ProviderSpec] = &[
    spec("github", "GitHub", &["username", "token", "repository"]),
    spec("vercel", "Vercel", &["token", "teamId"]),
    spec("tailwind", "Tailwind CSS", &["config", "customConfig"]),
];

const CLOUD_PROVIDERS: &[ProviderSpec] = &[
    spec("aws", "AWS", &["accessKey", "secretKey", "region"]),
    spec("gcp", "Google Cloud", &["projectId", "keyFile"]),
    spec(
        "azure",
        "Azure",
        &["subscriptionId", "clientId", "clientSecret"],
    ),
    spec("firebase", "Firebase", &["projectId", "apiKey"]),
    spec("supabase", "Supabase", &["url", "anonKey"]),
];

const ANALYTICS_PROVIDERS: &[ProviderSpec] = &[
    spec("googleAnalytics", "Google Analytics", &["trackingId"]),
    spec("mixpanel", "Mixpanel", &["token"]),
    spec("amplitude", "Amplitude", &["apiKey"]),
    spec("hotjar", "Hotjar", &["siteId"]),
    spec("posthog", "PostHog", &["apiKey"]),
];

const SOCIAL_PROVIDERS: &[ProviderSpec] = &[
    spec("twitter", "Twitter/X", &["apiKey", "apiSecret"]),
    spec("facebook", "Facebook", &["appId", "appSecret"]),
    spec("linkedin", "LinkedIn", &["clientId", "clientSecret"]),
    spec("discord", "Discord", &["botToken", "guildId"]),
    spec("slack", "Slack", &["botToken", "signingSecret"]),
];

/// A nested provider toggle with its credential strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubProvider {
    #[serde(default)]
    pub enabled: bool,
    #[serde(flatten)]
    pub credentials: BTreeMap<String, String>,
}

impl SubProvider {
    fn blank(spec: &ProviderSpec) -> Self {
        Self {
            enabled: false,
            credentials: spec
                .credentials
                .iter()
                .map(|key| (key.to_string(), String::new()))
                .collect(),
        }
    }

    pub fn credential(&self, key: &str) -> &str {
        self.credentials.get(key).map(String::as_str).unwrap_or("")
    }
}

/// Sub-providers keyed by their persisted name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderSet(BTreeMap<String, SubProvider>);

impl ProviderSet {
    fn from_specs(specs: &[ProviderSpec]) -> Self {
        Self(
            specs
                .iter()
                .map(|spec| (spec.key.to_string(), SubProvider::blank(spec)))
                .collect(),
        )
    }

    /// Restores any provider or credential the stored value left out.
    fn fill_missing(&mut self, specs: &[ProviderSpec]) {
        for spec in specs {
            let entry = self
                .0
                .entry(spec.key.to_string())
                .or_insert_with(|| SubProvider::blank(spec));
            for key in spec.credentials {
                entry.credentials.entry(key.to_string()).or_default();
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&SubProvider> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut SubProvider> {
        self.0.get_mut(key)
    }

    /// Display names of the enabled providers, in catalog order.
    pub fn enabled_labels(&self, specs: &[ProviderSpec]) -> Vec<String> {
        specs
            .iter()
            .filter(|spec| self.0.get(spec.key).is_some_and(|provider| provider.enabled))
            .map(|spec| spec.label.to_string())
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmailSettings {
    pub provider: String,
    pub api_key: String,
    pub from_email: String,
    pub from_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AutoresponderSettings {
    pub provider: String,
    pub api_key: String,
    pub list_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentSettings {
    pub providers: ProviderSet,
    pub currency: String,
}

impl Default for PaymentSettings {
    fn default() -> Self {
        Self {
            providers: ProviderSet::from_specs(PAYMENT_PROVIDERS),
            currency: "USD".into(),
        }
    }
}

/// Development tools are stored directly on the group (`github`, `vercel`,
/// `tailwind`) rather than under a `providers` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevelopmentSettings {
    #[serde(flatten)]
    pub tools: ProviderSet,
}

impl Default for DevelopmentSettings {
    fn default() -> Self {
        let mut tools = ProviderSet::from_specs(DEVELOPMENT_TOOLS);
        if let Some(tailwind) = tools.get_mut("tailwind") {
            tailwind.enabled = true;
            tailwind
                .credentials
                .insert("config".into(), "default".into());
        }
        Self { tools }
    }
}

macro_rules! provider_settings {
    ($name:ident, $specs:expr) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct $name {
            pub providers: ProviderSet,
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    providers: ProviderSet::from_specs($specs),
                }
            }
        }
    };
}

provider_settings!(CloudSettings, CLOUD_PROVIDERS);
provider_settings!(AnalyticsSettings, ANALYTICS_PROVIDERS);
provider_settings!(SocialSettings, SOCIAL_PROVIDERS);

/// Provider-specific settings, one variant per category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderSettings {
    Email(EmailSettings),
    Autoresponder(AutoresponderSettings),
    Payment(PaymentSettings),
    Development(DevelopmentSettings),
    Cloud(CloudSettings),
    Analytics(AnalyticsSettings),
    Social(SocialSettings),
}

/// A rendered settings value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::List(items) => items.is_empty(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

impl ProviderSettings {
    pub fn default_for(category: IntegrationCategory) -> Self {
        match category {
            IntegrationCategory::Email => ProviderSettings::Email(EmailSettings::default()),
            IntegrationCategory::Autoresponder => {
                ProviderSettings::Autoresponder(AutoresponderSettings::default())
            }
            IntegrationCategory::Payment => ProviderSettings::Payment(PaymentSettings::default()),
            IntegrationCategory::Development => {
                ProviderSettings::Development(DevelopmentSettings::default())
            }
            IntegrationCategory::Cloud => ProviderSettings::Cloud(CloudSettings::default()),
            IntegrationCategory::Analytics => {
                ProviderSettings::Analytics(AnalyticsSettings::default())
            }
            IntegrationCategory::Social => ProviderSettings::Social(SocialSettings::default()),
        }
    }

    pub fn category(&self) -> IntegrationCategory {
        match self {
            ProviderSettings::Email(_) => IntegrationCategory::Email,
            ProviderSettings::Autoresponder(_) => IntegrationCategory::Autoresponder,
            ProviderSettings::Payment(_) => IntegrationCategory::Payment,
            ProviderSettings::Development(_) => IntegrationCategory::Development,
            ProviderSettings::Cloud(_) => IntegrationCategory::Cloud,
            ProviderSettings::Analytics(_) => IntegrationCategory::Analytics,
            ProviderSettings::Social(_) => IntegrationCategory::Social,
        }
    }

    /// Ordered `(key, value)` listing used when rendering the prompt.
    pub fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        let text = |value: &str| FieldValue::Text(value.to_string());
        match self {
            ProviderSettings::Email(email) => vec![
                ("provider", text(&email.provider)),
                ("apiKey", text(&email.api_key)),
                ("fromEmail", text(&email.from_email)),
                ("fromName", text(&email.from_name)),
            ],
            ProviderSettings::Autoresponder(auto) => vec![
                ("provider", text(&auto.provider)),
                ("apiKey", text(&auto.api_key)),
                ("listId", text(&auto.list_id)),
            ],
            ProviderSettings::Payment(payment) => vec![
                (
                    "providers",
                    FieldValue::List(payment.providers.enabled_labels(PAYMENT_PROVIDERS)),
                ),
                ("currency", text(&payment.currency)),
            ],
            ProviderSettings::Development(dev) => vec![(
                "tools",
                FieldValue::List(dev.tools.enabled_labels(DEVELOPMENT_TOOLS)),
            )],
            ProviderSettings::Cloud(cloud) => vec![(
                "providers",
                FieldValue::List(cloud.providers.enabled_labels(CLOUD_PROVIDERS)),
            )],
            ProviderSettings::Analytics(analytics) => vec![(
                "providers",
                FieldValue::List(analytics.providers.enabled_labels(ANALYTICS_PROVIDERS)),
            )],
            ProviderSettings::Social(social) => vec![(
                "providers",
                FieldValue::List(social.providers.enabled_labels(SOCIAL_PROVIDERS)),
            )],
        }
    }

    /// Reads a flat setting by its persisted key.
    pub fn setting(&self, key: &str) -> Option<&str> {
        let value = match (self, key) {
            (ProviderSettings::Email(email), "provider") => &email.provider,
            (ProviderSettings::Email(email), "apiKey") => &email.api_key,
            (ProviderSettings::Email(email), "fromEmail") => &email.from_email,
            (ProviderSettings::Email(email), "fromName") => &email.from_name,
            (ProviderSettings::Autoresponder(auto), "provider") => &auto.provider,
            (ProviderSettings::Autoresponder(auto), "apiKey") => &auto.api_key,
            (ProviderSettings::Autoresponder(auto), "listId") => &auto.list_id,
            (ProviderSettings::Payment(payment), "currency") => &payment.currency,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Writes a flat setting; returns `false` when the key does not exist.
    pub fn set_setting(&mut self, key: &str, value: String) -> bool {
        let slot = match (self, key) {
            (ProviderSettings::Email(email), "provider") => &mut email.provider,
            (ProviderSettings::Email(email), "apiKey") => &mut email.api_key,
            (ProviderSettings::Email(email), "fromEmail") => &mut email.from_email,
            (ProviderSettings::Email(email), "fromName") => &mut email.from_name,
            (ProviderSettings::Autoresponder(auto), "provider") => &mut auto.provider,
            (ProviderSettings::Autoresponder(auto), "apiKey") => &mut auto.api_key,
            (ProviderSettings::Autoresponder(auto), "listId") => &mut auto.list_id,
            (ProviderSettings::Payment(payment), "currency") => &mut payment.currency,
            _ => return false,
        };
        *slot = value;
        true
    }

    pub fn providers(&self) -> Option<&ProviderSet> {
        match self {
            ProviderSettings::Payment(payment) => Some(&payment.providers),
            ProviderSettings::Development(dev) => Some(&dev.tools),
            ProviderSettings::Cloud(cloud) => Some(&cloud.providers),
            ProviderSettings::Analytics(analytics) => Some(&analytics.providers),
            ProviderSettings::Social(social) => Some(&social.providers),
            ProviderSettings::Email(_) | ProviderSettings::Autoresponder(_) => None,
        }
    }

    pub fn providers_mut(&mut self) -> Option<&mut ProviderSet> {
        match self {
            ProviderSettings::Payment(payment) => Some(&mut payment.providers),
            ProviderSettings::Development(dev) => Some(&mut dev.tools),
            ProviderSettings::Cloud(cloud) => Some(&mut cloud.providers),
            ProviderSettings::Analytics(analytics) => Some(&mut analytics.providers),
            ProviderSettings::Social(social) => Some(&mut social.providers),
            ProviderSettings::Email(_) | ProviderSettings::Autoresponder(_) => None,
        }
    }

    fn to_value(&self) -> Result<Value, serde_json::Error> {
        match self {
            ProviderSettings::Email(inner) => serde_json::to_value(inner),
            ProviderSettings::Autoresponder(inner) => serde_json::to_value(inner),
            ProviderSettings::Payment(inner) => serde_json::to_value(inner),
            ProviderSettings::Development(inner) => serde_json::to_value(inner),
            ProviderSettings::Cloud(inner) => serde_json::to_value(inner),
            ProviderSettings::Analytics(inner) => serde_json::to_value(inner),
            ProviderSettings::Social(inner) => serde_json::to_value(inner),
        }
    }

    fn from_value(category: IntegrationCategory, value: Value) -> Result<Self, serde_json::Error> {
        let mut settings = match category {
            IntegrationCategory::Email => ProviderSettings::Email(serde_json::from_value(value)?),
            IntegrationCategory::Autoresponder => {
                ProviderSettings::Autoresponder(serde_json::from_value(value)?)
            }
            IntegrationCategory::Payment => {
                ProviderSettings::Payment(serde_json::from_value(value)?)
            }
            IntegrationCategory::Development => {
                ProviderSettings::Development(serde_json::from_value(value)?)
            }
            IntegrationCategory::Cloud => ProviderSettings::Cloud(serde_json::from_value(value)?),
            IntegrationCategory::Analytics => {
                ProviderSettings::Analytics(serde_json::from_value(value)?)
            }
            IntegrationCategory::Social => ProviderSettings::Social(serde_json::from_value(value)?),
        };
        if let Some(providers) = settings.providers_mut() {
            providers.fill_missing(category.providers());
        }
        Ok(settings)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrationGroup {
    pub enabled: bool,
    pub settings: ProviderSettings,
}

impl IntegrationGroup {
    pub fn default_for(category: IntegrationCategory) -> Self {
        Self {
            enabled: false,
            settings: ProviderSettings::default_for(category),
        }
    }
}

/// All integration categories, always fully populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Integrations(BTreeMap<IntegrationCategory, IntegrationGroup>);

impl Default for Integrations {
    fn default() -> Self {
        Self(
            IntegrationCategory::ALL
                .into_iter()
                .map(|category| (category, IntegrationGroup::default_for(category)))
                .collect(),
        )
    }
}

impl Integrations {
    pub fn group(&self, category: IntegrationCategory) -> &IntegrationGroup {
        // The map is seeded with every category and entries are never removed.
        &self.0[&category]
    }

    pub fn group_mut(&mut self, category: IntegrationCategory) -> &mut IntegrationGroup {
        self.0
            .entry(category)
            .or_insert_with(|| IntegrationGroup::default_for(category))
    }

    pub fn iter(&self) -> impl Iterator<Item = (IntegrationCategory, &IntegrationGroup)> {
        self.0.iter().map(|(category, group)| (*category, group))
    }

    pub fn enabled(&self) -> impl Iterator<Item = (IntegrationCategory, &IntegrationGroup)> {
        self.iter().filter(|(_, group)| group.enabled)
    }

    pub fn any_enabled(&self) -> bool {
        self.enabled().next().is_some()
    }
}

impl Serialize for Integrations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::Error as _;

        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (category, group) in &self.0 {
            let mut object = match group.settings.to_value().map_err(S::Error::custom)? {
                Value::Object(object) => object,
                _ => Map::new(),
            };
            object.insert("enabled".into(), Value::Bool(group.enabled));
            map.serialize_entry(category.key(), &object)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Integrations {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Map::<String, Value>::deserialize(deserializer)
            .map_err(|err| D::Error::custom(format!("integrations: {}", err)))?;
        let mut integrations = Integrations::default();
        for (key, value) in raw {
            let category = match key.parse::<IntegrationCategory>() {
                Ok(category) => category,
                Err(reason) => {
                    tracing::warn!("Ignoring stored integration: {}", reason);
                    continue;
                }
            };
            let Value::Object(mut object) = value else {
                tracing::warn!(category = %category, "Integration entry is not an object; using defaults");
                continue;
            };
            let enabled = object
                .remove("enabled")
                .and_then(|flag| flag.as_bool())
                .unwrap_or(false);
            let settings = match ProviderSettings::from_value(category, Value::Object(object)) {
                Ok(settings) => settings,
                Err(err) => {
                    tracing::warn!(category = %category, "Integration settings unreadable ({}); using defaults", err);
                    ProviderSettings::default_for(category)
                }
            };
            integrations
                .0
                .insert(category, IntegrationGroup { enabled, settings });
        }
        Ok(integrations)
    }
}
