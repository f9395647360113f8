use serde::{de::Error as _, Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{fmt, str::FromStr};

use super::{assets::FileAsset, integrations::Integrations};

/// Effort classification derived from the chosen project type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    #[default]
    Moderate,
    Complex,
    Enterprise,
}

impl Complexity {
    pub fn as_str(self) -> &'static str {
        match self {
            Complexity::Simple => "simple",
            Complexity::Moderate => "moderate",
            Complexity::Complex => "complex",
            Complexity::Enterprise => "enterprise",
        }
    }

    pub fn team_size(self) -> &'static str {
        match self {
            Complexity::Simple => "1-2 developers",
            Complexity::Moderate => "2-4 developers",
            Complexity::Complex | Complexity::Enterprise => "4-8 developers",
        }
    }
}

impl FromStr for Complexity {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(Complexity::Simple),
            "moderate" => Ok(Complexity::Moderate),
            "complex" => Ok(Complexity::Complex),
            "enterprise" => Ok(Complexity::Enterprise),
            other => Err(format!("unknown complexity `{}`", other)),
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserExperience {
    pub user_journey: Vec<String>,
    pub accessibility: Vec<String>,
    pub responsive_breakpoints: Vec<String>,
    pub browser_support: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentStrategy {
    pub tone: String,
    pub voice: String,
    pub messaging: Vec<String>,
    pub seo_keywords: Vec<String>,
    pub content_types: Vec<String>,
    pub localization: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Maintenance {
    pub update_frequency: String,
    pub support_level: String,
    pub documentation: Vec<String>,
    pub monitoring: Vec<String>,
    pub backup_strategy: String,
}

impl Maintenance {
    pub fn is_empty(&self) -> bool {
        self == &Maintenance::default()
    }
}

/// Everything the wizard collects. Missing keys in stored data fall back to
/// the defaults below, at every nesting level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub app_name: String,

    pub project_type: String,
    pub project_name: String,
    pub project_description: String,
    pub target_audience: String,
    pub project_goals: Vec<String>,
    pub timeline: String,
    pub budget: String,
    pub complexity: Complexity,
    pub estimated_hours: String,

    pub tech_stack: String,
    pub deployment: String,
    pub requirements: String,
    pub performance: String,
    pub functional_requirements: Vec<String>,
    pub non_functional_requirements: Vec<String>,
    pub constraints: Vec<String>,
    pub assumptions: Vec<String>,

    pub reference_files: Vec<FileAsset>,
    pub logo_files: Vec<FileAsset>,
    pub background_file: Option<FileAsset>,

    pub design_style: String,
    pub custom_style: String,
    pub color_scheme: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub typography: String,
    pub animation_style: String,
    pub user_experience: UserExperience,

    pub content_strategy: ContentStrategy,
    pub integrations: Integrations,
    pub maintenance: Maintenance,

    pub prompt_template: String,
    pub prompt_score: i64,
    pub prompt_version: i64,
    pub custom_instructions: String,
}

pub const DEFAULT_PRIMARY_COLOR: &str = "#3b82f6";
pub const DEFAULT_SECONDARY_COLOR: &str = "#8b5cf6";
pub const DEFAULT_ACCENT_COLOR: &str = "#06b6d4";

impl Default for FormRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            app_name: String::new(),
            project_type: String::new(),
            project_name: String::new(),
            project_description: String::new(),
            target_audience: String::new(),
            project_goals: Vec::new(),
            timeline: String::new(),
            budget: String::new(),
            complexity: Complexity::default(),
            estimated_hours: String::new(),
            tech_stack: String::new(),
            deployment: String::new(),
            requirements: String::new(),
            performance: String::new(),
            functional_requirements: Vec::new(),
            non_functional_requirements: Vec::new(),
            constraints: Vec::new(),
            assumptions: Vec::new(),
            reference_files: Vec::new(),
            logo_files: Vec::new(),
            background_file: None,
            design_style: String::new(),
            custom_style: String::new(),
            color_scheme: String::new(),
            primary_color: DEFAULT_PRIMARY_COLOR.into(),
            secondary_color: DEFAULT_SECONDARY_COLOR.into(),
            accent_color: DEFAULT_ACCENT_COLOR.into(),
            typography: String::new(),
            animation_style: String::new(),
            user_experience: UserExperience::default(),
            content_strategy: ContentStrategy::default(),
            integrations: Integrations::default(),
            maintenance: Maintenance::default(),
            prompt_template: String::new(),
            prompt_score: 0,
            prompt_version: 1,
            custom_instructions: String::new(),
        }
    }
}

macro_rules! field_updates {
    ($($variant:ident($ty:ty) => $field:ident, $key:literal;)*) => {
        /// Replacement value for a single top-level record key.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum FieldUpdate {
            $($variant($ty),)*
        }

        impl FieldUpdate {
            /// Persisted (camelCase) name of the key this update replaces.
            pub fn key(&self) -> &'static str {
                match self {
                    $(FieldUpdate::$variant(_) => $key,)*
                }
            }
        }

        impl FormRecord {
            fn apply_one(&mut self, update: FieldUpdate) {
                match update {
                    $(FieldUpdate::$variant(value) => self.$field = value,)*
                }
            }
        }
    };
}

field_updates! {
    Name(String) => name, "name";
    Email(String) => email, "email";
    Phone(String) => phone, "phone";
    AppName(String) => app_name, "appName";
    ProjectType(String) => project_type, "projectType";
    ProjectName(String) => project_name, "projectName";
    ProjectDescription(String) => project_description, "projectDescription";
    TargetAudience(String) => target_audience, "targetAudience";
    ProjectGoals(Vec<String>) => project_goals, "projectGoals";
    Timeline(String) => timeline, "timeline";
    Budget(String) => budget, "budget";
    Complexity(Complexity) => complexity, "complexity";
    EstimatedHours(String) => estimated_hours, "estimatedHours";
    TechStack(String) => tech_stack, "techStack";
    Deployment(String) => deployment, "deployment";
    Requirements(String) => requirements, "requirements";
    Performance(String) => performance, "performance";
    FunctionalRequirements(Vec<String>) => functional_requirements, "functionalRequirements";
    NonFunctionalRequirements(Vec<String>) => non_functional_requirements, "nonFunctionalRequirements";
    Constraints(Vec<String>) => constraints, "constraints";
    Assumptions(Vec<String>) => assumptions, "assumptions";
    ReferenceFiles(Vec<FileAsset>) => reference_files, "referenceFiles";
    LogoFiles(Vec<FileAsset>) => logo_files, "logoFiles";
    BackgroundFile(Option<FileAsset>) => background_file, "backgroundFile";
    DesignStyle(String) => design_style, "designStyle";
    CustomStyle(String) => custom_style, "customStyle";
    ColorScheme(String) => color_scheme, "colorScheme";
    PrimaryColor(String) => primary_color, "primaryColor";
    SecondaryColor(String) => secondary_color, "secondaryColor";
    AccentColor(String) => accent_color, "accentColor";
    Typography(String) => typography, "typography";
    AnimationStyle(String) => animation_style, "animationStyle";
    UserExperience(UserExperience) => user_experience, "userExperience";
    ContentStrategy(ContentStrategy) => content_strategy, "contentStrategy";
    Integrations(Integrations) => integrations, "integrations";
    Maintenance(Maintenance) => maintenance, "maintenance";
    PromptTemplate(String) => prompt_template, "promptTemplate";
    PromptScore(i64) => prompt_score, "promptScore";
    PromptVersion(i64) => prompt_version, "promptVersion";
    CustomInstructions(String) => custom_instructions, "customInstructions";
}

impl FormRecord {
    /// Shallow merge: each update replaces its top-level key wholesale.
    pub fn apply(&mut self, updates: impl IntoIterator<Item = FieldUpdate>) {
        for update in updates {
            self.apply_one(update);
        }
    }

    /// Parses stored JSON over the defaults, one top-level key at a time.
    ///
    /// A key whose value has the wrong shape keeps its default and is logged,
    /// so one bad leaf never discards the rest of the record. Numbers and
    /// booleans stored where text is expected are kept as text.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let Value::Object(stored) = serde_json::from_str::<Value>(json)? else {
            return Err(serde_json::Error::custom("stored record is not a JSON object"));
        };
        let mut merged = match serde_json::to_value(FormRecord::default())? {
            Value::Object(object) => object,
            _ => Map::new(),
        };

        for (key, value) in stored {
            let Some(default) = merged.get(&key) else {
                tracing::debug!(key = %key, "Ignoring unknown stored key");
                continue;
            };
            let value = match (default, value) {
                (Value::String(_), Value::Number(number)) => Value::String(number.to_string()),
                (Value::String(_), Value::Bool(flag)) => Value::String(flag.to_string()),
                (_, value) => value,
            };
            let single = Value::Object(Map::from_iter([(key.clone(), value.clone())]));
            match serde_json::from_value::<FormRecord>(single) {
                Ok(_) => {
                    merged.insert(key, value);
                }
                Err(err) => {
                    tracing::warn!(key = %key, "Stored value unreadable ({}); keeping default", err);
                }
            }
        }

        serde_json::from_value(Value::Object(merged))
    }

    /// Every uploaded asset in display order.
    pub fn assets(&self) -> impl Iterator<Item = &FileAsset> {
        self.reference_files
            .iter()
            .chain(self.logo_files.iter())
            .chain(self.background_file.iter())
    }

    /// Name used for exported files.
    pub fn export_stem(&self) -> String {
        let trimmed = self.app_name.trim();
        let base = if trimmed.is_empty() { "project" } else { trimmed };
        base.chars()
            .map(|ch| match ch {
                '/' | '\\' | ':' | '\0' => '_',
                other => other,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::integrations::IntegrationCategory;

    #[test]
    fn defaults_match_initial_record() {
        let record = FormRecord::default();
        assert_eq!(record.primary_color, "#3b82f6");
        assert_eq!(record.secondary_color, "#8b5cf6");
        assert_eq!(record.accent_color, "#06b6d4");
        assert_eq!(record.complexity, Complexity::Moderate);
        assert_eq!(record.prompt_version, 1);
        assert_eq!(record.prompt_score, 0);
        assert!(record.background_file.is_none());
    }

    #[test]
    fn partial_json_merges_over_defaults() {
        let record = FormRecord::from_json(r#"{"appName":"X"}"#).unwrap();
        let mut expected = FormRecord::default();
        expected.app_name = "X".into();
        assert_eq!(record, expected);
    }

    #[test]
    fn partial_nested_group_keeps_missing_fields() {
        let record =
            FormRecord::from_json(r#"{"contentStrategy":{"tone":"friendly"}}"#).unwrap();
        assert_eq!(record.content_strategy.tone, "friendly");
        assert!(record.content_strategy.voice.is_empty());
        assert!(record.content_strategy.seo_keywords.is_empty());
        assert!(!record.integrations.group(IntegrationCategory::Social).enabled);
    }

    #[test]
    fn mismatched_leaves_keep_defaults_without_losing_the_rest() {
        let json = r#"{
            "name": "Jane",
            "appName": "Acme",
            "estimatedHours": 120,
            "complexity": "complex",
            "performance": {
                "expectedUsers": "1000",
                "loadTime": "2s",
                "scalingStrategy": "",
                "caching": [],
                "optimization": []
            },
            "security": { "authenticationMethod": "", "compliance": [] },
            "testing": { "testingTypes": [], "cicdPipeline": false },
            "projectGoals": "not a list",
            "contentStrategy": { "tone": "professional", "voice": "educational" }
        }"#;
        let record = FormRecord::from_json(json).unwrap();
        assert_eq!(record.name, "Jane");
        assert_eq!(record.app_name, "Acme");
        assert_eq!(record.estimated_hours, "120");
        assert_eq!(record.complexity, Complexity::Complex);
        assert_eq!(record.performance, "");
        assert!(record.project_goals.is_empty());
        assert_eq!(record.content_strategy.voice, "educational");
    }

    #[test]
    fn non_object_json_is_rejected() {
        assert!(FormRecord::from_json("[1, 2]").is_err());
        assert!(FormRecord::from_json("{ truncated").is_err());
    }

    #[test]
    fn serialized_keys_are_camel_case() {
        let value = serde_json::to_value(FormRecord::default()).unwrap();
        assert!(value.get("appName").is_some());
        assert!(value.get("nonFunctionalRequirements").is_some());
        assert!(value["userExperience"].get("responsiveBreakpoints").is_some());
        assert_eq!(value["complexity"], "moderate");
        assert!(value["backgroundFile"].is_null());
    }

    #[test]
    fn apply_replaces_only_named_keys() {
        let mut record = FormRecord::default();
        record.apply([
            FieldUpdate::Name("Jane".into()),
            FieldUpdate::ProjectGoals(vec!["Launch".into(), "Launch".into()]),
        ]);
        assert_eq!(record.name, "Jane");
        assert_eq!(record.project_goals.len(), 2);
        assert_eq!(record.email, "");
        assert_eq!(FieldUpdate::AppName(String::new()).key(), "appName");
    }

    #[test]
    fn export_stem_falls_back_and_sanitizes() {
        let mut record = FormRecord::default();
        assert_eq!(record.export_stem(), "project");
        record.app_name = "Acme/Shop".into();
        assert_eq!(record.export_stem(), "Acme_Shop");
    }
}
