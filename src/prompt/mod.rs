//! Builds the final prompt document from a form record.
//!
//! Assembly is pure: the same record always yields the same text.

mod boilerplate;

use crate::domain::{
    assets::human_size,
    catalog::{self, CatalogEntry},
    is_filled, FormRecord,
};

const NOT_SPECIFIED: &str = "Not specified";
const NOT_SELECTED: &str = "Not selected";

/// Assembles the prompt text for `record`.
pub fn assemble(record: &FormRecord) -> String {
    let mut doc = PromptDocument::default();
    doc.line("# AI PROMPT ARCHITECT SPECIFICATION");
    doc.blank();

    author_profile(&mut doc, record);
    project_overview(&mut doc, record);
    technical_specs(&mut doc, record);
    project_assets(&mut doc, record);
    doc.extend(boilerplate::WRITING_PERSONA);
    topic_persona(&mut doc, record);
    design_vibe(&mut doc, record);
    content_strategy(&mut doc, record);
    integrations(&mut doc, record);
    maintenance(&mut doc, record);
    doc.extend(boilerplate::IMPLEMENTATION);
    doc.extend(boilerplate::SUCCESS_METRICS);
    doc.extend(boilerplate::FINAL_INSTRUCTIONS);

    if is_filled(&record.custom_instructions) {
        doc.blank();
        doc.line("**Additional Instructions:**");
        doc.line(record.custom_instructions.trim());
    }

    doc.finish()
}

/// Turns `camelCase` keys into `Camel Case` labels.
pub fn humanize_key(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    for (index, ch) in key.chars().enumerate() {
        if index == 0 {
            label.extend(ch.to_uppercase());
        } else if ch.is_ascii_uppercase() {
            label.push(' ');
            label.push(ch);
        } else {
            label.push(ch);
        }
    }
    label
}

#[derive(Default)]
struct PromptDocument {
    lines: Vec<String>,
}

impl PromptDocument {
    fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn extend(&mut self, block: &[&str]) {
        self.lines.extend(block.iter().map(|line| line.to_string()));
    }

    /// `**Label:** value`, or the placeholder when the value is blank.
    fn field_or(&mut self, label: &str, value: &str, placeholder: &str) {
        let shown = if is_filled(value) { value } else { placeholder };
        self.line(format!("**{}:** {}", label, shown));
    }

    /// `**Label:** value`, omitted entirely when the value is blank.
    fn optional(&mut self, label: &str, value: &str) {
        if is_filled(value) {
            self.line(format!("**{}:** {}", label, value));
        }
    }

    fn bullet_block(&mut self, label: &str, items: &[String]) {
        if items.is_empty() {
            return;
        }
        self.line(format!("**{}:**", label));
        for item in items {
            self.line(format!("- {}", item));
        }
    }

    fn finish(self) -> String {
        self.lines.join("\n")
    }
}

fn title_or_blank(entries: &[CatalogEntry], id: &str) -> String {
    if is_filled(id) {
        catalog::display_title(entries, id)
    } else {
        String::new()
    }
}

fn author_profile(doc: &mut PromptDocument, record: &FormRecord) {
    doc.line("## AUTHOR PROFILE");
    doc.field_or("Name", &record.name, NOT_SPECIFIED);
    doc.field_or("Email", &record.email, NOT_SPECIFIED);
    doc.optional("Phone", &record.phone);
    doc.blank();
}

fn project_overview(doc: &mut PromptDocument, record: &FormRecord) {
    let project_types = catalog::project_type_entries();
    doc.line("## PROJECT OVERVIEW");
    doc.field_or("Application Name", &record.app_name, NOT_SPECIFIED);
    doc.field_or(
        "Project Type",
        &title_or_blank(&project_types, &record.project_type),
        NOT_SPECIFIED,
    );
    doc.optional("Project Name", &record.project_name);
    doc.field_or("Description", &record.project_description, NOT_SPECIFIED);
    if is_filled(&record.project_type) {
        doc.line(format!(
            "**Complexity:** {} (recommended team: {})",
            record.complexity,
            record.complexity.team_size()
        ));
        if is_filled(&record.estimated_hours) {
            doc.line(format!(
                "**Estimated Effort:** {} hours",
                record.estimated_hours
            ));
        }
    }
    doc.optional("Target Audience", &record.target_audience);
    doc.optional(
        "Timeline",
        &title_or_blank(catalog::TIMELINES, &record.timeline),
    );
    doc.optional("Budget", &title_or_blank(catalog::BUDGETS, &record.budget));
    doc.bullet_block("Goals", &record.project_goals);
    doc.blank();
}

fn technical_specs(doc: &mut PromptDocument, record: &FormRecord) {
    doc.line("## TECHNICAL SPECIFICATIONS");
    doc.field_or(
        "Technology Stack",
        &title_or_blank(catalog::TECH_STACKS, &record.tech_stack),
        NOT_SPECIFIED,
    );
    doc.field_or(
        "Deployment Platform",
        &title_or_blank(catalog::DEPLOYMENTS, &record.deployment),
        NOT_SPECIFIED,
    );
    doc.optional("Custom Stack Details", &record.requirements);
    doc.optional("Performance Requirements", &record.performance);
    doc.bullet_block("Functional Requirements", &record.functional_requirements);
    doc.bullet_block(
        "Non-Functional Requirements",
        &record.non_functional_requirements,
    );
    doc.bullet_block("Constraints", &record.constraints);
    doc.bullet_block("Assumptions", &record.assumptions);
    doc.blank();
}

fn project_assets(doc: &mut PromptDocument, record: &FormRecord) {
    if record.assets().next().is_none() {
        return;
    }
    doc.line("## PROJECT ASSETS");
    let describe = |asset: &crate::domain::FileAsset| {
        format!("- {} ({})", asset.name, human_size(asset.size))
    };
    if !record.reference_files.is_empty() {
        doc.line("**Reference Files:**");
        for asset in &record.reference_files {
            doc.line(describe(asset));
        }
    }
    if !record.logo_files.is_empty() {
        doc.line("**Logo Files:**");
        for asset in &record.logo_files {
            doc.line(describe(asset));
        }
    }
    if let Some(background) = &record.background_file {
        doc.line(format!(
            "**Background Image:** {} ({})",
            background.name,
            human_size(background.size)
        ));
    }
    doc.blank();
}

fn topic_persona(doc: &mut PromptDocument, record: &FormRecord) {
    if !is_filled(&record.project_type) {
        return;
    }
    let project_types = catalog::project_type_entries();
    doc.line("## TOPIC PERSONA & DOMAIN EXPERTISE");
    doc.line(format!(
        "**Primary Domain:** {}",
        catalog::display_title(&project_types, &record.project_type)
    ));
    doc.blank();
    doc.line("**Domain-Specific Knowledge:**");
    doc.extend(boilerplate::domain_knowledge(&record.project_type));
    doc.blank();
}

fn design_vibe(doc: &mut PromptDocument, record: &FormRecord) {
    let schemes = catalog::color_scheme_entries();
    doc.line("## DESIGN & BRAND VIBE");
    doc.field_or(
        "Primary Style",
        &title_or_blank(catalog::DESIGN_STYLES, &record.design_style),
        NOT_SPECIFIED,
    );
    doc.field_or(
        "Color Scheme",
        &title_or_blank(&schemes, &record.color_scheme),
        NOT_SPECIFIED,
    );
    doc.field_or(
        "Typography",
        &title_or_blank(catalog::TYPOGRAPHY, &record.typography),
        NOT_SPECIFIED,
    );
    doc.field_or(
        "Animation Style",
        &title_or_blank(catalog::ANIMATION_STYLES, &record.animation_style),
        NOT_SPECIFIED,
    );
    doc.optional("Style Notes", &record.custom_style);
    doc.line(format!(
        "**Color Palette:** primary {}, secondary {}, accent {}",
        record.primary_color, record.secondary_color, record.accent_color
    ));
    let ux = &record.user_experience;
    doc.bullet_block("User Journey", &ux.user_journey);
    doc.bullet_block("Accessibility", &ux.accessibility);
    doc.bullet_block("Responsive Breakpoints", &ux.responsive_breakpoints);
    doc.bullet_block("Browser Support", &ux.browser_support);
    doc.blank();
}

fn content_strategy(doc: &mut PromptDocument, record: &FormRecord) {
    let strategy = &record.content_strategy;
    doc.line("## CONTENT STRATEGY & REQUIREMENTS");
    doc.blank();
    doc.field_or(
        "Tone",
        &title_or_blank(catalog::TONES, &strategy.tone),
        NOT_SELECTED,
    );
    doc.field_or(
        "Voice",
        &title_or_blank(catalog::VOICES, &strategy.voice),
        NOT_SELECTED,
    );
    doc.bullet_block("Key Messages", &strategy.messaging);
    if !strategy.seo_keywords.is_empty() {
        doc.line(format!("**SEO Keywords:** {}", strategy.seo_keywords.join(", ")));
    }
    if !strategy.content_types.is_empty() {
        let names: Vec<String> = strategy
            .content_types
            .iter()
            .map(|id| catalog::display_title(catalog::CONTENT_TYPES, id))
            .collect();
        doc.line(format!("**Content Types:** {}", names.join(", ")));
    }
    if !strategy.localization.is_empty() {
        doc.line(format!(
            "**Localization:** {}",
            strategy.localization.join(", ")
        ));
    }
    doc.blank();
    doc.extend(boilerplate::CONTENT_PRINCIPLES);
}

fn integrations(doc: &mut PromptDocument, record: &FormRecord) {
    doc.line("## INTEGRATIONS & SERVICES");
    if !record.integrations.any_enabled() {
        doc.line("No third-party integrations selected.");
        doc.blank();
        return;
    }
    for (category, group) in record.integrations.enabled() {
        doc.line(format!("**{}:**", capitalize(category.key())));
        for (key, value) in group.settings.fields() {
            if !value.is_empty() {
                doc.line(format!("- {}: {}", humanize_key(key), value));
            }
        }
        doc.blank();
    }
}

fn maintenance(doc: &mut PromptDocument, record: &FormRecord) {
    let plan = &record.maintenance;
    if plan.is_empty() {
        return;
    }
    doc.line("## MAINTENANCE & SUPPORT");
    doc.optional("Update Frequency", &plan.update_frequency);
    doc.optional("Support Level", &plan.support_level);
    doc.bullet_block("Documentation", &plan.documentation);
    doc.bullet_block("Monitoring", &plan.monitoring);
    doc.optional("Backup Strategy", &plan.backup_strategy);
    doc.blank();
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FileAsset, IntegrationCategory};

    fn section<'a>(text: &'a str, heading: &str) -> &'a str {
        let start = text.find(heading).expect("section present");
        let rest = &text[start + heading.len()..];
        let end = rest.find("\n## ").unwrap_or(rest.len());
        &rest[..end]
    }

    #[test]
    fn assembly_is_deterministic() {
        let mut record = FormRecord::default();
        record.name = "Jane".into();
        assert_eq!(assemble(&record), assemble(&record));
    }

    #[test]
    fn humanize_key_splits_camel_case() {
        assert_eq!(humanize_key("apiKey"), "Api Key");
        assert_eq!(humanize_key("fromEmail"), "From Email");
        assert_eq!(humanize_key("currency"), "Currency");
    }

    #[test]
    fn empty_record_uses_placeholders_and_omits_optional_lines() {
        let text = assemble(&FormRecord::default());
        assert!(text.starts_with("# AI PROMPT ARCHITECT SPECIFICATION\n\n## AUTHOR PROFILE"));
        assert!(text.contains("**Name:** Not specified"));
        assert!(!text.contains("**Phone:**"));
        assert!(!text.contains("## TOPIC PERSONA"));
        assert!(!text.contains("## PROJECT ASSETS"));
        assert!(!text.contains("## MAINTENANCE & SUPPORT"));
        assert!(!text.contains("**Complexity:**"));
        assert!(text.contains("**Color Palette:** primary #3b82f6, secondary #8b5cf6, accent #06b6d4"));
    }

    #[test]
    fn unselected_tone_is_marked_not_selected() {
        let text = assemble(&FormRecord::default());
        let content = section(&text, "## CONTENT STRATEGY & REQUIREMENTS");
        assert!(content.contains("**Tone:** Not selected"));
        assert!(content.contains("**Voice:** Not selected"));

        let mut record = FormRecord::default();
        record.content_strategy.tone = "friendly".into();
        let text = assemble(&record);
        assert!(text.contains("**Tone:** Friendly"));
    }

    #[test]
    fn disabled_integrations_never_render() {
        let mut record = FormRecord::default();
        let text = assemble(&record);
        assert!(text.contains("No third-party integrations selected."));

        record.integrations.group_mut(IntegrationCategory::Email).enabled = true;
        let text = assemble(&record);
        assert!(text.contains("**Email:**\n\n## IMPLEMENTATION GUIDELINES"));
        let integrations = section(&text, "## INTEGRATIONS & SERVICES");
        assert!(!integrations.contains("- Provider"));
        assert!(!integrations.contains("**Payment:**"));
        assert!(!integrations.contains("No third-party integrations selected."));
    }

    #[test]
    fn enabled_integration_lists_non_empty_fields() {
        let mut record = FormRecord::default();
        let group = record.integrations.group_mut(IntegrationCategory::Payment);
        group.enabled = true;
        if let Some(stripe) = group
            .settings
            .providers_mut()
            .and_then(|providers| providers.get_mut("stripe"))
        {
            stripe.enabled = true;
        }
        let text = assemble(&record);
        assert!(text.contains("**Payment:**\n- Providers: Stripe\n- Currency: USD\n"));
    }

    #[test]
    fn project_type_adds_domain_and_estimates() {
        let mut record = FormRecord::default();
        record.project_type = "ecommerce".into();
        record.estimated_hours = "400-1000".into();
        let text = assemble(&record);
        assert!(text.contains("**Project Type:** E-commerce Store"));
        assert!(text.contains("**Estimated Effort:** 400-1000 hours"));
        assert!(text.contains("- Product catalog management and merchandising"));

        record.project_type = "dashboard".into();
        let text = assemble(&record);
        assert!(text.contains("- Industry-specific best practices and standards"));
    }

    #[test]
    fn assets_and_custom_instructions_render() {
        let mut record = FormRecord::default();
        record.logo_files.push(FileAsset::new("logo.svg", 2048));
        record.custom_instructions = "Use British spelling.".into();
        let text = assemble(&record);
        assert!(text.contains("## PROJECT ASSETS\n**Logo Files:**\n- logo.svg (2.0 KB)"));
        assert!(text.ends_with("**Additional Instructions:**\nUse British spelling."));
    }
}
