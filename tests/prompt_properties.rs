use prompt_architect::{
    domain::{ContentStrategy, FieldUpdate, FormRecord, IntegrationCategory},
    prompt,
    storage::{FormStore, KeyValueStore, MemoryStore, STORAGE_KEY},
    wizard::{
        steps::{self, design, foundation, integrations, lists},
        NavigationController, WizardSession, WizardStep, TOTAL_STEPS,
    },
};
use std::sync::Arc;

fn section<'a>(text: &'a str, heading: &str) -> &'a str {
    let start = text.find(heading).expect("heading present");
    let rest = &text[start + heading.len()..];
    let end = rest.find("\n## ").unwrap_or(rest.len());
    &rest[..end]
}

#[test]
fn assembly_is_deterministic() {
    let mut record = FormRecord::default();
    record.apply([
        FieldUpdate::Name("Jane".into()),
        FieldUpdate::ProjectGoals(vec!["Launch".into(), "Grow".into()]),
    ]);
    assert_eq!(prompt::assemble(&record), prompt::assemble(&record));
}

#[test]
fn partial_import_keeps_other_defaults() {
    let record = FormRecord::from_json(r#"{"appName":"X"}"#).unwrap();
    let expected = FormRecord {
        app_name: "X".into(),
        ..FormRecord::default()
    };
    assert_eq!(record, expected);
}

#[test]
fn navigation_stays_within_bounds() {
    let mut navigation = NavigationController::new();
    assert!(!navigation.retreat());
    for _ in 0..TOTAL_STEPS + 3 {
        navigation.advance();
    }
    assert_eq!(navigation.current(), TOTAL_STEPS);
    assert_eq!(navigation.step(), WizardStep::FinalPrompt);
    assert_eq!(navigation.progress_label(), "Step 8 of 8 (100% Complete)");
}

#[test]
fn advance_then_retreat_returns_to_the_same_step() {
    let mut navigation = NavigationController::new();
    for _ in 1..4 {
        navigation.advance();
    }
    assert_eq!(navigation.current(), 4);

    for step in 2..TOTAL_STEPS {
        while navigation.current() < step {
            navigation.advance();
        }
        while navigation.current() > step {
            navigation.retreat();
        }
        assert!(navigation.advance());
        assert!(navigation.retreat());
        assert_eq!(navigation.current(), step);
    }
}

#[test]
fn single_goal_added_then_removed_leaves_empty_list() {
    let goals = lists::append_item(&[], "Ship MVP");
    assert_eq!(goals, vec!["Ship MVP"]);
    assert!(lists::remove_at(&goals, 0).is_empty());
}

#[test]
fn list_items_append_trimmed_and_remove_by_index() {
    let list = lists::append_item(&[], "  First  ");
    let list = lists::append_item(&list, "   ");
    let list = lists::append_item(&list, "Second");
    assert_eq!(list, vec!["First", "Second"]);
    assert_eq!(lists::remove_at(&list, 0), vec!["Second"]);
    assert_eq!(lists::remove_at(&list, 7), list);
}

#[test]
fn empty_tone_and_voice_render_not_selected() {
    let text = prompt::assemble(&FormRecord::default());
    let content = section(&text, "## CONTENT STRATEGY & REQUIREMENTS");
    assert!(content.contains("**Tone:** Not selected"));
    assert!(content.contains("**Voice:** Not selected"));
}

#[test]
fn only_enabled_integrations_are_rendered() {
    let mut record = FormRecord::default();
    record.apply(integrations::toggle_group(&record, IntegrationCategory::Email));
    record.apply(integrations::set_setting(
        &record,
        IntegrationCategory::Payment,
        "currency",
        "EUR".into(),
    ));

    let text = prompt::assemble(&record);
    let section = section(&text, "## INTEGRATIONS & SERVICES");
    assert!(section.contains("**Email:**"));
    assert!(!section.contains("- Provider:"));
    assert!(!section.contains("**Payment:**"));
    assert!(!section.contains("EUR"));
}

#[test]
fn reset_restores_defaults_and_drops_stored_entry() {
    let backend = Arc::new(MemoryStore::new());
    let mut session = WizardSession::open(
        FormStore::new(Box::new(Arc::clone(&backend))),
        &Default::default(),
    );
    session.update(vec![FieldUpdate::AppName("Acme".into())]);
    assert!(backend.get(STORAGE_KEY).unwrap().is_some());

    session.reset();
    assert_eq!(session.record(), &FormRecord::default());
    assert_eq!(backend.get(STORAGE_KEY).unwrap(), None);
}

#[test]
fn end_to_end_answers_reach_the_prompt() {
    let mut session = WizardSession::open(FormStore::in_memory(), &Default::default());
    let author = steps::fields(WizardStep::AuthorInfo);
    for (key, value) in [("name", "Jane"), ("email", "jane@x.com"), ("appName", "Acme")] {
        let field = author.iter().find(|field| field.key == key).unwrap();
        let steps::Control::Text { write, .. } = field.control else {
            panic!("{key} should be a text field");
        };
        let updates = write(session.record(), value.to_string());
        session.update(updates);
    }
    assert!(session.advance());

    let mut updates = foundation::select_project_type(session.record(), "web-app");
    updates.push(FieldUpdate::ProjectDescription("Online storefront".into()));
    updates.push(FieldUpdate::TargetAudience("Small shops".into()));
    session.update(updates);
    assert!(session.advance());

    session.update(vec![FieldUpdate::TechStack("react-node".into())]);
    assert!(session.advance());
    assert!(session.advance());

    let mut updates = design::select_color_scheme(session.record(), "blue-purple");
    updates.push(FieldUpdate::DesignStyle("modern".into()));
    session.update(updates);
    assert!(session.advance());

    session.update(vec![FieldUpdate::ContentStrategy(ContentStrategy {
        tone: "professional".into(),
        voice: "educational".into(),
        ..ContentStrategy::default()
    })]);
    assert!(session.advance());
    assert!(session.advance());
    assert_eq!(session.step(), WizardStep::FinalPrompt);
    assert!(!session.advance());

    let text = session.prompt_text();
    assert!(text.contains("**Name:** Jane"));
    let overview = section(&text, "## PROJECT OVERVIEW");
    assert!(overview.contains("**Application Name:** Acme"));
    assert!(overview.contains("**Project Type:** Web Application"));
}
