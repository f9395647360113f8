mod common;

use common::{complete_record, CliHarness};
use prompt_architect::domain::{FormRecord, IntegrationCategory};

/// Selects "Next" on the first step, which has no "Back" entry.
const NEXT_FROM_FIRST: &str = "END,UP,UP,UP,UP,ENTER";
/// Selects "Next" on steps 2 to 7.
const NEXT: &str = "END,UP,UP,UP,UP,UP,ENTER";
const QUIT: &str = "END,ENTER";

#[test]
fn author_answers_are_saved_between_runs() {
    let harness = CliHarness::new();
    let output = harness.run_wizard(
        &[
            "ENTER",
            "DOWN,ENTER",
            "DOWN,DOWN,DOWN,ENTER",
            NEXT_FROM_FIRST,
            "ESC",
            QUIT,
        ],
        &["Jane", "jane@x.com", "Acme"],
    );

    assert!(output.stdout.contains("Step 1 of 8 (13% Complete)"));
    assert!(output.stdout.contains("Step 2 of 8 (25% Complete)"));
    let saved = harness.saved();
    assert_eq!(saved.name, "Jane");
    assert_eq!(saved.email, "jane@x.com");
    assert_eq!(saved.app_name, "Acme");

    let rerun = harness.run_wizard(&[QUIT], &[]);
    assert!(rerun.stdout.contains("Restored your previous answers."));
}

#[test]
fn next_is_refused_until_required_fields_are_filled() {
    let harness = CliHarness::new();
    let output = harness.run_wizard(&[NEXT_FROM_FIRST, QUIT], &[]);
    assert!(output.stdout.contains(
        "Fill in the required fields first: Full Name, Email Address, Application Name"
    ));
    assert!(!output.stdout.contains("Step 2 of 8"));
}

#[test]
fn final_step_generates_copies_and_exports() {
    let harness = CliHarness::new();
    harness.seed(&complete_record());

    let mut menus = vec![NEXT_FROM_FIRST];
    menus.extend([NEXT; 6]);
    menus.extend(["DOWN,DOWN,DOWN,ENTER", "ENTER", "DOWN,ENTER", QUIT]);
    let output = harness.run_wizard(&menus, &["Use TypeScript\\nAdd tests"]);

    assert!(output.stdout.contains("Step 8 of 8 (100% Complete)"));
    assert!(output.stdout.contains("**Name:** Jane"));
    assert!(output
        .stdout
        .contains("**Additional Instructions:**\nUse TypeScript\nAdd tests"));
    assert!(output.stdout.contains("Prompt copied to the clipboard."));
    assert!(output.stdout.contains("Copied!"));

    let exported = std::fs::read_to_string(harness.exports().join("Acme-prompt.txt")).unwrap();
    assert!(exported.contains("Use TypeScript"));
    assert_eq!(harness.saved().custom_instructions, "Use TypeScript\nAdd tests");
}

#[test]
fn final_step_shows_summary_and_regenerates_on_request() {
    let harness = CliHarness::new();
    harness.seed(&complete_record());

    let mut menus = vec![NEXT_FROM_FIRST];
    menus.extend([NEXT; 6]);
    menus.extend(["DOWN,DOWN,ENTER", QUIT]);
    let output = harness.run_wizard(&menus, &[]);

    assert!(output.stdout.contains("Project Summary"));
    assert!(output.stdout.contains("Project Type: Web Application"));
    assert!(output.stdout.contains("Tech Stack: React + Node.js"));
    assert!(output.stdout.contains("Integrations: 0 enabled"));
    assert_eq!(
        output
            .stdout
            .matches("# AI PROMPT ARCHITECT SPECIFICATION")
            .count(),
        2
    );
}

#[test]
fn payment_provider_can_be_enabled_and_configured() {
    let harness = CliHarness::new();
    harness.seed(&complete_record());

    let mut menus = vec![NEXT_FROM_FIRST];
    menus.extend([NEXT; 5]);
    menus.extend([
        // Payment group on the integrations step
        "DOWN,DOWN,ENTER",
        // enable the group, then Stripe, then open its settings
        "ENTER",
        "DOWN,DOWN,ENTER",
        "DOWN,DOWN,DOWN,ENTER",
        // publishable key
        "ENTER",
        "ESC",
        "ESC",
        QUIT,
    ]);
    harness.run_wizard(&menus, &["pk_test_123"]);

    let saved = harness.saved();
    let group = saved.integrations.group(IntegrationCategory::Payment);
    assert!(group.enabled);
    let stripe = group
        .settings
        .providers()
        .and_then(|providers| providers.get("stripe"))
        .expect("stripe entry");
    assert!(stripe.enabled);
    assert_eq!(stripe.credential("publishableKey"), "pk_test_123");

    let prompt = harness.command().arg("prompt").output().unwrap();
    let text = String::from_utf8_lossy(&prompt.stdout);
    assert!(text.contains("**Payment:**"));
    assert!(text.contains("- Providers: Stripe"));
    assert!(text.contains("- Currency: USD"));
}

#[test]
fn start_over_clears_everything_after_confirmation() {
    let harness = CliHarness::new();
    harness.seed(&complete_record());

    // Cancel first, then confirm.
    harness.run_wizard(&["END,UP,ENTER", "ENTER", "END,UP,ENTER", "DOWN,ENTER", QUIT], &[]);

    assert_eq!(harness.saved(), FormRecord::default());
}
