#![doc(test(attr(deny(warnings))))]

//! Prompt Architect walks a user through an eight-step questionnaire about a
//! software project and assembles the answers into one structured prompt for
//! an AI coding assistant.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod prompt;
pub mod storage;
pub mod utils;
pub mod wizard;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Prompt Architect tracing initialized.");
    });
}
