pub mod generation;
pub mod navigation;
pub mod session;
pub mod steps;

pub use generation::{CopiedIndicator, GenerationStatus, PromptGeneration};
pub use navigation::{NavigationController, WizardStep, TOTAL_STEPS};
pub use session::WizardSession;
