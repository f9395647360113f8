use std::fmt;

pub const TOTAL_STEPS: usize = 8;

/// The wizard pages in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    AuthorInfo,
    Foundation,
    TechSpecs,
    Assets,
    DesignUx,
    ContentStrategy,
    Integrations,
    FinalPrompt,
}

impl WizardStep {
    pub const ALL: [WizardStep; TOTAL_STEPS] = [
        WizardStep::AuthorInfo,
        WizardStep::Foundation,
        WizardStep::TechSpecs,
        WizardStep::Assets,
        WizardStep::DesignUx,
        WizardStep::ContentStrategy,
        WizardStep::Integrations,
        WizardStep::FinalPrompt,
    ];

    /// Maps a 1-based step index; out-of-range indices yield `None`.
    pub fn from_index(index: usize) -> Option<Self> {
        index
            .checked_sub(1)
            .and_then(|zero_based| Self::ALL.get(zero_based).copied())
    }

    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|step| *step == self)
            .map(|position| position + 1)
            .unwrap_or(1)
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::AuthorInfo => "Author Information",
            WizardStep::Foundation => "Project Foundation",
            WizardStep::TechSpecs => "Technical Specifications",
            WizardStep::Assets => "Project Assets",
            WizardStep::DesignUx => "Design & User Experience",
            WizardStep::ContentStrategy => "Content Strategy",
            WizardStep::Integrations => "Integrations & Services",
            WizardStep::FinalPrompt => "Your AI Prompt",
        }
    }

    pub fn is_final(self) -> bool {
        self == WizardStep::FinalPrompt
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Bounded 1-based step counter. The position is never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationController {
    current: usize,
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationController {
    pub fn new() -> Self {
        Self { current: 1 }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn step(&self) -> WizardStep {
        WizardStep::from_index(self.current).unwrap_or(WizardStep::AuthorInfo)
    }

    /// Moves forward one step; a no-op on the last step.
    pub fn advance(&mut self) -> bool {
        if self.current < TOTAL_STEPS {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Moves back one step; a no-op on the first step.
    pub fn retreat(&mut self) -> bool {
        if self.current > 1 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.current = 1;
    }

    pub fn progress_percent(&self) -> u8 {
        ((self.current as f64 / TOTAL_STEPS as f64) * 100.0).round() as u8
    }

    pub fn progress_label(&self) -> String {
        format!(
            "Step {} of {} ({}% Complete)",
            self.current,
            TOTAL_STEPS,
            self.progress_percent()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_step() {
        let nav = NavigationController::new();
        assert_eq!(nav.current(), 1);
        assert_eq!(nav.step(), WizardStep::AuthorInfo);
    }

    #[test]
    fn retreat_on_first_step_is_noop() {
        let mut nav = NavigationController::new();
        assert!(!nav.retreat());
        assert_eq!(nav.current(), 1);
    }

    #[test]
    fn advance_stops_at_last_step() {
        let mut nav = NavigationController::new();
        for _ in 0..TOTAL_STEPS + 3 {
            nav.advance();
        }
        assert_eq!(nav.current(), TOTAL_STEPS);
        assert_eq!(nav.step(), WizardStep::FinalPrompt);
        assert!(!nav.advance());
    }

    #[test]
    fn reset_returns_to_start() {
        let mut nav = NavigationController::new();
        nav.advance();
        nav.advance();
        nav.reset();
        assert_eq!(nav.current(), 1);
    }

    #[test]
    fn progress_rounds_to_whole_percent() {
        let mut nav = NavigationController::new();
        assert_eq!(nav.progress_percent(), 13);
        nav.advance();
        nav.advance();
        assert_eq!(nav.progress_percent(), 38);
        assert_eq!(nav.progress_label(), "Step 3 of 8 (38% Complete)");
    }

    #[test]
    fn step_indices_round_trip() {
        for (offset, step) in WizardStep::ALL.iter().enumerate() {
            assert_eq!(step.index(), offset + 1);
            assert_eq!(WizardStep::from_index(offset + 1), Some(*step));
        }
        assert_eq!(WizardStep::from_index(0), None);
        assert_eq!(WizardStep::from_index(9), None);
    }
}
