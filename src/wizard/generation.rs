//! Timed state for the final step: the artificial generation delay and the
//! "copied" indicator.
//!
//! Both types take the current instant as an argument so the UI loop drives
//! them and tests can step time explicitly.

use std::time::{Duration, Instant};

use crate::{domain::FormRecord, prompt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationStatus {
    Idle,
    Generating { remaining: Duration },
    Ready(String),
}

#[derive(Debug, Clone, Copy)]
struct PendingRequest {
    revision: u64,
    started: Instant,
}

/// Delays prompt assembly after each record change. A request for a newer
/// revision replaces the pending one, so stale requests never produce text.
#[derive(Debug, Clone)]
pub struct PromptGeneration {
    delay: Duration,
    pending: Option<PendingRequest>,
    ready: Option<(u64, String)>,
}

impl PromptGeneration {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            ready: None,
        }
    }

    /// Starts (or restarts) the delay for `revision`. Requesting a revision that
    /// is already pending or ready keeps the existing state.
    pub fn request(&mut self, revision: u64, now: Instant) {
        let already_ready = matches!(&self.ready, Some((ready, _)) if *ready == revision);
        let already_pending = matches!(self.pending, Some(pending) if pending.revision == revision);
        if already_ready || already_pending {
            return;
        }
        tracing::debug!(revision, "Prompt generation requested");
        self.pending = Some(PendingRequest {
            revision,
            started: now,
        });
        self.ready = None;
    }

    /// Restarts the delay for `revision` even when its text is already ready.
    pub fn regenerate(&mut self, revision: u64, now: Instant) {
        tracing::debug!(revision, "Prompt regeneration requested");
        self.pending = Some(PendingRequest {
            revision,
            started: now,
        });
        self.ready = None;
    }

    /// Reports progress for `revision`. Output is only produced once the delay
    /// has elapsed for the latest requested revision.
    pub fn poll(&mut self, record: &FormRecord, revision: u64, now: Instant) -> GenerationStatus {
        if let Some((ready_revision, text)) = &self.ready {
            if *ready_revision == revision {
                return GenerationStatus::Ready(text.clone());
            }
        }
        let Some(pending) = self.pending else {
            return GenerationStatus::Idle;
        };
        if pending.revision != revision {
            return GenerationStatus::Idle;
        }
        let elapsed = now.saturating_duration_since(pending.started);
        if elapsed < self.delay {
            return GenerationStatus::Generating {
                remaining: self.delay - elapsed,
            };
        }
        let text = prompt::assemble(record);
        self.pending = None;
        self.ready = Some((revision, text.clone()));
        GenerationStatus::Ready(text)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
        self.ready = None;
    }
}

/// Lit for a fixed window after a successful clipboard copy.
#[derive(Debug, Clone)]
pub struct CopiedIndicator {
    window: Duration,
    copied_at: Option<Instant>,
}

impl CopiedIndicator {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            copied_at: None,
        }
    }

    pub fn mark(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < self.window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(1500);

    #[test]
    fn output_waits_for_delay() {
        let record = FormRecord::default();
        let start = Instant::now();
        let mut generation = PromptGeneration::new(DELAY);
        assert_eq!(generation.poll(&record, 1, start), GenerationStatus::Idle);

        generation.request(1, start);
        let halfway = start + Duration::from_millis(500);
        assert_eq!(
            generation.poll(&record, 1, halfway),
            GenerationStatus::Generating {
                remaining: Duration::from_millis(1000)
            }
        );
        match generation.poll(&record, 1, start + DELAY) {
            GenerationStatus::Ready(text) => assert_eq!(text, prompt::assemble(&record)),
            other => panic!("expected ready, got {:?}", other),
        }
    }

    #[test]
    fn newer_revision_supersedes_pending_request() {
        let record = FormRecord::default();
        let start = Instant::now();
        let mut generation = PromptGeneration::new(DELAY);
        generation.request(1, start);
        let later = start + Duration::from_millis(1000);
        generation.request(2, later);

        let after_first_deadline = start + DELAY;
        assert_eq!(
            generation.poll(&record, 1, after_first_deadline),
            GenerationStatus::Idle
        );
        assert!(matches!(
            generation.poll(&record, 2, after_first_deadline),
            GenerationStatus::Generating { .. }
        ));
        assert!(matches!(
            generation.poll(&record, 2, later + DELAY),
            GenerationStatus::Ready(_)
        ));
    }

    #[test]
    fn repeated_request_does_not_restart_delay() {
        let record = FormRecord::default();
        let start = Instant::now();
        let mut generation = PromptGeneration::new(DELAY);
        generation.request(3, start);
        generation.request(3, start + Duration::from_millis(1400));
        assert!(matches!(
            generation.poll(&record, 3, start + DELAY),
            GenerationStatus::Ready(_)
        ));
    }

    #[test]
    fn regenerate_restarts_a_ready_revision() {
        let record = FormRecord::default();
        let start = Instant::now();
        let mut generation = PromptGeneration::new(DELAY);
        generation.request(4, start);
        assert!(matches!(
            generation.poll(&record, 4, start + DELAY),
            GenerationStatus::Ready(_)
        ));

        let again = start + Duration::from_secs(5);
        generation.request(4, again);
        assert!(matches!(
            generation.poll(&record, 4, again),
            GenerationStatus::Ready(_)
        ));

        generation.regenerate(4, again);
        assert_eq!(
            generation.poll(&record, 4, again),
            GenerationStatus::Generating { remaining: DELAY }
        );
        assert!(matches!(
            generation.poll(&record, 4, again + DELAY),
            GenerationStatus::Ready(_)
        ));
    }

    #[test]
    fn copied_indicator_expires() {
        let start = Instant::now();
        let mut indicator = CopiedIndicator::new(Duration::from_secs(2));
        assert!(!indicator.is_active(start));
        indicator.mark(start);
        assert!(indicator.is_active(start + Duration::from_millis(1999)));
        assert!(!indicator.is_active(start + Duration::from_secs(2)));
    }
}
