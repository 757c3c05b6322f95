//! Debounced re-analysis driven by host edit events
//!
//! The host reports edits and polls with its own clock. Each edit pushes the
//! deadline out by the configured delay; when it passes, the next poll runs
//! one full pass. There is no cancellation.

use crate::analysis::{Analysis, AnalysisError, Analyzer};
use crate::config::compile_time::session::DEBOUNCE_DELAY_MS;
use crate::config::AnalyzerPreferences;
use std::time::{Duration, Instant};

/// Trailing-edge timer
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEBOUNCE_DELAY_MS))
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn notify_edit(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left before the pending deadline, zero once it has passed
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// True exactly once per deadline, when `now` has reached it
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

pub struct AnalysisSession {
    analyzer: Analyzer,
    debouncer: Debouncer,
    latest: Option<Analysis>,
    passes: u64,
}

impl AnalysisSession {
    pub fn new(analyzer: Analyzer, delay: Duration) -> Self {
        Self {
            analyzer,
            debouncer: Debouncer::new(delay),
            latest: None,
            passes: 0,
        }
    }

    pub fn with_preferences(analyzer: Analyzer, preferences: &AnalyzerPreferences) -> Self {
        Self::new(analyzer, preferences.debounce_delay())
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    pub fn on_edit(&mut self, now: Instant) {
        self.debouncer.notify_edit(now);
        crate::log_debug!("Edit recorded, analysis scheduled",
            "delay_ms" => self.debouncer.delay().as_millis()
        );
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Run a full pass if the debounce deadline has passed
    pub fn poll(&mut self, now: Instant, text: &str) -> Result<Option<&Analysis>, AnalysisError> {
        if !self.debouncer.take_due(now) {
            return Ok(None);
        }
        self.analyze_now(text).map(Some)
    }

    /// Explicit request, bypassing the timer
    pub fn analyze_now(&mut self, text: &str) -> Result<&Analysis, AnalysisError> {
        let analysis = self.analyzer.analyze(text)?;
        self.passes += 1;
        Ok(self.latest.insert(analysis))
    }

    pub fn latest(&self) -> Option<&Analysis> {
        self.latest.as_ref()
    }

    /// Number of completed passes
    pub fn passes(&self) -> u64 {
        self.passes
    }
}
