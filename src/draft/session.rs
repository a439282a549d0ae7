//! Live-typing session.
//!
//! Tracks what the user has typed, the disguise currently shown for it, and
//! a single pending commit. Time is passed in explicitly so the session has
//! no timers of its own; the caller polls it from whatever event loop it
//! runs.

use crate::config::DraftConfig;
use crate::core::{Transformation, Transformer};
use crate::draft::policy::CommitPolicy;
use crate::store::{HistoryStore, KeyValueStore};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};
use tracing::debug;

/// Caller-side state between keystrokes and the history store.
///
/// Every [`edit`](DraftSession::edit) replaces the pending commit, so only
/// the last edit before a quiet period can reach history.
///
/// # Example
///
/// ```rust
/// use namecloak::config::DraftConfig;
/// use namecloak::draft::DraftSession;
/// use namecloak::store::{HistoryStore, MemoryStore};
/// use std::time::{Duration, Instant};
///
/// let mut store = HistoryStore::open(MemoryStore::new());
/// let mut session = DraftSession::new(&DraftConfig::default());
///
/// let start = Instant::now();
/// session.edit("Ada", start);
/// session.edit("Ada Lovelace", start + Duration::from_millis(300));
///
/// // Too early: the second edit restarted the debounce.
/// assert!(!session.poll(start + Duration::from_millis(900), &mut store));
/// assert!(session.poll(start + Duration::from_millis(1100), &mut store));
/// assert_eq!(store.history()[0].original, "Ada Lovelace");
/// ```
pub struct DraftSession<'t> {
    transformer: Transformer<'t>,
    policy: CommitPolicy,
    debounce: Duration,
    rng: StdRng,
    input: String,
    variant_index: usize,
    current: Option<Transformation>,
    pending_commit: Option<Instant>,
}

impl DraftSession<'static> {
    /// Session over the built-in glyph table with name heuristics.
    pub fn new(config: &DraftConfig) -> Self {
        Self::with_parts(
            Transformer::standard(),
            CommitPolicy::for_names(config.min_length),
            config.debounce(),
        )
    }
}

impl<'t> DraftSession<'t> {
    pub fn with_parts(transformer: Transformer<'t>, policy: CommitPolicy, debounce: Duration) -> Self {
        Self {
            transformer,
            policy,
            debounce,
            rng: StdRng::from_os_rng(),
            input: String::new(),
            variant_index: 0,
            current: None,
            pending_commit: None,
        }
    }

    /// Use a fixed seed for glyph choices.
    pub fn seeded(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn variant_index(&self) -> usize {
        self.variant_index
    }

    /// The transformation shown for the current input.
    pub fn current(&self) -> Option<&Transformation> {
        self.current.as_ref()
    }

    /// Disguised text for display; empty when there is no input.
    pub fn transformed_text(&self) -> &str {
        self.current
            .as_ref()
            .map(|t| t.transformed.as_str())
            .unwrap_or("")
    }

    /// When the pending commit becomes due, if one is scheduled.
    pub fn pending_deadline(&self) -> Option<Instant> {
        self.pending_commit
    }

    /// Replace the input, re-disguise it and restart the debounce.
    ///
    /// Clearing the input drops both the current transformation and any
    /// pending commit.
    pub fn edit(&mut self, text: impl Into<String>, now: Instant) {
        self.input = text.into();
        if self.input.is_empty() {
            self.current = None;
            self.pending_commit = None;
            return;
        }
        self.current = Some(self.fresh_transformation());
        self.pending_commit = Some(now + self.debounce);
    }

    /// Commit the current transformation if the debounce has elapsed.
    ///
    /// A due commit is consumed whether or not the policy accepts the input.
    /// Returns whether a new entry reached history.
    pub fn poll<B: KeyValueStore>(&mut self, now: Instant, store: &mut HistoryStore<B>) -> bool {
        match self.pending_commit {
            Some(deadline) if deadline <= now => self.pending_commit = None,
            _ => return false,
        }

        if !self.policy.is_commit_candidate(&self.input) {
            debug!(input = %self.input, "draft not ready, skipping commit");
            return false;
        }
        match &self.current {
            Some(current) => store.add_to_history(current.clone()),
            None => false,
        }
    }

    /// Drop the pending commit without committing.
    pub fn cancel_pending(&mut self) {
        self.pending_commit = None;
    }

    /// Cycle to the next variant set and record the result immediately.
    ///
    /// Bypasses the commit policy. Does nothing without input.
    pub fn transform_again<B: KeyValueStore>(
        &mut self,
        store: &mut HistoryStore<B>,
    ) -> Option<&Transformation> {
        if self.input.is_empty() {
            return None;
        }
        self.variant_index = self.variant_index.wrapping_add(1);
        let transformation = self.fresh_transformation();
        store.add_to_history(transformation.clone());
        self.current = Some(transformation);
        self.current.as_ref()
    }

    /// Toggle the current transformation's favorite status.
    ///
    /// Returns the new status, or `None` without a current transformation.
    pub fn toggle_current_favorite<B: KeyValueStore>(
        &self,
        store: &mut HistoryStore<B>,
    ) -> Option<bool> {
        self.current
            .as_ref()
            .map(|current| store.toggle_favorite(current))
    }

    pub fn is_current_favorite<B: KeyValueStore>(&self, store: &HistoryStore<B>) -> bool {
        self.current
            .as_ref()
            .is_some_and(|current| store.is_favorite(current))
    }

    fn fresh_transformation(&mut self) -> Transformation {
        let transformed =
            self.transformer
                .transform_with(&self.input, self.variant_index, &mut self.rng);
        Transformation::new(self.input.clone(), transformed)
    }
}
