//! Commit policy for live-typed drafts using Validation.
//!
//! The policy decides whether text typed so far "looks complete" enough to
//! land in history once typing pauses. Checks run with Stillwater's
//! `Validation` so every reason a draft is rejected is reported at once.

use crate::draft::violations::CommitViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use unicode_segmentation::UnicodeSegmentation;

/// Endings that usually mean a surname is still being typed
pub const OPEN_NAME_PREFIXES: [&str; 5] = ["Mc", "Mac", "Van", "De", "Le"];

/// Type alias for validation check functions
pub type CommitCheck =
    Box<dyn Fn(&str) -> Validation<(), NonEmptyVec<CommitViolation>> + Send + Sync>;

/// Rules deciding whether a draft may be committed to history.
///
/// # Example
///
/// ```rust
/// use namecloak::draft::CommitPolicy;
///
/// let policy = CommitPolicy::default();
/// assert!(policy.is_commit_candidate("Ada Lovelace"));
/// assert!(!policy.is_commit_candidate("Ada "));
/// assert!(!policy.is_commit_candidate("Ronald Mc"));
/// assert!(!policy.is_commit_candidate("Mary-"));
/// ```
pub struct CommitPolicy {
    pub(crate) min_length: Option<usize>,
    pub(crate) name_heuristics: bool,
    pub(crate) required_checks: Vec<CommitCheck>,
}

impl Default for CommitPolicy {
    /// Name heuristics with a three character minimum.
    fn default() -> Self {
        Self::for_names(3)
    }
}

impl CommitPolicy {
    /// Name heuristics with the given minimum length.
    pub fn for_names(min_length: usize) -> Self {
        CommitPolicyBuilder::new()
            .min_length(min_length)
            .name_heuristics()
            .build()
    }

    /// Policy that accepts any input.
    pub fn accept_all() -> Self {
        CommitPolicyBuilder::new().build()
    }

    /// Run every check, accumulating ALL violations.
    pub fn evaluate(&self, text: &str) -> Validation<(), NonEmptyVec<CommitViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<CommitViolation>>> = Vec::new();

        if let Some(min) = self.min_length {
            let length = text.graphemes(true).count();
            checks.push(if length < min {
                Validation::fail(CommitViolation::TooShort { length, min })
            } else {
                Validation::success(())
            });
        }

        if self.name_heuristics {
            checks.extend(name_checks(text));
        }

        for check_fn in &self.required_checks {
            checks.push(check_fn(text));
        }

        if checks.is_empty() {
            return Validation::success(());
        }
        Validation::all_vec(checks).map(|_| ())
    }

    /// Whether `text` passes every check.
    pub fn is_commit_candidate(&self, text: &str) -> bool {
        self.evaluate(text).is_success()
    }
}

fn name_checks(text: &str) -> Vec<Validation<(), NonEmptyVec<CommitViolation>>> {
    let mut checks = Vec::new();

    checks.push(if text.ends_with(' ') {
        Validation::fail(CommitViolation::TrailingSpace)
    } else {
        Validation::success(())
    });

    checks.push(if text.ends_with('-') {
        Validation::fail(CommitViolation::TrailingHyphen)
    } else {
        Validation::success(())
    });

    let words: Vec<&str> = text.split(' ').filter(|word| !word.is_empty()).collect();
    let Some(last_word) = words.last() else {
        checks.push(Validation::fail(CommitViolation::Blank));
        return checks;
    };

    if let Some(prefix) = OPEN_NAME_PREFIXES
        .iter()
        .copied()
        .find(|prefix| last_word.ends_with(prefix))
    {
        checks.push(Validation::fail(CommitViolation::OpenNamePrefix { prefix }));
    }

    // A lone initial counts only as the whole input and only with a period.
    let length = last_word.graphemes(true).count();
    let initial_ok = words.len() == 1 && length == 1 && text.ends_with('.');
    if length < 2 && !initial_ok {
        checks.push(Validation::fail(CommitViolation::ShortLastWord { length }));
    }

    checks
}

/// Builder for commit policies
pub struct CommitPolicyBuilder {
    min_length: Option<usize>,
    name_heuristics: bool,
    required_checks: Vec<CommitCheck>,
}

impl CommitPolicyBuilder {
    pub fn new() -> Self {
        Self {
            min_length: None,
            name_heuristics: false,
            required_checks: Vec::new(),
        }
    }

    /// Require at least `n` characters, counted as grapheme clusters
    pub fn min_length(mut self, n: usize) -> Self {
        self.min_length = Some(n);
        self
    }

    /// Enable the trailing-space, hyphen, surname-prefix and last-word checks
    pub fn name_heuristics(mut self) -> Self {
        self.name_heuristics = true;
        self
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&str) -> Validation<(), NonEmptyVec<CommitViolation>> + Send + Sync + 'static,
    {
        self.required_checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        let check = move |text: &str| {
            if predicate(text) {
                Validation::success(())
            } else {
                Validation::fail(CommitViolation::CustomCheckFailed {
                    message: error_msg.clone(),
                })
            }
        };
        self.required_checks.push(Box::new(check));
        self
    }

    /// Build the commit policy
    pub fn build(self) -> CommitPolicy {
        CommitPolicy {
            min_length: self.min_length,
            name_heuristics: self.name_heuristics,
            required_checks: self.required_checks,
        }
    }
}

impl Default for CommitPolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
