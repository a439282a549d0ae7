//! Caller-side commit policy for live typing.
//!
//! Deciding *when* a typed name goes into history is not the store's job.
//! This module models the caller: a [`DraftSession`] debounces edits and asks
//! a [`CommitPolicy`] whether the text looks like a finished name before
//! handing it to [`crate::store::HistoryStore`].
//!
//! # Example
//!
//! ```rust
//! use namecloak::draft::{CommitPolicy, CommitPolicyBuilder};
//!
//! let policy = CommitPolicyBuilder::new()
//!     .min_length(2)
//!     .name_heuristics()
//!     .require_pred(|text| !text.contains('@'), "not a name".to_string())
//!     .build();
//!
//! assert!(policy.is_commit_candidate("Bo Li"));
//! assert!(!policy.is_commit_candidate("bo@li.dev"));
//! ```

pub mod policy;
pub mod session;
pub mod violations;

pub use policy::{CommitPolicy, CommitPolicyBuilder, OPEN_NAME_PREFIXES};
pub use session::DraftSession;
pub use violations::CommitViolation;
