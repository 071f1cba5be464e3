//! Lifecycle error taxonomy
//!
//! Failures are a closed set of kinds rather than an open class
//! hierarchy, so callers can match exhaustively on
//! [`LifecycleErrorKind`]. Every error carries the stack it belongs to
//! and the source location where it was raised.

use std::fmt;
use std::panic::Location;
use thiserror::Error;

/// Classification of a lifecycle failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleErrorKind {
    /// Precondition violation or provider rejection during create.
    CreationFailure,
    /// Precondition violation or provider rejection during delete.
    DeletionFailure,
    /// The stack was absent where an operation required it to exist.
    NotFound,
    /// The describe path itself failed for a non-absence reason.
    StatusRetrievalFailure,
}

impl fmt::Display for LifecycleErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LifecycleErrorKind::CreationFailure => "failed to create stack",
            LifecycleErrorKind::DeletionFailure => "failed to delete stack",
            LifecycleErrorKind::NotFound => "failed to find stack",
            LifecycleErrorKind::StatusRetrievalFailure => "failed to retrieve stack status",
        };
        f.write_str(label)
    }
}

/// Source location where a failure was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Provenance {
    file: &'static str,
    line: u32,
}

impl Provenance {
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
        }
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// A typed lifecycle failure tied to one stack.
///
/// Immutable once constructed. The constructors are `#[track_caller]`,
/// so the provenance points at the raise site, not at this module.
#[derive(Debug, Clone, Error)]
#[error("{kind} `{stack_name}`: {message} (raised at {provenance})")]
pub struct LifecycleError {
    kind: LifecycleErrorKind,
    stack_name: String,
    message: String,
    provenance: Provenance,
}

impl LifecycleError {
    #[track_caller]
    pub fn creation(stack_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(LifecycleErrorKind::CreationFailure, stack_name, message)
    }

    #[track_caller]
    pub fn deletion(stack_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(LifecycleErrorKind::DeletionFailure, stack_name, message)
    }

    #[track_caller]
    pub fn not_found(stack_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(LifecycleErrorKind::NotFound, stack_name, message)
    }

    #[track_caller]
    pub fn status_retrieval(stack_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(LifecycleErrorKind::StatusRetrievalFailure, stack_name, message)
    }

    #[track_caller]
    fn new(
        kind: LifecycleErrorKind,
        stack_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            stack_name: stack_name.into(),
            message: message.into(),
            provenance: Provenance::caller(),
        }
    }

    pub fn kind(&self) -> LifecycleErrorKind {
        self.kind
    }

    pub fn stack_name(&self) -> &str {
        &self.stack_name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }
}

pub type Result<T> = std::result::Result<T, LifecycleError>;

/// Append-only failure history for one orchestrator instance.
///
/// Entries are kept in raise order and never pruned. Not synchronized;
/// the collection is owned by its orchestrator and shares its `&mut`
/// discipline.
#[derive(Debug, Default)]
pub struct ErrorCollection {
    errors: Vec<LifecycleError>,
}

impl ErrorCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, error: LifecycleError) {
        self.errors.push(error);
    }

    /// Read-only snapshot, in raise order.
    pub fn snapshot(&self) -> &[LifecycleError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}
