//! FetchOutcome value object
//! Result of a telemetry fetch after the degraded-render policy is applied

use crate::domain::DomainError;

/// A fetch either produced a full collection or is unavailable.
///
/// Unavailability is carried as a value, never propagated as an error, so the
/// dashboard always renders with whatever collections it has.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Fetched(Vec<T>),
    Unavailable(DomainError),
}

impl<T> FetchOutcome<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, FetchOutcome::Fetched(_))
    }

    /// The fetched collection, or `None` when unavailable
    pub fn into_collection(self) -> Option<Vec<T>> {
        match self {
            FetchOutcome::Fetched(items) => Some(items),
            FetchOutcome::Unavailable(_) => None,
        }
    }

    pub fn error(&self) -> Option<&DomainError> {
        match self {
            FetchOutcome::Fetched(_) => None,
            FetchOutcome::Unavailable(e) => Some(e),
        }
    }
}

impl<T> From<Result<Vec<T>, DomainError>> for FetchOutcome<T> {
    fn from(result: Result<Vec<T>, DomainError>) -> Self {
        match result {
            Ok(items) => FetchOutcome::Fetched(items),
            Err(e) => FetchOutcome::Unavailable(e),
        }
    }
}
