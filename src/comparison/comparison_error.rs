use thiserror::Error;

/// Error type for failed comparisons.
///
/// Cancellation is the only failure mode: the inputs are plain string slices
/// and the complexity-guard fallback is a documented degradation, not an
/// error. A cancelled comparison never returns a partial fragment list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComparisonError {
    /// The caller's `Cancellation` fired while the comparison was running.
    #[error("the comparison was cancelled before it completed")]
    Cancelled,
}
