use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Cooperative cancellation for long-running comparisons.
///
/// The alignment engine polls `is_cancelled` at a bounded cadence and aborts
/// with [`ComparisonError::Cancelled`](crate::ComparisonError::Cancelled)
/// when it returns true. There is no preemption: a comparison between polls
/// always runs to the next poll.
pub trait Cancellation: Sync {
    fn is_cancelled(&self) -> bool;
}

/// A cancellation source that never fires. The sensible default for callers
/// without a timeout of their own.
#[derive(Debug, Clone, Copy, Default)]
pub struct Never;

impl Cancellation for Never {
    fn is_cancelled(&self) -> bool { false }
}

/// A shareable cancellation flag. Clone it, hand one copy to the comparison
/// and keep the other to `cancel` from anywhere, e.g. a timeout thread.
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag {
    cancelled: Arc<AtomicBool>,
}

impl CancellationFlag {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn cancel(&self) { self.cancelled.store(true, Ordering::Relaxed); }
}

impl Cancellation for CancellationFlag {
    fn is_cancelled(&self) -> bool { self.cancelled.load(Ordering::Relaxed) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never() {
        assert!(!Never.is_cancelled());
    }

    #[test]
    fn test_flag_is_shared_between_clones() {
        let flag = CancellationFlag::new();
        let shared = flag.clone();
        assert!(!shared.is_cancelled());

        flag.cancel();
        assert!(shared.is_cancelled());
    }
}
