//! Single/double-click classification.
//!
//! [`ClickTracker`] timestamps each click and classifies it against the
//! previous one. Timestamps are supplied by the caller (time since app
//! start), so classification is deterministic under test.

use std::time::Duration;

/// Two clicks within this window form a double-click.
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(400);

/// How a click relates to the one before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickKind {
    /// A standalone click, or the first of a potential pair.
    Single,
    /// The second click of a pair inside [`DOUBLE_CLICK_WINDOW`].
    ///
    /// A double-click is delivered *in addition to* the two single clicks,
    /// matching DOM semantics where `click` fires for both presses before
    /// `dblclick`.
    Double,
}

/// Classifies clicks into singles and doubles by timestamp spacing.
#[derive(Debug, Default)]
pub struct ClickTracker {
    last_click: Option<Duration>,
}

impl ClickTracker {
    /// Creates a tracker with no click history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a click at `at` (time since some fixed origin) and returns
    /// its classification. A `Double` consumes the pair: a third click
    /// starts a fresh sequence.
    pub fn register(&mut self, at: Duration) -> ClickKind {
        match self.last_click {
            Some(prev) if at.saturating_sub(prev) <= DOUBLE_CLICK_WINDOW => {
                self.last_click = None;
                ClickKind::Double
            }
            _ => {
                self.last_click = Some(at);
                ClickKind::Single
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_first_click_is_single() {
        let mut tracker = ClickTracker::new();
        assert_eq!(tracker.register(ms(1000)), ClickKind::Single);
    }

    #[test]
    fn test_fast_pair_is_double() {
        let mut tracker = ClickTracker::new();
        assert_eq!(tracker.register(ms(1000)), ClickKind::Single);
        assert_eq!(tracker.register(ms(1200)), ClickKind::Double);
    }

    #[test]
    fn test_slow_pair_is_two_singles() {
        let mut tracker = ClickTracker::new();
        assert_eq!(tracker.register(ms(1000)), ClickKind::Single);
        assert_eq!(tracker.register(ms(1500)), ClickKind::Single);
    }

    #[test]
    fn test_double_consumes_the_pair() {
        let mut tracker = ClickTracker::new();
        tracker.register(ms(0));
        assert_eq!(tracker.register(ms(100)), ClickKind::Double);
        // Third rapid click starts a new sequence rather than chaining.
        assert_eq!(tracker.register(ms(200)), ClickKind::Single);
        assert_eq!(tracker.register(ms(300)), ClickKind::Double);
    }

    #[test]
    fn test_window_boundary_is_inclusive() {
        let mut tracker = ClickTracker::new();
        tracker.register(ms(1000));
        assert_eq!(
            tracker.register(ms(1000) + DOUBLE_CLICK_WINDOW),
            ClickKind::Double
        );
    }
}
