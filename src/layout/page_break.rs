//! # Page Break Decisions
//!
//! The break-check run before every block that needs contiguous space.
//! Blocks are never split by this check: either the whole estimate fits
//! below the cursor or the block moves to the next page.

/// What to do with the next block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakDecision {
    /// Place the block on the current page (it fits).
    Place,
    /// Close the current page and start the block on a new one.
    MoveToNextPage,
}

/// Decide whether a block of `estimate` height fits between `cursor` and
/// `limit` (the page height minus the bottom margin).
pub fn decide_break(cursor: u32, estimate: u32, limit: u32) -> BreakDecision {
    if cursor.saturating_add(estimate) > limit {
        BreakDecision::MoveToNextPage
    } else {
        BreakDecision::Place
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn everything_fits() {
        assert_eq!(decide_break(100, 150, 792), BreakDecision::Place);
    }

    #[test]
    fn exact_fit_places() {
        assert_eq!(decide_break(642, 150, 792), BreakDecision::Place);
    }

    #[test]
    fn one_over_moves() {
        assert_eq!(decide_break(643, 150, 792), BreakDecision::MoveToNextPage);
    }

    #[test]
    fn huge_estimate_does_not_overflow() {
        assert_eq!(
            decide_break(u32::MAX - 1, 10, 792),
            BreakDecision::MoveToNextPage
        );
    }
}
