//! Derived scalars over an event list.

use crate::analyze::Commit;

/// Global time span and peak activity of a commit list.
///
/// These are the only aggregates a render needs: they map any commit into
/// a normalized timeline position and a relative loudness. Both divisors
/// are floored at 1 so degenerate histories (a single instant, or all
/// empty commits) normalize cleanly instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventSpan {
    pub min_time: i64,
    pub max_time: i64,
    time_range: i64,
    max_activity: u64,
}

impl EventSpan {
    /// Compute the span of a commit list; `None` when the list is empty.
    pub fn of(commits: &[Commit]) -> Option<Self> {
        let first = commits.first()?;
        let mut min_time = first.timestamp;
        let mut max_time = first.timestamp;
        let mut max_activity = 0;

        for commit in commits {
            min_time = min_time.min(commit.timestamp);
            max_time = max_time.max(commit.timestamp);
            max_activity = max_activity.max(commit.activity());
        }

        Some(Self {
            min_time,
            max_time,
            time_range: (max_time - min_time).max(1),
            max_activity: max_activity.max(1),
        })
    }

    /// Normalized position of `timestamp` within the span.
    ///
    /// 0.0 at the earliest commit, 1.0 at the latest; every commit of a
    /// single-instant history collapses to 0.0.
    #[inline]
    pub fn position(&self, timestamp: i64) -> f32 {
        (timestamp - self.min_time) as f32 / self.time_range as f32
    }

    /// Activity relative to the busiest commit, in [0.0, 1.0].
    ///
    /// When every commit carries zero activity the floor keeps this at
    /// 0.0 rather than erroring, so such histories render silent notes.
    #[inline]
    pub fn relative_activity(&self, activity: u64) -> f32 {
        activity as f32 / self.max_activity as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit(timestamp: i64, additions: u32, deletions: u32) -> Commit {
        Commit {
            hash: String::new(),
            author: String::new(),
            email: String::new(),
            timestamp,
            subject: String::new(),
            additions,
            deletions,
            files_changed: Vec::new(),
        }
    }

    #[test]
    fn empty_list_has_no_span() {
        assert_eq!(EventSpan::of(&[]), None);
    }

    #[test]
    fn tracks_extremes_in_any_order() {
        let commits = [commit(50, 1, 0), commit(10, 2, 3), commit(30, 0, 0)];
        let span = EventSpan::of(&commits).unwrap();

        assert_eq!(span.min_time, 10);
        assert_eq!(span.max_time, 50);
        assert_eq!(span.position(10), 0.0);
        assert_eq!(span.position(50), 1.0);
        assert_eq!(span.position(30), 0.5);
        assert_eq!(span.relative_activity(5), 1.0);
    }

    #[test]
    fn single_instant_history_collapses_to_zero() {
        let commits = [commit(42, 1, 1), commit(42, 2, 2)];
        let span = EventSpan::of(&commits).unwrap();

        assert_eq!(span.position(42), 0.0);
    }

    #[test]
    fn all_zero_activity_floors_the_divisor() {
        let commits = [commit(0, 0, 0), commit(10, 0, 0)];
        let span = EventSpan::of(&commits).unwrap();

        assert_eq!(span.relative_activity(0), 0.0);
    }
}
