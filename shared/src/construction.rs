use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::game_data::BuildingKind;

/// Timer-backed build-in-progress state.
///
/// The in-progress indicator is derived from a fixed deadline, so asking
/// twice at the same instant always gives the same answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Construction {
    pub building: BuildingKind,
    pub finished_at: DateTime<Utc>,
}

impl Construction {
    pub fn new(building: BuildingKind, now: DateTime<Utc>, duration: Duration) -> Self {
        Self {
            building,
            finished_at: now + duration,
        }
    }

    pub fn in_progress(&self, now: DateTime<Utc>) -> bool {
        now < self.finished_at
    }

    /// Time left until completion, zero once finished.
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        (self.finished_at - now).max(Duration::zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    #[test]
    fn in_progress_flips_exactly_at_the_deadline() {
        let build = Construction::new(BuildingKind::Barracks, at(1_000), Duration::seconds(90));
        assert!(build.in_progress(at(1_000)));
        assert!(build.in_progress(at(1_089)));
        assert!(!build.in_progress(at(1_090)));
    }

    #[test]
    fn remaining_clamps_to_zero_after_completion() {
        let build = Construction::new(BuildingKind::Farm, at(0), Duration::seconds(60));
        assert_eq!(build.remaining(at(20)), Duration::seconds(40));
        assert_eq!(build.remaining(at(120)), Duration::zero());
    }

    #[test]
    fn same_instant_always_gives_same_answer() {
        let build = Construction::new(BuildingKind::Wall, at(0), Duration::seconds(30));
        let now = at(10);
        assert_eq!(build.in_progress(now), build.in_progress(now));
    }
}
