//! Per-team gap lookup, built once per matching pass.

use std::collections::HashMap;

use tracing::warn;

use crate::gaps::{extract_gaps, RouteStopGap};
use crate::shift_team::ShiftTeam;

/// Gaps of every shift team keyed by internal id.
///
/// The index is a snapshot: assignments made during a pass are not written
/// back into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilityIndex {
    gaps: HashMap<i64, Vec<RouteStopGap>>,
}

impl AvailabilityIndex {
    /// Extracts gaps for every team at `current_timestamp_sec`.
    ///
    /// Teams sharing an internal id collapse into one entry; the last one
    /// in roster order wins.
    pub fn build(shift_teams: &[ShiftTeam], current_timestamp_sec: i64) -> Self {
        let mut gaps = HashMap::with_capacity(shift_teams.len());
        for team in shift_teams {
            let previous = gaps.insert(team.id, extract_gaps(team, current_timestamp_sec));
            if previous.is_some() {
                warn!(shift_team = team.id, "duplicate shift team id, earlier gaps replaced");
            }
        }
        Self { gaps }
    }

    pub fn gaps_for(&self, shift_team_id: i64) -> Option<&[RouteStopGap]> {
        self.gaps.get(&shift_team_id).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.gaps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gaps.is_empty()
    }
}
