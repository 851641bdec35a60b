//! First-fit visit matching.
//!
//! Teams are scanned in roster order and their gaps in route order. The
//! first eligible team with a gap long enough for the visit and its travel
//! wins; nothing later is considered.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::calculator::CalculatorOptions;
use crate::index::AvailabilityIndex;
use crate::shift_team::ShiftTeam;
use crate::visit::{Visit, VisitAssignment};

/// Why a visit could not be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnassignedReason {
    /// No team is active, under capacity, and carries every required attribute.
    NoEligibleShiftTeam,
    /// Eligible teams exist but none has a gap that fits.
    NoFittingGap,
}

/// Result of trying to match one visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The visit already had a positive arrival and was left untouched.
    AlreadyAssigned,
    Assigned(VisitAssignment),
    Unassigned(UnassignedReason),
}

impl MatchOutcome {
    pub fn assignment(&self) -> Option<VisitAssignment> {
        match self {
            MatchOutcome::Assigned(assignment) => Some(*assignment),
            _ => None,
        }
    }
}

/// Finds the first team and gap that can take `visit`.
///
/// The visit itself is not modified; applying the assignment is up to the
/// caller.
pub fn assign(
    visit: &Visit,
    shift_teams: &[ShiftTeam],
    index: &AvailabilityIndex,
    options: &CalculatorOptions,
    current_timestamp_sec: i64,
) -> MatchOutcome {
    if visit.is_assigned() {
        return MatchOutcome::AlreadyAssigned;
    }

    let required = visit.required_duration_sec(options);
    let mut found_eligible_team = false;

    for team in shift_teams {
        let Some(gaps) = index.gaps_for(team.id) else {
            trace!(shift_team = team.id, "no gap entry, skipping");
            continue;
        };
        if !team.is_available() || !team.has_attribute_names(visit.attribute_names.as_slice()) {
            trace!(shift_team = team.id, "not eligible, skipping");
            continue;
        }
        found_eligible_team = true;

        for gap in gaps {
            let arrival = gap.departure_time_sec + options.driving_time_to_visit_sec;
            // Clamped or stale gaps can still produce an arrival in the past.
            if gap.gap_time_sec >= required && arrival >= current_timestamp_sec {
                return MatchOutcome::Assigned(VisitAssignment {
                    arrival_timestamp_sec: arrival,
                    shift_team_id: team.shift_team_id,
                });
            }
            trace!(
                shift_team = team.id,
                departure = gap.departure_time_sec,
                length = gap.gap_time_sec,
                required,
                "gap rejected"
            );
        }
    }

    let reason = if found_eligible_team {
        UnassignedReason::NoFittingGap
    } else {
        UnassignedReason::NoEligibleShiftTeam
    };
    MatchOutcome::Unassigned(reason)
}
