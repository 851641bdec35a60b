//! Roster checks for the ingestion layer.
//!
//! The calculator trusts its input. These checks catch the roster shapes it
//! silently mishandles:
//! - duplicate internal ids (gaps of one team shadow the other)
//! - shifts that end before they start
//! - route stops out of chronological order

use std::collections::HashSet;
use std::fmt::Display;

use crate::shift_team::ShiftTeam;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    DuplicateShiftTeamId {
        id: i64,
    },
    InvertedShift {
        id: i64,
        start_timestamp_sec: i64,
        end_timestamp_sec: i64,
    },
    /// The stop at `position` arrives before the stop preceding it.
    UnorderedRouteStops {
        id: i64,
        position: usize,
    },
}

impl Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::DuplicateShiftTeamId { id } => {
                write!(f, "shift team id {} appears more than once", id)
            }
            RosterError::InvertedShift {
                id,
                start_timestamp_sec,
                end_timestamp_sec,
            } => write!(
                f,
                "shift team {} ends at {} before it starts at {}",
                id, end_timestamp_sec, start_timestamp_sec
            ),
            RosterError::UnorderedRouteStops { id, position } => write!(
                f,
                "shift team {} has route stop {} arriving before its predecessor",
                id, position
            ),
        }
    }
}

impl std::error::Error for RosterError {}

/// Checks every team and reports all problems found.
pub fn validate_roster(shift_teams: &[ShiftTeam]) -> Result<(), Vec<RosterError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for team in shift_teams {
        if !seen.insert(team.id) {
            errors.push(RosterError::DuplicateShiftTeamId { id: team.id });
        }

        if team.end_timestamp_sec < team.start_timestamp_sec {
            errors.push(RosterError::InvertedShift {
                id: team.id,
                start_timestamp_sec: team.start_timestamp_sec,
                end_timestamp_sec: team.end_timestamp_sec,
            });
        }

        for (offset, pair) in team.route_stops.windows(2).enumerate() {
            if pair[1].arrival_timestamp_sec() < pair[0].arrival_timestamp_sec() {
                errors.push(RosterError::UnorderedRouteStops {
                    id: team.id,
                    position: offset + 1,
                });
            }
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
