//! Pending visits and the assignment a matching pass can give them.

use serde::{Deserialize, Serialize};

use crate::calculator::CalculatorOptions;

/// Where and when a visit was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitAssignment {
    pub arrival_timestamp_sec: i64,
    #[serde(rename = "shiftTeamID")]
    pub shift_team_id: i64,
}

/// A visit waiting to be placed on some shift team's route.
///
/// The output fields are write-once: they are filled by the matcher and a
/// visit that already carries a positive arrival is never matched again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    pub service_duration_sec: i64,
    /// Every listed attribute must be present on the shift team.
    #[serde(default)]
    pub attribute_names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    arrival_timestamp_sec: Option<i64>,
    #[serde(default, rename = "shiftTeamID", skip_serializing_if = "Option::is_none")]
    shift_team_id: Option<i64>,
}

impl Visit {
    pub fn new(service_duration_sec: i64) -> Self {
        Self {
            service_duration_sec,
            attribute_names: Vec::new(),
            arrival_timestamp_sec: None,
            shift_team_id: None,
        }
    }

    /// Adds required attribute names.
    pub fn with_attributes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attribute_names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Marks the visit as already placed before any matching pass runs.
    pub fn with_assignment(mut self, assignment: VisitAssignment) -> Self {
        self.set_assignment(assignment);
        self
    }

    pub fn arrival_timestamp_sec(&self) -> Option<i64> {
        self.arrival_timestamp_sec
    }

    pub fn shift_team_id(&self) -> Option<i64> {
        self.shift_team_id
    }

    pub fn assignment(&self) -> Option<VisitAssignment> {
        Some(VisitAssignment {
            arrival_timestamp_sec: self.arrival_timestamp_sec?,
            shift_team_id: self.shift_team_id?,
        })
    }

    /// True once the visit carries a positive arrival timestamp.
    pub fn is_assigned(&self) -> bool {
        self.arrival_timestamp_sec.is_some_and(|arrival| arrival > 0)
    }

    /// Service time plus travel to and from the visit.
    pub fn required_duration_sec(&self, options: &CalculatorOptions) -> i64 {
        self.service_duration_sec
            + options.driving_time_to_visit_sec
            + options.driving_time_from_visit_sec
    }

    pub(crate) fn set_assignment(&mut self, assignment: VisitAssignment) {
        self.arrival_timestamp_sec = Some(assignment.arrival_timestamp_sec);
        self.shift_team_id = Some(assignment.shift_team_id);
    }
}
