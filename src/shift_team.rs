//! Shift teams and their eligibility rules.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::route::RouteStop;

/// A worker's shift with its committed route.
///
/// `route_stops` must already be in chronological order; nothing in this
/// crate re-sorts them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftTeam {
    /// Internal key, used to index gaps.
    pub id: i64,
    /// External identity handed back on assigned visits.
    #[serde(rename = "shiftTeamID")]
    pub shift_team_id: i64,
    pub start_timestamp_sec: i64,
    pub end_timestamp_sec: i64,
    #[serde(default)]
    pub attribute_names: BTreeSet<String>,
    #[serde(default)]
    pub route_stops: Vec<RouteStop>,
    /// Zero means unlimited.
    #[serde(default)]
    pub allowed_capacity_sec: i64,
    #[serde(default)]
    pub used_capacity_sec: i64,
    pub is_active: bool,
}

impl ShiftTeam {
    /// Creates an active shift team with no stops, attributes, or capacity limit.
    pub fn new(id: i64, shift_team_id: i64, start_timestamp_sec: i64, end_timestamp_sec: i64) -> Self {
        Self {
            id,
            shift_team_id,
            start_timestamp_sec,
            end_timestamp_sec,
            attribute_names: BTreeSet::new(),
            route_stops: Vec::new(),
            allowed_capacity_sec: 0,
            used_capacity_sec: 0,
            is_active: true,
        }
    }

    /// Adds attribute names.
    pub fn with_attributes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attribute_names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Adds attribute names from a comma-separated list, e.g.
    /// `"service_name:Acute,presentation_modality:in_person"`.
    pub fn with_attributes_csv(self, attributes: &str) -> Self {
        self.with_attributes(
            attributes
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty()),
        )
    }

    /// Appends committed stops. Callers keep them chronological.
    pub fn with_route_stops(mut self, stops: impl IntoIterator<Item = RouteStop>) -> Self {
        self.route_stops.extend(stops);
        self
    }

    pub fn with_capacity(mut self, allowed_capacity_sec: i64, used_capacity_sec: i64) -> Self {
        self.allowed_capacity_sec = allowed_capacity_sec;
        self.used_capacity_sec = used_capacity_sec;
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Marks the team active iff its shift has not ended by `current_timestamp_sec`.
    pub fn active_at(mut self, current_timestamp_sec: i64) -> Self {
        self.is_active = self.end_timestamp_sec >= current_timestamp_sec;
        self
    }

    /// True if every required attribute is present (AND semantics).
    pub fn has_attribute_names<S: AsRef<str>>(&self, required: &[S]) -> bool {
        required
            .iter()
            .all(|name| self.attribute_names.contains(name.as_ref()))
    }

    pub fn has_capacity(&self) -> bool {
        if self.allowed_capacity_sec == 0 {
            return true;
        }
        self.used_capacity_sec < self.allowed_capacity_sec
    }

    pub fn is_available(&self) -> bool {
        self.has_capacity() && self.is_active
    }
}
