//! Committed route stops.
//!
//! A stop is either a client visit or a rest break. Rest breaks are
//! recognised by a positive start timestamp and take priority over any
//! visit fields that happen to be populated as well.

use serde::{Deserialize, Serialize};

/// A single committed stop on a shift team's route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RouteStop {
    /// Ordinal position reported by the loader. Informational only.
    pub stop_index: i32,
    pub visit_arrival_timestamp_sec: i64,
    pub visit_service_duration_sec: i64,
    pub rest_break_start_timestamp_sec: i64,
    pub rest_break_duration_sec: i64,
}

impl RouteStop {
    /// Creates a client visit stop.
    pub fn visit(stop_index: i32, arrival_timestamp_sec: i64, service_duration_sec: i64) -> Self {
        Self {
            stop_index,
            visit_arrival_timestamp_sec: arrival_timestamp_sec,
            visit_service_duration_sec: service_duration_sec,
            ..Self::default()
        }
    }

    /// Creates a rest break stop.
    pub fn rest_break(stop_index: i32, start_timestamp_sec: i64, duration_sec: i64) -> Self {
        Self {
            stop_index,
            rest_break_start_timestamp_sec: start_timestamp_sec,
            rest_break_duration_sec: duration_sec,
            ..Self::default()
        }
    }

    pub fn is_rest_break(&self) -> bool {
        self.rest_break_start_timestamp_sec > 0
    }

    /// When the team reaches this stop.
    pub fn arrival_timestamp_sec(&self) -> i64 {
        if self.is_rest_break() {
            return self.rest_break_start_timestamp_sec;
        }
        self.visit_arrival_timestamp_sec
    }

    /// When the team leaves this stop.
    pub fn departure_timestamp_sec(&self) -> i64 {
        if self.is_rest_break() {
            return self.rest_break_start_timestamp_sec + self.rest_break_duration_sec;
        }
        self.visit_arrival_timestamp_sec + self.visit_service_duration_sec
    }

    /// Time spent at the stop. Keyed on the break duration, not the break start.
    pub fn service_duration_sec(&self) -> i64 {
        if self.rest_break_duration_sec > 0 {
            return self.rest_break_duration_sec;
        }
        self.visit_service_duration_sec
    }
}
