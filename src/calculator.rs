//! Availability calculator: one matching pass over a roster.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::index::AvailabilityIndex;
use crate::matcher::{assign, MatchOutcome, UnassignedReason};
use crate::shift_team::ShiftTeam;
use crate::visit::Visit;

/// Travel overhead applied uniformly to every visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorOptions {
    /// Driving time from the previous stop to the visit (seconds).
    #[serde(default = "CalculatorOptions::default_driving_time_sec")]
    pub driving_time_to_visit_sec: i64,
    /// Driving time from the visit to the next stop (seconds).
    #[serde(default = "CalculatorOptions::default_driving_time_sec")]
    pub driving_time_from_visit_sec: i64,
}

impl Default for CalculatorOptions {
    fn default() -> Self {
        Self {
            driving_time_to_visit_sec: Self::default_driving_time_sec(),
            driving_time_from_visit_sec: Self::default_driving_time_sec(),
        }
    }
}

impl CalculatorOptions {
    fn default_driving_time_sec() -> i64 {
        1319 // ~22 minutes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnassignedVisit {
    /// Position of the visit in the calculator's input order.
    pub position: usize,
    pub reason: UnassignedReason,
}

/// Summary of one matching pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculationReport {
    pub assigned: usize,
    pub already_assigned: usize,
    pub unassigned: Vec<UnassignedVisit>,
}

/// Owns the roster and the pending visits for a matching pass.
#[derive(Debug, Clone)]
pub struct AvailabilityCalculator {
    shift_teams: Vec<ShiftTeam>,
    visits: Vec<Visit>,
    current_timestamp_sec: i64,
    options: CalculatorOptions,
}

impl AvailabilityCalculator {
    pub fn new(
        shift_teams: Vec<ShiftTeam>,
        visits: Vec<Visit>,
        current_timestamp_sec: i64,
        options: CalculatorOptions,
    ) -> Self {
        Self {
            shift_teams,
            visits,
            current_timestamp_sec,
            options,
        }
    }

    pub fn shift_teams(&self) -> &[ShiftTeam] {
        &self.shift_teams
    }

    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    pub fn into_visits(self) -> Vec<Visit> {
        self.visits
    }

    pub fn current_timestamp_sec(&self) -> i64 {
        self.current_timestamp_sec
    }

    pub fn options(&self) -> &CalculatorOptions {
        &self.options
    }

    /// Matches every pending visit in input order and writes the resulting
    /// arrival and shift team onto it.
    ///
    /// The gap index is built once up front and not refreshed between
    /// visits, so two visits can land in the same gap during one pass.
    pub fn calculate_arrivals(&mut self) -> CalculationReport {
        let index = AvailabilityIndex::build(&self.shift_teams, self.current_timestamp_sec);
        let mut report = CalculationReport::default();

        for (position, visit) in self.visits.iter_mut().enumerate() {
            let outcome = assign(
                visit,
                &self.shift_teams,
                &index,
                &self.options,
                self.current_timestamp_sec,
            );

            match outcome {
                MatchOutcome::AlreadyAssigned => report.already_assigned += 1,
                MatchOutcome::Assigned(assignment) => {
                    debug!(
                        position,
                        shift_team = assignment.shift_team_id,
                        arrival = assignment.arrival_timestamp_sec,
                        "visit assigned"
                    );
                    visit.set_assignment(assignment);
                    report.assigned += 1;
                }
                MatchOutcome::Unassigned(reason) => {
                    debug!(position, ?reason, "visit left unassigned");
                    report.unassigned.push(UnassignedVisit { position, reason });
                }
            }
        }

        info!(
            shift_teams = self.shift_teams.len(),
            assigned = report.assigned,
            already_assigned = report.already_assigned,
            unassigned = report.unassigned.len(),
            "availability pass finished"
        );

        report
    }
}
