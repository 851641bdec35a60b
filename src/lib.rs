//! shift-availability core
//!
//! Finds the earliest free slot on a roster of shift teams for pending visits.
//! Gaps are derived from each team's committed route stops, then visits are
//! matched first-fit against them in roster order.

pub mod route;
pub mod shift_team;
pub mod visit;
pub mod gaps;
pub mod index;
pub mod matcher;
pub mod calculator;
pub mod validation;

pub use calculator::{AvailabilityCalculator, CalculationReport, CalculatorOptions};
pub use gaps::{extract_gaps, RouteStopGap};
pub use index::AvailabilityIndex;
pub use matcher::{MatchOutcome, UnassignedReason};
pub use route::RouteStop;
pub use shift_team::ShiftTeam;
pub use visit::{Visit, VisitAssignment};
