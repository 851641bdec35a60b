//! Test fixtures for shift-availability.
//!
//! Provides builders for shift teams and visits plus a tracing subscriber
//! that writes through the test harness.

#![allow(dead_code)]

use shift_availability::{CalculatorOptions, RouteStop, ShiftTeam, Visit};

/// Routes log output through libtest so it only shows for failing tests.
/// Set `RUST_LOG=shift_availability=trace` to see per-gap decisions.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Builder for test shift teams with sensible defaults.
///
/// Internal and external ids are kept apart (external = internal * 100) so
/// tests notice if the wrong one is handed back.
#[derive(Clone, Debug)]
pub struct TestShift {
    team: ShiftTeam,
    next_stop: i32,
}

impl TestShift {
    pub fn new(id: i64, start: i64, end: i64) -> Self {
        Self {
            team: ShiftTeam::new(id, id * 100, start, end),
            next_stop: 0,
        }
    }

    pub fn stop(mut self, arrival: i64, duration: i64) -> Self {
        self.team.route_stops.push(RouteStop::visit(self.next_stop, arrival, duration));
        self.next_stop += 1;
        self
    }

    pub fn rest_break(mut self, start: i64, duration: i64) -> Self {
        self.team
            .route_stops
            .push(RouteStop::rest_break(self.next_stop, start, duration));
        self.next_stop += 1;
        self
    }

    pub fn attribute(mut self, name: &str) -> Self {
        self.team.attribute_names.insert(name.to_string());
        self
    }

    pub fn capacity(mut self, allowed: i64, used: i64) -> Self {
        self.team = self.team.with_capacity(allowed, used);
        self
    }

    pub fn inactive(mut self) -> Self {
        self.team.is_active = false;
        self
    }

    pub fn build(self) -> ShiftTeam {
        self.team
    }
}

pub fn visit(service_duration_sec: i64) -> Visit {
    Visit::new(service_duration_sec)
}

/// Symmetric 100 second drive used by the worked scenarios.
pub fn travel_100() -> CalculatorOptions {
    CalculatorOptions {
        driving_time_to_visit_sec: 100,
        driving_time_from_visit_sec: 100,
    }
}

pub fn external_id(id: i64) -> i64 {
    id * 100
}
