//! Free time gaps on a shift team's schedule.
//!
//! Gaps come from the shift bounds and the committed stops in between. Gaps
//! that opened before the cutoff are dropped, with one exception: the
//! trailing gap after the last stop is clamped forward to the cutoff while
//! the shift is still running.
//!
//! Lengths can be zero or negative (e.g. a shift that already ended). Such
//! gaps are still emitted and simply never fit a visit.

use serde::{Deserialize, Serialize};

use crate::shift_team::ShiftTeam;

/// A free interval starting at `departure_time_sec` and lasting `gap_time_sec`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStopGap {
    pub departure_time_sec: i64,
    pub gap_time_sec: i64,
}

impl RouteStopGap {
    fn between(departure_time_sec: i64, next_arrival_sec: i64) -> Self {
        Self {
            departure_time_sec,
            gap_time_sec: next_arrival_sec - departure_time_sec,
        }
    }

    /// Exclusive end of the interval.
    pub fn end_time_sec(&self) -> i64 {
        self.departure_time_sec + self.gap_time_sec
    }
}

/// Gaps of `shift_team` still usable at `current_timestamp_sec`, in route order.
pub fn extract_gaps(shift_team: &ShiftTeam, current_timestamp_sec: i64) -> Vec<RouteStopGap> {
    let stops = &shift_team.route_stops;

    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        let departure = shift_team.start_timestamp_sec.max(current_timestamp_sec);
        return vec![RouteStopGap::between(departure, shift_team.end_timestamp_sec)];
    };

    let mut gaps = Vec::with_capacity(stops.len() + 1);

    // Already-started shifts lose the initial gap entirely.
    if shift_team.start_timestamp_sec >= current_timestamp_sec {
        gaps.push(RouteStopGap::between(
            shift_team.start_timestamp_sec,
            first.arrival_timestamp_sec(),
        ));
    }

    for pair in stops.windows(2) {
        let departure = pair[0].departure_timestamp_sec();
        if departure < current_timestamp_sec {
            continue;
        }
        gaps.push(RouteStopGap::between(departure, pair[1].arrival_timestamp_sec()));
    }

    let mut departure = last.departure_timestamp_sec();
    if departure < current_timestamp_sec && shift_team.end_timestamp_sec > current_timestamp_sec {
        departure = current_timestamp_sec;
    }
    gaps.push(RouteStopGap::between(departure, shift_team.end_timestamp_sec));

    gaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::RouteStop;

    fn gap(departure_time_sec: i64, gap_time_sec: i64) -> RouteStopGap {
        RouteStopGap {
            departure_time_sec,
            gap_time_sec,
        }
    }

    #[test]
    fn test_empty_route_before_shift_start() {
        let team = ShiftTeam::new(1, 10, 1000, 5000);
        assert_eq!(extract_gaps(&team, 500), vec![gap(1000, 4000)]);
    }

    #[test]
    fn test_empty_route_after_shift_start() {
        let team = ShiftTeam::new(1, 10, 1000, 5000);
        assert_eq!(extract_gaps(&team, 2000), vec![gap(2000, 3000)]);
    }

    #[test]
    fn test_empty_route_single_gap_starts_at_later_of_start_and_now() {
        let team = ShiftTeam::new(1, 10, 1000, 5000);
        for now in [0, 999, 1000, 1001, 4999, 5000, 7000] {
            let gaps = extract_gaps(&team, now);
            assert_eq!(gaps.len(), 1);
            assert_eq!(gaps[0].departure_time_sec, now.max(1000));
            assert_eq!(gaps[0].end_time_sec(), 5000);
        }
    }

    #[test]
    fn test_empty_route_after_shift_end_is_negative() {
        let team = ShiftTeam::new(1, 10, 1000, 5000);
        assert_eq!(extract_gaps(&team, 6000), vec![gap(6000, -1000)]);
    }

    #[test]
    fn test_single_stop_keeps_initial_gap_at_shift_start() {
        let team = ShiftTeam::new(1, 10, 1000, 5000)
            .with_route_stops([RouteStop::visit(0, 1500, 200)]);
        assert_eq!(extract_gaps(&team, 1000), vec![gap(1000, 500), gap(1700, 3300)]);
    }

    #[test]
    fn test_initial_gap_dropped_once_shift_started() {
        let team = ShiftTeam::new(1, 10, 1000, 5000)
            .with_route_stops([RouteStop::visit(0, 1500, 200)]);
        assert_eq!(extract_gaps(&team, 1001), vec![gap(1700, 3300)]);
    }

    #[test]
    fn test_interior_gaps_between_stops() {
        let team = ShiftTeam::new(1, 10, 1000, 9000).with_route_stops([
            RouteStop::visit(0, 1500, 500),
            RouteStop::rest_break(1, 3000, 600),
            RouteStop::visit(2, 5000, 1000),
        ]);
        assert_eq!(
            extract_gaps(&team, 0),
            vec![gap(1000, 500), gap(2000, 1000), gap(3600, 1400), gap(6000, 3000)]
        );
    }

    #[test]
    fn test_passed_interior_gap_dropped_not_truncated() {
        let team = ShiftTeam::new(1, 10, 1000, 9000).with_route_stops([
            RouteStop::visit(0, 1500, 500),
            RouteStop::rest_break(1, 3000, 600),
            RouteStop::visit(2, 5000, 1000),
        ]);
        // First stop departs at 2000, before now; the second departs at 3600.
        assert_eq!(extract_gaps(&team, 2500), vec![gap(3600, 1400), gap(6000, 3000)]);
    }

    #[test]
    fn test_departure_exactly_at_now_is_kept() {
        let team = ShiftTeam::new(1, 10, 1000, 9000).with_route_stops([
            RouteStop::visit(0, 1500, 500),
            RouteStop::visit(1, 4000, 500),
        ]);
        assert_eq!(extract_gaps(&team, 2000), vec![gap(2000, 2000), gap(4500, 4500)]);
    }

    #[test]
    fn test_trailing_gap_clamped_to_now() {
        let team = ShiftTeam::new(1, 10, 1000, 5000)
            .with_route_stops([RouteStop::visit(0, 1500, 200)]);
        assert_eq!(extract_gaps(&team, 3000), vec![gap(3000, 2000)]);
    }

    #[test]
    fn test_trailing_gap_not_clamped_after_shift_end() {
        let team = ShiftTeam::new(1, 10, 1000, 5000)
            .with_route_stops([RouteStop::visit(0, 1500, 200)]);
        // Shift is over: the departure stays in the past and is never clamped.
        assert_eq!(extract_gaps(&team, 5000), vec![gap(1700, 3300)]);
        assert_eq!(extract_gaps(&team, 8000), vec![gap(1700, 3300)]);
    }

    #[test]
    fn test_trailing_gap_negative_when_last_stop_overruns() {
        let team = ShiftTeam::new(1, 10, 1000, 5000)
            .with_route_stops([RouteStop::visit(0, 4500, 1000)]);
        assert_eq!(extract_gaps(&team, 0), vec![gap(1000, 3500), gap(5500, -500)]);
    }

    #[test]
    fn test_gaps_follow_route_order() {
        let team = ShiftTeam::new(1, 10, 0, 10_000).with_route_stops([
            RouteStop::visit(0, 1000, 100),
            RouteStop::visit(1, 2000, 100),
            RouteStop::visit(2, 3000, 100),
            RouteStop::visit(3, 4000, 100),
        ]);
        let gaps = extract_gaps(&team, 0);
        assert_eq!(gaps.len(), 5);
        assert!(gaps
            .windows(2)
            .all(|w| w[0].departure_time_sec <= w[1].departure_time_sec));
    }
}
