//! Unit tests for gr-search.
//!
//! All scenarios use hand-built grids small enough to reason about the
//! deterministic tie-break by hand.

#[cfg(test)]
mod helpers {
    use gr_core::{Cell, Connectivity, Direction, Horizon};
    use gr_grid::OccupancyGrid;

    use crate::SearchRequest;

    pub fn open_grid(rows: u32, cols: u32, connectivity: Connectivity) -> OccupancyGrid {
        OccupancyGrid::new(rows, cols, connectivity).expect("non-empty grid")
    }

    pub fn c(row: u32, col: u32) -> Cell {
        Cell::new(row, col)
    }

    pub fn request(source: Cell, destination: Cell, direction: Direction, horizon: Horizon) -> SearchRequest {
        SearchRequest { source, destination, direction, horizon }
    }
}

// ── Completed searches ────────────────────────────────────────────────────────

#[cfg(test)]
mod completed {
    use gr_core::{Connectivity, Direction, Horizon};

    use crate::{bounded_search, EuclideanCost, UnitCost};

    use super::helpers::{c, open_grid, request};

    #[test]
    fn anchor_equals_target() {
        let g = open_grid(3, 3, Connectivity::Four);
        let req = request(c(1, 1), c(1, 1), Direction::Forward, Horizon::Unbounded);
        let rec = bounded_search(&g, &req, &EuclideanCost).unwrap();
        assert_eq!(rec.nodes, vec![c(1, 1)]);
        assert_eq!(rec.cost, 0.0);
        assert_eq!(rec.time, 0);
        assert!(rec.completed);
    }

    #[test]
    fn forward_3x3_staircase() {
        let g = open_grid(3, 3, Connectivity::Four);
        let req = request(c(0, 0), c(2, 2), Direction::Forward, Horizon::Unbounded);
        let rec = bounded_search(&g, &req, &EuclideanCost).unwrap();

        assert!(rec.completed);
        assert_eq!(rec.cost, 4.0);
        assert_eq!(rec.time, 4);
        // The lexicographic tie-break settles on the top-edge staircase.
        assert_eq!(rec.nodes, vec![c(0, 0), c(0, 1), c(0, 2), c(1, 2), c(2, 2)]);
    }

    #[test]
    fn forward_and_backward_costs_agree() {
        let g = open_grid(5, 5, Connectivity::Four);
        let fwd = bounded_search(
            &g,
            &request(c(0, 0), c(4, 3), Direction::Forward, Horizon::Unbounded),
            &EuclideanCost,
        )
        .unwrap();
        let bwd = bounded_search(
            &g,
            &request(c(0, 0), c(4, 3), Direction::Backward, Horizon::Unbounded),
            &EuclideanCost,
        )
        .unwrap();

        assert!(fwd.completed && bwd.completed);
        assert_eq!(fwd.cost, bwd.cost);
        // Both read source-first after the backward reversal.
        assert_eq!(fwd.start(), c(0, 0));
        assert_eq!(fwd.end(), c(4, 3));
        assert_eq!(bwd.start(), c(0, 0));
        assert_eq!(bwd.end(), c(4, 3));
    }

    #[test]
    fn straight_line_cost_is_manhattan_distance() {
        let g = open_grid(1, 8, Connectivity::Four);
        let rec = bounded_search(
            &g,
            &request(c(0, 0), c(0, 7), Direction::Forward, Horizon::Unbounded),
            &EuclideanCost,
        )
        .unwrap();
        assert_eq!(rec.cost, 7.0);
        assert_eq!(rec.nodes.len(), 8);
    }

    #[test]
    fn eight_connectivity_takes_the_diagonal() {
        let g = open_grid(3, 3, Connectivity::Eight);
        let rec = bounded_search(
            &g,
            &request(c(0, 0), c(2, 2), Direction::Forward, Horizon::Unbounded),
            &EuclideanCost,
        )
        .unwrap();
        assert_eq!(rec.nodes, vec![c(0, 0), c(1, 1), c(2, 2)]);
        assert!((rec.cost - 2.0 * std::f64::consts::SQRT_2).abs() < 1e-12);
        assert_eq!(rec.time, 2);
    }

    #[test]
    fn unit_cost_equals_step_count() {
        let g = open_grid(4, 4, Connectivity::Four);
        let rec = bounded_search(
            &g,
            &request(c(0, 0), c(3, 3), Direction::Forward, Horizon::Unbounded),
            &UnitCost,
        )
        .unwrap();
        assert_eq!(rec.cost, rec.time as f64);
    }

    #[test]
    fn obstacle_wall_forces_detour() {
        let mut g = open_grid(3, 3, Connectivity::Four);
        // Wall off the top route: only the bottom staircase remains.
        g.set_obstacles(&[c(0, 1), c(1, 1), c(1, 2)], &[], &[]);
        let rec = bounded_search(
            &g,
            &request(c(0, 0), c(2, 2), Direction::Forward, Horizon::Unbounded),
            &EuclideanCost,
        )
        .unwrap();
        assert_eq!(rec.nodes, vec![c(0, 0), c(1, 0), c(2, 0), c(2, 1), c(2, 2)]);
        assert_eq!(rec.cost, 4.0);
    }
}

// ── Horizon behavior ──────────────────────────────────────────────────────────

#[cfg(test)]
mod horizon {
    use gr_core::{Connectivity, Direction, Horizon};

    use crate::{bounded_search, EuclideanCost};

    use super::helpers::{c, open_grid, request};

    #[test]
    fn zero_horizon_freezes_the_anchor() {
        let g = open_grid(3, 3, Connectivity::Four);
        let rec = bounded_search(
            &g,
            &request(c(0, 0), c(2, 2), Direction::Forward, Horizon::Bounded(0)),
            &EuclideanCost,
        )
        .unwrap();
        assert_eq!(rec.nodes, vec![c(0, 0)]);
        assert_eq!(rec.time, 0);
        assert!(!rec.completed);
    }

    #[test]
    fn partial_record_frozen_at_horizon() {
        let g = open_grid(3, 3, Connectivity::Four);
        let rec = bounded_search(
            &g,
            &request(c(0, 0), c(2, 2), Direction::Forward, Horizon::Bounded(2)),
            &EuclideanCost,
        )
        .unwrap();
        assert!(!rec.completed);
        assert_eq!(rec.time, 2);
        assert_eq!(rec.nodes.len(), 3);
        assert_eq!(rec.start(), c(0, 0));
    }

    #[test]
    fn horizon_large_enough_completes() {
        let g = open_grid(3, 3, Connectivity::Four);
        let rec = bounded_search(
            &g,
            &request(c(0, 0), c(2, 2), Direction::Forward, Horizon::Bounded(4)),
            &EuclideanCost,
        )
        .unwrap();
        assert!(rec.completed);
        assert_eq!(rec.time, 4);
    }

    #[test]
    fn backward_partial_is_destination_suffix() {
        let g = open_grid(3, 3, Connectivity::Four);
        let rec = bounded_search(
            &g,
            &request(c(0, 0), c(2, 2), Direction::Backward, Horizon::Bounded(1)),
            &EuclideanCost,
        )
        .unwrap();
        assert!(!rec.completed);
        // One step out of the destination, reversed to end there.
        assert_eq!(rec.nodes, vec![c(1, 2), c(2, 2)]);
        assert_eq!(rec.end(), c(2, 2));
    }

    #[test]
    fn backward_completion_reads_source_first() {
        let g = open_grid(3, 3, Connectivity::Four);
        let rec = bounded_search(
            &g,
            &request(c(0, 0), c(2, 2), Direction::Backward, Horizon::Bounded(4)),
            &EuclideanCost,
        )
        .unwrap();
        assert!(rec.completed);
        assert_eq!(rec.start(), c(0, 0));
        assert_eq!(rec.end(), c(2, 2));
        assert_eq!(rec.cost, 4.0);
    }
}

// ── No-path outcomes ──────────────────────────────────────────────────────────

#[cfg(test)]
mod no_path {
    use gr_core::{Connectivity, Direction, Horizon};

    use crate::{bounded_search, EuclideanCost};

    use super::helpers::{c, open_grid, request};

    #[test]
    fn walled_off_destination_yields_none() {
        let mut g = open_grid(2, 2, Connectivity::Four);
        // Every cell except the two anchors is an obstacle; under
        // four-connectivity the anchors touch only obstacles.
        g.set_obstacles(&[c(0, 1), c(1, 0)], &[c(0, 0)], &[c(1, 1)]);
        let rec = bounded_search(
            &g,
            &request(c(0, 0), c(1, 1), Direction::Forward, Horizon::Unbounded),
            &EuclideanCost,
        );
        assert!(rec.is_none());
    }

    #[test]
    fn walled_off_backward_yields_none_too() {
        let mut g = open_grid(2, 2, Connectivity::Four);
        g.set_obstacles(&[c(0, 1), c(1, 0)], &[c(0, 0)], &[c(1, 1)]);
        let rec = bounded_search(
            &g,
            &request(c(0, 0), c(1, 1), Direction::Backward, Horizon::Unbounded),
            &EuclideanCost,
        );
        assert!(rec.is_none());
    }
}
