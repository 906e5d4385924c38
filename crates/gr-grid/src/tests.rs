//! Unit tests for gr-grid.

#[cfg(test)]
mod helpers {
    use gr_core::{Cell, Connectivity};

    use crate::OccupancyGrid;

    pub fn grid(rows: u32, cols: u32, connectivity: Connectivity) -> OccupancyGrid {
        OccupancyGrid::new(rows, cols, connectivity).expect("non-empty grid")
    }

    pub fn c(row: u32, col: u32) -> Cell {
        Cell::new(row, col)
    }
}

// ── Grid structure & neighbor order ───────────────────────────────────────────

#[cfg(test)]
mod neighbors {
    use gr_core::Connectivity;

    use super::helpers::{c, grid};

    #[test]
    fn four_connected_contract_order() {
        let g = grid(5, 5, Connectivity::Four);
        // up, down, left, right
        assert_eq!(g.neighbors(c(2, 2)), vec![c(1, 2), c(3, 2), c(2, 1), c(2, 3)]);
    }

    #[test]
    fn eight_connected_appends_diagonals() {
        let g = grid(5, 5, Connectivity::Eight);
        assert_eq!(
            g.neighbors(c(2, 2)),
            vec![
                c(1, 2),
                c(3, 2),
                c(2, 1),
                c(2, 3),
                c(1, 1),
                c(1, 3),
                c(3, 1),
                c(3, 3),
            ]
        );
    }

    #[test]
    fn corner_clips_out_of_bounds() {
        let g = grid(3, 3, Connectivity::Four);
        // up and left fall off the grid; contract order of the rest holds.
        assert_eq!(g.neighbors(c(0, 0)), vec![c(1, 0), c(0, 1)]);
    }

    #[test]
    fn obstacles_excluded() {
        let mut g = grid(3, 3, Connectivity::Four);
        g.set_obstacles(&[c(1, 2)], &[], &[]);
        assert_eq!(g.neighbors(c(1, 1)), vec![c(0, 1), c(2, 1), c(1, 0)]);
    }

    #[test]
    fn never_includes_self() {
        let g = grid(4, 4, Connectivity::Eight);
        for row in 0..4 {
            for col in 0..4 {
                assert!(!g.neighbors(c(row, col)).contains(&c(row, col)));
            }
        }
    }
}

// ── Obstacle flags ────────────────────────────────────────────────────────────

#[cfg(test)]
mod flags {
    use gr_core::Connectivity;

    use crate::{GridError, OccupancyGrid};

    use super::helpers::{c, grid};

    #[test]
    fn empty_dimensions_rejected() {
        assert!(matches!(
            OccupancyGrid::new(0, 5, Connectivity::Four),
            Err(GridError::EmptyGrid { .. })
        ));
    }

    #[test]
    fn is_obstacle_bounds_checked() {
        let g = grid(3, 3, Connectivity::Four);
        assert!(!g.is_obstacle(c(2, 2)).unwrap());
        assert!(matches!(
            g.is_obstacle(c(3, 0)),
            Err(GridError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn set_obstacles_idempotent() {
        let mut g = grid(4, 4, Connectivity::Four);
        let cells = [c(0, 1), c(2, 2), c(3, 3)];
        g.set_obstacles(&cells, &[], &[]);
        let once = g.obstacle_count();
        g.set_obstacles(&cells, &[], &[]);
        assert_eq!(g.obstacle_count(), once);
        assert_eq!(once, 3);
    }

    #[test]
    fn anchors_silently_skipped() {
        let mut g = grid(4, 4, Connectivity::Four);
        let src = [c(0, 0)];
        let dst = [c(3, 3)];
        g.set_obstacles(&[c(0, 0), c(3, 3), c(1, 1)], &src, &dst);
        assert!(!g.is_obstacle(c(0, 0)).unwrap());
        assert!(!g.is_obstacle(c(3, 3)).unwrap());
        assert!(g.is_obstacle(c(1, 1)).unwrap());
    }

    #[test]
    fn clear_obstacles_inverts_set() {
        let mut g = grid(4, 4, Connectivity::Four);
        let cells = [c(1, 1), c(2, 2)];
        g.set_obstacles(&cells, &[], &[]);
        g.clear_obstacles(&cells);
        assert_eq!(g.obstacle_count(), 0);
    }
}

// ── Obstacle placement ────────────────────────────────────────────────────────

#[cfg(test)]
mod placement {
    use gr_core::{Connectivity, ObstacleMode, RunRng};

    use crate::{GridError, ObstacleField};

    use super::helpers::{c, grid};

    #[test]
    fn static_places_exact_distinct_count() {
        let mut g = grid(10, 10, Connectivity::Four);
        let mut rng = RunRng::new(42);
        let field = ObstacleField::place(&mut g, ObstacleMode::Static, 20, &[c(0, 0)], &[c(9, 9)], &mut rng)
            .unwrap();

        assert_eq!(field.positions().len(), 20);
        assert_eq!(g.obstacle_count(), 20); // all distinct, all flagged

        let mut seen = field.positions().to_vec();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 20);
        assert!(!field.positions().contains(&c(0, 0)));
        assert!(!field.positions().contains(&c(9, 9)));
    }

    #[test]
    fn placement_is_seed_deterministic() {
        let place = |seed| {
            let mut g = grid(8, 8, Connectivity::Four);
            let mut rng = RunRng::new(seed);
            ObstacleField::place(&mut g, ObstacleMode::Static, 12, &[], &[], &mut rng)
                .unwrap()
                .positions()
                .to_vec()
        };
        assert_eq!(place(7), place(7));
        assert_ne!(place(7), place(8));
    }

    #[test]
    fn zero_target_places_nothing() {
        let mut g = grid(4, 4, Connectivity::Four);
        let mut rng = RunRng::new(0);
        let field =
            ObstacleField::place(&mut g, ObstacleMode::Static, 0, &[], &[], &mut rng).unwrap();
        assert!(field.positions().is_empty());
        assert_eq!(g.obstacle_count(), 0);
    }

    #[test]
    fn exhausted_budget_fails_instead_of_looping() {
        // Both cells of a 1x2 grid are anchors: no legal placement exists.
        let mut g = grid(1, 2, Connectivity::Four);
        let mut rng = RunRng::new(3);
        let result =
            ObstacleField::place(&mut g, ObstacleMode::Static, 1, &[c(0, 0)], &[c(0, 1)], &mut rng);
        assert!(matches!(
            result,
            Err(GridError::PlacementExhausted { requested: 1, placed: 0 })
        ));
    }

    #[test]
    fn dynamic_permits_duplicates() {
        // One free cell, three obstacles: all three must stack on it.
        let mut g = grid(2, 2, Connectivity::Four);
        let mut rng = RunRng::new(11);
        let field = ObstacleField::place(
            &mut g,
            ObstacleMode::Dynamic,
            3,
            &[c(0, 0), c(0, 1)],
            &[c(1, 0)],
            &mut rng,
        )
        .unwrap();
        assert_eq!(field.positions(), &[c(1, 1), c(1, 1), c(1, 1)]);
        assert_eq!(g.obstacle_count(), 1);
    }
}

// ── Dynamic updates ───────────────────────────────────────────────────────────

#[cfg(test)]
mod updates {
    use gr_core::{Cell, Connectivity, ObstacleMode, RunRng, Tick};

    use crate::ObstacleField;

    use super::helpers::{c, grid};

    /// Build a dynamic field holding exactly the given cells.
    fn field_at(
        g: &mut crate::OccupancyGrid,
        cells: &[Cell],
        sources: &[Cell],
        destinations: &[Cell],
    ) -> ObstacleField {
        ObstacleField::with_cells(g, ObstacleMode::Dynamic, cells.to_vec(), sources, destinations)
    }

    #[test]
    fn walk_moves_at_most_one_step_per_tick() {
        let mut g = grid(9, 9, Connectivity::Four);
        let start = c(4, 4);
        let mut field = field_at(&mut g, &[start], &[c(0, 0)], &[c(8, 8)]);
        let mut rng = RunRng::new(99);

        let mut previous = start;
        for n in 1..=16u32 {
            field.advance(&mut g, &mut rng);
            let now = field.positions()[0];
            assert!(now.manhattan(previous) <= 1, "moved more than one step");
            assert!(now.manhattan(start) <= n, "drifted further than tick count");
            previous = now;
        }
    }

    #[test]
    fn walk_never_lands_on_anchors() {
        let mut g = grid(3, 3, Connectivity::Four);
        let sources = [c(0, 0)];
        let destinations = [c(2, 2)];
        let mut field = field_at(&mut g, &[c(1, 1)], &sources, &destinations);
        let mut rng = RunRng::new(5);

        for _ in 0..64 {
            field.advance(&mut g, &mut rng);
            let pos = field.positions()[0];
            assert_ne!(pos, c(0, 0));
            assert_ne!(pos, c(2, 2));
        }
    }

    #[test]
    fn boxed_in_obstacle_stays_put() {
        // 1x3 grid: both neighbors of the middle cell are anchors.
        let mut g = grid(1, 3, Connectivity::Four);
        let mut field = field_at(&mut g, &[c(0, 1)], &[c(0, 0)], &[c(0, 2)]);
        let mut rng = RunRng::new(1);

        field.advance(&mut g, &mut rng);
        assert_eq!(field.positions(), &[c(0, 1)]);
    }

    #[test]
    fn grid_flags_track_moved_set() {
        let mut g = grid(6, 6, Connectivity::Four);
        let mut field = field_at(&mut g, &[c(2, 2), c(4, 4)], &[c(0, 0)], &[c(5, 5)]);
        let mut rng = RunRng::new(21);

        for _ in 0..8 {
            field.advance(&mut g, &mut rng);
            for &pos in field.positions() {
                assert!(g.is_obstacle(pos).unwrap());
            }
            // Flags hold exactly the (deduplicated) positions.
            let mut distinct = field.positions().to_vec();
            distinct.sort();
            distinct.dedup();
            assert_eq!(g.obstacle_count(), distinct.len());
        }
    }

    #[test]
    fn log_entry_pairs_tick_and_positions() {
        let mut g = grid(4, 4, Connectivity::Four);
        let field = field_at(&mut g, &[c(1, 2)], &[], &[]);
        let entry = field.log_entry(Tick(7));
        assert_eq!(entry.tick, Tick(7));
        assert_eq!(entry.positions, vec![c(1, 2)]);
    }
}
