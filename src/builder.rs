//! Grid construction: placement, rejection diagnostics and random obstacles.

use std::fmt::{self, Display, Formatter};

use color_eyre::eyre::{ensure, Result, WrapErr as _};
use rand::Rng;

use crate::{
    config::Config,
    grid::Grid,
    types::{CellKind, Point},
};

/// Why a configured placement was dropped.
///
/// This enumeration distinguishes the two non-fatal ways a placement can fail. Both leave
/// the grid untouched and let the rest of the configuration proceed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RejectReason {
    /// The point has a component outside `1..=N`.
    OutOfBounds,
    /// The cell already holds an earlier placement.
    Occupied,
}

/// Record of one dropped placement.
///
/// This structure captures the point and cell kind of a placement that could not be
/// carried out, together with the reason. The builder collects these so the caller can
/// report every rejection on the diagnostic output once the grid is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Rejection {
    /// Point the placement was aimed at.
    pub(crate) point: Point,
    /// Cell kind that failed to be placed.
    pub(crate) kind: CellKind,
    /// Why the placement was dropped.
    pub(crate) reason: RejectReason,
}

impl Display for Rejection {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let cause = match self.reason {
            RejectReason::OutOfBounds => "the point is outside the grid",
            RejectReason::Occupied => "the cell is already occupied",
        };

        write!(
            formatter,
            "could not place '{}' at {}: {cause}",
            self.kind.symbol(),
            self.point
        )
    }
}

/// Owner of the grid during the load phase.
///
/// This structure holds the only placement and collision logic in the generator. It
/// allocates the grid, applies a parsed configuration to it and runs the collision-avoiding
/// random obstacle placement, recording every rejected placement along the way.
#[derive(Debug)]
pub(crate) struct GridBuilder {
    /// Grid under construction.
    grid: Grid,
    /// Placements dropped so far, in the order they were attempted.
    rejections: Vec<Rejection>,
}

impl GridBuilder {
    /// Builds a new grid builder around a freshly allocated grid.
    pub(crate) fn new(dimension: usize) -> Self {
        Self {
            grid: Grid::new(dimension),
            rejections: Vec::new(),
        }
    }

    /// Returns the grid in its current state.
    pub(crate) const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns every placement dropped so far.
    pub(crate) fn rejections(&self) -> &[Rejection] {
        &self.rejections
    }

    /// Writes a cell kind at a point, recording a rejection when out of bounds.
    ///
    /// This function never fails hard. An out-of-range point leaves the grid untouched and
    /// adds exactly one entry to the rejection record; an in-bounds write always succeeds,
    /// overwriting whatever the cell held.
    pub(crate) fn place(&mut self, point: Point, kind: CellKind) {
        if !self.grid.set(point, kind) {
            self.rejections.push(Rejection {
                point,
                kind,
                reason: RejectReason::OutOfBounds,
            });
        }
    }

    /// Places a cell kind only if the target cell is still free.
    ///
    /// This function implements the placement policy for everything named by the
    /// configuration: the first placement to claim a cell wins, and a later fixed obstacle,
    /// start or goal aimed at that cell is dropped with an occupied rejection. Out-of-range
    /// points fall through to [`place`](Self::place) and are rejected there.
    fn place_on_free(&mut self, point: Point, kind: CellKind) {
        if self.grid.is_occupied(point) {
            self.rejections.push(Rejection {
                point,
                kind,
                reason: RejectReason::Occupied,
            });
            return;
        }

        self.place(point, kind);
    }

    /// Applies a parsed configuration to the grid.
    ///
    /// This function places the configured entities in file order: fixed obstacles first,
    /// then the start and goal markers, and finally the random obstacles once the entire
    /// fixed layout is known. Rejected placements are recorded and do not stop the build.
    ///
    /// # Errors
    ///
    /// This function may return errors if the random obstacle count exceeds the number of
    /// cells still free after the fixed layout was placed.
    pub(crate) fn apply<R: Rng>(&mut self, config: &Config, rng: &mut R) -> Result<()> {
        for &point in &config.obstacles {
            self.place_on_free(point, CellKind::Wall);
        }
        self.place_on_free(config.start, CellKind::Start);
        self.place_on_free(config.goal, CellKind::Goal);

        self.place_random_obstacles(config.random_obstacles, rng)
    }

    /// Places the requested number of random obstacles on free cells.
    ///
    /// This function samples without replacement from the free cells of the grid: each
    /// obstacle draws a row and a column uniformly from `1..=N` and redraws while the drawn
    /// cell is occupied. The capacity check up front guarantees the retry loop terminates;
    /// when the count exhausts the free cells exactly, every remaining free cell ends up as
    /// a wall regardless of draw order.
    ///
    /// # Errors
    ///
    /// This function may return errors if:
    /// - `count` exceeds the number of free cells left on the grid
    /// - the grid dimension does not fit the coordinate range used for sampling
    pub(crate) fn place_random_obstacles<R: Rng>(
        &mut self,
        count: usize,
        rng: &mut R,
    ) -> Result<()> {
        let free = self.grid.free_cells();
        ensure!(
            count <= free,
            "cannot place {count} random obstacles: only {free} free cells remain"
        );

        let side = i32::try_from(self.grid.dimension())
            .wrap_err("grid dimension does not fit the coordinate range")?;
        for _ in 0..count {
            let mut point = Point::new(rng.gen_range(1..=side), rng.gen_range(1..=side));
            while self.grid.is_occupied(point) {
                point = Point::new(rng.gen_range(1..=side), rng.gen_range(1..=side));
            }

            self.place(point, CellKind::Wall);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng as _};

    use super::*;

    #[test]
    fn test_place_then_read_back_every_kind() {
        let kinds = [
            CellKind::Empty,
            CellKind::Wall,
            CellKind::Start,
            CellKind::Goal,
        ];

        for kind in kinds {
            let mut builder = GridBuilder::new(3);
            builder.place(Point::new(2, 3), kind);

            assert_eq!(builder.grid().get(Point::new(2, 3)), Some(kind));
            assert!(builder.rejections().is_empty());
        }
    }

    #[test]
    fn test_place_out_of_bounds_single_rejection() {
        let mut builder = GridBuilder::new(3);
        builder.place(Point::new(0, 2), CellKind::Wall);

        assert_eq!(builder.grid().free_cells(), 9);
        assert_eq!(
            builder.rejections(),
            [Rejection {
                point: Point::new(0, 2),
                kind: CellKind::Wall,
                reason: RejectReason::OutOfBounds,
            }]
        );
    }

    #[test]
    fn test_place_on_free_keeps_first_placement() {
        let mut builder = GridBuilder::new(3);
        builder.place_on_free(Point::new(1, 1), CellKind::Start);
        builder.place_on_free(Point::new(1, 1), CellKind::Wall);

        assert_eq!(builder.grid().get(Point::new(1, 1)), Some(CellKind::Start));
        assert_eq!(
            builder.rejections(),
            [Rejection {
                point: Point::new(1, 1),
                kind: CellKind::Wall,
                reason: RejectReason::Occupied,
            }]
        );
    }

    #[test]
    fn test_rejection_display() {
        let rejection = Rejection {
            point: Point::new(0, 5),
            kind: CellKind::Wall,
            reason: RejectReason::OutOfBounds,
        };

        assert_eq!(
            rejection.to_string(),
            "could not place '1' at (0,5): the point is outside the grid"
        );
    }

    #[test]
    fn test_random_obstacles_fill_expected_count() {
        let mut builder = GridBuilder::new(5);
        builder.place(Point::new(1, 1), CellKind::Wall);
        builder.place(Point::new(3, 3), CellKind::Start);
        builder.place(Point::new(5, 5), CellKind::Goal);

        let mut rng = StdRng::seed_from_u64(42);
        builder
            .place_random_obstacles(10, &mut rng)
            .expect("placement within capacity should succeed");

        assert_eq!(builder.grid().free_cells(), 25 - 3 - 10);
        assert_eq!(builder.grid().get(Point::new(3, 3)), Some(CellKind::Start));
        assert_eq!(builder.grid().get(Point::new(5, 5)), Some(CellKind::Goal));
    }

    #[test]
    fn test_random_obstacles_never_touch_markers() {
        for seed in 0..20 {
            let mut builder = GridBuilder::new(3);
            builder.place(Point::new(1, 2), CellKind::Start);
            builder.place(Point::new(3, 1), CellKind::Goal);

            let mut rng = StdRng::seed_from_u64(seed);
            builder
                .place_random_obstacles(7, &mut rng)
                .expect("placement within capacity should succeed");

            assert_eq!(builder.grid().get(Point::new(1, 2)), Some(CellKind::Start));
            assert_eq!(builder.grid().get(Point::new(3, 1)), Some(CellKind::Goal));
            assert_eq!(builder.grid().free_cells(), 0);
        }
    }

    #[test]
    fn test_random_obstacles_exhaustive_fill_is_deterministic() {
        for seed in 0..20 {
            let mut builder = GridBuilder::new(2);
            builder.place_on_free(Point::new(1, 1), CellKind::Start);
            builder.place_on_free(Point::new(2, 2), CellKind::Goal);

            let mut rng = StdRng::seed_from_u64(seed);
            builder
                .place_random_obstacles(2, &mut rng)
                .expect("placement within capacity should succeed");

            assert_eq!(builder.grid().render(), "I1\n1X\n");
        }
    }

    #[test]
    fn test_random_obstacles_over_capacity_fails_fast() {
        let mut builder = GridBuilder::new(2);
        builder.place_on_free(Point::new(1, 1), CellKind::Start);
        builder.place_on_free(Point::new(2, 2), CellKind::Goal);

        let mut rng = StdRng::seed_from_u64(1);
        let result = builder.place_random_obstacles(4, &mut rng);

        assert!(result.is_err());
    }

    #[test]
    fn test_random_obstacles_zero_count_is_noop() {
        let mut builder = GridBuilder::new(3);

        let mut rng = StdRng::seed_from_u64(7);
        builder
            .place_random_obstacles(0, &mut rng)
            .expect("zero obstacles should always succeed");

        assert_eq!(builder.grid().free_cells(), 9);
    }

    #[test]
    fn test_apply_end_to_end_scenario() {
        let config = Config {
            dimension: 3,
            obstacles: vec![Point::new(1, 1)],
            random_obstacles: 0,
            start: Point::new(2, 2),
            goal: Point::new(3, 3),
        };

        let mut builder = GridBuilder::new(config.dimension);
        let mut rng = StdRng::seed_from_u64(0);
        builder
            .apply(&config, &mut rng)
            .expect("scenario within capacity should build");

        assert!(builder.rejections().is_empty());
        assert_eq!(builder.grid().render(), "100\n0I0\n00X\n");
    }

    #[test]
    fn test_apply_drops_out_of_range_obstacle_and_continues() {
        let config = Config {
            dimension: 3,
            obstacles: vec![Point::new(9, 9), Point::new(1, 3)],
            random_obstacles: 0,
            start: Point::new(2, 2),
            goal: Point::new(3, 3),
        };

        let mut builder = GridBuilder::new(config.dimension);
        let mut rng = StdRng::seed_from_u64(0);
        builder
            .apply(&config, &mut rng)
            .expect("scenario within capacity should build");

        assert_eq!(builder.rejections().len(), 1);
        assert_eq!(builder.grid().render(), "001\n0I0\n00X\n");
    }
}
