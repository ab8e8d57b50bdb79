//! Brute-force counterpart of [`Tracker`](crate::tracker::Tracker) used to check it: every visited
//! cell goes into a set. Memory grows with the distance walked, so this only
//! exists in tests.

use std::collections::HashSet;

use crate::error::Result;
use crate::grid::{Cell, Move};
use crate::segment::Segment;
use crate::tracker::Coverage;

pub struct Oracle {
    origin: Cell,
    position: Cell,
    visited: HashSet<Cell>,
}

impl Oracle {
    pub fn new(origin: Cell) -> Oracle {
        Oracle {
            origin,
            position: origin,
            visited: HashSet::from([origin]),
        }
    }
}

impl Coverage for Oracle {
    fn origin(&self) -> Cell {
        self.origin
    }

    fn position(&self) -> Cell {
        self.position
    }

    fn apply(&mut self, m: Move) -> Result<u64> {
        let next = self.position.step(m.direction(), m.steps())?;
        self.visited.extend(Segment::new(self.position, next)?.cells());
        self.position = next;

        Ok(self.distinct_cell_count())
    }

    fn distinct_cell_count(&self) -> u64 {
        self.visited.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::grid::Direction;
    use crate::tracker::Tracker;
    use proptest::prelude::*;

    fn a_move(max_steps: i64) -> impl Strategy<Value = Move> {
        (prop::sample::select(Direction::ALL.to_vec()), 1..=max_steps)
            .prop_map(|(direction, steps)| Move::new(direction, steps).unwrap())
    }

    fn walk<C: Coverage>(coverage: &mut C, moves: &[Move]) -> Vec<u64> {
        moves.iter().map(|m| coverage.apply(*m).unwrap()).collect()
    }

    #[test]
    fn test_oracle_idle() {
        let oracle = Oracle::new(Cell::new(3, 3));

        assert_eq!(oracle.distinct_cell_count(), 1);
        assert_eq!(oracle.origin(), oracle.position());
    }

    #[test]
    fn test_oracle_example() {
        let mut oracle = Oracle::new(Cell::default());

        oracle.apply_move(Direction::East, 2).unwrap();
        oracle.apply_move(Direction::North, 1).unwrap();

        assert_eq!(oracle.distinct_cell_count(), 4);
        assert_eq!(oracle.position(), Cell::new(2, 1));
    }

    proptest! {
        // Short steps keep the walk tangled, so most moves overlap something.
        #[test]
        fn test_matches_oracle_dense(
            x in -1000i64..1000,
            y in -1000i64..1000,
            moves in prop::collection::vec(a_move(6), 0..300)
        ) {
            let origin = Cell::new(x, y);
            let mut tracker = Tracker::new(origin);
            let mut oracle = Oracle::new(origin);

            for m in moves {
                prop_assert_eq!(tracker.apply(m)?, oracle.apply(m)?);
                prop_assert_eq!(tracker.position(), oracle.position());
            }
        }

        #[test]
        fn test_matches_oracle_sparse(
            x in -1000i64..1000,
            y in -1000i64..1000,
            moves in prop::collection::vec(a_move(100), 0..300)
        ) {
            let origin = Cell::new(x, y);

            prop_assert_eq!(
                walk(&mut Tracker::new(origin), &moves),
                walk(&mut Oracle::new(origin), &moves)
            );
        }

        #[test]
        fn test_count_ignores_origin(
            x in any::<i32>(),
            y in any::<i32>(),
            moves in prop::collection::vec(a_move(1_000_000), 0..100)
        ) {
            let mut home = Tracker::new(Cell::default());
            let mut away = Tracker::new(Cell::new(x as i64, y as i64));

            prop_assert_eq!(walk(&mut home, &moves), walk(&mut away, &moves));
        }
    }
}
