use std::collections::BTreeMap;

use itertools::Itertools;
use log::{debug, trace};

use crate::error::{Error, Result};
use crate::grid::{Cell, Direction, Move};
use crate::segment::{Segment, Span};

/// Something that follows a walk over the grid and counts the distinct cells
/// it has touched, the starting cell included.
pub trait Coverage {
    fn origin(&self) -> Cell;

    fn position(&self) -> Cell;

    /// Applies one move and returns the updated count. An error leaves the
    /// state as it was.
    fn apply(&mut self, m: Move) -> Result<u64>;

    fn distinct_cell_count(&self) -> u64;

    fn apply_move(&mut self, direction: Direction, steps: i64) -> Result<u64> {
        self.apply(Move::new(direction, steps)?)
    }

    /// Applies moves in order, stopping at the first one that fails.
    fn apply_all<I>(&mut self, moves: I) -> Result<u64>
    where
        I: IntoIterator<Item = Move>,
        Self: Sized,
    {
        moves
            .into_iter()
            .try_fold(self.distinct_cell_count(), |_, m| self.apply(m))
    }
}

// History positions grouped by the line they lie on.
#[derive(Debug, Default)]
struct LineIndex {
    // Horizontal runs keyed by y.
    rows: BTreeMap<i64, Vec<usize>>,
    // Vertical runs keyed by x.
    columns: BTreeMap<i64, Vec<usize>>,
}

impl LineIndex {
    fn insert(&mut self, segment: &Segment, id: usize) {
        let lines = if segment.is_horizontal() {
            &mut self.rows
        } else {
            &mut self.columns
        };

        lines.entry(segment.fixed()).or_default().push(id);
    }

    // Everything that can share a cell with `segment`: the runs on its own
    // line, plus the perpendicular runs whose line crosses its span.
    fn candidates(&self, segment: &Segment) -> impl Iterator<Item = usize> + '_ {
        let (same, crossing) = if segment.is_horizontal() {
            (&self.rows, &self.columns)
        } else {
            (&self.columns, &self.rows)
        };
        let Span { start, end } = segment.span();

        same.get(&segment.fixed())
            .into_iter()
            .flatten()
            .chain(crossing.range(start..=end).flat_map(|(_, ids)| ids))
            .copied()
    }
}

/// Counts visited cells from the traced segments alone, so memory and time
/// depend on the number of moves and not on how far they go.
#[derive(Debug)]
pub struct Tracker {
    origin: Cell,
    position: Cell,
    total: u64,
    moves: Vec<Move>,

    // Append-only, the origin point first.
    history: Vec<Segment>,
    lines: LineIndex,
}

impl Tracker {
    pub fn new(origin: Cell) -> Tracker {
        let start = Segment::point(origin);
        let mut lines = LineIndex::default();
        lines.insert(&start, 0);

        Tracker {
            origin,
            position: origin,
            total: 1,
            moves: Vec::new(),
            history: vec![start],
            lines,
        }
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn history(&self) -> &[Segment] {
        &self.history
    }

    // Number of cells of `segment` that some earlier segment already covers.
    fn covered(&self, segment: &Segment) -> u64 {
        // Every overlap lies on the line of `segment`, so merging them is a
        // plain interval merge along its span.
        self.lines
            .candidates(segment)
            .filter_map(|id| segment.overlap(&self.history[id]))
            .inspect(|overlap| trace!("overlap {overlap:?}"))
            .map(|overlap| overlap.project(segment))
            .sorted_by_key(|span| span.start)
            .coalesce(collapse)
            .map(|span| span.len())
            .sum()
    }
}

impl Coverage for Tracker {
    fn origin(&self) -> Cell {
        self.origin
    }

    fn position(&self) -> Cell {
        self.position
    }

    fn apply(&mut self, m: Move) -> Result<u64> {
        let next = self.position.step(m.direction(), m.steps())?;
        let segment = Segment::new(self.position, next)?;

        let gained = segment.len() - self.covered(&segment);
        self.total = self
            .total
            .checked_add(gained)
            .ok_or(Error::CountOverflow {
                total: self.total,
                gained,
            })?;

        debug!(
            "{m} from {:?} to {next:?}: {gained} new cells, {} total",
            self.position, self.total
        );

        self.lines.insert(&segment, self.history.len());
        self.history.push(segment);
        self.moves.push(m);
        self.position = next;

        Ok(self.total)
    }

    fn distinct_cell_count(&self) -> u64 {
        self.total
    }
}

// Collapse overlapping or touching spans into one, or return both as Err.
//
// Expects `a.start <= b.start`.
fn collapse(a: Span, b: Span) -> std::result::Result<Span, (Span, Span)> {
    if b.start <= a.end.saturating_add(1) {
        Ok(Span {
            start: a.start,
            end: i64::max(a.end, b.end),
        })
    } else {
        Err((a, b))
    }
}
