use crate::error::{Error, Result};
use crate::grid::Cell;

/// An inclusive range of coordinates along one axis, `start <= end`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Span {
    pub start: i64,
    pub end: i64,
}

impl Span {
    pub fn new(a: i64, b: i64) -> Span {
        if a <= b {
            Span { start: a, end: b }
        } else {
            Span { start: b, end: a }
        }
    }

    pub fn len(&self) -> u64 {
        self.end.abs_diff(self.start) + 1
    }

    pub fn contains(&self, v: i64) -> bool {
        (self.start..=self.end).contains(&v)
    }

    pub fn intersect(&self, other: &Span) -> Option<Span> {
        let start = i64::max(self.start, other.start);
        let end = i64::min(self.end, other.end);

        Some(Span { start, end }).filter(|s| s.start <= s.end)
    }
}

/// The cells traced by one straight move.
///
/// A single cell is stored as a one-cell horizontal run, so `is_horizontal`
/// holds for the origin point as well.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Segment {
    Horizontal { y: i64, span: Span },
    Vertical { x: i64, span: Span },
}

impl Segment {
    pub fn new(a: Cell, b: Cell) -> Result<Segment> {
        if a.y == b.y {
            Ok(Segment::Horizontal {
                y: a.y,
                span: Span::new(a.x, b.x),
            })
        } else if a.x == b.x {
            Ok(Segment::Vertical {
                x: a.x,
                span: Span::new(a.y, b.y),
            })
        } else {
            Err(Error::NotAxisAligned(a, b))
        }
    }

    pub fn point(cell: Cell) -> Segment {
        Segment::Horizontal {
            y: cell.y,
            span: Span::new(cell.x, cell.x),
        }
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Segment::Horizontal { .. })
    }

    /// The coordinate every cell of the segment shares: `y` for horizontal
    /// runs, `x` for vertical ones.
    pub fn fixed(&self) -> i64 {
        match *self {
            Segment::Horizontal { y, .. } => y,
            Segment::Vertical { x, .. } => x,
        }
    }

    pub fn span(&self) -> Span {
        match *self {
            Segment::Horizontal { span, .. } | Segment::Vertical { span, .. } => span,
        }
    }

    pub fn low(&self) -> Cell {
        match *self {
            Segment::Horizontal { y, span } => Cell::new(span.start, y),
            Segment::Vertical { x, span } => Cell::new(x, span.start),
        }
    }

    pub fn high(&self) -> Cell {
        match *self {
            Segment::Horizontal { y, span } => Cell::new(span.end, y),
            Segment::Vertical { x, span } => Cell::new(x, span.end),
        }
    }

    /// Number of distinct cells covered.
    pub fn len(&self) -> u64 {
        self.span().len()
    }

    /// The cells shared by both segments.
    ///
    /// Parallel segments share a sub-run when they lie on the same line.
    /// Perpendicular segments share at most the crossing cell.
    pub fn overlap(&self, other: &Segment) -> Option<Segment> {
        use Segment::*;

        match (*self, *other) {
            (Horizontal { y: y0, span: s0 }, Horizontal { y: y1, span: s1 }) if y0 == y1 => {
                s0.intersect(&s1).map(|span| Horizontal { y: y0, span })
            }
            (Vertical { x: x0, span: s0 }, Vertical { x: x1, span: s1 }) if x0 == x1 => {
                s0.intersect(&s1).map(|span| Vertical { x: x0, span })
            }
            (Horizontal { y, span: h }, Vertical { x, span: v })
            | (Vertical { x, span: v }, Horizontal { y, span: h }) => {
                Some(Segment::point(Cell::new(x, y))).filter(|_| h.contains(x) && v.contains(y))
            }
            _ => None,
        }
    }

    /// The coordinates of `self` along the varying axis of `onto`.
    ///
    /// Only meaningful when `self` lies on or crosses the line of `onto`,
    /// which holds for everything `overlap` returns.
    pub fn project(&self, onto: &Segment) -> Span {
        use Segment::*;

        match (*onto, *self) {
            (Horizontal { .. }, Horizontal { span, .. })
            | (Vertical { .. }, Vertical { span, .. }) => span,
            (Horizontal { .. }, Vertical { x, .. }) => Span::new(x, x),
            (Vertical { .. }, Horizontal { y, .. }) => Span::new(y, y),
        }
    }

    /// Every cell of the segment, from `low` to `high`. Only the brute-force
    /// counter in the tests walks segments cell by cell.
    #[cfg(test)]
    pub fn cells(&self) -> Box<dyn Iterator<Item = Cell>> {
        match *self {
            Segment::Horizontal { y, span } => {
                Box::new((span.start..=span.end).map(move |x| Cell { x, y }))
            }
            Segment::Vertical { x, span } => {
                Box::new((span.start..=span.end).map(move |y| Cell { x, y }))
            }
        }
    }
}
