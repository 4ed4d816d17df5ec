use serde::Serialize;
use std::fmt;

use super::Point;
use crate::error::{GridError, Result};

/// An axis-aligned rectangle over grid coordinates with *inclusive* bounds:
/// `origin` is the top-left cell, `corner` the bottom-right cell, and both
/// belong to the frame. A frame always covers at least one cell.
///
/// Fields are private so the `origin <= corner` invariant holds for every
/// live value; [`Frame::new`] rejects violations rather than swapping, so a
/// caller that constructed its bounds backwards hears about it immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Frame {
    origin: Point,
    corner: Point,
}

impl Frame {
    /// Create a frame from its top-left and bottom-right cells.
    ///
    /// # Errors
    /// Returns [`GridError::InvalidBounds`] if `corner` is above or left of
    /// `origin` on either axis.
    pub fn new(origin: impl Into<Point>, corner: impl Into<Point>) -> Result<Self> {
        let (origin, corner) = (origin.into(), corner.into());
        if corner.x < origin.x || corner.y < origin.y {
            return Err(GridError::InvalidBounds { origin, corner });
        }
        Ok(Self { origin, corner })
    }

    /// The bounding frame of two arbitrary points, in any order.
    #[must_use]
    pub fn spanning(a: impl Into<Point>, b: impl Into<Point>) -> Self {
        let (a, b) = (a.into(), b.into());
        Self {
            origin: Point::new(a.x.min(b.x), a.y.min(b.y)),
            corner: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// The collapsed frame covering a single cell.
    #[must_use]
    pub fn single(p: impl Into<Point>) -> Self {
        let p = p.into();
        Self {
            origin: p,
            corner: p,
        }
    }

    #[must_use]
    pub const fn origin(self) -> Point {
        self.origin
    }

    #[must_use]
    pub const fn corner(self) -> Point {
        self.corner
    }

    /// Number of columns covered, always >= 1.
    #[must_use]
    pub const fn width(self) -> u32 {
        (self.corner.x - self.origin.x).saturating_add(1)
    }

    /// Number of rows covered, always >= 1.
    #[must_use]
    pub const fn height(self) -> u32 {
        (self.corner.y - self.origin.y).saturating_add(1)
    }

    /// Number of cells covered, always >= 1.
    #[must_use]
    pub const fn area(self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// True for a frame that denotes a single cell (origin == corner).
    ///
    /// The selection collaborator reads this as "cursor only" as opposed to
    /// "range selected". A frame is never zero-area, so this is a semantic
    /// flag on the degenerate rectangle, not an emptiness test.
    #[must_use]
    pub fn is_collapsed(self) -> bool {
        self.origin == self.corner
    }

    /// Whether a cell lies within `[origin, corner]` on both axes.
    pub fn contains(self, loc: impl Into<Point>) -> bool {
        let p = loc.into();
        (self.origin.x..=self.corner.x).contains(&p.x)
            && (self.origin.y..=self.corner.y).contains(&p.y)
    }

    /// Whether another frame lies entirely within this one.
    #[must_use]
    pub fn contains_frame(self, other: Self) -> bool {
        self.contains(other.origin) && self.contains(other.corner)
    }

    /// All covered cells in row-major order: rows ascending in `y`, columns
    /// ascending in `x` within each row.
    ///
    /// The ordering is load-bearing: bulk array load and extract address
    /// cells in exactly this order. Recomputed on each call, never cached.
    pub fn points(self) -> impl Iterator<Item = Point> {
        self.rows().flatten()
    }

    /// The covered cells grouped by row, outer iterator in row order.
    pub fn rows(self) -> impl Iterator<Item = impl Iterator<Item = Point>> {
        let (x0, x1) = (self.origin.x, self.corner.x);
        (self.origin.y..=self.corner.y).map(move |y| (x0..=x1).map(move |x| Point::new(x, y)))
    }

    /// Invoke `visitor` once per row with that row's ordered coordinates.
    pub fn for_each_row(self, mut visitor: impl FnMut(&[Point])) {
        for row in self.rows() {
            let row: Vec<Point> = row.collect();
            visitor(&row);
        }
    }

    /// Row-grouped transform of every covered cell, preserving row-major
    /// order. This is the shape of the bulk array interchange format.
    pub fn map_rows<T>(self, mut transform: impl FnMut(Point) -> T) -> Vec<Vec<T>> {
        self.rows()
            .map(|row| row.map(&mut transform).collect())
            .collect()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.origin, self.corner)
    }
}
