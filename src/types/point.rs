use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cell_ref;
use crate::error::{GridError, Result};

/// An immutable grid coordinate: `x` is the column, `y` is the row, both
/// 0-indexed.
///
/// Points are plain values with structural equality; they double as the
/// sparse store's mapping key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl From<(u32, u32)> for Point {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

impl From<[u32; 2]> for Point {
    fn from([x, y]: [u32; 2]) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A cell address as it arrives over a serialized boundary (JS, JSON).
///
/// Accepts a point-shaped object, a two-element coordinate pair, or an
/// "A1"-style reference string, and normalizes to [`Point`] immediately via
/// [`Location::resolve`]. In-process Rust callers pass `impl Into<Point>`
/// instead and never see this type.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Location {
    /// `{"x": 1, "y": 2}`
    Point(Point),
    /// `[1, 2]` as `[x, y]`
    Pair([u32; 2]),
    /// `"B3"`
    Ref(String),
}

impl Location {
    /// Normalize to a concrete [`Point`].
    ///
    /// # Errors
    /// Returns [`GridError::InvalidLocation`] if the reference string does
    /// not parse.
    pub fn resolve(&self) -> Result<Point> {
        match self {
            Self::Point(p) => Ok(*p),
            Self::Pair([x, y]) => Ok(Point::new(*x, *y)),
            Self::Ref(s) => {
                cell_ref::parse_ref(s).ok_or_else(|| GridError::InvalidLocation(s.clone()))
            }
        }
    }
}
