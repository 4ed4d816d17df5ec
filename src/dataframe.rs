//! The sparse grid store.
//!
//! A [`DataFrame`] is a [`Frame`] of declared bounds plus a sparse mapping
//! from coordinate to value. It is the single source of truth behind a grid
//! widget: edits and pastes land here, rendering and selection read from
//! here, and a registered change hook tells the owner what region to
//! resynchronize after each mutation.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{GridError, Result};
use crate::types::{Frame, Point};

/// The region a mutation touched, delivered to the change hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ChangedRegion {
    /// A single-cell write.
    Cell(Point),
    /// A bulk load or clear spanning a rectangular region.
    Span(Frame),
}

/// Single-subscriber change hook; the owner replaces it wholesale.
pub type ChangeHook = Box<dyn FnMut(ChangedRegion)>;

/// A bounded sparse store of cell values.
///
/// The mapping holds an entry for a coordinate iff a present value was last
/// written there; writing `None` removes the entry instead of storing a
/// sentinel. Reads are bounds-checked, writes are not: bulk loads validate
/// their whole region once up front and callers may stage data beyond the
/// declared bounds (see [`DataFrame::put_at`]).
///
/// Bounds are fixed at construction and never change.
pub struct DataFrame<V> {
    bounds: Frame,
    cells: HashMap<Point, V>,
    on_change: Option<ChangeHook>,
}

impl<V> DataFrame<V> {
    #[must_use]
    pub fn new(bounds: Frame) -> Self {
        Self {
            bounds,
            cells: HashMap::new(),
            on_change: None,
        }
    }

    /// The declared addressable bounds.
    #[must_use]
    pub fn bounds(&self) -> Frame {
        self.bounds
    }

    /// Whether a cell lies within the declared bounds.
    pub fn contains(&self, loc: impl Into<Point>) -> bool {
        self.bounds.contains(loc)
    }

    /// Whether a frame lies entirely within the declared bounds.
    #[must_use]
    pub fn contains_frame(&self, frame: Frame) -> bool {
        self.bounds.contains_frame(frame)
    }

    /// Number of cells the declared bounds cover.
    #[must_use]
    pub fn area(&self) -> u64 {
        self.bounds.area()
    }

    /// Number of present entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when no entries are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True iff every cell within the declared bounds holds a value.
    ///
    /// A cardinality check, not a scan: entry count against area. Correct
    /// because bounds containment is enforced on every read path.
    #[must_use]
    pub fn is_full(&self) -> bool {
        u64::try_from(self.cells.len()).is_ok_and(|n| n == self.bounds.area())
    }

    /// Present entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &V)> + '_ {
        self.cells.iter().map(|(p, v)| (*p, v))
    }

    /// Register the change hook. A second registration replaces the first;
    /// there is at most one subscriber.
    pub fn set_on_change(&mut self, hook: impl FnMut(ChangedRegion) + 'static) {
        self.on_change = Some(Box::new(hook));
    }

    /// Remove the change hook, if any.
    pub fn clear_on_change(&mut self) {
        self.on_change = None;
    }

    fn notify(&mut self, region: ChangedRegion) {
        if let Some(hook) = self.on_change.as_mut() {
            trace!(?region, "dispatching change notification");
            hook(region);
        }
    }

    fn write(&mut self, point: Point, value: Option<V>) {
        match value {
            Some(v) => {
                self.cells.insert(point, v);
            }
            None => {
                self.cells.remove(&point);
            }
        }
    }

    /// Write a single cell and notify the change hook.
    ///
    /// `None` removes any existing entry for the cell. No bounds check is
    /// performed, unlike [`DataFrame::get_at`], so callers can stage data
    /// before bounds are final, and bulk loads can validate a whole batch
    /// once instead of per cell. The hook fires once, synchronously, after
    /// the mutation, with the written location.
    pub fn put_at(&mut self, loc: impl Into<Point>, value: Option<V>) {
        let point = loc.into();
        self.write(point, value);
        self.notify(ChangedRegion::Cell(point));
    }

    /// Write a single cell without notifying the change hook.
    pub fn put_at_silent(&mut self, loc: impl Into<Point>, value: Option<V>) {
        self.write(loc.into(), value);
    }

    /// Read a cell.
    ///
    /// Returns `Ok(None)` for an in-bounds cell with no entry.
    ///
    /// # Errors
    /// [`GridError::OutOfBounds`] if the location is not contained in the
    /// declared bounds.
    pub fn get_at(&self, loc: impl Into<Point>) -> Result<Option<&V>> {
        let point = loc.into();
        if !self.bounds.contains(point) {
            return Err(GridError::OutOfBounds {
                point,
                bounds: self.bounds,
            });
        }
        Ok(self.cells.get(&point))
    }

    /// Bulk-load a row-major block of values anchored at `origin`.
    ///
    /// Row index is the y offset from `origin`, column index the x offset.
    /// `None` entries remove existing cells, matching [`DataFrame::put_at`].
    /// All-or-nothing: the whole region is validated before the first write,
    /// so a failure leaves the store unmodified. The change hook fires once
    /// at the end with the loaded region, not once per cell.
    ///
    /// Empty input (no rows, or an empty first row) is a no-op: nothing is
    /// written and the hook does not fire.
    ///
    /// # Errors
    /// - [`GridError::OutOfBounds`] if `origin`, or the region the block
    ///   would occupy, is not contained in the declared bounds.
    /// - [`GridError::RaggedRows`] if any row's length differs from the
    ///   first row's.
    pub fn load_from_array(
        &mut self,
        data: Vec<Vec<Option<V>>>,
        origin: impl Into<Point>,
    ) -> Result<()> {
        let origin = origin.into();
        if !self.bounds.contains(origin) {
            return Err(GridError::OutOfBounds {
                point: origin,
                bounds: self.bounds,
            });
        }

        let Some(first) = data.first() else {
            return Ok(());
        };
        let expected = first.len();
        if expected == 0 {
            return Ok(());
        }
        for (row, values) in data.iter().enumerate() {
            if values.len() != expected {
                return Err(GridError::RaggedRows {
                    row,
                    len: values.len(),
                    expected,
                });
            }
        }

        let span = block_frame(origin, data.len(), expected).ok_or(GridError::OutOfBounds {
            point: origin,
            bounds: self.bounds,
        })?;
        if !self.bounds.contains_frame(span) {
            return Err(GridError::OutOfBounds {
                point: span.corner(),
                bounds: self.bounds,
            });
        }

        debug!(%span, rows = data.len(), cols = expected, "bulk load");
        let mut y = origin.y;
        for values in data {
            let mut x = origin.x;
            for value in values {
                self.write(Point::new(x, y), value);
                x = x.saturating_add(1);
            }
            y = y.saturating_add(1);
        }

        self.notify(ChangedRegion::Span(span));
        Ok(())
    }

    /// Extract a row-major block of values covering `frame`, `None` where a
    /// cell has no entry. The exact inverse of [`DataFrame::load_from_array`]'s
    /// addressing: round-tripping a rectangular region reproduces it.
    ///
    /// # Errors
    /// [`GridError::NotContained`] if `frame` escapes the declared bounds.
    pub fn data_array_for_frame(&self, frame: Frame) -> Result<Vec<Vec<Option<V>>>>
    where
        V: Clone,
    {
        if !self.bounds.contains_frame(frame) {
            return Err(GridError::NotContained {
                frame,
                bounds: self.bounds,
            });
        }
        Ok(frame.map_rows(|p| self.cells.get(&p).cloned()))
    }

    /// Extract everything written so far, addressed from the declared
    /// origin: rows span from the declared top-left out to the tight corner.
    ///
    /// # Errors
    /// Propagates [`DataFrame::min_frame_from_origin`]'s failures, notably
    /// [`GridError::EmptyStore`] when nothing has been written.
    pub fn to_array(&self) -> Result<Vec<Vec<Option<V>>>>
    where
        V: Clone,
    {
        self.data_array_for_frame(self.min_frame_from_origin()?)
    }

    /// Extract the tight block of written data: rows span the minimal frame
    /// enclosing every present entry.
    ///
    /// # Errors
    /// Propagates [`DataFrame::min_frame`]'s failures, notably
    /// [`GridError::EmptyStore`] when nothing has been written.
    pub fn to_array_tight(&self) -> Result<Vec<Vec<Option<V>>>>
    where
        V: Clone,
    {
        self.data_array_for_frame(self.min_frame()?)
    }

    /// Remove every entry. The change hook fires once with the full declared
    /// bounds: "everything in this region may have changed".
    pub fn clear(&mut self) {
        debug!(bounds = %self.bounds, entries = self.cells.len(), "clearing store");
        self.cells.clear();
        self.notify(ChangedRegion::Span(self.bounds));
    }

    /// The tightest frame enclosing every present entry.
    ///
    /// # Errors
    /// [`GridError::EmptyStore`] when no entries are present; there is no
    /// meaningful minimum over nothing, and fabricating a degenerate frame
    /// would silently misreport the extent.
    pub fn min_frame(&self) -> Result<Frame> {
        let mut keys = self.cells.keys();
        let Some(&first) = keys.next() else {
            return Err(GridError::EmptyStore);
        };
        let (mut min, mut max) = (first, first);
        for p in keys {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Frame::new(min, max)
    }

    /// Like [`DataFrame::min_frame`], but anchored at the declared origin:
    /// how far data extends from the true top-left, not from wherever the
    /// first sparse value happens to sit.
    ///
    /// # Errors
    /// - [`GridError::EmptyStore`] when no entries are present.
    /// - [`GridError::InvalidBounds`] if staged out-of-bounds entries place
    ///   the tight corner above or left of the declared origin.
    pub fn min_frame_from_origin(&self) -> Result<Frame> {
        let tight = self.min_frame()?;
        Frame::new(self.bounds.origin(), tight.corner())
    }

    /// Whether every cell of `frame` holds a present entry. Short-circuits
    /// on the first missing cell.
    ///
    /// # Errors
    /// [`GridError::NotContained`] if `frame` escapes the declared bounds.
    pub fn has_complete_data_for_frame(&self, frame: Frame) -> Result<bool> {
        if !self.bounds.contains_frame(frame) {
            return Err(GridError::NotContained {
                frame,
                bounds: self.bounds,
            });
        }
        Ok(frame.points().all(|p| self.cells.contains_key(&p)))
    }
}

/// The frame a `rows x cols` block occupies when anchored at `origin`, or
/// `None` when it cannot be addressed (overflowing the coordinate space).
/// `rows` and `cols` must be non-zero.
fn block_frame(origin: Point, rows: usize, cols: usize) -> Option<Frame> {
    let dx = u32::try_from(cols.checked_sub(1)?).ok()?;
    let dy = u32::try_from(rows.checked_sub(1)?).ok()?;
    let corner = Point::new(origin.x.checked_add(dx)?, origin.y.checked_add(dy)?);
    Frame::new(origin, corner).ok()
}

impl<V> fmt::Debug for DataFrame<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataFrame")
            .field("bounds", &self.bounds)
            .field("entries", &self.cells.len())
            .field("has_change_hook", &self.on_change.is_some())
            .finish()
    }
}
