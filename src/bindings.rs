//! The owner-facing grid store exported to JavaScript.
//!
//! A `GridStore` wraps the core [`DataFrame`] for a JS grid widget: the
//! widget constructs it with fixed bounds, registers a change callback, and
//! drives edits and pastes through it. Locations arrive as `{x, y}` objects,
//! `[x, y]` pairs, or "A1"-style reference strings; regions are "A1:B10"
//! range strings. Bulk data crosses the boundary as row-major arrays of
//! arrays with `null` for absent cells.

use js_sys::Function;
use wasm_bindgen::prelude::*;

use crate::cell_ref;
use crate::dataframe::DataFrame;
use crate::error::{GridError, Result};
use crate::types::{CellValue, Frame, Location, Point};

fn to_js(e: GridError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn resolve_location(value: &JsValue) -> Result<Point> {
    let location: Location = serde_wasm_bindgen::from_value(value.clone())
        .map_err(|_| GridError::InvalidLocation(format!("{value:?}")))?;
    location.resolve()
}

fn resolve_range(range: &str) -> Result<Frame> {
    cell_ref::parse_range(range).ok_or_else(|| GridError::InvalidLocation(range.to_string()))
}

/// The sparse grid store exported to JavaScript.
#[wasm_bindgen]
pub struct GridStore {
    inner: DataFrame<CellValue>,
}

#[wasm_bindgen]
impl GridStore {
    /// Create a store with the given inclusive bounds.
    #[wasm_bindgen(constructor)]
    pub fn new(
        origin_x: u32,
        origin_y: u32,
        corner_x: u32,
        corner_y: u32,
    ) -> std::result::Result<GridStore, JsValue> {
        console_error_panic_hook::set_once();

        let bounds = Frame::new((origin_x, origin_y), (corner_x, corner_y)).map_err(to_js)?;
        Ok(Self {
            inner: DataFrame::new(bounds),
        })
    }

    /// Create a store bounded by a range reference like "A1:J20".
    pub fn from_range(range: &str) -> std::result::Result<GridStore, JsValue> {
        console_error_panic_hook::set_once();

        let bounds = resolve_range(range).map_err(to_js)?;
        Ok(Self {
            inner: DataFrame::new(bounds),
        })
    }

    /// Register a JS callback invoked after each mutation with the affected
    /// region: `{x, y}` for a single-cell write, `{origin, corner}` for a
    /// bulk load or clear. Passing `null` unregisters; a second registration
    /// replaces the first.
    pub fn set_on_change(&mut self, callback: Option<Function>) {
        match callback {
            Some(callback) => self.inner.set_on_change(move |region| {
                let payload = serde_wasm_bindgen::to_value(&region).unwrap_or(JsValue::NULL);
                let _ = callback.call1(&JsValue::NULL, &payload);
            }),
            None => self.inner.clear_on_change(),
        }
    }

    /// The declared bounds as `{origin, corner}`.
    pub fn bounds(&self) -> std::result::Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.bounds())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// The declared bounds as a range reference like "A1:J20".
    #[must_use]
    pub fn bounds_range(&self) -> String {
        cell_ref::format_range(self.inner.bounds())
    }

    /// Write one cell; `null`/`undefined` removes it. Not bounds-checked.
    pub fn put_at(&mut self, location: JsValue, value: JsValue) -> std::result::Result<(), JsValue> {
        let point = resolve_location(&location).map_err(to_js)?;
        let value: Option<CellValue> = serde_wasm_bindgen::from_value(value)
            .map_err(|e| JsValue::from_str(&format!("Invalid cell value: {e}")))?;
        self.inner.put_at(point, value);
        Ok(())
    }

    /// Write one cell from raw edit input, detecting its type the way the
    /// editor does: empty clears, "true"/"false" is boolean, numerics are
    /// numbers, anything else is text.
    pub fn put_text(&mut self, location: JsValue, input: &str) -> std::result::Result<(), JsValue> {
        let point = resolve_location(&location).map_err(to_js)?;
        self.inner.put_at(point, CellValue::detect(input));
        Ok(())
    }

    /// Read one cell; `undefined` for an in-bounds cell with no entry.
    /// Fails for a location outside the declared bounds.
    pub fn get_at(&self, location: JsValue) -> std::result::Result<JsValue, JsValue> {
        let point = resolve_location(&location).map_err(to_js)?;
        let value = self.inner.get_at(point).map_err(to_js)?;
        serde_wasm_bindgen::to_value(&value).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Bulk-load a row-major array of arrays anchored at `origin`.
    /// All-or-nothing; the change callback fires once with the loaded region.
    pub fn load_from_array(
        &mut self,
        rows: JsValue,
        origin: JsValue,
    ) -> std::result::Result<(), JsValue> {
        let origin = resolve_location(&origin).map_err(to_js)?;
        let rows: Vec<Vec<Option<CellValue>>> = serde_wasm_bindgen::from_value(rows)
            .map_err(|e| JsValue::from_str(&format!("Invalid data rows: {e}")))?;
        self.inner.load_from_array(rows, origin).map_err(to_js)
    }

    /// Extract the values covering a range like "A1:B10", `null` where unset.
    pub fn data_array_for_frame(&self, range: &str) -> std::result::Result<JsValue, JsValue> {
        let frame = resolve_range(range).map_err(to_js)?;
        let data = self.inner.data_array_for_frame(frame).map_err(to_js)?;
        serde_wasm_bindgen::to_value(&data).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Extract everything written so far, addressed from the declared origin.
    pub fn to_array(&self) -> std::result::Result<JsValue, JsValue> {
        let data = self.inner.to_array().map_err(to_js)?;
        serde_wasm_bindgen::to_value(&data).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Extract the tight block of written data.
    pub fn to_array_tight(&self) -> std::result::Result<JsValue, JsValue> {
        let data = self.inner.to_array_tight().map_err(to_js)?;
        serde_wasm_bindgen::to_value(&data).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Remove every entry; the change callback fires once with the full
    /// declared bounds.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Number of present entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// True when no entries are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// True iff every cell within the declared bounds holds a value.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.inner.is_full()
    }

    /// The tightest range enclosing every present entry, as a range
    /// reference. Fails when the store is empty.
    pub fn min_range(&self) -> std::result::Result<String, JsValue> {
        let tight = self.inner.min_frame().map_err(to_js)?;
        Ok(cell_ref::format_range(tight))
    }

    /// Like `min_range`, anchored at the declared origin.
    pub fn min_range_from_origin(&self) -> std::result::Result<String, JsValue> {
        let tight = self.inner.min_frame_from_origin().map_err(to_js)?;
        Ok(cell_ref::format_range(tight))
    }

    /// Whether every cell of a range like "A1:B10" holds a present entry.
    pub fn has_complete_data(&self, range: &str) -> std::result::Result<bool, JsValue> {
        let frame = resolve_range(range).map_err(to_js)?;
        self.inner.has_complete_data_for_frame(frame).map_err(to_js)
    }
}
