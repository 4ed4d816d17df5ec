//! gridstore - sparse bounded grid data model for interactive grid widgets
//!
//! The data layer behind a grid widget, consumable as a plain Rust crate or
//! as a WebAssembly module:
//! - Integer coordinate geometry: [`Point`] and inclusive-bounds [`Frame`]
//! - A sparse, bounds-declared cell store: [`DataFrame`]
//! - Row-major bulk array load/extract that round-trips exactly
//! - Tight-extent derivation from what has actually been written
//! - A single synchronous change hook for owner resynchronization
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GridStore } from 'gridstore';
//! await init();
//! const store = GridStore.from_range('A1:J20');
//! store.set_on_change((region) => widget.invalidate(region));
//! store.put_text('B3', '42');
//! store.load_from_array([[1, 2], [3, null]], [0, 0]);
//! const block = store.to_array();
//! ```
//!
//! # Usage (Rust)
//!
//! ```
//! use gridstore::{DataFrame, Frame, Point};
//!
//! # fn main() -> gridstore::Result<()> {
//! let bounds = Frame::new((0, 0), (9, 19))?;
//! let mut store: DataFrame<i64> = DataFrame::new(bounds);
//! store.put_at((1, 2), Some(42));
//! assert_eq!(store.get_at(Point::new(1, 2))?, Some(&42));
//! # Ok(())
//! # }
//! ```

pub mod bindings;
pub mod cell_ref;
pub mod dataframe;
pub mod error;
pub mod types;

use wasm_bindgen::prelude::*;

// Re-export the owner-facing surface
pub use bindings::GridStore;
pub use dataframe::{ChangeHook, ChangedRegion, DataFrame};
pub use error::{GridError, Result};
pub use types::*;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
