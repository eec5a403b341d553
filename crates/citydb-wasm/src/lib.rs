//! citydb-wasm — WebAssembly bindings for citydb-core
//!
//! This crate exposes the citydb query engine to JavaScript. It embeds the
//! bundled dataset in the WASM binary and builds the store once, on module
//! start.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`)
//! - `getCities({ searchTerm, sortMethod, offset, limit })` returning
//!   `{ records, totalEntries }`; every parameter is optional
//! - `getCityCount()`, `getStats()`
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { getCities } from 'citydb-wasm';
//!
//! async function main() {
//!   await init();
//!   const { records, totalEntries } = getCities({
//!     searchTerm: 'canada',
//!     sortMethod: [{ key: 'population', direction: 'descending' }],
//!     limit: 10,
//!   });
//!   console.log(totalEntries, records[0].name);
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - Searching for `"error"` throws `Error("Something terrible just happened!")`.
//!   Presentation layers are expected to catch it and show it inline.
//! - Negative `offset`/`limit` values are clamped to zero.

use citydb_core::prelude::*;
use once_cell::sync::OnceCell;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;
use std::result::Result;

// 1. Embed the Dataset
static EMBEDDED_DATASET: &str = include_str!("../../citydb-core/data/worldcities.json");

// 2. Static Instance
static STORE: OnceCell<CityStore> = OnceCell::new();

fn store() -> Result<&'static CityStore, JsError> {
    Ok(STORE.get_or_try_init(|| CityStore::from_reader_json(EMBEDDED_DATASET.as_bytes()))?)
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing CityDB WASM module...".into());

    match store() {
        Ok(s) => web_sys::console::log_1(&format!("✓ Loaded {} cities", s.len()).into()),
        Err(_) => web_sys::console::error_1(&"✗ Embedded dataset failed to load".into()),
    }
}

/* --------------------------------------------------------------------------
   Query
-------------------------------------------------------------------------- */

/// Filter, sort and paginate the embedded store.
///
/// `params` may be `undefined`, `null` or a partial
/// `{ searchTerm, sortMethod, offset, limit }` object.
#[wasm_bindgen(js_name = getCities)]
pub fn get_cities(params: JsValue) -> Result<JsValue, JsError> {
    let request: QueryRequest = if params.is_undefined() || params.is_null() {
        QueryRequest::default()
    } else {
        from_value(params)?
    };
    let result = store()?.query(&request)?;
    Ok(to_value(&result)?)
}

/* --------------------------------------------------------------------------
   Basic Queries
-------------------------------------------------------------------------- */

#[wasm_bindgen(js_name = getCityCount)]
pub fn get_city_count() -> Result<usize, JsError> {
    Ok(store()?.len())
}

#[wasm_bindgen(js_name = getStats)]
pub fn get_stats() -> Result<JsValue, JsError> {
    Ok(to_value(&store()?.stats())?)
}
