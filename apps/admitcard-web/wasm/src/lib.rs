//! WASM bindings for the admit card download form
//!
//! State, validation and rendering come from `admitcard-core`; this crate
//! supplies the browser pieces: `fetch` for the existence probe, a
//! transient `<a download>` for the download, and DOM event wiring.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { AdmitCardApp } from './pkg/admitcard_wasm.js';
//!
//! await init();
//! const app = AdmitCardApp.mount("app", JSON.stringify({ static_file_root: "" }));
//! ```

pub mod app;
pub mod browser;

use wasm_bindgen::prelude::*;

pub use app::AdmitCardApp;
pub use browser::{AnchorDownloader, FetchProbe};

/// Initialize the WASM module
/// Called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the library version
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Download path for a registration number under `static_file_root`
#[wasm_bindgen]
pub fn admit_card_path(static_file_root: &str, registration_number: &str) -> String {
    admitcard_core::DownloadTarget::new(static_file_root, registration_number)
        .url()
        .to_string()
}
