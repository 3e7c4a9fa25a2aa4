//! HTML document served at `/`
//!
//! The body carries the server-rendered form so the page is usable to look
//! at before the wasm bundle loads; the module script then mounts the app
//! over the same root and takes over event handling.

use admitcard_core::view::render_app;
use admitcard_core::{FormState, PortalConfig};
use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Element the app is mounted into
pub const ROOT_ID: &str = "app";

/// Where the wasm-pack bundle is served from
pub const BUNDLE_PATH: &str = "/pkg/admitcard_wasm.js";

pub fn page_document(config: &PortalConfig, config_json: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "UPPRPB - Candidate Login" }
                link rel="icon" href=(config.logo_src);
                script src="https://cdn.tailwindcss.com" {}
            }
            body {
                div id=(ROOT_ID) {
                    (render_app(&FormState::new(), config))
                }
                script type="module" {
                    (PreEscaped(bootstrap_script(config_json)))
                }
            }
        }
    }
}

/// Module script that loads the bundle and mounts the app.
///
/// The configuration is embedded as a JS string literal; `</` is broken
/// up so the JSON can never close the script element.
fn bootstrap_script(config_json: &str) -> String {
    let literal = serde_json::Value::String(config_json.to_string())
        .to_string()
        .replace("</", "<\\/");
    format!(
        "import init, {{ AdmitCardApp }} from '{bundle}';\n\
         await init();\n\
         AdmitCardApp.mount('{root}', {literal});\n",
        bundle = BUNDLE_PATH,
        root = ROOT_ID,
        literal = literal,
    )
}
