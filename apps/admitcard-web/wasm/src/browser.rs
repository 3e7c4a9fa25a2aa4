//! Browser implementations of the probe and download capabilities

use admitcard_core::{DownloadError, FileDownloader, FileProbe, ProbeError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlAnchorElement, Request, RequestInit, Response};

/// Existence check with `window.fetch`
#[derive(Debug, Default, Clone, Copy)]
pub struct FetchProbe;

impl FileProbe for FetchProbe {
    async fn probe(&self, url: &str) -> Result<(), ProbeError> {
        let window =
            web_sys::window().ok_or_else(|| ProbeError::Transport("No window".to_string()))?;

        let opts = RequestInit::new();
        opts.set_method("GET");
        let request = Request::new_with_str_and_init(url, &opts).map_err(transport_error)?;

        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(transport_error)?;
        let response: Response = response.dyn_into().map_err(transport_error)?;

        if response.ok() {
            Ok(())
        } else {
            Err(ProbeError::Status(response.status()))
        }
    }
}

/// Download through a transient `<a download>` element
#[derive(Debug, Default, Clone, Copy)]
pub struct AnchorDownloader;

impl AnchorDownloader {
    fn click_link(url: &str, suggested_name: &str) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("No document")?;
        let body = document.body().ok_or("No document body")?;

        let link: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
        link.set_href(url);
        link.set_download(suggested_name);

        body.append_child(&link)?;
        link.click();
        body.remove_child(&link)?;

        Ok(())
    }
}

impl FileDownloader for AnchorDownloader {
    fn trigger(&self, url: &str, suggested_name: &str) -> Result<(), DownloadError> {
        Self::click_link(url, suggested_name).map_err(|e| DownloadError(describe_js_error(&e)))
    }
}

fn transport_error(err: JsValue) -> ProbeError {
    ProbeError::Transport(describe_js_error(&err))
}

/// Best-effort message from a thrown JS value
pub(crate) fn describe_js_error(err: &JsValue) -> String {
    if let Some(s) = err.as_string() {
        return s;
    }
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    format!("{:?}", err)
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_anchor_is_removed_after_click() {
        let document = web_sys::window().unwrap().document().unwrap();
        let before = document.get_elements_by_tag_name("a").length();

        // data: URL keeps the click from navigating anywhere
        let result = AnchorDownloader.trigger("data:application/pdf,", "UP1.pdf");

        assert!(result.is_ok());
        assert_eq!(document.get_elements_by_tag_name("a").length(), before);
    }

    #[wasm_bindgen_test]
    async fn test_probe_missing_file_is_error() {
        let result = FetchProbe.probe("/files/definitely-missing-admit-card.pdf").await;
        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    fn test_describe_string_error() {
        assert_eq!(describe_js_error(&JsValue::from_str("boom")), "boom");
    }
}
