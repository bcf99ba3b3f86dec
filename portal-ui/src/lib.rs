//! Browser bindings for the portal page behaviors
//!
//! [`start`] reads the optional page config, waits for the document and
//! mounts both controllers. Each mount is independent; a page missing the
//! lightbox markup still gets theming and vice versa.

pub mod dom;
pub mod lightbox;
pub mod storage;
pub mod theme;

use dioxus_logger::tracing;
use portal_core::UiConfig;
use wasm_bindgen::JsValue;

pub use lightbox::{mount_lightbox, DomLightbox, SharedLightbox};
pub use storage::{LocalStorage, PreferenceStore};
pub use theme::{mount_theme, DomTheme, SharedTheme};

/// Id of the inline JSON `<script>` that may override [`UiConfig`] fields.
pub const CONFIG_SCRIPT_ID: &str = "portal-ui-config";

pub fn load_config(document: &web_sys::Document) -> UiConfig {
    let raw = dom::inline_script_text(document, CONFIG_SCRIPT_ID);
    UiConfig::from_json_or_default(raw.as_deref())
}

/// Mount both controllers once the document is ready.
///
/// Called by the `portal-ui` binary after logging is initialized.
pub fn start() -> Result<(), JsValue> {
    let document = dom::document().ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let config = load_config(&document);

    let ready_document = document.clone();
    dom::on_ready(&document, move || {
        let lightbox = mount_lightbox(&ready_document, &config);
        let theme = mount_theme(&ready_document, &config);
        tracing::info!(
            "Portal UI ready (lightbox: {}, theme: {})",
            lightbox.is_some(),
            theme.is_some()
        );
    })
}
