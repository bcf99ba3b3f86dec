use portal_core::{Result as UiResult, UiError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, HtmlScriptElement};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Render a thrown JS value for logs.
pub fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Attach `handler` to `target` for the rest of the page lifetime.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;

    // Keep listener alive for app lifetime.
    closure.forget();
    Ok(())
}

/// Run `ready` once the document has been parsed.
pub fn on_ready<F>(document: &Document, ready: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    if document.ready_state() != "loading" {
        ready();
        return Ok(());
    }

    let callback = Closure::once_into_js(ready);
    document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
}

/// Element the page must provide for a feature to be wired.
pub fn required_element(document: &Document, id: &str) -> UiResult<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| UiError::MissingElement(format!("#{id}")))
}

/// Body text of an inline `<script>` element, if present.
pub fn inline_script_text(document: &Document, id: &str) -> Option<String> {
    let script: HtmlScriptElement = document.get_element_by_id(id)?.dyn_into().ok()?;
    script.text().ok()
}

/// The event target as an element, if it is one.
pub fn target_element(event: &web_sys::Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}
