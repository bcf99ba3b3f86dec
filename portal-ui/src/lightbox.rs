use std::cell::RefCell;
use std::rc::Rc;

use dioxus_logger::tracing;
use portal_core::{LightboxController, LightboxView, OverlayTarget, UiConfig};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlImageElement, KeyboardEvent, Node};

use crate::dom::{js_error, listen, required_element, target_element};

pub type SharedLightbox = Rc<RefCell<LightboxController<DomLightbox>>>;

/// Overlay container plus the image element inside it.
pub struct DomLightbox {
    overlay: Element,
    image: HtmlImageElement,
    open_class: String,
}

impl DomLightbox {
    pub fn new(overlay: Element, image: HtmlImageElement, open_class: &str) -> Self {
        Self {
            overlay,
            image,
            open_class: open_class.to_string(),
        }
    }
}

impl LightboxView for DomLightbox {
    fn show_image(&self, src: &str, alt: &str) {
        self.image.set_src(src);
        self.image.set_alt(alt);
    }

    fn set_open(&self, open: bool) {
        if let Err(e) = self
            .overlay
            .class_list()
            .toggle_with_force(&self.open_class, open)
        {
            tracing::warn!("Failed to toggle {}: {}", self.open_class, js_error(&e));
        }

        let hidden = if open { "false" } else { "true" };
        if let Err(e) = self.overlay.set_attribute("aria-hidden", hidden) {
            tracing::warn!("Failed to set aria-hidden: {}", js_error(&e));
        }
    }
}

/// Source and alt text a trigger opens with. `data-full` wins over `src`
/// so thumbnails can point at the full-size file.
pub fn trigger_source(trigger: &Element) -> Option<(String, String)> {
    let src = trigger
        .get_attribute("data-full")
        .filter(|full| !full.is_empty())
        .or_else(|| trigger.get_attribute("src"))?;
    let alt = trigger.get_attribute("alt").unwrap_or_default();
    Some((src, alt))
}

pub fn classify_click(overlay: &Element, close: Option<&Element>, target: &Node) -> OverlayTarget {
    if overlay.is_same_node(Some(target)) {
        return OverlayTarget::Background;
    }
    if close.is_some_and(|close| close.contains(Some(target))) {
        return OverlayTarget::CloseControl;
    }
    OverlayTarget::Content
}

/// Wire trigger images, overlay dismissal and Escape.
///
/// Returns `None`, leaving the page untouched, when the overlay is missing
/// or the image element is missing or not an `<img>`. The close control may
/// sit inside the overlay or anywhere else on the page.
pub fn mount_lightbox(document: &Document, config: &UiConfig) -> Option<SharedLightbox> {
    let found = required_element(document, &config.overlay_id).and_then(|overlay| {
        required_element(document, &config.image_id).map(|image| (overlay, image))
    });
    let (overlay, image) = match found {
        Ok(found) => found,
        Err(e) => {
            tracing::debug!("{e}, lightbox disabled");
            return None;
        }
    };
    let Ok(image) = image.dyn_into::<HtmlImageElement>() else {
        tracing::debug!("#{} is not an <img>, lightbox disabled", config.image_id);
        return None;
    };
    let close = document.get_element_by_id(&config.close_id);

    let controller = Rc::new(RefCell::new(LightboxController::new(DomLightbox::new(
        overlay.clone(),
        image.clone(),
        &config.open_class,
    ))));

    // Delegated so images added after load open too.
    let handle = controller.clone();
    let selector = config.trigger_selector.clone();
    let overlay_image = image.clone();
    let triggers = listen(document, "click", move |event| {
        let Some(target) = target_element(&event) else {
            return;
        };
        let trigger = match target.closest(&selector) {
            Ok(Some(trigger)) => trigger,
            Ok(None) => return,
            Err(e) => {
                tracing::warn!("Bad lightbox selector {selector:?}: {}", js_error(&e));
                return;
            }
        };
        if overlay_image.is_same_node(Some(trigger.unchecked_ref::<Node>())) {
            return;
        }
        if let Some((src, alt)) = trigger_source(&trigger) {
            event.prevent_default();
            handle.borrow_mut().open(&src, &alt);
        }
    });

    // A close control outside the overlay never sees the overlay's clicks.
    let outside_close = close
        .clone()
        .filter(|close| !overlay.contains(Some(close.unchecked_ref::<Node>())));

    let handle = controller.clone();
    let background = overlay.clone();
    let dismiss = listen(&overlay, "click", move |event| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
            return;
        };
        let hit = classify_click(&background, close.as_ref(), &target);
        handle.borrow_mut().handle_overlay_click(hit);
    });

    let detached_close = match outside_close {
        Some(close) => {
            let handle = controller.clone();
            listen(&close, "click", move |_event| {
                handle
                    .borrow_mut()
                    .handle_overlay_click(OverlayTarget::CloseControl);
            })
        }
        None => Ok(()),
    };

    let handle = controller.clone();
    let escape = listen(document, "keydown", move |event| {
        if let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) {
            handle.borrow_mut().handle_key(&key);
        }
    });

    for result in [triggers, dismiss, detached_close, escape] {
        if let Err(e) = result {
            tracing::warn!("Failed to wire lightbox listener: {}", js_error(&e));
        }
    }

    tracing::info!("Lightbox mounted on #{}", config.overlay_id);
    Some(controller)
}
