use std::cell::RefCell;
use std::rc::Rc;

use dioxus_logger::tracing;
use portal_core::{ThemeController, ThemeView, UiConfig};
use web_sys::{Document, Element};

use crate::dom::{js_error, listen, required_element};
use crate::storage::PreferenceStore;

pub type SharedTheme = Rc<RefCell<ThemeController<PreferenceStore, DomTheme>>>;

/// Applies the theme to `<body>`, the indicator icon and the toggle button.
pub struct DomTheme {
    root: Element,
    icon: Option<Element>,
    toggle: Option<Element>,
    dark_class: String,
}

impl DomTheme {
    pub fn new(
        root: Element,
        icon: Option<Element>,
        toggle: Option<Element>,
        dark_class: &str,
    ) -> Self {
        Self {
            root,
            icon,
            toggle,
            dark_class: dark_class.to_string(),
        }
    }
}

impl ThemeView for DomTheme {
    fn set_dark(&self, dark: bool) {
        if let Err(e) = self
            .root
            .class_list()
            .toggle_with_force(&self.dark_class, dark)
        {
            tracing::warn!("Failed to toggle {}: {}", self.dark_class, js_error(&e));
        }

        if let Some(toggle) = &self.toggle {
            let pressed = if dark { "true" } else { "false" };
            if let Err(e) = toggle.set_attribute("aria-pressed", pressed) {
                tracing::warn!("Failed to set aria-pressed: {}", js_error(&e));
            }
        }
    }

    fn set_icon(&self, glyph: &str) {
        if let Some(icon) = &self.icon {
            icon.set_text_content(Some(glyph));
        }
    }
}

/// Apply the stored preference and wire the toggle button.
///
/// Returns `None` only when the document has no root to theme. A page
/// without a toggle button still gets its stored theme applied. When
/// `localStorage` is blocked the preference is kept in memory instead.
pub fn mount_theme(document: &Document, config: &UiConfig) -> Option<SharedTheme> {
    let root = document.body().map(Element::from).or_else(|| document.document_element())?;
    let icon = document.get_element_by_id(&config.icon_id);
    let toggle = match required_element(document, &config.toggle_id) {
        Ok(toggle) => Some(toggle),
        Err(e) => {
            tracing::debug!("{e}, theme toggle disabled");
            None
        }
    };

    let view = DomTheme::new(root, icon, toggle.clone(), &config.dark_class);
    let store = PreferenceStore::for_key(&config.storage_key);
    let mut controller = ThemeController::new(store, view);
    let theme = controller.init();
    tracing::info!("Theme applied on load: {}", theme);

    let controller = Rc::new(RefCell::new(controller));

    let Some(toggle) = toggle else {
        return Some(controller);
    };

    let handle = controller.clone();
    let wired = listen(&toggle, "click", move |_event| {
        let theme = handle.borrow_mut().toggle();
        tracing::debug!("Theme toggled to {theme}");
    });
    if let Err(e) = wired {
        tracing::warn!("Failed to wire theme toggle: {}", js_error(&e));
    }

    Some(controller)
}
