use serde::Deserialize;

use crate::error::Result;

/// DOM hooks and storage key consumed by the controllers.
///
/// Every field has a default, so a page only spells out what it renames.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub overlay_id: String,
    pub image_id: String,
    pub close_id: String,
    /// Class marking the overlay as visible.
    pub open_class: String,
    /// CSS selector matching images that open the lightbox.
    pub trigger_selector: String,
    pub toggle_id: String,
    pub icon_id: String,
    /// Class set on `<body>` while dark mode is active.
    pub dark_class: String,
    pub storage_key: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            overlay_id: "lightbox".to_string(),
            image_id: "lightbox-img".to_string(),
            close_id: "lightbox-close".to_string(),
            open_class: "open".to_string(),
            trigger_selector: "img.lightbox-trigger, img[data-lightbox]".to_string(),
            toggle_id: "theme-toggle".to_string(),
            icon_id: "theme-icon".to_string(),
            dark_class: "dark-theme".to_string(),
            storage_key: "theme".to_string(),
        }
    }
}

impl UiConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Blank input means "no overrides".
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };

        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring page config, using defaults: {e}");
                Self::default()
            }
        }
    }
}
