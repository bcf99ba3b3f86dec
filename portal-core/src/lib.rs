//! Controller logic for the portal page behaviors
//!
//! Two independent controllers, each constructed once per page:
//! - [`LightboxController`]: click-to-enlarge image overlay
//! - [`ThemeController`]: light/dark mode persisted to key-value storage
//!
//! Nothing here touches the browser. The wasm bindings in `portal-ui`
//! implement [`LightboxView`], [`ThemeView`] and [`ThemeStore`] on top of
//! `web-sys`.

pub mod config;
pub mod error;
pub mod lightbox;
pub mod store;
pub mod theme;

pub use config::UiConfig;
pub use error::{Result, UiError};
pub use lightbox::{LightboxController, LightboxState, LightboxView, OverlayTarget, ESCAPE_KEY};
pub use store::MemoryStore;
pub use theme::{Theme, ThemeController, ThemeStore, ThemeView, MOON_ICON, SUN_ICON};
