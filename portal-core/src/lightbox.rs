/// What the overlay currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LightboxState {
    pub open: bool,
    pub src: String,
    pub alt: String,
}

/// Where a click on the overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTarget {
    /// The overlay container itself, outside the image.
    Background,
    CloseControl,
    /// The displayed image or anything else inside the overlay.
    Content,
}

pub const ESCAPE_KEY: &str = "Escape";

/// Renders lightbox state into the page.
pub trait LightboxView {
    fn show_image(&self, src: &str, alt: &str);
    fn set_open(&self, open: bool);
}

/// Single overlay for the whole page.
pub struct LightboxController<V> {
    view: V,
    state: LightboxState,
}

impl<V: LightboxView> LightboxController<V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            state: LightboxState::default(),
        }
    }

    pub fn open(&mut self, src: &str, alt: &str) {
        self.state.src = src.to_string();
        self.state.alt = alt.to_string();
        self.state.open = true;

        self.view.show_image(src, alt);
        self.view.set_open(true);
    }

    pub fn close(&mut self) {
        self.state = LightboxState::default();

        self.view.set_open(false);
        self.view.show_image("", "");
    }

    /// Returns true when the click dismissed the overlay.
    pub fn handle_overlay_click(&mut self, target: OverlayTarget) -> bool {
        match target {
            OverlayTarget::Background | OverlayTarget::CloseControl => {
                self.close();
                true
            }
            OverlayTarget::Content => false,
        }
    }

    /// Escape closes at any time, including when already closed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key != ESCAPE_KEY {
            return false;
        }
        self.close();
        true
    }

    pub fn state(&self) -> &LightboxState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.open
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingView {
        rendered: RefCell<LightboxState>,
    }

    impl LightboxView for RecordingView {
        fn show_image(&self, src: &str, alt: &str) {
            let mut rendered = self.rendered.borrow_mut();
            rendered.src = src.to_string();
            rendered.alt = alt.to_string();
        }

        fn set_open(&self, open: bool) {
            self.rendered.borrow_mut().open = open;
        }
    }

    fn opened() -> LightboxController<RecordingView> {
        let mut lightbox = LightboxController::new(RecordingView::default());
        lightbox.open("/static/img/news/yard.jpg", "Courtyard after cleanup");
        lightbox
    }

    fn assert_closed(lightbox: &LightboxController<RecordingView>) {
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.state(), &LightboxState::default());
        let rendered = lightbox.view().rendered.borrow();
        assert!(!rendered.open);
        assert!(rendered.src.is_empty());
    }

    #[test]
    fn test_open_shows_source_and_alt() {
        let lightbox = opened();
        let expected = LightboxState {
            open: true,
            src: "/static/img/news/yard.jpg".to_string(),
            alt: "Courtyard after cleanup".to_string(),
        };
        assert_eq!(lightbox.state(), &expected);
        assert_eq!(&*lightbox.view().rendered.borrow(), &expected);
    }

    #[test]
    fn test_background_click_closes() {
        let mut lightbox = opened();
        assert!(lightbox.handle_overlay_click(OverlayTarget::Background));
        assert_closed(&lightbox);
    }

    #[test]
    fn test_close_control_closes() {
        let mut lightbox = opened();
        assert!(lightbox.handle_overlay_click(OverlayTarget::CloseControl));
        assert_closed(&lightbox);
    }

    #[test]
    fn test_escape_closes() {
        let mut lightbox = opened();
        assert!(lightbox.handle_key("Escape"));
        assert_closed(&lightbox);
    }

    #[test]
    fn test_escape_when_closed_is_harmless() {
        let mut lightbox = LightboxController::new(RecordingView::default());
        assert!(lightbox.handle_key("Escape"));
        assert_closed(&lightbox);
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut lightbox = opened();
        assert!(!lightbox.handle_key("Enter"));
        assert!(!lightbox.handle_key("Esc"));
        assert!(lightbox.is_open());
    }

    #[test]
    fn test_click_on_image_keeps_overlay_open() {
        let mut lightbox = opened();
        assert!(!lightbox.handle_overlay_click(OverlayTarget::Content));
        assert!(lightbox.is_open());
        assert_eq!(lightbox.state().src, "/static/img/news/yard.jpg");
    }

    #[test]
    fn test_reopen_replaces_image() {
        let mut lightbox = opened();
        lightbox.close();
        lightbox.open("/static/img/guest_photos/car.png", "");
        assert!(lightbox.is_open());
        assert_eq!(lightbox.state().src, "/static/img/guest_photos/car.png");
        assert_eq!(lightbox.state().alt, "");
    }
}
