//! Full-screen image viewer state

use crate::constants::CANCEL_KEY;

/// What the triggering image offers the viewer
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageSource {
    pub src: String,
    /// Explicit caption attribute, if the element carries one
    pub caption: Option<String>,
    /// Alternate text, used when there is no usable caption
    pub alt: String,
}

impl ImageSource {
    /// Caption to display: the explicit caption unless it is missing or empty
    pub fn display_caption(&self) -> &str {
        match self.caption.as_deref() {
            Some(caption) if !caption.is_empty() => caption,
            _ => &self.alt,
        }
    }
}

/// Page `overflow` while the viewer is in a given state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyOverflow {
    /// Scrolling suspended under the overlay
    Hidden,
    /// Normal page scrolling
    Auto,
}

impl BodyOverflow {
    pub fn css(self) -> &'static str {
        match self {
            BodyOverflow::Hidden => "hidden",
            BodyOverflow::Auto => "auto",
        }
    }
}

/// Content currently shown in the overlay
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalView {
    pub image_src: String,
    pub caption: String,
}

/// Modal image viewer
#[derive(Clone, Debug, Default)]
pub struct ModalViewer {
    view: Option<ModalView>,
}

impl ModalViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.view.is_some()
    }

    pub fn view(&self) -> Option<&ModalView> {
        self.view.as_ref()
    }

    pub fn body_overflow(&self) -> BodyOverflow {
        if self.is_open() {
            BodyOverflow::Hidden
        } else {
            BodyOverflow::Auto
        }
    }

    /// Show `source` in the overlay. Opening while open replaces the image.
    pub fn open(&mut self, source: &ImageSource) -> &ModalView {
        self.view.insert(ModalView {
            image_src: source.src.clone(),
            caption: source.display_caption().to_string(),
        })
    }

    /// Hide the overlay. Scrolling is restored whatever the previous state.
    pub fn close(&mut self) -> BodyOverflow {
        self.view = None;
        BodyOverflow::Auto
    }

    /// Handle a key press; returns true if it closed the viewer
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key != CANCEL_KEY {
            return false;
        }
        let was_open = self.is_open();
        self.close();
        was_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(caption: Option<&str>) -> ImageSource {
        ImageSource {
            src: "img/project.jpg".to_string(),
            caption: caption.map(str::to_string),
            alt: "Project photo".to_string(),
        }
    }

    #[test]
    fn test_open_prefers_caption() {
        let mut modal = ModalViewer::new();
        let view = modal.open(&source(Some("Amplifier prototype")));
        assert_eq!(view.caption, "Amplifier prototype");
        assert_eq!(view.image_src, "img/project.jpg");
        assert_eq!(modal.body_overflow(), BodyOverflow::Hidden);
    }

    #[test]
    fn test_open_falls_back_to_alt() {
        let mut modal = ModalViewer::new();
        assert_eq!(modal.open(&source(None)).caption, "Project photo");
        assert_eq!(modal.open(&source(Some(""))).caption, "Project photo");
    }

    #[test]
    fn test_close_always_restores_scroll() {
        let mut modal = ModalViewer::new();
        assert_eq!(modal.close(), BodyOverflow::Auto);

        modal.open(&source(None));
        assert_eq!(modal.close(), BodyOverflow::Auto);
        assert!(!modal.is_open());
        assert_eq!(modal.body_overflow(), BodyOverflow::Auto);
    }

    #[test]
    fn test_escape_closes() {
        let mut modal = ModalViewer::new();
        modal.open(&source(None));
        assert!(!modal.handle_key("Enter"));
        assert!(modal.is_open());
        assert!(modal.handle_key("Escape"));
        assert!(!modal.is_open());
        // Escape on a closed modal is harmless
        assert!(!modal.handle_key("Escape"));
    }

    #[test]
    fn test_overflow_css() {
        assert_eq!(BodyOverflow::Hidden.css(), "hidden");
        assert_eq!(BodyOverflow::Auto.css(), "auto");
    }
}
