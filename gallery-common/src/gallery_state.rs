use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::{GalleryConfig, GalleryEvent, GalleryKey};

/// State of one mounted gallery widget.
///
/// Holds the image list, which image the viewer shows, and whether the
/// viewer is open. The list always has at least one entry: an empty input
/// list is replaced by the placeholder. `current_index` is always a valid
/// index into it.
///
/// Load failures are tracked per position and only affect what gets
/// rendered; the image list itself never changes.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryState {
    images: Vec<String>,
    placeholder: String,
    initial_index: usize,
    current_index: usize,
    is_open: bool,
    failed: BTreeSet<usize>,
}

impl GalleryState {
    /// Create a closed gallery using the installed placeholder image.
    pub fn new(images: Vec<String>, index: usize) -> Self {
        Self::with_placeholder(images, index, GalleryConfig::global().default_image.clone())
    }

    pub fn with_placeholder(
        images: Vec<String>,
        index: usize,
        placeholder: impl Into<String>,
    ) -> Self {
        let placeholder = placeholder.into();
        let images = if images.is_empty() {
            vec![placeholder.clone()]
        } else {
            images
        };
        let initial_index = clamp_index(index, images.len());

        Self {
            images,
            placeholder,
            initial_index,
            current_index: initial_index,
            is_open: false,
            failed: BTreeSet::new(),
        }
    }

    /// Open the viewer on image `index`.
    pub fn select_thumbnail(&mut self, index: usize) {
        self.current_index = clamp_index(index, self.images.len());
        self.is_open = true;
        debug!("Gallery opened at {}", self.current_index);
    }

    /// Advance to the next image, wrapping from the last to the first.
    pub fn next(&mut self) {
        self.current_index = (self.current_index + 1) % self.images.len();
        debug!("Gallery moved to {}", self.current_index);
    }

    /// Go back one image, wrapping from the first to the last.
    pub fn previous(&mut self) {
        let len = self.images.len();
        self.current_index = (self.current_index + len - 1) % len;
        debug!("Gallery moved to {}", self.current_index);
    }

    /// Close the viewer. No-op when already closed.
    pub fn close(&mut self) {
        if self.is_open {
            self.is_open = false;
            debug!("Gallery closed");
        }
    }

    /// Dispatch a keyboard key. Returns true if the key was handled.
    ///
    /// Keys are ignored while the viewer is closed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.is_open {
            return false;
        }
        match GalleryKey::from_key(key) {
            Some(GalleryKey::Next) => self.next(),
            Some(GalleryKey::Previous) => self.previous(),
            Some(GalleryKey::Close) => self.close(),
            None => return false,
        }
        true
    }

    /// Record that the image at `position` failed to load.
    ///
    /// Later renders of that position use the placeholder. Returns false for
    /// out-of-range positions and positions that already failed.
    pub fn on_image_load_error(&mut self, position: usize) -> bool {
        let Some(source) = self.images.get(position) else {
            return false;
        };
        if !self.failed.insert(position) {
            return false;
        }
        warn!(
            "Image {} failed to load ({}), showing placeholder",
            position + 1,
            source
        );
        true
    }

    /// Apply an event. Returns true if the state changed.
    pub fn apply(&mut self, event: &GalleryEvent) -> bool {
        let before = (self.current_index, self.is_open, self.failed.len());
        match event {
            GalleryEvent::Key { key } => {
                self.handle_key(key);
            }
            GalleryEvent::Click => self.select_thumbnail(self.initial_index),
            GalleryEvent::Next => self.next(),
            GalleryEvent::Previous => self.previous(),
            GalleryEvent::Close => self.close(),
            GalleryEvent::ImageError { position } => {
                self.on_image_load_error(*position);
            }
        }
        before != (self.current_index, self.is_open, self.failed.len())
    }

    /// Source to render at `position`: the placeholder if that image failed,
    /// otherwise the original reference. Out-of-range positions are clamped.
    pub fn rendered_source(&self, position: usize) -> &str {
        let position = clamp_index(position, self.images.len());
        if self.failed.contains(&position) {
            &self.placeholder
        } else {
            &self.images[position]
        }
    }

    /// Images as displayed (the placeholder alone if none were supplied)
    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Always false; an empty input list is replaced by the placeholder.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn initial_index(&self) -> usize {
        self.initial_index
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_failed(&self, position: usize) -> bool {
        self.failed.contains(&position)
    }
}

fn clamp_index(index: usize, len: usize) -> usize {
    if index < len {
        return index;
    }
    let clamped = len.saturating_sub(1);
    warn!("Image index {index} out of range for {len} images, using {clamped}");
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_PLACEHOLDER;

    fn abc() -> GalleryState {
        GalleryState::with_placeholder(
            vec!["a".into(), "b".into(), "c".into()],
            0,
            DEFAULT_PLACEHOLDER,
        )
    }

    #[test]
    fn test_new_is_closed_at_initial_index() {
        let g = GalleryState::with_placeholder(
            vec!["a".into(), "b".into(), "c".into()],
            1,
            DEFAULT_PLACEHOLDER,
        );
        assert!(!g.is_open());
        assert_eq!(g.initial_index(), 1);
        assert_eq!(g.current_index(), 1);
        assert_eq!(g.len(), 3);
    }

    #[test]
    fn test_empty_list_uses_placeholder() {
        let g = GalleryState::new(vec![], 0);
        assert_eq!(g.images(), &[DEFAULT_PLACEHOLDER.to_string()]);
        assert_eq!(g.len(), 1);
        assert!(!g.is_empty());
        assert_eq!(g.rendered_source(0), DEFAULT_PLACEHOLDER);
    }

    #[test]
    fn test_empty_list_navigation_stays_at_zero() {
        let mut g = GalleryState::new(vec![], 0);
        g.select_thumbnail(0);
        g.next();
        assert_eq!(g.current_index(), 0);
        g.previous();
        assert_eq!(g.current_index(), 0);
    }

    #[test]
    fn test_out_of_range_initial_index_clamps() {
        let g = GalleryState::with_placeholder(vec!["a".into(), "b".into()], 7, "p");
        assert_eq!(g.initial_index(), 1);
        assert_eq!(g.current_index(), 1);

        let g = GalleryState::with_placeholder(vec![], 3, "p");
        assert_eq!(g.initial_index(), 0);
    }

    #[test]
    fn test_select_thumbnail_opens_at_index() {
        let mut g = GalleryState::with_placeholder(
            vec!["a".into(), "b".into(), "c".into()],
            2,
            DEFAULT_PLACEHOLDER,
        );
        g.select_thumbnail(g.initial_index());
        assert!(g.is_open());
        assert_eq!(g.current_index(), 2);
    }

    #[test]
    fn test_select_thumbnail_clamps() {
        let mut g = abc();
        g.select_thumbnail(10);
        assert!(g.is_open());
        assert_eq!(g.current_index(), 2);
    }

    #[test]
    fn test_next_wraps_forward() {
        let mut g = abc();
        g.select_thumbnail(0);
        g.next();
        assert_eq!(g.current_index(), 1);
        g.next();
        assert_eq!(g.current_index(), 2);
        g.next();
        assert_eq!(g.current_index(), 0);
    }

    #[test]
    fn test_previous_wraps_backward() {
        let mut g = abc();
        g.previous();
        assert_eq!(g.current_index(), 2);
        g.previous();
        assert_eq!(g.current_index(), 1);
    }

    #[test]
    fn test_navigation_does_not_change_open_flag() {
        let mut g = abc();
        g.next();
        g.previous();
        assert!(!g.is_open());

        g.select_thumbnail(0);
        g.next();
        g.previous();
        assert!(g.is_open());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut g = abc();
        g.select_thumbnail(1);
        g.close();
        assert!(!g.is_open());
        let snapshot = g.clone();
        g.close();
        assert_eq!(g, snapshot);
    }

    #[test]
    fn test_close_keeps_current_index() {
        let mut g = abc();
        g.select_thumbnail(0);
        g.next();
        g.close();
        assert_eq!(g.current_index(), 1);
    }

    #[test]
    fn test_handle_key_dispatch() {
        let mut g = abc();
        g.select_thumbnail(0);

        assert!(g.handle_key("ArrowRight"));
        assert_eq!(g.current_index(), 1);

        assert!(g.handle_key("ArrowLeft"));
        assert!(g.handle_key("ArrowLeft"));
        assert_eq!(g.current_index(), 2);

        assert!(!g.handle_key("Enter"));
        assert!(!g.handle_key("a"));
        assert_eq!(g.current_index(), 2);
        assert!(g.is_open());

        assert!(g.handle_key("Escape"));
        assert!(!g.is_open());
    }

    #[test]
    fn test_escape_while_closed_is_noop() {
        let mut g = abc();
        let snapshot = g.clone();
        assert!(!g.handle_key("Escape"));
        assert_eq!(g, snapshot);
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        let mut g = abc();
        assert!(!g.handle_key("ArrowRight"));
        assert!(!g.handle_key("ArrowLeft"));
        assert_eq!(g.current_index(), 0);
    }

    #[test]
    fn test_image_error_swaps_rendered_source_only() {
        let mut g = abc();
        assert!(g.on_image_load_error(1));
        assert_eq!(g.rendered_source(1), DEFAULT_PLACEHOLDER);
        assert_eq!(g.images()[1], "b");
        assert_eq!(g.rendered_source(0), "a");
        assert_eq!(g.rendered_source(2), "c");
        assert!(g.is_failed(1));
    }

    #[test]
    fn test_repeated_image_error_is_noop() {
        let mut g = abc();
        assert!(g.on_image_load_error(0));
        assert!(!g.on_image_load_error(0));
        assert_eq!(g.rendered_source(0), DEFAULT_PLACEHOLDER);
    }

    #[test]
    fn test_image_error_out_of_range_ignored() {
        let mut g = abc();
        assert!(!g.on_image_load_error(3));
        assert!(!g.is_failed(3));
    }

    #[test]
    fn test_failed_image_survives_navigation() {
        let mut g = abc();
        g.select_thumbnail(0);
        g.on_image_load_error(0);
        g.next();
        g.previous();
        assert_eq!(g.rendered_source(g.current_index()), DEFAULT_PLACEHOLDER);
    }

    #[test]
    fn test_custom_placeholder() {
        let mut g = GalleryState::with_placeholder(vec!["x".into()], 0, "/missing.png");
        g.on_image_load_error(0);
        assert_eq!(g.rendered_source(0), "/missing.png");
        assert_eq!(g.placeholder(), "/missing.png");
    }

    #[test]
    fn test_apply_click_opens_at_initial_index() {
        let mut g = GalleryState::with_placeholder(
            vec!["a".into(), "b".into(), "c".into()],
            1,
            DEFAULT_PLACEHOLDER,
        );
        assert!(g.apply(&GalleryEvent::Click));
        assert!(g.is_open());
        assert_eq!(g.current_index(), 1);
    }

    #[test]
    fn test_apply_reports_changes() {
        let mut g = abc();
        assert!(!g.apply(&GalleryEvent::Close));
        assert!(g.apply(&GalleryEvent::Click));
        assert!(g.apply(&GalleryEvent::Next));
        assert!(g.apply(&GalleryEvent::Previous));
        assert!(!g.apply(&GalleryEvent::key("Tab")));
        assert!(g.apply(&GalleryEvent::ImageError { position: 2 }));
        assert!(!g.apply(&GalleryEvent::ImageError { position: 2 }));
        assert!(g.apply(&GalleryEvent::key("Escape")));
        assert!(!g.is_open());
    }

    #[test]
    fn test_apply_single_image_navigation_is_unchanged() {
        let mut g = GalleryState::with_placeholder(vec!["only".into()], 0, "p");
        g.apply(&GalleryEvent::Click);
        assert!(!g.apply(&GalleryEvent::Next));
        assert!(!g.apply(&GalleryEvent::Previous));
        assert_eq!(g.current_index(), 0);
    }
}
