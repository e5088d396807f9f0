//! Render models for the gallery widget
//!
//! Plain data derived from [`GalleryState`], so the markup layer only has to
//! place strings into elements.

use crate::{GalleryLabels, GalleryState};

/// The always-visible preview image
#[derive(Clone, Debug, PartialEq)]
pub struct ThumbnailView {
    pub position: usize,
    pub src: String,
    pub alt: String,
}

impl ThumbnailView {
    pub fn build(state: &GalleryState, title: &str, labels: &GalleryLabels) -> Self {
        let position = state.initial_index();
        Self {
            position,
            src: state.rendered_source(position).to_string(),
            alt: image_alt(title, &labels.image, position),
        }
    }
}

/// Contents of the open viewer
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerView {
    pub position: usize,
    pub src: String,
    pub alt: String,
    /// "{position + 1} / {total}"
    pub counter: String,
}

impl ViewerView {
    /// Returns `None` while the viewer is closed.
    pub fn build(state: &GalleryState, title: &str, labels: &GalleryLabels) -> Option<Self> {
        if !state.is_open() {
            return None;
        }
        let position = state.current_index();
        Some(Self {
            position,
            src: state.rendered_source(position).to_string(),
            alt: image_alt(title, &labels.image, position),
            counter: counter_text(position, state.len()),
        })
    }
}

pub fn image_alt(title: &str, image_label: &str, position: usize) -> String {
    format!("{} - {} {}", title, image_label, position + 1)
}

pub fn counter_text(position: usize, total: usize) -> String {
    format!("{} / {}", position + 1, total)
}

/// Accessible title of the viewer dialog
pub fn viewer_title(title: &str, labels: &GalleryLabels) -> String {
    format!("{} - {}", title, labels.viewer)
}
