use serde::{Deserialize, Serialize};

/// Keys the open viewer reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryKey {
    Next,
    Previous,
    Close,
}

impl GalleryKey {
    /// Map a DOM `KeyboardEvent.key` value. Unhandled keys return `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(GalleryKey::Next),
            "ArrowLeft" => Some(GalleryKey::Previous),
            "Escape" => Some(GalleryKey::Close),
            _ => None,
        }
    }
}

/// Input to the gallery state machine, independent of any UI framework's
/// event objects.
///
/// Serialized with a `type` tag, e.g. `{"type":"key","key":"Escape"}` or
/// `{"type":"click"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GalleryEvent {
    /// Key pressed while the viewer has focus
    Key { key: String },
    /// Thumbnail clicked
    Click,
    /// Next button
    Next,
    /// Previous button
    Previous,
    /// Backdrop click, dialog cancel or close button
    Close,
    /// An image at `position` failed to load
    ImageError { position: usize },
}

impl GalleryEvent {
    pub fn key(key: impl Into<String>) -> Self {
        GalleryEvent::Key { key: key.into() }
    }
}
