//! gallery-ui - Dioxus components for the image gallery widget
//!
//! The state machine and render models live in `gallery-common`; this crate
//! only turns them into markup and wires DOM events back into the state.

pub mod components;

pub use components::*;
pub use gallery_common::{GalleryConfig, GalleryLabels, GalleryState};
