//! Fixed aspect-ratio frame
//!
//! Uses the padding-bottom technique: vertical padding percentages resolve
//! against the element's width, so `100 / ratio`% of padding gives the frame
//! a height proportional to its width. Children fill the frame.

use dioxus::prelude::*;
use gallery_common::DEFAULT_ASPECT_RATIO;

/// Frame whose height follows its width at `ratio` (width / height)
#[component]
pub fn AspectRatio(
    ratio: f64,
    children: Element,
    #[props(default)] class: Option<String>,
) -> Element {
    let padding = format!("{:.4}", padding_percent(ratio));
    let frame_class = class.unwrap_or_default();

    rsx! {
        div {
            class: "relative w-full {frame_class}",
            style: "padding-bottom: {padding}%;",
            div { class: "absolute inset-0", {children} }
        }
    }
}

/// Bottom padding, in percent of the width, for a frame of `ratio`.
/// Invalid ratios fall back to the default frame.
fn padding_percent(ratio: f64) -> f64 {
    let ratio = if ratio.is_finite() && ratio > 0.0 {
        ratio
    } else {
        DEFAULT_ASPECT_RATIO
    };
    100.0 / ratio
}
