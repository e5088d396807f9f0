//! Image gallery widget: thumbnail plus full-screen viewer
//!
//! Clicking the thumbnail opens the viewer on that image. Inside the viewer
//! the arrow buttons and ArrowLeft/ArrowRight keys move through the images
//! with wrap-around, Escape or a backdrop click closes it. Any image that
//! fails to load is replaced by the configured placeholder.

use crate::components::icons::{ArrowLeftIcon, ArrowRightIcon, GalleryHorizontalIcon};
use crate::components::{AspectRatio, ViewerDialog};
use dioxus::prelude::*;
use gallery_common::{
    viewer_title, GalleryConfig, GalleryEvent, GalleryLabels, GalleryState, ThumbnailView,
    ViewerView,
};

/// Gallery widget for a list of image URLs
///
/// `index` selects the thumbnail (and the image the viewer opens on).
/// `title` is used for alt text and the viewer's accessible name.
#[component]
pub fn ImageSelector(images: Vec<String>, index: usize, title: String) -> Element {
    let config = GalleryConfig::global();
    let labels = &config.labels;

    let mut state = use_signal(|| GalleryState::new(images.clone(), index));
    let mut last_props = use_signal(|| (images.clone(), index));

    // Start over when the parent passes a different list or thumbnail
    if last_props.read().0 != images || last_props.read().1 != index {
        last_props.set((images.clone(), index));
        state.set(GalleryState::new(images.clone(), index));
    }

    let is_open = use_memo(move || state.read().is_open());
    let is_open: ReadSignal<bool> = is_open.into();

    let thumbnail = ThumbnailView::build(&state.read(), &title, labels);
    let viewer = ViewerView::build(&state.read(), &title, labels);
    let thumbnail_position = thumbnail.position;

    rsx! {
        div { class: "bg-slate-900/50 backdrop-blur-sm rounded-lg p-6 border border-sky-400/20 mb-6",
            h2 { class: "text-xl text-sky-400 mb-4 flex items-center",
                GalleryHorizontalIcon { class: "h-5 w-5 mr-2 text-sky-400" }
                {labels.heading.clone()}
            }

            div {
                class: "cursor-pointer",
                onclick: move |_| {
                    state.write().apply(&GalleryEvent::Click);
                },
                AspectRatio {
                    ratio: config.aspect_ratio,
                    class: Some("bg-slate-900/30".to_string()),
                    img {
                        src: "{thumbnail.src}",
                        alt: "{thumbnail.alt}",
                        class: "object-cover w-full h-full rounded-md",
                        onerror: move |_| {
                            state
                                .write()
                                .apply(&GalleryEvent::ImageError {
                                    position: thumbnail_position,
                                });
                        },
                    }
                }
            }

            ViewerDialog {
                is_open,
                on_close: move |_| {
                    state.write().apply(&GalleryEvent::Close);
                },
                title: viewer_title(&title, labels),
                description: labels.viewer.clone(),
                if let Some(view) = viewer {
                    ViewerContent { view, state, labels: labels.clone() }
                }
            }
        }
    }
}

/// Image, navigation buttons and counter inside the open viewer
#[component]
fn ViewerContent(view: ViewerView, state: Signal<GalleryState>, labels: GalleryLabels) -> Element {
    let mut state = state;
    let position = view.position;

    let on_keydown = move |evt: KeyboardEvent| {
        let key = evt.key().to_string();
        let handled = state.write().handle_key(&key);
        if handled {
            evt.prevent_default();
        }
    };

    rsx! {
        div {
            class: "relative flex flex-col items-center w-[90vw] bg-slate-900/95 rounded-lg border border-sky-400/30",
            tabindex: "-1",
            onkeydown: on_keydown,

            div { class: "relative w-full h-[80vh] flex items-center justify-center p-4",
                img {
                    src: "{view.src}",
                    alt: "{view.alt}",
                    class: "max-h-full max-w-full object-contain",
                    onerror: move |_| {
                        state.write().apply(&GalleryEvent::ImageError { position });
                    },
                }

                button {
                    class: "absolute left-4 p-2 rounded-full bg-slate-900/80 hover:bg-slate-900 text-slate-200 border border-sky-400/30",
                    aria_label: "{labels.previous}",
                    onclick: move |e| {
                        e.stop_propagation();
                        state.write().apply(&GalleryEvent::Previous);
                    },
                    ArrowLeftIcon { class: "h-6 w-6" }
                }
                button {
                    class: "absolute right-4 p-2 rounded-full bg-slate-900/80 hover:bg-slate-900 text-slate-200 border border-sky-400/30",
                    aria_label: "{labels.next}",
                    onclick: move |e| {
                        e.stop_propagation();
                        state.write().apply(&GalleryEvent::Next);
                    },
                    ArrowRightIcon { class: "h-6 w-6" }
                }
            }

            div { class: "absolute top-4 left-4 px-3 py-1 rounded-md bg-slate-900/80 text-slate-200",
                {view.counter.clone()}
            }
        }
    }
}
