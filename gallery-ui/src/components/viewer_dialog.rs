//! Full-screen viewer dialog built on the native HTML `<dialog>` element
//!
//! `showModal()` gives the viewer top-layer rendering, a focus trap and the
//! `::backdrop` overlay without any JS of our own. Escape fires `cancel`,
//! which we turn into `on_close` so the gallery state stays the source of
//! truth for whether the viewer is open.
//!
//! `showModal()` throws if the dialog is already open, so the effect checks
//! the `open` attribute before calling it (and before `close()`).

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use tracing::debug;
use wasm_bindgen_x::JsCast;

static VIEWER_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Modal dialog that hosts the image viewer
#[component]
pub fn ViewerDialog(
    /// Whether the viewer is shown
    is_open: ReadSignal<bool>,
    /// Called on Escape or a click on the backdrop
    on_close: EventHandler<()>,
    /// Accessible name, rendered visually hidden
    title: String,
    /// Accessible description
    description: String,
    children: Element,
    #[props(default)] class: Option<String>,
) -> Element {
    let dialog_id = use_hook(|| {
        let id = VIEWER_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("gallery-viewer-{}", id)
    });
    let title_id = format!("{dialog_id}-title");
    let dialog_id_for_effect = dialog_id.clone();

    use_effect(move || {
        let is_open = is_open();
        let method = if is_open { "showModal" } else { "close" };

        let Some(element) = web_sys_x::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(&dialog_id_for_effect))
        else {
            return;
        };

        // The effect can run again without the flag changing
        if element.has_attribute("open") == is_open {
            return;
        }

        if let Ok(func) = js_sys_x::Reflect::get(&element, &method.into()) {
            if let Some(func) = func.dyn_ref::<js_sys_x::Function>() {
                let _ = func.call0(&element);
                debug!("{dialog_id_for_effect}: {method}()");
            }
        }
    });

    let dialog_class = class.unwrap_or_default();

    // No display classes on the dialog itself: they would override the
    // native display:none of a closed dialog. Layout goes on the inner div.
    rsx! {
        dialog {
            id: "{dialog_id}",
            class: "p-0 m-0 max-w-none max-h-none bg-transparent backdrop:bg-black/90 {dialog_class}",
            "aria-labelledby": "{title_id}",
            "aria-description": "{description}",
            oncancel: move |evt| {
                evt.prevent_default();
                on_close.call(());
            },
            if is_open() {
                h2 { id: "{title_id}", class: "sr-only", "{title}" }
                p { class: "sr-only", "{description}" }
                div {
                    class: "fixed inset-0 flex items-center justify-center",
                    onclick: move |_| on_close.call(()),
                    div { onclick: move |evt| evt.stop_propagation(), {children} }
                }
            }
        }
    }
}
