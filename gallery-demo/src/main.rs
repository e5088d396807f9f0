//! Gallery demo - Web page rendering the gallery widget with fixture data
//!
//! Shows a regular gallery, one opened on a later thumbnail, an empty one and
//! one with a broken image URL.

mod demo_data;

use dioxus::prelude::*;
use gallery_common::GalleryConfig;
use gallery_ui::ImageSelector;
use tracing::{error, info};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

const GALLERY_YAML: &str = include_str!("../gallery.yaml");

fn install_config() {
    match GalleryConfig::from_yaml_str(GALLERY_YAML).and_then(GalleryConfig::install) {
        Ok(()) => info!("Loaded gallery configuration"),
        Err(e) => error!("Failed to load gallery configuration, using defaults: {}", e),
    }
}

#[component]
pub fn App() -> Element {
    // Before any gallery reads the configuration
    use_hook(install_config);

    let galleries = demo_data::galleries();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: TAILWIND_CDN }
        div { class: "min-h-screen max-w-3xl mx-auto px-6 py-10",
            for gallery in galleries {
                section { key: "{gallery.title}",
                    h1 { class: "text-2xl font-semibold text-slate-100 mb-3", "{gallery.title}" }
                    ImageSelector {
                        images: gallery.images,
                        index: gallery.index,
                        title: gallery.title.to_string(),
                    }
                }
            }
        }
    }
}

fn main() {
    dioxus::launch(App);
}
