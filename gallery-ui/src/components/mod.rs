pub mod aspect_ratio;
pub mod icons;
pub mod image_selector;
pub mod viewer_dialog;

pub use aspect_ratio::AspectRatio;
pub use image_selector::ImageSelector;
pub use viewer_dialog::ViewerDialog;
