mod config;
mod gallery_event;
mod gallery_state;
mod view;

pub use config::*;
pub use gallery_event::*;
pub use gallery_state::*;
pub use view::*;
