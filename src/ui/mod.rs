mod bindings;
mod chrome;
mod layout;
mod pages;
mod sidebar;
mod text;

pub use bindings::{PresentationView, page_classes};
pub use chrome::{draw_header, draw_status};
pub use layout::{HitTarget, UiLayout, split_layout};
pub use pages::draw_page_strip;
pub use sidebar::draw_sidebar;
pub use text::wrap_text;
