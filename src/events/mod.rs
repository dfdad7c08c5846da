mod page;
mod pointer;
mod viewport;

pub use page::{wire_language, wire_theme, wire_touch_gate};
pub use pointer::{wire_carousel, wire_orbit};
pub use viewport::{observe_hero, wire_resize};
