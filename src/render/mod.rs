//! Render targets consuming the computed proposal record

pub mod latex;
pub mod locale;

pub use latex::render_document;
pub use locale::{Language, Localizer};
