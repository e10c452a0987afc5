mod render;
mod spinner;
mod style;

pub use render::format_entry;
pub use spinner::Spinner;
pub use style::Style;
