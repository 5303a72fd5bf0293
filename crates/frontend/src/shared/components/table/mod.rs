pub mod cell_format;
pub mod render;

pub use cell_format::{cell_number, cell_text};
pub use render::{html_escape, render_table};
