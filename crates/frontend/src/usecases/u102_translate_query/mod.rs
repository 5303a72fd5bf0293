pub mod api;
pub mod controller;
pub mod view;

pub use view::QueryWidget;
