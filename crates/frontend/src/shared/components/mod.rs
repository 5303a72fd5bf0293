pub mod chart;
pub mod results_view;
pub mod status_line;
pub mod suggestion_panel;
pub mod table;
