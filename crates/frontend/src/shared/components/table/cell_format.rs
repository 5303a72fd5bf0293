//! Cell value formatting for result tables and charts

use contracts::usecases::common::Cell;

/// Display text of a result cell
///
/// ```
/// use frontend::shared::components::table::cell_text;
/// assert_eq!(cell_text(&serde_json::json!("x")), "x");
/// assert_eq!(cell_text(&serde_json::json!(2.5)), "2.5");
/// ```
pub fn cell_text(cell: &Cell) -> String {
    match cell {
        Cell::Null => String::new(),
        Cell::String(s) => s.clone(),
        // Numbers, bools, nested arrays/objects: compact JSON
        other => other.to_string(),
    }
}

/// Numeric value of a cell for charting; numeric strings count, anything else is a gap
pub fn cell_number(cell: &Cell) -> Option<f64> {
    match cell {
        Cell::Number(n) => n.as_f64(),
        Cell::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
