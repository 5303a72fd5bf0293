use contracts::usecases::common::QueryResult;

use crate::shared::components::table::{cell_number, cell_text};
use crate::shared::error::ChartError;

/// Data for a vertical bar chart with a single series
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartSpec {
    /// Column 0, row order
    pub labels: Vec<String>,
    /// Header of column 1
    pub series_label: String,
    /// Column 1, row order; `None` leaves a gap
    pub values: Vec<Option<f64>>,
}

impl BarChartSpec {
    pub fn from_result(result: &QueryResult) -> Result<Self, ChartError> {
        if !result.is_two_column() {
            return Err(ChartError::Shape(result.columns.len()));
        }

        let labels = result
            .rows
            .iter()
            .map(|row| row.first().map(cell_text).unwrap_or_default())
            .collect();
        let values = result
            .rows
            .iter()
            .map(|row| row.get(1).and_then(cell_number))
            .collect();

        Ok(Self {
            labels,
            series_label: result.columns[1].clone(),
            values,
        })
    }
}
