use crate::shared::components::results_view::ResultsView;
use crate::shared::components::status_line::StatusLine;

pub const NO_COLUMNS_YET: &str = "No columns yet.";
pub const NO_COLUMNS_DETECTED: &str = "No columns detected.";

/// Upload status and detected columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPanel {
    pub status: Option<StatusLine>,
    pub columns_text: String,
}

impl Default for UploadPanel {
    fn default() -> Self {
        Self {
            status: None,
            columns_text: NO_COLUMNS_YET.to_string(),
        }
    }
}

impl UploadPanel {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Column names as shown after an upload
pub fn columns_text(columns: &[String]) -> String {
    if columns.is_empty() {
        NO_COLUMNS_DETECTED.to_string()
    } else {
        columns.join(", ")
    }
}

/// Natural-language query input and its output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPanel {
    pub input: String,
    pub status: Option<StatusLine>,
    pub results: ResultsView,
}

impl QueryPanel {
    /// Clears status and results; the input is kept
    pub fn reset_output(&mut self) {
        self.status = None;
        self.results = ResultsView::Empty;
    }
}

/// Raw SQL input and its output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSqlPanel {
    pub input: String,
    pub status: Option<StatusLine>,
    pub results: ResultsView,
}

impl RawSqlPanel {
    pub fn reset_output(&mut self) {
        self.status = None;
        self.results = ResultsView::Empty;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_text() {
        assert_eq!(columns_text(&["a".to_string(), "b".to_string()]), "a, b");
        assert_eq!(columns_text(&[]), NO_COLUMNS_DETECTED);
    }

    #[test]
    fn test_reset_output_keeps_input() {
        let mut panel = QueryPanel {
            input: "count rows".into(),
            status: Some(StatusLine::success("SQL: SELECT 1")),
            results: ResultsView::NoRows,
        };
        panel.reset_output();
        assert_eq!(panel.input, "count rows");
        assert_eq!(panel, QueryPanel { input: "count rows".into(), ..Default::default() });
    }
}
