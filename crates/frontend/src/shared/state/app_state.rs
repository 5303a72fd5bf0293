use contracts::usecases::u101_upload_dataset::UploadResponse;

/// The table the server created for the last successful upload
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveDataset {
    pub table_name: String,
    pub columns: Vec<String>,
    pub suggestions: Vec<String>,
}

impl From<UploadResponse> for ActiveDataset {
    fn from(response: UploadResponse) -> Self {
        Self {
            table_name: response.table_name,
            columns: response.columns,
            suggestions: response.suggestions,
        }
    }
}

/// What table, columns and suggestions are currently active
///
/// Name, columns and suggestions live in one `Option` so they are always
/// replaced or cleared together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    dataset: Option<ActiveDataset>,
}

impl AppState {
    pub fn dataset(&self) -> Option<&ActiveDataset> {
        self.dataset.as_ref()
    }

    pub fn table_name(&self) -> Option<&str> {
        self.dataset.as_ref().map(|d| d.table_name.as_str())
    }

    pub fn columns(&self) -> &[String] {
        self.dataset.as_ref().map_or(&[], |d| d.columns.as_slice())
    }

    pub fn suggestions(&self) -> &[String] {
        self.dataset.as_ref().map_or(&[], |d| d.suggestions.as_slice())
    }

    pub fn clear(&mut self) {
        self.dataset = None;
    }

    /// Swaps in a new dataset in a single assignment
    pub fn replace(&mut self, dataset: ActiveDataset) {
        self.dataset = Some(dataset);
    }
}
