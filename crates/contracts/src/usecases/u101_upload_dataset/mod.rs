pub mod response;

pub use response::UploadResponse;

use crate::usecases::common::UseCaseMetadata;

/// Multipart field carrying the uploaded file
pub const UPLOAD_FILE_FIELD: &str = "file";

pub struct UploadDataset;

impl UseCaseMetadata for UploadDataset {
    fn usecase_index() -> &'static str {
        "u101"
    }

    fn usecase_name() -> &'static str {
        "upload_dataset"
    }

    fn display_name() -> &'static str {
        "Upload dataset"
    }

    fn endpoint() -> &'static str {
        "/upload"
    }

    fn description() -> &'static str {
        "Upload a CSV/XLSX file; the server creates a table and suggests queries"
    }
}
