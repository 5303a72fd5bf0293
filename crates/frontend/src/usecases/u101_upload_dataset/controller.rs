use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_upload_dataset::{UploadDataset, UploadResponse};

use crate::session::panels::columns_text;
use crate::session::{Action, Session, Ticket};
use crate::shared::api_client::{ApiReply, ApiResult, QueryApi};
use crate::shared::components::chart::ChartSurface;
use crate::shared::components::status_line::StatusLine;
use crate::shared::state::ActiveDataset;

pub const NO_FILE_SELECTED: &str = "Please select a file first.";
pub const UPLOAD_FAILED: &str = "Upload failed.";
pub const UPLOAD_SUCCEEDED: &str = "File uploaded successfully!";
pub const UPLOAD_ERROR_PREFIX: &str = "Error uploading file: ";

impl<S: ChartSurface> Session<S> {
    /// Clears the active dataset and the upload region, then checks a file was picked
    ///
    /// The reset happens on every call, including the "no file" path.
    pub fn begin_upload<F>(&mut self, file: Option<F>) -> Option<(Ticket, F)> {
        let ticket = self.sequencer.issue(Action::Upload);
        self.state.clear();
        self.upload.reset();

        let Some(file) = file else {
            self.upload.status = Some(StatusLine::error(NO_FILE_SELECTED));
            return None;
        };

        log::debug!("{}: sending file (#{})", UploadDataset::full_name(), ticket.seq());
        Some((ticket, file))
    }

    /// Applies an `/upload` outcome. Returns false if the response was stale.
    pub fn finish_upload(&mut self, ticket: Ticket, outcome: ApiResult<UploadResponse>) -> bool {
        if !self.accept(ticket) {
            return false;
        }

        match outcome {
            Ok(ApiReply::Accepted(mut response)) => {
                let message = response
                    .message
                    .take()
                    .unwrap_or_else(|| UPLOAD_SUCCEEDED.to_string());
                let dataset = ActiveDataset::from(response);
                log::info!(
                    "dataset {} active with {} columns",
                    dataset.table_name,
                    dataset.columns.len()
                );

                self.upload.status = Some(StatusLine::success(message));
                self.upload.columns_text = columns_text(&dataset.columns);
                self.state.replace(dataset);
            }
            Ok(ApiReply::Rejected { status, error }) => {
                log::warn!("upload rejected with HTTP {}: {:?}", status, error);
                let text = error.unwrap_or_else(|| UPLOAD_FAILED.to_string());
                self.upload.status = Some(StatusLine::error(text));
            }
            Err(e) => {
                log::error!("upload failed: {}", e);
                self.upload.status = Some(StatusLine::error(format!("{}{}", UPLOAD_ERROR_PREFIX, e)));
            }
        }
        true
    }

    pub async fn submit_upload<A: QueryApi>(&mut self, api: &A, file: Option<A::File>) {
        if let Some((ticket, file)) = self.begin_upload(file) {
            let outcome = api.upload(&file).await;
            self.finish_upload(ticket, outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::panels::{UploadPanel, NO_COLUMNS_DETECTED, NO_COLUMNS_YET};
    use crate::session::testing::{dataset_reply, rejected, FakeApi};
    use crate::shared::components::suggestion_panel::SuggestionList;
    use crate::shared::components::chart::testing::RecordingSurface;
    use crate::shared::error::ClientError;
    use crate::shared::state::AppState;

    fn session() -> Session<RecordingSurface> {
        Session::new(RecordingSurface::default())
    }

    async fn uploaded(session: &mut Session<RecordingSurface>) {
        let api = FakeApi::default().with_upload(dataset_reply(&["a", "b"], &["Show all rows"]));
        session.submit_upload(&api, Some("first.csv")).await;
        assert!(session.state().dataset().is_some());
    }

    #[tokio::test]
    async fn test_success_populates_state_and_panel() {
        let api = FakeApi::default().with_upload(dataset_reply(&["a", "b"], &[]));
        let mut session = session();
        session.submit_upload(&api, Some("data.csv")).await;

        assert_eq!(session.state().table_name(), Some("table_ab12xy"));
        assert_eq!(session.state().columns(), ["a", "b"]);

        let panel = session.upload_panel();
        assert_eq!(panel.columns_text, "a, b");
        assert_eq!(session.suggestion_list(), SuggestionList::Empty);
        assert_eq!(panel.status, Some(StatusLine::success(UPLOAD_SUCCEEDED)));
    }

    #[tokio::test]
    async fn test_server_message_and_suggestions() {
        let reply = Ok(ApiReply::Accepted(UploadResponse {
            message: Some("File uploaded and table 'table_q' created successfully!".into()),
            table_name: "table_q".into(),
            columns: vec![],
            suggestions: vec!["Show all rows".into()],
        }));
        let api = FakeApi::default().with_upload(reply);
        let mut session = session();
        session.submit_upload(&api, Some("data.csv")).await;

        let panel = session.upload_panel();
        assert_eq!(
            panel.status,
            Some(StatusLine::success("File uploaded and table 'table_q' created successfully!"))
        );
        assert_eq!(panel.columns_text, NO_COLUMNS_DETECTED);
        assert_eq!(session.suggestion_list(), SuggestionList::Items(vec!["Show all rows".into()]));
    }

    #[tokio::test]
    async fn test_no_file_resets_without_network_call() {
        let api = FakeApi::default().with_upload(dataset_reply(&["a"], &[]));
        let mut session = session();
        uploaded(&mut session).await;

        session.submit_upload(&api, None).await;

        assert!(api.calls().is_empty());
        assert_eq!(*session.state(), AppState::default());
        assert_eq!(
            *session.upload_panel(),
            UploadPanel {
                status: Some(StatusLine::error(NO_FILE_SELECTED)),
                ..UploadPanel::default()
            }
        );
        assert_eq!(session.upload_panel().columns_text, NO_COLUMNS_YET);
    }

    #[tokio::test]
    async fn test_state_cleared_before_request_is_sent() {
        let mut session = session();
        uploaded(&mut session).await;

        let (ticket, _file) = session.begin_upload(Some("second.csv")).unwrap();
        assert!(session.state().dataset().is_none());
        assert_eq!(session.suggestion_list(), SuggestionList::Cleared);

        session.finish_upload(ticket, rejected(400, None));
        assert!(session.state().dataset().is_none());
    }

    #[tokio::test]
    async fn test_rejection_shows_server_error_or_fallback() {
        let mut session = session();
        uploaded(&mut session).await;

        let api = FakeApi::default().with_upload(rejected(400, Some("Unsupported file type")));
        session.submit_upload(&api, Some("notes.txt")).await;
        assert_eq!(session.upload_panel().status, Some(StatusLine::error("Unsupported file type")));
        assert!(session.state().dataset().is_none());

        let api = FakeApi::default().with_upload(rejected(500, None));
        session.submit_upload(&api, Some("data.csv")).await;
        assert_eq!(session.upload_panel().status, Some(StatusLine::error(UPLOAD_FAILED)));
        assert_eq!(session.upload_panel().columns_text, NO_COLUMNS_YET);
    }

    #[tokio::test]
    async fn test_transport_failure_appends_detail() {
        let mut session = session();
        uploaded(&mut session).await;

        let api = FakeApi::default().with_upload(Err(ClientError::Network("Failed to fetch".into())));
        session.submit_upload(&api, Some("data.csv")).await;

        let status = session.upload_panel().status.clone().unwrap();
        assert!(status.is_error());
        assert_eq!(status.text, "Error uploading file: network error: Failed to fetch");
        assert!(session.state().dataset().is_none());
    }

    // Overlapping uploads: only the latest one may populate the state.
    #[tokio::test]
    async fn test_stale_upload_response_is_discarded() {
        let mut session = session();
        let (first, _) = session.begin_upload(Some("first.csv")).unwrap();
        let (second, _) = session.begin_upload(Some("second.csv")).unwrap();

        assert!(session.finish_upload(second, dataset_reply(&["b"], &[])));
        assert!(!session.finish_upload(first, dataset_reply(&["a"], &[])));

        assert_eq!(session.state().columns(), ["b"]);
        assert_eq!(session.upload_panel().columns_text, "b");
    }
}
