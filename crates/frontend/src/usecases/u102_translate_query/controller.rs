use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u102_translate_query::{TranslateQuery, TranslateRequest, TranslateResponse};

use crate::session::{Action, Session, Ticket};
use crate::shared::api_client::{ApiReply, ApiResult, QueryApi};
use crate::shared::components::chart::ChartSurface;
use crate::shared::components::results_view::ResultsView;
use crate::shared::components::status_line::StatusLine;

pub const UPLOAD_FIRST: &str = "Please upload a file first.";
pub const ENTER_QUERY: &str = "Please enter a query.";
pub const QUERY_FAILED: &str = "Query failed.";
pub const INVALID_FORMAT_TEXT: &str = "Invalid query format.";
pub const QUERY_ERROR_PREFIX: &str = "Error processing query: ";

/// Status text for a question the server could not parse
pub fn invalid_format_text(corrected: Option<&str>) -> String {
    match corrected.filter(|c| !c.is_empty()) {
        Some(corrected) => format!("{} Did you mean: \"{}\"?", INVALID_FORMAT_TEXT, corrected),
        None => INVALID_FORMAT_TEXT.to_string(),
    }
}

impl<S: ChartSurface> Session<S> {
    /// Clears query output, hides the chart, then checks for a dataset and a non-blank query
    pub fn begin_query(&mut self, query: &str) -> Option<(Ticket, TranslateRequest)> {
        let ticket = self.sequencer.issue(Action::Query);
        self.query.reset_output();
        self.chart.hide();

        let Some(table_name) = self.state.table_name().filter(|t| !t.is_empty()) else {
            self.query.status = Some(StatusLine::error(UPLOAD_FIRST));
            return None;
        };
        if query.trim().is_empty() {
            self.query.status = Some(StatusLine::error(ENTER_QUERY));
            return None;
        }

        let request = TranslateRequest {
            query: query.to_string(),
            table_name: table_name.to_string(),
        };
        log::debug!("{}: {:?} on {} (#{})", TranslateQuery::full_name(), request.query, request.table_name, ticket.seq());
        Some((ticket, request))
    }

    /// Applies a `/translate` outcome. Returns false if the response was stale.
    pub fn finish_query(&mut self, ticket: Ticket, outcome: ApiResult<TranslateResponse>) -> bool {
        if !self.accept(ticket) {
            return false;
        }

        match outcome {
            Ok(ApiReply::Accepted(response)) if response.is_invalid_format() => {
                let text = invalid_format_text(response.corrected.as_deref());
                self.query.status = Some(StatusLine::error(text));
            }
            Ok(ApiReply::Accepted(response)) => {
                self.query.status = Some(StatusLine::success(format!("SQL: {}", response.sql)));

                if let Some(result) = response.into_result() {
                    self.query.results = ResultsView::from_result(&result);
                    if !result.is_empty() && result.is_two_column() {
                        if let Err(e) = self.chart.render(&result) {
                            log::error!("failed to draw chart: {}", e);
                        }
                    }
                }
            }
            Ok(ApiReply::Rejected { status, error }) => {
                log::warn!("query rejected with HTTP {}: {:?}", status, error);
                let text = error.unwrap_or_else(|| QUERY_FAILED.to_string());
                self.query.status = Some(StatusLine::error(text));
            }
            Err(e) => {
                log::error!("query failed: {}", e);
                self.query.status = Some(StatusLine::error(format!("{}{}", QUERY_ERROR_PREFIX, e)));
            }
        }
        true
    }

    pub async fn submit_query<A: QueryApi>(&mut self, api: &A, query: &str) {
        if let Some((ticket, request)) = self.begin_query(query) {
            let outcome = api.translate(&request).await;
            self.finish_query(ticket, outcome);
        }
    }
}
