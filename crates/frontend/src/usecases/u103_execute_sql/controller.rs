use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u103_execute_sql::{ExecuteSql, ExecuteSqlRequest, ExecuteSqlResponse};

use crate::session::{Action, Session, Ticket};
use crate::shared::api_client::{ApiReply, ApiResult, QueryApi};
use crate::shared::components::chart::ChartSurface;
use crate::shared::components::results_view::ResultsView;
use crate::shared::components::status_line::StatusLine;

pub const ENTER_SQL: &str = "Please enter a SQL statement.";
pub const SQL_FAILED: &str = "SQL execution failed.";
pub const SQL_EXECUTED: &str = "SQL executed successfully!";
pub const SQL_ERROR_PREFIX: &str = "Error executing SQL: ";

impl<S: ChartSurface> Session<S> {
    /// Clears raw SQL output and checks the statement is not blank
    ///
    /// Does not need an uploaded dataset; the server decides what the statement can see.
    pub fn begin_raw_sql(&mut self, raw_sql: &str) -> Option<(Ticket, ExecuteSqlRequest)> {
        let ticket = self.sequencer.issue(Action::RawSql);
        self.raw_sql.reset_output();

        if raw_sql.trim().is_empty() {
            self.raw_sql.status = Some(StatusLine::error(ENTER_SQL));
            return None;
        }

        log::debug!("{}: sending statement (#{})", ExecuteSql::full_name(), ticket.seq());
        Some((
            ticket,
            ExecuteSqlRequest {
                raw_sql: raw_sql.to_string(),
            },
        ))
    }

    /// Applies an `/execute_sql` outcome; never draws a chart.
    /// Returns false if the response was stale.
    pub fn finish_raw_sql(&mut self, ticket: Ticket, outcome: ApiResult<ExecuteSqlResponse>) -> bool {
        if !self.accept(ticket) {
            return false;
        }

        match outcome {
            Ok(ApiReply::Accepted(response)) => {
                self.raw_sql.status = Some(StatusLine::success(SQL_EXECUTED));
                if let Some(result) = response.into_result() {
                    self.raw_sql.results = ResultsView::from_result(&result);
                }
            }
            Ok(ApiReply::Rejected { status, error }) => {
                log::warn!("statement rejected with HTTP {}: {:?}", status, error);
                let text = error.unwrap_or_else(|| SQL_FAILED.to_string());
                self.raw_sql.status = Some(StatusLine::error(text));
            }
            Err(e) => {
                log::error!("statement failed: {}", e);
                self.raw_sql.status = Some(StatusLine::error(format!("{}{}", SQL_ERROR_PREFIX, e)));
            }
        }
        true
    }

    pub async fn submit_raw_sql<A: QueryApi>(&mut self, api: &A, raw_sql: &str) {
        if let Some((ticket, request)) = self.begin_raw_sql(raw_sql) {
            let outcome = api.execute_sql(&request).await;
            self.finish_raw_sql(ticket, outcome);
        }
    }
}
