//! Client session: the single owner of everything the controllers mutate
//!
//! Controllers live in `crate::usecases` as `begin_*`/`finish_*` pairs on
//! [`Session`]. `begin_*` resets the action's output region, checks local
//! preconditions and hands back a [`Ticket`] with the request to send;
//! `finish_*` applies the server's answer, unless a newer request of the same
//! action has been started since.

pub mod context;
pub mod panels;
pub mod ticket;

#[cfg(test)]
pub(crate) mod testing;

pub use context::{use_session, BrowserSession, SessionContext};
pub use panels::{QueryPanel, RawSqlPanel, UploadPanel};
pub use ticket::{Action, RequestSequencer, Ticket};

use crate::shared::components::chart::{ChartRenderer, ChartSurface};
use crate::shared::components::suggestion_panel::SuggestionList;
use crate::shared::state::AppState;

pub struct Session<S: ChartSurface> {
    pub(crate) state: AppState,
    pub(crate) chart: ChartRenderer<S>,
    pub(crate) upload: UploadPanel,
    pub(crate) query: QueryPanel,
    pub(crate) raw_sql: RawSqlPanel,
    pub(crate) sequencer: RequestSequencer,
}

impl<S: ChartSurface> Session<S> {
    pub fn new(surface: S) -> Self {
        Self {
            state: AppState::default(),
            chart: ChartRenderer::new(surface),
            upload: UploadPanel::default(),
            query: QueryPanel::default(),
            raw_sql: RawSqlPanel::default(),
            sequencer: RequestSequencer::default(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn chart(&self) -> &ChartRenderer<S> {
        &self.chart
    }

    pub fn upload_panel(&self) -> &UploadPanel {
        &self.upload
    }

    pub fn query_panel(&self) -> &QueryPanel {
        &self.query
    }

    pub fn raw_sql_panel(&self) -> &RawSqlPanel {
        &self.raw_sql
    }

    pub fn set_query_input(&mut self, text: impl Into<String>) {
        self.query.input = text.into();
    }

    pub fn set_raw_sql_input(&mut self, text: impl Into<String>) {
        self.raw_sql.input = text.into();
    }

    /// Suggestions region: cleared until an upload succeeds
    pub fn suggestion_list(&self) -> SuggestionList {
        match self.state.dataset() {
            Some(dataset) => SuggestionList::from_suggestions(&dataset.suggestions),
            None => SuggestionList::Cleared,
        }
    }

    /// Copies a suggestion into the query input. Returns false for an unknown index.
    pub fn pick_suggestion(&mut self, index: usize) -> bool {
        match self.state.suggestions().get(index) {
            Some(text) => {
                self.query.input = text.clone();
                true
            }
            None => false,
        }
    }

    /// Whether `ticket` still belongs to the latest request of its action
    pub(crate) fn accept(&self, ticket: Ticket) -> bool {
        if self.sequencer.is_current(ticket) {
            return true;
        }
        log::debug!("discarding stale {:?} response #{}", ticket.action(), ticket.seq());
        false
    }
}
