use leptos::prelude::*;

use super::Session;
use crate::shared::api_client::HttpQueryApi;
use crate::shared::components::chart::ChartJsSurface;
use crate::shared::components::results_view::ResultsView;
use crate::shared::components::status_line::StatusLine;
use crate::shared::components::suggestion_panel::SuggestionList;
use crate::shared::config::ClientConfig;

pub type BrowserSession = Session<ChartJsSurface>;

/// Session and API client shared by every widget through Leptos context
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Local storage: the chart handle is a JS object
    pub session: RwSignal<BrowserSession, LocalStorage>,
    pub api: StoredValue<HttpQueryApi>,
    pub chart_canvas_id: StoredValue<String>,
}

impl SessionContext {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            session: RwSignal::new_local(Session::new(ChartJsSurface::new(config.chart.clone()))),
            api: StoredValue::new(HttpQueryApi::new(config.api.base_url.clone())),
            chart_canvas_id: StoredValue::new(config.chart.canvas_id.clone()),
        }
    }

    // Every session update notifies its readers. The memos below only pass a
    // change on when their slice differs, so typing leaves other regions alone.

    pub fn upload_status(self) -> Memo<Option<StatusLine>> {
        Memo::new(move |_| self.session.with(|s| s.upload_panel().status.clone()))
    }

    pub fn columns_text(self) -> Memo<String> {
        Memo::new(move |_| self.session.with(|s| s.upload_panel().columns_text.clone()))
    }

    pub fn suggestions(self) -> Memo<SuggestionList> {
        Memo::new(move |_| self.session.with(|s| s.suggestion_list()))
    }

    pub fn query_status(self) -> Memo<Option<StatusLine>> {
        Memo::new(move |_| self.session.with(|s| s.query_panel().status.clone()))
    }

    pub fn query_results(self) -> Memo<ResultsView> {
        Memo::new(move |_| self.session.with(|s| s.query_panel().results.clone()))
    }

    pub fn raw_sql_status(self) -> Memo<Option<StatusLine>> {
        Memo::new(move |_| self.session.with(|s| s.raw_sql_panel().status.clone()))
    }

    pub fn raw_sql_results(self) -> Memo<ResultsView> {
        Memo::new(move |_| self.session.with(|s| s.raw_sql_panel().results.clone()))
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext context not found")
}
