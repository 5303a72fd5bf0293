use contracts::usecases::common::QueryResult;
use leptos::prelude::*;

use super::table::render_table;

pub const NO_ROWS_TEXT: &str = "No rows returned.";

/// Content of a results region
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResultsView {
    /// Cleared, or the response had no result set
    #[default]
    Empty,
    /// A result set with zero rows
    NoRows,
    /// Escaped table markup
    Table(String),
}

impl ResultsView {
    pub fn from_result(result: &QueryResult) -> Self {
        if result.is_empty() {
            ResultsView::NoRows
        } else {
            ResultsView::Table(render_table(&result.columns, &result.rows))
        }
    }
}

#[component]
pub fn ResultsPanel(#[prop(into)] results: Signal<ResultsView>) -> impl IntoView {
    view! {
        <div class="results">
            {move || match results.get() {
                ResultsView::Empty => view! {}.into_any(),
                ResultsView::NoRows => view! { <p>{NO_ROWS_TEXT}</p> }.into_any(),
                // Markup is escaped by render_table
                ResultsView::Table(html) => view! { <div class="table-wrap" inner_html=html></div> }.into_any(),
            }}
        </div>
    }
}
