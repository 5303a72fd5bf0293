use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u102_translate_query::TranslateQuery;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::session::use_session;
use crate::shared::api_client::QueryApi;
use crate::shared::components::results_view::ResultsPanel;
use crate::shared::components::status_line::StatusMessage;

#[component]
pub fn QueryWidget() -> impl IntoView {
    let ctx = use_session();

    let on_query = move |_| {
        let begun = ctx.session.try_update(|s| {
            let query = s.query_panel().input.clone();
            s.begin_query(&query)
        });
        let Some((ticket, request)) = begun.flatten() else {
            return;
        };
        let api = ctx.api.get_value();
        spawn_local(async move {
            let outcome = api.translate(&request).await;
            ctx.session.update(|s| {
                s.finish_query(ticket, outcome);
            });
        });
    };

    let input = move || ctx.session.with(|s| s.query_panel().input.clone());
    let status = ctx.query_status();
    let results = ctx.query_results();

    view! {
        <section class="panel query-panel">
            <h2>{TranslateQuery::display_name()}</h2>
            <p class="usecase-description">{TranslateQuery::description()}</p>
            <div class="query-controls">
                <input
                    type="text"
                    class="query-input"
                    placeholder="e.g. Show total sales by region"
                    prop:value=input
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        ctx.session.update(|s| s.set_query_input(value));
                    }
                />
                <Button appearance=ButtonAppearance::Primary on_click=on_query>
                    "Run query"
                </Button>
            </div>
            <StatusMessage status=status />
            <ResultsPanel results=results />
            // Drawn into by ChartJsSurface, which also toggles its visibility
            <canvas id=ctx.chart_canvas_id.get_value() style="display: none;"></canvas>
        </section>
    }
}
