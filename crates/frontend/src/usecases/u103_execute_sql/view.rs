use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u103_execute_sql::ExecuteSql;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::session::use_session;
use crate::shared::api_client::QueryApi;
use crate::shared::components::results_view::ResultsPanel;
use crate::shared::components::status_line::StatusMessage;

#[component]
pub fn RawSqlWidget() -> impl IntoView {
    let ctx = use_session();

    let on_execute = move |_| {
        let begun = ctx.session.try_update(|s| {
            let raw_sql = s.raw_sql_panel().input.clone();
            s.begin_raw_sql(&raw_sql)
        });
        let Some((ticket, request)) = begun.flatten() else {
            return;
        };
        let api = ctx.api.get_value();
        spawn_local(async move {
            let outcome = api.execute_sql(&request).await;
            ctx.session.update(|s| {
                s.finish_raw_sql(ticket, outcome);
            });
        });
    };

    let input = move || ctx.session.with(|s| s.raw_sql_panel().input.clone());
    let status = ctx.raw_sql_status();
    let results = ctx.raw_sql_results();

    view! {
        <section class="panel raw-sql-panel">
            <h2>{ExecuteSql::display_name()}</h2>
            <p class="usecase-description">{ExecuteSql::description()}</p>
            <textarea
                class="raw-sql-input"
                rows="4"
                placeholder="SELECT * FROM table_name LIMIT 10"
                prop:value=input
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    ctx.session.update(|s| s.set_raw_sql_input(value));
                }
            ></textarea>
            <Button appearance=ButtonAppearance::Primary on_click=on_execute>
                "Execute SQL"
            </Button>
            <StatusMessage status=status />
            <ResultsPanel results=results />
        </section>
    }
}
