use crate::session::SessionContext;
use crate::shared::config::ClientConfig;
use crate::usecases::u101_upload_dataset::UploadWidget;
use crate::usecases::u102_translate_query::QueryWidget;
use crate::usecases::u103_execute_sql::RawSqlWidget;
use leptos::prelude::*;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    // One session per page: active dataset, panels and the chart widget.
    provide_context(SessionContext::new(&config));

    view! {
        <main class="app">
            <h1>"Natural language to SQL"</h1>
            <UploadWidget />
            <QueryWidget />
            <RawSqlWidget />
        </main>
    }
}
