use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_upload_dataset::UploadDataset;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::session::use_session;
use crate::shared::api_client::QueryApi;
use crate::shared::components::status_line::StatusMessage;
use crate::shared::components::suggestion_panel::SuggestionPanel;

#[component]
pub fn UploadWidget() -> impl IntoView {
    let ctx = use_session();
    let file_input = NodeRef::<leptos::html::Input>::new();

    let on_upload = move |_| {
        let file = file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        let Some((ticket, file)) = ctx.session.try_update(|s| s.begin_upload(file)).flatten() else {
            return;
        };
        let api = ctx.api.get_value();
        spawn_local(async move {
            let outcome = api.upload(&file).await;
            ctx.session.update(|s| {
                s.finish_upload(ticket, outcome);
            });
        });
    };

    let status = ctx.upload_status();
    let columns_text = ctx.columns_text();
    let on_pick = Callback::new(move |index: usize| {
        ctx.session.update(|s| {
            s.pick_suggestion(index);
        });
    });

    view! {
        <section class="panel upload-panel">
            <h2>{UploadDataset::display_name()}</h2>
            <p class="usecase-description">{UploadDataset::description()}</p>
            <div class="upload-controls">
                <input type="file" accept=".csv,.xlsx" node_ref=file_input />
                <Button appearance=ButtonAppearance::Primary on_click=on_upload>
                    "Upload"
                </Button>
            </div>
            <StatusMessage status=status />
            <h3>"Columns"</h3>
            <p class="columns-list">{move || columns_text.get()}</p>
            <h3>"Suggested queries"</h3>
            <SuggestionPanel suggestions=ctx.suggestions() on_pick=on_pick />
        </section>
    }
}
