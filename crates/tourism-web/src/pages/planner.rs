use leptos::logging;
use leptos::prelude::*;
use tourism_core::{FormView, Key, SubmitOutcome};

use crate::api;
use crate::components::{query_bar::QueryBar, result_panel::ResultPanel};

#[component]
pub fn PlannerPage() -> impl IntoView {
    let form = RwSignal::new(FormView::new());

    let dispatch = move |outcome: Option<SubmitOutcome>| {
        let Some(SubmitOutcome::Send(pending)) = outcome else {
            return;
        };

        wasm_bindgen_futures::spawn_local(async move {
            let (generation, result) = api::send(pending).await;
            if let Err(e) = &result {
                logging::error!("Error: {}", e);
            }
            form.update(|f| {
                f.complete(generation, result);
            });
        });
    };

    let on_submit = move || dispatch(form.try_update(FormView::submit));
    let on_key = move |key: Key| dispatch(form.try_update(|f| f.key_pressed(key)).flatten());
    let on_input = move |text: String| form.update(|f| f.input_changed(text));
    let on_clear = move || form.update(FormView::clear);

    view! {
        <div class="page planner-page">
            <div class="card">
                <QueryBar
                    form=form
                    on_input=on_input
                    on_submit=on_submit
                    on_key=on_key
                    on_clear=on_clear
                />
                <ResultPanel form=form />
            </div>
        </div>
    }
}
