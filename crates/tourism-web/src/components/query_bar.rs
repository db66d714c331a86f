use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use tourism_core::copy::{CLEAR_LABEL, INPUT_HINT};
use tourism_core::{FormView, Key};

/// Text input with the Submit/Clear pair.
#[component]
pub fn QueryBar(
    form: RwSignal<FormView>,
    on_input: impl Fn(String) + Copy + Send + Sync + 'static,
    on_submit: impl Fn() + Copy + Send + Sync + 'static,
    on_key: impl Fn(Key) + Copy + Send + Sync + 'static,
    on_clear: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let controls = move || form.with(FormView::controls);

    view! {
        <div class="query-bar">
            <input
                type="text"
                class="query-input"
                placeholder=INPUT_HINT
                prop:value=move || form.with(|f| f.query().to_string())
                disabled=move || !controls().input_enabled
                on:input=move |ev| on_input(event_target_value(&ev))
                on:keypress=move |ev: KeyboardEvent| on_key(Key::from_name(&ev.key()))
            />

            <button
                class="submit-btn"
                class:dimmed=move || !controls().submit_enabled
                disabled=move || !controls().submit_enabled
                on:click=move |_| on_submit()
            >
                {move || controls().submit_label}
            </button>

            <button
                class="clear-btn"
                disabled=move || !controls().clear_enabled
                on:click=move |_| on_clear()
            >
                {CLEAR_LABEL}
            </button>
        </div>
    }
}
