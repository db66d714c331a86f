use leptos::prelude::*;
use tourism_core::copy::RESPONSE_HEADING;
use tourism_core::{FormView, Panel};

use super::examples::Examples;

#[component]
pub fn ResultPanel(form: RwSignal<FormView>) -> impl IntoView {
    move || {
        form.with(|f| match f.render() {
            Panel::Error(message) => view! {
                <div class="error-panel">{message.to_string()}</div>
            }
            .into_any(),
            Panel::Answer(answer) => view! {
                <div class="response-panel">
                    <h3>{RESPONSE_HEADING}</h3>
                    <div class="response-text">{answer.to_string()}</div>
                </div>
            }
            .into_any(),
            Panel::Examples => view! { <Examples /> }.into_any(),
            Panel::Waiting => ().into_any(),
        })
    }
}
