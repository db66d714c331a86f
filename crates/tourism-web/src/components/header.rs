use leptos::prelude::*;
use tourism_core::copy::TITLE;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>{TITLE}</h1>
        </header>
    }
}
