use leptos::prelude::*;
use tourism_core::copy::{quoted, EXAMPLES_HEADING, EXAMPLES_INTRO, EXAMPLE_QUERIES};

#[component]
pub fn Examples() -> impl IntoView {
    view! {
        <div class="examples">
            <p>{EXAMPLES_INTRO}</p>
            <p>{EXAMPLES_HEADING}</p>
            <ul>
                {EXAMPLE_QUERIES.iter().map(|q| view! { <li>{quoted(q)}</li> }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
