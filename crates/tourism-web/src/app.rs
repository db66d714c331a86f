use leptos::prelude::*;

use crate::components::header::Header;
use crate::pages::planner::PlannerPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app">
            <Header />
            <main class="content">
                <PlannerPage />
            </main>
        </div>
    }
}
