use super::empty_state::EmptyState;
use super::project_view::ProjectView;
use crate::layout::global_context::use_app_context;
use leptos::prelude::*;

/// Selected project or the welcome screen
#[component]
pub fn Center() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <main data-zone="center" class="app-main">
            {move || match ctx.selected.get() {
                // Keyed by id so every tab remounts on project switch
                Some(id) => view! { <ProjectView project_id=id /> }.into_any(),
                None => view! { <EmptyState /> }.into_any(),
            }}
        </main>
    }
}
