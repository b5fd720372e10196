pub mod center;
pub mod global_context;
pub mod left;
pub mod tabs;

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Application shell
///
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |  Project header + tabs       |
/// |  (Left)   |  (Center)                    |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="app-layout">
            <div class="app-body">
                <left::Left>
                    <left::Sidebar />
                </left::Left>
                <button
                    class="sidebar-toggle"
                    title=move || if ctx.left_open.get() { "Hide projects" } else { "Show projects" }
                    on:click=move |_| ctx.toggle_left()
                >
                    {icon("panel-left")}
                </button>
                <center::Center />
            </div>
        </div>
    }
}
