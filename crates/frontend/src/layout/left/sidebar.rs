//! Project list with the "New Project" entry point

use crate::domain::a001_project::ui::card::ProjectCard;
use crate::domain::a001_project::ui::new_project::NewProjectDialog;
use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let (show_new, set_show_new) = signal(false);

    view! {
        <div class="sidebar">
            <div class="sidebar__header">
                <div class="sidebar__brand">
                    {icon("building")}
                    <div>
                        <h1 class="sidebar__title">"Smart Buy"</h1>
                        <p class="sidebar__subtitle">"Construction procurement"</p>
                    </div>
                </div>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| set_show_new.set(true)
                >
                    {icon("plus")}
                    " New Project"
                </Button>
            </div>

            <div class="sidebar__section-title">"Projects"</div>

            <Show when=move || ctx.loading.get() && ctx.projects.with(Vec::is_empty)>
                <div class="sidebar__loading">
                    <Spinner />
                </div>
            </Show>

            {move || ctx.error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <div class="sidebar__projects">
                <For
                    each=move || ctx.projects.get()
                    key=|project| project.to_string_id()
                    children=move |project| {
                        let id = project.to_string_id();
                        let id_for_click = id.clone();
                        let is_selected = Signal::derive(move || {
                            ctx.selected.get().as_deref() == Some(id.as_str())
                        });
                        view! {
                            <ProjectCard
                                project=project
                                selected=is_selected
                                on_select=Callback::new(move |_| ctx.select_project(id_for_click.clone()))
                            />
                        }
                    }
                />
            </div>

            <Show when=move || show_new.get()>
                <NewProjectDialog on_close=Callback::new(move |_| set_show_new.set(false)) />
            </Show>
        </div>
    }
}
