use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::number_format::format_crores;
use contracts::domain::a001_project::aggregate::{Project, ProjectStatus};
use leptos::prelude::*;

pub fn status_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Active => "status-badge status-badge--success",
        ProjectStatus::Planning => "status-badge status-badge--warning",
        ProjectStatus::Completed => "status-badge status-badge--info",
    }
}

#[component]
pub fn ProjectCard(
    project: Project,
    #[prop(into)] selected: Signal<bool>,
    on_select: Callback<()>,
) -> impl IntoView {
    let created = format_date(project.base.metadata.created_at.date_naive());

    view! {
        <button
            class="project-card"
            class:project-card--selected=move || selected.get()
            on:click=move |_| on_select.run(())
        >
            <div class="project-card__head">
                <h3 class="project-card__name">{project.name().to_string()}</h3>
                <span class=status_class(project.status)>{project.status.as_str()}</span>
            </div>
            <div class="project-card__meta">
                <div>{icon("building")}<span>{project.project_type.clone()}</span></div>
                <div>{icon("map-pin")}<span>{project.location()}</span></div>
                <div>{icon("trending-up")}<span>{format_crores(project.volume)}</span></div>
                <div>{icon("calendar")}<span>{format!("Created {}", created)}</span></div>
            </div>
        </button>
    }
}
