use crate::domain::a001_project::ui::schedule::ProjectSchedule;
use crate::domain::a002_material::ui::prediction::MaterialPrediction;
use crate::domain::a003_vendor::ui::list::VendorsTab;
use crate::domain::a005_procurement_timeline::ui::timeline::ProcurementTimelineView;
use crate::domain::a006_chat::ui::panel::ChatPanel;
use crate::layout::global_context::use_app_context;
use crate::layout::tabs::{ProjectTab, TabBar};
use crate::shared::number_format::format_crores;
use crate::usecases::u501_predict_materials::view::InputForm;
use contracts::domain::a001_project::aggregate::{Project, ProjectStatus};
use leptos::prelude::*;
use thaw::*;

fn status_color(status: ProjectStatus) -> BadgeColor {
    match status {
        ProjectStatus::Active => BadgeColor::Success,
        ProjectStatus::Planning => BadgeColor::Warning,
        ProjectStatus::Completed => BadgeColor::Informative,
    }
}

#[component]
fn ProjectHeader(project: Project) -> impl IntoView {
    let subtitle = format!(
        "{} • {} • {}",
        project.project_type,
        project.location(),
        format_crores(project.volume)
    );

    view! {
        <div class="project-header">
            <div>
                <h1 class="project-header__title">{project.name().to_string()}</h1>
                <p class="project-header__subtitle">{subtitle}</p>
            </div>
            <Badge appearance=BadgeAppearance::Tint color=status_color(project.status)>
                {project.status.as_str()}
            </Badge>
        </div>
    }
}

/// Header, tab bar and the active tab of one project
#[component]
pub fn ProjectView(project_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let project = Memo::new(move |_| ctx.selected_project());

    view! {
        {move || match project.get() {
            None => view! {
                <div class="placeholder">{format!("Project {} is not loaded", project_id)}</div>
            }
            .into_any(),
            Some(project) => {
                let tab_project = project.clone();
                view! {
                    <div class="project-view">
                        <ProjectHeader project=project />
                        <TabBar />
                        <div class="project-view__content">
                            {move || {
                                let project = tab_project.clone();
                                match ctx.active_tab.get() {
                                    ProjectTab::Input => view! { <InputForm project=project /> }.into_any(),
                                    ProjectTab::Prediction => view! { <MaterialPrediction /> }.into_any(),
                                    ProjectTab::Vendors => view! { <VendorsTab /> }.into_any(),
                                    ProjectTab::Timeline => view! { <ProcurementTimelineView /> }.into_any(),
                                    ProjectTab::Schedule => view! { <ProjectSchedule project=project /> }.into_any(),
                                    ProjectTab::Assistant => view! { <ChatPanel project=project /> }.into_any(),
                                }
                            }}
                        </div>
                    </div>
                }
                .into_any()
            }
        }}
    }
}
