use crate::layout::global_context::use_app_context;
use leptos::prelude::*;

/// Tabs of the project view, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectTab {
    #[default]
    Input,
    Prediction,
    Vendors,
    Timeline,
    Schedule,
    Assistant,
}

impl ProjectTab {
    pub const ALL: [ProjectTab; 6] = [
        ProjectTab::Input,
        ProjectTab::Prediction,
        ProjectTab::Vendors,
        ProjectTab::Timeline,
        ProjectTab::Schedule,
        ProjectTab::Assistant,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ProjectTab::Input => "input",
            ProjectTab::Prediction => "prediction",
            ProjectTab::Vendors => "vendors",
            ProjectTab::Timeline => "timeline",
            ProjectTab::Schedule => "schedule",
            ProjectTab::Assistant => "chatbot",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectTab::Input => "Input Form",
            ProjectTab::Prediction => "Material Prediction",
            ProjectTab::Vendors => "Vendors",
            ProjectTab::Timeline => "Procurement Timeline",
            ProjectTab::Schedule => "Project Schedule",
            ProjectTab::Assistant => "AI Assistant",
        }
    }
}

#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="tab-bar" role="tablist">
            {ProjectTab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class="tab-bar__item"
                            class:tab-bar__item--active=move || ctx.active_tab.get() == tab
                            role="tab"
                            data-tab=tab.key()
                            on:click=move |_| ctx.active_tab.set(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_start_with_the_input_form() {
        assert_eq!(ProjectTab::default(), ProjectTab::Input);
        assert_eq!(ProjectTab::ALL[0], ProjectTab::Input);
        assert_eq!(ProjectTab::ALL[5].label(), "AI Assistant");
    }

    #[test]
    fn tab_keys_are_unique() {
        let mut keys: Vec<_> = ProjectTab::ALL.iter().map(ProjectTab::key).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), ProjectTab::ALL.len());
    }
}
