use crate::shared::icons::icon;
use leptos::prelude::*;

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "package",
        "Material Prediction",
        "Estimate quantities and costs from your project parameters",
    ),
    (
        "search",
        "Vendor Discovery",
        "Find, compare and finalize suppliers for every material",
    ),
    (
        "calendar",
        "Procurement Timeline",
        "Track order deadlines, deliveries and payments",
    ),
];

#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state__icon">{icon("building")}</div>
            <h2 class="empty-state__title">"Welcome to ProcureAI"</h2>
            <p class="empty-state__text">
                "Select a project from the sidebar or create a new one to get started."
            </p>
            <div class="empty-state__features">
                {FEATURES
                    .into_iter()
                    .map(|(name, title, text)| {
                        view! {
                            <div class="feature-card">
                                <div class="feature-card__icon">{icon(name)}</div>
                                <h3>{title}</h3>
                                <p>{text}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
