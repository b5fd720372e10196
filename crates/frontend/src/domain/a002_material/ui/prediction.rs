//! Material prediction tab: summary cards, material table, cost by category

use crate::domain::a002_material::api;
use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::shared::number_format::{format_inr, format_quantity};
use contracts::domain::a002_material::aggregate::{Material, MaterialSummary};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
fn SummaryCards(summary: MaterialSummary) -> impl IntoView {
    let cards = [
        ("Total Cost", format_inr(summary.total_cost), "Estimated procurement cost"),
        (
            "Total Quantity",
            format_quantity(summary.total_quantity),
            "Across all units",
        ),
        (
            "Materials",
            summary.material_count.to_string(),
            "Material types required",
        ),
        (
            "Categories",
            summary.category_count.to_string(),
            "Material categories",
        ),
    ];

    view! {
        <div class="summary-grid">
            {cards
                .into_iter()
                .map(|(title, value, hint)| {
                    view! {
                        <div class="card summary-card">
                            <div class="summary-card__title">{title}</div>
                            <div class="summary-card__value">{value}</div>
                            <p class="muted">{hint}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn CategoryBars(summary: MaterialSummary) -> impl IntoView {
    view! {
        <div class="card">
            <h2 class="card__title">"Cost Distribution"</h2>
            <p class="card__subtitle">"Cost breakdown by material category"</p>
            <div class="category-bars">
                {summary
                    .categories
                    .into_iter()
                    .map(|share| {
                        let width = format!("width: {:.1}%", share.percent);
                        view! {
                            <div class="category-bar">
                                <div class="category-bar__label">
                                    <span>{share.category}</span>
                                    <span class="muted">
                                        {format!("{} ({:.1}%)", format_inr(share.cost), share.percent)}
                                    </span>
                                </div>
                                <div class="progress">
                                    <div class="progress__fill" style=width></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn MaterialTable(materials: Vec<Material>) -> impl IntoView {
    view! {
        <div class="card">
            <h2 class="card__title">"Detailed Material Breakdown"</h2>
            <p class="card__subtitle">
                "Complete list of predicted materials with quantities and costs"
            </p>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Material"</th>
                        <th>"Category"</th>
                        <th class="num">"Quantity"</th>
                        <th class="num">"Unit Price"</th>
                        <th class="num">"Total Cost"</th>
                    </tr>
                </thead>
                <tbody>
                    {materials
                        .into_iter()
                        .map(|m| {
                            view! {
                                <tr>
                                    <td class="strong">{m.name.clone()}</td>
                                    <td><span class="chip">{m.category.clone()}</span></td>
                                    <td class="num">{m.quantity_label()}</td>
                                    <td class="num">{format_inr(m.unit_price())}</td>
                                    <td class="num">{format_inr(m.cost)}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
pub fn MaterialPrediction() -> impl IntoView {
    let ctx = use_app_context();
    let catalog = RwSignal::new(Vec::<Material>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    // Without a prediction the fixture catalog is shown
    if ctx.prediction.get_untracked().is_none() {
        loading.set(true);
        spawn_local(async move {
            match api::fetch_materials().await {
                Ok(materials) => catalog.set(materials),
                Err(e) => {
                    log::error!("Failed to load materials: {}", e);
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    }

    let materials = Memo::new(move |_| match ctx.prediction.get() {
        Some(prediction) => prediction.materials,
        None => catalog.get(),
    });

    view! {
        <div class="tab-page prediction">
            {move || match ctx.prediction.get() {
                Some(prediction) => view! {
                    <div class="banner banner--success">
                        {icon("trending-up")}
                        <div>
                            <h3>"AI Prediction Results"</h3>
                            <p>
                                {format!(
                                    "Estimated total {} over {}",
                                    format_inr(prediction.total_cost),
                                    prediction.estimated_duration
                                )}
                            </p>
                        </div>
                    </div>
                }
                .into_any(),
                None => view! {
                    <div class="banner">
                        {icon("alert")}
                        <p>"Submit the Input Form to generate a prediction for this project."</p>
                    </div>
                }
                .into_any(),
            }}

            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading"><Spinner /></div> }
            >
                {move || {
                    let materials = materials.get();
                    let summary = MaterialSummary::from_materials(&materials);
                    view! {
                        <SummaryCards summary=summary.clone() />
                        <CategoryBars summary=summary />
                        <MaterialTable materials=materials />
                    }
                }}
            </Show>
        </div>
    }
}
