//! Vendors tab: materials with their finalized vendor and the dialogs

mod contact_dialog;
mod search_dialog;
pub mod state;

use crate::domain::a002_material::api as material_api;
use crate::domain::a004_procurement::api as procurement_api;
use crate::domain::a004_procurement::ui::manage::ManageDialog;
use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::shared::number_format::format_quantity;
use contact_dialog::ContactDialog;
use contracts::domain::a002_material::aggregate::Material;
use contracts::domain::a003_vendor::aggregate::Vendor;
use contracts::domain::a004_procurement::book::ProcurementBook;
use leptos::prelude::*;
use leptos::task::spawn_local;
use search_dialog::SearchDialog;
use state::filter_materials;
use thaw::*;

#[component]
pub fn VendorsTab() -> impl IntoView {
    let ctx = use_app_context();
    let catalog = RwSignal::new(Vec::<Material>::new());
    let book = RwSignal::new(ProcurementBook::new());
    let filter = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let search_for = RwSignal::new(None::<String>);
    let contact = RwSignal::new(None::<Vendor>);
    let manage = RwSignal::new(None::<String>);

    spawn_local(async move {
        match procurement_api::fetch_book().await {
            Ok(loaded) => book.set(loaded),
            Err(e) => error.set(Some(e)),
        }
    });
    if ctx.prediction.get_untracked().is_none() {
        spawn_local(async move {
            match material_api::fetch_materials().await {
                Ok(materials) => catalog.set(materials),
                Err(e) => error.set(Some(e)),
            }
        });
    }

    let materials = Signal::derive(move || match ctx.prediction.get() {
        Some(prediction) => prediction.materials,
        None => catalog.get(),
    });
    let visible = Memo::new(move |_| filter_materials(&materials.get(), &filter.get()));

    view! {
        <div class="tab-page vendors">
            <Show when=move || ctx.prediction_done()>
                <div class="banner banner--success">
                    {icon("trending-up")}
                    <div>
                        <h3>"AI Prediction Results"</h3>
                        <p>"Based on your project requirements, we've identified the best vendors for your materials."</p>
                    </div>
                </div>
            </Show>

            <div class="card">
                <h2 class="card__title">"Vendor Management"</h2>
                <p class="card__subtitle">
                    "Track materials, compare vendors, and finalize selections"
                    {move || {
                        (!book.with(ProcurementBook::is_empty))
                            .then(|| format!(" • {} finalized", book.with(ProcurementBook::len)))
                    }}
                </p>
                <div class="search-bar">
                    {icon("search")}
                    <input
                        type="text"
                        placeholder="Search materials..."
                        prop:value=move || filter.get()
                        on:input=move |ev| filter.set(event_target_value(&ev))
                    />
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <div class="card card--flush">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Material / Equipment"</th>
                            <th class="num">"Quantity"</th>
                            <th>"Unit"</th>
                            <th>"Status"</th>
                            <th class="actions">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible.get()
                            key=|m| m.id
                            children=move |m| {
                                let name = StoredValue::new(m.name.clone());
                                let finalized = Memo::new(move |_| {
                                    book.with(|b| b.vendor_for(&name.get_value()).cloned())
                                });
                                view! {
                                    <tr class:row--finalized=move || finalized.with(Option::is_some)>
                                        <td class="strong">
                                            {move || finalized.with(Option::is_some).then(|| icon("check"))}
                                            {m.name.clone()}
                                        </td>
                                        <td class="num">{format_quantity(m.quantity)}</td>
                                        <td>{m.unit.clone()}</td>
                                        <td>
                                            {move || match finalized.get() {
                                                Some(vendor) => view! {
                                                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>
                                                        {format!("Selected: {}", vendor.name)}
                                                    </Badge>
                                                }
                                                .into_any(),
                                                None => view! { <span class="muted">"Not selected"</span> }.into_any(),
                                            }}
                                        </td>
                                        <td class="actions">
                                            <Button
                                                appearance=ButtonAppearance::Secondary
                                                on_click=move |_| search_for.set(Some(name.get_value()))
                                            >
                                                "See Vendors"
                                            </Button>
                                            {move || finalized.get().map(|vendor| view! {
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| contact.set(Some(vendor.clone()))
                                                >
                                                    {icon("message")}
                                                    " Contact Vendor"
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Primary
                                                    on_click=move |_| manage.set(Some(name.get_value()))
                                                >
                                                    "Manage"
                                                </Button>
                                            })}
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>

            {move || search_for.get().map(|material| view! {
                <SearchDialog
                    material=material
                    book=book
                    on_contact=Callback::new(move |vendor| contact.set(Some(vendor)))
                    on_close=Callback::new(move |_| search_for.set(None))
                />
            })}
            {move || contact.get().map(|vendor| view! {
                <ContactDialog
                    vendor=vendor
                    book=book
                    on_close=Callback::new(move |_| contact.set(None))
                />
            })}
            {move || manage.get().map(|material| view! {
                <ManageDialog
                    material=material
                    book=book
                    materials=materials
                    on_close=Callback::new(move |_| manage.set(None))
                />
            })}
        </div>
    }
}
