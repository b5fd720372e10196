use super::state::{contact_lines, star_row};
use crate::domain::a003_vendor::api;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a003_vendor::aggregate::Vendor;
use contracts::domain::a004_procurement::book::ProcurementBook;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
fn VendorCard(
    vendor: Vendor,
    material: StoredValue<String>,
    book: RwSignal<ProcurementBook>,
    finalizing: RwSignal<bool>,
    on_contact: Callback<Vendor>,
    on_finalize: Callback<Vendor>,
) -> impl IntoView {
    let vendor_id = vendor.id;
    // Another vendor already holds the material
    let holder = move || {
        let material = material.get_value();
        book.with(|b| b.vendor_for(&material).map(|v| v.id))
    };
    let is_winner = move || holder() == Some(vendor_id);
    let blocked = Signal::derive(move || finalizing.get() || holder().is_some());

    let for_contact = vendor.clone();
    let for_finalize = vendor.clone();

    view! {
        <div class="card vendor-card" class:vendor-card--finalized=is_winner>
            <div class="vendor-card__head">
                <div>
                    <h3 class="vendor-card__name">{vendor.name.clone()}</h3>
                    {vendor.rating.map(|r| {
                        let count = vendor.rating_count.map(|c| format!(" · {} ratings", c)).unwrap_or_default();
                        view! {
                            <div class="vendor-card__rating">
                                <span class="stars">{star_row(r)}</span>
                                <span class="muted">{format!("({:.1}/5.0){}", r, count)}</span>
                            </div>
                        }
                    })}
                </div>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_contact.run(for_contact.clone())
                >
                    {icon("message")}
                    " Contact"
                </Button>
            </div>

            <div class="vendor-card__lines">
                {contact_lines(&vendor)
                    .into_iter()
                    .map(|(name, text)| view! { <div class="muted">{icon(name)}<span>{text}</span></div> })
                    .collect_view()}
            </div>

            {vendor.item_price.clone().map(|price| {
                let item = vendor.item_name.clone().unwrap_or_default();
                let unit = vendor.item_unit.clone().map(|u| format!(" / {}", u)).unwrap_or_default();
                view! { <div class="vendor-card__price">{format!("{} {}{}", item, price, unit)}</div> }
            })}

            <div class="chips">
                {vendor
                    .materials
                    .iter()
                    .map(|m| view! { <span class="chip">{m.clone()}</span> })
                    .collect_view()}
                {vendor.gst_verified.then(|| view! {
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"GST"</Badge>
                })}
                {vendor.trustseal_verified.then(|| view! {
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>"TrustSEAL"</Badge>
                })}
                {vendor.member_since.clone().map(|since| view! { <span class="muted">{since}</span> })}
            </div>

            <div class="vendor-card__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=blocked
                    on_click=move |_| on_finalize.run(for_finalize.clone())
                >
                    {icon("check")}
                    {move || if is_winner() { " Finalized" } else { " Finalize" }}
                </Button>
            </div>
        </div>
    }
}

/// Vendor search for one material; results replace the previous list
#[component]
pub fn SearchDialog(
    material: String,
    book: RwSignal<ProcurementBook>,
    on_contact: Callback<Vendor>,
    on_close: Callback<()>,
) -> impl IntoView {
    let material = StoredValue::new(material);
    let location = RwSignal::new(String::new());
    let results = RwSignal::new(Vec::<Vendor>::new());
    let searching = RwSignal::new(false);
    let finalizing = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let search = move || {
        // One outstanding search at a time
        if searching.get_untracked() {
            return;
        }
        searching.set(true);
        error.set(None);
        let material = material.get_value();
        let location = location.get_untracked();
        spawn_local(async move {
            match api::search_vendors(&material, Some(&location)).await {
                Ok(vendors) => {
                    log::debug!("{} vendor(s) for {}", vendors.len(), material);
                    results.set(vendors);
                }
                Err(e) => {
                    results.set(vec![]);
                    error.set(Some(e));
                }
            }
            searching.set(false);
        });
    };
    search();

    let on_finalize = Callback::new(move |vendor: Vendor| {
        if finalizing.get_untracked() {
            return;
        }
        finalizing.set(true);
        let material = material.get_value();
        spawn_local(async move {
            match api::finalize_vendor(vendor.id, &material).await {
                Ok(updated) => {
                    log::info!("Finalized {} for {}", vendor.name, material);
                    results.update(|list| updated.annotate(list));
                    book.set(updated);
                }
                Err(e) => error.set(Some(e)),
            }
            finalizing.set(false);
        });
    });

    view! {
        <Modal
            title=format!("Vendors for {}", material.get_value())
            subtitle="Select and contact vendors"
            on_close=on_close
            wide=true
        >
            <div class="search-bar">
                <input
                    type="text"
                    placeholder="Location (optional)"
                    prop:value=move || location.get()
                    on:input=move |ev| location.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            search();
                        }
                    }
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || searching.get())
                    on_click=move |_| search()
                >
                    {icon("search")}
                    " Search"
                </Button>
            </div>

            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <Show
                when=move || !searching.get()
                fallback=|| view! { <div class="loading"><Spinner /></div> }
            >
                <Show
                    when=move || !results.with(Vec::is_empty)
                    fallback=|| view! { <div class="placeholder">"No vendors found for this material."</div> }
                >
                    <div class="vendor-grid">
                        <For
                            each=move || results.get()
                            key=|vendor| (vendor.id, vendor.finalized)
                            children=move |vendor| {
                                view! {
                                    <VendorCard
                                        vendor=vendor
                                        material=material
                                        book=book
                                        finalizing=finalizing
                                        on_contact=on_contact
                                        on_finalize=on_finalize
                                    />
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </Modal>
    }
}
