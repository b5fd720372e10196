use super::state::{contact_lines, release_prompt};
use crate::domain::a003_vendor::api;
use crate::domain::a004_procurement::api as procurement_api;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a003_vendor::aggregate::{Vendor, VendorUpdateDto};
use contracts::domain::a004_procurement::book::ProcurementBook;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn ContactDialog(
    vendor: Vendor,
    book: RwSignal<ProcurementBook>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vendor_id = vendor.id;
    let error = RwSignal::new(None::<String>);
    let releasing = RwSignal::new(false);
    let held = Memo::new(move |_| book.with(|b| b.materials_of(vendor_id)));
    let vendor_name = StoredValue::new(vendor.name.clone());

    // Drops every finalization held by the vendor
    let release = move |_| {
        let prompt = release_prompt(&vendor_name.get_value(), &held.get_untracked());
        let confirmed = web_sys::window()
            .and_then(|win| win.confirm_with_message(&prompt).ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        releasing.set(true);
        spawn_local(async move {
            let dto = VendorUpdateDto {
                finalized: Some(false),
                ..VendorUpdateDto::default()
            };
            let result = match api::update_vendor(vendor_id, &dto).await {
                Ok(_) => procurement_api::fetch_book().await,
                Err(e) => Err(e),
            };
            match result {
                Ok(updated) => book.set(updated),
                Err(e) => error.set(Some(e)),
            }
            releasing.set(false);
        });
    };

    let mailto = vendor.email.clone().map(|email| format!("mailto:{}", email));
    let website = vendor.website.clone();

    view! {
        <Modal
            title=format!("Contact {}", vendor.name)
            subtitle="Send a message or view contact details"
            on_close=on_close
        >
            <div class="contact">
                {contact_lines(&vendor)
                    .into_iter()
                    .map(|(name, text)| view! { <div class="contact__line">{icon(name)}<span>{text}</span></div> })
                    .collect_view()}
                {website.map(|url| {
                    let href = url.clone();
                    view! {
                        <div class="contact__line">
                            {icon("trending-up")}
                            <a href=href target="_blank" rel="noopener">{url}</a>
                        </div>
                    }
                })}
            </div>

            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <Show when=move || !held.with(Vec::is_empty)>
                <div class="banner">
                    <p>{move || format!("Finalized for: {}", held.get().join(", "))}</p>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || releasing.get())
                        on_click=release
                    >
                        "Release vendor"
                    </Button>
                </div>
            </Show>

            <div class="details-actions">
                {mailto.map(|href| view! {
                    <a class="button button--primary" href=href>
                        {icon("mail")}
                        " Send Email"
                    </a>
                })}
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Close"
                </Button>
            </div>
        </Modal>
    }
}
