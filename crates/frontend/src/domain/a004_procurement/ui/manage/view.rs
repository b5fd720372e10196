use super::view_model::{ManageVm, RecordField};
use crate::shared::date_utils::{format_date, input_value};
use crate::shared::modal::Modal;
use crate::shared::number_format::{format_inr, format_quantity};
use contracts::domain::a002_material::aggregate::Material;
use contracts::domain::a004_procurement::aggregate::{
    AgreementStatus, DeliveryStatus, MaterialProcurement, PaymentStatus,
};
use contracts::domain::a004_procurement::book::ProcurementBook;
use leptos::prelude::*;
use thaw::*;

fn select_options(values: Vec<&'static str>, current: &'static str) -> impl IntoView {
    values
        .into_iter()
        .map(|v| view! { <option value=v selected={v == current}>{v}</option> })
        .collect_view()
}

#[component]
fn Field(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="field">
            <div class="field__label">{label}</div>
            <div class="field__value">{value}</div>
        </div>
    }
}

#[component]
fn BasicInfo(entry: MaterialProcurement, material: Option<Material>) -> impl IntoView {
    let vendor = entry.vendor;
    let (quantity, unit_price) = match &material {
        Some(m) => (m.quantity_label(), format_inr(m.unit_price())),
        None => ("—".to_string(), "—".to_string()),
    };
    let contact = [vendor.contact.clone(), vendor.email.clone()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" • ");

    view! {
        <section class="card">
            <h3 class="card__title">"Basic Information"</h3>
            <div class="field-grid">
                <Field label="Vendor Name" value=vendor.name.clone() />
                <Field label="Material / Equipment" value=entry.material.clone() />
                <Field label="Quantity + Unit" value=quantity />
                <Field label="Unit Price" value=unit_price />
                <Field label="Total Cost" value=format_inr(entry.record.total_amount) />
                <Field label="Contact Info" value=contact />
            </div>
        </section>
    }
}

#[component]
pub fn ManageDialog(
    material: String,
    book: RwSignal<ProcurementBook>,
    #[prop(into)] materials: Signal<Vec<Material>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = ManageVm::new(material.clone(), book);
    let material_row = {
        let name = material.clone();
        Memo::new(move |_| materials.with(|all| all.iter().find(|m| m.name == name).cloned()))
    };
    let unit = move || material_row.get().map(|m| m.unit).unwrap_or_default();

    let body = move || {
        let Some(entry) = vm.entry() else {
            return view! {
                <div class="placeholder">"This material has no finalized vendor."</div>
            }
            .into_any();
        };
        let record = entry.record.clone();
        let paid_completed = record.payment_status == PaymentStatus::Completed;

        view! {
            <div class="manage">
                <BasicInfo entry=entry.clone() material=material_row.get() />

                <section class="card">
                    <h3 class="card__title">"Procurement Status"</h3>
                    <div class="form-row">
                        <div class="form-group">
                            <label>"Agreement Status"</label>
                            <select on:change=move |ev| vm.change_command(RecordField::AgreementStatus, event_target_value(&ev))>
                                {select_options(
                                    AgreementStatus::ALL.iter().map(|s| s.as_str()).collect(),
                                    record.agreement_status.as_str(),
                                )}
                            </select>
                        </div>
                        <div class="form-group">
                            <label>"Delivery Date"</label>
                            <input
                                type="date"
                                prop:value=input_value(record.delivery_date)
                                on:change=move |ev| vm.change_command(RecordField::DeliveryDate, event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"Delivery Status"</label>
                            <select on:change=move |ev| vm.change_command(RecordField::DeliveryStatus, event_target_value(&ev))>
                                {select_options(
                                    DeliveryStatus::ALL.iter().map(|s| s.as_str()).collect(),
                                    record.delivery_status.as_str(),
                                )}
                            </select>
                        </div>
                    </div>
                </section>

                <section class="card">
                    <h3 class="card__title">"Payment Tracking"</h3>
                    <div class="field-grid">
                        <Field label="Total Amount" value=format_inr(record.total_amount) />
                        <div class="field">
                            <label class="field__label">"Payment Made"</label>
                            <input
                                type="number"
                                min="0"
                                prop:value=record.payment_made.to_string()
                                on:change=move |ev| vm.change_command(RecordField::PaymentMade, event_target_value(&ev))
                            />
                        </div>
                        <Field label="Payment Due" value=format_inr(record.payment_due()) />
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label>"Payment Status"</label>
                            <select on:change=move |ev| vm.change_command(RecordField::PaymentStatus, event_target_value(&ev))>
                                {select_options(
                                    PaymentStatus::ALL.iter().map(|s| s.as_str()).collect(),
                                    record.payment_status.as_str(),
                                )}
                            </select>
                        </div>
                        <div class="form-group">
                            <label>"Payment Due Date"</label>
                            <input
                                type="date"
                                prop:value=input_value(record.payment_due_date)
                                on:change=move |ev| vm.change_command(RecordField::PaymentDueDate, event_target_value(&ev))
                            />
                        </div>
                    </div>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=paid_completed
                        on_click=move |_| vm.mark_paid_command()
                    >
                        {if paid_completed { "Payment Completed" } else { "Mark as Paid" }}
                    </Button>
                </section>

                <section class="card">
                    <h3 class="card__title">"Notes"</h3>
                    <textarea
                        rows="2"
                        placeholder="Add remarks (e.g., 'Advance paid', 'Delay expected')"
                        prop:value=record.notes.clone()
                        on:change=move |ev| vm.change_command(RecordField::Notes, event_target_value(&ev))
                    ></textarea>
                </section>

                <section class="card">
                    <h3 class="card__title">"Delivery Logs"</h3>
                    <p class="muted">
                        {format!(
                            "Delivered so far: {} {}",
                            format_quantity(record.delivered_quantity()),
                            unit()
                        )}
                    </p>
                    {if record.logs.is_empty() {
                        view! { <div class="placeholder">"No delivery logs yet"</div> }.into_any()
                    } else {
                        record
                            .logs
                            .iter()
                            .map(|log| {
                                view! {
                                    <div class="log-row">
                                        <span class="strong">{format_date(log.date)}</span>
                                        <span>{format!("- {} {}", format_quantity(log.quantity), unit())}</span>
                                        {log.note.clone().map(|n| view! { <span class="muted">{format!("({})", n)}</span> })}
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                    <div class="log-form">
                        <input
                            type="number"
                            placeholder="Quantity delivered"
                            prop:value=move || vm.delivery_quantity.get()
                            on:input=move |ev| vm.delivery_quantity.set(event_target_value(&ev))
                            on:keydown=move |ev| {
                                if ev.key() == "Enter" {
                                    vm.add_delivery_command();
                                }
                            }
                        />
                        <input
                            type="text"
                            placeholder="Note (optional)"
                            prop:value=move || vm.delivery_note.get()
                            on:input=move |ev| vm.delivery_note.set(event_target_value(&ev))
                        />
                        <Button on_click=move |_| vm.add_delivery_command()>"Add Log"</Button>
                    </div>
                    <div class="danger-zone">
                        <button class="button button--danger" on:click=move |_| vm.remove_command(on_close)>
                            "Remove / Replace Vendor"
                        </button>
                    </div>
                </section>
            </div>
        }
        .into_any()
    };

    view! {
        <Modal
            title=format!("Manage {}", material)
            subtitle="Agreement, delivery and payment tracking"
            on_close=on_close
            wide=true
        >
            {move || vm.error.get().map(|e| view! { <div class="error-message">{e}</div> })}
            {body}
            <div class="details-actions">
                <Show when=move || vm.busy.get()>
                    <Spinner />
                </Show>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Close"
                </Button>
            </div>
        </Modal>
    }
}
