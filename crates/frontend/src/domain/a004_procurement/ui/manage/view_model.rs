use crate::domain::a004_procurement::api;
use crate::shared::date_utils::parse_input;
use contracts::domain::a004_procurement::aggregate::{
    parse_delivery_quantity, AgreementStatus, DeliveryLogRequest, DeliveryStatus,
    ManagementUpdate, MaterialProcurement, PaymentStatus,
};
use contracts::domain::a004_procurement::book::ProcurementBook;
use leptos::prelude::*;

/// Form field of the management record edited through one control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    AgreementStatus,
    DeliveryStatus,
    PaymentStatus,
    DeliveryDate,
    PaymentDueDate,
    PaymentMade,
    Notes,
}

/// Partial update for one changed control; `None` when the value is not valid
pub fn field_update(field: RecordField, value: &str) -> Option<ManagementUpdate> {
    let mut update = ManagementUpdate::default();
    match field {
        RecordField::AgreementStatus => update.agreement_status = Some(AgreementStatus::parse(value)?),
        RecordField::DeliveryStatus => update.delivery_status = Some(DeliveryStatus::parse(value)?),
        RecordField::PaymentStatus => update.payment_status = Some(PaymentStatus::parse(value)?),
        // An empty date input clears the date
        RecordField::DeliveryDate => update.delivery_date = Some(parse_input(value)),
        RecordField::PaymentDueDate => update.payment_due_date = Some(parse_input(value)),
        RecordField::PaymentMade => {
            let amount = value.trim().parse::<i64>().ok().filter(|a| *a >= 0)?;
            update.payment_made = Some(amount);
        }
        RecordField::Notes => update.notes = Some(value.to_string()),
    }
    Some(update)
}

/// Delivery log request from the quantity and note inputs
pub fn delivery_request(quantity: &str, note: &str) -> Option<DeliveryLogRequest> {
    let quantity = parse_delivery_quantity(quantity)?;
    let note = Some(note.trim().to_string()).filter(|n| !n.is_empty());
    Some(DeliveryLogRequest {
        quantity,
        date: None,
        note,
    })
}

#[derive(Clone, Copy)]
pub struct ManageVm {
    pub material: StoredValue<String>,
    /// Shared with the vendors tab; replaced by every answer
    pub book: RwSignal<ProcurementBook>,
    pub delivery_quantity: RwSignal<String>,
    pub delivery_note: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub busy: RwSignal<bool>,
}

impl ManageVm {
    pub fn new(material: String, book: RwSignal<ProcurementBook>) -> Self {
        Self {
            material: StoredValue::new(material),
            book,
            delivery_quantity: RwSignal::new(String::new()),
            delivery_note: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            busy: RwSignal::new(false),
        }
    }

    pub fn entry(&self) -> Option<MaterialProcurement> {
        let material = self.material.get_value();
        self.book.with(|book| book.get(&material).cloned())
    }

    /// Runs one book call and stores the returned book
    fn run<F, Fut>(&self, call: F, on_ok: impl FnOnce() + 'static)
    where
        F: FnOnce(String) -> Fut + 'static,
        Fut: std::future::Future<Output = Result<ProcurementBook, String>> + 'static,
    {
        let this = *self;
        let material = this.material.get_value();
        this.busy.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match call(material).await {
                Ok(book) => {
                    this.book.set(book);
                    this.error.set(None);
                    on_ok();
                }
                Err(e) => {
                    log::error!("Procurement update failed: {}", e);
                    this.error.set(Some(e));
                }
            }
            this.busy.set(false);
        });
    }

    pub fn change_command(&self, field: RecordField, value: String) {
        let Some(update) = field_update(field, &value) else {
            self.error.set(Some(format!("Invalid value '{}'", value)));
            return;
        };
        self.run(
            move |material| async move { api::update_record(&material, &update).await },
            || {},
        );
    }

    /// Appends a delivery; invalid quantity leaves the log unchanged
    pub fn add_delivery_command(&self) {
        let Some(request) = delivery_request(
            &self.delivery_quantity.get_untracked(),
            &self.delivery_note.get_untracked(),
        ) else {
            return;
        };
        let this = *self;
        self.run(
            move |material| async move { api::append_delivery(&material, &request).await },
            move || {
                this.delivery_quantity.set(String::new());
                this.delivery_note.set(String::new());
            },
        );
    }

    pub fn mark_paid_command(&self) {
        self.run(
            |material| async move { api::mark_paid(&material).await },
            || {},
        );
    }

    /// Asks for confirmation, then drops the vendor and its record
    pub fn remove_command(&self, on_removed: Callback<()>) {
        let confirmed = web_sys::window()
            .and_then(|win| {
                win.confirm_with_message("Are you sure you want to remove this vendor?")
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        self.run(
            |material| async move { api::remove_finalized(&material).await },
            move || on_removed.run(()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use leptos::reactive::owner::Owner;

    #[test]
    fn status_selects_map_to_single_field_updates() {
        let update = field_update(RecordField::DeliveryStatus, "In Progress").unwrap();
        assert_eq!(update.delivery_status, Some(DeliveryStatus::InProgress));
        assert_eq!(update.payment_status, None);

        let update = field_update(RecordField::AgreementStatus, "Pending Confirmation").unwrap();
        assert_eq!(
            update.agreement_status,
            Some(AgreementStatus::PendingConfirmation)
        );
        assert!(field_update(RecordField::PaymentStatus, "Refunded").is_none());
    }

    #[test]
    fn empty_date_clears_and_valid_date_sets() {
        let cleared = field_update(RecordField::DeliveryDate, "").unwrap();
        assert_eq!(cleared.delivery_date, Some(None));
        let set = field_update(RecordField::PaymentDueDate, "2025-10-15").unwrap();
        assert_eq!(
            set.payment_due_date,
            Some(NaiveDate::from_ymd_opt(2025, 10, 15))
        );
    }

    #[test]
    fn paid_amount_must_be_a_non_negative_integer() {
        assert_eq!(
            field_update(RecordField::PaymentMade, "2500000").unwrap().payment_made,
            Some(2_500_000)
        );
        assert!(field_update(RecordField::PaymentMade, "-1").is_none());
        assert!(field_update(RecordField::PaymentMade, "lots").is_none());
    }

    #[test]
    fn invalid_delivery_quantity_is_ignored_silently() {
        Owner::new().with(|| {
            let vm = ManageVm::new("Structural Steel".into(), RwSignal::new(ProcurementBook::new()));
            for input in ["abc", "0", "-5", ""] {
                vm.delivery_quantity.set(input.to_string());
                vm.add_delivery_command();
                assert_eq!(vm.error.get_untracked(), None);
                assert!(!vm.busy.get_untracked());
                assert_eq!(vm.delivery_quantity.get_untracked(), input);
            }
        });
    }

    #[test]
    fn delivery_needs_a_positive_quantity() {
        let request = delivery_request("40", "  first lot ").unwrap();
        assert_eq!(request.quantity, 40.0);
        assert_eq!(request.note.as_deref(), Some("first lot"));
        assert!(delivery_request("40", "   ").unwrap().note.is_none());
        assert!(delivery_request("0", "").is_none());
        assert!(delivery_request("abc", "").is_none());
        assert!(delivery_request("-5", "").is_none());
    }
}
