use super::error::ProcurementError;
use crate::domain::a002_material::aggregate::Material;
use crate::domain::a003_vendor::aggregate::Vendor;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Status enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    Pending,
    #[serde(rename = "Partially Paid")]
    PartiallyPaid,
    Completed,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 3] = [
        PaymentStatus::Pending,
        PaymentStatus::PartiallyPaid,
        PaymentStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::PartiallyPaid => "Partially Paid",
            PaymentStatus::Completed => "Completed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryStatus {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Delivered,
}

impl DeliveryStatus {
    pub const ALL: [DeliveryStatus; 3] = [
        DeliveryStatus::NotStarted,
        DeliveryStatus::InProgress,
        DeliveryStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::NotStarted => "Not Started",
            DeliveryStatus::InProgress => "In Progress",
            DeliveryStatus::Delivered => "Delivered",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgreementStatus {
    Finalized,
    #[serde(rename = "Pending Confirmation")]
    PendingConfirmation,
}

impl AgreementStatus {
    pub const ALL: [AgreementStatus; 2] = [
        AgreementStatus::Finalized,
        AgreementStatus::PendingConfirmation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgreementStatus::Finalized => "Finalized",
            AgreementStatus::PendingConfirmation => "Pending Confirmation",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

// ============================================================================
// Management record
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryLogEntry {
    pub date: NaiveDate,
    pub quantity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Payment, delivery and agreement tracking for one finalized material.
///
/// No transition rules: any status may follow any other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagementRecord {
    pub payment_status: PaymentStatus,
    pub delivery_date: Option<NaiveDate>,
    pub delivery_status: DeliveryStatus,
    pub agreement_status: AgreementStatus,
    /// INR
    pub total_amount: i64,
    /// INR
    pub payment_made: i64,
    pub payment_due_date: Option<NaiveDate>,
    pub notes: String,
    /// Append-only, insertion ordered
    pub logs: Vec<DeliveryLogEntry>,
}

impl ManagementRecord {
    pub fn new(total_amount: i64) -> Self {
        Self {
            payment_status: PaymentStatus::Pending,
            delivery_date: None,
            delivery_status: DeliveryStatus::NotStarted,
            agreement_status: AgreementStatus::Finalized,
            total_amount,
            payment_made: 0,
            payment_due_date: None,
            notes: String::new(),
            logs: Vec::new(),
        }
    }

    /// Outstanding amount; negative when overpaid
    pub fn payment_due(&self) -> i64 {
        self.total_amount - self.payment_made
    }

    pub fn delivered_quantity(&self) -> f64 {
        self.logs.iter().map(|l| l.quantity).sum()
    }

    /// Merges a partial update; absent fields keep their values
    pub fn apply(&mut self, update: &ManagementUpdate) -> Result<(), ProcurementError> {
        if let Some(amount) = update.payment_made {
            if amount < 0 {
                return Err(ProcurementError::NegativeAmount(amount));
            }
        }
        if let Some(amount) = update.total_amount {
            if amount < 0 {
                return Err(ProcurementError::NegativeAmount(amount));
            }
        }

        if let Some(v) = update.payment_status {
            self.payment_status = v;
        }
        if let Some(v) = update.delivery_date {
            self.delivery_date = v;
        }
        if let Some(v) = update.delivery_status {
            self.delivery_status = v;
        }
        if let Some(v) = update.agreement_status {
            self.agreement_status = v;
        }
        if let Some(v) = update.total_amount {
            self.total_amount = v;
        }
        if let Some(v) = update.payment_made {
            self.payment_made = v;
        }
        if let Some(v) = update.payment_due_date {
            self.payment_due_date = v;
        }
        if let Some(v) = &update.notes {
            self.notes = v.clone();
        }
        Ok(())
    }

    pub fn append_delivery(
        &mut self,
        quantity: f64,
        date: NaiveDate,
        note: Option<String>,
    ) -> Result<(), ProcurementError> {
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(ProcurementError::InvalidQuantity(quantity));
        }
        let note = note.map(|n| n.trim().to_string()).filter(|n| !n.is_empty());
        self.logs.push(DeliveryLogEntry {
            date,
            quantity,
            note,
        });
        Ok(())
    }

    /// Paid := total, status := Completed. Idempotent.
    pub fn mark_paid(&mut self) {
        self.payment_made = self.total_amount;
        self.payment_status = PaymentStatus::Completed;
    }
}

/// Parses the delivery quantity input; `None` for anything not positive and finite
pub fn parse_delivery_quantity(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|q| q.is_finite() && *q > 0.0)
}

// ============================================================================
// Finalized material
// ============================================================================

/// The finalized vendor of one material plus its management record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialProcurement {
    pub material: String,
    pub vendor: Vendor,
    pub finalized_at: DateTime<Utc>,
    pub record: ManagementRecord,
}

impl MaterialProcurement {
    /// Finalizes `vendor` for `material`.
    ///
    /// The same vendor keeps its existing record; a different vendor starts
    /// a fresh one with the material's cost as total.
    pub fn finalize(
        existing: Option<MaterialProcurement>,
        material: &Material,
        mut vendor: Vendor,
        now: DateTime<Utc>,
    ) -> Self {
        vendor.finalized = true;
        match existing {
            Some(mut current) if current.vendor.id == vendor.id => {
                current.vendor = vendor;
                current
            }
            _ => Self {
                material: material.name.clone(),
                vendor,
                finalized_at: now,
                record: ManagementRecord::new(material.cost),
            },
        }
    }
}

// ============================================================================
// Requests
// ============================================================================

/// Partial update of a management record.
///
/// Date fields distinguish "absent" (`None`) from "cleared" (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagementUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "double_option"
    )]
    pub delivery_date: Option<Option<NaiveDate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_status: Option<DeliveryStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agreement_status: Option<AgreementStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_made: Option<i64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "double_option"
    )]
    pub payment_due_date: Option<Option<NaiveDate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryLogRequest {
    pub quantity: f64,
    /// Defaults to today on the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, d).unwrap()
    }

    #[test]
    fn new_record_starts_pending() {
        let r = ManagementRecord::new(56_000_000);
        assert_eq!(r.total_amount, 56_000_000);
        assert_eq!(r.payment_made, 0);
        assert_eq!(r.payment_status, PaymentStatus::Pending);
        assert_eq!(r.delivery_status, DeliveryStatus::NotStarted);
        assert_eq!(r.agreement_status, AgreementStatus::Finalized);
        assert!(r.notes.is_empty() && r.logs.is_empty());
    }

    #[test]
    fn record_serializes_with_camel_case_and_display_strings() {
        let json = serde_json::to_value(ManagementRecord::new(10)).unwrap();
        assert_eq!(json["totalAmount"], 10);
        assert_eq!(json["paymentMade"], 0);
        assert_eq!(json["paymentStatus"], "Pending");
        assert_eq!(json["deliveryStatus"], "Not Started");
    }

    #[test]
    fn update_merges_present_fields_and_allows_backwards_moves() {
        let mut r = ManagementRecord::new(1_000);
        r.delivery_status = DeliveryStatus::Delivered;
        r.notes = "keep".into();
        r.apply(&ManagementUpdate {
            delivery_status: Some(DeliveryStatus::NotStarted),
            payment_made: Some(1_500),
            delivery_date: Some(Some(day(20))),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(r.delivery_status, DeliveryStatus::NotStarted);
        assert_eq!(r.notes, "keep");
        assert_eq!(r.payment_due(), -500);
        assert_eq!(r.delivery_date, Some(day(20)));

        r.apply(&ManagementUpdate {
            delivery_date: Some(None),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(r.delivery_date, None);
    }

    #[test]
    fn update_with_negative_amount_changes_nothing() {
        let mut r = ManagementRecord::new(1_000);
        let before = r.clone();
        let err = r
            .apply(&ManagementUpdate {
                notes: Some("x".into()),
                payment_made: Some(-1),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err, ProcurementError::NegativeAmount(-1));
        assert_eq!(r, before);
    }

    #[test]
    fn update_json_tells_absent_from_null() {
        let absent: ManagementUpdate = serde_json::from_str(r#"{"notes":"n"}"#).unwrap();
        assert_eq!(absent.delivery_date, None);
        let cleared: ManagementUpdate = serde_json::from_str(r#"{"deliveryDate":null}"#).unwrap();
        assert_eq!(cleared.delivery_date, Some(None));
        let set: ManagementUpdate =
            serde_json::from_str(r#"{"paymentStatus":"Partially Paid","deliveryDate":"2025-09-03"}"#)
                .unwrap();
        assert_eq!(set.delivery_date, Some(Some(day(3))));
        assert_eq!(set.payment_status, Some(PaymentStatus::PartiallyPaid));
    }

    #[test]
    fn delivery_log_accepts_only_positive_quantities() {
        let mut r = ManagementRecord::new(0);
        r.append_delivery(12.5, day(1), Some("  first truck ".into())).unwrap();
        r.append_delivery(7.5, day(2), Some("".into())).unwrap();
        assert!(r.append_delivery(0.0, day(3), None).is_err());
        assert!(r.append_delivery(-4.0, day(3), None).is_err());
        assert!(r.append_delivery(f64::NAN, day(3), None).is_err());
        assert_eq!(r.logs.len(), 2);
        assert_eq!(r.logs[0].note.as_deref(), Some("first truck"));
        assert_eq!(r.logs[1].note, None);
        assert_eq!(r.delivered_quantity(), 20.0);
    }

    #[test]
    fn delivery_quantity_input_parsing() {
        assert_eq!(parse_delivery_quantity(" 15 "), Some(15.0));
        assert_eq!(parse_delivery_quantity("0"), None);
        assert_eq!(parse_delivery_quantity("-2"), None);
        assert_eq!(parse_delivery_quantity("ten"), None);
        assert_eq!(parse_delivery_quantity("inf"), None);
    }

    #[test]
    fn mark_paid_is_idempotent() {
        let mut r = ManagementRecord::new(9_800_000);
        r.payment_made = 100;
        r.mark_paid();
        let once = r.clone();
        r.mark_paid();
        assert_eq!(r, once);
        assert_eq!(r.payment_made, 9_800_000);
        assert_eq!(r.payment_status, PaymentStatus::Completed);
        assert_eq!(r.payment_due(), 0);
    }
}
