use super::aggregate::{ManagementRecord, ManagementUpdate, MaterialProcurement};
use super::error::ProcurementError;
use crate::domain::a002_material::aggregate::Material;
use crate::domain::a003_vendor::aggregate::{Vendor, VendorId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Finalized vendors keyed by material name. At most one per material.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcurementBook {
    entries: BTreeMap<String, MaterialProcurement>,
}

impl ProcurementBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = MaterialProcurement>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|e| (e.material.clone(), e))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, material: &str) -> Option<&MaterialProcurement> {
        self.entries.get(material)
    }

    pub fn vendor_for(&self, material: &str) -> Option<&Vendor> {
        self.get(material).map(|e| &e.vendor)
    }

    pub fn is_finalized(&self, vendor_id: VendorId) -> bool {
        self.entries.values().any(|e| e.vendor.id == vendor_id)
    }

    pub fn materials_of(&self, vendor_id: VendorId) -> Vec<String> {
        self.entries
            .values()
            .filter(|e| e.vendor.id == vendor_id)
            .map(|e| e.material.clone())
            .collect()
    }

    /// Sets `vendor` as the single winner for `material`, replacing any previous one
    pub fn finalize(&mut self, material: &Material, vendor: Vendor, now: DateTime<Utc>) -> &MaterialProcurement {
        let existing = self.entries.remove(&material.name);
        let entry = MaterialProcurement::finalize(existing, material, vendor, now);
        self.entries.entry(material.name.clone()).or_insert(entry)
    }

    /// Drops the finalized vendor and its record
    pub fn remove(&mut self, material: &str) -> Option<MaterialProcurement> {
        self.entries.remove(material)
    }

    /// Drops every finalization held by `vendor_id`
    pub fn remove_vendor(&mut self, vendor_id: VendorId) -> Vec<MaterialProcurement> {
        let materials = self.materials_of(vendor_id);
        materials
            .iter()
            .filter_map(|m| self.entries.remove(m))
            .collect()
    }

    fn entry_mut(&mut self, material: &str) -> Result<&mut MaterialProcurement, ProcurementError> {
        self.entries
            .get_mut(material)
            .ok_or_else(|| ProcurementError::NotFinalized(material.to_string()))
    }

    pub fn update(&mut self, material: &str, update: &ManagementUpdate) -> Result<&ManagementRecord, ProcurementError> {
        let entry = self.entry_mut(material)?;
        entry.record.apply(update)?;
        Ok(&entry.record)
    }

    pub fn append_delivery(
        &mut self,
        material: &str,
        quantity: f64,
        date: NaiveDate,
        note: Option<String>,
    ) -> Result<&ManagementRecord, ProcurementError> {
        let entry = self.entry_mut(material)?;
        entry.record.append_delivery(quantity, date, note)?;
        Ok(&entry.record)
    }

    pub fn mark_paid(&mut self, material: &str) -> Result<&ManagementRecord, ProcurementError> {
        let entry = self.entry_mut(material)?;
        entry.record.mark_paid();
        Ok(&entry.record)
    }

    /// Fills `vendor.finalized` from the book
    pub fn annotate(&self, vendors: &mut [Vendor]) {
        for v in vendors.iter_mut() {
            v.finalized = self.is_finalized(v.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_procurement::aggregate::PaymentStatus;
    use crate::shared::fixtures;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-09-01T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn steel() -> Material {
        fixtures::materials()
            .into_iter()
            .find(|m| m.name == "Structural Steel")
            .unwrap()
    }

    fn vendor(name: &str) -> Vendor {
        fixtures::vendors().into_iter().find(|v| v.name == name).unwrap()
    }

    #[test]
    fn finalizing_tata_for_steel_opens_a_pending_record() {
        let mut book = ProcurementBook::new();
        book.finalize(&steel(), vendor("Tata Steel Ltd."), now());
        let entry = book.get("Structural Steel").unwrap();
        assert!(entry.vendor.finalized);
        assert_eq!(entry.record.total_amount, 56_000_000);
        assert_eq!(entry.record.payment_made, 0);
        assert_eq!(entry.record.payment_status, PaymentStatus::Pending);
    }

    #[test]
    fn finalizing_another_vendor_replaces_the_winner_and_its_record() {
        let mut book = ProcurementBook::new();
        book.finalize(&steel(), vendor("Tata Steel Ltd."), now());
        book.mark_paid("Structural Steel").unwrap();

        book.finalize(&steel(), vendor("Havells India Electricals"), now());
        assert_eq!(book.len(), 1);
        assert_eq!(book.vendor_for("Structural Steel").unwrap().name, "Havells India Electricals");
        assert_eq!(book.get("Structural Steel").unwrap().record.payment_made, 0);
    }

    #[test]
    fn refinalizing_the_same_vendor_keeps_the_record() {
        let mut book = ProcurementBook::new();
        book.finalize(&steel(), vendor("Tata Steel Ltd."), now());
        book.append_delivery("Structural Steel", 40.0, now().date_naive(), None)
            .unwrap();
        book.finalize(&steel(), vendor("Tata Steel Ltd."), now());
        assert_eq!(book.get("Structural Steel").unwrap().record.logs.len(), 1);
    }

    #[test]
    fn removing_clears_entry_and_record() {
        let mut book = ProcurementBook::new();
        let tata = vendor("Tata Steel Ltd.");
        book.finalize(&steel(), tata.clone(), now());
        assert!(book.remove("Structural Steel").is_some());
        assert!(book.get("Structural Steel").is_none());
        assert!(!book.is_finalized(tata.id));
        assert_eq!(
            book.mark_paid("Structural Steel").unwrap_err(),
            ProcurementError::NotFinalized("Structural Steel".into())
        );
    }

    #[test]
    fn invalid_delivery_leaves_log_unchanged() {
        let mut book = ProcurementBook::new();
        book.finalize(&steel(), vendor("Tata Steel Ltd."), now());
        let today = now().date_naive();
        assert!(book.append_delivery("Structural Steel", -1.0, today, None).is_err());
        assert_eq!(book.get("Structural Steel").unwrap().record.logs.len(), 0);
        book.append_delivery("Structural Steel", 1.0, today, None).unwrap();
        assert_eq!(book.get("Structural Steel").unwrap().record.logs.len(), 1);
    }

    #[test]
    fn vendor_removal_drops_all_of_its_materials() {
        let mut book = ProcurementBook::new();
        let tata = vendor("Tata Steel Ltd.");
        let concrete = fixtures::materials()
            .into_iter()
            .find(|m| m.name == "Concrete (M40)")
            .unwrap();
        book.finalize(&steel(), tata.clone(), now());
        book.finalize(&concrete, tata.clone(), now());
        assert_eq!(book.materials_of(tata.id).len(), 2);
        assert_eq!(book.remove_vendor(tata.id).len(), 2);
        assert!(book.is_empty());
    }

    #[test]
    fn annotate_marks_only_finalized_vendors() {
        let mut book = ProcurementBook::new();
        book.finalize(&steel(), vendor("Tata Steel Ltd."), now());
        let mut all = fixtures::vendors();
        book.annotate(&mut all);
        let flagged: Vec<_> = all.iter().filter(|v| v.finalized).map(|v| v.name.as_str()).collect();
        assert_eq!(flagged, vec!["Tata Steel Ltd."]);
    }
}
