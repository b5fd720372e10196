use super::repository;
use crate::domain::a002_material;
use crate::domain::a003_vendor;
use chrono::Utc;
use contracts::domain::a003_vendor::aggregate::{Vendor, VendorId};
use contracts::domain::a004_procurement::aggregate::{
    DeliveryLogRequest, ManagementUpdate, MaterialProcurement,
};
use contracts::domain::a004_procurement::book::ProcurementBook;
use contracts::domain::a004_procurement::error::ProcurementError;

async fn join_vendor(row: repository::Model) -> anyhow::Result<Option<MaterialProcurement>> {
    let vendor_id = VendorId(row.vendor_id);
    match a003_vendor::repository::get_by_id(vendor_id).await? {
        Some(vendor) => Ok(Some(row.into_procurement(vendor)?)),
        None => {
            tracing::warn!(
                "Finalized vendor {} of material '{}' no longer exists",
                vendor_id,
                row.material
            );
            Ok(None)
        }
    }
}

/// Every finalized material with its vendor and record
pub async fn list_finalized() -> anyhow::Result<Vec<MaterialProcurement>> {
    let mut entries = Vec::new();
    for row in repository::list_rows().await? {
        if let Some(entry) = join_vendor(row).await? {
            entries.push(entry);
        }
    }
    Ok(entries)
}

pub async fn book() -> anyhow::Result<ProcurementBook> {
    Ok(ProcurementBook::from_entries(list_finalized().await?))
}

/// Sets the vendor as the single winner for the material
pub async fn finalize(vendor_id: VendorId, material: &str) -> anyhow::Result<ProcurementBook> {
    let material_row = a002_material::repository::get_by_name(material)
        .await?
        .ok_or_else(|| ProcurementError::UnknownMaterial(material.to_string()))?;
    let vendor: Vendor = a003_vendor::repository::get_by_id(vendor_id)
        .await?
        .ok_or(ProcurementError::UnknownVendor(vendor_id.0))?;

    let mut book = book().await?;
    if let Some(previous) = book.vendor_for(material).filter(|v| v.id != vendor_id) {
        tracing::info!("Replacing finalized vendor '{}' for '{}'", previous.name, material);
    }

    let entry = book.finalize(&material_row, vendor, Utc::now());
    repository::save(entry).await?;
    tracing::info!("Finalized '{}' for '{}'", entry.vendor.name, material);
    Ok(book)
}

/// Drops the finalized vendor together with its management record
pub async fn remove(material: &str) -> anyhow::Result<ProcurementBook> {
    let mut book = book().await?;
    book.remove(material)
        .ok_or_else(|| ProcurementError::NotFinalized(material.to_string()))?;
    repository::delete(material).await?;
    tracing::info!("Removed finalized vendor for '{}'", material);
    Ok(book)
}

/// Releases every material held by the vendor
pub async fn remove_vendor(vendor_id: VendorId) -> anyhow::Result<ProcurementBook> {
    let mut book = book().await?;
    let released = book.remove_vendor(vendor_id);
    for entry in &released {
        repository::delete(&entry.material).await?;
    }
    if !released.is_empty() {
        tracing::info!("Vendor {} released {} material(s)", vendor_id, released.len());
    }
    Ok(book)
}

pub async fn update(material: &str, update: &ManagementUpdate) -> anyhow::Result<ProcurementBook> {
    let mut book = book().await?;
    book.update(material, update)?;
    save_entry(&book, material).await?;
    Ok(book)
}

pub async fn append_delivery(
    material: &str,
    request: DeliveryLogRequest,
) -> anyhow::Result<ProcurementBook> {
    let mut book = book().await?;
    let date = request.date.unwrap_or_else(|| Utc::now().date_naive());
    book.append_delivery(material, request.quantity, date, request.note)?;
    save_entry(&book, material).await?;
    Ok(book)
}

pub async fn mark_paid(material: &str) -> anyhow::Result<ProcurementBook> {
    let mut book = book().await?;
    book.mark_paid(material)?;
    save_entry(&book, material).await?;
    Ok(book)
}

async fn save_entry(book: &ProcurementBook, material: &str) -> anyhow::Result<()> {
    let entry = book
        .get(material)
        .ok_or_else(|| ProcurementError::NotFinalized(material.to_string()))?;
    repository::save(entry).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::initialize_database;
    use contracts::domain::a004_procurement::aggregate::PaymentStatus;

    const STEEL: &str = "Structural Steel";

    async fn vendor_id(name: &str) -> VendorId {
        a003_vendor::repository::list_all()
            .await
            .unwrap()
            .into_iter()
            .find(|v| v.name == name)
            .unwrap()
            .id
    }

    fn delivery(quantity: f64) -> DeliveryLogRequest {
        DeliveryLogRequest {
            quantity,
            date: None,
            note: None,
        }
    }

    // One test owns the process-wide connection, so the whole workflow runs in sequence.
    #[tokio::test]
    async fn procurement_workflow_against_sqlite() {
        let db_file = std::env::temp_dir().join(format!(
            "smart_buy_procurement_{}.db",
            uuid::Uuid::new_v4()
        ));
        initialize_database(&db_file).await.unwrap();
        a002_material::service::seed_fixtures().await.unwrap();
        a003_vendor::service::seed_fixtures().await.unwrap();
        let tata = vendor_id("Tata Steel Ltd.").await;
        let havells = vendor_id("Havells India Electricals").await;

        // finalize opens a pending record priced at the material cost
        let book = finalize(tata, STEEL).await.unwrap();
        let entry = book.get(STEEL).unwrap();
        assert_eq!(entry.vendor.id, tata);
        assert_eq!(entry.record.total_amount, 56_000_000);
        assert_eq!(entry.record.payment_made, 0);
        assert_eq!(entry.record.payment_status, PaymentStatus::Pending);

        // invalid quantity is rejected and the stored log stays empty
        let err = append_delivery(STEEL, delivery(-1.0)).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<ProcurementError>(),
            Some(&ProcurementError::InvalidQuantity(-1.0))
        );
        assert_eq!(book_logs_len().await, 0);

        let book = append_delivery(STEEL, delivery(40.0)).await.unwrap();
        assert_eq!(book.get(STEEL).unwrap().record.logs.len(), 1);
        assert_eq!(book_logs_len().await, 1);

        let notes = ManagementUpdate {
            notes: Some("Advance paid".into()),
            ..ManagementUpdate::default()
        };
        update(STEEL, &notes).await.unwrap();

        // mark paid is idempotent and persisted
        mark_paid(STEEL).await.unwrap();
        let book = mark_paid(STEEL).await.unwrap();
        let record = &book.get(STEEL).unwrap().record;
        assert_eq!(record.payment_made, record.total_amount);
        assert_eq!(record.payment_status, PaymentStatus::Completed);
        assert_eq!(record.notes, "Advance paid");
        assert_eq!(super::book().await.unwrap(), book);

        // same vendor again keeps the record, another vendor replaces it
        let book = finalize(tata, STEEL).await.unwrap();
        assert_eq!(book.get(STEEL).unwrap().record.logs.len(), 1);
        let book = finalize(havells, STEEL).await.unwrap();
        assert_eq!(book.len(), 1);
        assert_eq!(book.vendor_for(STEEL).unwrap().id, havells);
        assert_eq!(book.get(STEEL).unwrap().record.payment_made, 0);

        // remove clears the entry; a second remove is NotFinalized
        let book = remove(STEEL).await.unwrap();
        assert!(book.get(STEEL).is_none());
        assert!(super::book().await.unwrap().is_empty());
        let err = remove(STEEL).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<ProcurementError>(),
            Some(&ProcurementError::NotFinalized(STEEL.into()))
        );

        // releasing a vendor drops every material it holds
        finalize(tata, STEEL).await.unwrap();
        finalize(tata, "Concrete (M40)").await.unwrap();
        let book = remove_vendor(tata).await.unwrap();
        assert!(book.is_empty());
        assert!(super::book().await.unwrap().is_empty());

        let err = finalize(tata, "Unobtainium").await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<ProcurementError>(),
            Some(&ProcurementError::UnknownMaterial("Unobtainium".into()))
        );

        let _ = std::fs::remove_file(&db_file);
    }

    async fn book_logs_len() -> usize {
        super::book()
            .await
            .unwrap()
            .get(STEEL)
            .map(|e| e.record.logs.len())
            .unwrap_or(0)
    }
}
