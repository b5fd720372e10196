use chrono::Utc;
use contracts::domain::a003_vendor::aggregate::Vendor;
use contracts::domain::a004_procurement::aggregate::{
    AgreementStatus, DeliveryLogEntry, DeliveryStatus, ManagementRecord, MaterialProcurement,
    PaymentStatus,
};
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, Set};

use crate::shared::data::db::get_connection;

/// One row per material: the finalized vendor plus its management record
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a004_material_procurement")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub material: String,
    pub vendor_id: i64,
    pub finalized_at: chrono::DateTime<chrono::Utc>,
    pub payment_status: String,
    pub delivery_date: Option<chrono::NaiveDate>,
    pub delivery_status: String,
    pub agreement_status: String,
    pub total_amount: i64,
    pub payment_made: i64,
    pub payment_due_date: Option<chrono::NaiveDate>,
    pub notes: String,
    pub delivery_logs_json: String,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn record(&self) -> anyhow::Result<ManagementRecord> {
        let parse_err = |field: &str, value: &str| {
            anyhow::anyhow!("Bad {} '{}' for material {}", field, value, self.material)
        };
        let logs: Vec<DeliveryLogEntry> = serde_json::from_str(&self.delivery_logs_json)
            .map_err(|e| anyhow::anyhow!("Bad delivery log for {}: {}", self.material, e))?;

        Ok(ManagementRecord {
            payment_status: PaymentStatus::parse(&self.payment_status)
                .ok_or_else(|| parse_err("payment status", &self.payment_status))?,
            delivery_date: self.delivery_date,
            delivery_status: DeliveryStatus::parse(&self.delivery_status)
                .ok_or_else(|| parse_err("delivery status", &self.delivery_status))?,
            agreement_status: AgreementStatus::parse(&self.agreement_status)
                .ok_or_else(|| parse_err("agreement status", &self.agreement_status))?,
            total_amount: self.total_amount,
            payment_made: self.payment_made,
            payment_due_date: self.payment_due_date,
            notes: self.notes.clone(),
            logs,
        })
    }

    /// Joins the row with its vendor
    pub fn into_procurement(self, vendor: Vendor) -> anyhow::Result<MaterialProcurement> {
        let record = self.record()?;
        let mut vendor = vendor;
        vendor.finalized = true;
        Ok(MaterialProcurement {
            material: self.material,
            vendor,
            finalized_at: self.finalized_at,
            record,
        })
    }
}

fn to_active(entry: &MaterialProcurement, version: i32) -> anyhow::Result<ActiveModel> {
    let r = &entry.record;
    Ok(ActiveModel {
        material: Set(entry.material.clone()),
        vendor_id: Set(entry.vendor.id.0),
        finalized_at: Set(entry.finalized_at),
        payment_status: Set(r.payment_status.as_str().to_string()),
        delivery_date: Set(r.delivery_date),
        delivery_status: Set(r.delivery_status.as_str().to_string()),
        agreement_status: Set(r.agreement_status.as_str().to_string()),
        total_amount: Set(r.total_amount),
        payment_made: Set(r.payment_made),
        payment_due_date: Set(r.payment_due_date),
        notes: Set(r.notes.clone()),
        delivery_logs_json: Set(serde_json::to_string(&r.logs)?),
        updated_at: Set(Some(Utc::now())),
        version: Set(version),
    })
}

pub async fn list_rows() -> anyhow::Result<Vec<Model>> {
    Ok(Entity::find()
        .order_by_asc(Column::Material)
        .all(get_connection()?)
        .await?)
}

pub async fn get_row(material: &str) -> anyhow::Result<Option<Model>> {
    Ok(Entity::find_by_id(material.to_string())
        .one(get_connection()?)
        .await?)
}

/// Writes the whole entry in one statement; a replaced vendor overwrites the row
pub async fn save(entry: &MaterialProcurement) -> anyhow::Result<()> {
    let db = get_connection()?;
    match get_row(&entry.material).await? {
        Some(existing) => {
            to_active(entry, existing.version + 1)?.update(db).await?;
        }
        None => {
            to_active(entry, 0)?.insert(db).await?;
        }
    }
    Ok(())
}

pub async fn delete(material: &str) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(material.to_string())
        .exec(get_connection()?)
        .await?;
    Ok(result.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::fixtures;

    fn entry() -> MaterialProcurement {
        let steel = fixtures::materials().remove(0);
        let tata = fixtures::vendors().remove(0);
        let mut entry = MaterialProcurement::finalize(None, &steel, tata, Utc::now());
        entry
            .record
            .append_delivery(40.0, Utc::now().date_naive(), Some("first lot".into()))
            .unwrap();
        entry
    }

    fn row_of(entry: &MaterialProcurement) -> Model {
        let a = to_active(entry, 3).unwrap();
        Model {
            material: a.material.unwrap(),
            vendor_id: a.vendor_id.unwrap(),
            finalized_at: a.finalized_at.unwrap(),
            payment_status: a.payment_status.unwrap(),
            delivery_date: a.delivery_date.unwrap(),
            delivery_status: a.delivery_status.unwrap(),
            agreement_status: a.agreement_status.unwrap(),
            total_amount: a.total_amount.unwrap(),
            payment_made: a.payment_made.unwrap(),
            payment_due_date: a.payment_due_date.unwrap(),
            notes: a.notes.unwrap(),
            delivery_logs_json: a.delivery_logs_json.unwrap(),
            updated_at: a.updated_at.unwrap(),
            version: a.version.unwrap(),
        }
    }

    #[test]
    fn row_stores_display_strings_and_restores_the_record() {
        let entry = entry();
        let row = row_of(&entry);
        assert_eq!(row.payment_status, "Pending");
        assert_eq!(row.delivery_status, "Not Started");
        assert_eq!(row.total_amount, 56_000_000);
        let restored = row.into_procurement(fixtures::vendors().remove(0)).unwrap();
        assert_eq!(restored.record, entry.record);
        assert!(restored.vendor.finalized);
    }

    #[test]
    fn unknown_status_text_is_an_error() {
        let mut row = row_of(&entry());
        row.delivery_status = "Lost".into();
        assert!(row.record().is_err());
    }
}
