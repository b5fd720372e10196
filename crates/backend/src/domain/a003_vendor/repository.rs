use chrono::Utc;
use contracts::domain::a003_vendor::aggregate::{Vendor, VendorId};
use contracts::domain::common::Origin;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a003_vendor")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub website: Option<String>,
    pub location: String,
    pub contact: Option<String>,
    pub email: Option<String>,
    pub materials_json: String,
    pub rating: Option<f64>,
    pub rating_count: Option<i32>,
    pub item_name: Option<String>,
    pub item_price: Option<String>,
    pub item_unit: Option<String>,
    pub gst_verified: bool,
    pub trustseal_verified: bool,
    pub member_since: Option<String>,
    pub payment_status: Option<String>,
    pub delivery_status: Option<String>,
    pub notes: Option<String>,
    pub origin: String,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Vendor {
    fn from(m: Model) -> Self {
        let materials = serde_json::from_str::<Vec<String>>(&m.materials_json).unwrap_or_else(|e| {
            tracing::warn!("Vendor {} has unreadable materials list: {}", m.id, e);
            Vec::new()
        });
        Vendor {
            id: VendorId(m.id),
            name: m.name,
            website: m.website,
            location: m.location,
            contact: m.contact,
            email: m.email,
            materials,
            rating: m.rating,
            rating_count: m.rating_count.and_then(|c| u32::try_from(c).ok()),
            item_name: m.item_name,
            item_price: m.item_price,
            item_unit: m.item_unit,
            gst_verified: m.gst_verified,
            trustseal_verified: m.trustseal_verified,
            member_since: m.member_since,
            finalized: false,
            payment_status: m.payment_status,
            delivery_status: m.delivery_status,
            notes: m.notes,
            origin: Origin::parse(&m.origin),
        }
    }
}

fn to_active(vendor: &Vendor) -> anyhow::Result<ActiveModel> {
    Ok(ActiveModel {
        id: if vendor.id.0 > 0 { Set(vendor.id.0) } else { NotSet },
        name: Set(vendor.name.clone()),
        website: Set(vendor.website.clone()),
        location: Set(vendor.location.clone()),
        contact: Set(vendor.contact.clone()),
        email: Set(vendor.email.clone()),
        materials_json: Set(serde_json::to_string(&vendor.materials)?),
        rating: Set(vendor.rating),
        rating_count: Set(vendor.rating_count.and_then(|c| i32::try_from(c).ok())),
        item_name: Set(vendor.item_name.clone()),
        item_price: Set(vendor.item_price.clone()),
        item_unit: Set(vendor.item_unit.clone()),
        gst_verified: Set(vendor.gst_verified),
        trustseal_verified: Set(vendor.trustseal_verified),
        member_since: Set(vendor.member_since.clone()),
        payment_status: Set(vendor.payment_status.clone()),
        delivery_status: Set(vendor.delivery_status.clone()),
        notes: Set(vendor.notes.clone()),
        origin: Set(vendor.origin.as_str().to_string()),
        updated_at: Set(Some(Utc::now())),
    })
}

pub async fn list_all() -> anyhow::Result<Vec<Vendor>> {
    Ok(Entity::find()
        .order_by_asc(Column::Id)
        .all(get_connection()?)
        .await?
        .into_iter()
        .map(Into::into)
        .collect())
}

pub async fn get_by_id(id: VendorId) -> anyhow::Result<Option<Vendor>> {
    let result = Entity::find_by_id(id.0).one(get_connection()?).await?;
    Ok(result.map(Into::into))
}

/// Inserts a vendor; ids <= 0 are assigned by the database
pub async fn insert(vendor: &Vendor) -> anyhow::Result<VendorId> {
    let result = Entity::insert(to_active(vendor)?)
        .exec(get_connection()?)
        .await?;
    Ok(VendorId(result.last_insert_id))
}

pub async fn update(vendor: &Vendor) -> anyhow::Result<()> {
    to_active(vendor)?.update(get_connection()?).await?;
    Ok(())
}

/// Stores an upstream listing, matching an existing row by name and location
///
/// The stored row keeps its id, tracking fields and materials; listing
/// fields are refreshed.
pub async fn upsert_listing(vendor: &Vendor) -> anyhow::Result<Vendor> {
    let existing = Entity::find()
        .filter(Column::Name.eq(vendor.name.as_str()))
        .filter(Column::Location.eq(vendor.location.as_str()))
        .one(get_connection()?)
        .await?;

    match existing {
        Some(row) => {
            let mut stored: Vendor = row.into();
            for material in &vendor.materials {
                if !stored.materials.iter().any(|m| m.eq_ignore_ascii_case(material)) {
                    stored.materials.push(material.clone());
                }
            }
            stored.website = vendor.website.clone().or(stored.website);
            stored.contact = vendor.contact.clone().or(stored.contact);
            stored.email = vendor.email.clone().or(stored.email);
            stored.rating = vendor.rating.or(stored.rating);
            stored.rating_count = vendor.rating_count.or(stored.rating_count);
            stored.item_name = vendor.item_name.clone().or(stored.item_name);
            stored.item_price = vendor.item_price.clone().or(stored.item_price);
            stored.item_unit = vendor.item_unit.clone().or(stored.item_unit);
            stored.gst_verified = vendor.gst_verified;
            stored.trustseal_verified = vendor.trustseal_verified;
            stored.member_since = vendor.member_since.clone().or(stored.member_since);
            update(&stored).await?;
            Ok(stored)
        }
        None => {
            let mut fresh = vendor.clone();
            fresh.id = insert(vendor).await?;
            Ok(fresh)
        }
    }
}

pub async fn count() -> anyhow::Result<u64> {
    Ok(Entity::find().count(get_connection()?).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::fixtures;

    #[test]
    fn new_vendor_leaves_id_to_the_database() {
        let mut vendor = fixtures::vendors().remove(0);
        vendor.id = VendorId(0);
        let active = to_active(&vendor).unwrap();
        assert!(matches!(active.id, NotSet));
        assert_eq!(
            active.materials_json.unwrap(),
            r#"["Structural Steel","Metal Frameworks"]"#
        );
    }

    #[test]
    fn unreadable_materials_become_empty() {
        let vendor = fixtures::vendors().remove(1);
        let mut active = to_active(&vendor).unwrap();
        active.materials_json = Set("not json".into());
        let model = Model {
            id: 2,
            name: active.name.unwrap(),
            website: None,
            location: active.location.unwrap(),
            contact: None,
            email: None,
            materials_json: active.materials_json.unwrap(),
            rating: Some(4.6),
            rating_count: Some(-3),
            item_name: None,
            item_price: None,
            item_unit: None,
            gst_verified: false,
            trustseal_verified: false,
            member_since: None,
            payment_status: None,
            delivery_status: None,
            notes: None,
            origin: "fixture".into(),
            updated_at: None,
        };
        let back: Vendor = model.into();
        assert!(back.materials.is_empty());
        assert_eq!(back.rating_count, None);
        assert_eq!(back.origin, Origin::Fixture);
        assert!(!back.finalized);
    }
}
