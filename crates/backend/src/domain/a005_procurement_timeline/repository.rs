use contracts::domain::a005_procurement_timeline::aggregate::{ProcurementItem, RiskStatus};
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a005_procurement_item")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub material: String,
    pub order_by: chrono::NaiveDate,
    pub delivery_start: chrono::NaiveDate,
    pub delivery_end: chrono::NaiveDate,
    pub status: String,
    pub vendor: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for ProcurementItem {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let status = RiskStatus::parse(&m.status)
            .ok_or_else(|| anyhow::anyhow!("Bad risk status '{}' for item {}", m.status, m.id))?;
        Ok(ProcurementItem {
            id: m.id,
            material: m.material,
            order_by: m.order_by,
            delivery_start: m.delivery_start,
            delivery_end: m.delivery_end,
            status,
            vendor: m.vendor,
        })
    }
}

fn to_active(item: &ProcurementItem) -> ActiveModel {
    ActiveModel {
        id: Set(item.id),
        material: Set(item.material.clone()),
        order_by: Set(item.order_by),
        delivery_start: Set(item.delivery_start),
        delivery_end: Set(item.delivery_end),
        status: Set(item.status.as_str().to_string()),
        vendor: Set(item.vendor.clone()),
    }
}

pub async fn list_all() -> anyhow::Result<Vec<ProcurementItem>> {
    Entity::find()
        .order_by_asc(Column::OrderBy)
        .order_by_asc(Column::Id)
        .all(get_connection()?)
        .await?
        .into_iter()
        .map(TryInto::try_into)
        .collect()
}

pub async fn insert(item: &ProcurementItem) -> anyhow::Result<()> {
    to_active(item).insert(get_connection()?).await?;
    Ok(())
}

pub async fn count() -> anyhow::Result<u64> {
    Ok(Entity::find().count(get_connection()?).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::fixtures;

    fn model_of(item: &ProcurementItem) -> Model {
        let a = to_active(item);
        Model {
            id: a.id.unwrap(),
            material: a.material.unwrap(),
            order_by: a.order_by.unwrap(),
            delivery_start: a.delivery_start.unwrap(),
            delivery_end: a.delivery_end.unwrap(),
            status: a.status.unwrap(),
            vendor: a.vendor.unwrap(),
        }
    }

    #[test]
    fn status_is_stored_in_kebab_case() {
        let item = fixtures::procurement_items().remove(0);
        let model = model_of(&item);
        assert_eq!(model.status, item.status.as_str());
        let back = ProcurementItem::try_from(model).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn unknown_status_is_rejected() {
        let mut model = model_of(&fixtures::procurement_items().remove(1));
        model.status = "late".into();
        assert!(ProcurementItem::try_from(model).is_err());
    }
}
