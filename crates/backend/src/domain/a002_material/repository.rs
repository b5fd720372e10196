use contracts::domain::a002_material::aggregate::{Material, MaterialId};
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a002_material")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub cost: i64,
    pub category: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Material {
    fn from(m: Model) -> Self {
        Material {
            id: MaterialId(m.id),
            name: m.name,
            quantity: m.quantity,
            unit: m.unit,
            cost: m.cost,
            category: m.category,
        }
    }
}

pub async fn list_all() -> anyhow::Result<Vec<Material>> {
    Ok(Entity::find()
        .order_by_asc(Column::Id)
        .all(get_connection()?)
        .await?
        .into_iter()
        .map(Into::into)
        .collect())
}

pub async fn get_by_name(name: &str) -> anyhow::Result<Option<Material>> {
    let result = Entity::find()
        .filter(Column::Name.eq(name))
        .one(get_connection()?)
        .await?;
    Ok(result.map(Into::into))
}

pub async fn insert(material: &Material) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(material.id.0),
        name: Set(material.name.clone()),
        quantity: Set(material.quantity),
        unit: Set(material.unit.clone()),
        cost: Set(material.cost),
        category: Set(material.category.clone()),
    };
    active.insert(get_connection()?).await?;
    Ok(())
}

pub async fn count() -> anyhow::Result<u64> {
    Ok(Entity::find().count(get_connection()?).await?)
}
