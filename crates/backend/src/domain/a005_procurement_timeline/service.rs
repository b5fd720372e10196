use super::repository;
use crate::domain::a004_procurement;
use contracts::domain::a005_procurement_timeline::aggregate::{ProcurementItem, ProcurementTimeline};
use contracts::shared::fixtures;

pub async fn list_items() -> anyhow::Result<Vec<ProcurementItem>> {
    repository::list_all().await
}

/// Procurement items with the finalized vendors overlaid
pub async fn timeline() -> anyhow::Result<ProcurementTimeline> {
    let items = repository::list_all().await?;
    let finalized = a004_procurement::service::list_finalized().await?;
    Ok(ProcurementTimeline::build(items, &finalized))
}

pub async fn seed_fixtures() -> anyhow::Result<()> {
    if repository::count().await? > 0 {
        return Ok(());
    }
    let items = fixtures::procurement_items();
    for item in &items {
        repository::insert(item).await?;
    }
    tracing::info!("Seeded {} procurement items", items.len());
    Ok(())
}
