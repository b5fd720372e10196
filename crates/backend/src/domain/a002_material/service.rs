use super::repository;
use contracts::domain::a002_material::aggregate::Material;
use contracts::shared::fixtures;

pub async fn list_all() -> anyhow::Result<Vec<Material>> {
    repository::list_all().await
}

pub async fn get_by_name(name: &str) -> anyhow::Result<Option<Material>> {
    repository::get_by_name(name).await
}

pub async fn seed_fixtures() -> anyhow::Result<()> {
    if repository::count().await? > 0 {
        return Ok(());
    }
    let materials = fixtures::materials();
    for material in &materials {
        repository::insert(material).await?;
    }
    tracing::info!("Seeded {} materials", materials.len());
    Ok(())
}
