use super::repository;
use crate::domain::a004_procurement;
use crate::shared::vendor_search::VendorSource;
use contracts::domain::a003_vendor::aggregate::{
    Vendor, VendorId, VendorListing, VendorSearchQuery, VendorUpdateDto,
};
use contracts::domain::a004_procurement::error::ProcurementError;
use contracts::shared::fixtures;

/// Searches vendors for a validated query
///
/// The upstream source is asked first; its accepted listings are stored in
/// the catalog. A failing upstream falls back to the catalog.
pub async fn search(
    query: &VendorSearchQuery,
    source: Option<&dyn VendorSource>,
) -> anyhow::Result<Vec<Vendor>> {
    let mut vendors = match source {
        Some(source) => match source.search(query).await {
            Ok(listings) => store_listings(query, listings).await?,
            Err(e) => {
                tracing::warn!(
                    "Vendor source '{}' failed, searching catalog: {}",
                    source.source_name(),
                    e
                );
                search_catalog(query).await?
            }
        },
        None => search_catalog(query).await?,
    };

    a004_procurement::service::book().await?.annotate(&mut vendors);
    tracing::info!(
        "Vendor search '{}' ({}) -> {} result(s)",
        query.material.trim(),
        query.location().unwrap_or("any location"),
        vendors.len()
    );
    Ok(vendors)
}

async fn store_listings(
    query: &VendorSearchQuery,
    listings: Vec<VendorListing>,
) -> anyhow::Result<Vec<Vendor>> {
    let total = listings.len();
    let mut stored = Vec::new();
    for listing in listings.into_iter().filter(|l| l.is_valid()) {
        let vendor = listing.into_vendor(&query.material);
        stored.push(repository::upsert_listing(&vendor).await?);
    }
    if stored.len() < total {
        tracing::debug!("Discarded {} incomplete listing(s)", total - stored.len());
    }
    Ok(stored)
}

async fn search_catalog(query: &VendorSearchQuery) -> anyhow::Result<Vec<Vendor>> {
    Ok(repository::list_all()
        .await?
        .into_iter()
        .filter(|v| query.matches(v))
        .collect())
}

pub async fn get_by_id(id: VendorId) -> anyhow::Result<Option<Vendor>> {
    let Some(mut vendor) = repository::get_by_id(id).await? else {
        return Ok(None);
    };
    vendor.finalized = a004_procurement::service::book().await?.is_finalized(id);
    Ok(Some(vendor))
}

/// Merges vendor-level tracking fields
///
/// `finalized: false` releases every material held by the vendor.
pub async fn update(id: VendorId, dto: &VendorUpdateDto) -> anyhow::Result<Vendor> {
    let mut vendor = repository::get_by_id(id)
        .await?
        .ok_or(ProcurementError::UnknownVendor(id.0))?;

    vendor.apply(dto);
    repository::update(&vendor).await?;

    let book = if dto.finalized == Some(false) {
        a004_procurement::service::remove_vendor(id).await?
    } else {
        a004_procurement::service::book().await?
    };
    vendor.finalized = book.is_finalized(id);
    Ok(vendor)
}

pub async fn seed_fixtures() -> anyhow::Result<()> {
    if repository::count().await? > 0 {
        return Ok(());
    }
    let vendors = fixtures::vendors();
    for vendor in &vendors {
        repository::insert(vendor).await?;
    }
    tracing::info!("Seeded {} vendors", vendors.len());
    Ok(())
}
