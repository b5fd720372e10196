use crate::domain::common::Origin;
use serde::{Deserialize, Serialize};

pub const UNKNOWN_VENDOR: &str = "Unknown Vendor";
pub const LOCATION_NOT_SPECIFIED: &str = "Location not specified";

/// Minimum number of meaningful fields a listing needs to be kept
pub const MIN_MEANINGFUL_FIELDS: usize = 3;

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VendorId(pub i64);

impl VendorId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for VendorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Vendor
// ============================================================================

/// Vendor directory entry.
///
/// `finalized` is never stored. It is filled from the procurement book
/// every time a vendor is returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: VendorId,
    #[serde(rename = "vendor")]
    pub name: String,
    #[serde(rename = "vendor_website", default)]
    pub website: Option<String>,
    pub location: String,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Materials the vendor supplies
    #[serde(default)]
    pub materials: Vec<String>,

    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub rating_count: Option<u32>,
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(default)]
    pub item_price: Option<String>,
    #[serde(default)]
    pub item_unit: Option<String>,
    #[serde(default)]
    pub gst_verified: bool,
    #[serde(default)]
    pub trustseal_verified: bool,
    #[serde(default)]
    pub member_since: Option<String>,

    #[serde(default)]
    pub finalized: bool,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub delivery_status: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default = "default_origin")]
    pub origin: Origin,
}

fn default_origin() -> Origin {
    Origin::Self_
}

impl Vendor {
    pub fn supplies(&self, material: &str) -> bool {
        let needle = material.trim().to_lowercase();
        self.materials
            .iter()
            .any(|m| m.to_lowercase().contains(&needle))
    }

    pub fn is_in(&self, location: &str) -> bool {
        self.location
            .to_lowercase()
            .contains(&location.trim().to_lowercase())
    }

    /// Applies a vendor-level update. `finalized` is handled by the caller.
    pub fn apply(&mut self, update: &VendorUpdateDto) {
        if let Some(status) = &update.payment_status {
            self.payment_status = Some(status.clone());
        }
        if let Some(status) = &update.delivery_status {
            self.delivery_status = Some(status.clone());
        }
        if let Some(notes) = &update.notes {
            self.notes = Some(notes.clone());
        }
    }
}

// ============================================================================
// Upstream listing
// ============================================================================

/// Raw listing as returned by the upstream vendor search service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VendorListing {
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub vendor_website: Option<String>,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub rating_count: Option<String>,
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(default)]
    pub item_price: Option<String>,
    #[serde(default)]
    pub item_unit: Option<String>,
    #[serde(default)]
    pub gst_verified: bool,
    #[serde(default)]
    pub trustseal_verified: bool,
    #[serde(default)]
    pub member_since: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

fn meaningful(value: &Option<String>) -> bool {
    match value.as_deref().map(str::trim) {
        Some(v) => !v.is_empty() && v != UNKNOWN_VENDOR && v != LOCATION_NOT_SPECIFIED,
        None => false,
    }
}

impl VendorListing {
    pub fn meaningful_fields(&self) -> usize {
        [
            &self.vendor,
            &self.vendor_website,
            &self.rating,
            &self.item_name,
            &self.item_price,
            &self.contact,
            &self.location,
        ]
        .into_iter()
        .filter(|v| meaningful(v))
        .count()
    }

    pub fn is_valid(&self) -> bool {
        if self.vendor.as_deref() == Some(UNKNOWN_VENDOR) {
            return false;
        }
        self.meaningful_fields() >= MIN_MEANINGFUL_FIELDS
    }

    /// Converts an accepted listing; the id is assigned by storage.
    pub fn into_vendor(self, material: &str) -> Vendor {
        let location = self
            .location
            .filter(|l| meaningful(&Some(l.clone())))
            .unwrap_or_else(|| LOCATION_NOT_SPECIFIED.to_string());
        Vendor {
            id: VendorId(0),
            name: self.vendor.unwrap_or_else(|| UNKNOWN_VENDOR.to_string()),
            website: self.vendor_website,
            location,
            contact: self.contact,
            email: self.email,
            materials: vec![material.trim().to_string()],
            rating: self.rating.as_deref().and_then(|r| r.trim().parse().ok()),
            rating_count: self
                .rating_count
                .as_deref()
                .and_then(|c| c.trim().trim_matches(|ch| ch == '(' || ch == ')').parse().ok()),
            item_name: self.item_name,
            item_price: self.item_price,
            item_unit: self.item_unit,
            gst_verified: self.gst_verified,
            trustseal_verified: self.trustseal_verified,
            member_since: self.member_since,
            finalized: false,
            payment_status: None,
            delivery_status: None,
            notes: None,
            origin: Origin::Upstream,
        }
    }
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VendorSearchQuery {
    pub material: String,
    #[serde(default)]
    pub location: Option<String>,
}

impl VendorSearchQuery {
    pub fn location(&self) -> Option<&str> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.material.trim().is_empty() {
            return Err("Material is required".into());
        }
        Ok(())
    }

    pub fn matches(&self, vendor: &Vendor) -> bool {
        vendor.supplies(&self.material) && self.location().map_or(true, |l| vendor.is_in(l))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VendorUpdateDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finalized: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalizeVendorRequest {
    pub material: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    fn vendor(location: &str, materials: &[&str]) -> Vendor {
        VendorListing {
            vendor: s("Acme Metals"),
            location: s(location),
            ..Default::default()
        }
        .into_vendor(materials[0])
        .with_materials(materials)
    }

    impl Vendor {
        fn with_materials(mut self, materials: &[&str]) -> Self {
            self.materials = materials.iter().map(|m| m.to_string()).collect();
            self
        }
    }

    #[test]
    fn unknown_vendor_is_rejected_regardless_of_fields() {
        let listing = VendorListing {
            vendor: s(UNKNOWN_VENDOR),
            vendor_website: s("https://example.in"),
            rating: s("4.5"),
            contact: s("9876543210"),
            location: s("Pune"),
            ..Default::default()
        };
        assert!(!listing.is_valid());
    }

    #[test]
    fn listing_needs_three_meaningful_fields() {
        let mut listing = VendorListing {
            vendor: s("Shree Steel Traders"),
            location: s(LOCATION_NOT_SPECIFIED),
            contact: s(""),
            ..Default::default()
        };
        assert_eq!(listing.meaningful_fields(), 1);
        assert!(!listing.is_valid());

        listing.item_price = s("58,000");
        assert!(!listing.is_valid());
        listing.location = s("Hadapsar, Pune");
        assert!(listing.is_valid());
    }

    #[test]
    fn whitespace_only_values_do_not_count() {
        let listing = VendorListing {
            vendor: s("Shree Steel Traders"),
            contact: s("   "),
            location: s(" \t"),
            item_name: s("TMT Bars"),
            ..VendorListing::default()
        };
        assert_eq!(listing.meaningful_fields(), 2);
        assert!(!listing.is_valid());
    }

    #[test]
    fn accepted_listing_parses_rating_and_count() {
        let v = VendorListing {
            vendor: s("Shree Steel Traders"),
            rating: s("4.3"),
            rating_count: s("(27)"),
            item_price: s("58,000"),
            ..Default::default()
        }
        .into_vendor(" Structural Steel ");
        assert_eq!(v.rating, Some(4.3));
        assert_eq!(v.rating_count, Some(27));
        assert_eq!(v.location, LOCATION_NOT_SPECIFIED);
        assert_eq!(v.materials, vec!["Structural Steel".to_string()]);
        assert_eq!(v.origin, Origin::Upstream);
    }

    #[test]
    fn search_matches_material_and_optional_location() {
        let v = vendor("Mumbai, Maharashtra", &["Concrete (M40)", "Precast Elements"]);
        let mut q = VendorSearchQuery {
            material: "concrete".into(),
            location: None,
        };
        assert!(q.matches(&v));
        q.location = Some("  ".into());
        assert!(q.matches(&v));
        q.location = Some("mumbai".into());
        assert!(q.matches(&v));
        q.location = Some("Chennai".into());
        assert!(!q.matches(&v));
        q.material = "glass".into();
        q.location = None;
        assert!(!q.matches(&v));
    }

    #[test]
    fn vendor_update_merges_only_present_fields() {
        let mut v = vendor("Pune", &["Steel"]);
        v.notes = Some("call after 5pm".into());
        v.apply(&VendorUpdateDto {
            payment_status: Some("Partially Paid".into()),
            ..Default::default()
        });
        assert_eq!(v.payment_status.as_deref(), Some("Partially Paid"));
        assert_eq!(v.notes.as_deref(), Some("call after 5pm"));
    }

    #[test]
    fn vendor_uses_wire_field_names() {
        let v = vendor("Pune", &["Steel"]);
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["vendor"], "Acme Metals");
        assert!(json.get("vendor_website").is_some());
    }
}
