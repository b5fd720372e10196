use contracts::domain::a002_material::aggregate::Material;
use contracts::domain::a003_vendor::aggregate::Vendor;

/// Materials whose name or category contains the filter text
pub fn filter_materials(materials: &[Material], term: &str) -> Vec<Material> {
    let needle = term.trim().to_lowercase();
    materials
        .iter()
        .filter(|m| {
            needle.is_empty()
                || m.name.to_lowercase().contains(&needle)
                || m.category.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Five-slot star row for a 0..=5 rating
pub fn star_row(rating: f64) -> String {
    let full = rating.clamp(0.0, 5.0).round() as usize;
    format!("{}{}", "★".repeat(full), "☆".repeat(5 - full))
}

/// Phone and email of a vendor, whichever are present
pub fn contact_lines(vendor: &Vendor) -> Vec<(&'static str, String)> {
    let mut lines = vec![("map-pin", vendor.location.clone())];
    if let Some(phone) = vendor.contact.as_ref().filter(|c| !c.trim().is_empty()) {
        lines.push(("phone", phone.clone()));
    }
    if let Some(email) = vendor.email.as_ref().filter(|e| !e.trim().is_empty()) {
        lines.push(("mail", email.clone()));
    }
    lines
}

/// Confirmation text before a vendor gives up all of its materials
pub fn release_prompt(vendor: &str, held: &[String]) -> String {
    format!(
        "Release {} from {}? Their tracking records will be deleted.",
        vendor,
        held.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::fixtures;

    #[test]
    fn filter_matches_name_or_category_case_insensitive() {
        let materials = fixtures::materials();
        assert_eq!(filter_materials(&materials, "").len(), materials.len());
        let steel = filter_materials(&materials, "STEEL");
        assert!(!steel.is_empty());
        assert!(steel
            .iter()
            .all(|m| m.name.to_lowercase().contains("steel")
                || m.category.to_lowercase().contains("steel")));
        assert!(filter_materials(&materials, "unobtainium").is_empty());
    }

    #[test]
    fn stars_round_and_clamp() {
        assert_eq!(star_row(4.4), "★★★★☆");
        assert_eq!(star_row(4.6), "★★★★★");
        assert_eq!(star_row(9.0), "★★★★★");
        assert_eq!(star_row(-1.0), "☆☆☆☆☆");
    }

    #[test]
    fn contact_lines_skip_missing_channels() {
        let mut vendor = fixtures::vendors().remove(0);
        vendor.email = None;
        vendor.contact = Some("  ".into());
        let lines = contact_lines(&vendor);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].0, "map-pin");
    }

    #[test]
    fn release_prompt_names_every_held_material() {
        let held = vec!["Structural Steel".to_string(), "Concrete (M40)".to_string()];
        assert_eq!(
            release_prompt("Tata Steel Ltd.", &held),
            "Release Tata Steel Ltd. from Structural Steel, Concrete (M40)? Their tracking records will be deleted."
        );
    }
}
