use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialId(pub i64);

/// Predicted material line. Read-only fixture data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: MaterialId,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    /// Total cost, INR
    pub cost: i64,
    pub category: String,
}

impl Material {
    /// Whole-rupee price per unit; zero quantity counts as one
    pub fn unit_price(&self) -> i64 {
        let quantity = if self.quantity > 0.0 { self.quantity } else { 1.0 };
        (self.cost as f64 / quantity).floor() as i64
    }

    pub fn quantity_label(&self) -> String {
        if self.quantity.fract() == 0.0 {
            format!("{} {}", self.quantity as i64, self.unit)
        } else {
            format!("{:.2} {}", self.quantity, self.unit)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: String,
    pub cost: i64,
    /// Share of total cost, 0..=100
    pub percent: f64,
}

/// Figures shown on the prediction summary cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSummary {
    pub total_cost: i64,
    pub total_quantity: f64,
    pub material_count: usize,
    pub category_count: usize,
    pub categories: Vec<CategoryShare>,
}

impl MaterialSummary {
    pub fn from_materials(materials: &[Material]) -> Self {
        let total_cost: i64 = materials.iter().map(|m| m.cost).sum();
        let total_quantity: f64 = materials.iter().map(|m| m.quantity).sum();

        let mut by_category: BTreeMap<&str, i64> = BTreeMap::new();
        for m in materials {
            *by_category.entry(m.category.as_str()).or_insert(0) += m.cost;
        }

        let mut categories: Vec<CategoryShare> = by_category
            .into_iter()
            .map(|(category, cost)| CategoryShare {
                category: category.to_string(),
                cost,
                percent: if total_cost > 0 {
                    cost as f64 / total_cost as f64 * 100.0
                } else {
                    0.0
                },
            })
            .collect();
        categories.sort_by(|a, b| b.cost.cmp(&a.cost).then_with(|| a.category.cmp(&b.category)));

        Self {
            total_cost,
            total_quantity,
            material_count: materials.len(),
            category_count: categories.len(),
            categories,
        }
    }
}

pub fn find_by_name<'a>(materials: &'a [Material], name: &str) -> Option<&'a Material> {
    materials.iter().find(|m| m.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material(name: &str, quantity: f64, cost: i64, category: &str) -> Material {
        Material {
            id: MaterialId(1),
            name: name.into(),
            quantity,
            unit: "units".into(),
            cost,
            category: category.into(),
        }
    }

    #[test]
    fn unit_price_is_floored_and_tolerates_zero_quantity() {
        assert_eq!(material("Steel", 450.0, 56_000_000, "Structure").unit_price(), 124_444);
        assert_eq!(material("Free", 0.0, 1_000, "Misc").unit_price(), 1_000);
    }

    #[test]
    fn summary_groups_categories_by_cost() {
        let list = vec![
            material("HVAC", 24.0, 300, "MEP"),
            material("Plumbing", 180.0, 100, "MEP"),
            material("Steel", 450.0, 600, "Structure"),
        ];
        let summary = MaterialSummary::from_materials(&list);
        assert_eq!(summary.total_cost, 1_000);
        assert_eq!(summary.material_count, 3);
        assert_eq!(summary.category_count, 2);
        assert_eq!(summary.categories[0].category, "Structure");
        assert_eq!(summary.categories[0].percent, 60.0);
        assert_eq!(summary.categories[1].percent, 40.0);
    }

    #[test]
    fn empty_list_has_no_shares() {
        let summary = MaterialSummary::from_materials(&[]);
        assert_eq!(summary.total_cost, 0);
        assert!(summary.categories.is_empty());
    }
}
