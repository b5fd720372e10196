use crate::domain::a002_material::aggregate::Material;
use crate::domain::a005_procurement_timeline::aggregate::ProcurementItem;
use serde::{Deserialize, Serialize};

pub const ESTIMATED_DURATION: &str = "6 months";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictResponse {
    pub success: bool,
    pub materials: Vec<Material>,
    pub timeline: Vec<ProcurementItem>,
    /// Sum of material costs, INR
    pub total_cost: i64,
    pub estimated_duration: String,
}

impl PredictResponse {
    pub fn new(materials: Vec<Material>, timeline: Vec<ProcurementItem>) -> Self {
        let total_cost = materials.iter().map(|m| m.cost).sum();
        Self {
            success: true,
            materials,
            timeline,
            total_cost,
            estimated_duration: ESTIMATED_DURATION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::fixtures;

    #[test]
    fn total_cost_is_the_sum_of_fixture_costs() {
        let resp = PredictResponse::new(fixtures::materials(), fixtures::procurement_items());
        assert_eq!(resp.total_cost, 225_300_000);
        assert_eq!(resp.estimated_duration, "6 months");
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json.get("totalCost").is_some());
    }
}
