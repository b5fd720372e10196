use crate::domain::a004_procurement::aggregate::MaterialProcurement;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskStatus {
    Critical,
    Warning,
    OnTrack,
}

impl RiskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskStatus::Critical => "critical",
            RiskStatus::Warning => "warning",
            RiskStatus::OnTrack => "on-track",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskStatus::Critical => "critical",
            RiskStatus::Warning => "warning",
            RiskStatus::OnTrack => "on track",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "critical" => Some(RiskStatus::Critical),
            "warning" => Some(RiskStatus::Warning),
            "on-track" => Some(RiskStatus::OnTrack),
            _ => None,
        }
    }
}

/// Order and delivery plan for one material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcurementItem {
    pub id: i64,
    pub material: String,
    pub order_by: NaiveDate,
    pub delivery_start: NaiveDate,
    pub delivery_end: NaiveDate,
    pub status: RiskStatus,
    pub vendor: String,
}

impl ProcurementItem {
    /// Whole days until the order deadline; negative when overdue
    pub fn days_to_order(&self, today: NaiveDate) -> i64 {
        (self.order_by - today).num_days()
    }

    pub fn lead_time_days(&self) -> i64 {
        (self.delivery_start - self.order_by).num_days()
    }

    pub fn delivery_window_days(&self) -> i64 {
        (self.delivery_end - self.delivery_start).num_days()
    }

    pub fn order_hint(&self, today: NaiveDate) -> String {
        match self.days_to_order(today) {
            0 => "Order today".to_string(),
            d if d < 0 => format!("{} days overdue", -d),
            d => format!("{} days to order", d),
        }
    }
}

/// Timeline row with the finalized vendor overlaid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    #[serde(flatten)]
    pub item: ProcurementItem,
    /// Name of the finalized vendor, if any
    pub finalized_vendor: Option<String>,
    /// Delivery date confirmed in the management record
    pub confirmed_delivery: Option<NaiveDate>,
}

impl TimelineEntry {
    /// Finalized vendor first, planned vendor otherwise
    pub fn vendor_name(&self) -> &str {
        self.finalized_vendor.as_deref().unwrap_or(&self.item.vendor)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineSummary {
    pub critical: usize,
    pub warning: usize,
    pub on_track: usize,
    /// `None` for an empty timeline
    pub days_to_next_order: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcurementTimeline {
    pub entries: Vec<TimelineEntry>,
}

impl ProcurementTimeline {
    /// Sorts by order-by date and overlays finalized vendors
    pub fn build(mut items: Vec<ProcurementItem>, finalized: &[MaterialProcurement]) -> Self {
        items.sort_by_key(|i| (i.order_by, i.id));
        let entries = items
            .into_iter()
            .map(|item| {
                let hit = finalized.iter().find(|f| f.material == item.material);
                TimelineEntry {
                    finalized_vendor: hit.map(|f| f.vendor.name.clone()),
                    confirmed_delivery: hit.and_then(|f| f.record.delivery_date),
                    item,
                }
            })
            .collect();
        Self { entries }
    }

    pub fn summary(&self, today: NaiveDate) -> TimelineSummary {
        let count = |status: RiskStatus| {
            self.entries
                .iter()
                .filter(|e| e.item.status == status)
                .count()
        };
        TimelineSummary {
            critical: count(RiskStatus::Critical),
            warning: count(RiskStatus::Warning),
            on_track: count(RiskStatus::OnTrack),
            days_to_next_order: self
                .entries
                .iter()
                .map(|e| e.item.days_to_order(today))
                .min(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_procurement::book::ProcurementBook;
    use crate::shared::fixtures;
    use chrono::Utc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn items_are_sorted_by_order_date() {
        let mut items = fixtures::procurement_items();
        items.reverse();
        let t = ProcurementTimeline::build(items, &[]);
        let order: Vec<_> = t.entries.iter().map(|e| e.item.order_by).collect();
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(order, sorted);
        assert_eq!(t.entries[0].item.material, "Structural Steel");
    }

    #[test]
    fn summary_counts_and_next_order() {
        let t = ProcurementTimeline::build(fixtures::procurement_items(), &[]);
        let s = t.summary(date(2025, 9, 1));
        assert_eq!((s.critical, s.warning, s.on_track), (1, 1, 2));
        // Structural Steel was due 2025-08-25
        assert_eq!(s.days_to_next_order, Some(-7));
        assert_eq!(ProcurementTimeline::default().summary(date(2025, 9, 1)).days_to_next_order, None);
    }

    #[test]
    fn per_item_day_arithmetic() {
        let items = fixtures::procurement_items();
        let steel = &items[0];
        assert_eq!(steel.lead_time_days(), 16);
        assert_eq!(steel.delivery_window_days(), 15);
        assert_eq!(steel.order_hint(date(2025, 8, 25)), "Order today");
        assert_eq!(steel.order_hint(date(2025, 8, 27)), "2 days overdue");
        assert_eq!(steel.order_hint(date(2025, 8, 20)), "5 days to order");
    }

    #[test]
    fn finalized_vendor_and_delivery_date_overlay_the_plan() {
        let mut book = ProcurementBook::new();
        let glass = fixtures::materials()
            .into_iter()
            .find(|m| m.name == "Glass Curtain Wall")
            .unwrap();
        let vendor = fixtures::vendors()
            .into_iter()
            .find(|v| v.name == "Blue Star HVAC")
            .unwrap();
        book.finalize(&glass, vendor, Utc::now());
        book.update(
            "Glass Curtain Wall",
            &crate::domain::a004_procurement::aggregate::ManagementUpdate {
                delivery_date: Some(Some(date(2025, 10, 25))),
                ..Default::default()
            },
        )
        .unwrap();

        let entries = vec![book.get("Glass Curtain Wall").unwrap().clone()];
        let t = ProcurementTimeline::build(fixtures::procurement_items(), &entries);
        let row = t
            .entries
            .iter()
            .find(|e| e.item.material == "Glass Curtain Wall")
            .unwrap();
        assert_eq!(row.vendor_name(), "Blue Star HVAC");
        assert_eq!(row.confirmed_delivery, Some(date(2025, 10, 25)));
        let other = t.entries.iter().find(|e| e.item.material == "Concrete (M40)").unwrap();
        assert_eq!(other.vendor_name(), "Ultratech Concrete Supplies");
        assert_eq!(other.confirmed_delivery, None);
    }
}
