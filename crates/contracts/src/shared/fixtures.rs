//! Seed data for the store and the chat panel

use crate::domain::a001_project::aggregate::{
    PhaseStatus, Project, ProjectId, ProjectPhase, ProjectStatus, ProjectTimeline,
};
use crate::domain::a002_material::aggregate::{Material, MaterialId};
use crate::domain::a003_vendor::aggregate::{Vendor, VendorId};
use crate::domain::a005_procurement_timeline::aggregate::{ProcurementItem, RiskStatus};
use crate::domain::a006_chat::aggregate::ChatMessage;
use crate::domain::common::{BaseAggregate, EntityMetadata, Origin};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use uuid::Uuid;

pub const CANNED_REPLIES: [&str; 4] = [
    "I can help you optimize your procurement strategy. What specific aspect would you like to focus on?",
    "Based on current market trends, I recommend ordering steel materials 2 weeks earlier than planned due to supply chain constraints.",
    "Your current timeline looks feasible. However, I suggest adding a 10% buffer for critical path items.",
    "Would you like me to analyze alternative suppliers for cost optimization?",
];

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    let naive = date(y, m, d)
        .and_hms_opt(h, min, s)
        .unwrap_or_else(NaiveDateTime::default);
    Utc.from_utc_datetime(&naive)
}

fn phase(start: NaiveDate, end: NaiveDate, status: PhaseStatus) -> ProjectPhase {
    ProjectPhase::new(start, end, status)
}

struct ProjectSeed {
    n: u128,
    name: &'static str,
    project_type: &'static str,
    size: &'static str,
    state: &'static str,
    city: &'static str,
    volume: i64,
    status: ProjectStatus,
    created: NaiveDate,
    timeline: ProjectTimeline,
}

fn project(seed: ProjectSeed) -> Project {
    let created = Utc.from_utc_datetime(&seed.created.and_hms_opt(0, 0, 0).unwrap_or_default());
    Project {
        base: BaseAggregate::with_metadata(
            ProjectId::new(Uuid::from_u128(seed.n)),
            format!("PRJ-{:03}", seed.n),
            seed.name.to_string(),
            EntityMetadata::created_at(created),
        ),
        project_type: seed.project_type.to_string(),
        size: seed.size.to_string(),
        state: seed.state.to_string(),
        city: seed.city.to_string(),
        volume: seed.volume,
        status: seed.status,
        timeline: seed.timeline,
    }
}

pub fn projects() -> Vec<Project> {
    use PhaseStatus::*;
    vec![
        project(ProjectSeed {
            n: 1,
            name: "Mumbai Smart Office Tower",
            project_type: "Commercial Construction",
            size: "Large (>₹10Cr)",
            state: "Maharashtra",
            city: "Mumbai",
            volume: 1_250_000_000,
            status: ProjectStatus::Active,
            created: date(2025, 8, 5),
            timeline: ProjectTimeline {
                design: phase(date(2025, 8, 5), date(2025, 9, 10), Completed),
                development: phase(date(2025, 9, 11), date(2025, 10, 31), InProgress),
                procurement: phase(date(2025, 9, 20), date(2025, 11, 30), Pending),
                installation: phase(date(2025, 12, 1), date(2025, 12, 31), Pending),
            },
        }),
        project(ProjectSeed {
            n: 2,
            name: "Bengaluru Green Data Center",
            project_type: "Industrial Infrastructure",
            size: "Medium (₹1Cr–₹10Cr)",
            state: "Karnataka",
            city: "Bengaluru",
            volume: 65_000_000,
            status: ProjectStatus::Planning,
            created: date(2025, 8, 20),
            timeline: ProjectTimeline {
                design: phase(date(2025, 8, 20), date(2025, 9, 25), InProgress),
                development: phase(date(2025, 9, 26), date(2025, 11, 10), Pending),
                procurement: phase(date(2025, 10, 1), date(2025, 12, 10), Pending),
                installation: phase(date(2025, 12, 11), date(2025, 12, 31), Pending),
            },
        }),
        project(ProjectSeed {
            n: 3,
            name: "Pune Residential Complex Phase 1",
            project_type: "Residential Development",
            size: "Small (<₹1Cr)",
            state: "Maharashtra",
            city: "Pune",
            volume: 8_500_000,
            status: ProjectStatus::Completed,
            created: date(2025, 8, 10),
            timeline: ProjectTimeline {
                design: phase(date(2025, 8, 10), date(2025, 9, 5), Completed),
                development: phase(date(2025, 9, 6), date(2025, 10, 15), Completed),
                procurement: phase(date(2025, 9, 20), date(2025, 11, 5), Completed),
                installation: phase(date(2025, 11, 6), date(2025, 12, 15), Completed),
            },
        }),
    ]
}

pub fn materials() -> Vec<Material> {
    [
        ("Structural Steel", 450.0, "tons", 56_000_000, "Structure"),
        ("Concrete (M40)", 2800.0, "m³", 32_000_000, "Foundation"),
        ("Glass Curtain Wall", 1200.0, "m²", 75_000_000, "Exterior"),
        ("HVAC Systems", 24.0, "units", 28_000_000, "MEP"),
        ("Electrical Conduits", 5500.0, "m", 6_200_000, "Electrical"),
        ("Fire Safety Systems", 8.0, "systems", 13_500_000, "Safety"),
        ("Insulation Materials", 3200.0, "m²", 4_800_000, "Interior"),
        ("Plumbing Fixtures", 180.0, "units", 9_800_000, "MEP"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (name, quantity, unit, cost, category))| Material {
        id: MaterialId(i as i64 + 1),
        name: name.to_string(),
        quantity,
        unit: unit.to_string(),
        cost,
        category: category.to_string(),
    })
    .collect()
}

pub fn vendors() -> Vec<Vendor> {
    [
        (
            "Tata Steel Ltd.",
            "Jamshedpur, Jharkhand",
            "+91 657 242 0123",
            "orders@tatasteel.com",
            &["Structural Steel", "Metal Frameworks"][..],
            4.8,
        ),
        (
            "Ultratech Concrete Supplies",
            "Mumbai, Maharashtra",
            "+91 22 4002 4500",
            "supply@ultratechconcrete.in",
            &["Concrete (M40)", "Precast Elements"][..],
            4.6,
        ),
        (
            "Saint-Gobain Glass India",
            "Chennai, Tamil Nadu",
            "+91 44 2376 5900",
            "sales@saint-gobain.co.in",
            &["Glass Curtain Wall", "Windows", "Glazing"][..],
            4.9,
        ),
        (
            "Blue Star HVAC",
            "Ahmedabad, Gujarat",
            "+91 79 6600 4000",
            "info@bluestarindia.com",
            &["HVAC Systems", "Ventilation", "Air Conditioning"][..],
            4.7,
        ),
        (
            "Havells India Electricals",
            "Noida, Uttar Pradesh",
            "+91 120 333 1000",
            "orders@havells.com",
            &["Electrical Conduits", "Wiring", "Electrical Panels"][..],
            4.5,
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (name, location, contact, email, materials, rating))| Vendor {
        id: VendorId(i as i64 + 1),
        name: name.to_string(),
        website: None,
        location: location.to_string(),
        contact: Some(contact.to_string()),
        email: Some(email.to_string()),
        materials: materials.iter().map(|m| m.to_string()).collect(),
        rating: Some(rating),
        rating_count: None,
        item_name: None,
        item_price: None,
        item_unit: None,
        gst_verified: false,
        trustseal_verified: false,
        member_since: None,
        finalized: false,
        payment_status: None,
        delivery_status: None,
        notes: None,
        origin: Origin::Fixture,
    })
    .collect()
}

pub fn procurement_items() -> Vec<ProcurementItem> {
    use RiskStatus::*;
    [
        ("Structural Steel", date(2025, 8, 25), date(2025, 9, 10), date(2025, 9, 25), Critical, "Tata Steel Ltd."),
        ("Concrete (M40)", date(2025, 9, 5), date(2025, 9, 20), date(2025, 10, 5), OnTrack, "Ultratech Concrete Supplies"),
        ("Glass Curtain Wall", date(2025, 10, 1), date(2025, 10, 20), date(2025, 11, 5), Warning, "Saint-Gobain Glass India"),
        ("HVAC Systems", date(2025, 11, 10), date(2025, 12, 1), date(2025, 12, 15), OnTrack, "Blue Star HVAC"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (material, order_by, delivery_start, delivery_end, status, vendor))| ProcurementItem {
        id: i as i64 + 1,
        material: material.to_string(),
        order_by,
        delivery_start,
        delivery_end,
        status,
        vendor: vendor.to_string(),
    })
    .collect()
}

pub fn chat_messages() -> Vec<ChatMessage> {
    vec![
        ChatMessage::assistant(
            "1",
            "Hello! I can help you with procurement planning and material optimization. What would you like to know?",
            at(2024, 1, 15, 10, 0, 0),
        ),
        ChatMessage::user(
            "2",
            "What are the most cost-effective alternatives for structural steel in my project?",
            at(2024, 1, 15, 10, 1, 0),
        ),
        ChatMessage::assistant(
            "3",
            "Based on your project requirements, here are three alternatives:\n\n\
             1. **Engineered Steel Beams** - 15% cost reduction\n\
             2. **Composite Steel-Concrete** - 8% cost reduction, better fire resistance\n\
             3. **Recycled Steel** - 25% cost reduction, environmentally friendly\n\n\
             Would you like detailed specifications for any of these options?",
            at(2024, 1, 15, 10, 1, 30),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_timeline_item_has_a_material_and_vendor() {
        let mats = materials();
        let vens = vendors();
        for item in procurement_items() {
            assert!(mats.iter().any(|m| m.name == item.material), "{}", item.material);
            assert!(vens.iter().any(|v| v.name == item.vendor), "{}", item.vendor);
        }
    }

    #[test]
    fn fixture_projects_are_valid() {
        for p in projects() {
            assert!(p.validate().is_ok(), "{}", p.name());
        }
        assert_eq!(projects()[0].base.code, "PRJ-001");
    }

    #[test]
    fn seeded_conversation_alternates_speakers() {
        let msgs = chat_messages();
        assert_eq!(msgs.len(), 3);
        assert!(!msgs[0].is_user && msgs[1].is_user && !msgs[2].is_user);
        assert!(msgs[2].message.contains("\n\n1. **Engineered Steel Beams**"));
    }
}
