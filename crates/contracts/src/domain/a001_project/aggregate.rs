use crate::domain::common::{AggregateId, BaseAggregate};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub Uuid);

impl ProjectId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ProjectId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProjectId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Completed,
    Planning,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Active,
        ProjectStatus::Completed,
        ProjectStatus::Planning,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Planning => "planning",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }
}

impl Default for ProjectStatus {
    fn default() -> Self {
        ProjectStatus::Planning
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhaseStatus {
    Completed,
    InProgress,
    Pending,
}

impl PhaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseStatus::Completed => "completed",
            PhaseStatus::InProgress => "in-progress",
            PhaseStatus::Pending => "pending",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PhaseStatus::Completed => "Completed",
            PhaseStatus::InProgress => "In progress",
            PhaseStatus::Pending => "Pending",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    Design,
    Development,
    Procurement,
    Installation,
}

impl PhaseKind {
    pub fn id(&self) -> &'static str {
        match self {
            PhaseKind::Design => "design",
            PhaseKind::Development => "development",
            PhaseKind::Procurement => "procurement",
            PhaseKind::Installation => "installation",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PhaseKind::Design => "Design Phase",
            PhaseKind::Development => "Development Phase",
            PhaseKind::Procurement => "Procurement Phase",
            PhaseKind::Installation => "Installation Phase",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PhaseKind::Design => "Architectural planning and engineering design",
            PhaseKind::Development => "Permits, approvals, and preparation",
            PhaseKind::Procurement => "Material sourcing and vendor coordination",
            PhaseKind::Installation => "Construction and final installation",
        }
    }
}

// ============================================================================
// Timeline
// ============================================================================

/// One phase of the project roadmap. Phases may overlap or leave gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectPhase {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub status: PhaseStatus,
}

impl ProjectPhase {
    pub fn new(start: NaiveDate, end: NaiveDate, status: PhaseStatus) -> Self {
        Self { start, end, status }
    }

    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Progress in percent, 0..=100
    pub fn progress(&self, today: NaiveDate) -> f64 {
        match self.status {
            PhaseStatus::Completed => return 100.0,
            PhaseStatus::Pending => return 0.0,
            PhaseStatus::InProgress => {}
        }

        if today < self.start {
            return 0.0;
        }
        if today > self.end {
            return 100.0;
        }

        let total = self.duration_days();
        if total <= 0 {
            // Started single-day phase
            return 100.0;
        }
        let elapsed = (today - self.start).num_days();
        (elapsed as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectTimeline {
    pub design: ProjectPhase,
    pub development: ProjectPhase,
    pub procurement: ProjectPhase,
    pub installation: ProjectPhase,
}

impl ProjectTimeline {
    /// Default roadmap for a freshly created project, offsets in days from `today`
    pub fn for_new_project(today: NaiveDate) -> Self {
        let phase = |from: i64, to: i64| {
            ProjectPhase::new(
                today + Duration::days(from),
                today + Duration::days(to),
                PhaseStatus::Pending,
            )
        };
        Self {
            design: phase(0, 60),
            development: phase(61, 120),
            procurement: phase(90, 180),
            installation: phase(181, 365),
        }
    }

    pub fn phases(&self) -> [(PhaseKind, &ProjectPhase); 4] {
        [
            (PhaseKind::Design, &self.design),
            (PhaseKind::Development, &self.development),
            (PhaseKind::Procurement, &self.procurement),
            (PhaseKind::Installation, &self.installation),
        ]
    }

    /// Mean of the four phase progresses
    pub fn overall_progress(&self, today: NaiveDate) -> f64 {
        let phases = self.phases();
        let sum: f64 = phases.iter().map(|(_, p)| p.progress(today)).sum();
        sum / phases.len() as f64
    }

    pub fn count_with_status(&self, status: PhaseStatus) -> usize {
        self.phases()
            .iter()
            .filter(|(_, p)| p.status == status)
            .count()
    }

    pub fn earliest_start(&self) -> NaiveDate {
        self.phases()
            .iter()
            .map(|(_, p)| p.start)
            .min()
            .unwrap_or(self.design.start)
    }

    /// Target completion: latest phase end
    pub fn target_completion(&self) -> NaiveDate {
        self.phases()
            .iter()
            .map(|(_, p)| p.end)
            .max()
            .unwrap_or(self.installation.end)
    }

    pub fn total_days(&self) -> i64 {
        (self.target_completion() - self.earliest_start()).num_days()
    }

    pub fn validate(&self) -> Result<(), String> {
        for (kind, phase) in self.phases() {
            if phase.end < phase.start {
                return Err(format!("{} ends before it starts", kind.name()));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Construction project. `base.description` holds the project name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(flatten)]
    pub base: BaseAggregate<ProjectId>,

    #[serde(rename = "type")]
    pub project_type: String,
    pub size: String,
    pub state: String,
    pub city: String,
    /// Monetary volume, INR
    pub volume: i64,
    pub status: ProjectStatus,
    pub timeline: ProjectTimeline,
}

impl Project {
    pub fn new_for_insert(code: String, dto: &ProjectDto, today: NaiveDate) -> Self {
        Self {
            base: BaseAggregate::new(ProjectId::new_v4(), code, dto.name.trim().to_string()),
            project_type: dto.project_type.clone(),
            size: dto.size.clone(),
            state: dto.state.clone(),
            city: dto.city.clone(),
            volume: dto.volume,
            status: dto.status,
            timeline: ProjectTimeline::for_new_project(today),
        }
    }

    pub fn name(&self) -> &str {
        &self.base.description
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Volume in crores (1 Cr = 10,000,000 INR)
    pub fn volume_crores(&self) -> f64 {
        self.volume as f64 / 10_000_000.0
    }

    pub fn location(&self) -> String {
        match (self.city.trim().is_empty(), self.state.trim().is_empty()) {
            (false, false) => format!("{}, {}", self.city, self.state),
            (false, true) => self.city.clone(),
            (true, false) => self.state.clone(),
            (true, true) => String::new(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Project name must not be empty".into());
        }
        if self.volume <= 0 {
            return Err("Project volume must be positive".into());
        }
        self.timeline.validate()
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// New project form
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProjectDto {
    pub name: String,
    #[serde(rename = "type")]
    pub project_type: String,
    pub size: String,
    pub state: String,
    pub city: String,
    pub volume: i64,
    #[serde(default)]
    pub status: ProjectStatus,
}

impl ProjectDto {
    /// Presence checks done before submission
    pub fn validate(&self) -> Result<(), String> {
        let required = [
            ("Project name", &self.name),
            ("Project type", &self.project_type),
            ("Project size", &self.size),
            ("State", &self.state),
            ("City", &self.city),
        ];
        for (label, value) in required {
            if value.trim().is_empty() {
                return Err(format!("{} is required", label));
            }
        }
        if self.volume <= 0 {
            return Err("Project volume must be a positive number".into());
        }
        Ok(())
    }
}

pub const PROJECT_TYPES: [&str; 7] = [
    "Commercial Construction",
    "Industrial Infrastructure",
    "Residential Development",
    "Healthcare Facility",
    "Educational Institution",
    "Transportation Hub",
    "Mixed-Use Development",
];

pub const PROJECT_SIZES: [&str; 3] = ["Small (<₹1Cr)", "Medium (₹1Cr–₹10Cr)", "Large (>₹10Cr)"];

pub const INDIAN_STATES: [&str; 8] = [
    "Maharashtra",
    "Karnataka",
    "Tamil Nadu",
    "Gujarat",
    "Delhi",
    "Uttar Pradesh",
    "Telangana",
    "West Bengal",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn in_progress(start: NaiveDate, end: NaiveDate) -> ProjectPhase {
        ProjectPhase::new(start, end, PhaseStatus::InProgress)
    }

    #[test]
    fn project_id_parses_back_from_its_string() {
        let id = ProjectId::new_v4();
        assert_eq!(ProjectId::from_string(&id.as_string()), Ok(id));
        assert!(ProjectId::from_string("not-a-uuid").is_err());
    }

    #[test]
    fn completed_and_pending_phases_ignore_dates() {
        let today = date(2025, 9, 1);
        let done = ProjectPhase::new(date(2026, 1, 1), date(2026, 2, 1), PhaseStatus::Completed);
        let waiting = ProjectPhase::new(date(2024, 1, 1), date(2024, 2, 1), PhaseStatus::Pending);
        assert_eq!(done.progress(today), 100.0);
        assert_eq!(waiting.progress(today), 0.0);
    }

    #[test]
    fn in_progress_phase_tracks_elapsed_days() {
        let phase = in_progress(date(2025, 9, 1), date(2025, 9, 11));
        assert_eq!(phase.progress(date(2025, 8, 20)), 0.0);
        assert_eq!(phase.progress(date(2025, 9, 6)), 50.0);
        assert_eq!(phase.progress(date(2025, 10, 1)), 100.0);
    }

    #[test]
    fn started_single_day_phase_is_done() {
        let day = date(2025, 9, 1);
        assert_eq!(in_progress(day, day).progress(day), 100.0);
    }

    #[test]
    fn new_project_timeline_uses_fixed_offsets() {
        let today = date(2025, 1, 1);
        let t = ProjectTimeline::for_new_project(today);
        assert_eq!(t.design.start, today);
        assert_eq!(t.design.duration_days(), 60);
        assert_eq!(t.development.start, date(2025, 3, 3));
        assert_eq!(t.procurement.start, today + Duration::days(90));
        assert_eq!(t.installation.end, today + Duration::days(365));
        assert_eq!(t.count_with_status(PhaseStatus::Pending), 4);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn overlapping_phases_are_accepted_and_totals_span_extremes() {
        let t = ProjectTimeline {
            design: ProjectPhase::new(date(2025, 8, 5), date(2025, 9, 10), PhaseStatus::Completed),
            development: in_progress(date(2025, 9, 11), date(2025, 10, 31)),
            procurement: ProjectPhase::new(date(2025, 9, 20), date(2025, 11, 30), PhaseStatus::Pending),
            installation: ProjectPhase::new(date(2025, 12, 1), date(2025, 12, 31), PhaseStatus::Pending),
        };
        assert!(t.validate().is_ok());
        assert_eq!(t.total_days(), 148);
        assert_eq!(t.target_completion(), date(2025, 12, 31));
        assert_eq!(t.count_with_status(PhaseStatus::InProgress), 1);
        // design 100 + development 100 (after end) + 0 + 0
        assert_eq!(t.overall_progress(date(2026, 1, 15)), 50.0);
    }

    #[test]
    fn reversed_phase_is_rejected() {
        let mut t = ProjectTimeline::for_new_project(date(2025, 1, 1));
        t.installation.end = date(2024, 1, 1);
        assert!(t.validate().unwrap_err().contains("Installation"));
    }

    #[test]
    fn dto_requires_every_field_and_positive_volume() {
        let mut dto = ProjectDto {
            name: "Chennai Metro Depot".into(),
            project_type: PROJECT_TYPES[5].into(),
            size: PROJECT_SIZES[2].into(),
            state: "Tamil Nadu".into(),
            city: "Chennai".into(),
            volume: 0,
            status: ProjectStatus::Planning,
        };
        assert!(dto.validate().is_err());
        dto.volume = 420_000_000;
        assert!(dto.validate().is_ok());
        dto.city = "  ".into();
        assert_eq!(dto.validate().unwrap_err(), "City is required");
    }

    #[test]
    fn status_round_trips_through_its_wire_name() {
        for status in ProjectStatus::ALL {
            assert_eq!(ProjectStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(
            serde_json::to_string(&PhaseStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
    }
}
