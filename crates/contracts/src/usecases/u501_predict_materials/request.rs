use crate::domain::a001_project::aggregate::Project;
use serde::{Deserialize, Serialize};

/// Prediction input, prefilled from the selected project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    #[serde(rename = "projectType")]
    pub project_type: String,
    pub size: String,
    pub state: String,
    pub city: String,
    pub volume: i64,
}

impl PredictRequest {
    pub fn from_project(project: &Project) -> Self {
        Self {
            project_type: project.project_type.clone(),
            size: project.size.clone(),
            state: project.state.clone(),
            city: project.city.clone(),
            volume: project.volume,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        let required = [
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::fixtures;

    #[test]
    fn request_prefills_from_project() {
        let project = &fixtures::projects()[0];
        let req = PredictRequest::from_project(project);
        assert_eq!(req.city, "Mumbai");
        assert_eq!(req.volume, 1_250_000_000);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn blank_state_fails() {
        let req = PredictRequest {
            project_type: "Commercial Construction".into(),
            size: "Large (>₹10Cr)".into(),
            state: "".into(),
            city: "Pune".into(),
            volume: 10,
        };
        assert_eq!(req.validate().unwrap_err(), "State is required");
    }
}
