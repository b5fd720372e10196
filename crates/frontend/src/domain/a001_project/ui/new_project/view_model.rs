use crate::domain::a001_project::api;
use crate::layout::global_context::AppGlobalContext;
use contracts::domain::a001_project::aggregate::{ProjectDto, ProjectStatus};
use leptos::prelude::*;

/// Parses the volume field; digits only, grouping separators allowed
pub fn parse_volume(input: &str) -> Option<i64> {
    let digits: String = input
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '_' | ' '))
        .collect();
    digits.parse::<i64>().ok().filter(|v| *v > 0)
}

#[derive(Clone, Copy)]
pub struct NewProjectVm {
    pub form: RwSignal<ProjectDto>,
    /// Raw volume input, parsed on submit
    pub volume: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl NewProjectVm {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ProjectDto {
                status: ProjectStatus::Planning,
                ..ProjectDto::default()
            }),
            volume: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    /// Builds the DTO from the form or explains what is missing
    pub fn to_dto(&self) -> Result<ProjectDto, String> {
        let mut dto = self.form.get_untracked();
        dto.volume = parse_volume(&self.volume.get_untracked())
            .ok_or_else(|| "Project volume must be a positive number".to_string())?;
        dto.validate()?;
        Ok(dto)
    }

    pub fn create_command(&self, ctx: AppGlobalContext, on_done: Callback<()>) {
        if self.saving.get_untracked() {
            return;
        }
        let dto = match self.to_dto() {
            Ok(dto) => dto,
            Err(e) => {
                self.error.set(Some(e));
                return;
            }
        };

        let this = *self;
        this.saving.set(true);
        this.error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match api::create_project(&dto).await {
                Ok(project) => {
                    log::info!("Created project {}", project.name());
                    ctx.add_project(project);
                    on_done.run(());
                }
                Err(e) => this.error.set(Some(e)),
            }
            this.saving.set(false);
        });
    }
}

impl Default for NewProjectVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_accepts_grouped_digits() {
        assert_eq!(parse_volume("12,50,00,000"), Some(125_000_000));
        assert_eq!(parse_volume(" 5000000 "), Some(5_000_000));
    }

    #[test]
    fn volume_rejects_zero_and_text() {
        assert_eq!(parse_volume("0"), None);
        assert_eq!(parse_volume("-10"), None);
        assert_eq!(parse_volume("ten crore"), None);
        assert_eq!(parse_volume(""), None);
    }
}
