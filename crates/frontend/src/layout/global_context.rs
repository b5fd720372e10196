use crate::domain::a001_project::api as project_api;
use crate::layout::tabs::ProjectTab;
use contracts::domain::a001_project::aggregate::Project;
use contracts::usecases::u501_predict_materials::response::PredictResponse;
use leptos::prelude::*;

/// Dashboard root state: the project list and what is selected in it
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub projects: RwSignal<Vec<Project>>,
    /// Id of the selected project
    pub selected: RwSignal<Option<String>>,
    pub active_tab: RwSignal<ProjectTab>,
    /// Last prediction for the selected project
    pub prediction: RwSignal<Option<PredictResponse>>,
    pub left_open: RwSignal<bool>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            projects: RwSignal::new(vec![]),
            selected: RwSignal::new(None),
            active_tab: RwSignal::new(ProjectTab::default()),
            prediction: RwSignal::new(None),
            left_open: RwSignal::new(true),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Fetches the project list; the first project is selected when none is
    pub fn load_projects(&self) {
        let this = *self;
        this.loading.set(true);
        leptos::task::spawn_local(async move {
            match project_api::fetch_projects().await {
                Ok(projects) => {
                    log::debug!("Loaded {} projects", projects.len());
                    let first = projects.first().map(Project::to_string_id);
                    this.projects.set(projects);
                    if this.selected.get_untracked().is_none() {
                        this.selected.set(first);
                    }
                    this.error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load projects: {}", e);
                    this.error.set(Some(e));
                }
            }
            this.loading.set(false);
        });
    }

    pub fn selected_project(&self) -> Option<Project> {
        let id = self.selected.get()?;
        self.projects
            .with(|projects| projects.iter().find(|p| p.to_string_id() == id).cloned())
    }

    pub fn select_project(&self, id: String) {
        if self.selected.get_untracked().as_deref() == Some(id.as_str()) {
            return;
        }
        self.selected.set(Some(id));
        self.active_tab.set(ProjectTab::default());
        self.prediction.set(None);
    }

    /// Puts a freshly created project on top and selects it
    pub fn add_project(&self, project: Project) {
        let id = project.to_string_id();
        self.projects.update(|projects| projects.insert(0, project));
        self.select_project(id);
    }

    /// Stores the prediction and shows its tab
    pub fn set_prediction(&self, response: PredictResponse) {
        self.prediction.set(Some(response));
        self.active_tab.set(ProjectTab::Prediction);
    }

    pub fn prediction_done(&self) -> bool {
        self.prediction.with(Option::is_some)
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().unwrap_or_else(|| {
        log::warn!("AppGlobalContext missing, using a detached one");
        AppGlobalContext::new()
    })
}
