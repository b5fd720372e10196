use super::view_model::NewProjectVm;
use crate::layout::global_context::use_app_context;
use crate::shared::modal::Modal;
use contracts::domain::a001_project::aggregate::{
    ProjectStatus, INDIAN_STATES, PROJECT_SIZES, PROJECT_TYPES,
};
use leptos::prelude::*;
use thaw::*;

fn options(values: &'static [&'static str], placeholder: &'static str) -> impl IntoView {
    view! {
        <option value="" disabled=true>{placeholder}</option>
        {values
            .iter()
            .map(|v| view! { <option value=*v>{*v}</option> })
            .collect_view()}
    }
}

#[component]
pub fn NewProjectDialog(on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let vm = NewProjectVm::new();

    view! {
        <Modal
            title="Create New Project"
            subtitle="Describe the project to start planning procurement"
            on_close=on_close
        >
            <form
                class="details-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.create_command(ctx, on_close);
                }
            >
                <div class="form-group">
                    <label for="project-name">"Project Name"</label>
                    <input
                        type="text"
                        id="project-name"
                        placeholder="Enter project name"
                        prop:value=move || vm.form.get().name
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="project-type">"Project Type"</label>
                    <select
                        id="project-type"
                        prop:value=move || vm.form.get().project_type
                        on:change=move |ev| vm.form.update(|f| f.project_type = event_target_value(&ev))
                    >
                        {options(&PROJECT_TYPES, "Select project type")}
                    </select>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="project-size">"Size"</label>
                        <select
                            id="project-size"
                            prop:value=move || vm.form.get().size
                            on:change=move |ev| vm.form.update(|f| f.size = event_target_value(&ev))
                        >
                            {options(&PROJECT_SIZES, "Select size")}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="project-status">"Status"</label>
                        <select
                            id="project-status"
                            prop:value=move || vm.form.get().status.as_str()
                            on:change=move |ev| {
                                if let Some(status) = ProjectStatus::parse(&event_target_value(&ev)) {
                                    vm.form.update(|f| f.status = status);
                                }
                            }
                        >
                            {ProjectStatus::ALL
                                .into_iter()
                                .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="project-state">"State"</label>
                        <select
                            id="project-state"
                            prop:value=move || vm.form.get().state
                            on:change=move |ev| vm.form.update(|f| f.state = event_target_value(&ev))
                        >
                            {options(&INDIAN_STATES, "Select state")}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="project-city">"City"</label>
                        <input
                            type="text"
                            id="project-city"
                            placeholder="Enter city"
                            prop:value=move || vm.form.get().city
                            on:input=move |ev| vm.form.update(|f| f.city = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="project-volume">"Project Volume (₹)"</label>
                    <input
                        type="text"
                        id="project-volume"
                        inputmode="numeric"
                        placeholder="Enter estimated project volume"
                        prop:value=move || vm.volume.get()
                        on:input=move |ev| vm.volume.set(event_target_value(&ev))
                    />
                </div>

                {move || vm.error.get().map(|e| view! { <div class="error-message">{e}</div> })}

                <div class="details-actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.create_command(ctx, on_close)
                        disabled=Signal::derive(move || vm.saving.get())
                    >
                        {move || if vm.saving.get() { "Creating..." } else { "Create Project" }}
                    </Button>
                </div>
            </form>
        </Modal>
    }
}
