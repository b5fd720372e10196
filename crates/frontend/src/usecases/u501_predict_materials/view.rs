use crate::domain::a001_project::ui::new_project::parse_volume;
use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use contracts::domain::a001_project::aggregate::{
    Project, INDIAN_STATES, PROJECT_SIZES, PROJECT_TYPES,
};
use contracts::usecases::u501_predict_materials::request::PredictRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Choices for a select; a prefilled value outside the list is kept as first option
pub fn choices(values: &[&'static str], current: &str) -> Vec<String> {
    let mut list: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    if !current.trim().is_empty() && !values.contains(&current) {
        list.insert(0, current.to_string());
    }
    list
}

fn select_view(values: Vec<String>, current: String) -> impl IntoView {
    values
        .into_iter()
        .map(|v| {
            let selected = v == current;
            let value = v.clone();
            view! { <option value=value selected=selected>{v}</option> }
        })
        .collect_view()
}

#[component]
pub fn InputForm(project: Project) -> impl IntoView {
    let ctx = use_app_context();
    let form = RwSignal::new(PredictRequest::from_project(&project));
    let volume = RwSignal::new(project.volume.to_string());
    let (is_loading, set_is_loading) = signal(false);
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let submit = move || {
        if is_loading.get_untracked() {
            return;
        }
        let mut request = form.get_untracked();
        request.volume = parse_volume(&volume.get_untracked()).unwrap_or(0);
        if let Err(e) = request.validate() {
            set_error_message.set(Some(e));
            return;
        }

        set_error_message.set(None);
        set_is_loading.set(true);
        spawn_local(async move {
            match super::api::predict(&request).await {
                Ok(response) => {
                    log::info!(
                        "Prediction: {} material(s), total {}",
                        response.materials.len(),
                        response.total_cost
                    );
                    ctx.set_prediction(response);
                }
                Err(e) => set_error_message.set(Some(format!("Prediction failed: {}", e))),
            }
            set_is_loading.set(false);
        });
    };

    let current = move |pick: fn(&PredictRequest) -> String| form.with(|f| pick(f));

    view! {
        <div class="tab-page input-form">
            <div class="card">
                <h2 class="card__title">"Project Configuration"</h2>
                <p class="card__subtitle">
                    "Review the project parameters to generate material predictions"
                </p>
                <form
                    class="details-form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        submit();
                    }
                >
                    <div class="form-row">
                        <div class="form-group">
                            <label for="predict-type">"Project Type"</label>
                            <select
                                id="predict-type"
                                on:change=move |ev| form.update(|f| f.project_type = event_target_value(&ev))
                            >
                                {move || {
                                    let value = current(|f| f.project_type.clone());
                                    select_view(choices(&PROJECT_TYPES, &value), value)
                                }}
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="predict-size">"Project Size"</label>
                            <select
                                id="predict-size"
                                on:change=move |ev| form.update(|f| f.size = event_target_value(&ev))
                            >
                                {move || {
                                    let value = current(|f| f.size.clone());
                                    select_view(choices(&PROJECT_SIZES, &value), value)
                                }}
                            </select>
                        </div>
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="predict-state">"State"</label>
                            <select
                                id="predict-state"
                                on:change=move |ev| form.update(|f| f.state = event_target_value(&ev))
                            >
                                {move || {
                                    let value = current(|f| f.state.clone());
                                    select_view(choices(&INDIAN_STATES, &value), value)
                                }}
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="predict-city">"City"</label>
                            <input
                                type="text"
                                id="predict-city"
                                prop:value=move || form.get().city
                                on:input=move |ev| form.update(|f| f.city = event_target_value(&ev))
                            />
                        </div>
                    </div>
                    <div class="form-group">
                        <label for="predict-volume">"Project Volume (₹)"</label>
                        <input
                            type="text"
                            id="predict-volume"
                            inputmode="numeric"
                            placeholder="Enter project volume"
                            prop:value=move || volume.get()
                            on:input=move |ev| volume.set(event_target_value(&ev))
                        />
                    </div>

                    {move || error_message.get().map(|msg| view! { <div class="error-message">{msg}</div> })}

                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || is_loading.get())
                        on_click=move |_| submit()
                    >
                        {move || if is_loading.get() {
                            view! { <Spinner size=SpinnerSize::Small /> " Generating Predictions..." }.into_any()
                        } else {
                            view! { {icon("trending-up")} " Generate Material Predictions" }.into_any()
                        }}
                    </Button>
                </form>
            </div>

            <div class="insight-grid">
                <div class="card insight">
                    <h3>"Market Insights"</h3>
                    <p class="muted">"Steel and cement prices move with quarterly demand; lock rates early for large orders."</p>
                </div>
                <div class="card insight">
                    <h3>"Risk Factors"</h3>
                    <p class="muted">"Monsoon months slow site deliveries and raise aggregate transport costs."</p>
                </div>
                <div class="card insight">
                    <h3>"Recommendations"</h3>
                    <p>"• Order steel materials 2 weeks early"</p>
                    <p>"• Consider alternative concrete suppliers"</p>
                    <p>"• Budget 10% buffer for labor costs"</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefilled_value_outside_the_list_is_offered_first() {
        let list = choices(&PROJECT_TYPES, "Data Center");
        assert_eq!(list[0], "Data Center");
        assert_eq!(list.len(), PROJECT_TYPES.len() + 1);
    }

    #[test]
    fn known_or_empty_values_keep_the_list() {
        assert_eq!(choices(&INDIAN_STATES, "Karnataka").len(), INDIAN_STATES.len());
        assert_eq!(choices(&PROJECT_SIZES, "").len(), PROJECT_SIZES.len());
    }
}
