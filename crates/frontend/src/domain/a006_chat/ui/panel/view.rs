use super::view_model::{suggestions, ChatPanelVm};
use crate::shared::date_utils::format_time;
use crate::shared::icons::icon;
use contracts::domain::a001_project::aggregate::Project;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ChatPanel(project: Project) -> impl IntoView {
    let vm = ChatPanelVm::new(project.to_string_id());
    let end_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view
    Effect::new(move || {
        vm.messages.track();
        vm.is_sending.track();
        if let Some(el) = end_ref.get() {
            el.scroll_into_view();
        }
    });

    view! {
        <div class="tab-page chat">
            <div class="card chat__card">
                <div class="chat__header">
                    <h2 class="card__title">{icon("bot")}" AI Procurement Assistant"</h2>
                    <p class="card__subtitle">
                        {format!(
                            "Get intelligent insights and recommendations for {}",
                            project.name()
                        )}
                    </p>
                </div>

                <div class="chat__messages">
                    <For
                        each=move || vm.messages.get()
                        key=|m| m.id.clone()
                        children=move |m| {
                            let class = if m.is_user { "chat-message chat-message--user" } else { "chat-message" };
                            view! {
                                <div class=class>
                                    <div class="chat-message__avatar">
                                        {if m.is_user { icon("user") } else { icon("bot") }}
                                    </div>
                                    <div class="chat-message__body">
                                        <div class="chat-message__bubble">{m.message.clone()}</div>
                                        <div class="chat-message__time">{format_time(m.timestamp)}</div>
                                    </div>
                                </div>
                            }
                        }
                    />
                    <Show when=move || vm.is_sending.get()>
                        <div class="chat-message">
                            <div class="chat-message__avatar">{icon("bot")}</div>
                            <div class="chat-message__bubble">
                                <Spinner size=SpinnerSize::Small />
                                " AI is thinking..."
                            </div>
                        </div>
                    </Show>
                    <div node_ref=end_ref></div>
                </div>

                {move || {
                    let offered = suggestions(vm.messages.with(Vec::len));
                    (!offered.is_empty()).then(|| view! {
                        <div class="chat__suggestions">
                            <h4>"Suggested questions:"</h4>
                            {offered
                                .iter()
                                .map(|question| view! {
                                    <button
                                        class="chat__suggestion"
                                        on:click=move |_| vm.input.set(question.to_string())
                                    >
                                        {*question}
                                    </button>
                                })
                                .collect_view()}
                        </div>
                    })
                }}

                <form
                    class="chat__input"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        vm.send_command();
                    }
                >
                    <input
                        type="text"
                        placeholder="Ask about procurement strategy, costs, timelines..."
                        prop:value=move || vm.input.get()
                        prop:disabled=move || vm.is_sending.get()
                        on:input=move |ev| vm.input.set(event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        class="button button--primary button--icon"
                        prop:disabled=move || vm.is_sending.get() || vm.input.with(|i| i.trim().is_empty())
                    >
                        {icon("send")}
                    </button>
                </form>
            </div>
        </div>
    }
}
