use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Overlay dialog closed by Escape, the close button or an overlay click
#[component]
pub fn Modal(
    /// Dialog title
    #[prop(into)]
    title: Signal<String>,
    /// Optional line under the title
    #[prop(optional, into)]
    subtitle: Option<Signal<String>>,
    on_close: Callback<()>,
    /// Wide layout for tables and forms
    #[prop(optional)]
    wide: bool,
    children: Children,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let stop_propagation = move |ev: ev::MouseEvent| ev.stop_propagation();
    let class = if wide { "modal modal--wide" } else { "modal" };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class=class on:click=stop_propagation>
                <div class="modal-header">
                    <div>
                        <h2 class="modal-title">{move || title.get()}</h2>
                        {subtitle.map(|s| view! { <p class="modal-subtitle">{move || s.get()}</p> })}
                    </div>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
