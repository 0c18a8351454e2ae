use leptos::ev;
use leptos::prelude::*;

use crate::shared::icons::icon;

#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: Signal<String>,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    // Escape closes the modal; the listener lives as long as the modal
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal-dialog" role="dialog" on:click=stop_propagation>
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title">{move || title.get()}</h5>
                        <button
                            type="button"
                            class="button button--icon modal__close"
                            on:click=move |_| on_close.run(())
                        >
                            {icon("x")}
                        </button>
                    </div>
                    <div class="modal-body">
                        {children()}
                    </div>
                </div>
            </div>
        </div>
    }
}
