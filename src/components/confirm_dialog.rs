//! Confirm Dialog Component
//!
//! Modal confirmation with cancel/confirm actions.

use leptos::prelude::*;

/// Modal confirmation dialog
///
/// # Arguments
/// * `open` - Whether the dialog is shown
/// * `title` - Dialog heading
/// * `message` - Question asked
/// * `confirm_label` - Text of the confirm button
/// * `on_confirm` - Callback when the user confirms
/// * `on_cancel` - Callback when the user cancels or clicks the backdrop
#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into)] confirm_label: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
                <div
                    class="dialog"
                    role="dialog"
                    on:click=move |ev| ev.stop_propagation()
                >
                    <h2 class="dialog-title">{title.clone()}</h2>
                    <p class="dialog-message">{message.clone()}</p>
                    <div class="dialog-actions">
                        <button
                            class="cancel-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_cancel.run(());
                            }
                        >
                            "Anulează"
                        </button>
                        <button
                            class="confirm-btn"
                            autofocus
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_confirm.run(());
                            }
                        >
                            {confirm_label.clone()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
