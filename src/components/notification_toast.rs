//! Notification Toast Component
//!
//! Bottom-centered toast with a close button; hides itself after a delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::notification::NotificationState;

/// Toast for the screen's single notification
///
/// # Arguments
/// * `notification` - Current notification; shown while `open`
/// * `on_close` - Called by the close button and by the auto-hide timer
/// * `hide_after_ms` - Auto-hide delay
#[component]
pub fn NotificationToast(
    #[prop(into)] notification: Signal<NotificationState>,
    #[prop(into)] on_close: Callback<()>,
    hide_after_ms: u32,
) -> impl IntoView {
    // Bumped per shown notification so a stale timer never hides a newer one
    let shown = StoredValue::new(0u32);

    Effect::new(move |_| {
        if !notification.with(|n| n.open) {
            return;
        }
        shown.update_value(|n| *n += 1);
        let generation = shown.get_value();
        spawn_local(async move {
            TimeoutFuture::new(hide_after_ms).await;
            if shown.try_get_value() == Some(generation) {
                on_close.run(());
            }
        });
    });

    view! {
        <Show when=move || notification.with(|n| n.open)>
            <div class=move || notification.with(|n| n.severity.css_class()) role="alert">
                <span class="toast-message">{move || notification.with(|n| n.message.clone())}</span>
                <button class="toast-close" on:click=move |_| on_close.run(())>
                    "×"
                </button>
            </div>
        </Show>
    }
}
