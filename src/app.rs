//! Field Atlas Frontend App
//!
//! Main application component: screen tabs over the active screen.

use leptos::prelude::*;

use crate::components::{FieldEditor, FieldGallery, Screen, ScreenTabs};
use crate::config::AppConfig;
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let (current_screen, set_current_screen) = signal(Screen::default());

    // Provide context to all children
    provide_context(AppContext::new(AppConfig::from_env()));

    view! {
        <div class="app-layout">
            <ScreenTabs current_screen=current_screen set_current_screen=set_current_screen />

            // Switching screens unmounts the other one, maps included
            <main class="main-content">
                {move || match current_screen.get() {
                    Screen::Gallery => view! { <FieldGallery /> }.into_any(),
                    Screen::Editor => view! { <FieldEditor /> }.into_any(),
                }}
            </main>
        </div>
    }
}
