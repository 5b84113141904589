//! Screen Tab Bar Component
//!
//! Tab bar for switching between the gallery and the editor.

use leptos::prelude::*;

/// App screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Gallery,
    Editor,
}

impl Screen {
    pub const ALL: [Screen; 2] = [Screen::Gallery, Screen::Editor];

    pub fn label(&self) -> &'static str {
        match self {
            Screen::Gallery => "Parcele salvate",
            Screen::Editor => "Parcelă nouă",
        }
    }
}

/// Screen Tab Bar component
#[component]
pub fn ScreenTabs(
    current_screen: ReadSignal<Screen>,
    set_current_screen: WriteSignal<Screen>,
) -> impl IntoView {
    view! {
        <nav class="screen-tab-bar">
            {Screen::ALL
                .into_iter()
                .map(|screen| {
                    let tab_class = move || {
                        if current_screen.get() == screen { "screen-tab active" } else { "screen-tab" }
                    };
                    view! {
                        <button class=tab_class on:click=move |_| set_current_screen.set(screen)>
                            {screen.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
