//! Header Component
//!
//! Page title and settings icon.

use leptos::*;

use crate::state::GlobalState;

/// Page header. The title returns home, the icon opens settings.
#[component]
pub fn Header() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <header>
            <h1 on:click=move |_| state.go_home()>
                {move || state.view_state().title}
            </h1>
            <img
                src="settings.svg"
                alt="settings"
                on:click=move |_| state.open_settings()
            />
        </header>
    }
}
