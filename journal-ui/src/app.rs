//! App Root Component
//!
//! Switches between views on the active navigation entry and keeps the
//! `<body>` class in step with it.

use journal::NavigationEntry;
use leptos::*;

use crate::components::{EntryPage, Header};
use crate::history::current_hash;
use crate::pages::{Home, Settings};
use crate::state::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // A reload keeps the hash; show that view without pushing a new state
    state.restore(&current_hash());

    // Back/forward only restore the view, the navigation log is untouched.
    // The listener stays registered for the page lifetime.
    let _popstate_listener = window_event_listener(ev::popstate, move |_| {
        state.restore(&current_hash());
    });

    create_effect(move |_| {
        let body_class = state.view_state().body_class;
        if let Some(body) = document().body() {
            body.set_class_name(body_class);
        }
    });

    view! {
        <Header />
        {move || match state.current.get() {
            NavigationEntry::Home => view! { <Home /> }.into_view(),
            NavigationEntry::Entry { .. } => view! { <EntryPage /> }.into_view(),
            NavigationEntry::Settings => view! { <Settings /> }.into_view(),
        }}
    }
}
