//! Home Page
//!
//! List of all journal entries.

use leptos::*;

use crate::components::JournalEntryCard;
use crate::state::GlobalState;

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let entries = state.entries();

    view! {
        <main class="entries">
            {entries
                .numbered()
                .map(|(number, entry)| view! {
                    <JournalEntryCard number=number entry=entry.clone() />
                })
                .collect_view()}
        </main>
    }
}
