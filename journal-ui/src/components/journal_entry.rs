//! Journal Entry Component
//!
//! One card in the home list. Clicking it opens the entry page.

use journal::JournalEntry;
use leptos::*;

use crate::state::GlobalState;

/// Journal entry card
#[component]
pub fn JournalEntryCard(
    /// 1-based position in the list
    number: usize,
    entry: JournalEntry,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let on_click = move |_| {
        if let Err(e) = state.open_entry(number) {
            web_sys::console::error_1(&format!("Failed to open entry: {}", e).into());
        }
    };

    view! {
        <journal-entry>
            <article class="entry" on:click=on_click>
                <h2 class="entry-title">{entry.title}</h2>
                <p class="entry-date">{entry.date}</p>
                {entry.image.map(|image| view! {
                    <img class="entry-image" src=image.src alt=image.alt />
                })}
                <p class="entry-content">{entry.content}</p>
            </article>
        </journal-entry>
    }
}
