//! Entry Page Component
//!
//! Full view of the selected journal entry.

use leptos::*;

use crate::state::GlobalState;

/// Entry page component
#[component]
pub fn EntryPage() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <entry-page>
            {move || match state.selected_entry() {
                Some(entry) => view! {
                    <article class="entry-page">
                        <h2 class="entry-title">{entry.title}</h2>
                        <p class="entry-date">{entry.date}</p>
                        {entry.image.map(|image| view! {
                            <img class="entry-image" src=image.src alt=image.alt />
                        })}
                        <p class="entry-content">{entry.content}</p>
                    </article>
                }.into_view(),
                None => view! {
                    <p class="entry-missing">"This entry does not exist."</p>
                }.into_view(),
            }}
        </entry-page>
    }
}
