//! Settings Page

use leptos::*;

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <section class="settings">
            <p>"Nothing to configure yet. Use the header title to go back to your entries."</p>
        </section>
    }
}
