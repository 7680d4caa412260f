//! Centered loading spinner shown while a view's fetches are in flight.

use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner-wrap">
            <div class="spinner" aria-label="Loading"></div>
        </div>
    }
}
