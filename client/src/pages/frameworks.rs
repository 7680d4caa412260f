//! Framework explorer: searchable, category-filtered catalog view.

use leptos::prelude::*;

use crate::components::framework_card::{FrameworkCard, FrameworkModal};
use crate::components::spinner::Spinner;
use crate::net::api;
use crate::net::types::FrameworkRecord;
use crate::state::filter::{self, ALL_CATEGORIES, FilterState};

/// The `/frameworks` page.
#[component]
pub fn FrameworksPage() -> impl IntoView {
    let records = RwSignal::new(Vec::<FrameworkRecord>::new());
    let loading = RwSignal::new(true);
    let filter = RwSignal::new(FilterState::default());
    let selected_id = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Some(loaded) = api::fetch_frameworks().await {
            records.set(loaded);
        }
        loading.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    loading.set(false);

    let category_options = move || {
        let mut options = vec![ALL_CATEGORIES.to_owned()];
        options.extend(filter::categories(&records.get()));
        options
    };

    let visible_records = move || {
        let all = records.get();
        let state = filter.get();
        filter::visible(&all, &state).into_iter().cloned().collect::<Vec<_>>()
    };

    let on_open = Callback::new(move |id: String| selected_id.set(Some(id)));
    let on_close = Callback::new(move |()| selected_id.set(None));

    let selected_record = move || {
        let id = selected_id.get()?;
        records.get().into_iter().find(|r| r.id == id)
    };

    view! {
        <div class="page frameworks-page">
            <div class="page__header">
                <h1>"Framework Explorer"</h1>
                <p>"Explore how 12 course frameworks from DSCI-5330 apply to Ford's strategic transformation"</p>
            </div>

            <Show when=move || !loading.get() fallback=Spinner>
                <div class="frameworks-page__controls">
                    <input
                        class="frameworks-page__search"
                        type="text"
                        placeholder="Search frameworks..."
                        prop:value=move || filter.get().query
                        on:input=move |ev| {
                            filter.update(|f| f.set_query(event_target_value(&ev)));
                        }
                    />
                    <select
                        class="frameworks-page__category"
                        on:change=move |ev| {
                            filter.update(|f| f.set_category(event_target_value(&ev)));
                        }
                    >
                        {move || {
                            let selected = filter.get().category;
                            category_options()
                                .into_iter()
                                .map(|cat| {
                                    let label = if cat == ALL_CATEGORIES {
                                        "All Categories".to_owned()
                                    } else {
                                        cat.clone()
                                    };
                                    view! {
                                        <option value=cat.clone() selected=cat == selected>
                                            {label}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </div>

                <div class="frameworks-page__stats">
                    <span>
                        <strong>{move || records.get().len()}</strong>
                        " Total Frameworks"
                    </span>
                    <span>
                        <strong>{move || filter::categories(&records.get()).len()}</strong>
                        " Categories"
                    </span>
                    <span><strong>"3"</strong> " Business Units Analyzed"</span>
                </div>

                <div class="frameworks-page__grid">
                    {move || {
                        visible_records()
                            .into_iter()
                            .map(|record| view! { <FrameworkCard record=record on_open=on_open /> })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <Show when=move || visible_records().is_empty()>
                    <p class="frameworks-page__empty">"No frameworks match your search criteria"</p>
                </Show>
            </Show>

            {move || {
                selected_record()
                    .map(|record| view! { <FrameworkModal record=record on_close=on_close /> })
            }}
        </div>
    }
}
