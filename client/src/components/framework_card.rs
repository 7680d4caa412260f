//! Framework catalog card and its detail modal.

use leptos::prelude::*;

use crate::net::types::{FrameworkRecord, UnitKey};

/// Grid card summarizing one framework; clicking opens the detail modal.
#[component]
pub fn FrameworkCard(
    record: FrameworkRecord,
    /// Receives the record id when the card is activated.
    on_open: Callback<String>,
) -> impl IntoView {
    let id = record.id.clone();
    view! {
        <button class="framework-card" on:click=move |_| on_open.run(id.clone())>
            <span class="framework-card__area">{record.area.clone()}</span>
            <h3 class="framework-card__name">{record.name.clone()}</h3>
            <p class="framework-card__source">{record.source.clone()}</p>
            <p class="framework-card__assessment">{record.assessment.clone()}</p>
        </button>
    }
}

/// Modal with the overall assessment and per-unit application notes.
#[component]
pub fn FrameworkModal(record: FrameworkRecord, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--framework" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog__header">
                    <div>
                        <span class="framework-card__area">{record.area.clone()}</span>
                        <h2 class="dialog__title">{record.name.clone()}</h2>
                        <p class="dialog__source">"Source: " {record.source.clone()}</p>
                    </div>
                    <button class="btn dialog__close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>

                <div class="dialog__body">
                    <section class="dialog__section">
                        <h4>"Overall Assessment"</h4>
                        <p>{record.assessment.clone()}</p>
                    </section>

                    <section class="dialog__section">
                        <h4>"Application by Business Unit"</h4>
                        {UnitKey::ALL
                            .iter()
                            .map(|&unit| {
                                let text = record.application_for(unit).to_owned();
                                view! {
                                    <div
                                        class="dialog__unit-application"
                                        style=format!("border-left: 4px solid {}", unit.color())
                                    >
                                        <span class="dialog__unit-name">{unit.display_name()}</span>
                                        <p>{text}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </section>
                </div>
            </div>
        </div>
    }
}
