//! Guided story timeline: eight narrative steps with optional auto-play.
//!
//! SYSTEM CONTEXT
//! ==============
//! The transition logic lives in [`StoryState`]; this page owns the timer.
//! An effect re-arms a single-shot sleep whenever `(current_step, playing)`
//! changes, tagging it with the epoch current at arming time. Stale firings
//! are rejected inside `advance_from_timer`, and unmounting invalidates the
//! epoch so a late timer can never touch a torn-down view.

#[cfg(test)]
#[path = "story_test.rs"]
mod story_test;

use leptos::prelude::*;

use crate::components::cards::StatCard;
use crate::content::{STORY_STEPS, StoryStep};
use crate::state::story::StoryState;
#[cfg(feature = "hydrate")]
use crate::state::story::AUTO_ADVANCE_MS;

/// Progress through the story as a percentage of steps reached.
#[must_use]
pub fn progress_pct(current_step: usize, step_count: usize) -> f64 {
    if step_count == 0 {
        return 0.0;
    }
    current_step as f64 / step_count as f64 * 100.0
}

/// The `/story` page.
#[component]
pub fn StoryPage() -> impl IntoView {
    let story = RwSignal::new(StoryState::default());

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let state = story.get();
            if !state.playing {
                return;
            }
            let armed_epoch = state.timer_epoch;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(AUTO_ADVANCE_MS))
                    .await;
                story.update(|s| {
                    let _ = s.advance_from_timer(armed_epoch);
                });
            });
        });
        on_cleanup(move || story.update(StoryState::invalidate_timer));
    }

    let current = move || {
        let position = story.get().current_step;
        // Positions are contiguous from 1, so this lookup cannot fail.
        &STORY_STEPS[position - 1]
    };

    view! {
        <div class="page story-page">
            <div class="page__header page__header--center">
                <h1>"Ford's Transformation Story"</h1>
                <p>"A guided journey through Ford's strategic evolution from 2020 to 2025"</p>
            </div>

            <div class="story-page__progress">
                <div class="story-page__progress-row">
                    <span class="story-page__progress-label">
                        {move || {
                            format!("Step {} of {}", story.get().current_step, story.get().step_count())
                        }}
                    </span>
                    <button class="btn" on:click=move |_| story.update(StoryState::toggle_play)>
                        {move || if story.get().playing { "⏸ Pause" } else { "▶ Auto-play" }}
                    </button>
                </div>
                <div class="story-page__progress-track">
                    <div
                        class="story-page__progress-fill"
                        style=move || {
                            let state = story.get();
                            format!(
                                "width: {:.1}%",
                                progress_pct(state.current_step, state.step_count()),
                            )
                        }
                    ></div>
                </div>
            </div>

            <div class="story-page__indicators">
                {STORY_STEPS
                    .iter()
                    .map(|step| view! { <StepIndicator step=step story=story /> })
                    .collect::<Vec<_>>()}
            </div>

            <div class="story-page__card">
                {move || {
                    let step = current();
                    view! {
                        <div
                            class="story-page__card-header"
                            style=format!("background: {}", step.color)
                        >
                            <span class="story-page__year">{step.year}</span>
                            <h2>{step.title}</h2>
                            <p>{step.subtitle}</p>
                        </div>
                        <div class="story-page__card-body">
                            <p class="story-page__narrative">{step.narrative}</p>
                            <div class="story-page__stats">
                                {step
                                    .stats
                                    .iter()
                                    .map(|stat| {
                                        view! {
                                            <StatCard
                                                label=stat.label
                                                value=stat.value
                                                subtitle=stat.subtitle
                                            />
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                            <div class="story-page__insight">
                                <h4>"Framework Insight"</h4>
                                <p>{step.framework_insight}</p>
                            </div>
                        </div>
                    }
                }}

                <div class="story-page__nav">
                    <button
                        class="btn"
                        disabled=move || story.get().current_step == 1
                        on:click=move |_| story.update(StoryState::prev_step)
                    >
                        "← Previous"
                    </button>
                    <span class="story-page__hint">"Click a year or use the buttons to navigate"</span>
                    <button
                        class="btn btn--primary"
                        disabled=move || story.get().at_last_step()
                        on:click=move |_| story.update(StoryState::next_step)
                    >
                        "Next →"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Clickable year marker; jumping always pauses auto-play.
#[component]
fn StepIndicator(step: &'static StoryStep, story: RwSignal<StoryState>) -> impl IntoView {
    let position = step.position;
    let class = move || {
        let current = story.get().current_step;
        if position == current {
            "step-indicator step-indicator--current"
        } else if position < current {
            "step-indicator step-indicator--completed"
        } else {
            "step-indicator"
        }
    };

    view! {
        <button class=class on:click=move |_| story.update(|s| s.go_to_step(position))>
            <span class="step-indicator__dot"></span>
            <span class="step-indicator__year">{step.year}</span>
        </button>
    }
}
