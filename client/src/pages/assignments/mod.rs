//! Assignment dashboards: one page per course deliverable, sharing a
//! common header / frameworks / findings layout.

#[cfg(test)]
#[path = "assignments_test.rs"]
mod assignments_test;

pub mod finance;
pub mod management;
pub mod marketing;
pub mod operations;

use leptos::prelude::*;
use leptos_router::components::A;

/// A framework citation applied within one assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppliedFramework {
    pub name: &'static str,
    pub source: &'static str,
    pub application: &'static str,
}

/// One headline takeaway with an optional supporting metric.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Finding {
    pub title: &'static str,
    pub description: &'static str,
    pub metric: &'static str,
}

/// Accent color keyed by assignment number; unknown numbers fall back to
/// the first assignment's green.
#[must_use]
pub fn accent_color(number: &str) -> &'static str {
    match number {
        "03" => "#7C3AED",
        "04" => "#EA580C",
        "05" => "#0284C7",
        _ => "#059669",
    }
}

/// Shared chrome for the four assignment dashboards. The chart grid is
/// supplied as children between the header and the frameworks/findings
/// columns.
#[component]
pub fn AssignmentPage(
    title: &'static str,
    number: &'static str,
    subtitle: &'static str,
    frameworks: &'static [AppliedFramework],
    findings: &'static [Finding],
    children: Children,
) -> impl IntoView {
    let accent = accent_color(number);

    view! {
        <div class="page assignment-page">
            <A href="/" attr:class="assignment-page__back">"← Back to Dashboard"</A>

            <header class="panel assignment-page__header">
                <div class="assignment-page__accent" style=format!("background: {accent}")></div>
                <div class="assignment-page__head-row">
                    <span
                        class="assignment-page__number"
                        style=format!("background: {accent}")
                    >
                        {number}
                    </span>
                    <div>
                        <h1>{title}</h1>
                        <p>{subtitle}</p>
                    </div>
                </div>
            </header>

            <div class="assignment-page__charts">{children()}</div>

            <div class="assignment-page__columns">
                <section class="panel assignment-page__frameworks">
                    <h2>"Academic Frameworks Applied"</h2>
                    {frameworks
                        .iter()
                        .map(|f| {
                            view! {
                                <div class="assignment-page__framework">
                                    <h4>{f.name}</h4>
                                    <p class="assignment-page__framework-source">{f.source}</p>
                                    <p>{f.application}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </section>

                <section class="assignment-page__findings">
                    <h2>"Key Findings"</h2>
                    {findings
                        .iter()
                        .map(|f| {
                            view! {
                                <div class="panel assignment-page__finding">
                                    <h4>{f.title}</h4>
                                    <p>{f.description}</p>
                                    <p class="assignment-page__finding-metric">{f.metric}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </section>
            </div>
        </div>
    }
}
