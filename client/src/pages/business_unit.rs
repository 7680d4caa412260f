//! Business-unit detail view, parameterized by unit key.

#[cfg(test)]
#[path = "business_unit_test.rs"]
mod business_unit_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::cards::{MetricCard, fit_score_class};
use crate::components::charts::{BarRow, HBarChart};
use crate::components::spinner::Spinner;
use crate::net::api;
use crate::net::types::{BusinessUnits, FrameworkRecord, UnitKey};

/// Headline metrics per unit (2024 figures from the 10-K).
#[must_use]
pub fn headline_metrics(unit: UnitKey) -> [(&'static str, &'static str); 4] {
    match unit {
        UnitKey::Blue => [
            ("Revenue (2024)", "$72.8B"),
            ("EBIT", "$9.3B"),
            ("EBIT Margin", "12.8%"),
            ("Wholesale Units", "2,279K"),
        ],
        UnitKey::ModelE => [
            ("Revenue (2024)", "$3.9B"),
            ("EBIT", "-$5.1B"),
            ("EBIT Margin", "-131.8%"),
            ("Wholesale Units", "97K"),
        ],
        UnitKey::Pro => [
            ("Revenue (2024)", "$66.9B"),
            ("EBIT", "$9.0B"),
            ("EBIT Margin", "13.5%"),
            ("Wholesale Units", "1,503K"),
        ],
    }
}

/// Performance-vs-benchmark rows for the bar chart.
///
/// Model e's EBIT margin (-131.8%) is excluded from its chart: the value
/// dwarfs the axis and is called out in a footnote instead.
#[must_use]
pub fn performance_rows(unit: UnitKey) -> Vec<BarRow> {
    let rows = match unit {
        UnitKey::Blue => vec![
            BarRow { label: "EBIT Margin", value: 12.8, benchmark: 8.0 },
            BarRow { label: "Customer Loyalty", value: 65.1, benchmark: 55.0 },
            BarRow { label: "Capacity Utilization", value: 78.0, benchmark: 75.0 },
            BarRow { label: "Cost Efficiency", value: 92.0, benchmark: 85.0 },
        ],
        UnitKey::ModelE => vec![
            BarRow { label: "EBIT Margin", value: -131.8, benchmark: 8.0 },
            BarRow { label: "Customer Loyalty", value: 41.5, benchmark: 55.0 },
            BarRow { label: "Capacity Utilization", value: 32.0, benchmark: 75.0 },
            BarRow { label: "Cost Efficiency", value: 45.0, benchmark: 85.0 },
        ],
        UnitKey::Pro => vec![
            BarRow { label: "EBIT Margin", value: 13.5, benchmark: 8.0 },
            BarRow { label: "Customer Loyalty", value: 72.0, benchmark: 55.0 },
            BarRow { label: "Capacity Utilization", value: 85.0, benchmark: 75.0 },
            BarRow { label: "Cost Efficiency", value: 96.0, benchmark: 85.0 },
        ],
    };
    if unit == UnitKey::ModelE {
        rows.into_iter().filter(|r| r.label != "EBIT Margin").collect()
    } else {
        rows
    }
}

/// Split a comma-separated narrative field into bullet phrases.
#[must_use]
pub fn narrative_points(text: &str) -> Vec<&str> {
    text.split(", ").filter(|p| !p.trim().is_empty()).collect()
}

/// Up to four frameworks with substantive application notes for this unit.
#[must_use]
pub fn applicable_frameworks(records: &[FrameworkRecord], unit: UnitKey) -> Vec<&FrameworkRecord> {
    records
        .iter()
        .filter(|r| r.application_for(unit).len() > 10)
        .take(4)
        .collect()
}

/// The `/blue`, `/model-e`, and `/pro` pages.
#[component]
pub fn BusinessUnitPage(unit: UnitKey) -> impl IntoView {
    let units = RwSignal::new(None::<BusinessUnits>);
    let frameworks = RwSignal::new(Vec::<FrameworkRecord>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let (loaded_units, loaded_frameworks) =
            futures::join!(api::fetch_business_units(), api::fetch_frameworks());
        units.set(loaded_units);
        frameworks.set(loaded_frameworks.unwrap_or_default());
        loading.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    loading.set(false);

    let record = move || units.get().map(|loaded| loaded.get(unit).clone());

    view! {
        <div class="page unit-page">
            <A href="/" attr:class="unit-page__back">"← Back to Dashboard"</A>

            <Show when=move || !loading.get() fallback=Spinner>
                <header class="unit-page__header panel">
                    <div class="unit-page__accent" style=format!("background: {}", unit.color())></div>
                    <div class="unit-page__head-row">
                        <div>
                            <h1>{unit.display_name()}</h1>
                            <p>{unit.description()}</p>
                        </div>
                        {move || {
                            record()
                                .map(|r| {
                                    let badge = fit_score_class(&r.framework_fit_score);
                                    view! { <span class=badge>{r.framework_fit_score.clone()}</span> }
                                })
                        }}
                    </div>
                </header>

                <div class="unit-page__metrics">
                    {headline_metrics(unit)
                        .into_iter()
                        .map(|(title, value)| {
                            view! {
                                <MetricCard title=title value=value.to_owned() color=unit.color() />
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <section class="panel unit-page__performance">
                    <h3>"Performance vs Industry Benchmark"</h3>
                    <p class="panel__caption">
                        "Key performance indicators compared to automotive industry averages"
                    </p>
                    <HBarChart rows=performance_rows(unit) color=unit.color() />
                    <Show when=move || unit == UnitKey::ModelE>
                        <p class="panel__footnote">
                            "Note: EBIT Margin (-131.8%) excluded from chart due to scale. Model e operates at strategic loss during EV transition investment phase."
                        </p>
                    </Show>
                </section>

                <div class="unit-page__dimensions">
                    {move || {
                        record()
                            .map(|r| {
                                [
                                    ("Financial Performance", r.financial.clone()),
                                    ("Marketing Performance", r.marketing.clone()),
                                    ("Management Characteristics", r.management.clone()),
                                    ("Operations Characteristics", r.operations.clone()),
                                ]
                                    .into_iter()
                                    .map(|(title, content)| {
                                        view! { <DimensionSection title=title content=content /> }
                                    })
                                    .collect::<Vec<_>>()
                            })
                    }}
                </div>

                {move || {
                    record()
                        .map(|r| {
                            view! {
                                <section class="panel unit-page__position">
                                    <h3>"Strategic Position"</h3>
                                    <p>{r.strategic_position.clone()}</p>
                                </section>
                            }
                        })
                }}

                <section class="panel unit-page__frameworks">
                    <div class="unit-page__frameworks-head">
                        <h3>"Applied Frameworks"</h3>
                        <A href="/frameworks">"View all frameworks →"</A>
                    </div>
                    <div class="unit-page__framework-grid">
                        {move || {
                            let all = frameworks.get();
                            applicable_frameworks(&all, unit)
                                .into_iter()
                                .map(|f| {
                                    view! {
                                        <div class="unit-page__framework">
                                            <h4>{f.name.clone()}</h4>
                                            <p class="unit-page__framework-source">{f.source.clone()}</p>
                                            <p>{f.application_for(unit).to_owned()}</p>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </section>
            </Show>
        </div>
    }
}

/// Bullet list for one narrative dimension.
#[component]
fn DimensionSection(title: &'static str, content: String) -> impl IntoView {
    let points: Vec<String> = narrative_points(&content).into_iter().map(str::to_owned).collect();
    view! {
        <section class="panel dimension">
            <h3>{title}</h3>
            <ul>{points.into_iter().map(|p| view! { <li>{p}</li> }).collect::<Vec<_>>()}</ul>
        </section>
    }
}
