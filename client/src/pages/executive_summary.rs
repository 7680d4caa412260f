//! Executive summary: headline KPIs, trend charts, and unit cards.

#[cfg(test)]
#[path = "executive_summary_test.rs"]
mod executive_summary_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::cards::{KpiCard, fit_score_class};
use crate::components::charts::{AreaChart, RadarChart, Series};
use crate::components::spinner::Spinner;
use crate::net::api;
use crate::net::types::{BusinessUnitRecord, BusinessUnits, KpiTable, UnitKey};

const TREND_YEARS: [&str; 5] = ["2020", "2021", "2022", "2023", "2024"];
const TREND_REVENUE: [f64; 5] = [127.1, 136.3, 158.1, 176.2, 185.0];
const TREND_EBIT: [f64; 5] = [-2.9, 2.1, 6.2, 8.5, 11.3];

const RADAR_DIMENSIONS: [&str; 5] =
    ["Financial", "Marketing", "Management", "Operations", "Strategy Fit"];
const RADAR_BLUE: [f64; 5] = [85.0, 80.0, 75.0, 80.0, 90.0];
const RADAR_MODEL_E: [f64; 5] = [20.0, 60.0, 65.0, 55.0, 40.0];
const RADAR_PRO: [f64; 5] = [90.0, 85.0, 90.0, 88.0, 100.0];

/// The substring of `financial` between `"Revenue: $"` and the following
/// `B`, e.g. `"72.8"`. `None` when the narrative omits a revenue figure.
#[must_use]
pub fn revenue_figure(financial: &str) -> Option<&str> {
    let rest = financial.split("Revenue: $").nth(1)?;
    let end = rest.find('B')?;
    let figure = &rest[..end];
    (!figure.is_empty()).then_some(figure)
}

/// The parenthesized qualifier after `"EBIT:"`, e.g. `"12.8% margin"`.
#[must_use]
pub fn ebit_margin_figure(financial: &str) -> Option<&str> {
    let rest = financial.split("EBIT:").nth(1)?;
    let open = rest.find('(')?;
    let close = rest[open..].find(')')? + open;
    Some(&rest[open + 1..close])
}

/// The numeric prefix of a fit-score label, e.g. `"9/10"` from
/// `"9/10 - Strong alignment"`.
#[must_use]
pub fn fit_score_short(label: &str) -> &str {
    label.split(" - ").next().unwrap_or(label)
}

/// The `/` page.
#[component]
pub fn ExecutiveSummaryPage() -> impl IntoView {
    let units = RwSignal::new(None::<BusinessUnits>);
    let kpis = RwSignal::new(None::<KpiTable>);
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let (loaded_units, loaded_kpis) =
            futures::join!(api::fetch_business_units(), api::fetch_kpis());
        units.set(loaded_units);
        kpis.set(loaded_kpis);
        loading.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    loading.set(false);

    view! {
        <div class="page summary-page">
            <div class="page__header">
                <h1>"Executive Dashboard"</h1>
                <p>"Ford Motor Company Strategy Analysis (2020-2025)"</p>
            </div>

            <Show when=move || !loading.get() fallback=Spinner>
                <div class="summary-page__kpis">
                    <KpiCard
                        title="Total Revenue (2024)"
                        value="$185.0B"
                        change="+5.0% YoY"
                        trend_up=true
                    />
                    <KpiCard title="EBIT (2024)" value="$11.3B" change="+33.0% YoY" trend_up=true />
                    <KpiCard title="Net Income" value="$6.6B" change="+53.5% YoY" trend_up=true />
                    <KpiCard title="Employees" value="171K" change="-3.4% YoY" trend_up=false />
                </div>

                <div class="summary-page__charts">
                    <section class="panel">
                        <h3>"Revenue & EBIT Trend (2020-2024)"</h3>
                        <AreaChart
                            labels=TREND_YEARS.to_vec()
                            series=vec![
                                Series {
                                    label: "Revenue ($B)",
                                    color: "#003478",
                                    values: TREND_REVENUE.to_vec(),
                                },
                                Series {
                                    label: "EBIT ($B)",
                                    color: "#00A550",
                                    values: TREND_EBIT.to_vec(),
                                },
                            ]
                        />
                    </section>
                    <section class="panel">
                        <h3>"Business Unit Comparison"</h3>
                        <RadarChart
                            axes=RADAR_DIMENSIONS.to_vec()
                            series=vec![
                                Series {
                                    label: "Ford Blue",
                                    color: "#003478",
                                    values: RADAR_BLUE.to_vec(),
                                },
                                Series {
                                    label: "Model e",
                                    color: "#FF6B00",
                                    values: RADAR_MODEL_E.to_vec(),
                                },
                                Series {
                                    label: "Ford Pro",
                                    color: "#00A550",
                                    values: RADAR_PRO.to_vec(),
                                },
                            ]
                        />
                    </section>
                </div>

                <section class="summary-page__units">
                    <h2>"Business Units"</h2>
                    <div class="summary-page__unit-grid">
                        {move || {
                            units
                                .get()
                                .map(|loaded| {
                                    UnitKey::ALL
                                        .iter()
                                        .map(|&unit| {
                                            let record = loaded.get(unit).clone();
                                            view! { <BusinessUnitCard unit=unit record=record /> }
                                        })
                                        .collect::<Vec<_>>()
                                })
                        }}
                    </div>
                </section>

                <section class="panel summary-page__links">
                    <h3>"Explore Further"</h3>
                    <div class="summary-page__link-grid">
                        <A href="/frameworks" attr:class="summary-page__link">
                            <h4>"Framework Explorer"</h4>
                            <p>"12 course frameworks applied to Ford"</p>
                        </A>
                        <A href="/story" attr:class="summary-page__link">
                            <h4>"Transformation Story"</h4>
                            <p>"Ford's journey from 2020 to 2025"</p>
                        </A>
                    </div>
                </section>
            </Show>
        </div>
    }
}

/// Summary card for one business unit, linking to its detail view.
#[component]
fn BusinessUnitCard(unit: UnitKey, record: BusinessUnitRecord) -> impl IntoView {
    let revenue = revenue_figure(&record.financial)
        .map_or_else(|| "N/A".to_owned(), |figure| format!("${figure}B"));
    let margin = ebit_margin_figure(&record.financial).unwrap_or("N/A").to_owned();
    let margin_negative = margin.contains('-');
    let score = fit_score_short(&record.framework_fit_score).to_owned();
    let badge = fit_score_class(&record.framework_fit_score);

    view! {
        <A href=unit.route() attr:class="unit-card">
            <div class="unit-card__accent" style=format!("background: {}", unit.color())></div>
            <div class="unit-card__body">
                <div class="unit-card__head">
                    <h3>{unit.display_name()}</h3>
                    <span class=badge>{score}</span>
                </div>
                <dl class="unit-card__figures">
                    <div>
                        <dt>"Revenue"</dt>
                        <dd>{revenue}</dd>
                    </div>
                    <div>
                        <dt>"EBIT Margin"</dt>
                        <dd class=if margin_negative { "negative" } else { "" }>{margin}</dd>
                    </div>
                </dl>
                <p class="unit-card__position">{record.strategic_position.clone()}</p>
                <span class="unit-card__more">"View Details →"</span>
            </div>
        </A>
    }
}
