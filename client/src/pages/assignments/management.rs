//! Assignment 04: management model analysis per Birkinshaw & Goddard.

use leptos::prelude::*;

use super::{AppliedFramework, AssignmentPage, Finding};
use crate::components::charts::{RadarChart, Series};
use crate::net::types::UnitKey;

const MODEL_DIMENSIONS: [&str; 4] = ["Objectives", "Motivation", "Coordination", "Decisions"];
// 1-5 management-model scale mapped onto the radar's 0-100 domain.
const MODEL_2020: [f64; 4] = [40.0, 40.0, 20.0, 20.0];
const MODEL_2022: [f64; 4] = [80.0, 80.0, 80.0, 80.0];
const MODEL_2025: [f64; 4] = [60.0, 60.0, 60.0, 60.0];

/// Strategy Implementation Roadmap scores per pillar, in unit order
/// (Blue, Model e, Pro). 1-5 scale.
pub const SIR_PILLARS: [(&str, [f64; 3]); 7] = [
    ("Strategy", [4.0, 3.5, 4.5]),
    ("Governance", [3.5, 3.0, 4.0]),
    ("Leadership", [3.5, 3.0, 4.5]),
    ("Resources", [4.0, 3.5, 4.0]),
    ("Culture", [3.0, 2.5, 4.0]),
    ("Agility", [3.0, 3.5, 4.5]),
    ("Performance", [3.5, 2.0, 4.5]),
];

/// Heat class for one SIR cell.
#[must_use]
pub fn sir_band(score: f64) -> &'static str {
    if score >= 4.0 {
        "sir-cell sir-cell--strong"
    } else if score >= 3.0 {
        "sir-cell sir-cell--steady"
    } else {
        "sir-cell sir-cell--weak"
    }
}

/// Mean SIR score for one unit column, rounded to one decimal.
#[must_use]
pub fn sir_average(column: usize) -> f64 {
    let sum: f64 = SIR_PILLARS.iter().map(|(_, scores)| scores[column]).sum();
    let mean = sum / SIR_PILLARS.len() as f64;
    (mean * 10.0).round() / 10.0
}

const FRAMEWORKS: &[AppliedFramework] = &[
    AppliedFramework {
        name: "Birkinshaw & Goddard 4-Dimension Model",
        source: "MIT Sloan Management Review",
        application: "Ford's management approach evolved from traditional hierarchical (2020) to progressive emergence-based during Ford+ (2022-2024), now rebalancing toward accountability in 2025 with new CSO role and performance-based compensation.",
    },
    AppliedFramework {
        name: "Nieto-Rodriguez Strategy Implementation Roadmap (SIR)",
        source: "Harvard Business Review, 2022",
        application: "Evaluated Ford's three business units across 7 pillars. Ford Pro scores highest (4.2/5.0) with clear strategy and execution. Model e scores lowest (3.0/5.0) due to $5.4B losses creating cultural tensions.",
    },
    AppliedFramework {
        name: "Kay's Obliquity Concept",
        source: "Oblique Strategy Framework",
        application: "Ford+ embraced obliquity with vision of \"customer freedom\" rather than pure profit maximization. 2025 pivot suggests return toward more direct goal-setting as EV losses pressure leadership.",
    },
];

const FINDINGS: &[Finding] = &[
    Finding {
        title: "Overall SIR Score",
        description: "Ford's average strategy implementation readiness across all business units.",
        metric: "3.3 / 5.0",
    },
    Finding {
        title: "Ford Pro: Execution Excellence",
        description: "Commercial business exemplifies balanced management with highest scores across all SIR pillars.",
        metric: "4.2/5.0 SIR Score, 15.3% EBIT Margin",
    },
    Finding {
        title: "Model e: Strategic Tensions",
        description: "$5.4B cumulative losses creating cultural friction and pressure for cost discipline.",
        metric: "-77.1% EBIT Margin (2024)",
    },
    Finding {
        title: "2025 Leadership Pivot",
        description: "New CSO (Gjaja), CFO (House), and Vice Chair-Strategy (Lawler) signal strategic rebalancing.",
        metric: "February 2025 restructure",
    },
];

/// The `/assignments/management` page.
#[component]
pub fn ManagementDashboardPage() -> impl IntoView {
    view! {
        <AssignmentPage
            title="Management Strategy"
            number="04"
            subtitle="Birkinshaw & Goddard Analysis"
            frameworks=FRAMEWORKS
            findings=FINDINGS
        >
            <section class="panel">
                <h3>"Management Model Evolution"</h3>
                <p class="panel__caption">
                    "Birkinshaw & Goddard 4-D Model (1=Traditional, 5=Progressive)"
                </p>
                <RadarChart
                    axes=MODEL_DIMENSIONS.to_vec()
                    series=vec![
                        Series { label: "2020", color: "#94A3B8", values: MODEL_2020.to_vec() },
                        Series { label: "2022-24", color: "#10B981", values: MODEL_2022.to_vec() },
                        Series { label: "2025", color: "#003478", values: MODEL_2025.to_vec() },
                    ]
                />
            </section>

            <section class="panel">
                <h3>"Strategy Implementation Readiness"</h3>
                <p class="panel__caption">"Nieto-Rodriguez SIR scores by business unit (scale: 1-5)"</p>
                <table class="sir-table">
                    <thead>
                        <tr>
                            <th>"SIR Pillar"</th>
                            {UnitKey::ALL
                                .iter()
                                .map(|unit| view! { <th>{unit.display_name()}</th> })
                                .collect::<Vec<_>>()}
                        </tr>
                    </thead>
                    <tbody>
                        {SIR_PILLARS
                            .iter()
                            .map(|&(pillar, scores)| {
                                view! {
                                    <tr>
                                        <td>{pillar}</td>
                                        {scores
                                            .iter()
                                            .map(|&score| {
                                                view! {
                                                    <td>
                                                        <span class=sir_band(score)>
                                                            {format!("{score:.1}")}
                                                        </span>
                                                    </td>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </tbody>
                    <tfoot>
                        <tr>
                            <td>"Average"</td>
                            {(0..3)
                                .map(|column| {
                                    view! { <td>{format!("{:.1}", sir_average(column))}</td> }
                                })
                                .collect::<Vec<_>>()}
                        </tr>
                    </tfoot>
                </table>
            </section>
        </AssignmentPage>
    }
}
