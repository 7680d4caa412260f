//! Assignment 05: operations strategy through the MIT decision-category
//! framework and the resource-based view.

use leptos::prelude::*;

use super::{AppliedFramework, AssignmentPage, Finding};
use crate::components::charts::{BarRow, HBarChart, RadarChart, Series};

const FOOTPRINT: [(&str, &str, &str); 4] = [
    ("41", "Assembly Plants", "Global manufacturing"),
    ("24", "Countries", "Geographic presence"),
    ("375+", "Total Facilities", "Operations worldwide"),
    ("6", "Joint Ventures", "Strategic partnerships"),
];

const FIT_AXES: [&str; 6] = [
    "Cost Leadership",
    "Differentiation",
    "Capacity Fit",
    "Vertical Integration",
    "Process Innovation",
    "Profitability",
];
// 1-5 alignment scores mapped onto the radar's 0-100 domain.
const FIT_BLUE: [f64; 6] = [90.0, 60.0, 70.0, 60.0, 60.0, 80.0];
const FIT_MODEL_E: [f64; 6] = [40.0, 80.0, 50.0, 90.0, 80.0, 20.0];
const FIT_PRO: [f64; 6] = [80.0, 100.0, 90.0, 80.0, 90.0, 100.0];

/// Make-vs-buy integration level per component category (percent in-house),
/// against the 70% threshold treated as "high integration".
const INTEGRATION_ROWS: [(&str, f64); 6] = [
    ("Batteries", 95.0),
    ("Engines", 90.0),
    ("Transmissions", 85.0),
    ("Software", 80.0),
    ("Stamping", 75.0),
    ("Semiconductors", 20.0),
];

const FRAMEWORKS: &[AppliedFramework] = &[
    AppliedFramework {
        name: "MIT Decision Category Framework",
        source: "Hayes & Wheelwright",
        application: "Ford's operations span 8 decision categories split between Structural (facilities, capacity, integration, technology) and Infrastructure (workforce, supply chain, IT, organization). The tri-unit structure enables category-specific optimization.",
    },
    AppliedFramework {
        name: "Skinner's Focused Factory",
        source: "Harvard Business Review, 1974",
        application: "Ford's separation into Blue (ICE), Model e (EV), and Pro (Commercial) creates focused factories within each unit. This reduces complexity and enables targeted manufacturing excellence for distinct product families.",
    },
    AppliedFramework {
        name: "Resource-Based View (RBV)",
        source: "Barney, 1991",
        application: "Ford Pro's software capabilities and Ford Blue's truck manufacturing heritage represent VRIN resources. BlueOval SK battery JV represents strategic capability building for EV competitiveness.",
    },
];

const FINDINGS: &[Finding] = &[
    Finding {
        title: "Global Manufacturing Footprint",
        description: "41 manufacturing plants across 24 countries with 375+ total operations facilities.",
        metric: "4.25M annual production capacity",
    },
    Finding {
        title: "Ford Pro: Strategic Exemplar",
        description: "Highest strategic fit scores across all dimensions with 13.5% EBIT margin and growing software services revenue.",
        metric: "5-Star Strategic Alignment",
    },
    Finding {
        title: "BlueOval SK Integration",
        description: "Critical $11B+ battery vertical integration investment with SK On for domestic EV production.",
        metric: "2 Battery Plants (TN + KY)",
    },
    Finding {
        title: "Model e Capacity Challenge",
        description: "EV capacity utilization at ~58% as demand ramps slower than projected. ICE excess capacity creates cost burden.",
        metric: "Capacity Utilization: 58-73%",
    },
];

/// The `/assignments/operations` page.
#[component]
pub fn OperationsDashboardPage() -> impl IntoView {
    view! {
        <AssignmentPage
            title="Operations Strategy"
            number="05"
            subtitle="MIT Framework & Resource-Based View"
            frameworks=FRAMEWORKS
            findings=FINDINGS
        >
            <section class="panel">
                <h3>"Global Manufacturing Footprint"</h3>
                <p class="panel__caption">"Ford's worldwide operations infrastructure"</p>
                <div class="footprint-grid">
                    {FOOTPRINT
                        .iter()
                        .map(|&(value, name, description)| {
                            view! {
                                <div class="footprint-card">
                                    <p class="footprint-card__value">{value}</p>
                                    <p class="footprint-card__name">{name}</p>
                                    <p class="footprint-card__detail">{description}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <p class="panel__footnote">
                    "Key JVs: BlueOval SK (batteries), Ford Otosan (Turkey), Changan Ford (China)"
                </p>
            </section>

            <section class="panel">
                <h3>"Strategic Fit by Business Unit"</h3>
                <p class="panel__caption">"Resource-based alignment scores (1-5 scale)"</p>
                <RadarChart
                    axes=FIT_AXES.to_vec()
                    series=vec![
                        Series { label: "Ford Blue", color: "#003478", values: FIT_BLUE.to_vec() },
                        Series { label: "Model e", color: "#FF6B00", values: FIT_MODEL_E.to_vec() },
                        Series { label: "Ford Pro", color: "#10B981", values: FIT_PRO.to_vec() },
                    ]
                />
            </section>

            <section class="panel">
                <h3>"Vertical Integration Strategy"</h3>
                <p class="panel__caption">
                    "Make vs Buy decisions across key component categories (% in-house, vs 70% high-integration threshold)"
                </p>
                <HBarChart
                    rows={INTEGRATION_ROWS
                        .iter()
                        .map(|&(label, level)| BarRow { label, value: level, benchmark: 70.0 })
                        .collect::<Vec<_>>()}
                    color="#0284C7"
                />
                <p class="panel__footnote">
                    "Batteries, engines, and transmissions stay in-house for strategic control; semiconductors remain outsourced due to capital and expertise requirements"
                </p>
            </section>
        </AssignmentPage>
    }
}
