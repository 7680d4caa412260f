//! Assignment 03: marketing evolution and STP analysis.

use leptos::prelude::*;

use super::{AppliedFramework, AssignmentPage, Finding};
use crate::components::charts::{AreaChart, BarRow, HBarChart, RadarChart, Series};

const ROI_YEARS: [&str; 6] = ["2019", "2020", "2021", "2022", "2023", "2024"];
const ROI_TREND: [f64; 6] = [0.32, 0.85, 1.24, 1.56, 1.89, 2.11];

const COMPETITIVE_AXES: [&str; 5] =
    ["Market Share", "Truck Loyalty", "Brand Value", "Digital Mix", "Efficiency"];
// Normalized to a 0-100 scale for the shared radar widget.
const COMPETITIVE_FORD: [f64; 5] = [71.0, 65.1, 44.1, 65.0, 85.0];
const COMPETITIVE_GM: [f64; 5] = [80.5, 58.4, 35.1, 58.0, 72.0];
const COMPETITIVE_TOYOTA: [f64; 5] = [79.0, 61.2, 100.0, 52.0, 78.0];

const FRAMEWORKS: &[AppliedFramework] = &[
    AppliedFramework {
        name: "STP Framework",
        source: "Dolan & John, 2024",
        application: "Ford restructured marketing around three lifestyle segments - Build (work-focused), Thrill (performance), and Adventure (outdoor) - rather than traditional product-first categories. This enables targeted messaging that resonates with customer aspirations.",
    },
    AppliedFramework {
        name: "Consumer Decision-Making",
        source: "Behavioral Economics",
        application: "Recognized that vehicle purchases involve both cognitive (specs, price) and emotional (lifestyle, identity) factors. Ford's \"Ready, Set, Ford\" campaign emphasizes emotional connection while maintaining rational value propositions.",
    },
    AppliedFramework {
        name: "Marketing Mix Evolution (4Ps → 7Ps)",
        source: "Services Marketing",
        application: "Extended traditional 4Ps with People (dealer training), Process (digital buying journey), and Physical Evidence (brand experience centers). Ford Pro exemplifies this with integrated service offerings beyond just vehicles.",
    },
];

const FINDINGS: &[Finding] = &[
    Finding {
        title: "Industry-Leading Truck Loyalty",
        description: "Ford dominates truck loyalty, outperforming the industry average by 12.4 percentage points.",
        metric: "65.1% vs 52.7% industry average",
    },
    Finding {
        title: "Marketing ROI Transformation",
        description: "Systematic improvement in marketing efficiency through digital transformation and better targeting.",
        metric: "0.32 → 2.11 ROI (559% improvement)",
    },
    Finding {
        title: "Best-in-Class Efficiency",
        description: "Ford spends less on marketing as a percentage of revenue than competitors while achieving strong results.",
        metric: "1.51% of revenue (vs GM 1.90%, Stellantis 2.10%)",
    },
    Finding {
        title: "\"Ready, Set, Ford\" Success",
        description: "September 2024 campaign launch drove significant improvements across all key metrics.",
        metric: "+35% lead generation, +37% digital engagement",
    },
];

/// The `/assignments/marketing` page.
#[component]
pub fn MarketingDashboardPage() -> impl IntoView {
    view! {
        <AssignmentPage
            title="Marketing Intelligence"
            number="03"
            subtitle="Marketing Evolution & STP Analysis"
            frameworks=FRAMEWORKS
            findings=FINDINGS
        >
            <section class="panel">
                <h3>"Marketing ROI Trend"</h3>
                <p class="panel__caption">"Return on marketing investment (2019-2024)"</p>
                <AreaChart
                    labels=ROI_YEARS.to_vec()
                    series=vec![
                        Series { label: "Marketing ROI", color: "#10B981", values: ROI_TREND.to_vec() },
                    ]
                />
            </section>

            <section class="panel">
                <h3>"Competitive Analysis"</h3>
                <p class="panel__caption">
                    "Ford vs competitors across key marketing metrics (normalized scale)"
                </p>
                <RadarChart
                    axes=COMPETITIVE_AXES.to_vec()
                    series=vec![
                        Series { label: "Ford", color: "#003478", values: COMPETITIVE_FORD.to_vec() },
                        Series { label: "GM", color: "#EF4444", values: COMPETITIVE_GM.to_vec() },
                        Series {
                            label: "Toyota",
                            color: "#10B981",
                            values: COMPETITIVE_TOYOTA.to_vec(),
                        },
                    ]
                />
            </section>

            <section class="panel">
                <h3>"\"Ready, Set, Ford\" Campaign Results"</h3>
                <p class="panel__caption">
                    "After-launch metrics against pre-campaign baseline (September 2024)"
                </p>
                <HBarChart
                    rows=vec![
                        BarRow { label: "Brand Awareness", value: 74.0, benchmark: 68.0 },
                        BarRow { label: "Consideration Rate", value: 48.0, benchmark: 42.0 },
                        BarRow { label: "Digital Engagement", value: 5.2, benchmark: 3.8 },
                        BarRow { label: "Lead Generation (K)", value: 168.0, benchmark: 124.0 },
                    ]
                    color="#7C3AED"
                />
                <p class="panel__footnote">
                    "Digital channels now represent 65% of marketing spend, with FordPass App (4.8x ROI) and Email (5.1x ROI) delivering highest returns"
                </p>
            </section>
        </AssignmentPage>
    }
}
