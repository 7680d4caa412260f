//! Assignment 02: ten-year financial analysis from the 10-K filings.

use leptos::prelude::*;

use super::{AppliedFramework, AssignmentPage, Finding};
use crate::components::charts::{AreaChart, BarRow, HBarChart, Series};

const YEARS: [&str; 10] =
    ["2015", "2016", "2017", "2018", "2019", "2020", "2021", "2022", "2023", "2024"];
const REVENUE: [f64; 10] =
    [149.6, 151.8, 156.8, 160.3, 155.9, 127.1, 136.3, 158.1, 176.2, 185.0];
const FREE_CASH_FLOW: [f64; 10] = [9.0, 12.9, 11.0, 7.2, 10.0, 18.5, 9.6, 0.0, 6.7, 6.7];

const NPV_RATES: [&str; 5] = ["5%", "8%", "10%", "12%", "15%"];
const NPV_INVESTMENT_A: [f64; 5] = [623.1, 490.9, 425.7, 373.5, 313.0];
const NPV_INVESTMENT_B: [f64; 5] = [354.5, 301.4, 272.5, 247.8, 216.8];

const FRAMEWORKS: &[AppliedFramework] = &[
    AppliedFramework {
        name: "Time Value of Money (TVM)",
        source: "Luehrman, HBR 2024",
        application: "Applied to evaluate Ford's investment alternatives, demonstrating that $1 today is worth more than $1 in the future. Investment A ($50M/yr for 20 years) consistently outperforms Investment B across all discount rates.",
    },
    AppliedFramework {
        name: "Net Present Value (NPV) Analysis",
        source: "Financial Statement Analysis",
        application: "Used to compare investment alternatives at different discount rates (5-15%). Investment A shows NPV advantage of $96M-$269M over Investment B, supporting the recommendation for longer-term strategic investments.",
    },
    AppliedFramework {
        name: "Financial Statement Analysis",
        source: "GAAP Accounting Principles",
        application: "Distinguished between accrual-based earnings and cash flows to reveal Ford's underlying operational strength. Despite periodic accounting losses, the company generated $91.7B in cumulative Free Cash Flow over the decade.",
    },
];

const FINDINGS: &[Finding] = &[
    Finding {
        title: "3-Phase Transformation",
        description: "Ford's decade reveals three distinct phases: Decline (2015-2018), Strategic Pivot (2018-2020), and Transformation Payoff (2021-2024).",
        metric: "2018: Critical restructuring into Blue/Model e/Pro",
    },
    Finding {
        title: "Revenue Recovery",
        description: "From pandemic low to record high, demonstrating resilience and successful strategic execution.",
        metric: "$127B → $185B (+45.6%)",
    },
    Finding {
        title: "Cash Generation Power",
        description: "Positive Free Cash Flow in 9 of 10 years despite profitability challenges, enabling internal funding of EV transformation.",
        metric: "$91.7B cumulative FCF",
    },
    Finding {
        title: "Margin Challenge",
        description: "Operating margins remain thin (avg 2.4%), leaving little room for error and driving focus on higher-margin trucks/SUVs.",
        metric: "2.8% operating margin (2024)",
    },
];

/// The `/assignments/finance` page.
#[component]
pub fn FinanceDashboardPage() -> impl IntoView {
    view! {
        <AssignmentPage
            title="Finance & Accounting"
            number="02"
            subtitle="10-Year Financial Analysis (2015-2024)"
            frameworks=FRAMEWORKS
            findings=FINDINGS
        >
            <section class="panel">
                <h3>"Revenue & Free Cash Flow"</h3>
                <p class="panel__caption">"Revenue and Free Cash Flow ($B), 2015-2024"</p>
                <AreaChart
                    labels=YEARS.to_vec()
                    series=vec![
                        Series { label: "Revenue ($B)", color: "#003478", values: REVENUE.to_vec() },
                        Series {
                            label: "Free CF ($B)",
                            color: "#00A550",
                            values: FREE_CASH_FLOW.to_vec(),
                        },
                    ]
                />
            </section>

            <section class="panel">
                <h3>"Investment NPV Analysis"</h3>
                <p class="panel__caption">
                    "Comparing Investment A ($50M/yr × 20 yrs) vs Investment B ($40M/yr × 12 yrs) across discount rates ($M)"
                </p>
                <AreaChart
                    labels=NPV_RATES.to_vec()
                    series=vec![
                        Series {
                            label: "Investment A NPV ($M)",
                            color: "#003478",
                            values: NPV_INVESTMENT_A.to_vec(),
                        },
                        Series {
                            label: "Investment B NPV ($M)",
                            color: "#FF6B00",
                            values: NPV_INVESTMENT_B.to_vec(),
                        },
                    ]
                />
                <p class="panel__footnote">
                    "Investment A consistently delivers higher NPV ($96M-$269M advantage), supporting longer-term strategic investments aligned with Ford's EV transformation"
                </p>
            </section>

            <section class="panel">
                <h3>"2024 Cash Flow vs 10-Year Average"</h3>
                <p class="panel__caption">"Operating CF, CapEx, and Free CF ($B, absolute)"</p>
                <HBarChart
                    rows=vec![
                        BarRow { label: "Operating CF", value: 15.4, benchmark: 16.4 },
                        BarRow { label: "CapEx", value: 8.7, benchmark: 7.2 },
                        BarRow { label: "Free CF", value: 6.7, benchmark: 9.2 },
                    ]
                    color="#059669"
                />
            </section>
        </AssignmentPage>
    }
}
