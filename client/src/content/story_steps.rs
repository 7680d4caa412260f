//! The eight-step transformation narrative (2020-2025).

/// One `{label, value, subtitle}` stat tuple shown under a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepStat {
    pub label: &'static str,
    pub value: &'static str,
    /// Optional qualifier line under the value.
    pub subtitle: Option<&'static str>,
}

/// One fixed slide in the guided narrative sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StoryStep {
    /// 1-based sequence position; contiguous across [`STORY_STEPS`].
    pub position: usize,
    pub year: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub narrative: &'static str,
    pub stats: &'static [StepStat],
    /// Framework-insight callout shown below the stats.
    pub framework_insight: &'static str,
    /// Header accent color.
    pub color: &'static str,
}

pub const STORY_STEPS: &[StoryStep] = &[
    StoryStep {
        position: 1,
        year: "2020",
        title: "The Challenge",
        subtitle: "Legacy automaker facing disruption",
        narrative: "When Jim Farley assumed the CEO role in October 2020, Ford Motor Company faced an existential challenge. A 117-year-old manufacturing giant had to transform for an uncertain future defined by electrification, software-driven experiences, and new competitors.",
        stats: &[
            StepStat { label: "Revenue", value: "$127.1B", subtitle: None },
            StepStat { label: "Net Income", value: "-$1.3B", subtitle: None },
            StepStat { label: "EBIT", value: "-$2.9B", subtitle: None },
        ],
        framework_insight: "Porter's Five Forces reveals unprecedented competitive pressure from traditional rivals, EV disruptors (Tesla), and emerging Chinese manufacturers.",
        color: "#EF4444",
    },
    StoryStep {
        position: 2,
        year: "2021",
        title: "New Leadership Vision",
        subtitle: "Ford+ Plan announcement",
        narrative: "May 2021: Ford+ vision announced. \"Help build a better world, where every person is free to move and pursue their dreams.\" This oblique objective, pursuing purpose rather than profits directly, set the stage for comprehensive transformation.",
        stats: &[
            StepStat { label: "Revenue", value: "$136.3B", subtitle: None },
            StepStat { label: "Investment", value: "$11B+", subtitle: Some("BlueOval SK") },
            StepStat { label: "Employees", value: "183K", subtitle: None },
        ],
        framework_insight: "Kay's Oblique Principle: companies like IKEA and Google achieve superior results by pursuing higher-level goals that may not directly target profitability.",
        color: "#F59E0B",
    },
    StoryStep {
        position: 3,
        year: "2022",
        title: "Restructuring",
        subtitle: "Creation of three business units",
        narrative: "March 2022: Ford restructures into Ford Blue (ICE vehicles), Ford Model e (EVs), and Ford Pro (commercial). This applies Skinner's focused factory concept at the business unit level; each unit optimizes for its specific market context.",
        stats: &[
            StepStat { label: "Ford Blue", value: "ICE", subtitle: Some("Cost leadership") },
            StepStat { label: "Model e", value: "EV", subtitle: Some("Market penetration") },
            StepStat { label: "Ford Pro", value: "Commercial", subtitle: Some("Differentiation") },
        ],
        framework_insight: "Skinner's Focused Factory (1974): rather than forcing a single model across diverse segments, create specialized units with distinct operational approaches.",
        color: "#003478",
    },
    StoryStep {
        position: 4,
        year: "2023",
        title: "Financial Recovery",
        subtitle: "Revenue growth and profitability",
        narrative: "Ford demonstrates remarkable financial recovery. Revenue grows to $176.2B, EBIT reaches $8.5B, and net income hits $4.3B. Ford Blue and Pro generate strong returns, while Model e represents strategic investment for the future.",
        stats: &[
            StepStat { label: "Revenue", value: "$176.2B", subtitle: Some("+$50B since 2020") },
            StepStat { label: "EBIT", value: "$8.5B", subtitle: None },
            StepStat { label: "Blue + Pro EBIT", value: "$14.9B", subtitle: None },
        ],
        framework_insight: "Time Value of Money (Luehrman): Model e losses represent option value, accepting negative NPV today for future positioning and flexibility.",
        color: "#10B981",
    },
    StoryStep {
        position: 5,
        year: "2024",
        title: "Marketing Evolution",
        subtitle: "From product-first to lifestyle segmentation",
        narrative: "September 2024: the \"Ready, Set, Ford\" campaign launches, organizing messaging around three lifestyle categories: Build, Thrill, and Adventure. This reflects the STP framework's insight that customers buy vehicles to enable lifestyles, not specifications.",
        stats: &[
            StepStat { label: "Brand Awareness", value: "+6%", subtitle: Some("68% to 74%") },
            StepStat { label: "Lead Generation", value: "+35%", subtitle: Some("124K to 168K") },
            StepStat { label: "Marketing ROI", value: "2.11", subtitle: Some("Up from 0.32") },
        ],
        framework_insight: "STP Framework (Dolan & John): segmentation, targeting, positioning. Different customer segments require different value propositions.",
        color: "#8B5CF6",
    },
    StoryStep {
        position: 6,
        year: "2024",
        title: "Operations Transformation",
        subtitle: "Focused factory concept in action",
        narrative: "Ford operates 375+ facilities across 24 countries. Each business unit has dedicated infrastructure: Blue focuses on efficient ICE manufacturing, Model e builds new EV capacity (BlueOval SK plants), and Pro integrates commercial facilities with software platforms.",
        stats: &[
            StepStat { label: "Facilities", value: "375+", subtitle: None },
            StepStat { label: "Countries", value: "24", subtitle: None },
            StepStat { label: "US Plants", value: "14", subtitle: None },
        ],
        framework_insight: "MIT Decision Category Framework: structural decisions (facilities, capacity) and infrastructure decisions (workforce, IT) embed competitive capability into physical systems.",
        color: "#0EA5E9",
    },
    StoryStep {
        position: 7,
        year: "2024",
        title: "The Tension",
        subtitle: "Model e losses vs strategic necessity",
        narrative: "Model e's -$5.1B EBIT (-131.8% margin) reveals the gap between strategic intent and market reality. EV demand grew slower than projected, creating execution challenges. Yet Ford maintains investment, believing EVs represent the future powertrain technology.",
        stats: &[
            StepStat { label: "Model e Revenue", value: "$3.9B", subtitle: None },
            StepStat { label: "Model e EBIT", value: "-$5.1B", subtitle: None },
            StepStat { label: "Framework Fit", value: "4/10", subtitle: None },
        ],
        framework_insight: "Strategy-execution misalignment: ambitious goals require market validation. Model e demonstrates that mission-driven culture alone cannot overcome competitive cost structures.",
        color: "#FF6B00",
    },
    StoryStep {
        position: 8,
        year: "2025",
        title: "Looking Forward",
        subtitle: "Strategic recalibration",
        narrative: "2025 brings strategic recalibration: a $1B cost savings target, leadership restructuring, and balance between autonomy and coordination. Ford Pro emerges as the exemplar with a 13.5% EBIT margin through integrated strategy across all dimensions.",
        stats: &[
            StepStat { label: "Ford Pro EBIT", value: "13.5%", subtitle: Some("Industry-leading") },
            StepStat { label: "Cost Target", value: "$1B", subtitle: Some("Savings") },
            StepStat { label: "Pro Fit Score", value: "10/10", subtitle: None },
        ],
        framework_insight: "Birkinshaw & Goddard: management model recalibration, shifting from pure emergence emphasis toward balanced strategic oversight while maintaining business unit autonomy.",
        color: "#00A550",
    },
];
