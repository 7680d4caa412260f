//! Card widgets: KPI headlines, unit metrics, and step stat tiles.

#[cfg(test)]
#[path = "cards_test.rs"]
mod cards_test;

use leptos::prelude::*;

/// Headline KPI card for the executive summary.
#[component]
pub fn KpiCard(
    title: &'static str,
    value: &'static str,
    change: &'static str,
    /// `true` renders the change as an upward (green) trend.
    trend_up: bool,
) -> impl IntoView {
    let trend_class = if trend_up {
        "kpi-card__change kpi-card__change--up"
    } else {
        "kpi-card__change kpi-card__change--down"
    };
    let arrow = if trend_up { "▲" } else { "▼" };

    view! {
        <div class="kpi-card">
            <p class="kpi-card__title">{title}</p>
            <p class="kpi-card__value">{value}</p>
            <p class=trend_class>{arrow} " " {change}</p>
        </div>
    }
}

/// Compact metric card for the business-unit header row.
#[component]
pub fn MetricCard(
    title: &'static str,
    value: String,
    /// Accent color hex for the icon well.
    color: &'static str,
) -> impl IntoView {
    let negative = value.contains('-');
    let value_class = if negative {
        "metric-card__value metric-card__value--negative"
    } else {
        "metric-card__value"
    };

    view! {
        <div class="metric-card">
            <p class="metric-card__title">{title}</p>
            <p class=value_class style=format!("border-left: 3px solid {color}")>{value}</p>
        </div>
    }
}

/// Stat tile inside a story step: label, value, optional subtitle.
#[component]
pub fn StatCard(
    label: &'static str,
    value: &'static str,
    subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class="stat-card__label">{label}</p>
            <p class="stat-card__value">{value}</p>
            {subtitle.map(|text| view! { <p class="stat-card__subtitle">{text}</p> })}
        </div>
    }
}

/// CSS badge class for a framework-fit-score label such as `"9/10 - ..."`.
///
/// Scores of 9 or 10 read as strong (green), 4 or below as weak (red),
/// anything else as middling (yellow).
#[must_use]
pub fn fit_score_class(score_label: &str) -> &'static str {
    let leading: String = score_label.chars().take_while(|c| c.is_ascii_digit()).collect();
    match leading.parse::<u32>() {
        Ok(n) if n >= 9 => "badge badge--strong",
        Ok(n) if n <= 4 => "badge badge--weak",
        Ok(_) => "badge badge--middling",
        Err(_) => "badge",
    }
}
