//! Minimal inline SVG charts: area, horizontal bars, radar.
//!
//! These widgets do nothing beyond mapping fixed numeric series onto SVG
//! coordinates; the pure helpers carry all the arithmetic and the tests.

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

use leptos::prelude::*;

/// One named, colored numeric series.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: &'static str,
    pub color: &'static str,
    pub values: Vec<f64>,
}

/// One row of a horizontal bar chart: measured value against a benchmark.
#[derive(Clone, Debug, PartialEq)]
pub struct BarRow {
    pub label: &'static str,
    pub value: f64,
    pub benchmark: f64,
}

/// Map `value` from `[min, max]` into `[out_min, out_max]`.
///
/// A degenerate domain collapses to `out_min` rather than dividing by zero.
#[must_use]
pub fn scale(value: f64, min: f64, max: f64, out_min: f64, out_max: f64) -> f64 {
    if (max - min).abs() < f64::EPSILON {
        return out_min;
    }
    out_min + (value - min) / (max - min) * (out_max - out_min)
}

/// SVG `points` attribute for a series drawn across `width` x `height`,
/// with larger values plotted higher (SVG y grows downward).
#[must_use]
pub fn polyline_points(values: &[f64], min: f64, max: f64, width: f64, height: f64) -> String {
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = i as f64 * step;
            let y = height - scale(v, min, max, 0.0, height);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Closed polygon points for the filled area under a series.
#[must_use]
pub fn area_points(values: &[f64], min: f64, max: f64, width: f64, height: f64) -> String {
    let line = polyline_points(values, min, max, width, height);
    format!("0.0,{height:.1} {line} {width:.1},{height:.1}")
}

/// Polygon points for a radar series: one spoke per value, starting at the
/// top and proceeding clockwise, scaled so `max_value` reaches `radius`.
#[must_use]
pub fn radar_polygon(values: &[f64], max_value: f64, cx: f64, cy: f64, radius: f64) -> String {
    let n = values.len();
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let angle = std::f64::consts::TAU * i as f64 / n as f64 - std::f64::consts::FRAC_PI_2;
            let r = scale(v.clamp(0.0, max_value), 0.0, max_value, 0.0, radius);
            let x = cx + r * angle.cos();
            let y = cy + r * angle.sin();
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Percentage width for a bar of `value` on a `[0, max]` axis, clamped.
#[must_use]
pub fn bar_width_pct(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

/// Filled area chart over shared x labels.
#[component]
pub fn AreaChart(labels: Vec<&'static str>, series: Vec<Series>) -> impl IntoView {
    const W: f64 = 600.0;
    const H: f64 = 220.0;

    let all: Vec<f64> = series.iter().flat_map(|s| s.values.iter().copied()).collect();
    let min = all.iter().copied().fold(f64::INFINITY, f64::min).min(0.0);
    let max = all.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    view! {
        <div class="chart chart--area">
            <svg viewBox=format!("0 0 {W} {H}") preserveAspectRatio="none">
                {series
                    .iter()
                    .map(|s| {
                        view! {
                            <g>
                                <polygon
                                    points=area_points(&s.values, min, max, W, H)
                                    fill=s.color
                                    fill-opacity="0.15"
                                />
                                <polyline
                                    points=polyline_points(&s.values, min, max, W, H)
                                    fill="none"
                                    stroke=s.color
                                    stroke-width="2"
                                />
                            </g>
                        }
                    })
                    .collect::<Vec<_>>()}
            </svg>
            <div class="chart__x-labels">
                {labels.into_iter().map(|l| view! { <span>{l}</span> }).collect::<Vec<_>>()}
            </div>
            <ChartLegend series=series />
        </div>
    }
}

/// Horizontal bars comparing each row's value against its benchmark.
#[component]
pub fn HBarChart(rows: Vec<BarRow>, color: &'static str) -> impl IntoView {
    let max = rows
        .iter()
        .flat_map(|r| [r.value, r.benchmark])
        .fold(0.0_f64, f64::max)
        .max(1.0);

    view! {
        <div class="chart chart--bars">
            {rows
                .into_iter()
                .map(|row| {
                    view! {
                        <div class="chart__bar-row">
                            <span class="chart__bar-label">{row.label}</span>
                            <div class="chart__bar-track">
                                <div
                                    class="chart__bar chart__bar--benchmark"
                                    style=format!("width: {:.1}%", bar_width_pct(row.benchmark, max))
                                ></div>
                                <div
                                    class="chart__bar"
                                    style=format!(
                                        "width: {:.1}%; background: {color}",
                                        bar_width_pct(row.value, max),
                                    )
                                ></div>
                            </div>
                            <span class="chart__bar-value">{format!("{:.1}", row.value)}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Radar comparison over shared axes, domain `[0, 100]`.
#[component]
pub fn RadarChart(axes: Vec<&'static str>, series: Vec<Series>) -> impl IntoView {
    const SIZE: f64 = 260.0;
    const CENTER: f64 = SIZE / 2.0;
    const RADIUS: f64 = 100.0;

    let axis_count = axes.len().max(1);
    let grid: Vec<f64> = vec![25.0, 50.0, 75.0, 100.0];

    view! {
        <div class="chart chart--radar">
            <svg viewBox=format!("0 0 {SIZE} {SIZE}")>
                {grid
                    .into_iter()
                    .map(|level| {
                        let ring = vec![level; axis_count];
                        view! {
                            <polygon
                                points=radar_polygon(&ring, 100.0, CENTER, CENTER, RADIUS)
                                fill="none"
                                stroke="currentColor"
                                stroke-opacity="0.15"
                            />
                        }
                    })
                    .collect::<Vec<_>>()}
                {series
                    .iter()
                    .map(|s| {
                        view! {
                            <polygon
                                points=radar_polygon(&s.values, 100.0, CENTER, CENTER, RADIUS)
                                fill=s.color
                                fill-opacity="0.25"
                                stroke=s.color
                                stroke-width="1.5"
                            />
                        }
                    })
                    .collect::<Vec<_>>()}
            </svg>
            <div class="chart__axis-labels">
                {axes.into_iter().map(|a| view! { <span>{a}</span> }).collect::<Vec<_>>()}
            </div>
            <ChartLegend series=series />
        </div>
    }
}

/// Color swatch legend shared by the chart widgets.
#[component]
fn ChartLegend(series: Vec<Series>) -> impl IntoView {
    view! {
        <div class="chart__legend">
            {series
                .into_iter()
                .map(|s| {
                    view! {
                        <span class="chart__legend-item">
                            <span
                                class="chart__legend-swatch"
                                style=format!("background: {}", s.color)
                            ></span>
                            {s.label}
                        </span>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
