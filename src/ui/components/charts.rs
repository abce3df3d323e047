// src/ui/components/charts.rs - Chart stand-ins consuming named numeric series

//! Chart rendering itself is a black box to this application: every chart
//! here consumes an array of named numeric series and draws a simple
//! CSS-scaled representation. Swapping in a real chart library changes
//! nothing upstream.

use dioxus::prelude::*;

const COLORS: [&str; 8] = [
    "#22c55e", "#0ea5e9", "#f59e0b", "#ef4444", "#8b5cf6", "#14b8a6", "#a3e635", "#fb7185",
];

/// Horizontal bar chart over (name, value) pairs, scaled to the maximum.
#[component]
pub fn BarSeries(title: &'static str, data: Vec<(String, f64)>) -> Element {
    let max = data.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);

    rsx! {
        div {
            class: "p-5 shadow-md rounded-2xl bg-white/95",
            h3 { class: "mb-3 font-semibold", "{title}" }
            if data.is_empty() {
                div { class: "py-8 text-center text-sm text-gray-400", "Belum ada data." }
            }
            div {
                class: "space-y-2",
                for (i, (name, value)) in data.into_iter().enumerate() {
                    div {
                        class: "flex items-center gap-2 text-sm",
                        span { class: "w-36 truncate text-gray-600", title: "{name}", "{name}" }
                        div {
                            class: "h-4 flex-1 rounded bg-gray-100",
                            div {
                                class: "h-4 rounded",
                                style: format!(
                                    "width: {}%; background-color: {}",
                                    if max > 0.0 { value / max * 100.0 } else { 0.0 },
                                    COLORS[i % COLORS.len()],
                                ),
                            }
                        }
                        span { class: "w-10 text-right text-gray-700", "{value}" }
                    }
                }
            }
        }
    }
}

/// Donut/pie stand-in: a legend list with proportional shares.
#[component]
pub fn DonutSeries(title: &'static str, data: Vec<(String, f64)>) -> Element {
    let total: f64 = data.iter().map(|(_, v)| *v).sum();

    rsx! {
        div {
            class: "p-5 shadow-md rounded-2xl bg-white/95",
            h3 { class: "mb-3 font-semibold", "{title}" }
            if data.is_empty() {
                div { class: "py-8 text-center text-sm text-gray-400", "Belum ada data." }
            }
            ul {
                class: "space-y-2",
                for (i, (name, value)) in data.into_iter().enumerate() {
                    li {
                        class: "flex items-center gap-2 text-sm",
                        span {
                            class: "inline-block h-3 w-3 rounded-full",
                            style: format!("background-color: {}", COLORS[i % COLORS.len()]),
                        }
                        span { class: "flex-1 text-gray-600", "{name}" }
                        span {
                            class: "text-gray-700",
                            {
                                if total > 0.0 {
                                    format!("{} ({:.0}%)", value, value / total * 100.0)
                                } else {
                                    format!("{}", value)
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One x-axis point with a value per named series.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeriesPoint {
    pub name: String,
    pub values: Vec<f64>,
}

/// Line chart stand-in: series legend plus a per-point value table.
#[component]
pub fn LineSeries(
    title: &'static str,
    series_names: Vec<String>,
    points: Vec<LineSeriesPoint>,
) -> Element {
    rsx! {
        div {
            class: "rounded-2xl bg-white/95 p-4 lg:p-6 shadow-md",
            div { class: "font-semibold mb-2", "{title}" }
            if points.is_empty() {
                div { class: "h-64 flex items-center justify-center text-sm text-gray-400", "Belum ada data." }
            } else {
                div {
                    class: "mb-2 flex flex-wrap gap-3 text-xs",
                    for (i, name) in series_names.iter().enumerate() {
                        span {
                            class: "flex items-center gap-1 text-gray-600",
                            span {
                                class: "inline-block h-2 w-2 rounded-full",
                                style: format!("background-color: {}", COLORS[i % COLORS.len()]),
                            }
                            "{name}"
                        }
                    }
                }
                div {
                    class: "overflow-x-auto",
                    table {
                        class: "w-full text-sm",
                        thead {
                            tr {
                                class: "text-left text-gray-500",
                                th { class: "px-2 py-1", "" }
                                for point in &points {
                                    th { class: "px-2 py-1 font-normal", "{point.name}" }
                                }
                            }
                        }
                        tbody {
                            for (i, name) in series_names.iter().enumerate() {
                                tr {
                                    class: "border-t border-gray-100",
                                    td { class: "px-2 py-1 text-gray-600", "{name}" }
                                    for point in &points {
                                        td {
                                            class: "px-2 py-1 text-gray-800",
                                            {point.values.get(i).map(|v| format!("{:.2}", v)).unwrap_or_default()}
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
