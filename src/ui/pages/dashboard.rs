// src/ui/pages/dashboard.rs - Overview for the active brand

use dioxus::prelude::*;

use crate::api::models::DashboardSummary;
use crate::fetch::{FetchController, FetchOutcome};
use crate::ui::components::{DonutSeries, ErrorBanner, LineSeries, LineSeriesPoint};
use crate::ui::pages::PageWrapper;
use crate::ui::state::{use_services, use_session};

#[component]
pub fn Dashboard() -> Element {
    let services = use_services();
    let session = use_session();

    let mut summary = use_signal(DashboardSummary::default);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let controller = use_hook(FetchController::new);

    let scope = use_memo(move || {
        let state = session.read();
        state
            .token()
            .map(str::to_string)
            .zip(state.active_brand().map(|b| b.id))
    });

    let fetch_ctl = controller.clone();
    let fetch_services = services.clone();
    use_effect(move || {
        let Some((token, brand_id)) = scope() else {
            return;
        };
        let ticket = fetch_ctl.begin();
        loading.set(true);
        error.set(None);
        let api = fetch_services.api.clone();
        spawn(async move {
            match ticket.run(api.dashboard_summary(&token, brand_id)).await {
                FetchOutcome::Applied(Ok(data)) => {
                    summary.set(data);
                    loading.set(false);
                }
                FetchOutcome::Applied(Err(e)) => {
                    if let Some(message) = e.user_message() {
                        error.set(Some(message));
                    }
                    loading.set(false);
                }
                FetchOutcome::Superseded => {}
            }
        });
    });

    let drop_ctl = controller.clone();
    use_drop(move || drop_ctl.cancel());

    let data = summary();
    let rating_points: Vec<LineSeriesPoint> = data
        .rating_history
        .iter()
        .map(|p| LineSeriesPoint {
            name: p.name.clone(),
            values: vec![p.gofood, p.grab, p.shopee],
        })
        .collect();
    let status_series: Vec<(String, f64)> = data
        .outlet_status
        .iter()
        .map(|s| (s.name.clone(), s.value))
        .collect();

    rsx! {
        PageWrapper {
            title: "Dashboard".to_string(),
            subtitle: Some("Laporan terkini untuk brand aktif.".to_string()),

            if let Some(error) = error() {
                ErrorBanner { message: error }
            }

            // Per-channel summary cards
            section {
                class: "p-4 shadow-md rounded-2xl bg-white/95 lg:p-6",
                h2 { class: "mb-4 text-lg font-semibold", "Laporan Terkini" }
                if loading() {
                    div { class: "text-sm text-gray-600", "Memuat data…" }
                } else if data.channels.is_empty() {
                    div { class: "text-sm text-gray-500", "Belum ada laporan channel." }
                } else {
                    div {
                        class: "grid grid-cols-1 gap-4 md:grid-cols-2 xl:grid-cols-3",
                        for channel in data.channels.clone() {
                            div {
                                class: "p-4 bg-white border border-gray-100 shadow-sm rounded-xl",
                                div {
                                    class: "flex items-center gap-3",
                                    div { class: "text-2xl", "{channel.icon}" }
                                    div {
                                        div { class: "font-semibold", "{channel.name}" }
                                        div { class: "text-xs text-gray-500", "{channel.total} Total Outlet" }
                                    }
                                }
                                div {
                                    class: "grid grid-cols-2 gap-2 mt-3 text-xs",
                                    div { class: "text-green-600", "{channel.open} Outlet Buka" }
                                    div { class: "text-right text-emerald-700", "{channel.item_active} Item Aktif" }
                                    div { class: "text-red-500", "{channel.close} Outlet Tutup" }
                                    div { class: "text-right text-rose-600", "{channel.item_inactive} Item Tidak Aktif" }
                                }
                            }
                        }
                    }
                }
            }

            // Charts
            div {
                class: "grid grid-cols-1 lg:grid-cols-3 gap-6",
                div {
                    class: "lg:col-span-2",
                    LineSeries {
                        title: "Perkembangan Rating",
                        series_names: vec!["GoFood".to_string(), "GrabFood".to_string(), "ShopeeFood".to_string()],
                        points: rating_points,
                    }
                }
                DonutSeries { title: "Laporan Outlet Opening", data: status_series }
            }

            // Outlet lists
            div {
                class: "rounded-2xl bg-white/95 p-6 shadow-md",
                h2 { class: "text-lg font-semibold mb-4", "Daftar Outlet" }
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    div {
                        h3 { class: "font-semibold text-green-600", "Outlet Buka" }
                        ul {
                            class: "mt-2 text-sm list-disc list-inside",
                            for outlet in data.open_outlets.clone() {
                                li { key: "{outlet.id}", "{outlet.name}" }
                            }
                            if loading() {
                                li { class: "text-gray-400", "Memuat…" }
                            }
                        }
                    }
                    div {
                        h3 { class: "font-semibold text-red-600", "Outlet Tutup" }
                        ul {
                            class: "mt-2 text-sm list-disc list-inside",
                            for outlet in data.closed_outlets.clone() {
                                li { key: "{outlet.id}", "{outlet.name}" }
                            }
                            if loading() {
                                li { class: "text-gray-400", "Memuat…" }
                            }
                        }
                    }
                }
            }
        }
    }
}
