// src/ui/pages/items.rs - Items view: synced products for the active brand

use dioxus::prelude::*;

use crate::api::models::ProductRow;
use crate::export::{self, CsvColumn};
use crate::fetch::{FetchController, FetchOutcome};
use crate::table::{
    aggregate, apply_filters, sort_rows, Direction, RowFilters, SortState, SortValue,
    StatusFilter, TableRow,
};
use crate::ui::components::{BarSeries, DonutSeries, ErrorBanner, KpiCard, KpiTone};
use crate::ui::pages::{LoadingRow, PageWrapper};
use crate::ui::state::{use_services, use_session};
use crate::utils::time::{format_timestamp_csv, format_timestamp_display, parse_timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ItemSortKey {
    Name,
    Channel,
    Outlet,
    Price,
    Status,
    UpdatedAt,
}

fn product_sort_value(row: &ProductRow, key: ItemSortKey) -> SortValue<'_> {
    match key {
        ItemSortKey::Name => SortValue::text(&row.name),
        ItemSortKey::Channel => SortValue::text(row.channel_name().unwrap_or("")),
        ItemSortKey::Outlet => SortValue::text(row.outlet_name().unwrap_or("")),
        ItemSortKey::Price => {
            SortValue::Number(row.price.as_ref().map(|p| p.numeric()).unwrap_or(0.0))
        }
        ItemSortKey::Status => SortValue::Number(row.status as f64),
        ItemSortKey::UpdatedAt => SortValue::Number(
            row.updated_at
                .as_deref()
                .and_then(parse_timestamp)
                .map(|dt| dt.timestamp_millis() as f64)
                .unwrap_or(0.0),
        ),
    }
}

fn price_label(row: &ProductRow) -> String {
    match &row.price {
        Some(price) => price.display_idr(),
        None => "—".to_string(),
    }
}

#[component]
pub fn Items() -> Element {
    let services = use_services();
    let session = use_session();

    // client-side filters
    let mut q = use_signal(String::new);
    let mut status = use_signal(StatusFilter::default);
    // default ordering: newest sync first; this table never cycles back to
    // an unsorted state
    let mut sort = use_signal(|| SortState::new(ItemSortKey::UpdatedAt, Direction::Descending));

    let mut rows = use_signal(Vec::<ProductRow>::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let controller = use_hook(FetchController::new);

    // the fetch scope is the active brand; filters here are client-side
    // only and never trigger a refetch
    let scope = use_memo(move || {
        let state = session.read();
        state
            .token()
            .map(str::to_string)
            .zip(state.active_brand().map(|b| b.id))
    });

    let fetch_controller = controller.clone();
    let fetch_services = services.clone();
    use_effect(move || {
        let Some((token, brand_id)) = scope() else {
            return;
        };
        let ticket = fetch_controller.begin();
        loading.set(true);
        error.set(None);
        let api = fetch_services.api.clone();
        spawn(async move {
            match ticket.run(api.products(&token, brand_id)).await {
                FetchOutcome::Applied(Ok(data)) => {
                    rows.set(data);
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

    let drop_controller = controller.clone();
    use_drop(move || drop_controller.cancel());

    // derived pipeline: filter, then sort, then aggregate the filtered set
    let filtered = use_memo(move || {
        let filters = RowFilters {
            query: q(),
            ..Default::default()
        };
        let status = status();
        apply_filters(&rows.read(), &filters, move |r: &ProductRow| {
            status.matches(r.is_active())
        })
    });
    let sorted = use_memo(move || sort_rows(filtered(), sort(), product_sort_value));
    let kpis = use_memo(move || aggregate(&filtered.read()));

    let delimiter = services.config.csv_delimiter;
    let export_csv = move |_| {
        let columns: Vec<CsvColumn<ProductRow>> = vec![
            CsvColumn::new("ID", |r: &ProductRow, _| r.id.into()),
            CsvColumn::new("Nama Item", |r: &ProductRow, _| r.name.clone().into()),
            CsvColumn::new("Channel", |r: &ProductRow, _| {
                r.channel_name().unwrap_or("").into()
            }),
            CsvColumn::new("Outlet", |r: &ProductRow, _| {
                r.outlet_name().unwrap_or("").into()
            }),
            CsvColumn::new("Harga (IDR)", |r: &ProductRow, _| {
                r.price.as_ref().and_then(|p| p.csv_value()).into()
            }),
            CsvColumn::new("Status", |r: &ProductRow, _| {
                (if r.is_active() { "Aktif" } else { "Tidak Aktif" }).into()
            }),
            CsvColumn::new("Terakhir Sinkron (WIB)", |r: &ProductRow, _| {
                format_timestamp_csv(r.updated_at.as_deref()).into()
            }),
        ];
        let visible = sorted.peek().clone();
        let filename = export::timestamped_filename("items");
        if let Err(e) = export::export_csv(&visible, &columns, &filename, delimiter) {
            tracing::warn!(error = %e, "CSV export failed");
        }
    };

    let toggle_sort = use_callback(move |key: ItemSortKey| {
        sort.with_mut(|s| s.toggle_alternating(key));
    });

    let kpi = kpis();
    let channel_series: Vec<(String, f64)> = kpi
        .channel_distribution
        .iter()
        .map(|g| (g.name.clone(), g.count as f64))
        .collect();
    let outlet_series: Vec<(String, f64)> = kpi
        .top_outlets
        .iter()
        .map(|g| (g.name.clone(), g.count as f64))
        .collect();

    let actions = rsx! {
        input {
            value: "{q}",
            oninput: move |e| q.set(e.value()),
            placeholder: "Cari nama item / outlet / channel…",
            class: "w-72 rounded-xl border border-gray-200 bg-white px-3 py-2 text-sm outline-none focus:ring-2 focus:ring-green-500",
        }
        button {
            onclick: move |_| status.set(status().cycled()),
            class: "rounded-xl border border-gray-200 bg-white px-3 py-2 text-sm",
            title: "Filter status",
            {format!("{} ▾", status().label())}
        }
        button {
            onclick: export_csv,
            class: "rounded-xl border border-gray-200 bg-white px-3 py-2 text-sm hover:bg-gray-50",
            title: "Ekspor data yang sedang tampil",
            "⤓ Export CSV"
        }
    };

    rsx! {
        PageWrapper {
            title: "Items".to_string(),
            subtitle: Some("Data diambil dari database (hasil sinkron dari channel).".to_string()),
            actions: Some(actions),

            // KPI cards
            section {
                class: "grid grid-cols-1 gap-4 md:grid-cols-3",
                KpiCard { label: "Total Item", value: kpi.total.to_string() }
                KpiCard { label: "Aktif", value: kpi.active.to_string(), tone: KpiTone::Green }
                KpiCard { label: "Tidak Aktif", value: kpi.inactive.to_string(), tone: KpiTone::Gray }
            }

            // Charts
            section {
                class: "grid grid-cols-1 gap-6 xl:grid-cols-3",
                DonutSeries { title: "Distribusi Channel", data: channel_series }
                div {
                    class: "xl:col-span-2",
                    BarSeries { title: "Top Outlet berdasarkan jumlah item", data: outlet_series }
                }
            }

            // Table
            section {
                class: "p-4 shadow-md rounded-2xl bg-white/95 md:p-6",
                if let Some(error) = error() {
                    ErrorBanner { message: error }
                }

                div {
                    class: "overflow-x-auto",
                    table {
                        class: "w-full text-sm",
                        thead {
                            class: "sticky top-0 bg-white border-b",
                            tr {
                                class: "text-left text-gray-600",
                                SortHeader { label: "Item", sort_key: ItemSortKey::Name, sort: sort(), on_sort: toggle_sort }
                                SortHeader { label: "Channel", sort_key: ItemSortKey::Channel, sort: sort(), on_sort: toggle_sort }
                                SortHeader { label: "Outlet", sort_key: ItemSortKey::Outlet, sort: sort(), on_sort: toggle_sort }
                                SortHeader { label: "Harga", sort_key: ItemSortKey::Price, sort: sort(), on_sort: toggle_sort }
                                SortHeader { label: "Status", sort_key: ItemSortKey::Status, sort: sort(), on_sort: toggle_sort }
                                SortHeader { label: "Terakhir Sinkron", sort_key: ItemSortKey::UpdatedAt, sort: sort(), on_sort: toggle_sort }
                            }
                        }
                        tbody {
                            if loading() {
                                tr {
                                    td {
                                        colspan: "6",
                                        LoadingRow {}
                                    }
                                }
                            }

                            if !loading() && sorted.read().is_empty() {
                                tr {
                                    td {
                                        colspan: "6",
                                        class: "px-3 py-12 text-center text-gray-500",
                                        "Tidak ada item."
                                    }
                                }
                            }

                            for item in sorted() {
                                tr {
                                    key: "{item.id}",
                                    class: "border-t border-gray-100 hover:bg-gray-50/60",
                                    td { class: "px-3 py-2 font-medium text-gray-900", "{item.name}" }
                                    td { class: "px-3 py-2", {item.channel_name().unwrap_or("—").to_string()} }
                                    td { class: "px-3 py-2", {item.outlet_name().unwrap_or("—").to_string()} }
                                    td { class: "px-3 py-2", {price_label(&item)} }
                                    td {
                                        class: "px-3 py-2",
                                        if item.is_active() {
                                            span {
                                                class: "inline-flex items-center rounded-full bg-green-100 px-2 py-0.5 text-[11px] font-semibold text-green-700",
                                                "Aktif"
                                            }
                                        } else {
                                            span {
                                                class: "inline-flex items-center rounded-full bg-gray-100 px-2 py-0.5 text-[11px] font-semibold text-gray-600",
                                                "Tidak Aktif"
                                            }
                                        }
                                    }
                                    td {
                                        class: "px-3 py-2 text-gray-500",
                                        {format_timestamp_display(item.updated_at.as_deref())}
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

#[component]
fn SortHeader(
    label: &'static str,
    sort_key: ItemSortKey,
    sort: SortState<ItemSortKey>,
    on_sort: Callback<ItemSortKey>,
) -> Element {
    let active = sort.key == sort_key;
    let arrow = if active {
        match sort.direction {
            Direction::Ascending => "↑",
            Direction::Descending => "↓",
            Direction::None => "",
        }
    } else {
        ""
    };
    let class = if active { "text-gray-900" } else { "text-gray-600" };

    rsx! {
        th {
            class: "px-3 py-2 font-semibold select-none",
            button {
                onclick: move |_| on_sort.call(sort_key),
                class: "inline-flex items-center gap-1 hover:opacity-80 {class}",
                title: "Urutkan",
                "{label} ⇅ {arrow}"
            }
        }
    }
}
