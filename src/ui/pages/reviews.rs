// src/ui/pages/reviews.rs - Reviews view: customer ratings per channel and outlet

use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::api::models::{ChannelRef, OutletRef, ReviewRow};
use crate::api::ReviewQuery;
use crate::fetch::{FetchController, FetchOutcome};
use crate::table::{
    apply_filters, sort_rows, DateRange, Direction, RowFilters, Selection, SortState, SortValue,
    TableRow,
};
use crate::ui::components::ErrorBanner;
use crate::ui::pages::{LoadingRow, PageWrapper};
use crate::ui::state::{use_services, use_session};
use crate::utils::time::parse_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReviewSortKey {
    CreatedAt,
    OutletName,
    ChannelName,
    Rating,
    Message,
    OrderedProduct,
    CustomerName,
}

fn review_sort_value(row: &ReviewRow, key: ReviewSortKey) -> SortValue<'_> {
    match key {
        ReviewSortKey::CreatedAt => SortValue::Number(
            row.created_at
                .as_deref()
                .and_then(parse_timestamp)
                .map(|dt| dt.timestamp_millis() as f64)
                .unwrap_or(0.0),
        ),
        ReviewSortKey::OutletName => SortValue::text(row.outlet_name().unwrap_or("")),
        ReviewSortKey::ChannelName => SortValue::text(row.channel_name().unwrap_or("")),
        ReviewSortKey::Rating => SortValue::Number(row.rating as f64),
        ReviewSortKey::Message => SortValue::text(&row.message),
        ReviewSortKey::OrderedProduct => {
            SortValue::text(row.ordered_product.as_deref().unwrap_or(""))
        }
        ReviewSortKey::CustomerName => SortValue::text(row.customer_name.as_deref().unwrap_or("")),
    }
}

/// The review filter set. Every change refetches with narrowed server-side
/// parameters, and the same constraints are re-applied client-side.
#[derive(Debug, Clone, PartialEq, Default)]
struct ReviewFilters {
    channel: Selection,
    outlet: Selection,
    rating: Selection,
    q: String,
    date_from: String,
    date_to: String,
}

impl ReviewFilters {
    fn date_from(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date_from, "%Y-%m-%d").ok()
    }

    fn date_to(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date_to, "%Y-%m-%d").ok()
    }
}

fn parse_selection(value: &str) -> Selection {
    match value.parse::<i64>() {
        Ok(id) => Selection::Id(id),
        Err(_) => Selection::All,
    }
}

fn rating_badge_class(rating: i64) -> &'static str {
    if rating >= 5 {
        "bg-green-100 text-green-700"
    } else if rating == 4 {
        "bg-lime-100 text-lime-700"
    } else if rating == 3 {
        "bg-yellow-100 text-yellow-700"
    } else {
        "bg-red-100 text-red-700"
    }
}

fn display_date(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map(|dt| {
            dt.with_timezone(&chrono_tz::Asia::Jakarta)
                .format("%d/%m/%Y")
                .to_string()
        })
        .unwrap_or_else(|| "—".to_string())
}

#[component]
pub fn Reviews() -> Element {
    let services = use_services();
    let session = use_session();

    let mut filters = use_signal(ReviewFilters::default);
    // this table's cycle returns to the unsorted fetch order
    let mut sort = use_signal(|| SortState::new(ReviewSortKey::CreatedAt, Direction::None));

    let mut rows = use_signal(Vec::<ReviewRow>::new);
    let mut outlets = use_signal(Vec::<OutletRef>::new);
    let mut channels = use_signal(Vec::<ChannelRef>::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let controller = use_hook(FetchController::new);
    let outlet_controller = use_hook(FetchController::new);

    let brand_scope = use_memo(move || {
        let state = session.read();
        state
            .token()
            .map(str::to_string)
            .zip(state.active_brand().map(|b| b.id))
    });

    // channel list, once
    let channel_services = services.clone();
    use_future(move || {
        let services = channel_services.clone();
        async move {
            let Some(token) = session.peek().token().map(String::from) else {
                return;
            };
            match services.api.channels(&token).await {
                Ok(list) => channels.set(list),
                Err(e) => {
                    if let Some(message) = e.user_message() {
                        error.set(Some(message));
                    }
                }
            }
        }
    });

    // outlet options per brand; failures just leave the list empty
    let outlet_ctl = outlet_controller.clone();
    let outlet_services = services.clone();
    use_effect(move || {
        let Some((token, brand_id)) = brand_scope() else {
            return;
        };
        let ticket = outlet_ctl.begin();
        let api = outlet_services.api.clone();
        spawn(async move {
            match ticket.run(api.outlets(&token, brand_id)).await {
                FetchOutcome::Applied(Ok(list)) => outlets.set(list),
                FetchOutcome::Applied(Err(_)) => outlets.set(Vec::new()),
                FetchOutcome::Superseded => {}
            }
        });
    });

    // reviews refetch on every scope change: brand or any filter
    let fetch_ctl = controller.clone();
    let fetch_services = services.clone();
    use_effect(move || {
        let Some((token, brand_id)) = brand_scope() else {
            return;
        };
        let current = filters();
        let query = ReviewQuery {
            brand_id,
            channel_id: current.channel,
            outlet_id: current.outlet,
            rating: current.rating,
            q: current.q.clone(),
            date_from: current.date_from(),
            date_to: current.date_to(),
        };
        let ticket = fetch_ctl.begin();
        loading.set(true);
        error.set(None);
        let api = fetch_services.api.clone();
        spawn(async move {
            match ticket.run(api.reviews(&token, &query)).await {
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

    let drop_ctl = controller.clone();
    let drop_outlet_ctl = outlet_controller.clone();
    use_drop(move || {
        drop_ctl.cancel();
        drop_outlet_ctl.cancel();
    });

    // the same constraints again, client-side, over the fetched set
    let visible = use_memo(move || {
        let current = filters();
        let row_filters = RowFilters {
            query: current.q.clone(),
            date_range: DateRange {
                from: current.date_from(),
                to: current.date_to(),
            },
        };
        let outlet = current.outlet;
        let filtered = apply_filters(&rows.read(), &row_filters, move |r: &ReviewRow| {
            r.outlet_id.map(|id| outlet.matches(id)).unwrap_or(!outlet.is_active())
        });
        sort_rows(filtered, sort(), review_sort_value)
    });

    let toggle_sort = use_callback(move |key: ReviewSortKey| {
        sort.with_mut(|s| s.toggle_cycling(key));
    });

    let set_last_days = use_callback(move |days: i64| {
        let to = chrono::Utc::now()
            .with_timezone(&chrono_tz::Asia::Jakarta)
            .date_naive();
        let from = to - chrono::Duration::days(days - 1);
        filters.with_mut(|f| {
            f.date_from = from.format("%Y-%m-%d").to_string();
            f.date_to = to.format("%Y-%m-%d").to_string();
        });
    });

    let current_filters = filters();

    rsx! {
        PageWrapper {
            title: "💬 Ulasan".to_string(),

            // Filters
            div {
                class: "p-4 bg-white shadow-sm rounded-xl space-y-3",
                div {
                    class: "grid gap-3 md:grid-cols-6",

                    div {
                        class: "md:col-span-2",
                        label { class: "text-xs text-gray-600", "Pencarian" }
                        input {
                            value: "{current_filters.q}",
                            oninput: move |e| filters.with_mut(|f| f.q = e.value()),
                            placeholder: "Cari pesan, produk dipesan, atau nama pelanggan…",
                            class: "mt-1 w-full rounded-lg border border-gray-200 px-3 py-2 text-sm",
                        }
                    }

                    div {
                        label { class: "text-xs text-gray-600", "Channel" }
                        select {
                            class: "mt-1 w-full rounded-lg border border-gray-200 px-3 py-2 text-sm",
                            onchange: move |e| filters.with_mut(|f| f.channel = parse_selection(&e.value())),
                            option { value: "all", "Semua Channel" }
                            for channel in channels() {
                                option { value: "{channel.id}", "{channel.name}" }
                            }
                        }
                    }

                    div {
                        label { class: "text-xs text-gray-600", "Outlet" }
                        select {
                            class: "mt-1 w-full rounded-lg border border-gray-200 px-3 py-2 text-sm",
                            onchange: move |e| filters.with_mut(|f| f.outlet = parse_selection(&e.value())),
                            option { value: "all", "Semua Outlet" }
                            for outlet in outlets() {
                                option { value: "{outlet.id}", "{outlet.name}" }
                            }
                        }
                    }

                    div {
                        label { class: "text-xs text-gray-600", "Rating" }
                        select {
                            class: "mt-1 w-full rounded-lg border border-gray-200 px-3 py-2 text-sm",
                            onchange: move |e| filters.with_mut(|f| f.rating = parse_selection(&e.value())),
                            option { value: "all", "Semua" }
                            option { value: "5", "5★" }
                            option { value: "4", "4★" }
                            option { value: "3", "3★" }
                            option { value: "2", "2★" }
                            option { value: "1", "1★" }
                        }
                    }

                    div {
                        label { class: "text-xs text-gray-600", "Dari" }
                        input {
                            r#type: "date",
                            value: "{current_filters.date_from}",
                            onchange: move |e| filters.with_mut(|f| f.date_from = e.value()),
                            class: "mt-1 w-full rounded-lg border border-gray-200 px-3 py-2 text-sm",
                        }
                    }

                    div {
                        label { class: "text-xs text-gray-600", "Sampai" }
                        input {
                            r#type: "date",
                            value: "{current_filters.date_to}",
                            onchange: move |e| filters.with_mut(|f| f.date_to = e.value()),
                            class: "mt-1 w-full rounded-lg border border-gray-200 px-3 py-2 text-sm",
                        }
                    }
                }

                // Date presets
                div {
                    class: "flex flex-wrap gap-2",
                    button {
                        class: "rounded-lg border border-gray-200 px-3 py-1.5 text-xs hover:bg-gray-50",
                        onclick: move |_| set_last_days.call(7),
                        "7 Hari"
                    }
                    button {
                        class: "rounded-lg border border-gray-200 px-3 py-1.5 text-xs hover:bg-gray-50",
                        onclick: move |_| set_last_days.call(30),
                        "30 Hari"
                    }
                    button {
                        class: "rounded-lg border border-gray-200 px-3 py-1.5 text-xs hover:bg-gray-50",
                        onclick: move |_| filters.with_mut(|f| {
                            f.date_from.clear();
                            f.date_to.clear();
                        }),
                        "Reset Tanggal"
                    }
                }
            }

            if let Some(error) = error() {
                ErrorBanner { message: error }
            }

            if loading() {
                LoadingRow { message: "Memuat ulasan…".to_string() }
            } else if visible.read().is_empty() {
                div {
                    class: "p-8 text-center text-gray-500",
                    "Tidak ada ulasan ditemukan."
                }
            } else {
                div {
                    class: "overflow-x-auto rounded-xl shadow-sm border border-gray-100 bg-white",
                    table {
                        class: "min-w-full text-sm text-left",
                        thead {
                            class: "bg-gray-100",
                            tr {
                                ReviewSortHeader { label: "Tanggal", sort_key: ReviewSortKey::CreatedAt, sort: sort(), on_sort: toggle_sort }
                                ReviewSortHeader { label: "Outlet", sort_key: ReviewSortKey::OutletName, sort: sort(), on_sort: toggle_sort }
                                ReviewSortHeader { label: "Channel", sort_key: ReviewSortKey::ChannelName, sort: sort(), on_sort: toggle_sort }
                                ReviewSortHeader { label: "Rating", sort_key: ReviewSortKey::Rating, sort: sort(), on_sort: toggle_sort }
                                ReviewSortHeader { label: "Pesan", sort_key: ReviewSortKey::Message, sort: sort(), on_sort: toggle_sort }
                                ReviewSortHeader { label: "Produk Dipesan", sort_key: ReviewSortKey::OrderedProduct, sort: sort(), on_sort: toggle_sort }
                                ReviewSortHeader { label: "Pelanggan", sort_key: ReviewSortKey::CustomerName, sort: sort(), on_sort: toggle_sort }
                            }
                        }
                        tbody {
                            for review in visible() {
                                ReviewRowView { review }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ReviewRowView(review: ReviewRow) -> Element {
    let badge = rating_badge_class(review.rating);
    let date = display_date(review.created_at.as_deref());

    rsx! {
        tr {
            class: "border-t border-gray-100 hover:bg-green-50/30 transition",
            td { class: "px-4 py-3 whitespace-nowrap text-gray-700", "{date}" }
            td { class: "px-4 py-3 text-gray-700", {review.outlet_name().unwrap_or("-").to_string()} }
            td {
                class: "px-4 py-3",
                span {
                    class: "inline-block bg-gray-100 text-gray-700 text-xs font-medium px-2 py-1 rounded-md",
                    {review.channel_name().unwrap_or("-").to_string()}
                }
            }
            td {
                class: "px-4 py-3 text-center",
                span {
                    class: "px-2 py-1 text-xs rounded-md font-medium {badge}",
                    "{review.rating}★"
                }
            }
            td {
                class: "px-4 py-3 text-gray-800 truncate max-w-xs",
                title: "{review.message}",
                "{review.message}"
            }
            td { class: "px-4 py-3 text-gray-700", {review.ordered_product.clone().unwrap_or_else(|| "-".to_string())} }
            td { class: "px-4 py-3 text-gray-700", {review.customer_name.clone().unwrap_or_else(|| "-".to_string())} }
        }
    }
}

#[component]
fn ReviewSortHeader(
    label: &'static str,
    sort_key: ReviewSortKey,
    sort: SortState<ReviewSortKey>,
    on_sort: Callback<ReviewSortKey>,
) -> Element {
    let icon = if sort.key != sort_key || sort.direction == Direction::None {
        "↕"
    } else if sort.direction == Direction::Ascending {
        "▲"
    } else {
        "▼"
    };

    rsx! {
        th {
            class: "px-4 py-3",
            button {
                r#type: "button",
                onclick: move |_| on_sort.call(sort_key),
                class: "inline-flex items-center gap-1 font-semibold text-xs uppercase text-gray-700 hover:text-green-700",
                title: "Klik untuk urut",
                span { "{label}" }
                span { class: "text-[10px]", "{icon}" }
            }
        }
    }
}
