// src/table/mod.rs - Client-side table engine: filtering, sorting, aggregation

//! The table engine is a family of pure functions over an in-memory row
//! set. Views fetch rows once per scope, then derive filtered, sorted and
//! aggregated projections locally; a new fetch replaces the whole row set.
//! The pipeline order is fixed: filter first, then sort, then aggregate
//! over the filtered set.

pub mod aggregate;
pub mod filter;
pub mod sort;

pub use aggregate::{aggregate, GroupCount, TableKpis, TOP_OUTLET_LIMIT};
pub use filter::{apply_filters, text_matches, DateRange, RowFilters, Selection, StatusFilter};
pub use sort::{sort_rows, Direction, SortState, SortValue};

/// How a row type exposes itself to the engine.
///
/// Implementations resolve missing fields to empty strings or `None`; the
/// engine never panics on sparse rows.
pub trait TableRow {
    /// Fields scanned by the free-text filter. Nested reference names
    /// (outlet, channel) count as searchable.
    fn search_fields(&self) -> Vec<&str>;

    /// The raw timestamp the date-range filter applies to.
    fn event_timestamp(&self) -> Option<&str>;

    /// Whether this row counts as active for the KPI split.
    fn is_active(&self) -> bool;

    fn channel_name(&self) -> Option<&str>;

    fn outlet_name(&self) -> Option<&str>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{ChannelRef, ProductRow};
    use crate::table::filter::StatusFilter;

    fn product(id: i64, status: i64, channel: &str) -> ProductRow {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": format!("Item {}", id),
            "status": status,
            "channel": {"id": 1, "name": channel},
        }))
        .unwrap()
    }

    #[test]
    fn test_status_filter_scenario() {
        let rows = vec![product(1, 1, "A"), product(2, 0, "B")];
        let status = StatusFilter::Active;
        let out = apply_filters(&rows, &RowFilters::default(), |r: &ProductRow| {
            status.matches(r.is_active())
        });
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 1);

        let kpis = aggregate(&rows);
        assert_eq!(kpis.total, 2);
        assert_eq!(kpis.active, 1);
        assert_eq!(kpis.inactive, 1);
    }

    #[test]
    fn test_filter_then_sort_pipeline_order() {
        // sorting the full set and then filtering can leave a different
        // order than the reference pipeline; the engine always filters
        // first
        let mut rows = vec![
            product(3, 1, "B"),
            product(1, 0, "A"),
            product(2, 1, "A"),
        ];
        rows[0].name = "Bakso".to_string();
        rows[1].name = "Ayam".to_string();
        rows[2].name = "Ayam".to_string();

        fn name_key<'a>(row: &'a ProductRow, _key: &'static str) -> SortValue<'a> {
            SortValue::text(&row.name)
        }

        let status = StatusFilter::Active;
        let filtered = apply_filters(&rows, &RowFilters::default(), |r: &ProductRow| {
            status.matches(r.is_active())
        });
        let sorted = sort_rows(
            filtered,
            SortState::new("name", Direction::Ascending),
            name_key,
        );
        let ids: Vec<i64> = sorted.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_channel_ref_counts_as_searchable() {
        let mut row = product(1, 1, "GrabFood");
        row.channel = Some(ChannelRef {
            id: 1,
            name: "GrabFood".to_string(),
            code: None,
        });
        let filters = RowFilters {
            query: "grabfood".to_string(),
            ..Default::default()
        };
        let out = apply_filters(&[row], &filters, |_| true);
        assert_eq!(out.len(), 1);
    }
}
