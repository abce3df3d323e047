// src/table/aggregate.rs - KPI counts and group-by-count chart series

use indexmap::IndexMap;

use super::TableRow;

/// Top-N cutoff for the outlet bar chart
pub const TOP_OUTLET_LIMIT: usize = 10;

/// Bucket for rows whose reference field is missing
const UNKNOWN_BUCKET: &str = "Unknown";

/// One named numeric series point, as the chart layer consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCount {
    pub name: String,
    pub count: u64,
}

/// The derived headline numbers for a table view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableKpis {
    pub total: u64,
    pub active: u64,
    pub inactive: u64,
    /// Counts per channel name, in first-encountered order
    pub channel_distribution: Vec<GroupCount>,
    /// Counts per outlet name, descending, truncated to
    /// [`TOP_OUTLET_LIMIT`]; ties keep first-encountered order
    pub top_outlets: Vec<GroupCount>,
}

/// Derive KPIs from the (already filtered) row set. An empty input yields
/// zero counts and empty tables.
pub fn aggregate<T: TableRow>(rows: &[T]) -> TableKpis {
    let mut channels: IndexMap<String, u64> = IndexMap::new();
    let mut outlets: IndexMap<String, u64> = IndexMap::new();
    let mut active = 0u64;

    for row in rows {
        if row.is_active() {
            active += 1;
        }
        let channel = row.channel_name().unwrap_or(UNKNOWN_BUCKET);
        *channels.entry(channel.to_string()).or_insert(0) += 1;

        let outlet = row.outlet_name().unwrap_or(UNKNOWN_BUCKET);
        *outlets.entry(outlet.to_string()).or_insert(0) += 1;
    }

    let total = rows.len() as u64;

    let channel_distribution = channels
        .into_iter()
        .map(|(name, count)| GroupCount { name, count })
        .collect();

    let mut top_outlets: Vec<GroupCount> = outlets
        .into_iter()
        .map(|(name, count)| GroupCount { name, count })
        .collect();
    // stable sort keeps insertion order among equal counts
    top_outlets.sort_by(|a, b| b.count.cmp(&a.count));
    top_outlets.truncate(TOP_OUTLET_LIMIT);

    TableKpis {
        total,
        active,
        inactive: total - active,
        channel_distribution,
        top_outlets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Row {
        active: bool,
        channel: Option<String>,
        outlet: Option<String>,
    }

    impl TableRow for Row {
        fn search_fields(&self) -> Vec<&str> {
            Vec::new()
        }

        fn event_timestamp(&self) -> Option<&str> {
            None
        }

        fn is_active(&self) -> bool {
            self.active
        }

        fn channel_name(&self) -> Option<&str> {
            self.channel.as_deref()
        }

        fn outlet_name(&self) -> Option<&str> {
            self.outlet.as_deref()
        }
    }

    fn row(active: bool, channel: Option<&str>, outlet: Option<&str>) -> Row {
        Row {
            active,
            channel: channel.map(String::from),
            outlet: outlet.map(String::from),
        }
    }

    #[test]
    fn test_empty_input_yields_zeroes() {
        let kpis = aggregate::<Row>(&[]);
        assert_eq!(kpis.total, 0);
        assert_eq!(kpis.active + kpis.inactive, 0);
        assert!(kpis.channel_distribution.is_empty());
        assert!(kpis.top_outlets.is_empty());
    }

    #[test]
    fn test_total_splits_into_active_and_inactive() {
        let rows = vec![
            row(true, Some("GrabFood"), Some("Kemang")),
            row(false, Some("GoFood"), Some("Kemang")),
            row(true, Some("GrabFood"), Some("Senayan")),
        ];
        let kpis = aggregate(&rows);
        assert_eq!(kpis.total, 3);
        assert_eq!(kpis.active, 2);
        assert_eq!(kpis.inactive, 1);
        assert_eq!(kpis.total, kpis.active + kpis.inactive);
    }

    #[test]
    fn test_missing_references_bucket_as_unknown() {
        let rows = vec![row(true, None, None)];
        let kpis = aggregate(&rows);
        assert_eq!(kpis.channel_distribution[0].name, "Unknown");
        assert_eq!(kpis.top_outlets[0].name, "Unknown");
    }

    #[test]
    fn test_channel_distribution_keeps_encounter_order() {
        let rows = vec![
            row(true, Some("ShopeeFood"), None),
            row(true, Some("GrabFood"), None),
            row(true, Some("ShopeeFood"), None),
        ];
        let kpis = aggregate(&rows);
        let names: Vec<&str> = kpis
            .channel_distribution
            .iter()
            .map(|g| g.name.as_str())
            .collect();
        assert_eq!(names, vec!["ShopeeFood", "GrabFood"]);
    }

    #[test]
    fn test_top_outlets_descending_and_truncated() {
        let mut rows = Vec::new();
        for i in 0..12 {
            // outlet i appears i+1 times
            for _ in 0..=i {
                rows.push(row(true, None, Some(&format!("Outlet {}", i))));
            }
        }
        let kpis = aggregate(&rows);
        assert_eq!(kpis.top_outlets.len(), TOP_OUTLET_LIMIT);
        assert!(kpis
            .top_outlets
            .windows(2)
            .all(|pair| pair[0].count >= pair[1].count));
        assert_eq!(kpis.top_outlets[0].count, 12);
    }

    #[test]
    fn test_top_outlet_ties_keep_first_encountered_order() {
        let rows = vec![
            row(true, None, Some("Beta")),
            row(true, None, Some("Alpha")),
            row(true, None, Some("Beta")),
            row(true, None, Some("Alpha")),
        ];
        let kpis = aggregate(&rows);
        let names: Vec<&str> = kpis.top_outlets.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Beta", "Alpha"]);
    }
}
