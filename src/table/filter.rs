// src/table/filter.rs - AND-composed row filters

use chrono::NaiveDate;
use chrono_tz::Asia::Jakarta;

use super::TableRow;
use crate::types::EntityId;
use crate::utils::time::parse_timestamp;

/// Categorical equality filter over entity ids. `All` never excludes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Id(EntityId),
}

impl Selection {
    pub fn matches(&self, id: EntityId) -> bool {
        match self {
            Self::All => true,
            Self::Id(wanted) => *wanted == id,
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }

    /// The query-string value for this filter; `None` when unconstrained.
    pub fn as_param(&self) -> Option<String> {
        match self {
            Self::All => None,
            Self::Id(id) => Some(id.to_string()),
        }
    }
}

/// The three-way status filter the Items view cycles through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn matches(&self, active: bool) -> bool {
        match self {
            Self::All => true,
            Self::Active => active,
            Self::Inactive => !active,
        }
    }

    /// all → active → inactive → all
    pub fn cycled(self) -> Self {
        match self {
            Self::All => Self::Active,
            Self::Active => Self::Inactive,
            Self::Inactive => Self::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "Semua Status",
            Self::Active => "Aktif",
            Self::Inactive => "Tidak Aktif",
        }
    }
}

/// Inclusive date range; either bound may be absent. Bounds are evaluated
/// in the dashboard's display timezone: `from` at start of day, `to` at
/// 23:59:59.999.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn is_active(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    /// Whether the given raw timestamp falls inside the range. A missing
    /// bound imposes no constraint on that side. With any bound set, rows
    /// without a parsable timestamp are excluded.
    pub fn contains(&self, raw: Option<&str>) -> bool {
        if !self.is_active() {
            return true;
        }
        let Some(instant) = raw.and_then(parse_timestamp) else {
            return false;
        };
        let local = instant.with_timezone(&Jakarta).naive_local();

        if let Some(from) = self.from {
            let start = from.and_time(chrono::NaiveTime::MIN);
            if local < start {
                return false;
            }
        }
        if let Some(to) = self.to {
            let end = to
                .and_hms_milli_opt(23, 59, 59, 999)
                .expect("end of day is valid");
            if local > end {
                return false;
            }
        }
        true
    }
}

/// Case-insensitive substring match across the row's searchable fields.
/// An empty query matches everything; a non-empty query matches when ANY
/// field contains it.
pub fn text_matches(query: &str, fields: &[&str]) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// The filters every table shares: free-text query plus date range.
/// View-specific categorical filters compose through the closure passed to
/// [`apply_filters`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowFilters {
    pub query: String,
    pub date_range: DateRange,
}

/// A row passes iff it passes every active filter (logical AND).
pub fn apply_filters<T>(rows: &[T], filters: &RowFilters, categorical: impl Fn(&T) -> bool) -> Vec<T>
where
    T: TableRow + Clone,
{
    rows.iter()
        .filter(|row| {
            text_matches(&filters.query, &row.search_fields())
                && categorical(row)
                && filters.date_range.contains(row.event_timestamp())
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: String,
        outlet: Option<String>,
        active: bool,
        created_at: Option<String>,
    }

    impl TableRow for Row {
        fn search_fields(&self) -> Vec<&str> {
            let mut fields = vec![self.name.as_str()];
            if let Some(outlet) = &self.outlet {
                fields.push(outlet);
            }
            fields
        }

        fn event_timestamp(&self) -> Option<&str> {
            self.created_at.as_deref()
        }

        fn is_active(&self) -> bool {
            self.active
        }

        fn channel_name(&self) -> Option<&str> {
            None
        }

        fn outlet_name(&self) -> Option<&str> {
            self.outlet.as_deref()
        }
    }

    fn row(name: &str, outlet: Option<&str>, active: bool, created_at: Option<&str>) -> Row {
        Row {
            name: name.to_string(),
            outlet: outlet.map(String::from),
            active,
            created_at: created_at.map(String::from),
        }
    }

    fn sample() -> Vec<Row> {
        vec![
            row("Ayam Geprek", Some("Kemang"), true, Some("2025-03-10T08:00:00Z")),
            row("Es Teh Manis", Some("Senayan"), false, Some("2025-03-14T10:00:00Z")),
            row("Nasi Uduk", None, true, None),
        ]
    }

    #[test]
    fn test_empty_filters_keep_everything() {
        let rows = sample();
        let out = apply_filters(&rows, &RowFilters::default(), |_| true);
        assert_eq!(out, rows);
    }

    #[test]
    fn test_text_filter_is_case_insensitive_and_spans_fields() {
        let rows = sample();
        let filters = RowFilters {
            query: "KEMANG".to_string(),
            ..Default::default()
        };
        let out = apply_filters(&rows, &filters, |_| true);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Ayam Geprek");
    }

    #[test]
    fn test_status_filter_cycle() {
        assert_eq!(StatusFilter::All.cycled(), StatusFilter::Active);
        assert_eq!(StatusFilter::Active.cycled(), StatusFilter::Inactive);
        assert_eq!(StatusFilter::Inactive.cycled(), StatusFilter::All);
    }

    #[test]
    fn test_categorical_and_text_compose_with_and() {
        let rows = sample();
        let filters = RowFilters {
            query: "a".to_string(),
            ..Default::default()
        };
        let status = StatusFilter::Active;
        let out = apply_filters(&rows, &filters, |r: &Row| status.matches(r.is_active()));
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|r| r.active));
    }

    #[test]
    fn test_date_range_bounds_are_inclusive() {
        let rows = sample();
        let filters = RowFilters {
            query: String::new(),
            date_range: DateRange {
                from: Some(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()),
                to: Some(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()),
            },
        };
        let out = apply_filters(&rows, &filters, |_| true);
        // 10:00Z on the 14th is 17:00 Jakarta, still inside the day
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Es Teh Manis");
    }

    #[test]
    fn test_missing_timestamp_excluded_only_when_range_active() {
        let rows = sample();
        let unbounded = apply_filters(&rows, &RowFilters::default(), |_| true);
        assert_eq!(unbounded.len(), 3);

        let bounded = RowFilters {
            query: String::new(),
            date_range: DateRange {
                from: Some(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()),
                to: None,
            },
        };
        let out = apply_filters(&rows, &bounded, |_| true);
        assert!(out.iter().all(|r| r.created_at.is_some()));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let rows = sample();
        let filters = RowFilters {
            query: "e".to_string(),
            ..Default::default()
        };
        let once = apply_filters(&rows, &filters, |_| true);
        let twice = apply_filters(&once, &filters, |_| true);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_selection_matches() {
        assert!(Selection::All.matches(42));
        assert!(Selection::Id(42).matches(42));
        assert!(!Selection::Id(42).matches(7));
        assert_eq!(Selection::Id(42).as_param().as_deref(), Some("42"));
        assert_eq!(Selection::All.as_param(), None);
    }
}
