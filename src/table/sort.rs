// src/table/sort.rs - Stable keyed sorting with per-table direction cycles

use std::borrow::Cow;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Ascending,
    Descending,
    /// Rows keep their filtered (fetch) order. This is an identity, not a
    /// re-sort.
    #[default]
    None,
}

/// The comparison key derived from a row. Numbers compare numerically;
/// everything else compares as strings. A mixed pair falls back to string
/// comparison, matching how the views derive keys.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue<'a> {
    Number(f64),
    Text(Cow<'a, str>),
}

impl<'a> SortValue<'a> {
    pub fn text(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }

    pub fn owned_text(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (a, b) => a.as_str().cmp(&b.as_str()),
        }
    }

    fn as_str(&self) -> Cow<'_, str> {
        match self {
            Self::Number(n) => Cow::Owned(n.to_string()),
            Self::Text(s) => Cow::Borrowed(s.as_ref()),
        }
    }
}

/// One active sort key plus a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<K> {
    pub key: K,
    pub direction: Direction,
}

impl<K: Copy + PartialEq> SortState<K> {
    pub fn new(key: K, direction: Direction) -> Self {
        Self { key, direction }
    }

    /// The Items table cycle: clicking the active column flips
    /// asc ↔ desc and never reaches `None`; a new column starts ascending.
    pub fn toggle_alternating(&mut self, key: K) {
        if self.key == key {
            self.direction = match self.direction {
                Direction::Ascending => Direction::Descending,
                _ => Direction::Ascending,
            };
        } else {
            self.key = key;
            self.direction = Direction::Ascending;
        }
    }

    /// The Reviews table cycle: asc → desc → none → asc on the active
    /// column; a new column starts ascending.
    pub fn toggle_cycling(&mut self, key: K) {
        if self.key == key {
            self.direction = match self.direction {
                Direction::Ascending => Direction::Descending,
                Direction::Descending => Direction::None,
                Direction::None => Direction::Ascending,
            };
        } else {
            self.key = key;
            self.direction = Direction::Ascending;
        }
    }
}

/// Stable sort over the key derived by `key_fn`. Ties keep their relative
/// input order in both directions; `Direction::None` returns the input
/// untouched.
pub fn sort_rows<T, K: Copy>(
    mut rows: Vec<T>,
    sort: SortState<K>,
    key_fn: impl Fn(&T, K) -> SortValue<'_>,
) -> Vec<T> {
    match sort.direction {
        Direction::None => rows,
        Direction::Ascending => {
            rows.sort_by(|a, b| key_fn(a, sort.key).compare(&key_fn(b, sort.key)));
            rows
        }
        Direction::Descending => {
            rows.sort_by(|a, b| key_fn(a, sort.key).compare(&key_fn(b, sort.key)).reverse());
            rows
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Key {
        Name,
        Price,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        price: f64,
        seq: usize,
    }

    fn key_fn(row: &Row, key: Key) -> SortValue<'_> {
        match key {
            Key::Name => SortValue::text(row.name),
            Key::Price => SortValue::Number(row.price),
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "bakso", price: 20.0, seq: 0 },
            Row { name: "ayam", price: 20.0, seq: 1 },
            Row { name: "cilok", price: 10.0, seq: 2 },
            Row { name: "ayam", price: 30.0, seq: 3 },
        ]
    }

    #[test]
    fn test_numeric_sort_ascending() {
        let sorted = sort_rows(rows(), SortState::new(Key::Price, Direction::Ascending), key_fn);
        let prices: Vec<f64> = sorted.iter().map(|r| r.price).collect();
        assert_eq!(prices, vec![10.0, 20.0, 20.0, 30.0]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let sorted = sort_rows(rows(), SortState::new(Key::Price, Direction::Ascending), key_fn);
        // the two price-20 rows keep their original relative order
        let tied: Vec<usize> = sorted
            .iter()
            .filter(|r| r.price == 20.0)
            .map(|r| r.seq)
            .collect();
        assert_eq!(tied, vec![0, 1]);
    }

    #[test]
    fn test_descending_reverses_ascending_without_ties() {
        let distinct = vec![
            Row { name: "a", price: 3.0, seq: 0 },
            Row { name: "b", price: 1.0, seq: 1 },
            Row { name: "c", price: 2.0, seq: 2 },
        ];
        let asc = sort_rows(
            distinct.clone(),
            SortState::new(Key::Price, Direction::Ascending),
            key_fn,
        );
        let desc = sort_rows(
            distinct,
            SortState::new(Key::Price, Direction::Descending),
            key_fn,
        );
        let reversed: Vec<Row> = asc.into_iter().rev().collect();
        assert_eq!(desc, reversed);
    }

    #[test]
    fn test_none_direction_is_identity() {
        let input = rows();
        let sorted = sort_rows(input.clone(), SortState::new(Key::Name, Direction::None), key_fn);
        assert_eq!(sorted, input);
    }

    #[test]
    fn test_text_sort_is_case_sensitive() {
        let mixed = vec![
            Row { name: "Zebra", price: 0.0, seq: 0 },
            Row { name: "ayam", price: 0.0, seq: 1 },
        ];
        let sorted = sort_rows(mixed, SortState::new(Key::Name, Direction::Ascending), key_fn);
        // byte order puts uppercase first
        assert_eq!(sorted[0].name, "Zebra");
    }

    #[test]
    fn test_alternating_cycle_never_reaches_none() {
        let mut sort = SortState::new(Key::Name, Direction::Descending);
        sort.toggle_alternating(Key::Name);
        assert_eq!(sort.direction, Direction::Ascending);
        sort.toggle_alternating(Key::Name);
        assert_eq!(sort.direction, Direction::Descending);
        sort.toggle_alternating(Key::Name);
        assert_eq!(sort.direction, Direction::Ascending);
        // switching columns resets to ascending
        sort.toggle_alternating(Key::Price);
        assert_eq!(sort.key, Key::Price);
        assert_eq!(sort.direction, Direction::Ascending);
    }

    #[test]
    fn test_cycling_returns_to_none() {
        let mut sort = SortState::new(Key::Name, Direction::None);
        sort.toggle_cycling(Key::Name);
        assert_eq!(sort.direction, Direction::Ascending);
        sort.toggle_cycling(Key::Name);
        assert_eq!(sort.direction, Direction::Descending);
        sort.toggle_cycling(Key::Name);
        assert_eq!(sort.direction, Direction::None);
        sort.toggle_cycling(Key::Price);
        assert_eq!(sort.key, Key::Price);
        assert_eq!(sort.direction, Direction::Ascending);
    }
}
