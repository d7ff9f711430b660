//! Dictionary builder: merges a base table with its assist table.
use crate::table::StaticTable;
use std::collections::HashMap;

/// Whether table entries are inserted as written or with key and value swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

/// A merged lookup from one script unit to another.
#[derive(Debug, Clone, Default)]
pub struct ConversionTable {
    map: HashMap<&'static str, &'static str>,
}

impl ConversionTable {
    #[inline(always)]
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.map.get(key).copied()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    fn insert(&mut self, entry: (&'static str, &'static str), direction: Direction) {
        let (key, value) = match direction {
            Direction::Forward => entry,
            Direction::Reverse => (entry.1, entry.0),
        };
        self.map.insert(key, value);
    }
}

/// Every key of a [`ConversionTable`], once each, in codepoint order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyList(Vec<&'static str>);

impl KeyList {
    pub fn from_keys(keys: impl IntoIterator<Item = &'static str>) -> Self {
        let mut keys: Vec<&'static str> = keys.into_iter().collect();
        // `str` ordering is byte-wise, which for UTF-8 equals codepoint order
        keys.sort();
        keys.dedup();
        Self(keys)
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[&'static str] {
        &self.0
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Merge `base` and `assist` into one table.
///
/// `base` is inserted first and `assist` second, so assist entries win on a
/// key collision. With [`Direction::Reverse`] each entry is inserted as
/// `(value, key)` before merging; when several entries of one table share a
/// value, the one declared last wins.
///
/// No validation is done here; see [`crate::table::validate_table`].
pub fn build(
    base: &'static StaticTable,
    assist: &'static StaticTable,
    direction: Direction,
) -> (ConversionTable, KeyList) {
    let mut table = ConversionTable {
        map: HashMap::with_capacity(base.len() + assist.len()),
    };
    for (key, value) in base.entries().chain(assist.entries()) {
        table.insert((*key, *value), direction);
    }
    let keys = KeyList::from_keys(table.map.keys().copied());
    (table, keys)
}
