//! Core data model types.
//!
//! CSV loading produces an in-memory [`DataSet`]: the file's header columns in
//! order, plus row-major raw string storage. Values stay untyped here; numeric
//! parsing (and the missing-value sentinel check) belongs to the aggregation
//! layer, so both statistics share one conversion path.
//!
//! Summary tables are [`OrderedMap`]s: string-keyed maps that iterate in
//! first-seen insertion order. That order is part of the report contract, so
//! it is an explicit structure rather than an accident of a hash map.

/// In-memory tabular dataset of raw string cells.
///
/// Rows are stored as `Vec<Vec<String>>` in the same order as `columns`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSet {
    /// Header column names, in file order.
    pub columns: Vec<String>,
    /// Row-major cell storage.
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    /// Create a dataset from header columns and rows.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    /// Number of rows in the dataset.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the index of a column by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell value at `(row, col)`, or `""` if the row is short.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// A string-keyed map that preserves insertion order.
///
/// Keys iterate in the order they were first inserted, which makes the
/// reporting order reproducible: first-seen order of distinct keys while
/// scanning records.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> OrderedMap<V> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the map holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Mutable reference to the value for `key`, inserting `default` first if
    /// the key is new. New keys go to the back, preserving first-seen order.
    pub fn entry_or_insert(&mut self, key: &str, default: V) -> &mut V {
        if let Some(pos) = self.entries.iter().position(|(k, _)| k == key) {
            &mut self.entries[pos].1
        } else {
            self.entries.push((key.to_owned(), default));
            &mut self.entries.last_mut().expect("just pushed").1
        }
    }

    /// Iterate `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Map every value through `f`, keeping keys and order.
    pub fn map_values<U>(self, mut f: impl FnMut(V) -> U) -> OrderedMap<U> {
        OrderedMap {
            entries: self
                .entries
                .into_iter()
                .map(|(k, v)| (k, f(v)))
                .collect(),
        }
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FromIterator<(String, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
