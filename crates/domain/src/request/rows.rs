//! Key/value row collections for query parameters and headers

use serde::{Deserialize, Serialize};

/// An ordered key/value pair, possibly blank.
///
/// Rows mirror editable table rows in the request form: any string is
/// accepted while the user types. Rows whose key is blank after trimming
/// are dropped when the request is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValueRow {
    /// The row key
    pub key: String,
    /// The row value
    pub value: String,
}

impl KeyValueRow {
    /// Creates a new row.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates an empty row, ready for user input.
    #[must_use]
    pub const fn blank() -> Self {
        Self {
            key: String::new(),
            value: String::new(),
        }
    }

    /// Returns true when the key is blank after trimming.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.key.trim().is_empty()
    }
}

/// An ordered collection of key/value rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyValueRows {
    items: Vec<KeyValueRow>,
}

impl KeyValueRows {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates a collection holding a single blank row.
    ///
    /// This is the initial state of the header and query tables.
    #[must_use]
    pub fn single_blank() -> Self {
        Self {
            items: vec![KeyValueRow::blank()],
        }
    }

    /// Appends a row to the collection.
    pub fn add(&mut self, row: KeyValueRow) {
        self.items.push(row);
    }

    /// Appends a blank row for the user to fill in.
    pub fn add_blank(&mut self) {
        self.items.push(KeyValueRow::blank());
    }

    /// Replaces the key of the row at `index`; out-of-range is ignored.
    pub fn set_key(&mut self, index: usize, key: impl Into<String>) {
        if let Some(row) = self.items.get_mut(index) {
            row.key = key.into();
        }
    }

    /// Replaces the value of the row at `index`; out-of-range is ignored.
    pub fn set_value(&mut self, index: usize, value: impl Into<String>) {
        if let Some(row) = self.items.get_mut(index) {
            row.value = value.into();
        }
    }

    /// Returns an iterator over rows with a non-blank key, in order.
    pub fn present(&self) -> impl Iterator<Item = &KeyValueRow> {
        self.items.iter().filter(|row| !row.is_blank())
    }

    /// Returns all rows, blank ones included.
    #[must_use]
    pub fn all(&self) -> &[KeyValueRow] {
        &self.items
    }

    /// Returns the number of rows.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Vec::len is not const in stable
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no rows.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Vec::is_empty is not const in stable
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<KeyValueRow> for KeyValueRows {
    fn from_iter<T: IntoIterator<Item = KeyValueRow>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
