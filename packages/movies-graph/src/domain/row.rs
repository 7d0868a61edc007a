//! Untyped result rows
//!
//! The query engine hands back one mapping of column name to dynamically typed
//! value per record. Accessors never fail: a column that is absent, null, or of
//! an unexpected shape decodes to `None` (or to the type's default for the
//! non-optional accessors), so one odd field cannot sink a whole response.

use std::collections::BTreeMap;

use serde_json::Value;

/// One result record
///
/// # Examples
///
/// ```rust
/// use movies_graph::domain::Row;
/// use serde_json::json;
///
/// let row = Row::from(json!({"title": "Speed", "released": 1994, "tagline": null}));
/// assert_eq!(row.get_string("title"), "Speed");
/// assert_eq!(row.get_i64("released"), 1994);
/// assert_eq!(row.get_opt_string("tagline"), None);
/// assert_eq!(row.get_i64("votes"), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: BTreeMap<String, Value>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.columns.insert(column.into(), value.into());
    }

    /// Raw value; `None` only when the column is missing entirely
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns.get(column)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Nullable accessors
    // ═══════════════════════════════════════════════════════════════════════

    pub fn get_opt_string(&self, column: &str) -> Option<String> {
        match self.get(column)? {
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }

    /// Integers only; floats and numeric strings are treated as absent
    pub fn get_opt_i64(&self, column: &str) -> Option<i64> {
        match self.get(column)? {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// A list whose every element is a string
    ///
    /// A list holding anything else is the wrong shape and decodes to `None`
    /// as a whole rather than being partially kept.
    pub fn get_opt_string_list(&self, column: &str) -> Option<Vec<String>> {
        match self.get(column)? {
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_owned))
                .collect(),
            _ => None,
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Defaulting accessors
    // ═══════════════════════════════════════════════════════════════════════

    pub fn get_string(&self, column: &str) -> String {
        self.get_opt_string(column).unwrap_or_default()
    }

    pub fn get_i64(&self, column: &str) -> i64 {
        self.get_opt_i64(column).unwrap_or_default()
    }

    pub fn get_string_list(&self, column: &str) -> Vec<String> {
        self.get_opt_string_list(column).unwrap_or_default()
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}

/// Object values become rows column by column; any other value is an empty row
impl From<Value> for Row {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => map.into_iter().collect(),
            _ => Row::new(),
        }
    }
}
