// crates/folio-core/src/runtime/memory_store.rs
// ============================================================================
// Module: Folio In-Memory Remote Store
// Description: Simple in-memory tabular store for tests and examples.
// Purpose: Provide a deterministic RemoteStore implementation without network access.
// Dependencies: crate::interfaces, serde_json
// ============================================================================

//! ## Overview
//! This module provides an in-memory implementation of [`RemoteStore`] that
//! honors projections, exact-match filters, ordering, and limits the same way
//! the HTTP store's backend does. It is not intended for production use.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;

use serde_json::Value;

use crate::interfaces::Record;
use crate::interfaces::RemoteStore;
use crate::interfaces::SelectQuery;
use crate::interfaces::StoreError;

// ============================================================================
// SECTION: In-Memory Store
// ============================================================================

/// In-memory remote store for tests and examples.
#[derive(Debug, Default, Clone)]
pub struct InMemoryRemoteStore {
    /// Rows keyed by relation name, in insertion order.
    tables: Arc<Mutex<BTreeMap<String, Vec<Record>>>>,
}

impl InMemoryRemoteStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the rows of a relation.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store lock is poisoned.
    pub fn set_table(&self, table: impl Into<String>, rows: Vec<Record>) -> Result<(), StoreError> {
        let mut guard = self
            .tables
            .lock()
            .map_err(|_| StoreError::Transport("in-memory store lock poisoned".to_string()))?;
        guard.insert(table.into(), rows);
        Ok(())
    }

    /// Replaces the rows of a relation from JSON values; non-object values are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store lock is poisoned.
    pub fn set_table_json(
        &self,
        table: impl Into<String>,
        rows: Vec<Value>,
    ) -> Result<(), StoreError> {
        let records = rows
            .into_iter()
            .filter_map(|row| match row {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect();
        self.set_table(table, records)
    }
}

impl RemoteStore for InMemoryRemoteStore {
    fn select(&self, query: &SelectQuery) -> Result<Vec<Record>, StoreError> {
        let guard = self
            .tables
            .lock()
            .map_err(|_| StoreError::Transport("in-memory store lock poisoned".to_string()))?;
        let Some(rows) = guard.get(&query.table) else {
            return Ok(Vec::new());
        };
        let mut matched: Vec<&Record> = rows
            .iter()
            .filter(|row| {
                query.filters.iter().all(|filter| {
                    row.get(&filter.column)
                        .and_then(scalar_text)
                        .is_some_and(|value| value == filter.value)
                })
            })
            .collect();
        matched.sort_by(|left, right| {
            for term in &query.order {
                let ordering =
                    compare_values(left.get(&term.column), right.get(&term.column));
                let ordering = if term.ascending { ordering } else { ordering.reverse() };
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            Ordering::Equal
        });
        if let Some(limit) = query.limit {
            matched.truncate(limit);
        }
        Ok(matched.into_iter().map(|row| project(row, &query.columns)).collect())
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Renders a scalar JSON value as filter text; `null` and containers never match.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Orders two column values with nulls last.
fn compare_values(left: Option<&Value>, right: Option<&Value>) -> Ordering {
    match (left, right) {
        (None | Some(Value::Null), None | Some(Value::Null)) => Ordering::Equal,
        (None | Some(Value::Null), _) => Ordering::Greater,
        (_, None | Some(Value::Null)) => Ordering::Less,
        (Some(Value::Number(left)), Some(Value::Number(right))) => left
            .as_f64()
            .zip(right.as_f64())
            .and_then(|(left, right)| left.partial_cmp(&right))
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(left)), Some(Value::String(right))) => left.cmp(right),
        (Some(left), Some(right)) => left.to_string().cmp(&right.to_string()),
    }
}

/// Projects a row onto the requested columns; an empty list keeps every column.
fn project(row: &Record, columns: &[String]) -> Record {
    if columns.is_empty() {
        return row.clone();
    }
    columns
        .iter()
        .filter_map(|column| row.get(column).map(|value| (column.clone(), value.clone())))
        .collect()
}
