// crates/folio-store-http/src/query.rs
// ============================================================================
// Module: Folio Select URL Builder
// Description: Translates SelectQuery values into REST collection URLs.
// Purpose: Keep the wire query dialect in one place.
// Dependencies: folio-core, reqwest
// ============================================================================

//! ## Overview
//! A [`SelectQuery`] becomes `GET <endpoint>/<table>` with query parameters
//! `select=a,b`, one `<column>=eq.<value>` per filter, `order=a.asc,b.desc`,
//! and `limit=<n>`. Relation and column names are restricted to identifier
//! characters so nothing user-supplied can alter the URL structure; filter
//! values are percent-encoded.

// ============================================================================
// SECTION: Imports
// ============================================================================

use folio_core::SelectQuery;
use folio_core::StoreError;
use reqwest::Url;

// ============================================================================
// SECTION: URL Building
// ============================================================================

/// Builds the collection URL for a selection against `endpoint`.
///
/// # Errors
///
/// Returns [`StoreError::Query`] when the relation or a column name is not a
/// plain identifier, or when the endpoint cannot hold path segments.
pub fn build_select_url(endpoint: &Url, query: &SelectQuery) -> Result<Url, StoreError> {
    validate_identifier(&query.table)?;
    for column in &query.columns {
        validate_identifier(column)?;
    }
    for filter in &query.filters {
        validate_identifier(&filter.column)?;
    }
    for term in &query.order {
        validate_identifier(&term.column)?;
    }

    let mut url = endpoint.clone();
    url.path_segments_mut()
        .map_err(|()| StoreError::Query("endpoint cannot be a base url".to_string()))?
        .pop_if_empty()
        .push(&query.table);

    {
        let mut pairs = url.query_pairs_mut();
        let select = if query.columns.is_empty() { "*".to_string() } else { query.columns.join(",") };
        pairs.append_pair("select", &select);
        for filter in &query.filters {
            pairs.append_pair(&filter.column, &format!("eq.{}", filter.value));
        }
        if !query.order.is_empty() {
            let order = query
                .order
                .iter()
                .map(|term| {
                    format!("{}.{}", term.column, if term.ascending { "asc" } else { "desc" })
                })
                .collect::<Vec<_>>()
                .join(",");
            pairs.append_pair("order", &order);
        }
        if let Some(limit) = query.limit {
            pairs.append_pair("limit", &limit.to_string());
        }
    }
    Ok(url)
}

/// Rejects names that are not `[A-Za-z0-9_]+`.
fn validate_identifier(name: &str) -> Result<(), StoreError> {
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
        return Err(StoreError::Query(format!("invalid identifier: `{name}`")));
    }
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
