// crates/folio-store-http/tests/proptest_query.rs
// ============================================================================
// Module: Query URL Property-Based Tests
// Description: Property tests for selection URL construction.
// Purpose: Ensure filter values survive encoding and unsafe names are refused.
// ============================================================================

//! Property-based tests for PostgREST selection URLs.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use folio_core::SelectQuery;
use folio_core::StoreError;
use folio_store_http::build_select_url;
use proptest::prelude::*;
use reqwest::Url;

fn endpoint() -> Url {
    Url::parse("https://db.example.test/rest/v1").unwrap()
}

proptest! {
    #[test]
    fn filter_values_round_trip(value in "\\PC{0,32}") {
        let query = SelectQuery::table("articles").eq("slug", value.clone()).limit(1);
        let url = build_select_url(&endpoint(), &query).unwrap();
        let decoded: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        let expected = ("slug".to_string(), format!("eq.{value}"));
        prop_assert!(decoded.contains(&expected));
        prop_assert_eq!(url.path(), "/rest/v1/articles");
    }

    #[test]
    fn unsafe_column_names_are_refused(name in "[a-z]{0,4}[^A-Za-z0-9_][a-z]{0,4}") {
        let query = SelectQuery::table("articles").columns([name]);
        let result = build_select_url(&endpoint(), &query);
        prop_assert!(matches!(result, Err(StoreError::Query(_))));
    }

    #[test]
    fn unsafe_table_names_are_refused(name in "[a-z]{0,4}[/?#&=.][a-z]{0,4}") {
        let result = build_select_url(&endpoint(), &SelectQuery::table(name));
        prop_assert!(matches!(result, Err(StoreError::Query(_))));
    }
}
