// crates/folio-content/tests/http_end_to_end.rs
// ============================================================================
// Module: HTTP End-to-End Tests
// Description: Resolver tests over the HTTP store and a local server.
// Purpose: Validate configuration wiring and network failure fallback.
// Dependencies: folio-content, folio-config, folio-core, tiny_http
// ============================================================================

//! ## Overview
//! Builds resolvers from configuration pointed at a local `tiny_http`
//! server, or at an address nothing listens on.

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

use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;

use folio_config::FolioConfig;
use folio_config::RemoteConfig;
use folio_content::ContentResolver;
use folio_core::FallbackReason;
use folio_core::Locale;
use folio_core::Origin;
use serde_json::json;
use tiny_http::Header;
use tiny_http::Response;
use tiny_http::Server;

// ============================================================================
// SECTION: Test Helpers
// ============================================================================

/// Spawns a server answering `requests` requests, routing by relation path.
fn spawn_store(requests: usize) -> (String, mpsc::Receiver<String>, thread::JoinHandle<()>) {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let (sender, receiver) = mpsc::channel();
    let handle = thread::spawn(move || {
        for _ in 0 .. requests {
            let Ok(request) = server.recv() else {
                return;
            };
            let url = request.url().to_string();
            let body = if url.starts_with("/rest/v1/translations") {
                json!([
                    {"namespace": "nav", "key": "home", "value_ro": "Acasă nouă"},
                    {"namespace": "hero", "key": "bullets", "value_ro": "[\"unu\",\"doi\"]"}
                ])
            } else if url.starts_with("/rest/v1/articles") {
                json!([{"slug": "from-http", "sort_order": 1, "title_en": "From HTTP"}])
            } else {
                json!([])
            };
            let _ = sender.send(url);
            let header = Header::from_bytes("Content-Type", "application/json").unwrap();
            let _ = request.respond(Response::from_string(body.to_string()).with_header(header));
        }
    });
    (format!("http://{addr}"), receiver, handle)
}

/// Configuration pointing the remote at `url` over cleartext HTTP.
fn config_for(url: &str) -> FolioConfig {
    FolioConfig {
        remote: RemoteConfig {
            url: Some(url.to_string()),
            read_key: Some("anon-key".to_string()),
            allow_http: true,
            timeout_ms: 500,
            ..RemoteConfig::default()
        },
        ..FolioConfig::default()
    }
}

/// Returns an address with no listener.
fn closed_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

// ============================================================================
// SECTION: Tests
// ============================================================================

/// Tests a message build and an article listing over HTTP.
#[test]
fn resolver_reads_through_http_store() {
    let (url, seen, handle) = spawn_store(2);
    let resolver = ContentResolver::from_config(&config_for(&url)).unwrap();
    assert!(resolver.context().has_remote());

    let report = resolver.messages().build_report(&Locale::parse("ro").unwrap());
    assert_eq!(report.origin, Origin::Remote);
    assert_eq!(report.tree.text("nav.home"), Some("Acasă nouă"));
    assert_eq!(report.tree.text("nav.about"), Some("Despre"));
    assert_eq!(report.tree.sequence("hero.bullets").unwrap(), ["unu", "doi"]);

    let articles = resolver.articles().list_all();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].slug, "from-http");

    handle.join().unwrap();
    let urls: Vec<String> = seen.try_iter().collect();
    assert_eq!(urls.len(), 2);
    assert!(urls[0].starts_with("/rest/v1/translations?"));
    assert!(urls[0].contains("value_ro"));
    assert!(urls[0].contains("namespace.asc"));
    assert!(urls[1].starts_with("/rest/v1/articles?"));
    assert!(urls[1].contains("sort_order.asc"));
}

/// Tests that an unreachable store resolves from the baseline.
#[test]
fn unreachable_store_falls_back() {
    let resolver = ContentResolver::from_config(&config_for(&closed_address())).unwrap();
    let report = resolver.messages().build_report(&Locale::parse("en").unwrap());
    assert_eq!(report.origin, Origin::Baseline(FallbackReason::RemoteFailed));
    assert_eq!(report.tree.text("nav.home"), Some("Home"));
    assert!(resolver.projects().get_by_slug("open-ledger", None).is_some());
}

/// Tests that a missing read key leaves the resolver static-only.
#[test]
fn missing_read_key_is_static_only() {
    let mut config = config_for("https://store.example.com");
    config.remote.read_key = None;
    let resolver = ContentResolver::from_config(&config).unwrap();
    assert!(!resolver.context().has_remote());
}

/// Tests that cleartext URLs without opt-in leave the resolver static-only.
#[test]
fn cleartext_without_opt_in_is_static_only() {
    let mut config = config_for("http://store.example.com");
    config.remote.allow_http = false;
    let resolver = ContentResolver::from_config(&config).unwrap();
    assert!(!resolver.context().has_remote());
}
