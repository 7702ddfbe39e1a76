#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Wordseek Web UI.
//!
//! A wasm front-end for the Wordseek CGI backend: search with live
//! suggestions, per-user history, saved searches, uploads, and profile
//! management. The pure page logic (identity resolution, list phases,
//! suggestion parsing, request sequencing) compiles and tests natively;
//! everything that touches the DOM or the network is gated on wasm32.

pub mod features;
pub mod identity;
pub mod logic;
pub mod state;
pub mod theme;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod services;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::identity::resolve;
    use crate::logic::relative_label;
    use crate::state::{HistoryRow, ListPhase, rows_differ};

    // End-to-end over the pure layer: resolved user, two rows in server
    // order, and a phase the list page can project directly.
    #[test]
    fn alice_history_scenario() {
        let identity = resolve(Some("alice"), None);
        assert_eq!(identity.name, "alice");

        let rows = vec![
            HistoryRow {
                id: 1,
                term: "cat".to_string(),
                timestamp: "2026-08-20 10:00:00".to_string(),
            },
            HistoryRow {
                id: 2,
                term: "dog".to_string(),
                timestamp: "2026-08-20 11:00:00".to_string(),
            },
        ];
        let phase = ListPhase::from_items(rows.clone());
        let ListPhase::Populated(shown) = &phase else {
            panic!("two rows should render as populated");
        };
        assert_eq!(shown.len(), 2);
        assert_eq!(shown[0].term, "cat");
        assert_eq!(shown[1].term, "dog");
        assert!(!rows_differ(&rows, shown));
    }

    #[test]
    fn relative_labels_stay_in_server_order() {
        let now_ms = 1_700_000_000_000;
        let label = relative_label("definitely not a timestamp", now_ms);
        assert_eq!(label, "definitely not a timestamp");
    }
}
