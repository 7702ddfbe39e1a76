//! Best-effort recording of deliberate searches.
//!
//! A failed log call must never block or disturb the search flow, but it is
//! not silently discarded either: each drop is reported to the console and
//! counted so the UI can surface how many were lost.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;

use crate::services::api::ApiClient;

/// Fire-and-account queue for history log calls.
#[derive(Clone)]
pub(crate) struct LogQueue {
    client: Rc<ApiClient>,
    dropped: Rc<Cell<u32>>,
}

impl PartialEq for LogQueue {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}

impl LogQueue {
    pub(crate) fn new(client: Rc<ApiClient>) -> Self {
        Self {
            client,
            dropped: Rc::new(Cell::new(0)),
        }
    }

    /// Record a deliberate search without blocking the caller.
    pub(crate) fn record_search(&self, user: &str, term: &str) {
        let client = self.client.clone();
        let dropped = self.dropped.clone();
        let user = user.to_string();
        let term = term.to_string();
        spawn_local(async move {
            if let Err(err) = client.log_search(&term, &user).await {
                dropped.set(dropped.get() + 1);
                gloo::console::error!("history log call dropped", term, err.to_string());
            }
        });
    }

    /// How many log calls have been dropped this session.
    pub(crate) fn dropped(&self) -> u32 {
        self.dropped.get()
    }
}
