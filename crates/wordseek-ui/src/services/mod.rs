//! Browser-side service clients (HTTP + background logging).

pub(crate) mod api;
pub(crate) mod log_queue;
