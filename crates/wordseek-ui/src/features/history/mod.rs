//! Search history page: polled list view with per-row and bulk deletion.

pub mod state;

#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
