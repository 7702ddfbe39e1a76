//! Saved searches page: authenticated list view with re-run and delete.

#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
