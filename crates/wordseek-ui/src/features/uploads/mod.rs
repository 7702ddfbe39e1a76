//! Uploads page: read-only list of previously uploaded word files.

#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
