//! Live search page: debounce-free autocomplete, logged selections, file
//! upload, and the save-search affordance.

pub mod state;

#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
