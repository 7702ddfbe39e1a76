//! Profile page: account details and password change. Guests are redirected
//! to the search page.

pub mod state;

#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
