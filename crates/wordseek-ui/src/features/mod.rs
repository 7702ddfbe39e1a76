//! Feature pages. Each page is independent: it resolves its data through the
//! shared session context and owns its own render phases and mutations.

pub mod history;
pub mod profile;
pub mod saved;
pub mod search;
pub mod uploads;
