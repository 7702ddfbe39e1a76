//! Routing definitions for the Wordseek UI.
use serde::{Deserialize, Serialize};
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Search,
    #[at("/history")]
    History,
    #[at("/saved")]
    Saved,
    #[at("/uploads")]
    Uploads,
    #[at("/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Query parameters the search route accepts. Other pages navigate here
/// with a term to pre-fill and immediately look up.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct SearchQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}
