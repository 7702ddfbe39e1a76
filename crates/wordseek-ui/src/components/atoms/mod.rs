//! Shared UI atoms used across the feature pages.

pub(crate) mod empty_state;

pub(crate) use empty_state::EmptyState;
