//! Resource loader state machine.
//!
//! Each backend collection is loaded independently and rendered wholesale
//! into its panel: exactly one informational row for an empty collection,
//! exactly one error row on failure, one row per item otherwise. Failures
//! never cross the loader boundary; they terminate in `Failed`.

use crate::error::ApiError;

/// Render state of one fetched collection.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// Fetch in flight (also the initial state before the gate opens).
    Loading,
    /// Non-empty collection; one row per item.
    Loaded(Vec<T>),
    /// Well-formed empty collection; one informational row.
    Empty,
    /// Fetch, parse, or server-reported failure; one error row.
    Failed(String),
}

impl<T> LoadState<T> {
    /// Classify a fetch outcome into a render state.
    pub fn from_result(result: Result<Vec<T>, ApiError>) -> Self {
        match result {
            Ok(items) if items.is_empty() => LoadState::Empty,
            Ok(items) => LoadState::Loaded(items),
            Err(err) => LoadState::Failed(err.notice()),
        }
    }

    /// Loaded items, if any.
    pub fn items(&self) -> Option<&[T]> {
        match self {
            LoadState::Loaded(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_renders_informational_row() {
        let state = LoadState::<u32>::from_result(Ok(vec![]));
        assert_eq!(state, LoadState::Empty);
    }

    #[test]
    fn row_count_matches_item_count() {
        let state = LoadState::from_result(Ok(vec![1, 2, 3]));
        assert_eq!(state.items().map(<[_]>::len), Some(3));
    }

    #[test]
    fn transport_failure_renders_generic_error_row() {
        let state = LoadState::<u32>::from_result(Err(ApiError::Transport("offline".into())));
        let LoadState::Failed(message) = state else {
            panic!("expected Failed");
        };
        assert!(message.contains("Could not reach the server"));
    }

    #[test]
    fn server_failure_keeps_backend_message() {
        let state =
            LoadState::<u32>::from_result(Err(ApiError::Server("Invalid admin password".into())));
        assert_eq!(state, LoadState::Failed("Invalid admin password".into()));
    }
}
