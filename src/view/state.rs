//! Loading / ready / error state shared by the data-backed views.

/// State of a view backed by a fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    /// Fetch in flight (initial state)
    Loading,
    /// Fetch succeeded
    Ready(T),
    /// Fetch failed; holds the message to show
    Error(String),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Loading
    }
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ViewState::Ready(_))
    }

    /// The loaded data, if ready.
    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn data_mut(&mut self) -> Option<&mut T> {
        match self {
            ViewState::Ready(data) => Some(data),
            _ => None,
        }
    }

    /// The error message, if the fetch failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let loading: ViewState<u8> = ViewState::default();
        assert!(loading.is_loading());
        assert!(loading.data().is_none());

        let mut ready = ViewState::Ready(1u8);
        *ready.data_mut().unwrap() += 1;
        assert_eq!(ready.data(), Some(&2));
        assert!(ready.error().is_none());

        let failed: ViewState<u8> = ViewState::Error("Failed to load posts".to_string());
        assert_eq!(failed.error(), Some("Failed to load posts"));
        assert!(!failed.is_ready());
    }
}
