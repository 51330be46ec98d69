//! Tri-state wrapper for a remotely fetched collection.
//!
//! A reload keeps the previously loaded data visible ("stale-but-visible");
//! a failure after a successful load shows an inline banner instead of
//! blanking the page.

#[derive(Clone, Debug, PartialEq)]
pub enum RemoteState<T> {
    Idle,
    Loading { stale: Option<T> },
    Loaded(T),
    Failed { message: String, stale: Option<T> },
}

impl<T> Default for RemoteState<T> {
    fn default() -> Self {
        RemoteState::Idle
    }
}

impl<T: Clone> RemoteState<T> {
    /// Whatever data we have, fresh or stale.
    pub fn data(&self) -> Option<&T> {
        match self {
            RemoteState::Loaded(d) => Some(d),
            RemoteState::Loading { stale } | RemoteState::Failed { stale, .. } => stale.as_ref(),
            RemoteState::Idle => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteState::Loading { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RemoteState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    /// True when nothing has ever loaded: the page shows the full-screen
    /// loading/error panel instead of content.
    pub fn is_blank(&self) -> bool {
        self.data().is_none()
    }

    /// Transition into Loading, carrying current data along as stale.
    pub fn begin(self) -> Self {
        RemoteState::Loading {
            stale: self.into_data(),
        }
    }

    /// Resolve an in-flight load.
    pub fn resolve(self, result: Result<T, String>) -> Self {
        match result {
            Ok(data) => RemoteState::Loaded(data),
            Err(message) => RemoteState::Failed {
                message,
                stale: self.into_data(),
            },
        }
    }

    fn into_data(self) -> Option<T> {
        match self {
            RemoteState::Loaded(d) => Some(d),
            RemoteState::Loading { stale } | RemoteState::Failed { stale, .. } => stale,
            RemoteState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_load_cycle() {
        let s: RemoteState<Vec<i32>> = RemoteState::Idle;
        let s = s.begin();
        assert!(s.is_loading());
        assert!(s.is_blank());

        let s = s.resolve(Ok(vec![1, 2]));
        assert_eq!(s.data(), Some(&vec![1, 2]));
        assert!(!s.is_blank());
    }

    #[test]
    fn test_failed_reload_keeps_stale_data() {
        let s = RemoteState::Loaded(vec![1, 2]);
        let s = s.begin();
        // Stale data stays visible while reloading
        assert_eq!(s.data(), Some(&vec![1, 2]));

        let s = s.resolve(Err("HTTP 500".into()));
        assert_eq!(s.error(), Some("HTTP 500"));
        assert_eq!(s.data(), Some(&vec![1, 2]));
        assert!(!s.is_blank());
    }

    #[test]
    fn test_first_load_failure_is_blank() {
        let s: RemoteState<Vec<i32>> = RemoteState::Idle.begin().resolve(Err("timeout".into()));
        assert!(s.is_blank());
        assert_eq!(s.error(), Some("timeout"));
    }
}
