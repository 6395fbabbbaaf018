//! Client-side routing seam used for the login redirect.

use std::sync::{Mutex, PoisonError};
use tracing::info;

/// Where the console currently is, and how to move it.
pub trait Navigator: Send + Sync {
    fn current_route(&self) -> String;

    fn navigate(&self, route: &str);
}

/// Navigator that only remembers the current route and the redirect history.
#[derive(Debug)]
pub struct RouteRecorder {
    state: Mutex<RouteState>,
}

#[derive(Debug)]
struct RouteState {
    current: String,
    history: Vec<String>,
}

impl RouteRecorder {
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(RouteState {
                current: start.into(),
                history: Vec::new(),
            }),
        }
    }

    /// Routes navigated to, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .history
            .clone()
    }
}

impl Default for RouteRecorder {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Navigator for RouteRecorder {
    fn current_route(&self) -> String {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .current
            .clone()
    }

    fn navigate(&self, route: &str) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        info!(from = %state.current, to = %route, "Navigating");
        state.current = route.to_string();
        state.history.push(route.to_string());
    }
}
