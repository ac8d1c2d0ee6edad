// Navigation state - route history and pending anchor scrolls
use crate::model::{Anchor, Route};

pub struct NavigationState {
    pub current: Route,
    pub history: Vec<Route>,
    pub history_index: usize,
    /// Home-page section to scroll to once the page has rendered.
    pub pending_anchor: Option<Anchor>,
}

impl NavigationState {
    pub fn new(start: Route) -> Self {
        Self {
            current: start.clone(),
            history: vec![start],
            history_index: 0,
            pending_anchor: None,
        }
    }

    /// Returns false when `route` is already current.
    pub fn push(&mut self, route: Route) -> bool {
        if route == self.current {
            return false;
        }
        // Remove any forward history when navigating to a new route
        self.history.truncate(self.history_index + 1);
        self.history.push(route.clone());
        self.history_index += 1;
        self.current = route;
        true
    }

    pub fn go_back(&mut self) -> Option<Route> {
        if self.history_index > 0 {
            self.history_index -= 1;
            self.current = self.history[self.history_index].clone();
            self.pending_anchor = None;
            Some(self.current.clone())
        } else {
            None
        }
    }

    pub fn go_forward(&mut self) -> Option<Route> {
        if self.history_index + 1 < self.history.len() {
            self.history_index += 1;
            self.current = self.history[self.history_index].clone();
            self.pending_anchor = None;
            Some(self.current.clone())
        } else {
            None
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.history_index > 0
    }

    pub fn take_pending_anchor(&mut self) -> Option<Anchor> {
        self.pending_anchor.take()
    }
}
