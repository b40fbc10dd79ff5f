/// Where the window is currently pointed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Blog,
    Post(String),
}

impl Route {
    /// Window-title fragment for this route.
    pub fn label(&self) -> &str {
        match self {
            Route::Home => "Home",
            Route::Blog => "Blog",
            Route::Post(slug) => slug,
        }
    }
}

/// Tracks the visible page and a back stack.
///
/// Pure state transitions; the dispatch loop re-renders after each one.
pub struct Router {
    current: Route,
    history: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            current: Route::Home,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Navigate to a route, pushing the old one onto the back stack.
    /// Re-navigating to the current route is a no-op.
    pub fn go(&mut self, route: Route) {
        if route == self.current {
            return;
        }
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push(previous);
    }

    /// Pop the back stack. Returns false when there is nowhere to go.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_home() {
        let router = Router::new();
        assert_eq!(*router.current(), Route::Home);
        assert!(!router.can_go_back());
    }

    #[test]
    fn test_go_and_back() {
        let mut router = Router::new();
        router.go(Route::Blog);
        router.go(Route::Post("first-post".to_string()));
        assert_eq!(*router.current(), Route::Post("first-post".to_string()));

        assert!(router.back());
        assert_eq!(*router.current(), Route::Blog);
        assert!(router.back());
        assert_eq!(*router.current(), Route::Home);
        assert!(!router.back());
    }

    #[test]
    fn test_renavigation_is_noop() {
        let mut router = Router::new();
        router.go(Route::Blog);
        router.go(Route::Blog);
        assert!(router.back());
        assert!(!router.can_go_back());
    }
}
