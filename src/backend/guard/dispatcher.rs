//! Turns a stream of decisions into navigation side effects.

use crate::backend::guard::decision::Decision;

/// Navigation primitive used to issue redirects.
pub trait Navigate {
    fn go_to(&self, path: &str);
}

/// Reports a redirect only when the decision stream enters `Redirect`.
///
/// Staying in the same redirect produces nothing, so re-renders and repeated
/// session notifications cannot loop the navigation.
#[derive(Debug, Default, Clone)]
pub struct RedirectDispatcher {
    last: Option<Decision>,
}

impl RedirectDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `decision` and returns the target to navigate to, if any.
    pub fn observe(&mut self, decision: Decision) -> Option<&'static str> {
        let previous = self.last.replace(decision);
        match decision {
            Decision::Redirect(target) if previous != Some(decision) => Some(target),
            _ => None,
        }
    }

    /// Records `decision` and performs the navigation through `navigator` when needed.
    pub fn dispatch<N: Navigate + ?Sized>(&mut self, decision: Decision, navigator: &N) -> bool {
        match self.observe(decision) {
            Some(target) => {
                log::debug!("Redirecting to {target}");
                navigator.go_to(target);
                true
            }
            None => false,
        }
    }
}
