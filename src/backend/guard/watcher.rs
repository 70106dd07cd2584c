//! Session observer that keeps a guarded route's decision current.

use crate::backend::auth::session::Session;
use crate::backend::guard::decision::{Decision, RoleRequirement, decide};
use crate::backend::guard::dispatcher::{Navigate, RedirectDispatcher};
use tokio::sync::watch;

pub struct SessionGuard {
    requirement: RoleRequirement,
    dispatcher: RedirectDispatcher,
}

impl SessionGuard {
    pub fn new(requirement: RoleRequirement) -> Self {
        Self {
            requirement,
            dispatcher: RedirectDispatcher::new(),
        }
    }

    /// Runs one decision cycle, navigating away if this cycle enters a redirect.
    pub fn evaluate<N: Navigate + ?Sized>(&mut self, session: &Session, navigator: &N) -> Decision {
        let decision = decide(session, self.requirement);
        self.dispatcher.dispatch(decision, navigator);
        decision
    }

    /// Evaluates the current session and then every change published after it.
    ///
    /// `on_decision` receives every decision after its redirect, if any, has been
    /// issued. Returns once the provider behind `rx` is gone.
    pub async fn watch<N, F>(mut self, mut rx: watch::Receiver<Session>, navigator: N, mut on_decision: F)
    where
        N: Navigate,
        F: FnMut(Decision),
    {
        loop {
            let session = rx.borrow_and_update().clone();
            on_decision(self.evaluate(&session, &navigator));

            if rx.changed().await.is_err() {
                log::debug!("Session provider dropped, guard for {:?} stopped", self.requirement);
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::directory::{Account, AccountDirectory};
    use crate::backend::auth::provider::SessionProvider;
    use crate::backend::auth::session::{Role, UserRef};
    use crate::backend::guard::dispatcher::tests::RecordingNavigator;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tokio::task::yield_now;

    /// Gives the guard a chance to observe the last publish before the next one.
    async fn settle() {
        for _ in 0..3 {
            yield_now().await;
        }
    }

    fn student() -> UserRef {
        UserRef::new("maya", "Maya", Role::Student)
    }

    fn recorder() -> (Rc<RefCell<Vec<Decision>>>, impl FnMut(Decision)) {
        let decisions = Rc::new(RefCell::new(Vec::new()));
        let seen = decisions.clone();
        (decisions, move |decision| seen.borrow_mut().push(decision))
    }

    #[test]
    fn evaluate_redirects_once_per_transition() {
        let navigator = RecordingNavigator::default();
        let mut guard = SessionGuard::new(Role::Parent.into());

        assert_eq!(
            guard.evaluate(&Session::loading(), &navigator),
            Decision::Loading
        );
        assert!(navigator.visits().is_empty());

        let wrong_role = Session::signed_in(student());
        assert_eq!(
            guard.evaluate(&wrong_role, &navigator),
            Decision::Redirect("/sign-in")
        );
        guard.evaluate(&wrong_role, &navigator);
        assert_eq!(navigator.visits(), vec!["/sign-in".to_string()]);
    }

    #[tokio::test]
    async fn resolving_into_matching_role_never_redirects() {
        let provider = SessionProvider::new();
        let rx = provider.subscribe();
        let navigator = RecordingNavigator::default();
        let (decisions, on_decision) = recorder();
        let guard = SessionGuard::new(Role::Student.into());

        let driver = async move {
            settle().await;
            provider.resolve(Some(student()));
            settle().await;
        };
        tokio::join!(guard.watch(rx, navigator.clone(), on_decision), driver);

        assert!(navigator.visits().is_empty());
        let decisions = decisions.borrow();
        assert_eq!(decisions.first(), Some(&Decision::Loading));
        assert_eq!(decisions.last(), Some(&Decision::Allow));
        assert!(!decisions.iter().any(|d| matches!(d, Decision::Redirect(_))));
    }

    #[tokio::test]
    async fn repeated_unauthorized_session_redirects_once() {
        let provider = SessionProvider::new();
        let rx = provider.subscribe();
        let navigator = RecordingNavigator::default();
        let (decisions, on_decision) = recorder();
        let guard = SessionGuard::new(Role::Student.into());

        let driver = async move {
            provider.resolve(None);
            settle().await;
            provider.publish(Session::signed_out());
            settle().await;
        };
        tokio::join!(guard.watch(rx, navigator.clone(), on_decision), driver);

        assert_eq!(navigator.visits(), vec!["/sign-in".to_string()]);
        assert_eq!(decisions.borrow().last(), Some(&Decision::Redirect("/sign-in")));
    }

    #[tokio::test]
    async fn wrong_role_redirects_once() {
        let provider = SessionProvider::new();
        let rx = provider.subscribe();
        let navigator = RecordingNavigator::default();
        let (_, on_decision) = recorder();
        let guard = SessionGuard::new(Role::Parent.into());

        let driver = async move {
            settle().await;
            provider.resolve(Some(student()));
            settle().await;
        };
        tokio::join!(guard.watch(rx, navigator.clone(), on_decision), driver);

        assert_eq!(navigator.visits(), vec!["/sign-in".to_string()]);
    }

    #[tokio::test]
    async fn sign_out_under_guard_redirects_once() {
        let provider = SessionProvider::new();
        let directory = AccountDirectory::new(vec![Account {
            username: "maya".to_string(),
            display_name: "Maya".to_string(),
            role: Role::Student,
        }]);
        provider.sign_in("maya", &directory).unwrap();

        let rx = provider.subscribe();
        let navigator = RecordingNavigator::default();
        let (decisions, on_decision) = recorder();
        let guard = SessionGuard::new(Role::Student.into());

        let driver = async move {
            settle().await;
            provider.sign_out();
            settle().await;
            provider.sign_out();
            settle().await;
        };
        tokio::join!(guard.watch(rx, navigator.clone(), on_decision), driver);

        assert_eq!(decisions.borrow().first(), Some(&Decision::Allow));
        assert_eq!(navigator.visits(), vec!["/sign-in".to_string()]);
    }

    #[tokio::test]
    async fn returning_to_unauthorized_after_loading_redirects_again() {
        let provider = SessionProvider::new();
        let rx = provider.subscribe();
        let navigator = RecordingNavigator::default();
        let (_, on_decision) = recorder();
        let guard = SessionGuard::new(RoleRequirement::Authenticated);

        let driver = async move {
            provider.resolve(None);
            settle().await;
            provider.publish(Session::loading());
            settle().await;
            provider.resolve(None);
            settle().await;
        };
        tokio::join!(guard.watch(rx, navigator.clone(), on_decision), driver);

        assert_eq!(navigator.visits().len(), 2);
    }

    #[tokio::test]
    async fn stops_when_provider_is_dropped() {
        let provider = SessionProvider::new();
        let rx = provider.subscribe();
        drop(provider);

        let navigator = RecordingNavigator::default();
        let (decisions, on_decision) = recorder();
        SessionGuard::new(Role::Student.into())
            .watch(rx, navigator.clone(), on_decision)
            .await;

        assert_eq!(*decisions.borrow(), vec![Decision::Loading]);
        assert!(navigator.visits().is_empty());
    }
}
