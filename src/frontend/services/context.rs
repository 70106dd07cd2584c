//! Session context hooks.

use crate::backend::auth::{Session, SessionProvider};
use dioxus::prelude::*;

/// Mirrors the provider's session into a signal that re-renders on change.
pub fn use_session() -> Signal<Session> {
    let provider = use_context::<SessionProvider>();
    let session = use_signal(|| provider.snapshot());

    use_future(move || {
        let mut rx = provider.subscribe();
        async move {
            let mut session = session;
            loop {
                session.set(rx.borrow_and_update().clone());
                if rx.changed().await.is_err() {
                    break;
                }
            }
        }
    });

    session
}
