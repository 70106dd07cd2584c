//! Observable session store.
//!
//! The provider is the only writer of the [`Session`]. Pages and guards read a
//! snapshot or subscribe to change notifications.

use crate::backend::auth::directory::AccountDirectory;
use crate::backend::auth::session::{Session, UserRef};
use crate::utils::error::Result;
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Clone)]
pub struct SessionProvider {
    tx: Arc<watch::Sender<Session>>,
}

impl SessionProvider {
    /// Creates a provider in the loading state.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(Session::loading());
        Self { tx: Arc::new(tx) }
    }

    pub fn snapshot(&self) -> Session {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.tx.subscribe()
    }

    /// Ends the loading phase with whatever user was restored at startup.
    pub fn resolve(&self, user: Option<UserRef>) {
        match &user {
            Some(user) => log::info!("Session restored for {} ({})", user.username, user.role),
            None => log::debug!("Session resolved without a user"),
        }
        self.publish(Session {
            user,
            is_loading: false,
        });
    }

    /// Signs in against the account directory. The session is left untouched on failure.
    pub fn sign_in(&self, username: &str, directory: &AccountDirectory) -> Result<UserRef> {
        let user = directory.authenticate(username).inspect_err(|e| {
            log::warn!("Sign-in rejected: {e}");
        })?;

        log::info!("Signed in {} as {}", user.username, user.role);
        self.publish(Session::signed_in(user.clone()));
        Ok(user)
    }

    pub fn sign_out(&self) {
        if let Some(user) = self.snapshot().user {
            log::info!("Signed out {}", user.username);
        }
        self.publish(Session::signed_out());
    }

    /// Publishes unconditionally so subscribers re-evaluate even on an equal value.
    pub fn publish(&self, session: Session) {
        self.tx.send_replace(session);
    }
}

impl Default for SessionProvider {
    fn default() -> Self {
        Self::new()
    }
}
