//! Static account directory used by sign-in.

use crate::backend::auth::session::{Role, UserRef};
use crate::simple_error;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    pub display_name: String,
    pub role: Role,
}

impl Account {
    pub fn to_user(&self) -> UserRef {
        UserRef::new(&self.username, &self.display_name, self.role)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountDirectory {
    accounts: Vec<Account>,
}

impl AccountDirectory {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    /// Validates if a username meets the requirements.
    pub fn is_valid_username(username: &str) -> bool {
        (3..=32).contains(&username.len())
            && username
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    }

    /// Finds an account by username, ignoring ASCII case.
    pub fn find(&self, username: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|account| account.username.eq_ignore_ascii_case(username))
    }

    /// Resolves a username typed on the sign-in page into a user.
    pub fn authenticate(&self, username: &str) -> Result<UserRef> {
        let username = username.trim();
        if !Self::is_valid_username(username) {
            return Err(simple_error!(
                "Username must be 3-32 characters long and can only contain letters, numbers, '_', '.' and '-'"
            ));
        }

        self.find(username)
            .map(Account::to_user)
            .ok_or_else(|| simple_error!("No account named '{username}'"))
    }

    pub fn usernames(&self) -> impl Iterator<Item = &str> {
        self.accounts.iter().map(|account| account.username.as_str())
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
