//! Session model shared by the provider and the route guard.

use crate::simple_error;
use crate::utils::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which protected area of the portal a user may enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Parent,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Parent => "parent",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "parent" => Ok(Self::Parent),
            other => Err(simple_error!("Unknown role: {other}")),
        }
    }
}

/// The signed-in user as seen by pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub username: String,
    pub display_name: String,
    pub role: Role,
}

impl UserRef {
    pub fn new(username: impl Into<String>, display_name: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            display_name: display_name.into(),
            role,
        }
    }
}

/// Current authentication state. `user` is meaningless while `is_loading` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: Option<UserRef>,
    pub is_loading: bool,
}

impl Session {
    pub fn loading() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            is_loading: false,
        }
    }

    pub fn signed_in(user: UserRef) -> Self {
        Self {
            user: Some(user),
            is_loading: false,
        }
    }

    /// The resolved user, if the session has finished loading.
    pub fn current_user(&self) -> Option<&UserRef> {
        if self.is_loading {
            return None;
        }
        self.user.as_ref()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("Student".parse::<Role>().unwrap(), Role::Student);
        assert_eq!(" PARENT ".parse::<Role>().unwrap(), Role::Parent);
        assert!("tutor".parse::<Role>().is_err());
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&Role::Parent).unwrap();
        assert_eq!(json, "\"parent\"");
        let role: Role = serde_json::from_str("\"student\"").unwrap();
        assert_eq!(role, Role::Student);
    }

    #[test]
    fn loading_session_hides_user() {
        let mut session = Session::signed_in(UserRef::new("ada", "Ada", Role::Student));
        assert!(session.current_user().is_some());

        session.is_loading = true;
        assert!(session.current_user().is_none());
    }

    #[test]
    fn default_session_is_loading() {
        assert_eq!(Session::default(), Session::loading());
    }
}
