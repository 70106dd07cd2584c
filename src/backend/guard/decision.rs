//! Pure access decision for guarded routes.

use crate::backend::auth::session::{Role, Session, UserRef};
use crate::backend::utils::route::SIGN_IN_PATH;

/// What a guarded route accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleRequirement {
    /// Exactly this role.
    Role(Role),
    /// Any signed-in user.
    Authenticated,
}

impl RoleRequirement {
    pub fn admits(self, user: &UserRef) -> bool {
        match self {
            Self::Role(role) => user.role == role,
            Self::Authenticated => true,
        }
    }
}

impl From<Role> for RoleRequirement {
    fn from(role: Role) -> Self {
        Self::Role(role)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Loading,
    Allow,
    Redirect(&'static str),
}

pub fn decide(session: &Session, requirement: RoleRequirement) -> Decision {
    if session.is_loading {
        return Decision::Loading;
    }

    match &session.user {
        Some(user) if requirement.admits(user) => Decision::Allow,
        _ => Decision::Redirect(SIGN_IN_PATH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> Option<UserRef> {
        Some(UserRef::new("someone", "Someone", role))
    }

    #[test]
    fn loading_wins_over_any_user() {
        for user in [None, user(Role::Student), user(Role::Parent)] {
            let session = Session {
                user,
                is_loading: true,
            };
            for requirement in [
                RoleRequirement::Role(Role::Student),
                RoleRequirement::Role(Role::Parent),
                RoleRequirement::Authenticated,
            ] {
                assert_eq!(decide(&session, requirement), Decision::Loading);
            }
        }
    }

    #[test]
    fn absent_user_redirects_to_sign_in() {
        let session = Session::signed_out();
        assert_eq!(
            decide(&session, Role::Student.into()),
            Decision::Redirect("/sign-in")
        );
        assert_eq!(
            decide(&session, RoleRequirement::Authenticated),
            Decision::Redirect("/sign-in")
        );
    }

    #[test]
    fn matching_role_is_allowed() {
        let session = Session {
            user: user(Role::Parent),
            is_loading: false,
        };
        assert_eq!(decide(&session, Role::Parent.into()), Decision::Allow);
    }

    #[test]
    fn mismatched_role_redirects() {
        let session = Session {
            user: user(Role::Student),
            is_loading: false,
        };
        assert_eq!(
            decide(&session, Role::Parent.into()),
            Decision::Redirect(SIGN_IN_PATH)
        );
    }

    #[test]
    fn authenticated_requirement_admits_every_role() {
        for role in [Role::Student, Role::Parent] {
            let session = Session {
                user: user(role),
                is_loading: false,
            };
            assert_eq!(
                decide(&session, RoleRequirement::Authenticated),
                Decision::Allow
            );
        }
    }
}
