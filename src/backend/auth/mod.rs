//! Session state and the account directory behind sign-in.

pub mod directory;
pub mod provider;
pub mod session;

pub use directory::{Account, AccountDirectory};
pub use provider::SessionProvider;
pub use session::{Role, Session, UserRef};
