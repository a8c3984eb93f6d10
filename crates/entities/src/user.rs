//! User entity definitions.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user stored by the users service.
///
/// The password is kept only as a one-way hash. `User` intentionally does
/// not derive `Serialize`; handlers return the [`UserProfile`] projection,
/// so the hash can never appear in a response body.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique identifier, assigned sequentially starting at 1.
    pub id: u64,
    /// Display name, stored trimmed and title-cased.
    pub name: String,
    /// Email address, unique across all live users.
    pub email: String,
    /// Hex-encoded digest of the submitted password.
    pub password_hash: String,
}

impl User {
    /// Returns the public projection of this user.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Public projection of a [`User`] with the password hash stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    /// Unique identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_strips_password_hash() {
        let user = User {
            id: 1,
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "deadbeef".to_string(),
        };

        let profile = user.profile();
        assert_eq!(profile.id, 1);
        assert_eq!(profile.name, "Ada Lovelace");
        assert_eq!(profile.email, "ada@example.com");
    }
}
