//! The in-memory user directory.

use std::collections::HashMap;

use entities::{User, UserProfile};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::validation;
use crate::{DirectoryError, DirectoryResult};

/// Payload for creating a user.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewUser {
    /// Display name (2-50 characters, letters and spaces).
    pub name: String,
    /// Email address, must not already be registered.
    pub email: String,
    /// Plaintext password; stored only as a hash.
    pub password: String,
}

/// Partial update for an existing user. Absent fields are left unchanged;
/// the password cannot be changed after creation.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UserPatch {
    /// New display name.
    pub name: Option<String>,
    /// New email address.
    pub email: Option<String>,
}

/// In-memory user directory keyed by id.
///
/// Ids are assigned sequentially starting at 1 and never reused, even after
/// deletes. Mutations take `&mut self`; callers share the directory behind
/// a single lock so the uniqueness scan and the insert that follows it
/// cannot interleave.
#[derive(Debug)]
pub struct UserDirectory {
    users: HashMap<u64, User>,
    next_id: u64,
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl UserDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
            next_id: 1,
        }
    }

    /// Validates the payload, enforces email uniqueness, and stores a new
    /// user. Returns the password-stripped projection.
    pub fn create(&mut self, new_user: NewUser) -> DirectoryResult<UserProfile> {
        let name = validation::normalize_name(&new_user.name)?;
        validation::validate_email(&new_user.email)?;
        validation::validate_password(&new_user.password)?;

        if self.users.values().any(|u| u.email == new_user.email) {
            return Err(DirectoryError::EmailTaken);
        }

        let id = self.next_id;
        self.next_id += 1;

        let user = User {
            id,
            name,
            email: new_user.email,
            password_hash: validation::hash_password(&new_user.password),
        };
        let profile = user.profile();
        self.users.insert(id, user);

        tracing::info!(user_id = id, "User created");
        Ok(profile)
    }

    /// Lists all users as projections, id ascending.
    pub fn list(&self) -> Vec<UserProfile> {
        let mut profiles: Vec<UserProfile> = self.users.values().map(User::profile).collect();
        profiles.sort_by_key(|p| p.id);
        profiles
    }

    /// Gets a user projection by id.
    pub fn get(&self, id: u64) -> DirectoryResult<UserProfile> {
        self.users
            .get(&id)
            .map(User::profile)
            .ok_or_else(|| DirectoryError::not_found("User", id.to_string()))
    }

    /// Applies a partial update to a user.
    ///
    /// Only the fields present in the patch are validated and applied. An
    /// email change to a value different from the user's current one is
    /// checked for collisions against every other user. Nothing is mutated
    /// unless every check passes.
    pub fn update(&mut self, id: u64, patch: UserPatch) -> DirectoryResult<UserProfile> {
        let current_email = match self.users.get(&id) {
            Some(user) => user.email.clone(),
            None => return Err(DirectoryError::not_found("User", id.to_string())),
        };

        let name = match patch.name.as_deref() {
            Some(raw) => Some(validation::normalize_name(raw)?),
            None => None,
        };

        if let Some(email) = patch.email.as_deref() {
            validation::validate_email(email)?;
            if email != current_email && self.users.values().any(|u| u.id != id && u.email == email)
            {
                return Err(DirectoryError::EmailTaken);
            }
        }

        let Some(user) = self.users.get_mut(&id) else {
            return Err(DirectoryError::not_found("User", id.to_string()));
        };
        if let Some(name) = name {
            user.name = name;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }

        tracing::info!(user_id = id, "User updated");
        Ok(user.profile())
    }

    /// Removes a user by id.
    pub fn remove(&mut self, id: u64) -> DirectoryResult<()> {
        if self.users.remove(&id).is_none() {
            return Err(DirectoryError::not_found("User", id.to_string()));
        }
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }

    /// Finds a user by exact email match. With uniqueness enforced at most
    /// one user can match.
    pub fn find_by_email(&self, email: &str) -> DirectoryResult<UserProfile> {
        self.users
            .values()
            .find(|u| u.email == email)
            .map(User::profile)
            .ok_or_else(|| DirectoryError::not_found("User", email.to_string()))
    }

    /// Returns the number of stored users.
    pub fn count(&self) -> usize {
        self.users.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(name: &str, email: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password: "Passw0rd!".to_string(),
        }
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let mut directory = UserDirectory::new();
        let a = directory.create(new_user("alice", "a@x.com")).unwrap();
        let b = directory.create(new_user("bob", "b@x.com")).unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(directory.count(), 2);
    }

    #[test]
    fn test_create_normalizes_name() {
        let mut directory = UserDirectory::new();
        let profile = directory.create(new_user("  john doe ", "j@x.com")).unwrap();
        assert_eq!(profile.name, "John Doe");
    }

    #[test]
    fn test_create_rejects_duplicate_email() {
        let mut directory = UserDirectory::new();
        directory.create(new_user("alice", "a@x.com")).unwrap();

        let err = directory.create(new_user("bob", "a@x.com")).unwrap_err();
        assert_eq!(err, DirectoryError::EmailTaken);
        assert_eq!(directory.count(), 1);
    }

    #[test]
    fn test_email_match_is_case_sensitive() {
        let mut directory = UserDirectory::new();
        directory.create(new_user("alice", "a@x.com")).unwrap();

        // Exact-match uniqueness: a different casing is a different email.
        assert!(directory.create(new_user("bob", "A@x.com")).is_ok());
    }

    #[test]
    fn test_invalid_payload_does_not_mutate() {
        let mut directory = UserDirectory::new();
        let mut bad = new_user("alice", "a@x.com");
        bad.password = "short".to_string();

        assert!(directory.create(bad).is_err());
        assert_eq!(directory.count(), 0);
        // The failed create must not consume an id.
        let profile = directory.create(new_user("alice", "a@x.com")).unwrap();
        assert_eq!(profile.id, 1);
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut directory = UserDirectory::new();
        directory.create(new_user("alice", "a@x.com")).unwrap();
        let b = directory.create(new_user("bob", "b@x.com")).unwrap();

        directory.remove(b.id).unwrap();
        let c = directory.create(new_user("carol", "c@x.com")).unwrap();
        assert_eq!(c.id, 3);
    }

    #[test]
    fn test_get_missing_returns_not_found() {
        let directory = UserDirectory::new();
        assert_eq!(
            directory.get(42).unwrap_err(),
            DirectoryError::not_found("User", "42")
        );
    }

    #[test]
    fn test_update_name_only_leaves_email_and_hash_unchanged() {
        let mut directory = UserDirectory::new();
        let created = directory.create(new_user("alice", "a@x.com")).unwrap();
        let hash_before = directory.users[&created.id].password_hash.clone();

        let patch = UserPatch {
            name: Some("alice smith".to_string()),
            email: None,
        };
        let updated = directory.update(created.id, patch).unwrap();

        assert_eq!(updated.name, "Alice Smith");
        assert_eq!(updated.email, "a@x.com");
        assert_eq!(directory.users[&created.id].password_hash, hash_before);
    }

    #[test]
    fn test_update_to_own_email_is_not_a_conflict() {
        let mut directory = UserDirectory::new();
        let created = directory.create(new_user("alice", "a@x.com")).unwrap();

        let patch = UserPatch {
            name: None,
            email: Some("a@x.com".to_string()),
        };
        assert!(directory.update(created.id, patch).is_ok());
    }

    #[test]
    fn test_update_email_collision_is_a_conflict() {
        let mut directory = UserDirectory::new();
        directory.create(new_user("alice", "a@x.com")).unwrap();
        let b = directory.create(new_user("bob", "b@x.com")).unwrap();

        let patch = UserPatch {
            name: None,
            email: Some("a@x.com".to_string()),
        };
        assert_eq!(
            directory.update(b.id, patch).unwrap_err(),
            DirectoryError::EmailTaken
        );
        // Failed update leaves the record untouched.
        assert_eq!(directory.get(b.id).unwrap().email, "b@x.com");
    }

    #[test]
    fn test_update_missing_id_returns_not_found() {
        let mut directory = UserDirectory::new();
        let patch = UserPatch {
            name: Some("bob".to_string()),
            email: None,
        };
        assert_eq!(
            directory.update(7, patch).unwrap_err(),
            DirectoryError::not_found("User", "7")
        );
        assert_eq!(directory.count(), 0);
    }

    #[test]
    fn test_invalid_patch_field_mutates_nothing() {
        let mut directory = UserDirectory::new();
        let created = directory.create(new_user("alice", "a@x.com")).unwrap();

        let patch = UserPatch {
            name: Some("al1ce".to_string()),
            email: Some("new@x.com".to_string()),
        };
        assert!(directory.update(created.id, patch).is_err());

        let current = directory.get(created.id).unwrap();
        assert_eq!(current.name, "Alice");
        assert_eq!(current.email, "a@x.com");
    }

    #[test]
    fn test_find_by_email() {
        let mut directory = UserDirectory::new();
        directory.create(new_user("alice", "a@x.com")).unwrap();

        let found = directory.find_by_email("a@x.com").unwrap();
        assert_eq!(found.name, "Alice");
        assert_eq!(
            directory.find_by_email("missing@x.com").unwrap_err(),
            DirectoryError::not_found("User", "missing@x.com")
        );
    }

    #[test]
    fn test_list_is_id_ascending() {
        let mut directory = UserDirectory::new();
        for (name, email) in [("alice", "a@x.com"), ("bob", "b@x.com"), ("carol", "c@x.com")] {
            directory.create(new_user(name, email)).unwrap();
        }

        let ids: Vec<u64> = directory.list().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_create_conflict_update_delete_lifecycle() {
        let mut directory = UserDirectory::new();

        let a = directory
            .create(NewUser {
                name: "john doe".to_string(),
                email: "a@x.com".to_string(),
                password: "Passw0rd!".to_string(),
            })
            .unwrap();
        assert_eq!(a.name, "John Doe");

        let err = directory.create(new_user("imposter", "a@x.com")).unwrap_err();
        assert_eq!(err, DirectoryError::EmailTaken);

        // Moving to an unclaimed address is allowed.
        let patch = UserPatch {
            name: None,
            email: Some("b@x.com".to_string()),
        };
        assert_eq!(directory.update(a.id, patch).unwrap().email, "b@x.com");

        directory.remove(a.id).unwrap();
        assert_eq!(
            directory.get(a.id).unwrap_err(),
            DirectoryError::not_found("User", "1")
        );
        assert_eq!(
            directory.remove(a.id).unwrap_err(),
            DirectoryError::not_found("User", "1")
        );
    }
}
