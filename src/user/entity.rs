use serde::{Deserialize, Serialize};

use crate::error::{DomainError, Result};

use super::UserId;

/// Maximum username length, matching the persistence schema.
pub const MAX_USERNAME_LEN: usize = 100;

/// An account in the smart-greenhouse application.
///
/// Standalone entity with no relationships. Username uniqueness is a
/// store-level rule, enforced in [`MemoryStore`](crate::store::MemoryStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    username: String,
}

impl User {
    /// Create a user with a validated username. Called by the store, which
    /// allocates the id and has already ruled out duplicates.
    pub(crate) fn new(id: UserId, username: impl Into<String>) -> Result<Self> {
        let username = username.into();
        validate_username(&username)?;
        Ok(Self { id, username })
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Store-internal: validation and the uniqueness check happen in
    /// [`MemoryStore::update_username`](crate::store::MemoryStore::update_username).
    pub(crate) fn set_username(&mut self, username: String) {
        self.username = username;
    }
}

/// Rules:
/// - Must be non-empty and not whitespace-only
/// - Max length 100 characters
pub(crate) fn validate_username(username: &str) -> Result<()> {
    if username.trim().is_empty() {
        return Err(DomainError::EmptyField("username"));
    }
    let len = username.chars().count();
    if len > MAX_USERNAME_LEN {
        return Err(DomainError::FieldTooLong {
            field: "username",
            len,
            max: MAX_USERNAME_LEN,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user() {
        let user = User::new(UserId::new(1), "greenkeeper").unwrap();
        assert_eq!(user.id(), UserId::new(1));
        assert_eq!(user.username(), "greenkeeper");
    }

    #[test]
    fn test_empty_username_rejected() {
        let result = User::new(UserId::new(1), "");
        assert_eq!(result.unwrap_err(), DomainError::EmptyField("username"));
    }

    #[test]
    fn test_whitespace_username_rejected() {
        let result = User::new(UserId::new(1), "  \t ");
        assert_eq!(result.unwrap_err(), DomainError::EmptyField("username"));
    }

    #[test]
    fn test_username_at_max_length() {
        let username = "a".repeat(MAX_USERNAME_LEN);
        let user = User::new(UserId::new(1), username.clone()).unwrap();
        assert_eq!(user.username(), username);
    }

    #[test]
    fn test_username_over_max_length() {
        let result = User::new(UserId::new(1), "a".repeat(MAX_USERNAME_LEN + 1));
        assert_eq!(
            result.unwrap_err(),
            DomainError::FieldTooLong {
                field: "username",
                len: MAX_USERNAME_LEN + 1,
                max: MAX_USERNAME_LEN,
            }
        );
    }

    #[test]
    fn test_username_length_counted_in_characters() {
        // 60 two-byte characters, under the cap even though over it in bytes.
        let username = "é".repeat(60);
        let user = User::new(UserId::new(1), username.clone()).unwrap();
        assert_eq!(user.username(), username);

        // An over-long name reports its character count, not its byte count.
        let result = User::new(UserId::new(1), "é".repeat(MAX_USERNAME_LEN + 1));
        assert_eq!(
            result.unwrap_err(),
            DomainError::FieldTooLong {
                field: "username",
                len: MAX_USERNAME_LEN + 1,
                max: MAX_USERNAME_LEN,
            }
        );
    }
}
