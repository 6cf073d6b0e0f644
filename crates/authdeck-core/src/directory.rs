//! In-memory user directory.
//!
//! This stands in for a real user store: an ordered list of records with the
//! email as the unique key. Records are created on sign-up and never updated
//! or deleted. Passwords are stored in plaintext because this is a demo with
//! no real credential handling.

use crate::error::AuthError;

/// A registered identity and its credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub name: String,
    /// Unique key. Uniqueness is enforced at creation time only.
    pub email: String,
    /// Plaintext, demo-only.
    pub password: String,
}

/// Ordered in-memory list of user records.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    records: Vec<UserRecord>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory seeded with a single record.
    pub fn seeded(record: UserRecord) -> Self {
        Self {
            records: vec![record],
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Finds a record by exact (email, password) match.
    pub fn find_by_credentials(&self, email: &str, password: &str) -> Option<&UserRecord> {
        self.records
            .iter()
            .find(|r| r.email == email && r.password == password)
    }

    /// Finds a record by email.
    pub fn find_by_email(&self, email: &str) -> Option<&UserRecord> {
        self.records.iter().find(|r| r.email == email)
    }

    /// Appends a record, enforcing email uniqueness.
    pub fn insert(&mut self, record: UserRecord) -> Result<(), AuthError> {
        if self.find_by_email(&record.email).is_some() {
            return Err(AuthError::Conflict(
                "An account with this email already exists".to_string(),
            ));
        }
        self.records.push(record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> UserRecord {
        UserRecord {
            name: "Demo User".to_string(),
            email: "demo@example.com".to_string(),
            password: "demo123".to_string(),
        }
    }

    #[test]
    fn test_seeded_directory_has_one_record() {
        let dir = UserDirectory::seeded(demo());
        assert_eq!(dir.len(), 1);
        assert!(dir.find_by_email("demo@example.com").is_some());
    }

    #[test]
    fn test_credential_lookup_requires_exact_match() {
        let dir = UserDirectory::seeded(demo());
        assert!(dir.find_by_credentials("demo@example.com", "demo123").is_some());
        assert!(dir.find_by_credentials("demo@example.com", "wrong").is_none());
        assert!(dir.find_by_credentials("nobody@example.com", "demo123").is_none());
    }

    #[test]
    fn test_insert_rejects_duplicate_email() {
        let mut dir = UserDirectory::seeded(demo());
        let err = dir.insert(demo()).unwrap_err();
        assert!(matches!(err, AuthError::Conflict(_)));
        assert_eq!(dir.len(), 1);
    }

    #[test]
    fn test_insert_appends_in_order() {
        let mut dir = UserDirectory::seeded(demo());
        dir.insert(UserRecord {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "lovelace".to_string(),
        })
        .unwrap();
        assert_eq!(dir.len(), 2);
        assert!(dir.find_by_email("ada@example.com").is_some());
    }
}
