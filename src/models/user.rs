use serde::{Deserialize, Serialize};

/// A user record from the seeded directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// Immutable, ordered collection of users, constructed once at startup and
/// injected into `AppState`. Ids are unique and stable for the process
/// lifetime; nothing mutates the directory after construction.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        debug_assert!(
            {
                let mut ids: Vec<u64> = users.iter().map(|u| u.id).collect();
                ids.sort_unstable();
                ids.windows(2).all(|w| w[0] != w[1])
            },
            "user ids must be unique"
        );
        Self { users }
    }

    /// The fixed demo dataset the service ships with.
    pub fn seeded() -> Self {
        Self::new(vec![
            User {
                id: 1,
                name: "John Doe".to_string(),
                email: "john@example.com".to_string(),
            },
            User {
                id: 2,
                name: "Jane Smith".to_string(),
                email: "jane@example.com".to_string(),
            },
            User {
                id: 3,
                name: "Bob Johnson".to_string(),
                email: "bob@example.com".to_string(),
            },
        ])
    }

    /// All users in insertion order.
    pub fn all(&self) -> &[User] {
        &self.users
    }

    /// Exact-match lookup by id.
    pub fn get(&self, id: u64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
