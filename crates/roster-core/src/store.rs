//! In-memory user storage.
//!
//! All reads and writes go through a single `RwLock`, so id assignment and
//! mutations are serialized across concurrent requests.

use std::collections::HashSet;

use tokio::sync::RwLock;

use crate::error::AppError;
use crate::models::{User, UserInput};

#[derive(Debug)]
struct Inner {
    /// Insertion order is the listing order.
    users: Vec<User>,
    next_id: i64,
}

impl Inner {
    fn position(&self, id: i64) -> Option<usize> {
        self.users.iter().position(|u| u.id == id)
    }
}

/// Authoritative collection of users for the lifetime of the process.
#[derive(Debug)]
pub struct UserStore {
    inner: RwLock<Inner>,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    /// Create an empty store. The first insert gets id 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                users: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a store pre-populated with `users`, keeping their ids and order.
    ///
    /// Fails if two records share an id.
    pub fn with_users(users: Vec<User>) -> Result<Self, AppError> {
        let mut seen = HashSet::with_capacity(users.len());
        for user in &users {
            if !seen.insert(user.id) {
                return Err(AppError::Config(format!(
                    "duplicate user id {} in seed data",
                    user.id
                )));
            }
        }

        let next_id = match users.iter().map(|u| u.id).max() {
            None => 1,
            Some(max) => max.checked_add(1).ok_or_else(|| {
                AppError::Config(format!("seed user id {max} leaves no room for new ids"))
            })?,
        };
        Ok(Self {
            inner: RwLock::new(Inner { users, next_id }),
        })
    }

    /// The two sample users the service starts with.
    pub fn demo() -> Self {
        let users = vec![
            User {
                id: 1,
                name: "John Doe".to_string(),
                email: "john.doe@example.com".to_string(),
            },
            User {
                id: 2,
                name: "Jane Smith".to_string(),
                email: "jane.smith@example.com".to_string(),
            },
        ];
        Self {
            inner: RwLock::new(Inner { users, next_id: 3 }),
        }
    }

    /// Snapshot of every user in insertion order.
    pub async fn list(&self) -> Vec<User> {
        self.inner.read().await.users.clone()
    }

    pub async fn find_by_id(&self, id: i64) -> Option<User> {
        let inner = self.inner.read().await;
        inner.users.iter().find(|u| u.id == id).cloned()
    }

    /// Append a new user and return it with its assigned id.
    ///
    /// Ids only ever grow; deleting the newest user does not free its id.
    pub async fn insert(&self, input: UserInput) -> User {
        let mut inner = self.inner.write().await;
        let user = User {
            id: inner.next_id,
            name: input.name,
            email: input.email,
        };
        inner.next_id += 1;
        inner.users.push(user.clone());
        tracing::debug!(id = user.id, "User inserted");
        user
    }

    /// Overwrite name and email of an existing user in place.
    ///
    /// Returns `None` without touching the store when `id` is unknown.
    pub async fn update(&self, id: i64, input: UserInput) -> Option<User> {
        let mut inner = self.inner.write().await;
        let idx = inner.position(id)?;
        let user = &mut inner.users[idx];
        user.name = input.name;
        user.email = input.email;
        Some(user.clone())
    }

    /// Remove a user. Returns false if there was nothing to remove.
    pub async fn remove(&self, id: i64) -> bool {
        let mut inner = self.inner.write().await;
        match inner.position(id) {
            Some(idx) => {
                inner.users.remove(idx);
                tracing::debug!(id, "User removed");
                true
            }
            None => false,
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
