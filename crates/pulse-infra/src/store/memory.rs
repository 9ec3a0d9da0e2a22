//! In-memory user store - the default backing collection.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use pulse_core::domain::User;
use pulse_core::error::StoreError;
use pulse_core::ports::UserStore;

/// In-memory document collection over an async RwLock.
///
/// Records keep insertion order, which is the scan order the locator
/// exposes. Note: data is lost on process restart.
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.users.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn exists(&self, username: &str) -> Result<bool, StoreError> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .any(|u| u.username == username))
    }

    async fn save(&self, mut user: User) -> Result<User, StoreError> {
        user.updated_at = Utc::now();
        let mut users = self.users.write().await;
        match users.iter_mut().find(|u| u.id == user.id) {
            Some(slot) => *slot = user.clone(),
            None => users.push(user.clone()),
        }
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_then_find() {
        let store = InMemoryUserStore::new();
        let user = User::new("Alice", "hash".to_string());
        let id = user.id;
        store.save(user).await.unwrap();

        let found = store.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.username, "alice");
        assert!(store.exists("alice").await.unwrap());
        assert!(!store.exists("bob").await.unwrap());
    }

    #[tokio::test]
    async fn save_overwrites_whole_record() {
        let store = InMemoryUserStore::new();
        let mut user = User::new("alice", "hash".to_string());
        let id = user.id;
        store.save(user.clone()).await.unwrap();

        user.password_hash = "new-hash".to_string();
        store.save(user).await.unwrap();

        assert_eq!(store.find_all().await.unwrap().len(), 1);
        let found = store.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.password_hash, "new-hash");
    }

    #[tokio::test]
    async fn find_all_keeps_insertion_order() {
        let store = InMemoryUserStore::new();
        for name in ["first", "second", "third"] {
            store.save(User::new(name, "hash".to_string())).await.unwrap();
        }

        let names: Vec<String> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.username)
            .collect();
        assert_eq!(names, ["first", "second", "third"]);
    }
}
