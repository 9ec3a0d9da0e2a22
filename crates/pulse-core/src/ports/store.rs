use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::User;
use crate::error::StoreError;

/// The persistent collection of user records.
///
/// `save` is the only mutation primitive: it persists the entire record,
/// overwriting prior state (last-writer-wins, no concurrency token).
/// Every higher-level operation is a read-modify-write through it, which
/// is why the mutation engine serializes writers per owner.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All user records in insertion order. The locator's scan order
    /// contract depends on this ordering being stable.
    async fn find_all(&self) -> Result<Vec<User>, StoreError>;

    /// Find a user by their unique ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Find a user by their (case-folded) username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Whether a username is already taken.
    async fn exists(&self, username: &str) -> Result<bool, StoreError>;

    /// Persist a user record, whole.
    async fn save(&self, user: User) -> Result<User, StoreError>;
}
