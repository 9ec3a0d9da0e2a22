use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Post, SocialPost};

/// User entity - owns its posts by value.
///
/// Posts and social posts are embedded in the user record; every mutation
/// of either collection rewrites the whole record through the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub posts: Vec<Post>,
    pub social_posts: Vec<SocialPost>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with generated ID and timestamps.
    ///
    /// The username is case-folded here; lookups elsewhere assume stored
    /// usernames are already lowercase.
    pub fn new(username: &str, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username: username.to_lowercase(),
            password_hash,
            posts: Vec::new(),
            social_posts: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
