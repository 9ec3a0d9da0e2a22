use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Image shown for social posts created without one.
pub const DEFAULT_SOCIAL_IMAGE: &str =
    "https://cdn.tennisbowling.com/hLSUfRvOqjopxuGT-LqxsXwYukIBpkgroQDJKpV4.jpg";

/// Post entity - a volunteer/fundraising listing embedded in its owner.
///
/// The title acts as the de facto key: it is unique per collection kind
/// and is what every cross-user operation resolves. `num_volunteers` and
/// `num_donors` mirror the membership lists at all times; the paired
/// mutators below are the only way the lists change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub title: String,
    pub text: String,
    /// Denormalized owner name, matching the owning user record.
    pub username: String,
    pub is_volunteer: bool,
    pub is_fundraiser: bool,
    pub volunteers: Vec<String>,
    pub donors: Vec<String>,
    pub num_volunteers: u32,
    pub num_donors: u32,
}

impl Post {
    pub fn new(
        title: String,
        text: String,
        username: String,
        is_volunteer: bool,
        is_fundraiser: bool,
    ) -> Self {
        Self {
            title,
            text,
            username,
            is_volunteer,
            is_fundraiser,
            volunteers: Vec::new(),
            donors: Vec::new(),
            num_volunteers: 0,
            num_donors: 0,
        }
    }

    /// Add a volunteer, keeping the count in step with the list.
    /// Returns false when the user already volunteers.
    pub fn add_volunteer(&mut self, username: &str) -> bool {
        if self.volunteers.iter().any(|v| v == username) {
            return false;
        }
        self.volunteers.push(username.to_string());
        self.num_volunteers = self.volunteers.len() as u32;
        true
    }

    /// Add a donor, keeping the count in step with the list.
    /// Returns false when the user already donates.
    pub fn add_donor(&mut self, username: &str) -> bool {
        if self.donors.iter().any(|d| d == username) {
            return false;
        }
        self.donors.push(username.to_string());
        self.num_donors = self.donors.len() as u32;
        true
    }
}

/// SocialPost entity - a like/comment-bearing feed entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialPost {
    pub title: String,
    pub text: String,
    pub image: String,
    pub username: String,
    pub likes: Vec<String>,
    pub comments: Vec<Comment>,
}

impl SocialPost {
    pub fn new(title: String, text: String, image: Option<String>, username: String) -> Self {
        Self {
            title,
            text,
            image: image.unwrap_or_else(|| DEFAULT_SOCIAL_IMAGE.to_string()),
            username,
            likes: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Record a like. Returns false when the user already liked the post.
    pub fn add_like(&mut self, username: &str) -> bool {
        if self.likes.iter().any(|l| l == username) {
            return false;
        }
        self.likes.push(username.to_string());
        true
    }
}

/// Comment on a social post.
///
/// Comments carry a generated id: the wire contract addresses them by
/// text, but two comments with identical text stay distinguishable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub text: String,
    pub username: String,
    pub likes: Vec<String>,
}

impl Comment {
    pub fn new(text: String, username: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            username,
            likes: Vec::new(),
        }
    }

    /// Record a like. Returns false when the user already liked the comment.
    pub fn add_like(&mut self, username: &str) -> bool {
        if self.likes.iter().any(|l| l == username) {
            return false;
        }
        self.likes.push(username.to_string());
        true
    }
}
