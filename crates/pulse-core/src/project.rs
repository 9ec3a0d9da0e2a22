//! Response projections - the shapes echoed back to callers.
//!
//! Membership lists are internal bookkeeping; what leaves the system is
//! counts (plus the per-requester status endpoints). Everything else is
//! passed through as stored.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{Comment, Post, SocialPost, User};

/// A post as exposed to callers: counts instead of membership lists.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub title: String,
    pub text: String,
    pub username: String,
    pub is_volunteer: bool,
    pub is_fundraiser: bool,
    pub num_volunteers: u32,
    pub num_donors: u32,
}

impl From<&Post> for PostView {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            text: post.text.clone(),
            username: post.username.clone(),
            is_volunteer: post.is_volunteer,
            is_fundraiser: post.is_fundraiser,
            num_volunteers: post.num_volunteers,
            num_donors: post.num_donors,
        }
    }
}

/// A social post with likes and comments collapsed to counts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialPostView {
    pub title: String,
    pub text: String,
    pub image: String,
    pub username: String,
    pub like_count: usize,
    pub comment_count: usize,
}

impl From<&SocialPost> for SocialPostView {
    fn from(post: &SocialPost) -> Self {
        Self {
            title: post.title.clone(),
            text: post.text.clone(),
            image: post.image.clone(),
            username: post.username.clone(),
            like_count: post.likes.len(),
            comment_count: post.comments.len(),
        }
    }
}

/// A comment with its like set collapsed to a count.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id: Uuid,
    pub text: String,
    pub username: String,
    pub like_count: usize,
}

impl From<&Comment> for CommentView {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id,
            text: comment.text.clone(),
            username: comment.username.clone(),
            like_count: comment.likes.len(),
        }
    }
}

/// The comment listing of one social post.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCommentsView {
    pub post_title: String,
    pub comments: Vec<CommentView>,
}

/// Per-requester standing on a post.
#[derive(Debug, Clone, Serialize)]
pub struct UserStatus {
    pub donating: bool,
    pub volunteering: bool,
}

/// Per-requester standing on a social post or comment.
#[derive(Debug, Clone, Serialize)]
pub struct Liked {
    pub liked: bool,
}

/// A user's public information. The password hash never leaves the store
/// layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            created_at: user.created_at,
        }
    }
}
