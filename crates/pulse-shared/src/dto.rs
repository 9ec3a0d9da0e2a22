//! Data Transfer Objects - request/response types for the API.
//!
//! Required fields are `Option` so that a missing field reaches the
//! validation layer and comes back as a `{message}` error instead of a
//! deserializer rejection. Parameter names (`post_title`, `search_query`,
//! `original_post_*`, `comment_text`) are the wire contract.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Response containing an authentication token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// Response for the session status probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthStatusResponse {
    pub authenticated: bool,
}

/// Body of `POST /create_post`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub post: Option<NewPostBody>,
}

/// The embedded post payload. The two flags stay raw JSON values so the
/// strict boolean parser can accept `true` or `"true"` and reject the
/// rest with a proper validation message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPostBody {
    pub title: Option<String>,
    pub text: Option<String>,
    #[serde(rename = "isVolunteer")]
    pub is_volunteer: Option<Value>,
    #[serde(rename = "isFundraiser")]
    pub is_fundraiser: Option<Value>,
}

/// Body of `POST /create_social_post`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSocialPostRequest {
    pub post: Option<NewSocialPostBody>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewSocialPostBody {
    pub title: Option<String>,
    pub text: Option<String>,
    pub image: Option<String>,
}

/// Any request addressing a post by title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostTitleRequest {
    pub post_title: Option<String>,
}

/// Search body and the optional `?search_query` filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub search_query: Option<String>,
}

/// Optional user scope for the `get_user_*` listings; defaults to the
/// requester.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserScopeQuery {
    pub user_id: Option<Uuid>,
}

/// Body of `POST /create_comment`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub comment: Option<NewCommentBody>,
    pub original_post_title: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCommentBody {
    pub text: Option<String>,
}

/// A comment addressed by its post's title and its text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRef {
    pub original_post_title: Option<String>,
    pub comment_text: Option<String>,
}

/// Body of `DELETE /delete_comment`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteCommentRequest {
    pub original_post_username: Option<String>,
    pub original_post_title: Option<String>,
    pub comment_text: Option<String>,
}
