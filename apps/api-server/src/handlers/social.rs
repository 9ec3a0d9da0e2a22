//! Social post and comment route handlers.

use actix_web::{HttpResponse, web};

use pulse_shared::MessageResponse;
use pulse_shared::dto::{
    CommentRef, CreateCommentRequest, CreateSocialPostRequest, DeleteCommentRequest,
    PostTitleRequest, SearchRequest, UserScopeQuery,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn title_of(req: &PostTitleRequest) -> &str {
    req.post_title.as_deref().unwrap_or("")
}

/// POST /create_social_post
pub async fn create_social_post(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateSocialPostRequest>,
) -> AppResult<HttpResponse> {
    let post = body.into_inner().post.unwrap_or_default();
    state
        .posts
        .create_social_post(
            &identity.requester(),
            post.title.as_deref().unwrap_or(""),
            post.text.as_deref().unwrap_or(""),
            post.image,
        )
        .await?;
    Ok(HttpResponse::Created().json(MessageResponse::new("Social Post created successfully")))
}

/// POST /like_social_post
pub async fn like_social_post(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<PostTitleRequest>,
) -> AppResult<HttpResponse> {
    state
        .posts
        .like_social_post(&identity.requester(), title_of(&body))
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Liked successfully")))
}

/// POST /user_liked_social_post - whether the caller liked a post.
pub async fn user_liked_social_post(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<PostTitleRequest>,
) -> AppResult<HttpResponse> {
    let liked = state
        .posts
        .user_liked_social_post(&identity.requester(), title_of(&body))
        .await?;
    Ok(HttpResponse::Ok().json(liked))
}

/// GET /get_user_social_posts - the caller's social posts, or another
/// user's via `?user_id`.
pub async fn get_user_social_posts(
    state: web::Data<AppState>,
    identity: Identity,
    query: web::Query<UserScopeQuery>,
) -> AppResult<HttpResponse> {
    let user_id = query.user_id.unwrap_or(identity.user_id);
    let posts = state.posts.user_social_posts(user_id).await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// POST /delete_social_post
pub async fn delete_social_post(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<PostTitleRequest>,
) -> AppResult<HttpResponse> {
    state
        .posts
        .delete_social_post(&identity.requester(), title_of(&body))
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Social Post deleted successfully")))
}

/// GET /get_all_social_posts[?search_query]
pub async fn get_all_social_posts(
    state: web::Data<AppState>,
    _identity: Identity,
    query: web::Query<SearchRequest>,
) -> AppResult<HttpResponse> {
    let posts = state
        .posts
        .all_social_posts(query.search_query.as_deref())
        .await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// POST /get_all_social_posts - same listing, query in the body.
pub async fn get_all_social_posts_body(
    state: web::Data<AppState>,
    _identity: Identity,
    body: web::Json<SearchRequest>,
) -> AppResult<HttpResponse> {
    let posts = state
        .posts
        .all_social_posts(body.search_query.as_deref())
        .await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// POST /search_social_posts
pub async fn search_social_posts(
    state: web::Data<AppState>,
    _identity: Identity,
    body: web::Json<SearchRequest>,
) -> AppResult<HttpResponse> {
    let posts = state
        .posts
        .search_social_posts(body.search_query.as_deref().unwrap_or(""))
        .await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// POST /get_social_post
pub async fn get_social_post(
    state: web::Data<AppState>,
    _identity: Identity,
    body: web::Json<PostTitleRequest>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get_social_post(title_of(&body)).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /create_comment
pub async fn create_comment(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateCommentRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let text = req
        .comment
        .unwrap_or_default()
        .text
        .unwrap_or_default();
    state
        .posts
        .create_comment(
            &identity.requester(),
            &text,
            req.original_post_title.as_deref().unwrap_or(""),
        )
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Comment added.")))
}

/// POST /like_comment
pub async fn like_comment(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CommentRef>,
) -> AppResult<HttpResponse> {
    state
        .posts
        .like_comment(
            &identity.requester(),
            body.original_post_title.as_deref().unwrap_or(""),
            body.comment_text.as_deref().unwrap_or(""),
        )
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Comment liked successfully")))
}

/// GET /user_liked_comment - whether the caller liked a comment.
pub async fn user_liked_comment(
    state: web::Data<AppState>,
    identity: Identity,
    query: web::Query<CommentRef>,
) -> AppResult<HttpResponse> {
    let liked = state
        .posts
        .user_liked_comment(
            &identity.requester(),
            query.original_post_title.as_deref().unwrap_or(""),
            query.comment_text.as_deref().unwrap_or(""),
        )
        .await?;
    Ok(HttpResponse::Ok().json(liked))
}

/// DELETE /delete_comment
pub async fn delete_comment(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<DeleteCommentRequest>,
) -> AppResult<HttpResponse> {
    state
        .posts
        .delete_comment(
            &identity.requester(),
            body.original_post_username.as_deref().unwrap_or(""),
            body.original_post_title.as_deref().unwrap_or(""),
            body.comment_text.as_deref().unwrap_or(""),
        )
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Comment deleted.")))
}

/// GET /get_post_comments
pub async fn get_post_comments(
    state: web::Data<AppState>,
    _identity: Identity,
    query: web::Query<PostTitleRequest>,
) -> AppResult<HttpResponse> {
    let comments = state
        .posts
        .post_comments(query.post_title.as_deref().unwrap_or(""))
        .await?;
    Ok(HttpResponse::Ok().json(comments))
}
