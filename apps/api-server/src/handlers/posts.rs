//! Post route handlers - thin shims over the mutation engine.

use actix_web::{HttpResponse, web};

use pulse_shared::MessageResponse;
use pulse_shared::dto::{CreatePostRequest, PostTitleRequest, SearchRequest, UserScopeQuery};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn title_of(req: &PostTitleRequest) -> &str {
    req.post_title.as_deref().unwrap_or("")
}

/// POST /create_post
pub async fn create_post(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let post = body.into_inner().post.unwrap_or_default();
    state
        .posts
        .create_post(
            &identity.requester(),
            post.title.as_deref().unwrap_or(""),
            post.text.as_deref().unwrap_or(""),
            post.is_volunteer.as_ref(),
            post.is_fundraiser.as_ref(),
        )
        .await?;
    Ok(HttpResponse::Created().json(MessageResponse::new("Post created successfully")))
}

/// POST /volunteer
pub async fn volunteer(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<PostTitleRequest>,
) -> AppResult<HttpResponse> {
    state
        .posts
        .volunteer(&identity.requester(), title_of(&body))
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Volunteered successfully")))
}

/// POST /donate
pub async fn donate(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<PostTitleRequest>,
) -> AppResult<HttpResponse> {
    state
        .posts
        .donate(&identity.requester(), title_of(&body))
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Donated successfully")))
}

/// POST /user_status - whether the caller volunteers for / donates to a post.
pub async fn user_status(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<PostTitleRequest>,
) -> AppResult<HttpResponse> {
    let status = state
        .posts
        .user_status(&identity.requester(), title_of(&body))
        .await?;
    Ok(HttpResponse::Ok().json(status))
}

/// GET /get_user_posts - the caller's posts, or another user's via `?user_id`.
pub async fn get_user_posts(
    state: web::Data<AppState>,
    identity: Identity,
    query: web::Query<UserScopeQuery>,
) -> AppResult<HttpResponse> {
    let user_id = query.user_id.unwrap_or(identity.user_id);
    let posts = state.posts.user_posts(user_id).await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// POST /delete_post
pub async fn delete_post(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<PostTitleRequest>,
) -> AppResult<HttpResponse> {
    state
        .posts
        .delete_post(&identity.requester(), title_of(&body))
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Post deleted successfully")))
}

/// GET /get_all_posts[?search_query]
pub async fn get_all_posts(
    state: web::Data<AppState>,
    _identity: Identity,
    query: web::Query<SearchRequest>,
) -> AppResult<HttpResponse> {
    let posts = state.posts.all_posts(query.search_query.as_deref()).await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// POST /search_posts
pub async fn search_posts(
    state: web::Data<AppState>,
    _identity: Identity,
    body: web::Json<SearchRequest>,
) -> AppResult<HttpResponse> {
    let posts = state
        .posts
        .search_posts(body.search_query.as_deref().unwrap_or(""))
        .await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// POST /get_post
pub async fn get_post(
    state: web::Data<AppState>,
    _identity: Identity,
    body: web::Json<PostTitleRequest>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get_post(title_of(&body)).await?;
    Ok(HttpResponse::Ok().json(post))
}
