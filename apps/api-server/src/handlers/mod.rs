//! HTTP handlers and route configuration.

mod auth;
mod health;
mod posts;
mod social;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Session
        .route("/", web::get().to(auth::session_status))
        .route("/health", web::get().to(health::health_check))
        .route("/register", web::post().to(auth::register))
        .route("/login", web::post().to(auth::login))
        .route("/logout", web::delete().to(auth::logout))
        .route("/get_user", web::get().to(auth::get_user))
        // Posts
        .route("/create_post", web::post().to(posts::create_post))
        .route("/volunteer", web::post().to(posts::volunteer))
        .route("/donate", web::post().to(posts::donate))
        .route("/user_status", web::post().to(posts::user_status))
        .route("/get_user_posts", web::get().to(posts::get_user_posts))
        .route("/delete_post", web::post().to(posts::delete_post))
        .route("/get_all_posts", web::get().to(posts::get_all_posts))
        .route("/search_posts", web::post().to(posts::search_posts))
        .route("/get_post", web::post().to(posts::get_post))
        // Social posts
        .route("/create_social_post", web::post().to(social::create_social_post))
        .route("/like_social_post", web::post().to(social::like_social_post))
        .route(
            "/user_liked_social_post",
            web::post().to(social::user_liked_social_post),
        )
        .route(
            "/get_user_social_posts",
            web::get().to(social::get_user_social_posts),
        )
        .route("/delete_social_post", web::post().to(social::delete_social_post))
        .route("/get_all_social_posts", web::get().to(social::get_all_social_posts))
        .route(
            "/get_all_social_posts",
            web::post().to(social::get_all_social_posts_body),
        )
        .route("/search_social_posts", web::post().to(social::search_social_posts))
        .route("/get_social_post", web::post().to(social::get_social_post))
        // Comments
        .route("/create_comment", web::post().to(social::create_comment))
        .route("/like_comment", web::post().to(social::like_comment))
        .route("/user_liked_comment", web::get().to(social::user_liked_comment))
        .route("/delete_comment", web::delete().to(social::delete_comment))
        .route("/get_post_comments", web::get().to(social::get_post_comments));
}
