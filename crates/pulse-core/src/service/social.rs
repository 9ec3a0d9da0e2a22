//! Social post and comment operations.

use uuid::Uuid;

use crate::domain::{Comment, SocialPost};
use crate::error::DomainError;
use crate::project::{CommentView, Liked, PostCommentsView, SocialPostView};
use crate::service::posts::require_title;
use crate::service::search::{rank, SearchFields};
use crate::service::{PostKind, PostService, Requester};

impl PostService {
    /// Create a social post owned by the requester. A missing image falls
    /// back to the placeholder.
    pub async fn create_social_post(
        &self,
        requester: &Requester,
        title: &str,
        text: &str,
        image: Option<String>,
    ) -> Result<(), DomainError> {
        if title.is_empty() || text.is_empty() {
            return Err(DomainError::Validation(
                "Send all required fields: post, post.title, post.text".to_string(),
            ));
        }

        if self.locator().locate(PostKind::Social, title).await?.is_some() {
            return Err(DomainError::Conflict(
                "A social post with this title already exists".to_string(),
            ));
        }

        let _guard = self.lock_owner(requester.id).await;
        let mut owner = self
            .store()
            .find_by_id(requester.id)
            .await?
            .ok_or(DomainError::Unauthorized)?;

        if !self.index().try_reserve(PostKind::Social, title, owner.id) {
            return Err(DomainError::Conflict(
                "A social post with this title already exists".to_string(),
            ));
        }

        owner.social_posts.push(SocialPost::new(
            title.to_string(),
            text.to_string(),
            image,
            requester.username.clone(),
        ));
        if let Err(e) = self.store().save(owner).await {
            self.index().remove(PostKind::Social, title);
            return Err(e.into());
        }
        Ok(())
    }

    /// Like a social post. Liking twice is a conflict.
    pub async fn like_social_post(
        &self,
        requester: &Requester,
        title: &str,
    ) -> Result<(), DomainError> {
        require_title(title)?;
        let mut locked = self
            .locate_for_update(PostKind::Social, title)
            .await?
            .ok_or_else(|| DomainError::NotFound("Social Post not found".to_string()))?;

        if !locked.owner.social_posts[locked.position].add_like(&requester.username) {
            return Err(DomainError::Conflict(
                "User already likes this post".to_string(),
            ));
        }
        self.store().save(locked.owner).await?;
        Ok(())
    }

    /// Whether the requester has liked a social post.
    pub async fn user_liked_social_post(
        &self,
        requester: &Requester,
        title: &str,
    ) -> Result<Liked, DomainError> {
        require_title(title)?;
        let located = self
            .locator()
            .locate(PostKind::Social, title)
            .await?
            .ok_or_else(|| DomainError::NotFound("Social Post not found".to_string()))?;
        let post = &located.owner.social_posts[located.position];
        Ok(Liked {
            liked: post.likes.iter().any(|l| l == &requester.username),
        })
    }

    /// One social post by title.
    pub async fn get_social_post(&self, title: &str) -> Result<SocialPostView, DomainError> {
        require_title(title)?;
        let located = self
            .locator()
            .locate(PostKind::Social, title)
            .await?
            .ok_or_else(|| DomainError::NotFound("Social Post not found".to_string()))?;
        Ok(SocialPostView::from(
            &located.owner.social_posts[located.position],
        ))
    }

    /// All social posts of one user.
    pub async fn user_social_posts(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<SocialPostView>, DomainError> {
        let user = self
            .store()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("User not found".to_string()))?;
        Ok(user.social_posts.iter().map(SocialPostView::from).collect())
    }

    /// Every social post across all users, optionally narrowed by a
    /// title query.
    pub async fn all_social_posts(
        &self,
        query: Option<&str>,
    ) -> Result<Vec<SocialPostView>, DomainError> {
        let posts = self.collect_social_posts().await?;
        let posts = match query {
            Some(q) if !q.is_empty() => rank(posts, q, SearchFields::TitleOnly),
            _ => posts,
        };
        Ok(posts.iter().map(SocialPostView::from).collect())
    }

    /// Fuzzy search over social post titles and bodies.
    pub async fn search_social_posts(
        &self,
        query: &str,
    ) -> Result<Vec<SocialPostView>, DomainError> {
        if query.is_empty() {
            return Err(DomainError::Validation("search_query is required".to_string()));
        }
        let posts = rank(
            self.collect_social_posts().await?,
            query,
            SearchFields::TitleAndText,
        );
        Ok(posts.iter().map(SocialPostView::from).collect())
    }

    /// Delete a social post. Only its owner may do so.
    pub async fn delete_social_post(
        &self,
        requester: &Requester,
        title: &str,
    ) -> Result<(), DomainError> {
        require_title(title)?;
        let mut locked = self
            .locate_for_update(PostKind::Social, title)
            .await?
            .ok_or_else(|| DomainError::NotFound("Social Post not found".to_string()))?;

        if locked.owner.id != requester.id {
            return Err(DomainError::Forbidden(
                "Only the post owner can delete this post".to_string(),
            ));
        }
        locked.owner.social_posts.remove(locked.position);
        self.store().save(locked.owner).await?;
        self.index().remove(PostKind::Social, title);
        Ok(())
    }

    /// Comment on a social post, wherever it lives.
    pub async fn create_comment(
        &self,
        requester: &Requester,
        text: &str,
        original_post_title: &str,
    ) -> Result<(), DomainError> {
        if text.is_empty() || original_post_title.is_empty() {
            return Err(DomainError::Validation(
                "Send all required fields: comment.text, original_post_title".to_string(),
            ));
        }
        let mut locked = self
            .locate_for_update(PostKind::Social, original_post_title)
            .await?
            .ok_or_else(|| {
                DomainError::NotFound("Couldn't find original social post".to_string())
            })?;

        locked.owner.social_posts[locked.position]
            .comments
            .push(Comment::new(text.to_string(), requester.username.clone()));
        self.store().save(locked.owner).await?;
        Ok(())
    }

    /// Like a comment, addressed by post title and comment text. The
    /// first text match is the target; liking twice is a conflict.
    pub async fn like_comment(
        &self,
        requester: &Requester,
        original_post_title: &str,
        comment_text: &str,
    ) -> Result<(), DomainError> {
        require_comment_ref(original_post_title, comment_text)?;
        let mut locked = self
            .locate_for_update(PostKind::Social, original_post_title)
            .await?
            .ok_or_else(|| DomainError::NotFound("Social Post not found".to_string()))?;

        let post = &mut locked.owner.social_posts[locked.position];
        let comment = post
            .comments
            .iter_mut()
            .find(|c| c.text == comment_text)
            .ok_or_else(|| DomainError::NotFound("Comment not found".to_string()))?;
        if !comment.add_like(&requester.username) {
            return Err(DomainError::Conflict(
                "User has already liked this comment".to_string(),
            ));
        }
        self.store().save(locked.owner).await?;
        Ok(())
    }

    /// Whether the requester has liked a comment.
    pub async fn user_liked_comment(
        &self,
        requester: &Requester,
        original_post_title: &str,
        comment_text: &str,
    ) -> Result<Liked, DomainError> {
        require_comment_ref(original_post_title, comment_text)?;
        let located = self
            .locator()
            .locate(PostKind::Social, original_post_title)
            .await?
            .ok_or_else(|| DomainError::NotFound("Comment not found".to_string()))?;
        let comment = located.owner.social_posts[located.position]
            .comments
            .iter()
            .find(|c| c.text == comment_text)
            .ok_or_else(|| DomainError::NotFound("Comment not found".to_string()))?;
        Ok(Liked {
            liked: comment.likes.iter().any(|l| l == &requester.username),
        })
    }

    /// Delete a comment from the named owner's post. The requester must
    /// be the comment author or the post owner.
    pub async fn delete_comment(
        &self,
        requester: &Requester,
        original_post_username: &str,
        original_post_title: &str,
        comment_text: &str,
    ) -> Result<(), DomainError> {
        if original_post_username.is_empty() {
            return Err(DomainError::Validation(
                "original_post_username is required".to_string(),
            ));
        }
        require_comment_ref(original_post_title, comment_text)?;

        // The owner is named by the caller, so no global scan: read that
        // record directly and pin it.
        let owner_id = self
            .store()
            .find_by_username(&original_post_username.to_lowercase())
            .await?
            .ok_or_else(|| DomainError::NotFound("User not found".to_string()))?
            .id;

        let _guard = self.lock_owner(owner_id).await;
        let mut owner = self
            .store()
            .find_by_id(owner_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("User not found".to_string()))?;

        let post = owner
            .social_posts
            .iter_mut()
            .find(|p| p.title == original_post_title)
            .ok_or_else(|| DomainError::NotFound("Social Post not found".to_string()))?;
        let target = post
            .comments
            .iter()
            .position(|c| c.text == comment_text)
            .ok_or_else(|| DomainError::NotFound("Comment not found".to_string()))?;

        let author = &post.comments[target].username;
        if requester.username != *author && requester.username != post.username {
            return Err(DomainError::Forbidden(
                "Only the comment author or the post owner can delete this comment".to_string(),
            ));
        }

        post.comments.remove(target);
        self.store().save(owner).await?;
        Ok(())
    }

    /// A post's comments, with like sets collapsed to counts.
    pub async fn post_comments(&self, title: &str) -> Result<PostCommentsView, DomainError> {
        require_title(title)?;
        let located = self
            .locator()
            .locate(PostKind::Social, title)
            .await?
            .ok_or_else(|| DomainError::NotFound("Post not found".to_string()))?;
        let post = &located.owner.social_posts[located.position];
        Ok(PostCommentsView {
            post_title: post.title.clone(),
            comments: post.comments.iter().map(CommentView::from).collect(),
        })
    }

    async fn collect_social_posts(&self) -> Result<Vec<SocialPost>, DomainError> {
        let users = self.store().find_all().await?;
        Ok(users.into_iter().flat_map(|u| u.social_posts).collect())
    }
}

fn require_comment_ref(title: &str, comment_text: &str) -> Result<(), DomainError> {
    if title.is_empty() || comment_text.is_empty() {
        return Err(DomainError::Validation(
            "Send all required fields: original_post_title, comment_text".to_string(),
        ));
    }
    Ok(())
}
