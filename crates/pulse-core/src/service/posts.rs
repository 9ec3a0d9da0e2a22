//! Post operations: create, volunteer, donate, status, delete, lookups.

use serde_json::Value;
use uuid::Uuid;

use crate::domain::Post;
use crate::error::DomainError;
use crate::project::{PostView, UserStatus};
use crate::service::search::{rank, SearchFields};
use crate::service::{PostKind, PostService, Requester};

const REQUIRED_POST_FIELDS: &str =
    "Send all required fields: post, post.title, post.text, post.isVolunteer, post.isFundraiser";

impl PostService {
    /// Create a post owned by the requester. Titles are unique per
    /// collection kind; duplicates are rejected before anything is
    /// written.
    pub async fn create_post(
        &self,
        requester: &Requester,
        title: &str,
        text: &str,
        is_volunteer: Option<&Value>,
        is_fundraiser: Option<&Value>,
    ) -> Result<(), DomainError> {
        if title.is_empty() || text.is_empty() || is_volunteer.is_none() || is_fundraiser.is_none()
        {
            return Err(DomainError::Validation(REQUIRED_POST_FIELDS.to_string()));
        }
        let is_volunteer = parse_flag("post.isVolunteer", is_volunteer)?;
        let is_fundraiser = parse_flag("post.isFundraiser", is_fundraiser)?;

        // A scan-backed check first: it also repairs the index, so the
        // reservation below cannot succeed against a cold index while the
        // store already holds the title.
        if self.locator().locate(PostKind::Posts, title).await?.is_some() {
            return Err(DomainError::Conflict(
                "A post with this title already exists".to_string(),
            ));
        }

        let _guard = self.lock_owner(requester.id).await;
        let mut owner = self
            .store()
            .find_by_id(requester.id)
            .await?
            .ok_or(DomainError::Unauthorized)?;

        if !self.index().try_reserve(PostKind::Posts, title, owner.id) {
            return Err(DomainError::Conflict(
                "A post with this title already exists".to_string(),
            ));
        }

        owner.posts.push(Post::new(
            title.to_string(),
            text.to_string(),
            requester.username.clone(),
            is_volunteer,
            is_fundraiser,
        ));
        if let Err(e) = self.store().save(owner).await {
            // The reservation must not outlive a failed write.
            self.index().remove(PostKind::Posts, title);
            return Err(e.into());
        }
        Ok(())
    }

    /// Volunteer for a post. The membership list and its count move in
    /// the same rewrite.
    pub async fn volunteer(&self, requester: &Requester, title: &str) -> Result<(), DomainError> {
        require_title(title)?;
        let mut locked = self
            .locate_for_update(PostKind::Posts, title)
            .await?
            .ok_or_else(|| DomainError::NotFound("Post not found".to_string()))?;

        if !locked.owner.posts[locked.position].add_volunteer(&requester.username) {
            return Err(DomainError::Conflict(
                "User is already volunteering for this post".to_string(),
            ));
        }
        self.store().save(locked.owner).await?;
        Ok(())
    }

    /// Donate to a post. Symmetric to [`PostService::volunteer`].
    pub async fn donate(&self, requester: &Requester, title: &str) -> Result<(), DomainError> {
        require_title(title)?;
        let mut locked = self
            .locate_for_update(PostKind::Posts, title)
            .await?
            .ok_or_else(|| DomainError::NotFound("Post not found".to_string()))?;

        if !locked.owner.posts[locked.position].add_donor(&requester.username) {
            return Err(DomainError::Conflict(
                "User is already donating for this post".to_string(),
            ));
        }
        self.store().save(locked.owner).await?;
        Ok(())
    }

    /// Whether the requester is donating to / volunteering for a post.
    pub async fn user_status(
        &self,
        requester: &Requester,
        title: &str,
    ) -> Result<UserStatus, DomainError> {
        require_title(title)?;
        let located = self
            .locator()
            .locate(PostKind::Posts, title)
            .await?
            .ok_or_else(|| DomainError::NotFound("Post not found".to_string()))?;
        let post = &located.owner.posts[located.position];
        Ok(UserStatus {
            donating: post.donors.iter().any(|d| d == &requester.username),
            volunteering: post.volunteers.iter().any(|v| v == &requester.username),
        })
    }

    /// One post by title.
    pub async fn get_post(&self, title: &str) -> Result<PostView, DomainError> {
        require_title(title)?;
        let located = self
            .locator()
            .locate(PostKind::Posts, title)
            .await?
            .ok_or_else(|| DomainError::NotFound("Post not found".to_string()))?;
        Ok(PostView::from(&located.owner.posts[located.position]))
    }

    /// All posts of one user.
    pub async fn user_posts(&self, user_id: Uuid) -> Result<Vec<PostView>, DomainError> {
        let user = self
            .store()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("User not found".to_string()))?;
        Ok(user.posts.iter().map(PostView::from).collect())
    }

    /// Every post across all users, optionally narrowed by a title query.
    pub async fn all_posts(&self, query: Option<&str>) -> Result<Vec<PostView>, DomainError> {
        let posts = self.collect_posts().await?;
        let posts = match query {
            Some(q) if !q.is_empty() => rank(posts, q, SearchFields::TitleOnly),
            _ => posts,
        };
        Ok(posts.iter().map(PostView::from).collect())
    }

    /// Fuzzy search over post titles and bodies.
    pub async fn search_posts(&self, query: &str) -> Result<Vec<PostView>, DomainError> {
        if query.is_empty() {
            return Err(DomainError::Validation("search_query is required".to_string()));
        }
        let posts = rank(self.collect_posts().await?, query, SearchFields::TitleAndText);
        Ok(posts.iter().map(PostView::from).collect())
    }

    /// Delete a post. Only its owner may do so.
    pub async fn delete_post(&self, requester: &Requester, title: &str) -> Result<(), DomainError> {
        require_title(title)?;
        let mut locked = self
            .locate_for_update(PostKind::Posts, title)
            .await?
            .ok_or_else(|| DomainError::NotFound("Post not found".to_string()))?;

        if locked.owner.id != requester.id {
            return Err(DomainError::Forbidden(
                "Only the post owner can delete this post".to_string(),
            ));
        }
        locked.owner.posts.remove(locked.position);
        self.store().save(locked.owner).await?;
        self.index().remove(PostKind::Posts, title);
        Ok(())
    }

    async fn collect_posts(&self) -> Result<Vec<Post>, DomainError> {
        let users = self.store().find_all().await?;
        Ok(users.into_iter().flat_map(|u| u.posts).collect())
    }
}

pub(crate) fn require_title(title: &str) -> Result<(), DomainError> {
    if title.is_empty() {
        return Err(DomainError::Validation("post_title is required".to_string()));
    }
    Ok(())
}

/// Strict flag parsing: a JSON boolean or the literal strings
/// "true"/"false". Anything else is a validation error rather than a
/// silent coercion.
pub(crate) fn parse_flag(field: &str, value: Option<&Value>) -> Result<bool, DomainError> {
    match value {
        Some(Value::Bool(b)) => Ok(*b),
        Some(Value::String(s)) if s == "true" => Ok(true),
        Some(Value::String(s)) if s == "false" => Ok(false),
        _ => Err(DomainError::Validation(format!(
            "{field} must be a boolean or \"true\"/\"false\""
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_flag;
    use crate::error::DomainError;
    use serde_json::json;

    #[test]
    fn parses_booleans_and_canonical_strings() {
        assert!(parse_flag("f", Some(&json!(true))).unwrap());
        assert!(!parse_flag("f", Some(&json!(false))).unwrap());
        assert!(parse_flag("f", Some(&json!("true"))).unwrap());
        assert!(!parse_flag("f", Some(&json!("false"))).unwrap());
    }

    #[test]
    fn rejects_everything_else() {
        for bad in [json!("yes"), json!(1), json!(null), json!(["true"])] {
            assert!(matches!(
                parse_flag("post.isVolunteer", Some(&bad)),
                Err(DomainError::Validation(_))
            ));
        }
        assert!(parse_flag("post.isVolunteer", None).is_err());
    }
}
