#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use crate::store::InMemoryUserStore;
    use pulse_core::domain::{User, DEFAULT_SOCIAL_IMAGE};
    use pulse_core::error::DomainError;
    use pulse_core::ports::UserStore;
    use pulse_core::service::{PostService, Requester};

    async fn service_with_users(names: &[&str]) -> (PostService, Vec<Requester>) {
        let store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());
        let mut requesters = Vec::new();
        for name in names {
            let user = store.save(User::new(name, "hash".to_string())).await.unwrap();
            requesters.push(Requester {
                id: user.id,
                username: user.username.clone(),
            });
        }
        (PostService::new(store), requesters)
    }

    async fn seed_post(service: &PostService, owner: &Requester, title: &str) {
        service
            .create_post(owner, title, "some text", Some(&json!(true)), Some(&json!(true)))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let (service, users) = service_with_users(&["alice"]).await;
        service
            .create_post(
                &users[0],
                "Beach Cleanup",
                "Join us on Saturday",
                Some(&json!(true)),
                Some(&json!("false")),
            )
            .await
            .unwrap();

        let view = service.get_post("Beach Cleanup").await.unwrap();
        assert_eq!(view.title, "Beach Cleanup");
        assert_eq!(view.text, "Join us on Saturday");
        assert_eq!(view.username, "alice");
        assert!(view.is_volunteer);
        assert!(!view.is_fundraiser);
        assert_eq!(view.num_volunteers, 0);
        assert_eq!(view.num_donors, 0);
    }

    #[tokio::test]
    async fn missing_fields_rejected_before_any_write() {
        let (service, users) = service_with_users(&["alice"]).await;
        let result = service
            .create_post(&users[0], "Title", "", Some(&json!(true)), Some(&json!(false)))
            .await;
        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert!(service.all_posts(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn non_boolean_flag_rejected() {
        let (service, users) = service_with_users(&["alice"]).await;
        let result = service
            .create_post(&users[0], "Title", "text", Some(&json!("yes")), Some(&json!(false)))
            .await;
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn duplicate_title_rejected() {
        let (service, users) = service_with_users(&["alice", "bob"]).await;
        seed_post(&service, &users[0], "Beach Cleanup").await;

        let result = service
            .create_post(
                &users[1],
                "Beach Cleanup",
                "different text",
                Some(&json!(false)),
                Some(&json!(true)),
            )
            .await;
        assert!(matches!(result, Err(DomainError::Conflict(_))));
        assert_eq!(service.all_posts(None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn volunteer_keeps_count_and_set_in_step() {
        let (service, users) = service_with_users(&["alice", "bob", "carol"]).await;
        seed_post(&service, &users[0], "Tree Planting").await;

        service.volunteer(&users[1], "Tree Planting").await.unwrap();
        service.volunteer(&users[2], "Tree Planting").await.unwrap();
        service.donate(&users[1], "Tree Planting").await.unwrap();

        let view = service.get_post("Tree Planting").await.unwrap();
        assert_eq!(view.num_volunteers, 2);
        assert_eq!(view.num_donors, 1);

        let status = service.user_status(&users[1], "Tree Planting").await.unwrap();
        assert!(status.volunteering);
        assert!(status.donating);
        let status = service.user_status(&users[2], "Tree Planting").await.unwrap();
        assert!(status.volunteering);
        assert!(!status.donating);
    }

    #[tokio::test]
    async fn repeat_volunteer_conflicts_and_counts_once() {
        let (service, users) = service_with_users(&["alice", "bob"]).await;
        seed_post(&service, &users[0], "Tree Planting").await;

        service.volunteer(&users[1], "Tree Planting").await.unwrap();
        let second = service.volunteer(&users[1], "Tree Planting").await;
        assert!(matches!(second, Err(DomainError::Conflict(_))));

        let view = service.get_post("Tree Planting").await.unwrap();
        assert_eq!(view.num_volunteers, 1);
    }

    #[tokio::test]
    async fn volunteer_on_missing_post_is_not_found() {
        let (service, users) = service_with_users(&["alice"]).await;
        let result = service.volunteer(&users[0], "No Such Post").await;
        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn concurrent_donations_are_not_lost() {
        let (service, users) = service_with_users(&["alice", "bob", "carol"]).await;
        seed_post(&service, &users[0], "Flood Relief").await;

        let donor_b = {
            let service = service.clone();
            let requester = users[1].clone();
            tokio::spawn(async move { service.donate(&requester, "Flood Relief").await })
        };
        let donor_c = {
            let service = service.clone();
            let requester = users[2].clone();
            tokio::spawn(async move { service.donate(&requester, "Flood Relief").await })
        };
        donor_b.await.unwrap().unwrap();
        donor_c.await.unwrap().unwrap();

        let view = service.get_post("Flood Relief").await.unwrap();
        assert_eq!(view.num_donors, 2);
    }

    #[tokio::test]
    async fn many_interleaved_donations_all_apply() {
        let names = ["owner", "d1", "d2", "d3", "d4", "d5"];
        let (service, users) = service_with_users(&names).await;
        seed_post(&service, &users[0], "Winter Shelter").await;

        let donations = users[1..]
            .iter()
            .map(|requester| service.donate(requester, "Winter Shelter"));
        for result in futures::future::join_all(donations).await {
            result.unwrap();
        }

        let view = service.get_post("Winter Shelter").await.unwrap();
        assert_eq!(view.num_donors, 5);
    }

    #[tokio::test]
    async fn delete_post_requires_owner() {
        let (service, users) = service_with_users(&["alice", "bob"]).await;
        seed_post(&service, &users[0], "Beach Cleanup").await;

        let denied = service.delete_post(&users[1], "Beach Cleanup").await;
        assert!(matches!(denied, Err(DomainError::Forbidden(_))));

        service.delete_post(&users[0], "Beach Cleanup").await.unwrap();
        let gone = service.get_post("Beach Cleanup").await;
        assert!(matches!(gone, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn deleted_title_can_be_reused() {
        let (service, users) = service_with_users(&["alice", "bob"]).await;
        seed_post(&service, &users[0], "Beach Cleanup").await;
        service.delete_post(&users[0], "Beach Cleanup").await.unwrap();

        seed_post(&service, &users[1], "Beach Cleanup").await;
        let view = service.get_post("Beach Cleanup").await.unwrap();
        assert_eq!(view.username, "bob");
    }

    #[tokio::test]
    async fn like_flow() {
        let (service, users) = service_with_users(&["alice", "bob"]).await;
        service
            .create_social_post(&users[0], "Beach Cleanup", "We did it!", None)
            .await
            .unwrap();

        service.like_social_post(&users[1], "Beach Cleanup").await.unwrap();
        let liked = service
            .user_liked_social_post(&users[1], "Beach Cleanup")
            .await
            .unwrap();
        assert!(liked.liked);

        let again = service.like_social_post(&users[1], "Beach Cleanup").await;
        assert!(matches!(again, Err(DomainError::Conflict(_))));

        let view = service.get_social_post("Beach Cleanup").await.unwrap();
        assert_eq!(view.like_count, 1);
    }

    #[tokio::test]
    async fn social_post_without_image_gets_placeholder() {
        let (service, users) = service_with_users(&["alice"]).await;
        service
            .create_social_post(&users[0], "No Image", "text", None)
            .await
            .unwrap();
        let view = service.get_social_post("No Image").await.unwrap();
        assert_eq!(view.image, DEFAULT_SOCIAL_IMAGE);
    }

    #[tokio::test]
    async fn comment_lifecycle() {
        let (service, users) = service_with_users(&["alice", "bob"]).await;
        service
            .create_social_post(&users[0], "Tree Planting", "Who's in?", None)
            .await
            .unwrap();

        service
            .create_comment(&users[1], "Great idea", "Tree Planting")
            .await
            .unwrap();

        let listing = service.post_comments("Tree Planting").await.unwrap();
        assert_eq!(listing.post_title, "Tree Planting");
        assert_eq!(listing.comments.len(), 1);
        assert_eq!(listing.comments[0].text, "Great idea");
        assert_eq!(listing.comments[0].username, "bob");
        assert_eq!(listing.comments[0].like_count, 0);

        // The post owner removes it.
        service
            .delete_comment(&users[0], "alice", "Tree Planting", "Great idea")
            .await
            .unwrap();
        let listing = service.post_comments("Tree Planting").await.unwrap();
        assert!(listing.comments.is_empty());
    }

    #[tokio::test]
    async fn comment_likes_are_counted_and_deduplicated() {
        let (service, users) = service_with_users(&["alice", "bob", "carol"]).await;
        service
            .create_social_post(&users[0], "Tree Planting", "Who's in?", None)
            .await
            .unwrap();
        service
            .create_comment(&users[1], "Great idea", "Tree Planting")
            .await
            .unwrap();

        service
            .like_comment(&users[2], "Tree Planting", "Great idea")
            .await
            .unwrap();
        let again = service.like_comment(&users[2], "Tree Planting", "Great idea").await;
        assert!(matches!(again, Err(DomainError::Conflict(_))));

        let liked = service
            .user_liked_comment(&users[2], "Tree Planting", "Great idea")
            .await
            .unwrap();
        assert!(liked.liked);

        let listing = service.post_comments("Tree Planting").await.unwrap();
        assert_eq!(listing.comments[0].like_count, 1);
    }

    #[tokio::test]
    async fn comment_deletion_requires_author_or_owner() {
        let (service, users) = service_with_users(&["alice", "bob", "carol"]).await;
        service
            .create_social_post(&users[0], "Tree Planting", "Who's in?", None)
            .await
            .unwrap();
        service
            .create_comment(&users[1], "Great idea", "Tree Planting")
            .await
            .unwrap();

        // A bystander may not delete it.
        let denied = service
            .delete_comment(&users[2], "alice", "Tree Planting", "Great idea")
            .await;
        assert!(matches!(denied, Err(DomainError::Forbidden(_))));

        // The author may.
        service
            .delete_comment(&users[1], "alice", "Tree Planting", "Great idea")
            .await
            .unwrap();
        assert!(service
            .post_comments("Tree Planting")
            .await
            .unwrap()
            .comments
            .is_empty());
    }

    #[tokio::test]
    async fn posts_are_located_across_users() {
        let (service, users) = service_with_users(&["alice", "bob"]).await;
        seed_post(&service, &users[0], "Alice's Drive").await;
        seed_post(&service, &users[1], "Bob's Drive").await;

        // Bob can act on Alice's post without knowing who owns it.
        service.volunteer(&users[1], "Alice's Drive").await.unwrap();
        let view = service.get_post("Alice's Drive").await.unwrap();
        assert_eq!(view.username, "alice");
        assert_eq!(view.num_volunteers, 1);

        let all = service.all_posts(None).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn all_posts_with_query_filters_titles() {
        let (service, users) = service_with_users(&["alice"]).await;
        seed_post(&service, &users[0], "Help rebuild the park").await;
        seed_post(&service, &users[0], "Totally unrelated").await;

        let filtered = service.all_posts(Some("rebuild park")).await.unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Help rebuild the park");

        let unfiltered = service.all_posts(None).await.unwrap();
        assert_eq!(unfiltered.len(), 2);
    }

    #[tokio::test]
    async fn search_posts_matches_body_text_too() {
        let (service, users) = service_with_users(&["alice"]).await;
        service
            .create_post(
                &users[0],
                "Saturday event",
                "We will rebuild the park together",
                Some(&json!(true)),
                Some(&json!(false)),
            )
            .await
            .unwrap();

        let hits = service.search_posts("rebuild the park").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Saturday event");
    }
}
