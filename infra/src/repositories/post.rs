//! `PostRepository` over the encrypted KV store (spec §6 `content:posts`).

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use ns_core::domain::entities::Post;
use ns_core::errors::DomainError;
use ns_core::repositories::PostRepository;

use crate::kv::EncryptedKvStore;

const PREFIX: &str = "content:posts:";

fn key(id: Uuid) -> String {
    format!("{PREFIX}{id}")
}

pub struct KvPostRepository {
    store: Arc<EncryptedKvStore>,
}

impl KvPostRepository {
    pub fn new(store: Arc<EncryptedKvStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PostRepository for KvPostRepository {
    async fn save(&self, post: Post) -> Result<Post, DomainError> {
        self.store.put_json(&key(post.id), &post).await?;
        Ok(post)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DomainError> {
        self.store.get_json(&key(id)).await
    }

    async fn list_by_group_media(
        &self,
        group_id: &str,
        media_item_id: Uuid,
    ) -> Result<Vec<Post>, DomainError> {
        let posts: Vec<(String, Post)> = self.store.scan_prefix_json(PREFIX).await?;
        let mut matching: Vec<Post> = posts
            .into_iter()
            .map(|(_, post)| post)
            .filter(|post| post.group_id == group_id && post.media_item_id == media_item_id)
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::InMemoryKvBackend;
    use chrono::{Duration, Utc};

    fn post(group_id: &str, media_item_id: Uuid, created_at: chrono::DateTime<Utc>) -> Post {
        Post {
            id: Uuid::new_v4(),
            group_id: group_id.to_string(),
            media_item_id,
            author_id: Uuid::new_v4(),
            preview_text: "spoiler-free teaser".to_string(),
            body: "the full spoiler".to_string(),
            required_unit_id: Uuid::new_v4(),
            created_at,
        }
    }

    #[tokio::test]
    async fn lists_newest_first_for_the_requested_group_and_media() {
        let backend = Arc::new(InMemoryKvBackend::new());
        let store = Arc::new(EncryptedKvStore::new("test-secret", backend).unwrap());
        let repo = KvPostRepository::new(store);

        let media_item_id = Uuid::new_v4();
        let now = Utc::now();
        let older = repo
            .save(post("group-1", media_item_id, now - Duration::seconds(10)))
            .await
            .unwrap();
        let newer = repo
            .save(post("group-1", media_item_id, now))
            .await
            .unwrap();
        repo.save(post("group-2", media_item_id, now)).await.unwrap();

        let listed = repo.list_by_group_media("group-1", media_item_id).await.unwrap();
        assert_eq!(listed, vec![newer, older]);
    }
}
