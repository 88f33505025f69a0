//! Main content & progress service implementation (spec §4.6).

use std::sync::Arc;

use uuid::Uuid;

use ns_shared::config::PolicyConfig;
use ns_shared::time::{Clock, IdProvider};

use crate::domain::entities::{
    GroupMediaSelection, MediaItem, MediaKind, MediaUnit, Post, ProgressAction,
    ProgressAuditEvent, UserProgress,
};
use crate::domain::value_objects::{FeedPost, FeedResponse, MarkProgressResult, RollbackResult};
use crate::errors::{ContentError, DomainError, DomainResult, ProgressError};
use crate::repositories::{
    GroupSelectionRepository, MediaItemRepository, MediaUnitRepository, PostRepository,
    ProgressAuditRepository, ProgressRepository,
};

pub struct ContentService {
    media_items: Arc<dyn MediaItemRepository>,
    media_units: Arc<dyn MediaUnitRepository>,
    selections: Arc<dyn GroupSelectionRepository>,
    posts: Arc<dyn PostRepository>,
    progress: Arc<dyn ProgressRepository>,
    progress_audit: Arc<dyn ProgressAuditRepository>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdProvider>,
    policy: PolicyConfig,
    /// Coarse per-service lock covering progress/audit read-modify-write
    /// (spec §5).
    state_lock: tokio::sync::Mutex<()>,
}

impl ContentService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        media_items: Arc<dyn MediaItemRepository>,
        media_units: Arc<dyn MediaUnitRepository>,
        selections: Arc<dyn GroupSelectionRepository>,
        posts: Arc<dyn PostRepository>,
        progress: Arc<dyn ProgressRepository>,
        progress_audit: Arc<dyn ProgressAuditRepository>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdProvider>,
        policy: PolicyConfig,
    ) -> Self {
        Self {
            media_items,
            media_units,
            selections,
            posts,
            progress,
            progress_audit,
            clock,
            ids,
            policy,
            state_lock: tokio::sync::Mutex::new(()),
        }
    }

    pub async fn create_media_item(
        &self,
        kind: MediaKind,
        title: String,
        description: Option<String>,
        author: Option<String>,
        metadata: Option<serde_json::Value>,
    ) -> DomainResult<MediaItem> {
        let now = self.clock.now();
        self.media_items
            .save(MediaItem {
                id: self.ids.new_id(),
                kind,
                title,
                description,
                author,
                metadata,
                created_at: now,
                updated_at: now,
            })
            .await
    }

    pub async fn create_media_unit(
        &self,
        media_item_id: Uuid,
        release_order: i64,
        chapter: Option<i64>,
        season: Option<i64>,
        episode: Option<i64>,
        label: Option<String>,
    ) -> DomainResult<MediaUnit> {
        self.media_items
            .find_by_id(media_item_id)
            .await?
            .ok_or(ContentError::UnknownMedia)?;

        let siblings = self.media_units.list_by_media_item(media_item_id).await?;
        if siblings.iter().any(|u| u.release_order == release_order) {
            return Err(DomainError::Internal(format!(
                "release_order {release_order} already used for media item {media_item_id}"
            )));
        }

        self.media_units
            .save(MediaUnit {
                id: self.ids.new_id(),
                media_item_id,
                release_order,
                chapter,
                season,
                episode,
                label,
            })
            .await
    }

    pub async fn select_group_media(
        &self,
        group_id: String,
        media_item_id: Uuid,
        is_active: bool,
    ) -> DomainResult<GroupMediaSelection> {
        self.media_items
            .find_by_id(media_item_id)
            .await?
            .ok_or(ContentError::UnknownMedia)?;

        let _guard = self.state_lock.lock().await;

        self.selections
            .save(GroupMediaSelection {
                group_id,
                media_item_id,
                is_active,
                created_at: self.clock.now(),
            })
            .await
    }

    pub async fn create_post(
        &self,
        group_id: String,
        media_item_id: Uuid,
        author_id: Uuid,
        preview_text: String,
        body: String,
        required_unit_id: Uuid,
    ) -> DomainResult<Post> {
        let required_unit = self
            .media_units
            .find_by_id(required_unit_id)
            .await?
            .ok_or(ContentError::UnknownUnit)?;
        if required_unit.media_item_id != media_item_id {
            return Err(ContentError::InvalidPostReference.into());
        }
        self.selections
            .find_active(&group_id, media_item_id)
            .await?
            .ok_or(ContentError::UnknownSelection)?;

        self.posts
            .save(Post {
                id: self.ids.new_id(),
                group_id,
                media_item_id,
                author_id,
                preview_text,
                body,
                required_unit_id,
                created_at: self.clock.now(),
            })
            .await
    }

    pub async fn get_active_selection(
        &self,
        group_id: &str,
        media_item_id: Uuid,
    ) -> DomainResult<Option<GroupMediaSelection>> {
        self.selections.find_active(group_id, media_item_id).await
    }

    pub async fn get_feed_for_user(
        &self,
        user_id: Uuid,
        group_id: &str,
        media_item_id: Uuid,
    ) -> DomainResult<FeedResponse> {
        self.selections
            .find_active(group_id, media_item_id)
            .await?
            .ok_or(ContentError::UnknownSelection)?;

        let progress = self.load_or_zero_progress(user_id, group_id, media_item_id).await?;

        let mut posts = self.posts.list_by_group_media(group_id, media_item_id).await?;
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let mut feed_posts = Vec::with_capacity(posts.len());
        for post in posts {
            let required_unit = self
                .media_units
                .find_by_id(post.required_unit_id)
                .await?
                .ok_or(ContentError::UnknownUnit)?;
            let unlocked = progress.highest_unit_order >= required_unit.release_order;

            feed_posts.push(FeedPost {
                id: post.id,
                author_id: post.author_id,
                preview_text: post.preview_text,
                body: if unlocked { Some(post.body) } else { None },
                unlocked,
                required_unit_id: post.required_unit_id,
                unit_reference: required_unit.unit_reference(),
                mark_as_read_enabled: !unlocked,
                created_at: post.created_at,
            });
        }

        Ok(FeedResponse {
            group_id: group_id.to_string(),
            media_item_id,
            highest_unit_order: progress.highest_unit_order,
            posts: feed_posts,
        })
    }

    pub async fn mark_as_read(
        &self,
        user_id: Uuid,
        group_id: String,
        media_item_id: Uuid,
        unit_id: Uuid,
    ) -> DomainResult<MarkProgressResult> {
        let _guard = self.state_lock.lock().await;

        let target_unit = self
            .media_units
            .find_by_id(unit_id)
            .await?
            .ok_or(ContentError::UnknownUnit)?;
        if target_unit.media_item_id != media_item_id {
            return Err(ContentError::UnknownUnit.into());
        }

        let progress = self
            .load_or_zero_progress(user_id, &group_id, media_item_id)
            .await?;
        let now = self.clock.now();

        if target_unit.release_order <= progress.highest_unit_order {
            return Ok(MarkProgressResult {
                version: progress.version,
                highest_unit_order: progress.highest_unit_order,
                unlocked_post_ids: Vec::new(),
                rollback_token: String::new(),
                rollback_expires_at: now,
            });
        }

        let previous_unit_order = progress.highest_unit_order;
        let previous_unit_id = progress.highest_unit_id;
        let previous_version = progress.version;

        let unlocked_post_ids = self
            .posts_with_required_order_in(&group_id, media_item_id, previous_unit_order, target_unit.release_order)
            .await?;

        let next_progress = UserProgress {
            user_id,
            group_id: group_id.clone(),
            media_item_id,
            highest_unit_order: target_unit.release_order,
            highest_unit_id: Some(target_unit.id),
            version: previous_version + 1,
            updated_at: now,
        };
        self.progress.save(next_progress.clone()).await?;

        let rollback_token = self.ids.new_token();
        let audit_event = ProgressAuditEvent {
            id: self.ids.new_id(),
            user_id,
            group_id,
            media_item_id,
            action: ProgressAction::MarkRead,
            previous_unit_order,
            previous_unit_id,
            next_unit_order: next_progress.highest_unit_order,
            next_unit_id: next_progress.highest_unit_id,
            previous_version,
            next_version: next_progress.version,
            rollback_token: Some(rollback_token.clone()),
            rolled_back_by_audit_id: None,
            rollback_of_audit_id: None,
            created_at: now,
        };
        self.progress_audit.append(audit_event).await?;

        Ok(MarkProgressResult {
            version: next_progress.version,
            highest_unit_order: next_progress.highest_unit_order,
            unlocked_post_ids,
            rollback_token,
            rollback_expires_at: now + chrono::Duration::milliseconds(self.policy.rollback_window_ms),
        })
    }

    pub async fn rollback_progress(
        &self,
        user_id: Uuid,
        rollback_token: &str,
    ) -> DomainResult<RollbackResult> {
        let _guard = self.state_lock.lock().await;

        let mut forward = self
            .progress_audit
            .find_by_rollback_token(user_id, rollback_token)
            .await?
            .ok_or(ProgressError::UnknownToken)?;

        if forward.rolled_back_by_audit_id.is_some() {
            return Err(ProgressError::AlreadyRolledBack.into());
        }

        let now = self.clock.now();
        let deadline = forward.created_at + chrono::Duration::milliseconds(self.policy.rollback_window_ms);
        if now > deadline {
            return Err(ProgressError::RollbackExpired.into());
        }

        let current = self
            .progress
            .find(user_id, &forward.group_id, forward.media_item_id)
            .await?
            .ok_or_else(|| {
                DomainError::Internal("progress missing for a recorded forward audit".to_string())
            })?;

        if current.version != forward.next_version {
            return Err(ProgressError::Stale.into());
        }

        let relocked_post_ids = self
            .posts_with_required_order_in(
                &forward.group_id,
                forward.media_item_id,
                forward.previous_unit_order,
                current.highest_unit_order,
            )
            .await?;

        let restored = UserProgress {
            user_id,
            group_id: forward.group_id.clone(),
            media_item_id: forward.media_item_id,
            highest_unit_order: forward.previous_unit_order,
            highest_unit_id: forward.previous_unit_id,
            version: current.version + 1,
            updated_at: now,
        };
        self.progress.save(restored.clone()).await?;

        let rollback_event = ProgressAuditEvent {
            id: self.ids.new_id(),
            user_id,
            group_id: forward.group_id.clone(),
            media_item_id: forward.media_item_id,
            action: ProgressAction::Rollback,
            previous_unit_order: current.highest_unit_order,
            previous_unit_id: current.highest_unit_id,
            next_unit_order: restored.highest_unit_order,
            next_unit_id: restored.highest_unit_id,
            previous_version: current.version,
            next_version: restored.version,
            rollback_token: None,
            rolled_back_by_audit_id: None,
            rollback_of_audit_id: Some(forward.id),
            created_at: now,
        };
        self.progress_audit.append(rollback_event.clone()).await?;

        forward.rolled_back_by_audit_id = Some(rollback_event.id);
        self.progress_audit.update(forward).await?;

        Ok(RollbackResult {
            version: restored.version,
            highest_unit_order: restored.highest_unit_order,
            relocked_post_ids,
        })
    }

    pub async fn get_progress_audit_trail(
        &self,
        user_id: Uuid,
        group_id: &str,
        media_item_id: Uuid,
    ) -> DomainResult<Vec<ProgressAuditEvent>> {
        let mut events = self
            .progress_audit
            .list(user_id, group_id, media_item_id)
            .await?;
        events.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(events)
    }

    // -- internal helpers -------------------------------------------------

    async fn load_or_zero_progress(
        &self,
        user_id: Uuid,
        group_id: &str,
        media_item_id: Uuid,
    ) -> DomainResult<UserProgress> {
        match self.progress.find(user_id, group_id, media_item_id).await? {
            Some(progress) => Ok(progress),
            None => Ok(UserProgress::zero(
                user_id,
                group_id.to_string(),
                media_item_id,
                self.clock.now(),
            )),
        }
    }

    /// Post ids whose required unit's `release_order` falls in
    /// `(lower_exclusive, upper_inclusive]` — the set that crosses the
    /// unlock boundary on a mark/rollback (spec §4.6 scenarios 5-6).
    async fn posts_with_required_order_in(
        &self,
        group_id: &str,
        media_item_id: Uuid,
        lower_exclusive: i64,
        upper_inclusive: i64,
    ) -> DomainResult<Vec<Uuid>> {
        let posts = self.posts.list_by_group_media(group_id, media_item_id).await?;
        let mut ids = Vec::new();
        for post in posts {
            let required_unit = self
                .media_units
                .find_by_id(post.required_unit_id)
                .await?
                .ok_or(ContentError::UnknownUnit)?;
            if required_unit.release_order > lower_exclusive
                && required_unit.release_order <= upper_inclusive
            {
                ids.push(post.id);
            }
        }
        Ok(ids)
    }
}
