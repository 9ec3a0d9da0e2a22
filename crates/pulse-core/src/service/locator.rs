//! Title-to-owner resolution over the embedded post collections.

use std::sync::Arc;

use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::User;
use crate::error::StoreError;
use crate::ports::UserStore;

/// Which embedded collection a title lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostKind {
    Posts,
    Social,
}

/// A resolved post: the user owning it and its position in the owner's
/// collection.
#[derive(Debug, Clone)]
pub struct Located {
    pub owner: User,
    pub position: usize,
}

/// Map from post title to owning user id, maintained incrementally.
///
/// Entries are reserved on create and dropped on delete. The index is a
/// hint, not a source of truth: `Locator::locate` stays correct with a
/// cold or stale index by falling back to the full ordered scan and
/// repairing what it finds.
#[derive(Clone, Default)]
pub struct TitleIndex {
    entries: Arc<DashMap<(PostKind, String), Uuid>>,
}

impl TitleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: PostKind, title: &str) -> Option<Uuid> {
        self.entries
            .get(&(kind, title.to_string()))
            .map(|entry| *entry.value())
    }

    /// Atomically claim a title for an owner. Returns false when the
    /// title is already claimed, which is how two concurrent creates of
    /// the same title are arbitrated.
    pub fn try_reserve(&self, kind: PostKind, title: &str, owner: Uuid) -> bool {
        let mut reserved = false;
        self.entries
            .entry((kind, title.to_string()))
            .or_insert_with(|| {
                reserved = true;
                owner
            });
        reserved
    }

    pub fn insert(&self, kind: PostKind, title: &str, owner: Uuid) {
        self.entries.insert((kind, title.to_string()), owner);
    }

    pub fn remove(&self, kind: PostKind, title: &str) {
        self.entries.remove(&(kind, title.to_string()));
    }
}

/// Resolves a bare title to its owning user and in-collection position.
#[derive(Clone)]
pub struct Locator {
    store: Arc<dyn UserStore>,
    index: TitleIndex,
}

impl Locator {
    pub fn new(store: Arc<dyn UserStore>, index: TitleIndex) -> Self {
        Self { store, index }
    }

    /// Resolve a title. A miss is `Ok(None)`, never an error.
    ///
    /// An index hit costs one record read; a miss falls back to scanning
    /// every user in insertion order, first match wins - O(total posts),
    /// the documented ceiling of title-keyed lookups.
    pub async fn locate(&self, kind: PostKind, title: &str) -> Result<Option<Located>, StoreError> {
        if let Some(owner_id) = self.index.get(kind, title) {
            if let Some(owner) = self.store.find_by_id(owner_id).await? {
                if let Some(position) = position(&owner, kind, title) {
                    return Ok(Some(Located { owner, position }));
                }
            }
            // The entry pointed at an owner that no longer holds the
            // title; drop it and fall through to the scan.
            self.index.remove(kind, title);
        }
        self.scan(kind, title).await
    }

    async fn scan(&self, kind: PostKind, title: &str) -> Result<Option<Located>, StoreError> {
        for owner in self.store.find_all().await? {
            if let Some(position) = position(&owner, kind, title) {
                self.index.insert(kind, title, owner.id);
                return Ok(Some(Located { owner, position }));
            }
        }
        Ok(None)
    }
}

/// First position of `title` in the user's chosen collection.
pub(crate) fn position(user: &User, kind: PostKind, title: &str) -> Option<usize> {
    match kind {
        PostKind::Posts => user.posts.iter().position(|p| p.title == title),
        PostKind::Social => user.social_posts.iter().position(|p| p.title == title),
    }
}
