//! Domain services - the locate/mutate/save layer over the user-post store.

mod locator;
mod posts;
mod search;
mod social;

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

use crate::domain::User;
use crate::error::StoreError;
use crate::ports::UserStore;

pub use locator::{Located, Locator, PostKind, TitleIndex};
pub use search::{rank, score, SearchFields, Searchable, SCORE_CUTOFF};

/// The authenticated caller, as resolved by the session layer.
#[derive(Debug, Clone)]
pub struct Requester {
    pub id: Uuid,
    pub username: String,
}

/// Post and social-post operations over the user-post store.
///
/// Every mutation follows the same protocol: locate the target to learn
/// which user owns it, take that owner's mutex, re-read and re-locate
/// under the lock, validate, rewrite the embedded collection, save.
/// Because the owner's record is the unit of persistence, the per-owner
/// mutex is exactly the serialization point that prevents two concurrent
/// read-modify-write cycles from losing an update. Operations on
/// different owners never contend.
#[derive(Clone)]
pub struct PostService {
    store: Arc<dyn UserStore>,
    index: TitleIndex,
    locator: Locator,
    locks: OwnerLocks,
}

impl PostService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        let index = TitleIndex::new();
        let locator = Locator::new(store.clone(), index.clone());
        Self {
            store,
            index,
            locator,
            locks: OwnerLocks::default(),
        }
    }

    pub(crate) fn store(&self) -> &Arc<dyn UserStore> {
        &self.store
    }

    pub(crate) fn index(&self) -> &TitleIndex {
        &self.index
    }

    pub(crate) fn locator(&self) -> &Locator {
        &self.locator
    }

    /// Take the lock for one owner's record.
    pub(crate) async fn lock_owner(&self, id: Uuid) -> OwnedMutexGuard<()> {
        self.locks.for_owner(id).lock_owned().await
    }

    /// Locate a post and pin its owner for mutation.
    ///
    /// The pre-lock locate only tells us which user to lock; everything
    /// the mutation reads comes from the locked re-read, so a rewrite
    /// that raced us cannot be clobbered from a stale copy. If the post
    /// moved while we waited on the lock, locate again.
    pub(crate) async fn locate_for_update(
        &self,
        kind: PostKind,
        title: &str,
    ) -> Result<Option<LockedPost>, StoreError> {
        const MAX_ATTEMPTS: usize = 3;

        for _ in 0..MAX_ATTEMPTS {
            let Some(located) = self.locator.locate(kind, title).await? else {
                return Ok(None);
            };
            let guard = self.lock_owner(located.owner.id).await;
            let Some(owner) = self.store.find_by_id(located.owner.id).await? else {
                continue;
            };
            if let Some(position) = locator::position(&owner, kind, title) {
                return Ok(Some(LockedPost {
                    _guard: guard,
                    owner,
                    position,
                }));
            }
        }
        Ok(None)
    }
}

/// A post pinned for mutation: the owner's fresh record, the post's
/// position in it, and the guard keeping other writers out.
pub(crate) struct LockedPost {
    _guard: OwnedMutexGuard<()>,
    pub owner: User,
    pub position: usize,
}

/// One mutex per owning user record, created on first contact.
#[derive(Clone, Default)]
struct OwnerLocks {
    locks: Arc<DashMap<Uuid, Arc<Mutex<()>>>>,
}

impl OwnerLocks {
    fn for_owner(&self, id: Uuid) -> Arc<Mutex<()>> {
        self.locks
            .entry(id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
