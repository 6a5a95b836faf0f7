use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use userreg_core::{DomainError, DomainResult, User, UserId, ValidPatch, ValidUser};

use super::UserStore;

/// Source of registration timestamps.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

#[derive(Debug)]
struct Inner {
    users: BTreeMap<UserId, User>,
    next_id: UserId,
}

/// Process-memory store: one lock over the record map and the id counter.
///
/// Check-then-act sequences (email uniqueness, id assignment) run under a
/// single write guard.
pub struct InMemoryUserStore {
    inner: RwLock<Inner>,
    clock: Clock,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(Utc::now))
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self {
            inner: RwLock::new(Inner {
                users: BTreeMap::new(),
                next_id: UserId::FIRST,
            }),
            clock,
        }
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, Inner>> {
        self.inner
            .read()
            .map_err(|_| DomainError::internal("user store lock poisoned"))
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|_| DomainError::internal("user store lock poisoned"))
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for InMemoryUserStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InMemoryUserStore")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl Inner {
    fn email_taken(&self, email: &str, except: Option<UserId>) -> bool {
        self.users
            .values()
            .any(|u| Some(u.id) != except && u.email == email)
    }
}

impl UserStore for InMemoryUserStore {
    #[tracing::instrument(level = "debug", skip_all)]
    fn create(&self, input: ValidUser) -> DomainResult<User> {
        let mut inner = self.write()?;
        if inner.email_taken(&input.email, None) {
            return Err(DomainError::DuplicateEmail(input.email));
        }

        let id = inner.next_id;
        let user = User::register(id, input, (self.clock)());
        inner.users.insert(id, user.clone());
        inner.next_id = id.next();
        tracing::debug!(user_id = %id, "user stored");
        Ok(user)
    }

    fn list(&self) -> DomainResult<Vec<User>> {
        Ok(self.read()?.users.values().cloned().collect())
    }

    fn get(&self, id: UserId) -> DomainResult<User> {
        self.read()?
            .users
            .get(&id)
            .cloned()
            .ok_or(DomainError::NotFound(id))
    }

    #[tracing::instrument(level = "debug", skip(self, patch))]
    fn update(&self, id: UserId, patch: &ValidPatch) -> DomainResult<User> {
        let mut inner = self.write()?;
        let current = inner.users.get(&id).ok_or(DomainError::NotFound(id))?;

        if let Some(email) = &patch.email {
            if inner.email_taken(email, Some(id)) {
                return Err(DomainError::DuplicateEmail(email.clone()));
            }
        }

        let updated = current.apply(patch);
        inner.users.insert(id, updated.clone());
        Ok(updated)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn delete(&self, id: UserId) -> DomainResult<User> {
        let mut inner = self.write()?;
        inner.users.remove(&id).ok_or(DomainError::NotFound(id))
    }

    fn len(&self) -> DomainResult<usize> {
        Ok(self.read()?.users.len())
    }
}
