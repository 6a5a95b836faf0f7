//! User storage abstraction.

use std::sync::Arc;

use userreg_core::{DomainResult, User, UserId, ValidPatch, ValidUser};

pub mod in_memory;

pub use in_memory::{Clock, InMemoryUserStore};

/// Owner of every user record.
///
/// Each mutating call either applies fully or leaves the store unchanged.
pub trait UserStore: Send + Sync {
    /// Insert a new record under the next id. Fails on an exact email match.
    fn create(&self, input: ValidUser) -> DomainResult<User>;
    /// All records in id (insertion) order.
    fn list(&self) -> DomainResult<Vec<User>>;
    fn get(&self, id: UserId) -> DomainResult<User>;
    /// Replace a record with the patched version of itself.
    fn update(&self, id: UserId, patch: &ValidPatch) -> DomainResult<User>;
    /// Remove a record permanently and hand it back.
    fn delete(&self, id: UserId) -> DomainResult<User>;
    fn len(&self) -> DomainResult<usize>;

    fn is_empty(&self) -> DomainResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl<S> UserStore for Arc<S>
where
    S: UserStore + ?Sized,
{
    fn create(&self, input: ValidUser) -> DomainResult<User> {
        (**self).create(input)
    }

    fn list(&self) -> DomainResult<Vec<User>> {
        (**self).list()
    }

    fn get(&self, id: UserId) -> DomainResult<User> {
        (**self).get(id)
    }

    fn update(&self, id: UserId, patch: &ValidPatch) -> DomainResult<User> {
        (**self).update(id, patch)
    }

    fn delete(&self, id: UserId) -> DomainResult<User> {
        (**self).delete(id)
    }

    fn len(&self) -> DomainResult<usize> {
        (**self).len()
    }
}
