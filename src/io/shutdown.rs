//! Write-on-shutdown guard
//!
//! [`WriteOnShutdown`] owns the account store for the rest of the
//! invocation. Dropping it saves the store exactly once, whether dispatch
//! finished, failed early, or never had anything to do.

use crate::core::{AccountStore, Persist};
use log::error;

pub struct WriteOnShutdown<P: Persist> {
    store: AccountStore,
    persist: P,
}

impl<P: Persist> WriteOnShutdown<P> {
    /// Take ownership of a freshly loaded store
    pub fn new(store: AccountStore, persist: P) -> Self {
        WriteOnShutdown { store, persist }
    }

    pub fn store(&self) -> &AccountStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut AccountStore {
        &mut self.store
    }
}

impl<P: Persist> Drop for WriteOnShutdown<P> {
    fn drop(&mut self) {
        // Nothing can be returned from here; the exit code stays as it was.
        if let Err(e) = self.persist.save(&self.store) {
            error!("Failed to write database: {}", e);
        }
    }
}
