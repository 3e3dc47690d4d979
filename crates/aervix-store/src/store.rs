//! The collection store.
//!
//! [`Store`] layers the club collections over any [`KvBackend`]. Every
//! mutation is a full read-modify-write of exactly one collection; there is
//! no caching and no transaction spanning collections.

use crate::backend::KvBackend;

/// Club collections on top of a key-value backend.
#[derive(Debug)]
pub struct Store<B> {
    backend: B,
}

impl<B: KvBackend> Store<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }
}
