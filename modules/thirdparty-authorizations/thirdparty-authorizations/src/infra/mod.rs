//! Collaborator adapters: crypto, storage and HTTP callbacks.

pub mod callbacks;
pub mod crypto;
pub mod storage;
