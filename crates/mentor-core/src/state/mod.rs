//! Session state: the document, its collections and the per-session store.

pub mod collection;
pub mod document;
pub mod store;

pub use collection::{Collection, CollectionShape};
pub use document::{CollectionAccess, SessionDocument, StateStore};
pub use store::SessionStore;
