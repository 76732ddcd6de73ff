//! Object-storage capability interface.
//!
//! The remote-redaction endpoint pulls its source PDF from and pushes its
//! result to an external bucket store. Handlers depend on this trait, not
//! on a concrete client, so tests can substitute an in-memory fake.

pub mod supabase;

pub use supabase::SupabaseStore;

use async_trait::async_trait;

use crate::error::RedactResult;

/// Download/upload interface over a bucket-shaped object store.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetches an object's bytes, or [`crate::RedactError::ObjectNotFound`]
    /// if it does not exist.
    async fn download(&self, bucket: &str, path: &str) -> RedactResult<Vec<u8>>;

    /// Stores an object, replacing any existing one at the same path.
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> RedactResult<()>;
}
