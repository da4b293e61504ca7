//! Blob storage for snippet payloads.
//!
//! The service treats payloads as opaque bytes keyed by a
//! [`BlobPath`](snipvault::BlobPath). The [`SnippetStore`] trait is the seam
//! between the HTTP layer and whatever holds the bytes; [`FsSnippetStore`]
//! maps the hierarchical path onto a directory tree under a configured root:
//!
//! ```text
//! <root>/
//! └── 2021/
//!     └── 02/
//!         └── 05/
//!             └── 40572059     # payload bytes, written once
//! ```
//!
//! Writes are conditional-create: a path that already exists is reported as
//! [`StoreError::AlreadyExists`] rather than overwritten. Raw ids have
//! millisecond resolution, so two saves in the same millisecond target the
//! same path; the filesystem's `create_new` is what detects that collision.

use bytes::Bytes;
use snipvault::BlobPath;
use std::future::Future;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;

/// Errors surfaced by a snippet store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A blob already occupies the target path.
    #[error("blob already exists at {path}")]
    AlreadyExists { path: String },

    /// Any other storage I/O failure.
    #[error("storage i/o failure: {0}")]
    Io(#[from] io::Error),
}

/// Abstract blob store addressed by [`BlobPath`].
pub trait SnippetStore: Clone + Send + Sync + 'static {
    /// Stores `bytes` at `path`, failing if the path is already occupied.
    fn put(
        &self,
        path: &BlobPath,
        bytes: Bytes,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Reads the blob at `path`, or `None` if nothing is stored there.
    fn get(
        &self,
        path: &BlobPath,
    ) -> impl Future<Output = Result<Option<Bytes>, StoreError>> + Send;
}

/// Filesystem-backed [`SnippetStore`].
///
/// Cheap to clone; every clone shares the same root.
#[derive(Clone, Debug)]
pub struct FsSnippetStore {
    root: Arc<PathBuf>,
}

impl FsSnippetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Arc::new(root.into()),
        }
    }

    /// Resolves a blob path to its on-disk location.
    ///
    /// Joined segment by segment so the layout is identical on platforms with
    /// a different path separator.
    fn blob_file(&self, path: &BlobPath) -> PathBuf {
        path.segments()
            .fold((*self.root).clone(), |acc, segment| acc.join(segment))
    }
}

impl SnippetStore for FsSnippetStore {
    async fn put(&self, path: &BlobPath, bytes: Bytes) -> Result<(), StoreError> {
        let file = self.blob_file(path);
        if let Some(parent) = file.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let mut blob = match tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&file)
            .await
        {
            Ok(blob) => blob,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Err(StoreError::AlreadyExists {
                    path: path.as_str().to_owned(),
                });
            }
            Err(e) => return Err(e.into()),
        };
        blob.write_all(&bytes).await?;
        blob.flush().await?;
        Ok(())
    }

    async fn get(&self, path: &BlobPath) -> Result<Option<Bytes>, StoreError> {
        match tokio::fs::read(self.blob_file(path)).await {
            Ok(bytes) => Ok(Some(Bytes::from(bytes))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
