use std::{
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use lru::LruCache;

use crate::errors::error::{VcxAnoncredsError, VcxAnoncredsResult};

const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(16) {
    Some(capacity) => capacity,
    None => unreachable!(),
};

/// Location of the tails file of one revocation registry, named by its hash. The file
/// itself is read by the crypto provider when it needs it; holding a `TailsFile` does not
/// keep anything open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TailsFile {
    hash: String,
    path: PathBuf,
}

impl TailsFile {
    pub fn new(tails_dir: &Path, tails_hash: &str) -> Self {
        Self {
            hash: tails_hash.to_string(),
            path: tails_dir.join(tails_hash),
        }
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Bounded cache of resolved tails locations, keyed by tails hash, so concurrent
/// issuances against one registry share a single `Arc<TailsFile>`.
#[derive(Debug)]
pub struct TailsFileCache {
    inner: Mutex<LruCache<String, Arc<TailsFile>>>,
}

impl Default for TailsFileCache {
    fn default() -> Self {
        Self {
            inner: Mutex::new(LruCache::new(DEFAULT_CAPACITY)),
        }
    }
}

impl TailsFileCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(DEFAULT_CAPACITY);
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Resolves `tails_hash` under `tails_dir`. Does not touch the file system.
    pub fn open(&self, tails_dir: &Path, tails_hash: &str) -> VcxAnoncredsResult<Arc<TailsFile>> {
        let mut cache = self
            .inner
            .lock()
            .map_err(|err| VcxAnoncredsError::InvalidState(format!("Tails cache poisoned: {err}")))?;
        if let Some(handle) = cache.get(tails_hash) {
            return Ok(handle.clone());
        }
        trace!("TailsFileCache::open >>> resolving tails file {tails_hash}");
        let handle = Arc::new(TailsFile::new(tails_dir, tails_hash));
        cache.put(tails_hash.to_string(), handle.clone());
        Ok(handle)
    }

    pub fn evict(&self, tails_hash: &str) -> VcxAnoncredsResult<()> {
        let mut cache = self
            .inner
            .lock()
            .map_err(|err| VcxAnoncredsError::InvalidState(format!("Tails cache poisoned: {err}")))?;
        cache.pop(tails_hash);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|cache| cache.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
