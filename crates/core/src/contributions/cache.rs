//! Process-lifetime cache for the loaded register.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use log::debug;

use super::contributions_errors::LoadError;
use super::contributions_loader::load_contributions;
use super::contributions_model::ContributionTable;

/// Lazily-initialized, explicitly-resettable cache around the register file.
///
/// The table is loaded at most once per process and shared behind `Arc`.
/// `invalidate` drops it so the next read reloads from disk; nothing else
/// ever replaces a cached table (single-owner lifecycle, no concurrent
/// writers).
pub struct TableCache {
    source: PathBuf,
    table: RwLock<Option<Arc<ContributionTable>>>,
}

impl TableCache {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            table: RwLock::new(None),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Returns the cached table, loading it on first access.
    pub fn get_or_load(&self) -> Result<Arc<ContributionTable>, LoadError> {
        {
            let guard = self
                .table
                .read()
                .map_err(|e| LoadError::Cache(e.to_string()))?;
            if let Some(table) = guard.as_ref() {
                return Ok(table.clone());
            }
        }

        let loaded = Arc::new(load_contributions(&self.source)?);
        let mut guard = self
            .table
            .write()
            .map_err(|e| LoadError::Cache(e.to_string()))?;
        *guard = Some(loaded.clone());
        Ok(loaded)
    }

    /// Drops the cached table; the next access reloads from disk.
    pub fn invalidate(&self) {
        if let Ok(mut guard) = self.table.write() {
            debug!("register cache invalidated");
            *guard = None;
        }
    }

    /// Invalidate-and-reload in one step.
    pub fn reload(&self) -> Result<Arc<ContributionTable>, LoadError> {
        self.invalidate();
        self.get_or_load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "Date,Total,Decrease,Balance,Category,Bank,Account,Shareholder,ID,Unit price,Units,Content\n";

    fn register_file(rows: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(HEADER.as_bytes()).unwrap();
        for row in rows {
            file.write_all(row.as_bytes()).unwrap();
            file.write_all(b"\n").unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_loads_once_and_caches() {
        let file = register_file(&["01/01/2024,1000,,,A,B,C,Alice,AL1,10,100,x"]);
        let cache = TableCache::new(file.path());

        let first = cache.get_or_load().unwrap();
        let second = cache.get_or_load().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 1);
    }

    #[test]
    fn test_invalidate_picks_up_new_rows() {
        let mut file = register_file(&["01/01/2024,1000,,,A,B,C,Alice,AL1,10,100,x"]);
        let cache = TableCache::new(file.path());
        assert_eq!(cache.get_or_load().unwrap().len(), 1);

        file.write_all(b"02/01/2024,2000,,,A,B,C,Alice,AL1,11,181,y\n")
            .unwrap();
        file.flush().unwrap();

        // Still served from cache until an explicit invalidation.
        assert_eq!(cache.get_or_load().unwrap().len(), 1);
        assert_eq!(cache.reload().unwrap().len(), 2);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let cache = TableCache::new("/definitely/not/here.csv");
        assert!(matches!(
            cache.get_or_load(),
            Err(LoadError::NotFound(_))
        ));
    }
}
