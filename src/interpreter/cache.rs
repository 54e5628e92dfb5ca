use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use crate::{ast::AbstractSyntax, locale::Locale};

/// Memoizes compiled syntax trees per (template path, locale) pair.
///
/// The cache is owned by the engine and lives as long as it does. Entries
/// are never evicted or invalidated; changed template source takes effect
/// only after the owning engine is rebuilt. The stored trees are immutable,
/// so one `Arc` is shared by every render of the same pair.
///
/// The lock is held only for map operations. Two renders racing on the same
/// unpopulated key may both parse; the first stored tree wins and the
/// duplicate work is discarded, which keeps observable behavior identical.
pub struct ParseCache {
    entries: Mutex<HashMap<(String, Locale), Arc<AbstractSyntax>>>,
}

impl ParseCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self { entries: Mutex::new(HashMap::new()) }
    }

    /// Returns the cached tree for the exact key, if present.
    #[must_use]
    pub fn get(&self, template_path: &str, locale: &Locale) -> Option<Arc<AbstractSyntax>> {
        self.lock().get(&(template_path.to_owned(), locale.clone())).cloned()
    }

    /// Stores `syntax` under the exact key and returns the cached tree.
    ///
    /// When another render stored a tree for the same key first, that tree
    /// is returned and `syntax` is dropped.
    pub fn store(&self,
                 template_path: &str,
                 locale: &Locale,
                 syntax: AbstractSyntax)
                 -> Arc<AbstractSyntax> {
        let mut entries = self.lock();
        Arc::clone(entries.entry((template_path.to_owned(), locale.clone()))
                          .or_insert_with(|| Arc::new(syntax)))
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<(String, Locale), Arc<AbstractSyntax>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ParseCache {
    fn default() -> Self {
        Self::new()
    }
}
