use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Glyph to detail page URL, immutable once built
#[derive(Debug, Clone, Default)]
pub struct LinkIndex {
    links: HashMap<String, String>,
}

impl LinkIndex {
    pub fn get(&self, glyph: &str) -> Option<&str> {
        self.links.get(glyph).map(String::as_str)
    }

    pub fn contains(&self, glyph: &str) -> bool {
        self.links.contains_key(glyph)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl FromIterator<(String, String)> for LinkIndex {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            links: iter.into_iter().collect(),
        }
    }
}

/// Shared, swappable reference to the current index
///
/// Readers take a snapshot and keep using it for the whole lookup; a refresh
/// builds a new index and replaces the reference without touching old snapshots.
#[derive(Debug, Clone, Default)]
pub struct LinkIndexHandle {
    current: Arc<RwLock<Arc<LinkIndex>>>,
}

impl LinkIndexHandle {
    pub fn new(index: LinkIndex) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(index))),
        }
    }

    pub fn snapshot(&self) -> Arc<LinkIndex> {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&current)
    }

    /// Swap in a freshly built index, returning the one it replaced
    pub fn replace(&self, index: LinkIndex) -> Arc<LinkIndex> {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *current, Arc::new(index))
    }
}
