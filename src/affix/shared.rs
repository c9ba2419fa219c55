//! Swappable handle to a built affix index.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::affix::AffixSearcher;

/// A cloneable handle that readers use to reach the current [`AffixSearcher`].
///
/// Readers take a snapshot with [`current`](Self::current) and search it
/// without holding any lock. Rebuilding happens off to the side: a new
/// searcher is constructed independently and then swapped in with
/// [`replace`](Self::replace). Snapshots taken before the swap keep using
/// the old index until they are dropped.
#[derive(Debug, Clone)]
pub struct SharedAffixSearcher {
    inner: Arc<RwLock<Arc<AffixSearcher>>>,
}

impl SharedAffixSearcher {
    pub fn new(searcher: AffixSearcher) -> Self {
        SharedAffixSearcher {
            inner: Arc::new(RwLock::new(Arc::new(searcher))),
        }
    }

    /// Snapshot of the index visible right now.
    pub fn current(&self) -> Arc<AffixSearcher> {
        Arc::clone(&self.inner.read())
    }

    /// Publish a freshly built index, returning the one it replaced.
    pub fn replace(&self, searcher: AffixSearcher) -> Arc<AffixSearcher> {
        let fresh = Arc::new(searcher);
        std::mem::replace(&mut *self.inner.write(), fresh)
    }
}

impl From<AffixSearcher> for SharedAffixSearcher {
    fn from(searcher: AffixSearcher) -> Self {
        SharedAffixSearcher::new(searcher)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::affix::WordformId;

    #[test]
    fn test_replace_swaps_for_new_readers_only() {
        let shared = SharedAffixSearcher::new(
            AffixSearcher::new(vec![("nipâw", WordformId(1))]).unwrap(),
        );
        let before = shared.current();

        let old = shared.replace(AffixSearcher::new(vec![("mîcisow", WordformId(2))]).unwrap());

        assert!(Arc::ptr_eq(&before, &old));
        assert_eq!(before.search_by_prefix("ni"), vec![WordformId(1)]);
        assert!(shared.current().search_by_prefix("ni").is_empty());
        assert_eq!(shared.current().search_by_prefix("mi"), vec![WordformId(2)]);
    }

    #[test]
    fn test_concurrent_readers() {
        let shared = SharedAffixSearcher::new(
            AffixSearcher::new(vec![("nipâw", WordformId(1)), ("nipâwin", WordformId(2))]).unwrap(),
        );

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || shared.current().search_by_prefix("nipa").len())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 2);
        }
    }
}
