//! Memoized build and query steps
//!
//! The builder and the query engine are pure, so caching them is only a
//! performance concern. A [`Session`] keeps one slot per step:
//! - the built [`Directory`], keyed on pointer identity of the catalog and
//!   entity list `Arc`s (callers hand in a new `Arc` whenever data changes)
//! - the last directory view, keyed on the built directory and an equal
//!   [`QueryState`]
//!
//! A cached result is always identical to what a fresh computation returns.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::catalog::HierarchyCatalog;
use crate::directory::{build_with, Directory};
use crate::entity::Entity;
use crate::normalize::{CaseFold, Normalizer};
use crate::query::{query_positions, resolve_positions, DirectoryView, GroupPositions, QueryState};

struct BuildSlot {
    catalog: Arc<HierarchyCatalog>,
    entities: Arc<Vec<Entity>>,
    directory: Arc<Directory>,
}

struct ViewSlot {
    directory: Arc<Directory>,
    state: QueryState,
    groups: Arc<Vec<GroupPositions>>,
}

/// Cache hit/miss counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub build_hits: usize,
    pub build_misses: usize,
    pub view_hits: usize,
    pub view_misses: usize,
}

/// Result of [`Session::query`]; owns everything the view borrows from
#[derive(Debug, Clone)]
pub struct QueryResult {
    directory: Arc<Directory>,
    groups: Arc<Vec<GroupPositions>>,
}

impl QueryResult {
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn view(&self) -> DirectoryView<'_> {
        resolve_positions(self.directory.nodes(), &self.groups)
    }
}

/// Memoizing front end for the directory engine
pub struct Session {
    normalizer: Box<dyn Normalizer + Send + Sync>,
    build_slot: Mutex<Option<BuildSlot>>,
    view_slot: Mutex<Option<ViewSlot>>,
    stats: Mutex<SessionStats>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_normalizer(CaseFold)
    }

    pub fn with_normalizer(normalizer: impl Normalizer + Send + Sync + 'static) -> Self {
        Self {
            normalizer: Box::new(normalizer),
            build_slot: Mutex::new(None),
            view_slot: Mutex::new(None),
            stats: Mutex::new(SessionStats::default()),
        }
    }

    pub fn stats(&self) -> SessionStats {
        *self.stats.lock()
    }

    /// Built directory for these inputs, reused while both `Arc`s are unchanged
    pub fn directory(
        &self,
        catalog: &Arc<HierarchyCatalog>,
        entities: &Arc<Vec<Entity>>,
    ) -> Arc<Directory> {
        let mut slot = self.build_slot.lock();
        if let Some(cached) = slot.as_ref() {
            if Arc::ptr_eq(&cached.catalog, catalog) && Arc::ptr_eq(&cached.entities, entities) {
                self.stats.lock().build_hits += 1;
                return Arc::clone(&cached.directory);
            }
        }

        let directory = Arc::new(build_with(catalog, entities, self.normalizer.as_ref()));
        *slot = Some(BuildSlot {
            catalog: Arc::clone(catalog),
            entities: Arc::clone(entities),
            directory: Arc::clone(&directory),
        });
        self.stats.lock().build_misses += 1;
        directory
    }

    /// Grouped view for `state`, reused while the directory and state are unchanged
    pub fn query(
        &self,
        catalog: &Arc<HierarchyCatalog>,
        entities: &Arc<Vec<Entity>>,
        state: &QueryState,
    ) -> QueryResult {
        let directory = self.directory(catalog, entities);

        let mut slot = self.view_slot.lock();
        if let Some(cached) = slot.as_ref() {
            if Arc::ptr_eq(&cached.directory, &directory) && cached.state == *state {
                self.stats.lock().view_hits += 1;
                return QueryResult {
                    directory,
                    groups: Arc::clone(&cached.groups),
                };
            }
        }

        let groups = Arc::new(query_positions(directory.nodes(), state));
        *slot = Some(ViewSlot {
            directory: Arc::clone(&directory),
            state: state.clone(),
            groups: Arc::clone(&groups),
        });
        self.stats.lock().view_misses += 1;
        QueryResult { directory, groups }
    }

    /// Drop both cache slots
    pub fn clear(&self) {
        *self.build_slot.lock() = None;
        *self.view_slot.lock() = None;
    }
}
