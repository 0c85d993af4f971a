use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::model::Event;
use crate::storage::KeyValueStore;

/// Storage key holding the serialized favorites list.
const FAVORITES_KEY: &str = "scorepulse_favorites";

/// Single source of truth for which matches the user has starred.
///
/// Matches are kept in the order they were starred, with an id set alongside
/// for O(1) membership checks. Both structures are only touched through
/// [`Self::insert_entry`] and [`Self::remove_entry`], so they cannot
/// diverge. The backing [`KeyValueStore`] is injected; there is no ambient
/// global instance.
///
/// In-memory state is authoritative for the session: every mutation returns
/// once memory is updated, and the snapshot is handed to a single background
/// writer task whose failure only risks losing the update across a restart.
/// The one writer keeps at most one store operation outstanding, so a later
/// snapshot can never be overwritten by an earlier, slower write.
pub struct FavoritesStore {
    store: Arc<dyn KeyValueStore>,
    writes: mpsc::UnboundedSender<PersistOp>,
    ordered: Vec<Event>,
    ids: HashSet<String>,
    loaded: bool,
}

enum PersistOp {
    Write(String),
    Clear,
}

impl FavoritesStore {
    /// Create an empty store backed by `store`.
    ///
    /// Spawns the background writer task, so this must be called from
    /// within a tokio runtime. Call [`Self::load`] once before relying on
    /// queries; until it resolves, every match reads as not-favorited.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let writes = spawn_writer(Arc::clone(&store));
        Self {
            store,
            writes,
            ordered: Vec::new(),
            ids: HashSet::new(),
            loaded: false,
        }
    }

    /// Load the persisted list. Missing, unreadable, or corrupt data all
    /// mean "no favorites" rather than an error. Runs once per store;
    /// repeated calls are no-ops and never re-replace live state.
    pub async fn load(&mut self) {
        if self.loaded {
            return;
        }
        match self.store.get(FAVORITES_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Event>>(&raw) {
                Ok(events) => {
                    self.ids = events.iter().map(|e| e.id.clone()).collect();
                    self.ordered = events;
                    debug!(count = self.ordered.len(), "loaded favorites");
                }
                Err(e) => warn!(error = %e, "corrupt favorites entry, starting empty"),
            },
            Ok(None) => {}
            Err(e) => warn!(error = %e, "failed to read favorites, starting empty"),
        }
        self.loaded = true;
    }

    /// O(1) membership check. `false` for anything not present, including
    /// before [`Self::load`] has run.
    pub fn is_favorite(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Star a match. Idempotent: adding an already-starred match changes
    /// nothing and triggers no write.
    pub fn add(&mut self, event: Event) {
        if self.insert_entry(event) {
            self.persist();
        }
    }

    /// Unstar a match. Idempotent like [`Self::add`].
    pub fn remove(&mut self, id: &str) {
        if self.remove_entry(id) {
            self.persist();
        }
    }

    /// Star or unstar. Exactly one of the two happens; returns whether the
    /// match is favorited afterwards.
    pub fn toggle(&mut self, event: Event) -> bool {
        if self.is_favorite(&event.id) {
            self.remove(&event.id);
            false
        } else {
            self.add(event);
            true
        }
    }

    /// Drop every favorite and delete the stored entry.
    pub fn clear_all(&mut self) {
        self.ordered.clear();
        self.ids.clear();
        if self.writes.send(PersistOp::Clear).is_err() {
            warn!("favorites writer is gone, clear not persisted");
        }
    }

    /// Favorites in the order they were starred.
    pub fn favorites(&self) -> &[Event] {
        &self.ordered
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Whether the persisted list has been loaded for this process.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    fn insert_entry(&mut self, event: Event) -> bool {
        if !self.ids.insert(event.id.clone()) {
            return false;
        }
        self.ordered.push(event);
        debug_assert_eq!(self.ids.len(), self.ordered.len());
        true
    }

    fn remove_entry(&mut self, id: &str) -> bool {
        if !self.ids.remove(id) {
            return false;
        }
        self.ordered.retain(|e| e.id != id);
        debug_assert_eq!(self.ids.len(), self.ordered.len());
        true
    }

    /// Queue the current list for the background writer. The caller never
    /// blocks on the store.
    fn persist(&self) {
        match serde_json::to_string(&self.ordered) {
            Ok(payload) => {
                if self.writes.send(PersistOp::Write(payload)).is_err() {
                    warn!("favorites writer is gone, update not persisted");
                }
            }
            Err(e) => warn!(error = %e, "failed to serialize favorites"),
        }
    }
}

/// One writer task owns all persistence for the favorites key: operations
/// run strictly in submission order with at most one outstanding store call,
/// and a backlog of queued snapshots is coalesced to the newest. Failed
/// writes are logged and dropped. The task exits when the store is dropped.
fn spawn_writer(store: Arc<dyn KeyValueStore>) -> mpsc::UnboundedSender<PersistOp> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        while let Some(mut op) = rx.recv().await {
            while let Ok(newer) = rx.try_recv() {
                op = newer;
            }
            let result = match &op {
                PersistOp::Write(payload) => store.set(FAVORITES_KEY, payload).await,
                PersistOp::Clear => store.remove(FAVORITES_KEY).await,
            };
            if let Err(e) = result {
                warn!(error = %e, "failed to persist favorites");
            }
        }
    });
    tx
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::error::Result;
    use crate::model::sample_event;
    use crate::storage::MemoryStore;

    fn new_store() -> (Arc<MemoryStore>, FavoritesStore) {
        let backing = Arc::new(MemoryStore::new());
        let favorites = FavoritesStore::new(backing.clone());
        (backing, favorites)
    }

    fn event(id: &str) -> Event {
        sample_event(id, "Soccer", "2024-01-01".parse().ok())
    }

    /// Let the background writer run on the current-thread test runtime.
    async fn settle() {
        tokio::task::yield_now().await;
    }

    async fn persisted(backing: &MemoryStore) -> Option<Vec<Event>> {
        backing
            .get(FAVORITES_KEY)
            .await
            .unwrap()
            .map(|raw| serde_json::from_str(&raw).unwrap())
    }

    #[tokio::test]
    async fn add_then_remove_round_trips_membership() {
        let (_, mut favorites) = new_store();

        favorites.add(event("1"));
        assert!(favorites.is_favorite("1"));

        favorites.remove("1");
        assert!(!favorites.is_favorite("1"));
        assert!(favorites.is_empty());
    }

    #[tokio::test]
    async fn add_is_idempotent() {
        let (_, mut favorites) = new_store();

        favorites.add(event("1"));
        favorites.add(event("1"));

        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites.favorites().len(), 1);
    }

    #[tokio::test]
    async fn remove_of_absent_id_is_a_no_op() {
        let (backing, mut favorites) = new_store();

        favorites.remove("missing");
        settle().await;

        assert!(favorites.is_empty());
        assert_eq!(persisted(backing.as_ref()).await, None);
    }

    #[tokio::test]
    async fn toggle_is_its_own_inverse() {
        let (_, mut favorites) = new_store();

        assert!(favorites.toggle(event("1")));
        assert!(favorites.is_favorite("1"));

        assert!(!favorites.toggle(event("1")));
        assert!(!favorites.is_favorite("1"));
    }

    #[tokio::test]
    async fn preserves_insertion_order() {
        let (_, mut favorites) = new_store();

        favorites.add(event("3"));
        favorites.add(event("1"));
        favorites.add(event("2"));

        let order: Vec<&str> = favorites.favorites().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(order, ["3", "1", "2"]);
    }

    #[tokio::test]
    async fn mutations_persist_to_the_backing_store() {
        let (backing, mut favorites) = new_store();

        favorites.add(event("1"));
        settle().await;
        let stored = persisted(backing.as_ref()).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, "1");

        favorites.remove("1");
        settle().await;
        assert_eq!(persisted(backing.as_ref()).await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn load_restores_a_previous_session() {
        let backing = Arc::new(MemoryStore::new());

        let mut favorites = FavoritesStore::new(backing.clone());
        favorites.add(event("1"));
        favorites.add(event("2"));
        settle().await;

        let mut restored = FavoritesStore::new(backing);
        assert!(!restored.is_loaded());
        restored.load().await;
        assert!(restored.is_loaded());
        assert_eq!(restored.len(), 2);
        assert!(restored.is_favorite("1"));
        assert!(restored.is_favorite("2"));
    }

    #[tokio::test]
    async fn load_runs_once_per_store() {
        let backing = Arc::new(MemoryStore::new());

        let mut favorites = FavoritesStore::new(backing.clone());
        favorites.add(event("1"));
        settle().await;

        let mut restored = FavoritesStore::new(backing);
        restored.load().await;
        restored.remove("1");

        // a second call must not resurrect the removed favorite
        restored.load().await;
        assert!(!restored.is_favorite("1"));
        assert!(restored.is_empty());
    }

    #[tokio::test]
    async fn corrupt_persisted_data_loads_as_empty() {
        let backing = Arc::new(MemoryStore::new());
        backing.set(FAVORITES_KEY, "{not json").await.unwrap();

        let mut favorites = FavoritesStore::new(backing);
        favorites.load().await;

        assert!(favorites.is_loaded());
        assert!(favorites.is_empty());
    }

    #[tokio::test]
    async fn clear_all_empties_store_and_removes_entry() {
        let (backing, mut favorites) = new_store();

        favorites.add(event("1"));
        favorites.add(event("2"));
        settle().await;

        favorites.clear_all();
        settle().await;

        assert!(favorites.is_empty());
        assert!(!favorites.is_favorite("1"));
        assert_eq!(persisted(backing.as_ref()).await, None);
    }

    #[tokio::test]
    async fn id_set_tracks_list_length_through_mutations() {
        let (_, mut favorites) = new_store();

        for id in ["1", "2", "3"] {
            favorites.add(event(id));
            assert_eq!(favorites.favorites().len(), favorites.len());
        }
        favorites.toggle(event("2"));
        assert_eq!(favorites.len(), 2);
        favorites.remove("1");
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites.favorites().len(), 1);
    }

    /// Delays its first write long enough for a second mutation to queue
    /// behind it.
    #[derive(Default)]
    struct DelayedFirstWriteStore {
        inner: MemoryStore,
        first_write_started: AtomicBool,
    }

    #[async_trait]
    impl KeyValueStore for DelayedFirstWriteStore {
        async fn get(&self, key: &str) -> Result<Option<String>> {
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: &str) -> Result<()> {
            if !self.first_write_started.swap(true, Ordering::SeqCst) {
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
            self.inner.set(key, value).await
        }

        async fn remove(&self, key: &str) -> Result<()> {
            self.inner.remove(key).await
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn slow_earlier_write_cannot_clobber_later_snapshot() {
        let backing = Arc::new(DelayedFirstWriteStore::default());
        let mut favorites = FavoritesStore::new(backing.clone());

        favorites.add(event("1"));
        favorites.remove("1");

        // generous margin for the delayed write plus the one behind it
        tokio::time::sleep(Duration::from_millis(300)).await;

        let stored = persisted(&backing.inner).await.unwrap();
        assert!(
            stored.is_empty(),
            "persisted snapshot must match the final in-memory state"
        );
    }
}
