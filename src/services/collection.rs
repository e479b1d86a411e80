use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::AppResult;
use crate::models::Identified;

/// Backing store of a [`ResourceCollection`]: one CRUD resource.
#[async_trait]
pub trait CollectionSource: Send + Sync {
    type Item: Identified + Clone + Send + Sync;
    type Payload: Send + Sync;

    fn resource_name(&self) -> &'static str;

    async fn fetch_all(&self) -> AppResult<Vec<Self::Item>>;
    async fn create(&self, payload: &Self::Payload) -> AppResult<Self::Item>;
    async fn update(&self, id: &str, payload: &Self::Payload) -> AppResult<Self::Item>;
    async fn delete(&self, id: &str) -> AppResult<()>;
}

/// Client-side view of a resource list: `{items, loading, error}` plus
/// `add`/`edit`/`remove`, each of which refetches the list on success.
/// Nothing is removed or inserted optimistically.
pub struct ResourceCollection<S: CollectionSource> {
    source: S,
    items: Vec<S::Item>,
    loading: bool,
    error: Option<String>,
}

impl<S: CollectionSource> ResourceCollection<S> {
    /// Starts in the loading state until the first [`refresh`](Self::refresh).
    pub fn new(source: S) -> Self {
        Self {
            source,
            items: Vec::new(),
            loading: true,
            error: None,
        }
    }

    pub fn items(&self) -> &[S::Item] {
        &self.items
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn find(&self, id: &str) -> Option<&S::Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub async fn refresh(&mut self) -> AppResult<()> {
        self.loading = true;
        let result = self.source.fetch_all().await;
        self.loading = false;

        match result {
            Ok(items) => {
                debug!(resource = self.source.resource_name(), count = items.len(), "collection refreshed");
                self.items = items;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                warn!(resource = self.source.resource_name(), error = %e, "collection refresh failed");
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    pub async fn add(&mut self, payload: &S::Payload) -> AppResult<S::Item> {
        let item = self.source.create(payload).await?;
        self.refetch_after_mutation().await;
        Ok(item)
    }

    pub async fn edit(&mut self, id: &str, payload: &S::Payload) -> AppResult<S::Item> {
        let item = self.source.update(id, payload).await?;
        self.refetch_after_mutation().await;
        Ok(item)
    }

    pub async fn remove(&mut self, id: &str) -> AppResult<()> {
        self.source.delete(id).await?;
        self.refetch_after_mutation().await;
        Ok(())
    }

    // The mutation itself succeeded; a failed refetch only marks the list stale.
    async fn refetch_after_mutation(&mut self) {
        if let Err(e) = self.refresh().await {
            warn!(resource = self.source.resource_name(), error = %e, "refetch after mutation failed");
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::error::AppError;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[derive(Clone, Debug, PartialEq)]
    pub(crate) struct Item {
        pub id: String,
        pub name: String,
    }

    impl Identified for Item {
        fn id(&self) -> &str {
            &self.id
        }
    }

    /// In-memory source with call counters and a switch to fail mutations.
    #[derive(Default)]
    pub(crate) struct MemorySource {
        pub items: Mutex<Vec<Item>>,
        pub fetches: AtomicUsize,
        pub mutations: AtomicUsize,
        pub fail_mutations: AtomicBool,
        next_id: AtomicUsize,
    }

    impl MemorySource {
        pub(crate) fn with_items(count: usize) -> Self {
            let source = Self::default();
            {
                let mut items = source.items.lock().unwrap();
                for i in 0..count {
                    items.push(Item { id: format!("i{i}"), name: format!("Item {i}") });
                }
            }
            source.next_id.store(count, Ordering::SeqCst);
            source
        }

        fn check(&self) -> AppResult<()> {
            self.mutations.fetch_add(1, Ordering::SeqCst);
            if self.fail_mutations.load(Ordering::SeqCst) {
                return Err(AppError::api(500, "Server unavailable"));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl CollectionSource for MemorySource {
        type Item = Item;
        type Payload = String;

        fn resource_name(&self) -> &'static str {
            "item"
        }

        async fn fetch_all(&self) -> AppResult<Vec<Item>> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(self.items.lock().unwrap().clone())
        }

        async fn create(&self, payload: &String) -> AppResult<Item> {
            self.check()?;
            let id = format!("i{}", self.next_id.fetch_add(1, Ordering::SeqCst));
            let item = Item { id, name: payload.clone() };
            self.items.lock().unwrap().push(item.clone());
            Ok(item)
        }

        async fn update(&self, id: &str, payload: &String) -> AppResult<Item> {
            self.check()?;
            let mut items = self.items.lock().unwrap();
            let item = items
                .iter_mut()
                .find(|i| i.id == id)
                .ok_or_else(|| AppError::not_found("item"))?;
            item.name = payload.clone();
            Ok(item.clone())
        }

        async fn delete(&self, id: &str) -> AppResult<()> {
            self.check()?;
            self.items.lock().unwrap().retain(|i| i.id != id);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::MemorySource;
    use super::*;
    use std::sync::atomic::Ordering;

    #[tokio::test]
    async fn starts_loading_until_first_refresh() {
        let mut collection = ResourceCollection::new(MemorySource::with_items(3));
        assert!(collection.loading());
        collection.refresh().await.unwrap();
        assert!(!collection.loading());
        assert_eq!(collection.items().len(), 3);
        assert!(collection.find("i1").is_some());
    }

    #[test]
    fn refresh_outside_runtime() {
        let mut collection = ResourceCollection::new(MemorySource::with_items(2));
        tokio_test::block_on(collection.refresh()).unwrap();
        assert_eq!(collection.items().len(), 2);
        assert!(collection.error().is_none());
    }

    #[tokio::test]
    async fn mutations_refetch() {
        let mut collection = ResourceCollection::new(MemorySource::with_items(1));
        collection.refresh().await.unwrap();

        collection.add(&"New".to_string()).await.unwrap();
        assert_eq!(collection.items().len(), 2);
        collection.edit("i0", &"Renamed".to_string()).await.unwrap();
        assert_eq!(collection.find("i0").unwrap().name, "Renamed");
        collection.remove("i0").await.unwrap();
        assert_eq!(collection.items().len(), 1);

        assert_eq!(collection.source().fetches.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn failed_mutation_leaves_list_untouched() {
        let mut collection = ResourceCollection::new(MemorySource::with_items(2));
        collection.refresh().await.unwrap();
        collection.source().fail_mutations.store(true, Ordering::SeqCst);

        let err = collection.remove("i0").await.unwrap_err();
        assert_eq!(err.user_message(), "Server unavailable");
        assert_eq!(collection.items().len(), 2);
        assert_eq!(collection.source().fetches.load(Ordering::SeqCst), 1);
    }
}
