//! Data store seam for the search executor.
//!
//! [`ThesisStore`] is the only way the executor reaches thesis records.
//! Two implementations ship: [`MemoryStore`] and the libSQL-backed
//! [`ManggadService`].

use async_trait::async_trait;
use tokio::sync::RwLock;

use manggad_core::entities::ThesisRecord;
use manggad_db::service::ManggadService;

use crate::error::SearchError;
use crate::filter::QueryDescriptor;
use crate::matching::filter_records;

/// Read access plus the recommendation counter.
///
/// Results are always returned in insertion order.
#[async_trait]
pub trait ThesisStore: Send + Sync {
    /// Every record.
    async fn list_all(&self) -> Result<Vec<ThesisRecord>, SearchError>;

    /// Records passing every active part of `descriptor`.
    async fn find_by_filter(
        &self,
        descriptor: &QueryDescriptor,
    ) -> Result<Vec<ThesisRecord>, SearchError>;

    /// One record by id, or [`SearchError::NotFound`].
    async fn get(&self, id: &str) -> Result<ThesisRecord, SearchError>;

    /// Atomically add one recommendation and return the new count.
    async fn increment_recommendation(&self, id: &str) -> Result<u32, SearchError>;
}

/// In-process store backed by a vector in insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<ThesisRecord>>,
}

impl MemoryStore {
    /// Store over `records`, kept in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::DataStoreUnavailable`] for a repeated id or a
    /// blank title, the same records the database store refuses.
    pub fn new(records: Vec<ThesisRecord>) -> Result<Self, SearchError> {
        let mut accepted: Vec<ThesisRecord> = Vec::with_capacity(records.len());
        for record in records {
            check_insertable(&accepted, &record)?;
            accepted.push(record);
        }
        Ok(Self {
            records: RwLock::new(accepted),
        })
    }

    /// Append a record.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::DataStoreUnavailable`] when the id is already
    /// taken or the title is blank, matching the database constraints.
    pub async fn insert(&self, record: ThesisRecord) -> Result<(), SearchError> {
        let mut records = self.records.write().await;
        check_insertable(&records, &record)?;
        records.push(record);
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

fn check_insertable(existing: &[ThesisRecord], record: &ThesisRecord) -> Result<(), SearchError> {
    if record.title.trim().is_empty() {
        return Err(SearchError::DataStoreUnavailable(format!(
            "thesis {} has a blank title",
            record.id
        )));
    }
    if existing.iter().any(|r| r.id == record.id) {
        return Err(SearchError::DataStoreUnavailable(format!(
            "duplicate thesis id {}",
            record.id
        )));
    }
    Ok(())
}

#[async_trait]
impl ThesisStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<ThesisRecord>, SearchError> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_filter(
        &self,
        descriptor: &QueryDescriptor,
    ) -> Result<Vec<ThesisRecord>, SearchError> {
        let records = self.records.read().await;
        Ok(filter_records(descriptor, records.iter()))
    }

    async fn get(&self, id: &str) -> Result<ThesisRecord, SearchError> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| SearchError::NotFound(id.to_string()))
    }

    async fn increment_recommendation(&self, id: &str) -> Result<u32, SearchError> {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| SearchError::NotFound(id.to_string()))?;
        record.recommendation_count = record.recommendation_count.saturating_add(1);
        Ok(record.recommendation_count)
    }
}

#[async_trait]
impl ThesisStore for ManggadService {
    async fn list_all(&self) -> Result<Vec<ThesisRecord>, SearchError> {
        Ok(self.list_theses().await?)
    }

    async fn find_by_filter(
        &self,
        descriptor: &QueryDescriptor,
    ) -> Result<Vec<ThesisRecord>, SearchError> {
        Ok(self.find_theses(&descriptor.to_filter()).await?)
    }

    async fn get(&self, id: &str) -> Result<ThesisRecord, SearchError> {
        self.get_thesis(id)
            .await
            .map_err(|e| SearchError::from_lookup(e, id))
    }

    async fn increment_recommendation(&self, id: &str) -> Result<u32, SearchError> {
        Self::increment_recommendation(self, id)
            .await
            .map_err(|e| SearchError::from_lookup(e, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_theses;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    #[tokio::test]
    async fn list_all_keeps_insertion_order() {
        let store = MemoryStore::new(sample_theses()).unwrap();
        let listed = store.list_all().await.unwrap();
        assert_eq!(listed, sample_theses());
    }

    #[tokio::test]
    async fn duplicate_insert_is_rejected() {
        let store = MemoryStore::new(sample_theses()).unwrap();
        let dup = sample_theses().remove(0);
        assert!(store.insert(dup).await.is_err());
        assert_eq!(store.len().await, sample_theses().len());
    }

    #[test]
    fn construction_rejects_repeated_ids() {
        let mut records = sample_theses();
        let mut copy = records[0].clone();
        copy.title = "Another Title".into();
        records.push(copy);

        let err = MemoryStore::new(records).unwrap_err();
        assert!(matches!(err, SearchError::DataStoreUnavailable(ref m) if m.contains("duplicate")));
    }

    #[test]
    fn construction_rejects_blank_titles() {
        let mut records = sample_theses();
        records[1].title = "   ".into();
        assert!(matches!(
            MemoryStore::new(records),
            Err(SearchError::DataStoreUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn increment_saturates_at_u32_max() {
        let mut records = sample_theses();
        records[0].recommendation_count = u32::MAX - 1;
        let id = records[0].id.clone();
        let store = MemoryStore::new(records).unwrap();

        assert_eq!(store.increment_recommendation(&id).await.unwrap(), u32::MAX);
        assert_eq!(store.increment_recommendation(&id).await.unwrap(), u32::MAX);
        assert_eq!(store.list_all().await.unwrap().len(), sample_theses().len());
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let store = MemoryStore::default();
        assert!(store.is_empty().await);
        assert!(matches!(
            store.get("ths-missing").await,
            Err(SearchError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn increment_unknown_id_is_not_found() {
        let store = MemoryStore::new(sample_theses()).unwrap();
        assert!(matches!(
            store.increment_recommendation("ths-missing").await,
            Err(SearchError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn concurrent_increments_are_not_lost() {
        let store = Arc::new(MemoryStore::new(sample_theses()).unwrap());
        let id = sample_theses()[0].id.clone();
        let start = store.get(&id).await.unwrap().recommendation_count;

        let mut handles = Vec::new();
        for _ in 0..16 {
            let store = Arc::clone(&store);
            let id = id.clone();
            handles.push(tokio::spawn(async move {
                store.increment_recommendation(&id).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(
            store.get(&id).await.unwrap().recommendation_count,
            start + 16
        );
    }
}
