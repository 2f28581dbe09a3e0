//! Search executor.
//!
//! Evaluates a [`QueryDescriptor`] against a [`ThesisStore`]. No-op
//! descriptors follow the configured [`EmptyQueryPolicy`]; everything else
//! goes to [`ThesisStore::find_by_filter`]. The store call is the only
//! await point and can be cut short with a [`CancellationToken`].

use manggad_config::{EmptyQueryPolicy, SearchConfig};
use manggad_core::entities::ThesisRecord;
use tokio_util::sync::CancellationToken;

use crate::error::SearchError;
use crate::filter::{FilterSelection, QueryDescriptor, build_descriptor};
use crate::matching::filter_records;
use crate::sample::sample_theses;
use crate::store::ThesisStore;

pub struct SearchExecutor<S> {
    store: S,
    empty_query: EmptyQueryPolicy,
    fallback_to_sample: bool,
}

impl<S: ThesisStore> SearchExecutor<S> {
    /// Executor with the default policy: list everything on an empty query,
    /// no sample fallback.
    pub fn new(store: S) -> Self {
        Self {
            store,
            empty_query: EmptyQueryPolicy::default(),
            fallback_to_sample: false,
        }
    }

    pub fn from_config(store: S, config: &SearchConfig) -> Self {
        Self {
            store,
            empty_query: config.empty_query,
            fallback_to_sample: config.fallback_to_sample,
        }
    }

    #[must_use]
    pub const fn with_empty_query(mut self, policy: EmptyQueryPolicy) -> Self {
        self.empty_query = policy;
        self
    }

    #[must_use]
    pub const fn with_sample_fallback(mut self, enabled: bool) -> Self {
        self.fallback_to_sample = enabled;
        self
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Matching records in store order.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Cancelled`] if `cancel` fires before the store answers.
    /// - [`SearchError::DataStoreUnavailable`] if the store fails and sample
    ///   fallback is off.
    pub async fn execute(
        &self,
        descriptor: &QueryDescriptor,
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<ThesisRecord>, SearchError> {
        let noop = descriptor.is_noop();
        if noop && self.empty_query == EmptyQueryPolicy::Empty {
            tracing::debug!(policy = %self.empty_query, "empty query short-circuited");
            return Ok(Vec::new());
        }

        let lookup = async {
            if noop {
                self.store.list_all().await
            } else {
                self.store.find_by_filter(descriptor).await
            }
        };

        let outcome = if let Some(token) = cancel {
            tokio::select! {
                biased;
                () = token.cancelled() => {
                    tracing::debug!("search cancelled");
                    return Err(SearchError::Cancelled);
                }
                result = lookup => result,
            }
        } else {
            lookup.await
        };

        match outcome {
            Ok(records) => {
                tracing::debug!(
                    terms = descriptor.text_terms.len(),
                    year = ?descriptor.year_filter,
                    departments = descriptor.department_filter.len(),
                    programs = descriptor.program_filter.len(),
                    matched = records.len(),
                    "search executed"
                );
                Ok(records)
            }
            Err(SearchError::DataStoreUnavailable(reason)) if self.fallback_to_sample => {
                tracing::warn!(%reason, "data store unavailable, serving sample theses");
                Ok(filter_records(descriptor, &sample_theses()))
            }
            Err(error) => Err(error),
        }
    }

    /// Build the descriptor for `selection` and execute it.
    ///
    /// # Errors
    ///
    /// [`SearchError::MalformedFilter`] before any store access, otherwise as
    /// [`Self::execute`].
    pub async fn search(
        &self,
        selection: &FilterSelection,
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<ThesisRecord>, SearchError> {
        let descriptor = build_descriptor(selection)?;
        self.execute(&descriptor, cancel).await
    }

    /// Add one recommendation to `id` and return the new count.
    ///
    /// # Errors
    ///
    /// [`SearchError::NotFound`] for an unknown id.
    pub async fn recommend(&self, id: &str) -> Result<u32, SearchError> {
        let count = self.store.increment_recommendation(id).await?;
        tracing::debug!(id, count, "recommendation recorded");
        Ok(count)
    }
}
