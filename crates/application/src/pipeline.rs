//! Debounced, switch-to-latest search pipeline
//!
//! One [`QueryPipeline`] exists per search screen. Raw edits flow in through
//! [`QueryPipeline::set_query`]; a value is admitted once it has been stable
//! for the debounce quiet period, differs from the last admitted value, and
//! is non-empty after trimming.
//!
//! Cancellation is scoped to admissions. An edit restarts only the
//! quiet-period timer, while a fetch already in flight for an admitted query
//! keeps running; admitting a new value cancels that fetch before its own
//! starts, so at most one remote query is ever active and a slow stale
//! response can never overwrite a newer query's results. A monotonically
//! increasing generation token is minted per admission, and any completion
//! holding a stale token is discarded unconditionally. Dropping the pipeline
//! aborts whatever is outstanding.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use aperture_domain::{DEFAULT_DEBOUNCE_MS, MAX_PAGE_SIZE, Page, Photo, QueryState, SearchEntry};

use crate::classifier::classify;
use crate::error::FetchResult;
use crate::ports::{CatalogError, PhotoCatalog, SearchHistoryStore, StoreError};

/// Tuning knobs for a pipeline instance.
#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig {
    /// Quiet period an edit must survive before admission.
    pub debounce: Duration,
    /// Page size for the first result page of an admitted query; clamped
    /// to the catalog maximum on construction.
    pub page_size: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            page_size: MAX_PAGE_SIZE,
        }
    }
}

/// One delivered pipeline output: the admitted query and the first page of
/// its results (or its classified failure).
#[derive(Debug)]
pub struct SearchUpdate {
    /// The admitted (trimmed) query.
    pub query: String,
    /// Page 1 of the results for that query.
    pub page: FetchResult<Page<Photo>>,
}

/// Errors from an explicit query submission.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The submission was blank after trimming; nothing was persisted and
    /// no fetch was started.
    #[error("query is blank")]
    Blank,

    /// Persisting the query failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Debounced search pipeline driving zero-or-one active catalog query.
pub struct QueryPipeline<C, H> {
    catalog: Arc<C>,
    history: Arc<H>,
    config: PipelineConfig,
    state: Arc<Mutex<QueryState>>,
    generation: Arc<AtomicU64>,
    debounce_task: Option<JoinHandle<()>>,
    fetch_task: Arc<Mutex<Option<JoinHandle<()>>>>,
    updates: mpsc::Sender<SearchUpdate>,
}

impl<C, H> QueryPipeline<C, H>
where
    C: PhotoCatalog + 'static,
    H: SearchHistoryStore + 'static,
{
    /// Creates a pipeline and the receiver its outputs are delivered on.
    ///
    /// Outputs arrive in admission order: a new admission aborts the
    /// previous admission's fetch before its own starts.
    #[must_use]
    pub fn new(
        catalog: Arc<C>,
        history: Arc<H>,
        config: PipelineConfig,
    ) -> (Self, mpsc::Receiver<SearchUpdate>) {
        let config = PipelineConfig {
            page_size: config.page_size.min(MAX_PAGE_SIZE),
            ..config
        };
        let (updates, receiver) = mpsc::channel(8);
        let pipeline = Self {
            catalog,
            history,
            config,
            state: Arc::new(Mutex::new(QueryState::new())),
            generation: Arc::new(AtomicU64::new(0)),
            debounce_task: None,
            fetch_task: Arc::new(Mutex::new(None)),
            updates,
        };
        (pipeline, receiver)
    }

    /// Records a raw edit and restarts the debounce window.
    ///
    /// Only the pending quiet-period timer is cancelled here. A fetch in
    /// flight for an admitted query keeps running; it is cancelled at the
    /// next admission, not by keystrokes that may never admit.
    pub fn set_query(&mut self, raw: &str) {
        lock(&self.state).set_raw(raw);
        if let Some(timer) = self.debounce_task.take() {
            timer.abort();
        }

        let state = Arc::clone(&self.state);
        let catalog = Arc::clone(&self.catalog);
        let generation = Arc::clone(&self.generation);
        let fetch_slot = Arc::clone(&self.fetch_task);
        let updates = self.updates.clone();
        let debounce = self.config.debounce;
        let page_size = self.config.page_size;

        self.debounce_task = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;

            let admitted = {
                let mut state = lock(&state);
                let Some(candidate) = state.candidate().map(str::to_owned) else {
                    return;
                };
                state.mark_admitted(candidate.clone());
                candidate
            };
            tracing::debug!(query = %admitted, "query admitted");

            start_fetch(
                &catalog,
                &fetch_slot,
                &generation,
                &updates,
                admitted,
                page_size,
            );
        }));
    }

    /// Explicitly submits a query: persists it to the history store and
    /// admits it immediately, bypassing the debounce.
    ///
    /// # Errors
    /// [`SubmitError::Blank`] for a whitespace-only submission (rejected
    /// before the store is touched, with no fetch triggered), or the store
    /// failure from persisting.
    pub async fn submit(&mut self, raw: &str) -> Result<(), SubmitError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SubmitError::Blank);
        }
        let submitted = trimmed.to_owned();

        self.history.insert(&submitted).await?;
        tracing::debug!(query = %submitted, "query submitted");

        {
            let mut state = lock(&self.state);
            state.set_raw(submitted.clone());
            state.mark_admitted(submitted.clone());
        }
        if let Some(timer) = self.debounce_task.take() {
            timer.abort();
        }
        start_fetch(
            &self.catalog,
            &self.fetch_task,
            &self.generation,
            &self.updates,
            submitted,
            self.config.page_size,
        );
        Ok(())
    }

    /// Recent submissions, newest first.
    ///
    /// # Errors
    /// Propagates the store failure.
    pub async fn recent_searches(&self, limit: usize) -> Result<Vec<SearchEntry>, StoreError> {
        self.history.recent(limit).await
    }

    /// Removes one recent search (exact-case match).
    ///
    /// # Errors
    /// Propagates the store failure.
    pub async fn remove_search(&self, query: &str) -> Result<(), StoreError> {
        self.history.delete(query).await
    }

    /// Clears the recent-search history.
    ///
    /// # Errors
    /// Propagates the store failure.
    pub async fn clear_searches(&self) -> Result<(), StoreError> {
        self.history.clear().await
    }

    /// The last admitted query, if any.
    #[must_use]
    pub fn last_admitted(&self) -> Option<String> {
        lock(&self.state).last_admitted.clone()
    }
}

impl<C, H> Drop for QueryPipeline<C, H> {
    fn drop(&mut self) {
        if let Some(timer) = self.debounce_task.take() {
            timer.abort();
        }
        if let Some(fetch) = lock(&self.fetch_task).take() {
            fetch.abort();
        }
    }
}

/// Locks pipeline state, recovering the guard if a panicking task poisoned
/// it.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Admits one query: cancels the previous admission's fetch, mints the next
/// generation token, and starts the new fetch in its place.
fn start_fetch<C: PhotoCatalog + 'static>(
    catalog: &Arc<C>,
    fetch_slot: &Arc<Mutex<Option<JoinHandle<()>>>>,
    generation: &Arc<AtomicU64>,
    updates: &mpsc::Sender<SearchUpdate>,
    query: String,
    page_size: usize,
) {
    // Switch-to-latest: the in-flight fetch dies before the new one starts.
    if let Some(previous) = lock(fetch_slot).take() {
        previous.abort();
    }
    let token = generation.fetch_add(1, Ordering::SeqCst) + 1;

    let catalog = Arc::clone(catalog);
    let generation = Arc::clone(generation);
    let updates = updates.clone();
    let task = tokio::spawn(async move {
        run_search(&*catalog, query, token, &generation, &updates, page_size).await;
    });
    *lock(fetch_slot) = Some(task);
}

/// Fetches page 1 for an admitted query and delivers it, unless the token
/// went stale while the fetch was in flight.
async fn run_search<C: PhotoCatalog>(
    catalog: &C,
    query: String,
    token: u64,
    generation: &AtomicU64,
    updates: &mpsc::Sender<SearchUpdate>,
    page_size: usize,
) {
    let outcome = catalog.search_photos(&query, 1, page_size).await;

    if generation.load(Ordering::SeqCst) != token {
        tracing::debug!(query = %query, "stale completion discarded");
        return;
    }

    let page = match outcome {
        // Cancellation belongs to the scope, never to the output stream.
        Err(CatalogError::Cancelled) => return,
        Ok(results) => Ok(Page::assemble(1, results.results)),
        Err(error) => Err(classify(error)),
    };
    let _ = updates.send(SearchUpdate { query, page }).await;
}
