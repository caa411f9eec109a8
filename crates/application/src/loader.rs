//! Single-subject loading projector
//!
//! [`SubjectLoader`] binds one independently fetched subject (a photo, a
//! profile) to the three-state [`UiState`] machine: `Loading` initially,
//! then `Content` or `Error`. An explicit reload passes back through
//! `Loading` first, discarding prior content; there is no
//! stale-while-revalidate state. State is published on a `watch` channel so
//! the presentation layer always sees the latest value.

use tokio::sync::watch;
use tokio::task::JoinHandle;

use aperture_domain::UiState;

use crate::error::{FetchError, FetchResult};

/// Projects one fallible fetch into an observable [`UiState`].
pub struct SubjectLoader<T> {
    state: watch::Sender<UiState<T>>,
    task: Option<JoinHandle<()>>,
}

impl<T: Clone + Send + Sync + 'static> SubjectLoader<T> {
    /// Creates a loader in the `Loading` state with nothing in flight.
    #[must_use]
    pub fn new() -> Self {
        let (state, _) = watch::channel(UiState::Loading);
        Self { state, task: None }
    }

    /// Observes the subject's state. The receiver immediately sees the
    /// current value.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<UiState<T>> {
        self.state.subscribe()
    }

    /// A snapshot of the current state.
    #[must_use]
    pub fn current(&self) -> UiState<T> {
        self.state.borrow().clone()
    }

    /// Starts (or restarts) the fetch for this subject.
    ///
    /// Any previous fetch is aborted and the state passes back through
    /// `Loading`. On completion the state becomes `Content` or `Error`; a
    /// cancelled fetch changes nothing, since its scope is being torn down
    /// or superseded.
    pub fn load<F>(&mut self, fetch: F)
    where
        F: Future<Output = FetchResult<T>> + Send + 'static,
    {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.state.send_replace(UiState::Loading);

        let state = self.state.clone();
        self.task = Some(tokio::spawn(async move {
            match fetch.await {
                Ok(data) => {
                    state.send_replace(UiState::content(data));
                }
                Err(FetchError::Cancelled) => {}
                Err(error) => {
                    tracing::debug!(%error, "subject load failed");
                    state.send_replace(UiState::error(error.to_string()));
                }
            }
        }));
    }
}

impl<T: Clone + Send + Sync + 'static> Default for SubjectLoader<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SubjectLoader<T> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
