//! Scripted `RunSource` for engine tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::source::RunSource;
use crate::types::{CandidateRun, DispatchRequest};

/// One scripted response.
enum Scripted<T> {
    Value(T),
    TransportError,
}

/// A `RunSource` that replays scripted listings and fetches.
///
/// Scripted steps are consumed in order; when a queue runs dry the last
/// successful value repeats (an empty listing if none was scripted), so
/// loops that poll past the script see a stable remote state.
pub(crate) struct MockRunSource {
    dispatch_calls: AtomicUsize,
    list_calls: AtomicUsize,
    fetch_calls: AtomicUsize,
    listings: Mutex<VecDeque<Scripted<Vec<CandidateRun>>>>,
    last_listing: Mutex<Vec<CandidateRun>>,
    fetches: Mutex<VecDeque<Scripted<CandidateRun>>>,
    last_fetch: Mutex<Option<CandidateRun>>,
    fail_dispatch: bool,
}

impl MockRunSource {
    pub fn new() -> Self {
        Self {
            dispatch_calls: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
            fetch_calls: AtomicUsize::new(0),
            listings: Mutex::new(VecDeque::new()),
            last_listing: Mutex::new(Vec::new()),
            fetches: Mutex::new(VecDeque::new()),
            last_fetch: Mutex::new(None),
            fail_dispatch: false,
        }
    }

    pub fn with_listing(self, candidates: Vec<CandidateRun>) -> Self {
        self.listings
            .lock()
            .unwrap()
            .push_back(Scripted::Value(candidates));
        self
    }

    pub fn with_listing_error(self) -> Self {
        self.listings
            .lock()
            .unwrap()
            .push_back(Scripted::TransportError);
        self
    }

    pub fn with_fetch(self, run: CandidateRun) -> Self {
        self.fetches.lock().unwrap().push_back(Scripted::Value(run));
        self
    }

    pub fn with_fetch_error(self) -> Self {
        self.fetches
            .lock()
            .unwrap()
            .push_back(Scripted::TransportError);
        self
    }

    pub fn with_failing_dispatch(mut self) -> Self {
        self.fail_dispatch = true;
        self
    }

    pub fn dispatch_calls(&self) -> usize {
        self.dispatch_calls.load(Ordering::SeqCst)
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    fn transport_error() -> runlink_client::Error {
        runlink_client::Error::Api {
            status: 500,
            message: "scripted transport failure".to_string(),
        }
    }
}

#[async_trait]
impl RunSource for MockRunSource {
    async fn dispatch(&self, _request: &DispatchRequest) -> runlink_client::Result<()> {
        self.dispatch_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_dispatch {
            return Err(Self::transport_error());
        }
        Ok(())
    }

    async fn list_candidates(
        &self,
        _request: &DispatchRequest,
        _since: DateTime<Utc>,
    ) -> runlink_client::Result<Vec<CandidateRun>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        match self.listings.lock().unwrap().pop_front() {
            Some(Scripted::Value(candidates)) => {
                *self.last_listing.lock().unwrap() = candidates.clone();
                Ok(candidates)
            }
            Some(Scripted::TransportError) => Err(Self::transport_error()),
            None => Ok(self.last_listing.lock().unwrap().clone()),
        }
    }

    async fn fetch_run(
        &self,
        _request: &DispatchRequest,
        run_id: u64,
    ) -> runlink_client::Result<CandidateRun> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        match self.fetches.lock().unwrap().pop_front() {
            Some(Scripted::Value(run)) => {
                *self.last_fetch.lock().unwrap() = Some(run.clone());
                Ok(run)
            }
            Some(Scripted::TransportError) => Err(Self::transport_error()),
            None => self
                .last_fetch
                .lock()
                .unwrap()
                .clone()
                .ok_or_else(|| runlink_client::Error::NotFound(format!("run {run_id}"))),
        }
    }
}
