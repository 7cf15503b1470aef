//! Deterministic substitute transport for tests.
//!
//! [`InterceptingTransport`] wraps the transport a client would normally use. While
//! installed it answers every call itself, either with a configured stub outcome or by
//! handing the request to an observer, and nothing reaches the wrapped transport.
//! Once uninstalled, calls flow to the wrapped transport again.
//!
//! ```no_run
//! use http_client::{HttpClient, HttpRequest, InterceptingTransport, TransportClient};
//! use http_client::{TransportError, TransportErrorKind};
//!
//! # async fn run() {
//! let transport = InterceptingTransport::offline();
//! let client = TransportClient::new(transport.clone());
//!
//! let _guard = transport.install();
//! transport.stub(None, None, Some(TransportError::new(TransportErrorKind::Connect, "refused")));
//!
//! let request = HttpRequest::get("http://any-url.com".parse().unwrap());
//! assert!(client.perform(request).await.is_err());
//! # }
//! ```
//!
//! # State
//!
//! Stub and observer live behind a mutex shared by all clones of one harness. The
//! lock is released before an observer runs, so observers may reconfigure the harness.

mod offline;

pub use offline::OfflineTransport;

use crate::error::transport::TransportError;
use crate::outcome::RawOutcome;
use crate::request::HttpRequest;
use crate::response::ResponseMetadata;
use crate::transport::Transport;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::trace;

type RequestObserver = Arc<dyn Fn(&HttpRequest) + Send + Sync>;

#[derive(Default)]
struct InterceptionState {
    installed: bool,
    active_guards: usize,
    /// Bumped on every uninstall so guards from an earlier install are ignored.
    generation: u64,
    stub: Option<RawOutcome>,
    observer: Option<RequestObserver>,
}

impl InterceptionState {
    fn reset(&mut self) {
        *self = InterceptionState {
            generation: self.generation.wrapping_add(1),
            ..InterceptionState::default()
        };
        trace!("Request interception uninstalled");
    }
}

/// What an installed harness does with one call.
enum Interception {
    Observe(RequestObserver),
    Complete(RawOutcome),
}

/// Transport that intercepts calls while installed and delegates to `T` otherwise.
///
/// Clones share configuration, so a test keeps one clone to configure while the
/// client owns another.
pub struct InterceptingTransport<T> {
    inner: Arc<T>,
    state: Arc<Mutex<InterceptionState>>,
    intercepted: Arc<AtomicUsize>,
}

impl<T> Clone for InterceptingTransport<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            state: Arc::clone(&self.state),
            intercepted: Arc::clone(&self.intercepted),
        }
    }
}

impl InterceptingTransport<OfflineTransport> {
    /// Harness whose uninstalled behaviour never touches the network.
    pub fn offline() -> Self {
        Self::over(OfflineTransport)
    }
}

impl<T: Transport> InterceptingTransport<T> {
    /// Wrap `inner`, which keeps serving calls whenever the harness is not installed.
    pub fn over(inner: T) -> Self {
        Self {
            inner: Arc::new(inner),
            state: Arc::new(Mutex::new(InterceptionState::default())),
            intercepted: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Start intercepting every call.
    ///
    /// Installing an already installed harness keeps its configuration. The harness
    /// uninstalls when the last outstanding guard drops, which also happens while
    /// unwinding from a failed test.
    #[must_use = "dropping the guard uninstalls the harness immediately"]
    pub fn install(&self) -> InterceptionGuard {
        let mut state = self.lock();
        state.installed = true;
        state.active_guards += 1;
        trace!("Request interception installed ({} guards)", state.active_guards);

        InterceptionGuard {
            state: Arc::clone(&self.state),
            generation: state.generation,
        }
    }

    /// Stop intercepting and forget any stub or observer, whatever guards are alive.
    ///
    /// Guards handed out before this call become inert.
    pub fn uninstall(&self) {
        self.lock().reset();
    }

    pub fn is_installed(&self) -> bool {
        self.lock().installed
    }

    /// Complete every intercepted call with this triple, replacing any previous stub.
    pub fn stub(
        &self,
        data: Option<Vec<u8>>,
        response: Option<ResponseMetadata>,
        error: Option<TransportError>,
    ) {
        self.stub_outcome(RawOutcome::new(data, response, error));
    }

    pub fn stub_outcome(&self, outcome: RawOutcome) {
        self.lock().stub = Some(outcome);
    }

    /// Hand every intercepted request to `observer` instead of completing it with the stub.
    ///
    /// The call still finishes, with an empty outcome, after the observer returns.
    pub fn observe_requests<F>(&self, observer: F)
    where
        F: Fn(&HttpRequest) + Send + Sync + 'static,
    {
        self.lock().observer = Some(Arc::new(observer));
    }

    /// Number of calls answered by the harness since it was created.
    pub fn intercepted_calls(&self) -> usize {
        self.intercepted.load(Ordering::SeqCst)
    }

    fn lock(&self) -> MutexGuard<'_, InterceptionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn interception(&self) -> Option<Interception> {
        let state = self.lock();
        if !state.installed {
            return None;
        }

        // Observer wins over stub
        let interception = match (&state.observer, &state.stub) {
            (Some(observer), _) => Interception::Observe(Arc::clone(observer)),
            (None, Some(stub)) => Interception::Complete(stub.clone()),
            (None, None) => Interception::Complete(RawOutcome::default()),
        };

        self.intercepted.fetch_add(1, Ordering::SeqCst);
        Some(interception)
    }
}

impl<T: Transport> Transport for InterceptingTransport<T> {
    async fn execute(&self, request: &HttpRequest) -> RawOutcome {
        match self.interception() {
            Some(Interception::Observe(observer)) => {
                trace!("Observed {} {}", request.method, request.url);
                observer(request);
                RawOutcome::default()
            }
            Some(Interception::Complete(outcome)) => {
                trace!("Stubbed {} {} with {}", request.method, request.url, outcome.shape());
                outcome
            }
            None => self.inner.execute(request).await,
        }
    }
}

/// Keeps an [`InterceptingTransport`] installed until dropped.
///
/// With several guards outstanding, only the last one to drop uninstalls.
#[must_use = "dropping the guard uninstalls the harness immediately"]
pub struct InterceptionGuard {
    state: Arc<Mutex<InterceptionState>>,
    generation: u64,
}

impl Drop for InterceptionGuard {
    fn drop(&mut self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.generation != self.generation {
            return;
        }

        state.active_guards = state.active_guards.saturating_sub(1);
        if state.active_guards == 0 {
            state.reset();
        }
    }
}
