// Unit tests for the interception harness
// A counting inner transport proves whether a call was intercepted or delegated.

use super::{any_data, any_error, any_url, http_metadata};
use crate::intercept::InterceptingTransport;
use crate::outcome::RawOutcome;
use crate::request::HttpRequest;
use crate::transport::Transport;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

const DELEGATED_MARKER: &[u8] = b"delegated";

#[derive(Clone, Default)]
struct CountingTransport {
    calls: Arc<AtomicUsize>,
}

impl Transport for CountingTransport {
    async fn execute(&self, _request: &HttpRequest) -> RawOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        RawOutcome::new(Some(DELEGATED_MARKER.to_vec()), None, None)
    }
}

fn harness() -> (InterceptingTransport<CountingTransport>, Arc<AtomicUsize>) {
    let inner = CountingTransport::default();
    let calls = Arc::clone(&inner.calls);
    (InterceptingTransport::over(inner), calls)
}

fn any_request() -> HttpRequest {
    HttpRequest::get(any_url())
}

/// **VALUE**: Verifies that an installed harness never lets a call reach the inner transport.
///
/// **WHY THIS MATTERS**: Tests built on the harness must be network-free. A single leaked
/// call makes them slow and flaky.
///
/// **BUG THIS CATCHES**: Would catch if the installed flag were ignored on some path.
#[tokio::test]
async fn given_installed_harness_when_executing_then_inner_transport_is_not_called() {
    // GIVEN: An installed harness with a stub
    let (transport, inner_calls) = harness();
    let _guard = transport.install();
    transport.stub(Some(any_data()), Some(http_metadata()), None);

    // WHEN: Executing several requests
    for _ in 0..3 {
        transport.execute(&any_request()).await;
    }

    // THEN: All were intercepted, none delegated
    assert_eq!(inner_calls.load(Ordering::SeqCst), 0);
    assert_eq!(transport.intercepted_calls(), 3);
}

/// **VALUE**: Verifies that an uninstalled harness delegates to the wrapped transport.
///
/// **WHY THIS MATTERS**: Uninstalling must restore the client's normal behaviour.
///
/// **BUG THIS CATCHES**: Would catch if interception stayed active after teardown.
#[tokio::test]
async fn given_uninstalled_harness_when_executing_then_delegates_to_inner() {
    // GIVEN: A harness that was installed, stubbed, then uninstalled
    let (transport, inner_calls) = harness();
    let guard = transport.install();
    transport.stub(None, None, Some(any_error()));
    drop(guard);

    // WHEN: Executing a request
    let outcome = transport.execute(&any_request()).await;

    // THEN: Inner transport handled it
    assert_eq!(outcome.data.as_deref(), Some(DELEGATED_MARKER));
    assert_eq!(inner_calls.load(Ordering::SeqCst), 1);
    assert!(!transport.is_installed());
}

/// **VALUE**: Verifies that a fresh install carries nothing over from a previous one.
///
/// **WHY THIS MATTERS**: A stub leaking from one test into the next makes test results
/// depend on execution order.
///
/// **BUG THIS CATCHES**: Would catch if uninstall only flipped the flag without clearing
/// stub and observer.
#[tokio::test]
async fn given_reinstalled_harness_when_executing_then_no_residual_configuration() {
    // GIVEN: A first install with stub and observer, then uninstall
    let (transport, _) = harness();
    let observed = Arc::new(AtomicUsize::new(0));
    {
        let _guard = transport.install();
        transport.stub(Some(any_data()), Some(http_metadata()), None);
        let observed = Arc::clone(&observed);
        transport.observe_requests(move |_| {
            observed.fetch_add(1, Ordering::SeqCst);
        });
    }

    // WHEN: Installing again without configuring anything
    let _guard = transport.install();
    let outcome = transport.execute(&any_request()).await;

    // THEN: Empty outcome, observer not called
    assert_eq!(outcome, RawOutcome::default());
    assert_eq!(observed.load(Ordering::SeqCst), 0);
}

/// **VALUE**: Verifies that installing twice keeps the current configuration.
///
/// **WHY THIS MATTERS**: Setup helpers may install defensively; that must not wipe a stub
/// configured in between.
///
/// **BUG THIS CATCHES**: Would catch if install() reset state.
#[tokio::test]
async fn given_installed_harness_when_installed_again_then_stub_survives() {
    let (transport, _) = harness();
    let _first = transport.install();
    transport.stub(None, None, Some(any_error()));

    let _second = transport.install();
    let outcome = transport.execute(&any_request()).await;

    assert_eq!(outcome.error, Some(any_error()));
}

/// **VALUE**: Verifies that a new stub replaces the previous one.
///
/// **WHY THIS MATTERS**: Only one stub is ever active; tests restub between steps.
///
/// **BUG THIS CATCHES**: Would catch stubs being queued or merged.
#[tokio::test]
async fn given_two_stubs_when_executing_then_latest_wins() {
    let (transport, _) = harness();
    let _guard = transport.install();
    transport.stub(None, None, Some(any_error()));
    transport.stub_outcome(RawOutcome::succeeded(any_data(), http_metadata()));

    let outcome = transport.execute(&any_request()).await;

    assert!(outcome.error.is_none());
    assert_eq!(outcome.data, Some(any_data()));
}

/// **VALUE**: Verifies that an observer takes precedence over a stub and runs once per call.
///
/// **WHY THIS MATTERS**: Request-shape tests configure an observer; a stub left from setup
/// must not leak its data into those calls, and each call must be observed exactly once.
///
/// **BUG THIS CATCHES**: Would catch the stub being returned alongside the observer, or
/// the observer firing twice.
#[tokio::test]
async fn given_observer_and_stub_when_executing_then_observer_wins_once() {
    // GIVEN: Both a stub and an observer
    let (transport, _) = harness();
    let _guard = transport.install();
    transport.stub(Some(any_data()), Some(http_metadata()), None);
    let observed = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&observed);
    transport.observe_requests(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    // WHEN: Executing one request
    let outcome = transport.execute(&any_request()).await;

    // THEN: Observer fired once, stub ignored
    assert_eq!(observed.load(Ordering::SeqCst), 1);
    assert_eq!(outcome, RawOutcome::default());
}

/// **VALUE**: Verifies that an observer may reconfigure the harness it is running in.
///
/// **WHY THIS MATTERS**: The observer runs with the harness lock released. Holding it would
/// deadlock any observer that touches the harness.
///
/// **BUG THIS CATCHES**: Would catch the observer being invoked under the mutex.
#[tokio::test]
async fn given_observer_that_restubs_when_executing_then_does_not_deadlock() {
    let (transport, _) = harness();
    let _guard = transport.install();
    let handle = transport.clone();
    transport.observe_requests(move |_| {
        handle.stub(None, None, Some(any_error()));
    });

    transport.execute(&any_request()).await;

    assert!(transport.is_installed());
}

#[tokio::test]
async fn given_installed_harness_without_configuration_when_executing_then_empty_outcome() {
    let (transport, _) = harness();
    let _guard = transport.install();

    let outcome = transport.execute(&any_request()).await;

    assert_eq!(outcome, RawOutcome::default());
}

#[tokio::test]
async fn given_offline_harness_when_not_installed_then_fails_with_connect_error() {
    let transport = InterceptingTransport::offline();

    let outcome = transport.execute(&any_request()).await;

    assert!(outcome.error.expect("Should fail").is_connect());
}

/// **VALUE**: Verifies that the harness stays installed until the last guard drops.
///
/// **WHY THIS MATTERS**: Nested setup helpers each hold a guard. Dropping an inner helper's
/// guard must not switch interception off under the outer test.
///
/// **BUG THIS CATCHES**: Would catch any single guard drop tearing down the whole harness,
/// letting calls leak to the wrapped transport.
#[tokio::test]
async fn given_two_guards_when_first_dropped_then_interception_continues() {
    // GIVEN: Two installs with a stub in between
    let (transport, inner_calls) = harness();
    let first = transport.install();
    transport.stub(None, None, Some(any_error()));
    let second = transport.install();

    // WHEN: Dropping the first guard
    drop(first);
    let outcome = transport.execute(&any_request()).await;

    // THEN: Still intercepted with the same stub
    assert!(transport.is_installed());
    assert_eq!(outcome.error, Some(any_error()));
    assert_eq!(inner_calls.load(Ordering::SeqCst), 0);

    // WHEN: Dropping the last guard
    drop(second);
    let outcome = transport.execute(&any_request()).await;

    // THEN: Uninstalled and delegated
    assert!(!transport.is_installed());
    assert_eq!(outcome.data.as_deref(), Some(DELEGATED_MARKER));
    assert_eq!(inner_calls.load(Ordering::SeqCst), 1);
}

/// **VALUE**: Verifies that a guard from before an explicit uninstall cannot tear down a
/// later install.
///
/// **WHY THIS MATTERS**: Tests may call `uninstall()` directly and then install again while
/// an old guard is still in scope.
///
/// **BUG THIS CATCHES**: Would catch stale guards decrementing the new install's count.
#[tokio::test]
async fn given_stale_guard_when_dropped_after_reinstall_then_new_install_survives() {
    // GIVEN: A guard outliving an explicit uninstall, then a fresh install
    let (transport, inner_calls) = harness();
    let stale = transport.install();
    transport.uninstall();
    let _current = transport.install();
    transport.stub(None, None, Some(any_error()));

    // WHEN: The stale guard drops
    drop(stale);
    let outcome = transport.execute(&any_request()).await;

    // THEN: Current install and its stub are untouched
    assert!(transport.is_installed());
    assert_eq!(outcome.error, Some(any_error()));
    assert_eq!(inner_calls.load(Ordering::SeqCst), 0);
}
