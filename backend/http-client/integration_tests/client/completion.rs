use crate::helpers::{any_request, http_response, make_sut};

use http_client::{HttpClient, HttpResult, ResponseMetadata};

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::oneshot;

/// **VALUE**: Verifies that `perform_with` invokes its completion exactly once.
///
/// **WHY THIS MATTERS**: Callback-style callers resume work in the completion. Zero calls
/// hangs them, two calls runs their continuation twice.
///
/// **BUG THIS CATCHES**: Would catch the completion being dropped or called per outcome field.
#[tokio::test]
async fn given_stub_when_performing_with_completion_then_completion_runs_once() {
    // GIVEN: A stubbed success
    let (sut, transport) = make_sut();
    let _guard = transport.install();
    transport.stub(
        Some(b"payload".to_vec()),
        Some(ResponseMetadata::Http(http_response(200))),
        None,
    );
    let calls = Arc::new(AtomicUsize::new(0));
    let (tx, rx) = oneshot::channel::<HttpResult>();

    // WHEN: Performing with a completion
    let counter = Arc::clone(&calls);
    let handle = sut.perform_with(any_request(), move |result| {
        counter.fetch_add(1, Ordering::SeqCst);
        let _ = tx.send(result);
    });
    handle.await.expect("Completion task should not panic");

    // THEN: Exactly one invocation with the classified result
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    let result = rx.await.expect("Completion should deliver a result");
    assert_eq!(result.expect("Should succeed").0, b"payload");
}

/// **VALUE**: Verifies that an observed call still completes exactly once, and the
/// observer also fires exactly once.
///
/// **WHY THIS MATTERS**: The observer path replaces the normal completion path; if it
/// forgot to finish the call, callers awaiting completion would hang.
///
/// **BUG THIS CATCHES**: Would catch the observer path skipping completion or completing
/// twice.
#[tokio::test]
async fn given_observer_when_performing_with_completion_then_both_fire_once() {
    let (sut, transport) = make_sut();
    let _guard = transport.install();
    let observed = Arc::new(AtomicUsize::new(0));
    let completed = Arc::new(AtomicUsize::new(0));

    let observer_count = Arc::clone(&observed);
    transport.observe_requests(move |_| {
        observer_count.fetch_add(1, Ordering::SeqCst);
    });

    let completion_count = Arc::clone(&completed);
    sut.perform_with(any_request(), move |_| {
        completion_count.fetch_add(1, Ordering::SeqCst);
    })
    .await
    .expect("Completion task should not panic");

    assert_eq!(observed.load(Ordering::SeqCst), 1);
    assert_eq!(completed.load(Ordering::SeqCst), 1);
}

/// **VALUE**: Verifies that concurrent calls each complete once and independently.
///
/// **WHY THIS MATTERS**: No ordering is promised between calls, but none may be lost.
///
/// **BUG THIS CATCHES**: Would catch shared state between in-flight calls.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn given_many_concurrent_calls_when_performing_then_each_completes_once() {
    let (sut, transport) = make_sut();
    let _guard = transport.install();
    transport.stub(None, None, None);
    let completed = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..32)
        .map(|_| {
            let completed = Arc::clone(&completed);
            sut.perform_with(any_request(), move |result| {
                assert!(result.is_err());
                completed.fetch_add(1, Ordering::SeqCst);
            })
        })
        .collect();
    for handle in handles {
        handle.await.expect("Completion task should not panic");
    }

    assert_eq!(completed.load(Ordering::SeqCst), 32);
    assert_eq!(transport.intercepted_calls(), 32);
}

#[tokio::test]
async fn given_uninstalled_offline_harness_when_performing_then_fails_without_network() {
    let (sut, transport) = make_sut();

    let error = sut.perform(any_request()).await.expect_err("Offline should fail");

    assert!(error.transport_error().expect("Transport error").is_connect());
    assert_eq!(transport.intercepted_calls(), 0);
}

/// **VALUE**: Verifies that the client exposes the very transport it was built with.
///
/// **WHY THIS MATTERS**: Tests configure the harness through the client when they do not
/// keep a separate handle; that only works if both share one harness.
///
/// **BUG THIS CATCHES**: Would catch the client wrapping a copy with separate state.
#[tokio::test]
async fn given_client_when_configuring_through_its_transport_then_calls_are_intercepted() {
    let (sut, _) = make_sut();
    let _guard = sut.transport().install();
    sut.transport().stub(None, None, None);

    let error = sut.perform(any_request()).await.expect_err("Empty stub should fail");

    assert!(error.is_unexpected_representation());
    assert_eq!(sut.transport().intercepted_calls(), 1);
}
