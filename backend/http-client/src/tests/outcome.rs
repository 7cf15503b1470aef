use super::{any_data, any_error, generic_metadata, http_metadata, http_response};
use crate::outcome::{OutcomeShape, RawOutcome, ResponseKind};

/// **VALUE**: Verifies that the default outcome is the all-absent triple.
///
/// **WHY THIS MATTERS**: The harness finishes observed and unstubbed calls with the
/// default outcome. It must classify as a failure, never as a success.
///
/// **BUG THIS CATCHES**: Would catch if Default started filling in placeholder data.
#[test]
fn given_default_outcome_when_inspected_then_everything_is_absent() {
    let outcome = RawOutcome::default();

    assert_eq!(
        outcome.shape(),
        OutcomeShape {
            has_data: false,
            response: ResponseKind::Absent,
            has_error: false,
        }
    );
    assert!(outcome.classify().unwrap_err().is_unexpected_representation());
}

#[test]
fn given_succeeded_constructor_when_classified_then_succeeds() {
    let outcome = RawOutcome::succeeded(any_data(), http_response(201));

    let (data, response) = outcome.classify().expect("Should succeed");
    assert_eq!(data, any_data());
    assert_eq!(response.status.as_u16(), 201);
}

#[test]
fn given_failed_constructor_when_classified_then_reports_error() {
    let outcome = RawOutcome::failed(any_error());

    let error = outcome.classify().unwrap_err();
    assert_eq!(error.transport_error(), Some(&any_error()));
}

/// **VALUE**: Verifies the shape summary distinguishes response kinds and error presence.
///
/// **WHY THIS MATTERS**: Unexpected-representation errors carry this shape so a broken
/// transport can be diagnosed from the error message alone.
///
/// **BUG THIS CATCHES**: Would catch generic metadata being reported as HTTP or an
/// error being missed.
#[test]
fn given_mixed_outcomes_when_shaped_then_reflect_presence_and_kind() {
    let with_generic = RawOutcome::new(Some(any_data()), Some(generic_metadata()), None);
    let with_everything = RawOutcome::new(Some(any_data()), Some(http_metadata()), Some(any_error()));

    assert_eq!(with_generic.shape().response, ResponseKind::Generic);
    assert!(!with_generic.shape().has_error);
    assert_eq!(with_everything.shape().response, ResponseKind::Http);
    assert!(with_everything.shape().has_error);
}

#[test]
fn given_shape_when_formatted_then_names_each_field() {
    let shape = RawOutcome::new(Some(any_data()), Some(generic_metadata()), None).shape();

    assert_eq!(
        shape.to_string(),
        "data present, response generic, error absent"
    );
}

/// **VALUE**: Verifies that both metadata kinds expose their URL and only HTTP metadata
/// converts to an HTTP response.
///
/// **WHY THIS MATTERS**: Diagnostics report which URL produced an unusable response,
/// whichever kind it was.
///
/// **BUG THIS CATCHES**: Would catch `as_http()` accepting generic metadata.
#[test]
fn given_both_metadata_kinds_when_inspected_then_url_shared_and_only_http_converts() {
    let http = http_metadata();
    let generic = generic_metadata();

    assert_eq!(http.url(), &super::any_url());
    assert_eq!(generic.url(), &super::any_url());
    assert_eq!(http.as_http().map(|r| r.status.as_u16()), Some(200));
    assert!(generic.as_http().is_none());
}
