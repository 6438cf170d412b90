use super::*;

#[test]
fn interview_endpoint_formats_id_path() {
    let id = InterviewId::from("abc123");
    assert_eq!(interview_endpoint("/api", &id), "/api/interviews/abc123");
    assert_eq!(interviews_endpoint("/api"), "/api/interviews");
}

#[test]
fn interview_endpoint_encodes_reserved_characters() {
    let id = InterviewId::from("a/b?c");
    assert_eq!(interview_endpoint("/api", &id), "/api/interviews/a%2Fb%3Fc");
}

#[test]
fn sign_out_endpoint_uses_auth_prefix() {
    assert_eq!(sign_out_endpoint("https://host.test/api"), "https://host.test/api/auth/sign-out");
}

#[test]
fn error_helpers_keep_source_text() {
    assert_eq!(transport_error("connection reset"), ActionError::Transport("connection reset".to_owned()));
    assert_eq!(decode_error("expected value"), ActionError::Decode("expected value".to_owned()));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_browser() {
    let id = InterviewId::from("abc123");
    assert_eq!(futures::executor::block_on(delete_interview("/api", &id)), Err(ActionError::Unavailable));
    assert_eq!(futures::executor::block_on(sign_out("/api")), Err(ActionError::Unavailable));
    assert_eq!(futures::executor::block_on(fetch_interviews("/api")), Err(ActionError::Unavailable));
}
