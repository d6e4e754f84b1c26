use super::*;
use assert_matches::assert_matches;

#[test]
fn test_log() {
    let err = Error::Io(std::io::Error::other("test"));
    let mut buf = Vec::new();
    err.log_to(&mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "error: test\n");
}

#[test]
fn test_suite_failed() {
    let err = Error::SuiteFailed { failed: 2, total: 10 };
    assert_eq!(err.to_string(), "2 of 10 suite checks failed");
}

#[test]
fn test_suite() {
    let err = Error::Suite {
        path: "suites/missing.yaml".into(),
        source: ConfigError::Message("not found".into()),
    };
    assert_eq!(err.to_string(), r#"failed to load suite "suites/missing.yaml": not found"#);
    assert_matches!(std::error::Error::source(&err), Some(_));
}

#[test]
fn test_broken_pipe() {
    let err = Error::from(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
    assert!(err.is_broken_pipe());
    assert!(!Error::MissingPattern.is_broken_pipe());
    assert!(!Error::Io(std::io::Error::other("test")).is_broken_pipe());
}
