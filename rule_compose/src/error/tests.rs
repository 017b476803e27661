//! Unit tests for error rendering and conversions.

use rstest::rstest;
use std::sync::Arc;

use super::ComposeError;
use crate::{ComposeResult, ComposeResultExt};

#[rstest]
#[case::cycle(
    ComposeError::CyclicExtends { cycle: String::from("a -> b -> a") },
    "cyclic extends detected: a -> b -> a"
)]
#[case::unknown(
    ComposeError::UnknownPreset { name: String::from("lite") },
    "unknown preset 'lite'"
)]
fn renders_human_readable_messages(#[case] err: ComposeError, #[case] expected: &str) {
    assert_eq!(err.to_string(), expected);
}

#[rstest]
fn file_errors_name_the_path() {
    let err = ComposeError::File {
        path: "configs/base.toml".into(),
        source: Box::new(std::io::Error::other("boom")),
    };
    let message = err.to_string();
    assert!(message.contains("configs/base.toml"), "{message}");
    assert!(message.ends_with("boom"), "{message}");
}

#[rstest]
fn json_errors_convert_into_decode_failures() {
    let result: ComposeResult<Vec<String>> =
        serde_json::from_str::<Vec<String>>("{").into_compose();
    let Err(err) = result else {
        panic!("malformed JSON must fail");
    };
    assert!(matches!(&*err, ComposeError::Decode { .. }));
    assert_eq!(Arc::strong_count(&err), 1);
}

#[rstest]
#[case::not_found(std::io::ErrorKind::NotFound)]
#[case::invalid_data(std::io::ErrorKind::InvalidData)]
fn file_io_errors_keep_their_kind(#[case] kind: std::io::ErrorKind) {
    let err = ComposeError::file_io(std::path::Path::new("lite.json"), kind, "no such parent");
    let ComposeError::File { path, source } = &*err else {
        panic!("expected a file error, got {err}");
    };
    assert_eq!(path, std::path::Path::new("lite.json"));
    assert_eq!(
        source.downcast_ref::<std::io::Error>().map(std::io::Error::kind),
        Some(kind)
    );
    assert!(err.to_string().ends_with("no such parent"), "{err}");
}
