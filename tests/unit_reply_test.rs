use beryl::core::BerylError;
use beryl::core::protocol::{DecodeHint, Reply, RespFrame};
use bytes::Bytes;

#[tokio::test]
async fn test_raw_hint_keeps_bulk_payload_bytes() {
    let reply = Reply::decode(
        RespFrame::BulkString(Bytes::from_static(b"payload")),
        DecodeHint::Raw,
    )
    .unwrap();
    assert_eq!(reply, Reply::Data(Bytes::from_static(b"payload")));
}

#[tokio::test]
async fn test_utf8_hint_decodes_bulk_payload_to_text() {
    let reply = Reply::decode(
        RespFrame::BulkString(Bytes::from_static("héllo".as_bytes())),
        DecodeHint::Utf8,
    )
    .unwrap();
    assert_eq!(reply, Reply::Text("héllo".to_string()));
}

#[tokio::test]
async fn test_utf8_hint_rejects_invalid_bytes() {
    let err = Reply::decode(
        RespFrame::BulkString(Bytes::from_static(b"\xff\xfe")),
        DecodeHint::Utf8,
    )
    .unwrap_err();
    assert_eq!(err, BerylError::InvalidUtf8);
}

#[tokio::test]
async fn test_utf8_hint_applies_recursively_to_arrays() {
    let reply = Reply::decode(
        RespFrame::Array(vec![
            RespFrame::BulkString(Bytes::from_static(b"a")),
            RespFrame::Integer(1),
            RespFrame::Null,
        ]),
        DecodeHint::Utf8,
    )
    .unwrap();
    assert_eq!(
        reply,
        Reply::Array(vec![
            Reply::Text("a".to_string()),
            Reply::Integer(1),
            Reply::Null,
        ])
    );
}

#[tokio::test]
async fn test_error_frame_becomes_server_error() {
    let err = Reply::decode(
        RespFrame::Error("ERR unknown command".to_string()),
        DecodeHint::Raw,
    )
    .unwrap_err();
    assert_eq!(err, BerylError::Server("ERR unknown command".to_string()));
}

#[tokio::test]
async fn test_inherit_resolves_against_default() {
    assert_eq!(
        DecodeHint::Inherit.resolve(DecodeHint::Utf8),
        DecodeHint::Utf8
    );
    assert_eq!(DecodeHint::Inherit.resolve(DecodeHint::Raw), DecodeHint::Raw);
    // An explicit hint always wins over the connection default.
    assert_eq!(DecodeHint::Raw.resolve(DecodeHint::Utf8), DecodeHint::Raw);
}
